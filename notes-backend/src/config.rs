use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    /// Path of the notes JSON file, relative to the working directory unless absolute
    pub const NOTES_FILE: &str = "NOTES_FILE";
    /// Credential for the Gemini API. Unset or empty disables the provider.
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    pub const GEMINI_API_URL: &str = "GEMINI_API_URL";
    pub const SUMMARIZER_TIMEOUT_SECS: &str = "SUMMARIZER_TIMEOUT_SECS";
    /// When set, provider summaries longer than this fraction of the input are discarded.
    pub const SUMMARY_MAX_LENGTH_RATIO: &str = "SUMMARY_MAX_LENGTH_RATIO";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 5000;
    pub const NOTES_FILE: &str = "notes.json";
    pub const GEMINI_MODEL: &str = "gemini-1.5-flash";
    pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
    pub const SUMMARIZER_TIMEOUT_SECS: u64 = 30;
}

/// Settings for the external summarization provider
#[derive(Clone, Debug)]
pub struct SummarizerConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
    pub timeout_secs: u64,
    pub max_length_ratio: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub notes_file: PathBuf,
    pub summarizer: SummarizerConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset, same as a missing variable
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let max_length_ratio = parse_or_warn::<f64>(&var, env_vars::SUMMARY_MAX_LENGTH_RATIO)
            .filter(|ratio| {
                let valid = *ratio > 0.0;
                if !valid {
                    log::warn!(
                        "{} must be positive, ignoring {}",
                        env_vars::SUMMARY_MAX_LENGTH_RATIO,
                        ratio
                    );
                }
                valid
            });

        Self {
            port: parse_or_warn(&var, env_vars::PORT).unwrap_or(defaults::PORT),
            notes_file: var(env_vars::NOTES_FILE)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(defaults::NOTES_FILE)),
            summarizer: SummarizerConfig {
                api_key: var(env_vars::GEMINI_API_KEY),
                model: var(env_vars::GEMINI_MODEL)
                    .unwrap_or_else(|| defaults::GEMINI_MODEL.to_string()),
                api_url: var(env_vars::GEMINI_API_URL)
                    .unwrap_or_else(|| defaults::GEMINI_API_URL.to_string()),
                timeout_secs: parse_or_warn(&var, env_vars::SUMMARIZER_TIMEOUT_SECS)
                    .unwrap_or(defaults::SUMMARIZER_TIMEOUT_SECS),
                max_length_ratio,
            },
        }
    }
}

/// Parse a variable, logging and discarding values that don't parse
fn parse_or_warn<T>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = var(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Invalid {} value {:?} ({}), using default", key, raw, e);
            None
        }
    }
}
