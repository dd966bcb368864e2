//! Summarizer — provider-backed text summaries with a local fallback
//!
//! The provider is optional. Without one, or when a call fails or returns an
//! unusable summary, the deterministic [`fallback_summary`] is used instead.
//! Provider errors are logged and never reach the caller.

pub mod fallback;
pub mod gemini;

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

pub use fallback::fallback_summary;
pub use gemini::GeminiClient;

use crate::config::SummarizerConfig;

const PROMPT_PREFIX: &str = "Summarize the following text concisely in 2-5 sentences. \
Do not just copy it; make the summary clear and informative.";

/// Instruction prefix, blank line, then the raw text
pub fn build_prompt(text: &str) -> String {
    format!("{}\n\n{}", PROMPT_PREFIX, text)
}

/// Failure of a single provider call
#[derive(Debug)]
pub enum ProviderError {
    /// Transport failure or timeout
    Request(String),
    /// Non-2xx response
    Status { status: u16, body: String },
    /// Response body was not the expected JSON
    Parse(String),
    /// Well-formed response without any text
    EmptyResponse,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Request(e) => write!(f, "request failed: {}", e),
            ProviderError::Status { status, body } => write!(f, "HTTP {}: {}", status, body),
            ProviderError::Parse(e) => write!(f, "invalid response: {}", e),
            ProviderError::EmptyResponse => write!(f, "response contained no text"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// External text generator used for summaries
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Identifier used in logs
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Why the fallback was used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    NotConfigured,
    ProviderFailed,
    /// Provider answered, but the summary was empty or too long
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarySource {
    Provider(String),
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub text: String,
    pub source: SummarySource,
}

impl Summary {
    fn fallback(input: &str, reason: FallbackReason) -> Self {
        Self {
            text: fallback_summary(input),
            source: SummarySource::Fallback(reason),
        }
    }
}

pub struct Summarizer {
    provider: Option<Arc<dyn SummaryProvider>>,
    max_length_ratio: Option<f64>,
}

impl Summarizer {
    pub fn new(provider: Option<Arc<dyn SummaryProvider>>, max_length_ratio: Option<f64>) -> Self {
        Self {
            provider,
            max_length_ratio,
        }
    }

    /// Build from config, wiring the Gemini client when an API key is present
    pub fn from_config(config: &SummarizerConfig) -> Result<Self, String> {
        let provider = GeminiClient::from_config(config)?
            .map(|client| Arc::new(client) as Arc<dyn SummaryProvider>);
        Ok(Self::new(provider, config.max_length_ratio))
    }

    pub fn provider_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn summarize(&self, text: &str) -> Summary {
        let provider = match &self.provider {
            Some(p) => p,
            None => return Summary::fallback(text, FallbackReason::NotConfigured),
        };

        let generated = match provider.generate(&build_prompt(text)).await {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[SUMMARIZER] {} error: {}", provider.name(), e);
                return Summary::fallback(text, FallbackReason::ProviderFailed);
            }
        };

        let summary = generated.trim();
        if let Some(reason) = self.reject_reason(text, summary) {
            log::info!("[SUMMARIZER] Discarding {} summary: {}", provider.name(), reason);
            return Summary::fallback(text, FallbackReason::Rejected);
        }

        Summary {
            text: summary.to_string(),
            source: SummarySource::Provider(provider.name().to_string()),
        }
    }

    fn reject_reason(&self, input: &str, summary: &str) -> Option<String> {
        if summary.is_empty() {
            return Some("empty summary".to_string());
        }

        let ratio = self.max_length_ratio?;
        let input_len = input.chars().count();
        let summary_len = summary.chars().count();
        if summary_len as f64 > ratio * input_len as f64 {
            return Some(format!(
                "{} chars exceeds {:.0}% of {} input chars",
                summary_len,
                ratio * 100.0,
                input_len
            ));
        }
        None
    }
}
