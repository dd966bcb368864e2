use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod notes;
mod summarizer;

use config::Config;
use notes::NoteStore;
use summarizer::Summarizer;

pub struct AppState {
    pub config: Config,
    pub notes: Arc<NoteStore>,
    pub summarizer: Arc<Summarizer>,
    /// Server start time for uptime calculation
    pub started_at: std::time::Instant,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Notes backend v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();
    let port = config.port;

    // A malformed store file is fatal: refuse to start rather than overwrite it
    log::info!("Loading notes from {}", config.notes_file.display());
    let notes = match NoteStore::load(&config.notes_file) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            log::error!("Failed to load notes: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e));
        }
    };

    let summarizer = Summarizer::from_config(&config.summarizer).map_err(|e| {
        log::error!("Failed to initialize summarizer: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;
    if summarizer.provider_configured() {
        log::info!(
            "Summarizer using Gemini model {}",
            config.summarizer.model
        );
    } else {
        log::warn!(
            "{} not set, summaries will use the local fallback",
            config::env_vars::GEMINI_API_KEY
        );
    }
    let summarizer = Arc::new(summarizer);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                config: config.clone(),
                notes: Arc::clone(&notes),
                summarizer: Arc::clone(&summarizer),
                started_at: std::time::Instant::now(),
            }))
            .app_data(controllers::json_config())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config)
            .configure(controllers::summarize::config)
    })
    .bind(("0.0.0.0", port))?
    .run();

    log::info!("Server running on port {}", port);

    // Get server handle for graceful shutdown
    let server_handle = server.handle();

    // Spawn Ctrl+C handler
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }

        log::info!("Shutdown complete");
    });

    server.await
}

#[cfg(test)]
mod test_support {
    use super::*;
    use tempfile::TempDir;

    /// App state over a fresh store in a temp dir, without a provider.
    /// Keep the `TempDir` alive for the duration of the test.
    pub fn test_state() -> (AppState, TempDir) {
        test_state_with(Summarizer::new(None, None))
    }

    pub fn test_state_with(summarizer: Summarizer) -> (AppState, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let config = Config::from_lookup(|key| match key {
            config::env_vars::NOTES_FILE => Some(path.to_string_lossy().to_string()),
            _ => None,
        });

        let state = AppState {
            notes: Arc::new(NoteStore::load(&config.notes_file).unwrap()),
            summarizer: Arc::new(summarizer),
            config,
            started_at: std::time::Instant::now(),
        };
        (state, dir)
    }
}
