use actix_web::{web, HttpResponse, Responder};
use notes_types::HealthStatus;

use crate::AppState;

/// Version from Cargo.toml, available at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const LIVENESS_MESSAGE: &str = "Notes API server is running! 🚀";

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(liveness)));
    cfg.service(web::resource("/api/health").route(web::get().to(health_check)));
}

async fn liveness() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}

async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let summarizer_configured = state.summarizer.provider_configured();

    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        version: VERSION.to_string(),
        notes: state.notes.len(),
        summarizer_configured,
        model: summarizer_configured.then(|| state.config.summarizer.model.clone()),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}
