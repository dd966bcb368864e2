use actix_web::{web, HttpResponse, Responder};
use notes_types::{ErrorResponse, SummarizeRequest, SummarizeResponse};

use crate::summarizer::SummarySource;
use crate::AppState;

async fn summarize(
    state: web::Data<AppState>,
    body: web::Json<SummarizeRequest>,
) -> impl Responder {
    let text = match body.into_inner().text {
        Some(t) if !t.is_empty() => t,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse::new("No text provided"));
        }
    };

    let summary = state.summarizer.summarize(&text).await;

    match &summary.source {
        SummarySource::Provider(name) => {
            log::debug!("[SUMMARIZER] Summarized {} chars with {}", text.len(), name)
        }
        SummarySource::Fallback(reason) => {
            log::debug!("[SUMMARIZER] Summarized {} chars locally ({:?})", text.len(), reason)
        }
    }

    HttpResponse::Ok().json(SummarizeResponse {
        summary: summary.text,
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/summarize")
            .route("", web::post().to(summarize)),
    );
}
