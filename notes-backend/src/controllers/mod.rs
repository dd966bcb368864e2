use actix_web::{error, web, HttpResponse};
use notes_types::ErrorResponse;

pub mod health;
pub mod notes;
pub mod summarize;

/// JSON extractor config shared by every route: malformed bodies answer
/// 400 with the same `{ "error": ... }` shape the handlers use.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected JSON body: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}
