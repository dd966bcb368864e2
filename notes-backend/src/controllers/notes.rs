//! Notes REST API — create, list and delete.
//!
//! There is no validation beyond the JSON shape: an empty `text` is stored
//! as-is, and deleting an unknown id still reports success.

use actix_web::{web, HttpResponse, Responder};
use notes_types::{CreateNoteRequest, DeleteResponse, ErrorResponse};

use crate::AppState;

/// Create a note
async fn create_note(
    data: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> impl Responder {
    let CreateNoteRequest { text, tags, summary } = body.into_inner();

    match data.notes.create(text, tags, summary) {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => {
            log::error!("[NOTES] Failed to create note: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(e))
        }
    }
}

/// List every note in insertion order
async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.notes.list())
}

/// Delete a note by id
async fn delete_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match data.notes.delete(&id) {
        Ok(_) => HttpResponse::Ok().json(DeleteResponse::deleted()),
        Err(e) => {
            log::error!("[NOTES] Failed to delete note {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(e))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notes")
            .route("", web::post().to(create_note))
            .route("", web::get().to(list_notes))
            .route("/{id}", web::delete().to(delete_note)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::json_config;
    use crate::test_support::test_state;
    use actix_web::{http::StatusCode, test, App};
    use notes_types::Note;
    use serde_json::json;

    macro_rules! notes_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .app_data(json_config())
                    .configure(config),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_trims_tags() {
        let (state, _dir) = test_state();
        let app = notes_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/notes")
            .set_json(json!({ "text": "Hello. World. Again.", "tags": [" a ", " b"] }))
            .to_request();
        let note: Note = test::call_and_read_body_json(&app, req).await;

        assert_eq!(note.text, "Hello. World. Again.");
        assert_eq!(note.tags, vec!["a", "b"]);
        assert_eq!(note.summary, "");
        assert!(!note.id.is_empty());
    }

    #[actix_web::test]
    async fn test_create_then_list() {
        let (state, _dir) = test_state();
        let app = notes_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/notes")
            .set_json(json!({ "text": "first", "summary": "1st" }))
            .to_request();
        let created: Note = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.summary, "1st");

        let req = test::TestRequest::get().uri("/api/notes").to_request();
        let listed: Vec<Note> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(listed.iter().filter(|n| n.id == created.id).count(), 1);
        assert_eq!(listed, vec![created]);
    }

    #[actix_web::test]
    async fn test_create_without_text() {
        let (state, _dir) = test_state();
        let app = notes_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/notes")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let note: Note = test::read_body_json(resp).await;
        assert_eq!(note.text, "");
    }

    #[actix_web::test]
    async fn test_create_rejects_non_list_tags() {
        let (state, _dir) = test_state();
        let app = notes_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/notes")
            .set_json(json!({ "text": "x", "tags": "not-a-list" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(!body.error.is_empty());
    }

    #[actix_web::test]
    async fn test_delete_existing_note() {
        let (state, _dir) = test_state();
        let a = state.notes.create("a".to_string(), None, None).unwrap();
        let b = state.notes.create("b".to_string(), None, None).unwrap();
        let c = state.notes.create("c".to_string(), None, None).unwrap();
        let app = notes_app!(state);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/notes/{}", b.id))
            .to_request();
        let resp: DeleteResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.message, "Deleted");

        let req = test::TestRequest::get().uri("/api/notes").to_request();
        let listed: Vec<Note> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, vec![a, c]);
    }

    #[actix_web::test]
    async fn test_delete_unknown_note_still_succeeds() {
        let (state, _dir) = test_state();
        let a = state.notes.create("a".to_string(), None, None).unwrap();
        let app = notes_app!(state);

        let req = test::TestRequest::delete()
            .uri("/api/notes/does-not-exist")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: DeleteResponse = test::read_body_json(resp).await;
        assert_eq!(body.message, "Deleted");

        let req = test::TestRequest::get().uri("/api/notes").to_request();
        let listed: Vec<Note> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, vec![a]);
    }

    #[actix_web::test]
    async fn test_notes_survive_restart() {
        let (state, dir) = test_state();
        let app = notes_app!(state);

        for text in ["one", "two", "three"] {
            let req = test::TestRequest::post()
                .uri("/api/notes")
                .set_json(json!({ "text": text, "tags": ["t"] }))
                .to_request();
            let _: Note = test::call_and_read_body_json(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/api/notes").to_request();
        let before: Vec<Note> = test::call_and_read_body_json(&app, req).await;

        // Fresh store over the same file, as after a process restart
        let reloaded = crate::notes::NoteStore::load(dir.path().join("notes.json")).unwrap();
        assert_eq!(reloaded.list(), before);
    }
}
