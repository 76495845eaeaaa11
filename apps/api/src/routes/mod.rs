pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::ats::handlers as ats_handlers;
use crate::enhance::handlers as enhance_handlers;
use crate::export::handlers as export_handlers;
use crate::session::handlers as session_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Appearance catalogs
        .route(
            "/api/v1/appearance",
            get(session_handlers::handle_appearance_catalog),
        )
        // Session API
        .route(
            "/api/v1/sessions",
            post(session_handlers::handle_create_session),
        )
        .route(
            "/api/v1/sessions/:id",
            get(session_handlers::handle_get_session)
                .delete(session_handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/patches",
            post(session_handlers::handle_apply_patch),
        )
        .route(
            "/api/v1/sessions/:id/appearance",
            put(session_handlers::handle_update_appearance),
        )
        .route(
            "/api/v1/sessions/:id/preview",
            get(session_handlers::handle_preview),
        )
        // AI API
        .route(
            "/api/v1/sessions/:id/enhance",
            post(enhance_handlers::handle_enhance),
        )
        .route(
            "/api/v1/sessions/:id/ats-check",
            post(ats_handlers::handle_ats_check),
        )
        // Export API
        .route(
            "/api/v1/sessions/:id/export/pdf",
            post(export_handlers::handle_export_pdf),
        )
        .route(
            "/api/v1/sessions/:id/export/docx",
            post(export_handlers::handle_export_docx),
        )
        .route(
            "/api/v1/sessions/:id/export/html",
            post(export_handlers::handle_export_html),
        )
        .with_state(state)
}
