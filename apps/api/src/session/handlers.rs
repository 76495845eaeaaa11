//! Axum route handlers for the Session API.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::editor::{self, DocumentPatch};
use crate::errors::AppError;
use crate::models::appearance::{ColorScheme, Font, RenderConfig, TemplateKind};
use crate::models::feedback::AtsFeedback;
use crate::models::resume::ResumeDocument;
use crate::render;
use crate::session::{Session, SessionData};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub document: ResumeDocument,
    pub render_config: RenderConfig,
    pub feedback: Option<AtsFeedback>,
}

impl SessionResponse {
    fn from_session(session: &Session, data: &SessionData) -> Self {
        SessionResponse {
            session_id: session.id,
            created_at: session.created_at,
            document: data.editor.document.clone(),
            render_config: data.render_config.clone(),
            feedback: data.feedback.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PatchResponse {
    pub document: ResumeDocument,
    /// Present when the patch appended an entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_id: Option<u64>,
}

/// Partial appearance update. Absent fields keep their current value; colors
/// and fonts are named by their catalog keys.
#[derive(Debug, Deserialize)]
pub struct AppearanceUpdate {
    pub template: Option<TemplateKind>,
    pub color: Option<String>,
    pub font: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateKind,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AppearanceCatalog {
    pub templates: Vec<TemplateInfo>,
    pub colors: Vec<ColorScheme>,
    pub fonts: Vec<Font>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/appearance
///
/// The full selection space for templates, color schemes, and fonts.
pub async fn handle_appearance_catalog() -> Json<AppearanceCatalog> {
    Json(AppearanceCatalog {
        templates: TemplateKind::all()
            .into_iter()
            .map(|t| TemplateInfo {
                id: t,
                name: t.label(),
            })
            .collect(),
        colors: ColorScheme::catalog(),
        fonts: Font::catalog(),
    })
}

/// POST /api/v1/sessions
///
/// Creates a session seeded with the starter document and default appearance.
pub async fn handle_create_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.sessions.create();
    let data = session.read();

    tracing::info!(session_id = %session.id, "created session");

    Json(SessionResponse::from_session(&session, &data))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.sessions.get(&session_id)?;
    let data = session.read();
    Ok(Json(SessionResponse::from_session(&session, &data)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(&session_id)?;
    tracing::info!(%session_id, "deleted session");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/patches
///
/// Applies one form-editor patch and returns the updated document.
pub async fn handle_apply_patch(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(patch): Json<DocumentPatch>,
) -> Result<Json<PatchResponse>, AppError> {
    let session = state.sessions.get(&session_id)?;
    let mut data = session.write();
    let outcome = editor::apply(&mut data.editor, patch);
    Ok(Json(PatchResponse {
        document: data.editor.document.clone(),
        added_id: outcome.added_id,
    }))
}

/// PUT /api/v1/sessions/:id/appearance
///
/// Updates any subset of template, color scheme, and font. Unknown catalog
/// names reject the whole update.
pub async fn handle_update_appearance(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(update): Json<AppearanceUpdate>,
) -> Result<Json<RenderConfig>, AppError> {
    let session = state.sessions.get(&session_id)?;

    // Resolve catalog names before touching the config so a bad name cannot
    // leave a partial update behind.
    let color = match &update.color {
        Some(name) => Some(
            ColorScheme::by_name(name)
                .ok_or_else(|| AppError::Validation(format!("unknown color scheme '{name}'")))?,
        ),
        None => None,
    };
    let font = match &update.font {
        Some(id) => Some(
            Font::by_id(id).ok_or_else(|| AppError::Validation(format!("unknown font '{id}'")))?,
        ),
        None => None,
    };

    let mut data = session.write();
    if let Some(template) = update.template {
        data.render_config.template = template;
    }
    if let Some(color) = color {
        data.render_config.color = color;
    }
    if let Some(font) = font {
        data.render_config.font = font;
    }
    Ok(Json(data.render_config.clone()))
}

/// GET /api/v1/sessions/:id/preview
///
/// The rendered page fragment under the session's current appearance.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let session = state.sessions.get(&session_id)?;
    let data = session.read();
    let layout = render::layout::layout(&data.editor.document, &data.render_config);
    Ok(Html(render::html::page(&layout)))
}
