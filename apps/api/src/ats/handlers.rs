//! Axum route handler for ATS feedback.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::feedback::AtsFeedback;
use crate::render;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AtsCheckRequest {
    #[serde(default)]
    pub job_description: String,
}

/// POST /api/v1/sessions/:id/ats-check
///
/// Busy-gated against the other AI operation. Previous feedback is cleared
/// before the call; on failure it stays cleared rather than reverting.
pub async fn handle_ats_check(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AtsCheckRequest>,
) -> Result<Json<AtsFeedback>, AppError> {
    let session = state.sessions.get(&id)?;
    let _exclusive = session.begin_ai()?;

    let (document, config) = {
        let mut data = session.write();
        data.feedback = None;
        (data.editor.document.clone(), data.render_config.clone())
    };

    let resume_text = render::text::plain(&render::layout::layout(&document, &config));
    let feedback =
        super::request_feedback(&state.llm, &resume_text, &request.job_description).await?;

    session.write().feedback = Some(feedback.clone());
    info!("stored ATS feedback for session {id} (score {})", feedback.score);
    Ok(Json(feedback))
}
