//! Axum route handler for AI enhancement.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::editor::{self, DocumentPatch};
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub document: ResumeDocument,
}

/// POST /api/v1/sessions/:id/enhance
///
/// Busy-gated: while this runs, no other AI operation may start for the
/// session. Stale ATS feedback is cleared up front and stays cleared even if
/// the call fails.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let session = state.sessions.get(&id)?;
    let _exclusive = session.begin_ai()?;

    let snapshot = {
        let mut data = session.write();
        data.feedback = None;
        data.editor.document.clone()
    };

    let enhanced =
        super::request_enhancement(&state.llm, &snapshot, &request.job_description).await?;

    let document = {
        let mut data = session.write();
        // The merged snapshot replaces the whole document: a form edit that
        // raced the call is overwritten when the result lands.
        data.editor.document = snapshot;
        editor::apply(&mut data.editor, DocumentPatch::MergeEnhancement(enhanced));
        data.editor.document.clone()
    };

    info!("enhanced resume for session {id}");
    Ok(Json(EnhanceResponse { document }))
}
