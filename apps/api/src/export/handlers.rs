//! Axum route handlers for the Export API.

use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::HeaderName;
use axum::response::IntoResponse;
use bytes::Bytes;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::docx::{docx_shell, strip_vector_icons};
use crate::export::export_filename;
use crate::export::html::standalone_document;
use crate::export::pdf::single_image_pdf;
use crate::export::raster::RASTER_SCALE;
use crate::render;
use crate::state::AppState;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const HTML_MIME: &str = "text/html; charset=utf-8";

struct RenderedPage {
    owner: String,
    page: String,
}

/// Renders the session's page fragment under its current appearance.
fn rendered_page(state: &AppState, session_id: Uuid) -> Result<RenderedPage, AppError> {
    let session = state.sessions.get(&session_id)?;
    let data = session.read();
    let layout = render::layout::layout(&data.editor.document, &data.render_config);
    Ok(RenderedPage {
        owner: data.editor.document.name.clone(),
        page: render::html::page(&layout),
    })
}

fn attachment(
    filename: String,
    content_type: &'static str,
    bytes: Vec<u8>,
) -> ([(HeaderName, String); 2], Bytes) {
    (
        [
            (CONTENT_TYPE, content_type.to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Bytes::from(bytes),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/export/pdf
///
/// Rasterizes the page and wraps the image in a one-page PDF. Returns 503
/// when no rasterizer is configured.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let rasterizer = state
        .rasterizer
        .clone()
        .ok_or_else(|| AppError::ExportUnavailable("no rasterizer is configured".to_string()))?;

    let rendered = rendered_page(&state, session_id)?;
    let document = standalone_document(&rendered.owner, &rendered.page);
    let png = rasterizer.rasterize(&document, RASTER_SCALE).await?;
    let pdf = single_image_pdf(&png)?;

    tracing::info!(%session_id, bytes = pdf.len(), "exported PDF");

    Ok(attachment(
        export_filename(&rendered.owner, "pdf"),
        PDF_MIME,
        pdf,
    ))
}

/// POST /api/v1/sessions/:id/export/docx
///
/// Strips inline SVG icons, wraps the page in a bare document shell, and
/// hands it to the configured DOCX converter.
pub async fn handle_export_docx(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let rendered = rendered_page(&state, session_id)?;
    let shell = docx_shell(&strip_vector_icons(&rendered.page));
    let docx = state.docx_converter.convert(&shell).await?;

    tracing::info!(%session_id, bytes = docx.len(), "exported DOCX");

    Ok(attachment(
        export_filename(&rendered.owner, "docx"),
        DOCX_MIME,
        docx,
    ))
}

/// POST /api/v1/sessions/:id/export/html
///
/// Returns the page as a self-contained HTML document.
pub async fn handle_export_html(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let rendered = rendered_page(&state, session_id)?;
    let document = standalone_document(&rendered.owner, &rendered.page);

    tracing::info!(%session_id, bytes = document.len(), "exported HTML");

    Ok(attachment(
        export_filename(&rendered.owner, "html"),
        HTML_MIME,
        document.into_bytes(),
    ))
}
