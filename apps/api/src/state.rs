use std::sync::Arc;

use crate::config::Config;
use crate::export::docx::DocxConverter;
use crate::export::raster::Rasterizer;
use crate::llm_client::LlmClient;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub llm: LlmClient,
    /// Pluggable HTML-to-PNG backend for the PDF export. `None` when no
    /// rasterizer is configured; the PDF route then answers 503.
    pub rasterizer: Option<Arc<dyn Rasterizer>>,
    pub docx_converter: Arc<dyn DocxConverter>,
    pub config: Config,
}
