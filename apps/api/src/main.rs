mod ats;
mod config;
mod editor;
mod enhance;
mod errors;
mod export;
mod llm_client;
mod models;
mod render;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::docx::PandocConverter;
use crate::export::raster::{HttpRasterizer, Rasterizer};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize the PDF rasterizer, if one is configured
    let rasterizer: Option<Arc<dyn Rasterizer>> = match &config.rasterizer_url {
        Some(url) => {
            info!("Rasterizer configured at {url}");
            Some(Arc::new(HttpRasterizer::new(url.clone())))
        }
        None => {
            info!("No rasterizer configured; PDF export disabled");
            None
        }
    };

    // Initialize the DOCX converter
    let docx_converter = Arc::new(PandocConverter::new(config.docx_converter_bin.clone()));
    info!("DOCX converter: {}", config.docx_converter_bin);

    // Build app state
    let state = AppState {
        sessions: SessionStore::default(),
        llm,
        rasterizer,
        docx_converter,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
