use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Endpoint of the HTML-to-PNG rasterizer service. Unset disables the
    /// PDF export (503) without affecting the rest of the API.
    pub rasterizer_url: Option<String>,
    /// Binary used for DOCX conversion. Must accept pandoc-style arguments.
    pub docx_converter_bin: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            rasterizer_url: std::env::var("RASTERIZER_URL")
                .ok()
                .filter(|url| !url.is_empty()),
            docx_converter_bin: std::env::var("DOCX_CONVERTER_BIN")
                .unwrap_or_else(|_| "pandoc".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
