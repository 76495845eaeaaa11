//! Rasterization collaborator seam.
//!
//! PDF export needs a pixel-perfect raster of the rendered page, which only a
//! real layout engine can produce. That engine lives behind this trait; the
//! shipped implementation posts the page to a headless-browser screenshot
//! service and gets PNG bytes back. `AppState` carries `Option<Arc<dyn
//! Rasterizer>>`; `None` means no endpoint is configured, which surfaces as
//! `ExportUnavailable` at the handler.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Device scale factor for rasterization. Doubles the pixel density so the
/// single-image PDF stays crisp in print.
pub const RASTER_SCALE: f32 = 2.0;

#[async_trait]
pub trait Rasterizer: Send + Sync {
    /// Renders a standalone HTML document and returns PNG bytes.
    async fn rasterize(&self, html: &str, scale: f32) -> Result<Vec<u8>, AppError>;
}

#[derive(Debug, Serialize)]
struct RasterRequest<'a> {
    html: &'a str,
    scale: f32,
}

#[derive(Debug, Deserialize)]
struct RasterResponse {
    png_base64: String,
}

/// Posts `{html, scale}` to a screenshot endpoint and decodes the
/// base64-encoded PNG it returns.
pub struct HttpRasterizer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRasterizer {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }
}

#[async_trait]
impl Rasterizer for HttpRasterizer {
    async fn rasterize(&self, html: &str, scale: f32) -> Result<Vec<u8>, AppError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RasterRequest { html, scale })
            .send()
            .await
            .map_err(|e| AppError::ExportUnavailable(format!("rasterizer unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ExportUnavailable(format!(
                "rasterizer returned {status}"
            )));
        }

        let body: RasterResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExportUnavailable(format!("bad rasterizer response: {e}")))?;

        BASE64
            .decode(body.png_base64.as_bytes())
            .map_err(|e| AppError::ExportUnavailable(format!("bad rasterizer payload: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_request_wire_shape() {
        let request = RasterRequest {
            html: "<div>page</div>",
            scale: RASTER_SCALE,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["html"], "<div>page</div>");
        assert_eq!(json["scale"], 2.0);
    }

    #[test]
    fn test_raster_response_decodes_png_payload() {
        let encoded = BASE64.encode(b"not-really-png");
        let body: RasterResponse =
            serde_json::from_str(&format!("{{\"png_base64\": \"{encoded}\"}}")).unwrap();
        assert_eq!(BASE64.decode(body.png_base64).unwrap(), b"not-really-png");
    }
}
