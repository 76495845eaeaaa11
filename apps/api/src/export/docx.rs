//! DOCX conversion.
//!
//! Word output is delegated to an external `pandoc` binary reading HTML on
//! stdin and writing the `.docx` container to stdout. Before conversion the
//! rendered page is stripped of inline SVG icons, which word processors
//! render poorly, and wrapped in a minimal standalone document shell.

use std::process::Stdio;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::errors::AppError;

/// Removes every terminated `<svg>...</svg>` block. An opening tag with no
/// matching close is left in place.
pub fn strip_vector_icons(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find("<svg") {
        let Some(end) = rest[start..].find("</svg>") else {
            break;
        };
        out.push_str(&rest[..start]);
        rest = &rest[start + end + "</svg>".len()..];
    }
    out.push_str(rest);
    out
}

/// Wraps a page fragment in the bare document shell the converter expects.
pub fn docx_shell(body: &str) -> String {
    format!("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"></head><body>{body}</body></html>")
}

#[async_trait]
pub trait DocxConverter: Send + Sync {
    async fn convert(&self, html: &str) -> Result<Vec<u8>, AppError>;
}

/// Shells out to pandoc (or a compatible binary) for the actual conversion.
pub struct PandocConverter {
    bin: String,
}

impl PandocConverter {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

#[async_trait]
impl DocxConverter for PandocConverter {
    async fn convert(&self, html: &str) -> Result<Vec<u8>, AppError> {
        let mut child = Command::new(&self.bin)
            .args(["--from", "html", "--to", "docx", "--output", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    AppError::ExportUnavailable(format!(
                        "DOCX converter '{}' is not installed",
                        self.bin
                    ))
                } else {
                    AppError::Internal(anyhow!("failed to spawn '{}': {e}", self.bin))
                }
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| AppError::Internal(anyhow!("converter stdin was not captured")))?;
        stdin
            .write_all(html.as_bytes())
            .await
            .map_err(|e| AppError::Internal(anyhow!("failed to stream HTML to converter: {e}")))?;
        drop(stdin);

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| AppError::Internal(anyhow!("converter did not exit cleanly: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Internal(anyhow!(
                "'{}' exited with {}: {}",
                self.bin,
                output.status,
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}
