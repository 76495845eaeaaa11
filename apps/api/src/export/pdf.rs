//! Single-image PDF assembly.
//!
//! The PDF export is one page whose sole content is the rasterized page
//! image, sized so one raster pixel maps to one PDF point. The raster PNG is
//! transcoded to JPEG so it can be embedded directly as a `DCTDecode` stream;
//! the surrounding objects (catalog, page tree, content stream, xref) are
//! assembled by hand since the shape never varies.

use anyhow::anyhow;
use image::codecs::jpeg::JpegEncoder;

use crate::errors::AppError;

const JPEG_QUALITY: u8 = 90;

/// Builds a complete one-page PDF with `png` as the full-bleed page content.
pub fn single_image_pdf(png: &[u8]) -> Result<Vec<u8>, AppError> {
    let decoded = image::load_from_memory(png)
        .map_err(|e| AppError::ExportUnavailable(format!("unusable raster payload: {e}")))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY)
        .encode(rgb.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| AppError::Internal(anyhow!("JPEG transcode failed: {e}")))?;

    Ok(assemble(&jpeg, width, height))
}

/// Lays out the five-object document and its xref table. Object order is
/// fixed: catalog, pages, page, content stream, image.
fn assemble(jpeg: &[u8], width: u32, height: u32) -> Vec<u8> {
    let content = format!("q\n{width} 0 0 {height} 0 0 cm\n/Im0 Do\nQ\n");

    let mut out: Vec<u8> = Vec::with_capacity(jpeg.len() + 1024);
    let mut offsets = [0usize; 6];

    out.extend_from_slice(b"%PDF-1.4\n");

    offsets[1] = out.len();
    out.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    offsets[2] = out.len();
    out.extend_from_slice(b"2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n");

    offsets[3] = out.len();
    out.extend_from_slice(
        format!(
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {width} {height}] \
             /Resources << /XObject << /Im0 5 0 R >> >> /Contents 4 0 R >>\nendobj\n"
        )
        .as_bytes(),
    );

    offsets[4] = out.len();
    out.extend_from_slice(
        format!("4 0 obj\n<< /Length {} >>\nstream\n", content.len()).as_bytes(),
    );
    out.extend_from_slice(content.as_bytes());
    out.extend_from_slice(b"endstream\nendobj\n");

    offsets[5] = out.len();
    out.extend_from_slice(
        format!(
            "5 0 obj\n<< /Type /XObject /Subtype /Image /Width {width} /Height {height} \
             /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /DCTDecode /Length {} >>\nstream\n",
            jpeg.len()
        )
        .as_bytes(),
    );
    out.extend_from_slice(jpeg);
    out.extend_from_slice(b"\nendstream\nendobj\n");

    let xref_offset = out.len();
    out.extend_from_slice(b"xref\n0 6\n0000000000 65535 f \n");
    for offset in &offsets[1..] {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!("trailer\n<< /Size 6 /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n").as_bytes(),
    );

    out
}
