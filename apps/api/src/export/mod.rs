//! Export adapters: PDF, DOCX, and standalone HTML.
//!
//! Each export is a stateless conversion of the currently rendered page.
//! None of them mutates the document or the render config, and overlapping
//! requests each read a live snapshot at call time.

pub mod docx;
pub mod handlers;
pub mod html;
pub mod pdf;
pub mod raster;

/// Download filename: the document name with spaces replaced by underscores.
/// Only literal spaces are replaced; other characters pass through.
pub fn export_filename(name: &str, extension: &str) -> String {
    format!("{}_Resume.{extension}", name.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_replaces_spaces_only() {
        assert_eq!(
            export_filename("Jane Q. Public", "html"),
            "Jane_Q._Public_Resume.html"
        );
        assert_eq!(
            export_filename("Richard Johnson", "pdf"),
            "Richard_Johnson_Resume.pdf"
        );
    }

    #[test]
    fn test_filename_with_no_spaces_is_untouched() {
        assert_eq!(export_filename("Cher", "docx"), "Cher_Resume.docx");
    }
}
