//! Standalone HTML document export.
//!
//! The preview endpoint returns the bare page fragment; the HTML download
//! wraps that same fragment in a self-contained document that pulls the
//! utility CSS and web fonts from their CDNs, so the file renders correctly
//! when opened from disk.

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const GOOGLE_FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;500;600;700&family=Inter:wght@400;500;600;700&family=Lato:wght@400;700&display=swap";

/// Wraps a rendered page in a full document titled `{name}'s Resume`.
pub fn standalone_document(name: &str, page: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}'s Resume</title>\n\
         <script src=\"{TAILWIND_CDN}\"></script>\n\
         <link rel=\"preconnect\" href=\"https://fonts.googleapis.com\">\n\
         <link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin>\n\
         <link href=\"{GOOGLE_FONTS_URL}\" rel=\"stylesheet\">\n\
         </head>\n\
         <body style=\"margin: 0; background-color: #e5e7eb; display: flex; \
         justify-content: center; padding: 2rem;\">\n\
         {page}\n\
         </body>\n\
         </html>\n",
        title = crate::render::html::escape(name),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_pulls_styles_and_fonts_from_cdns() {
        let doc = standalone_document("Richard Johnson", "<div>page</div>");
        assert!(doc.contains("<script src=\"https://cdn.tailwindcss.com\"></script>"));
        assert!(doc.contains(
            "https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;500;600;700\
             &family=Inter:wght@400;500;600;700&family=Lato:wght@400;700&display=swap"
        ));
        assert!(doc.contains("<link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin>"));
    }

    #[test]
    fn test_document_is_titled_after_the_owner() {
        let doc = standalone_document("Richard Johnson", "<div></div>");
        assert!(doc.contains("<title>Richard Johnson's Resume</title>"));
    }

    #[test]
    fn test_title_escapes_markup_in_the_name() {
        let doc = standalone_document("R<script>", "<div></div>");
        assert!(doc.contains("<title>R&lt;script&gt;'s Resume</title>"));
    }

    #[test]
    fn test_page_fragment_lands_in_the_body() {
        let doc = standalone_document("X", "<div id=\"the-page\"></div>");
        let body_at = doc.find("<body").unwrap();
        let page_at = doc.find("<div id=\"the-page\">").unwrap();
        assert!(page_at > body_at);
        assert!(doc.trim_end().ends_with("</html>"));
    }
}
