//! Render configuration: template variant, color scheme, and font.
//!
//! The three catalogs here are the whole selection space. A `RenderConfig` is
//! always fully populated; there is no "unset" appearance state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Modern,
    Professional,
    Creative,
}

impl TemplateKind {
    pub fn all() -> [TemplateKind; 3] {
        [
            TemplateKind::Modern,
            TemplateKind::Professional,
            TemplateKind::Creative,
        ]
    }

    /// Display label for the catalog endpoint.
    pub fn label(self) -> &'static str {
        match self {
            TemplateKind::Modern => "Modern",
            TemplateKind::Professional => "Professional",
            TemplateKind::Creative => "Creative",
        }
    }
}

/// A named five-color palette. All values are CSS hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub heading: String,
}

impl ColorScheme {
    pub fn catalog() -> Vec<ColorScheme> {
        [
            ("Teal", "#00f2ea", "#00c1b8"),
            ("Blue", "#3b82f6", "#1d4ed8"),
            ("Purple", "#8b5cf6", "#6d28d9"),
            ("Slate", "#64748b", "#334155"),
        ]
        .into_iter()
        .map(|(name, primary, secondary)| ColorScheme {
            name: name.to_string(),
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            background: "#ffffff".to_string(),
            text: "#334155".to_string(),
            heading: "#0f172a".to_string(),
        })
        .collect()
    }

    pub fn by_name(name: &str) -> Option<ColorScheme> {
        Self::catalog().into_iter().find(|c| c.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub id: String,
    pub name: String,
    /// CSS `font-family` value applied inline to the rendered page.
    pub family: String,
}

impl Font {
    pub fn catalog() -> Vec<Font> {
        [
            ("poppins", "Poppins", "'Poppins', sans-serif"),
            ("inter", "Inter", "'Inter', sans-serif"),
            ("lato", "Lato", "'Lato', sans-serif"),
        ]
        .into_iter()
        .map(|(id, name, family)| Font {
            id: id.to_string(),
            name: name.to_string(),
            family: family.to_string(),
        })
        .collect()
    }

    pub fn by_id(id: &str) -> Option<Font> {
        Self::catalog().into_iter().find(|f| f.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub template: TemplateKind,
    pub color: ColorScheme,
    pub font: Font,
}

impl Default for RenderConfig {
    /// Modern template, Teal scheme, Poppins. The catalogs are non-empty by
    /// construction, so the lookups cannot fail.
    fn default() -> Self {
        RenderConfig {
            template: TemplateKind::Modern,
            color: ColorScheme::catalog().remove(0),
            font: Font::catalog().remove(0),
        }
    }
}
