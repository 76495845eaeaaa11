//! Layout → page markup.
//!
//! Produces the single 8.5in × 11in page as a `<div>` with utility classes for
//! geometry and inline styles for everything scheme-dependent. The same markup
//! feeds the preview endpoint and all three exporters, so the color tints and
//! the contact icon `<svg>`s live here and nowhere else.

use crate::models::appearance::{ColorScheme, TemplateKind};
use crate::render::layout::{
    ContactItem, ContactKind, EducationItem, ExperienceItem, Layout, Section, SectionBody,
};

/// Serializes the full page. Pure: equal layouts produce equal strings.
pub fn page(layout: &Layout) -> String {
    let scheme = &layout.config.color;
    let mut out = String::with_capacity(8 * 1024);
    out.push_str(&format!(
        "<div class=\"w-[8.5in] h-[11in] shadow-2xl overflow-hidden\" \
         style=\"background-color: {}; color: {}; font-family: {}\">",
        scheme.background, scheme.text, layout.config.font.family
    ));
    match layout.config.template {
        TemplateKind::Modern => modern_body(layout, &mut out),
        TemplateKind::Professional => professional_body(layout, &mut out),
        TemplateKind::Creative => creative_body(layout, &mut out),
    }
    out.push_str("</div>");
    out
}

fn modern_body(layout: &Layout, out: &mut String) {
    let scheme = &layout.config.color;
    out.push_str("<div class=\"p-8 grid grid-cols-3 gap-8\">");

    out.push_str("<div class=\"col-span-1 pr-6 border-r border-gray-200 space-y-6\">");
    for section in &layout.sidebar {
        section_html(section, TemplateKind::Modern, scheme, out);
    }
    out.push_str("</div>");

    out.push_str("<div class=\"col-span-2 space-y-6\">");
    out.push_str("<header class=\"text-left\">");
    out.push_str(&format!(
        "<h1 class=\"text-4xl font-bold\" style=\"color: {}\">{}</h1>",
        scheme.primary,
        escape(&layout.header.name)
    ));
    out.push_str(&format!(
        "<p class=\"text-xl font-light\" style=\"color: {}\">{}</p>",
        scheme.heading,
        escape(&layout.header.title)
    ));
    out.push_str("<div class=\"mt-2 text-left\">");
    contact_html(&layout.header.contact, scheme, out);
    out.push_str("</div></header>");
    for section in &layout.main {
        section_html(section, TemplateKind::Modern, scheme, out);
    }
    out.push_str("</div></div>");
}

fn professional_body(layout: &Layout, out: &mut String) {
    let scheme = &layout.config.color;
    out.push_str("<div class=\"p-8 flex\"><div class=\"w-full\">");
    out.push_str("<header class=\"text-left w-full mb-4\">");
    out.push_str(&format!(
        "<h1 class=\"text-4xl font-bold tracking-tight\" style=\"color: {}\">{}</h1>",
        scheme.heading,
        escape(&layout.header.name)
    ));
    out.push_str(&format!(
        "<p class=\"text-lg font-medium\" style=\"color: {}\">{}</p>",
        scheme.primary,
        escape(&layout.header.title)
    ));
    out.push_str("<div class=\"mt-2 text-left\">");
    contact_html(&layout.header.contact, scheme, out);
    out.push_str("</div>");
    out.push_str(&format!(
        "<div class=\"w-full h-px mt-4\" style=\"background-color: {}\"></div>",
        scheme.secondary
    ));
    out.push_str("</header>");
    out.push_str("<div class=\"space-y-4\">");
    for section in &layout.main {
        section_html(section, TemplateKind::Professional, scheme, out);
    }
    out.push_str("</div></div></div>");
}

fn creative_body(layout: &Layout, out: &mut String) {
    let scheme = &layout.config.color;
    out.push_str("<div class=\"p-8\">");
    out.push_str("<header class=\"text-center mb-6 relative\">");
    for side in ["left-0", "right-0"] {
        out.push_str(&format!(
            "<div class=\"w-24 h-1 absolute top-1/2 -translate-y-1/2 {side}\" \
             style=\"background-color: {}\"></div>",
            scheme.primary
        ));
    }
    out.push_str(&format!(
        "<h1 class=\"text-3xl font-bold tracking-widest uppercase\" style=\"color: {}\">{}</h1>",
        scheme.heading,
        escape(&layout.header.name)
    ));
    out.push_str(&format!(
        "<p class=\"text-md font-light tracking-wider\" style=\"color: {}\">{}</p>",
        scheme.secondary,
        escape(&layout.header.title)
    ));
    out.push_str("</header>");
    out.push_str("<div class=\"text-center mb-6\">");
    contact_html(&layout.header.contact, scheme, out);
    out.push_str("</div>");
    out.push_str("<div class=\"space-y-6\">");
    for section in &layout.main {
        section_html(section, TemplateKind::Creative, scheme, out);
    }
    out.push_str("</div></div>");
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn section_html(section: &Section, template: TemplateKind, scheme: &ColorScheme, out: &mut String) {
    let title_class = match template {
        TemplateKind::Modern => "font-bold text-sm uppercase tracking-wider pb-1 mb-2 border-b-2",
        TemplateKind::Professional => "font-semibold text-lg pb-1 mb-2",
        TemplateKind::Creative => "font-bold text-base uppercase tracking-widest pb-1 mb-2",
    };
    out.push_str("<section>");
    out.push_str(&format!(
        "<h2 class=\"{title_class}\" style=\"border-color: {}; color: {}\">{}</h2>",
        scheme.primary, scheme.heading, section.title
    ));
    match &section.body {
        SectionBody::Paragraph(text) => out.push_str(&format!(
            "<p class=\"text-sm\" style=\"color: {}\">{}</p>",
            scheme.text,
            escape(text)
        )),
        SectionBody::Education(items) => {
            for item in items {
                education_html(item, scheme, out);
            }
        }
        SectionBody::Experience(items) => {
            for item in items {
                experience_html(item, scheme, out);
            }
        }
        SectionBody::SkillChips(items) => {
            chips_html(items, &scheme.primary, chip_text_color(scheme), out)
        }
        SectionBody::InterestChips(items) => {
            // 20 is a hex alpha suffix: primary at ~12% opacity.
            let tinted = format!("{}20", scheme.primary);
            chips_html(items, &tinted, &scheme.primary, out)
        }
        SectionBody::Bullets(items) => bullet_list_html(items, scheme, out),
        SectionBody::Notice(text) => out.push_str(&format!(
            "<p class=\"text-sm italic\" style=\"color: {}\">{}</p>",
            scheme.text,
            escape(text)
        )),
    }
    out.push_str("</section>");
}

fn education_html(item: &EducationItem, scheme: &ColorScheme, out: &mut String) {
    out.push_str("<div class=\"mb-2\">");
    out.push_str(&format!(
        "<h3 class=\"font-bold text-sm\" style=\"color: {}\">{}</h3>",
        scheme.heading,
        escape(&item.degree)
    ));
    out.push_str(&format!(
        "<p class=\"text-xs\" style=\"color: {}\">{}</p>",
        scheme.text,
        escape(&item.institution)
    ));
    out.push_str(&format!(
        "<p class=\"text-xs\" style=\"color: {}\">{}</p>",
        scheme.text,
        escape(&item.dates)
    ));
    out.push_str("</div>");
}

fn experience_html(item: &ExperienceItem, scheme: &ColorScheme, out: &mut String) {
    out.push_str("<div class=\"mb-4\">");
    out.push_str("<div class=\"flex justify-between items-baseline\">");
    out.push_str(&format!(
        "<h3 class=\"font-bold text-base\" style=\"color: {}\">{}</h3>",
        scheme.heading,
        escape(&item.title)
    ));
    out.push_str(&format!(
        "<p class=\"text-xs font-medium\" style=\"color: {}\">{}</p>",
        scheme.text,
        escape(&item.dates)
    ));
    out.push_str("</div>");
    out.push_str(&format!(
        "<p class=\"text-sm font-semibold\" style=\"color: {}\">{} | {}</p>",
        scheme.primary,
        escape(&item.company),
        escape(&item.location)
    ));
    bullet_list_html(&item.bullets, scheme, out);
    out.push_str("</div>");
}

fn chips_html(items: &[String], background: &str, foreground: &str, out: &mut String) {
    out.push_str("<div class=\"flex flex-wrap gap-2\">");
    for item in items {
        out.push_str(&format!(
            "<span class=\"text-xs font-medium px-2 py-1 rounded\" \
             style=\"background-color: {background}; color: {foreground}\">{}</span>",
            escape(item)
        ));
    }
    out.push_str("</div>");
}

fn bullet_list_html(items: &[String], scheme: &ColorScheme, out: &mut String) {
    out.push_str("<ul class=\"list-disc list-inside mt-1 space-y-1\">");
    for item in items {
        out.push_str(&format!(
            "<li class=\"text-sm\" style=\"color: {}\">{}</li>",
            scheme.text,
            escape(item)
        ));
    }
    out.push_str("</ul>");
}

/// Skill chips sit on a solid `primary` background. Against the stock white
/// page the readable foreground is black; any other page color gets white.
/// The literal `#ffffff` test is the documented contract, not a general
/// luminance heuristic.
pub fn chip_text_color(scheme: &ColorScheme) -> &'static str {
    if scheme.background == "#ffffff" {
        "#000000"
    } else {
        "#ffffff"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Contact line
// ────────────────────────────────────────────────────────────────────────────

fn contact_html(items: &[ContactItem], scheme: &ColorScheme, out: &mut String) {
    out.push_str(&format!(
        "<div class=\"flex flex-wrap justify-center gap-x-4 gap-y-1 text-xs\" \
         style=\"color: {}\">",
        scheme.text
    ));
    for item in items {
        out.push_str("<span class=\"flex items-center gap-1.5\">");
        icon_svg(item.kind, &scheme.primary, out);
        out.push(' ');
        out.push_str(&escape(&item.value));
        out.push_str("</span>");
    }
    out.push_str("</div>");
}

/// Inline stroke icons for contact lines. The DOCX exporter strips these
/// `<svg>` elements wholesale, so nothing outside them may depend on one.
fn icon_svg(kind: ContactKind, primary: &str, out: &mut String) {
    let body = match kind {
        ContactKind::Email => {
            "<rect width=\"20\" height=\"16\" x=\"2\" y=\"4\" rx=\"2\"/>\
             <path d=\"m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7\"/>"
        }
        ContactKind::Phone => {
            "<path d=\"M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z\"/>"
        }
        ContactKind::Linkedin => {
            "<path d=\"M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z\"/>\
             <rect width=\"4\" height=\"12\" x=\"2\" y=\"9\"/>\
             <circle cx=\"4\" cy=\"4\" r=\"2\"/>"
        }
        ContactKind::Github => {
            "<path d=\"M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4\"/>\
             <path d=\"M9 18c-4.51 2-5-2-7-2\"/>"
        }
        ContactKind::Website => {
            "<circle cx=\"12\" cy=\"12\" r=\"10\"/>\
             <path d=\"M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20\"/>\
             <path d=\"M2 12h20\"/>"
        }
    };
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"12\" height=\"12\" \
         viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" \
         stroke-linecap=\"round\" stroke-linejoin=\"round\" style=\"color: {primary}\">{body}</svg>"
    ));
}

pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
