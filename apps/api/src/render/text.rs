//! Layout → plain text.
//!
//! The text projection of the rendered page, used as the resume body the ATS
//! feedback prompt sees. Walks the tree in visual reading order (sidebar
//! before main for the modern template), one value per line.

use crate::render::layout::{Layout, Section, SectionBody};

pub fn plain(layout: &Layout) -> String {
    let mut out = String::with_capacity(2 * 1024);
    push_line(&mut out, &layout.header.name);
    push_line(&mut out, &layout.header.title);
    for item in &layout.header.contact {
        push_line(&mut out, &item.value);
    }
    for section in layout.sidebar.iter().chain(layout.main.iter()) {
        section_text(section, &mut out);
    }
    out
}

fn section_text(section: &Section, out: &mut String) {
    out.push('\n');
    push_line(out, section.title);
    match &section.body {
        SectionBody::Paragraph(text) | SectionBody::Notice(text) => push_line(out, text),
        SectionBody::Education(items) => {
            for item in items {
                push_line(out, &item.degree);
                push_line(out, &item.institution);
                push_line(out, &item.dates);
            }
        }
        SectionBody::Experience(items) => {
            for item in items {
                push_line(out, &item.title);
                push_line(out, &item.dates);
                push_line(out, &format!("{} | {}", item.company, item.location));
                for bullet in &item.bullets {
                    push_line(out, bullet);
                }
            }
        }
        SectionBody::SkillChips(items)
        | SectionBody::InterestChips(items)
        | SectionBody::Bullets(items) => {
            for item in items {
                push_line(out, item);
            }
        }
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
