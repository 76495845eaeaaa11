//! Pure document → layout-tree mapping.
//!
//! `layout` is a function of exactly (document, config): same inputs, same
//! tree. All empty-value filtering happens here (empty contact fields drop
//! their line item, empty list items drop their chip or bullet), so the
//! serializers in `html` and `text` never re-check.

use crate::models::appearance::{RenderConfig, TemplateKind};
use crate::models::resume::ResumeDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Linkedin,
    Github,
    Website,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub location: String,
    pub dates: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationItem {
    pub degree: String,
    pub institution: String,
    pub dates: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Paragraph(String),
    Education(Vec<EducationItem>),
    Experience(Vec<ExperienceItem>),
    SkillChips(Vec<String>),
    InterestChips(Vec<String>),
    Bullets(Vec<String>),
    Notice(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub title: String,
    pub contact: Vec<ContactItem>,
}

/// The rendered page as a tree. `sidebar` is populated only by the modern
/// template; the other variants put every section in `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub config: RenderConfig,
    pub header: Header,
    pub sidebar: Vec<Section>,
    pub main: Vec<Section>,
}

pub fn layout(doc: &ResumeDocument, config: &RenderConfig) -> Layout {
    let header = Header {
        name: doc.name.clone(),
        title: doc.title.clone(),
        contact: contact_items(doc),
    };

    let summary = Section {
        title: "Summary",
        body: SectionBody::Paragraph(doc.summary.clone()),
    };
    let education = Section {
        title: "Education",
        body: SectionBody::Education(
            doc.education
                .iter()
                .map(|e| EducationItem {
                    degree: e.degree.clone(),
                    institution: e.institution.clone(),
                    dates: e.dates.clone(),
                })
                .collect(),
        ),
    };
    let experience = Section {
        title: "Experience",
        body: SectionBody::Experience(
            doc.experience
                .iter()
                .map(|e| ExperienceItem {
                    title: e.title.clone(),
                    company: e.company.clone(),
                    location: e.location.clone(),
                    dates: e.dates.clone(),
                    bullets: non_empty(&e.description),
                })
                .collect(),
        ),
    };
    let skills = Section {
        title: "Skills",
        body: SectionBody::SkillChips(non_empty(&doc.skills)),
    };
    let interests = Section {
        title: "Interests",
        body: SectionBody::InterestChips(non_empty(&doc.interests)),
    };
    let achievements = Section {
        title: "Achievements",
        body: SectionBody::Bullets(non_empty(&doc.achievements)),
    };
    let references = Section {
        title: "References",
        body: SectionBody::Notice("Available upon request.".to_string()),
    };

    let (sidebar, main) = match config.template {
        TemplateKind::Modern => (
            vec![skills, interests],
            vec![summary, education, experience, achievements, references],
        ),
        TemplateKind::Professional | TemplateKind::Creative => (
            vec![],
            vec![
                summary,
                education,
                experience,
                skills,
                interests,
                achievements,
                references,
            ],
        ),
    };

    Layout {
        config: config.clone(),
        header,
        sidebar,
        main,
    }
}

/// Contact lines in their fixed order. An empty value drops the whole item.
fn contact_items(doc: &ResumeDocument) -> Vec<ContactItem> {
    let fields = [
        (ContactKind::Email, &doc.contact.email),
        (ContactKind::Phone, &doc.contact.phone),
        (ContactKind::Linkedin, &doc.contact.linkedin),
        (ContactKind::Github, &doc.contact.github),
        (ContactKind::Website, &doc.contact.website),
    ];
    fields
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(kind, value)| ContactItem {
            kind,
            value: value.clone(),
        })
        .collect()
}

/// Drops empty strings, preserving the order of the rest. Whitespace-only
/// items count as non-empty, matching the form's trim-at-split semantics.
fn non_empty(items: &[String]) -> Vec<String> {
    items.iter().filter(|s| !s.is_empty()).cloned().collect()
}
