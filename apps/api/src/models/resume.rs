//! The resume document model.
//!
//! Every field is free text: dates, phone numbers, and URLs are stored exactly
//! as the user typed them. Emptiness is handled at render time, never by
//! validation. Entry ids are opaque `u64`s allocated by the editing session and
//! are the only correlation key between a document and an AI rewrite of it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub dates: String,
    /// One bullet per element. Empty lines are kept here and filtered when rendering.
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: u64,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub dates: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub name: String,
    pub title: String,
    pub contact: ContactInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub achievements: Vec<String>,
}

impl ResumeDocument {
    /// The starter document every new session begins with.
    pub fn starter() -> Self {
        ResumeDocument {
            name: "Richard Johnson".to_string(),
            title: "Senior Frontend Developer".to_string(),
            contact: ContactInfo {
                email: "richard.johnson@email.com".to_string(),
                phone: "123-456-7890".to_string(),
                linkedin: "linkedin.com/in/richardj".to_string(),
                github: "github.com/richardj".to_string(),
                website: "richarddev.com".to_string(),
            },
            summary: "Seasoned Frontend Developer with 8+ years of experience in creating \
                      responsive and performant web applications using modern technologies. \
                      Passionate about UI/UX and building accessible digital experiences."
                .to_string(),
            experience: vec![
                ExperienceEntry {
                    id: 1,
                    title: "Lead Frontend Engineer".to_string(),
                    company: "Innovate Inc.".to_string(),
                    location: "San Francisco, CA".to_string(),
                    dates: "Jan 2020 - Present".to_string(),
                    description: vec![
                        "Led a team of 5 developers in the creation of a new client-facing \
                         dashboard, resulting in a 20% increase in user engagement."
                            .to_string(),
                        "Architected and implemented a design system using React and Storybook, \
                         improving development consistency and speed by 30%."
                            .to_string(),
                        "Optimized application performance, reducing load times by 40% through \
                         code splitting and lazy loading."
                            .to_string(),
                    ],
                },
                ExperienceEntry {
                    id: 2,
                    title: "Software Engineer".to_string(),
                    company: "Tech Solutions".to_string(),
                    location: "Austin, TX".to_string(),
                    dates: "Jun 2016 - Dec 2019".to_string(),
                    description: vec![
                        "Developed and maintained features for a large-scale e-commerce \
                         platform using Angular."
                            .to_string(),
                        "Collaborated with UX/UI designers to translate wireframes into \
                         high-quality, responsive code."
                            .to_string(),
                        "Wrote unit and end-to-end tests to ensure application stability \
                         and reliability."
                            .to_string(),
                    ],
                },
            ],
            education: vec![EducationEntry {
                id: 1,
                degree: "B.S. in Computer Science".to_string(),
                institution: "University of Technology".to_string(),
                location: "Austin, TX".to_string(),
                dates: "2012 - 2016".to_string(),
            }],
            skills: [
                "React",
                "TypeScript",
                "JavaScript",
                "Next.js",
                "Tailwind CSS",
                "Node.js",
                "GraphQL",
                "Jest",
                "CI/CD",
            ]
            .map(String::from)
            .to_vec(),
            interests: [
                "Open Source Contribution",
                "Competitive Programming",
                "UX/UI Design blogs",
            ]
            .map(String::from)
            .to_vec(),
            achievements: [
                "Winner of Innovate Inc. Hackathon 2021",
                "Published 3 articles on modern web development on Medium",
                "Speaker at Local JS Meetup",
            ]
            .map(String::from)
            .to_vec(),
        }
    }

    /// Highest entry id across both entry lists. Used to seed the id allocator.
    pub fn max_entry_id(&self) -> u64 {
        let experience = self.experience.iter().map(|e| e.id).max().unwrap_or(0);
        let education = self.education.iter().map(|e| e.id).max().unwrap_or(0);
        experience.max(education)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Enhancement response model
// ────────────────────────────────────────────────────────────────────────────

/// The fixed schema an AI rewrite must conform to. All fields are required:
/// a response missing any of them fails to parse and the whole enhancement is
/// discarded. Only `summary`, `skills`, and the per-id `description` lists are
/// ever merged back into a document; the remaining fields exist so the model
/// returns entries it can correlate by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedResume {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub experience: Vec<EnhancedExperience>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedExperience {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub dates: String,
    pub description: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_document_entry_ids() {
        let doc = ResumeDocument::starter();
        assert_eq!(doc.experience.len(), 2);
        assert_eq!(doc.experience[0].id, 1);
        assert_eq!(doc.experience[1].id, 2);
        assert_eq!(doc.education.len(), 1);
        assert_eq!(doc.education[0].id, 1);
        assert_eq!(doc.max_entry_id(), 2);
    }

    #[test]
    fn test_max_entry_id_empty_lists() {
        let mut doc = ResumeDocument::starter();
        doc.experience.clear();
        doc.education.clear();
        assert_eq!(doc.max_entry_id(), 0);
    }

    #[test]
    fn test_enhanced_resume_requires_all_fields() {
        // `skills` missing: the parse must fail rather than default.
        let incomplete = r#"{
            "name": "A",
            "title": "B",
            "summary": "C",
            "experience": []
        }"#;
        assert!(serde_json::from_str::<EnhancedResume>(incomplete).is_err());
    }

    #[test]
    fn test_document_round_trips_through_json() {
        let doc = ResumeDocument::starter();
        let json = serde_json::to_string(&doc).unwrap();
        let back: ResumeDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
