//! The form editor reducer.
//!
//! All document mutation flows through [`apply`]; handlers never touch
//! `ResumeDocument` fields directly. Replaying the same patch sequence against
//! the same starting state therefore reproduces the same document, which is
//! what the tests below lean on.

pub mod patch;

use crate::models::resume::{
    EducationEntry, EnhancedResume, ExperienceEntry, ResumeDocument,
};

pub use patch::DocumentPatch;
use patch::{ContactField, DelimitedField, EducationField, EntryList, ExperienceField, TopField};

/// A document plus the monotonic id allocator for its entry lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub document: ResumeDocument,
    next_entry_id: u64,
}

impl EditorState {
    /// Wraps an existing document, seeding the allocator past its highest id.
    pub fn new(document: ResumeDocument) -> Self {
        let next_entry_id = document.max_entry_id() + 1;
        EditorState {
            document,
            next_entry_id,
        }
    }

    pub fn starter() -> Self {
        Self::new(ResumeDocument::starter())
    }

    /// Ids are never reused, even after the entry they named is removed.
    fn allocate_id(&mut self) -> u64 {
        let id = self.next_entry_id;
        self.next_entry_id += 1;
        id
    }
}

/// What a patch did, beyond the document mutation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatchOutcome {
    /// Set by `AddEntry`: the id of the appended entry.
    pub added_id: Option<u64>,
}

/// Applies one patch to the state. Infallible: patches naming an unknown
/// entry id leave the document untouched.
pub fn apply(state: &mut EditorState, patch: DocumentPatch) -> PatchOutcome {
    let doc = &mut state.document;
    match patch {
        DocumentPatch::SetField { field, value } => {
            match field {
                TopField::Name => doc.name = value,
                TopField::Title => doc.title = value,
                TopField::Summary => doc.summary = value,
            }
            PatchOutcome::default()
        }
        DocumentPatch::SetContactField { field, value } => {
            match field {
                ContactField::Email => doc.contact.email = value,
                ContactField::Phone => doc.contact.phone = value,
                ContactField::Linkedin => doc.contact.linkedin = value,
                ContactField::Github => doc.contact.github = value,
                ContactField::Website => doc.contact.website = value,
            }
            PatchOutcome::default()
        }
        DocumentPatch::ReplaceDelimitedList { field, raw } => {
            match field {
                DelimitedField::Skills => doc.skills = split_comma(&raw),
                DelimitedField::Interests => doc.interests = split_comma(&raw),
                DelimitedField::Achievements => doc.achievements = split_lines(&raw),
            }
            PatchOutcome::default()
        }
        DocumentPatch::AddEntry { list } => {
            let id = state.allocate_id();
            let doc = &mut state.document;
            match list {
                EntryList::Experience => doc.experience.push(ExperienceEntry {
                    id,
                    title: String::new(),
                    company: String::new(),
                    location: String::new(),
                    dates: String::new(),
                    description: vec![String::new()],
                }),
                EntryList::Education => doc.education.push(EducationEntry {
                    id,
                    degree: String::new(),
                    institution: String::new(),
                    location: String::new(),
                    dates: String::new(),
                }),
            }
            PatchOutcome { added_id: Some(id) }
        }
        DocumentPatch::RemoveEntry { list, id } => {
            match list {
                EntryList::Experience => doc.experience.retain(|e| e.id != id),
                EntryList::Education => doc.education.retain(|e| e.id != id),
            }
            PatchOutcome::default()
        }
        DocumentPatch::SetExperienceField { id, field, value } => {
            if let Some(entry) = doc.experience.iter_mut().find(|e| e.id == id) {
                match field {
                    ExperienceField::Title => entry.title = value,
                    ExperienceField::Company => entry.company = value,
                    ExperienceField::Location => entry.location = value,
                    ExperienceField::Dates => entry.dates = value,
                    ExperienceField::Description => entry.description = split_lines(&value),
                }
            }
            PatchOutcome::default()
        }
        DocumentPatch::SetEducationField { id, field, value } => {
            if let Some(entry) = doc.education.iter_mut().find(|e| e.id == id) {
                match field {
                    EducationField::Degree => entry.degree = value,
                    EducationField::Institution => entry.institution = value,
                    EducationField::Location => entry.location = value,
                    EducationField::Dates => entry.dates = value,
                }
            }
            PatchOutcome::default()
        }
        DocumentPatch::MergeEnhancement(enhanced) => {
            merge_enhancement(doc, enhanced);
            PatchOutcome::default()
        }
    }
}

/// Comma-delimited fields: each segment trimmed, empty segments kept.
fn split_comma(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// Newline-delimited fields: lines kept verbatim, including empty ones.
fn split_lines(raw: &str) -> Vec<String> {
    raw.split('\n').map(str::to_string).collect()
}

/// Folds an AI rewrite into the document.
///
/// Exactly three things move over: the summary, the skills list, and the
/// description of each experience entry whose id appears in the response.
/// Everything else (contact, education, interests, achievements, every
/// experience field except `description`) keeps its current value. The
/// response's own `name`/`title` and per-entry company/location/dates are
/// parsed but deliberately ignored.
fn merge_enhancement(doc: &mut ResumeDocument, enhanced: EnhancedResume) {
    doc.summary = enhanced.summary;
    doc.skills = enhanced.skills;

    for entry in &mut doc.experience {
        match enhanced.experience.iter().find(|e| e.id == entry.id) {
            Some(rewrite) => entry.description = rewrite.description.clone(),
            // Entry not mentioned in the response: leave it untouched.
            None => {}
        }
    }
    // Response entries whose id matches no document entry fall out here
    // without effect; the document's entry set never grows from a merge.
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::EnhancedExperience;

    fn make_state() -> EditorState {
        EditorState::starter()
    }

    fn make_enhanced(
        summary: &str,
        skills: &[&str],
        experience: Vec<EnhancedExperience>,
    ) -> EnhancedResume {
        EnhancedResume {
            name: "Ignored Name".to_string(),
            title: "Ignored Title".to_string(),
            summary: summary.to_string(),
            experience,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn make_rewrite(id: u64, bullets: &[&str]) -> EnhancedExperience {
        EnhancedExperience {
            id,
            title: String::new(),
            company: String::new(),
            location: String::new(),
            dates: String::new(),
            description: bullets.iter().map(|s| s.to_string()).collect(),
        }
    }

    // ── scalar and contact fields ───────────────────────────────────────────

    #[test]
    fn test_set_field_replaces_scalar() {
        let mut state = make_state();
        apply(
            &mut state,
            DocumentPatch::SetField {
                field: TopField::Name,
                value: "Jane Q. Public".to_string(),
            },
        );
        assert_eq!(state.document.name, "Jane Q. Public");
    }

    #[test]
    fn test_set_contact_field_merges_one_level_deep() {
        let mut state = make_state();
        apply(
            &mut state,
            DocumentPatch::SetContactField {
                field: ContactField::Phone,
                value: "555-0100".to_string(),
            },
        );
        assert_eq!(state.document.contact.phone, "555-0100");
        // Sibling contact fields keep their values.
        assert_eq!(state.document.contact.email, "richard.johnson@email.com");
    }

    // ── delimited lists ─────────────────────────────────────────────────────

    #[test]
    fn test_comma_list_trims_segments() {
        let mut state = make_state();
        apply(
            &mut state,
            DocumentPatch::ReplaceDelimitedList {
                field: DelimitedField::Skills,
                raw: " Rust ,  Go,TypeScript ".to_string(),
            },
        );
        assert_eq!(state.document.skills, vec!["Rust", "Go", "TypeScript"]);
    }

    #[test]
    fn test_comma_list_round_trips_after_trim() {
        let mut state = make_state();
        let raw = "Rust,  Go , Zig";
        apply(
            &mut state,
            DocumentPatch::ReplaceDelimitedList {
                field: DelimitedField::Interests,
                raw: raw.to_string(),
            },
        );
        let rejoined = state.document.interests.join(",");
        // Re-splitting the rejoined text reproduces the same segments.
        let mut again = make_state();
        apply(
            &mut again,
            DocumentPatch::ReplaceDelimitedList {
                field: DelimitedField::Interests,
                raw: rejoined,
            },
        );
        assert_eq!(again.document.interests, state.document.interests);
    }

    #[test]
    fn test_comma_list_keeps_empty_segments() {
        let mut state = make_state();
        apply(
            &mut state,
            DocumentPatch::ReplaceDelimitedList {
                field: DelimitedField::Skills,
                raw: "Rust,,Go".to_string(),
            },
        );
        assert_eq!(state.document.skills, vec!["Rust", "", "Go"]);
    }

    #[test]
    fn test_newline_list_preserves_empty_lines() {
        let mut state = make_state();
        apply(
            &mut state,
            DocumentPatch::ReplaceDelimitedList {
                field: DelimitedField::Achievements,
                raw: "First\n\n  Third with spaces  ".to_string(),
            },
        );
        assert_eq!(
            state.document.achievements,
            vec!["First", "", "  Third with spaces  "]
        );
        let rejoined = state.document.achievements.join("\n");
        assert_eq!(rejoined, "First\n\n  Third with spaces  ");
    }

    // ── entry add/remove ────────────────────────────────────────────────────

    #[test]
    fn test_add_experience_allocates_fresh_id() {
        let mut state = make_state();
        let outcome = apply(
            &mut state,
            DocumentPatch::AddEntry {
                list: EntryList::Experience,
            },
        );
        // Starter ids top out at 2, so the first allocation is 3.
        assert_eq!(outcome.added_id, Some(3));
        let added = state.document.experience.last().unwrap();
        assert_eq!(added.id, 3);
        assert_eq!(added.title, "");
        assert_eq!(added.description, vec![String::new()]);
    }

    #[test]
    fn test_add_then_remove_is_identity() {
        for list in [EntryList::Experience, EntryList::Education] {
            let mut state = make_state();
            let before = state.document.clone();
            let outcome = apply(&mut state, DocumentPatch::AddEntry { list });
            let id = outcome.added_id.unwrap();
            apply(&mut state, DocumentPatch::RemoveEntry { list, id });
            assert_eq!(state.document, before);
        }
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut state = make_state();
        let before = state.document.clone();
        apply(
            &mut state,
            DocumentPatch::RemoveEntry {
                list: EntryList::Education,
                id: 999,
            },
        );
        assert_eq!(state.document, before);
    }

    #[test]
    fn test_ids_are_never_reused_after_removal() {
        let mut state = make_state();
        let first = apply(
            &mut state,
            DocumentPatch::AddEntry {
                list: EntryList::Education,
            },
        )
        .added_id
        .unwrap();
        apply(
            &mut state,
            DocumentPatch::RemoveEntry {
                list: EntryList::Education,
                id: first,
            },
        );
        let second = apply(
            &mut state,
            DocumentPatch::AddEntry {
                list: EntryList::Education,
            },
        )
        .added_id
        .unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_remove_preserves_sibling_order() {
        let mut state = make_state();
        apply(
            &mut state,
            DocumentPatch::AddEntry {
                list: EntryList::Experience,
            },
        );
        apply(
            &mut state,
            DocumentPatch::RemoveEntry {
                list: EntryList::Experience,
                id: 1,
            },
        );
        let ids: Vec<u64> = state.document.experience.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    // ── per-entry field edits ───────────────────────────────────────────────

    #[test]
    fn test_set_experience_field_targets_by_id() {
        let mut state = make_state();
        apply(
            &mut state,
            DocumentPatch::SetExperienceField {
                id: 2,
                field: ExperienceField::Company,
                value: "Acme Corp".to_string(),
            },
        );
        assert_eq!(state.document.experience[1].company, "Acme Corp");
        assert_eq!(state.document.experience[0].company, "Innovate Inc.");
    }

    #[test]
    fn test_set_experience_description_splits_lines_verbatim() {
        let mut state = make_state();
        apply(
            &mut state,
            DocumentPatch::SetExperienceField {
                id: 1,
                field: ExperienceField::Description,
                value: "Shipped the thing\n\nKept it running".to_string(),
            },
        );
        assert_eq!(
            state.document.experience[0].description,
            vec!["Shipped the thing", "", "Kept it running"]
        );
    }

    #[test]
    fn test_set_entry_field_unknown_id_is_noop() {
        let mut state = make_state();
        let before = state.document.clone();
        apply(
            &mut state,
            DocumentPatch::SetExperienceField {
                id: 42,
                field: ExperienceField::Title,
                value: "Ghost".to_string(),
            },
        );
        apply(
            &mut state,
            DocumentPatch::SetEducationField {
                id: 42,
                field: EducationField::Degree,
                value: "Ghost".to_string(),
            },
        );
        assert_eq!(state.document, before);
    }

    #[test]
    fn test_set_education_field_targets_by_id() {
        let mut state = make_state();
        apply(
            &mut state,
            DocumentPatch::SetEducationField {
                id: 1,
                field: EducationField::Institution,
                value: "State College".to_string(),
            },
        );
        assert_eq!(state.document.education[0].institution, "State College");
    }

    // ── enhancement merge ───────────────────────────────────────────────────

    #[test]
    fn test_merge_replaces_only_matched_descriptions() {
        // Document entries {1, 2, 3}; response mentions {1, 3}.
        let mut state = make_state();
        apply(
            &mut state,
            DocumentPatch::AddEntry {
                list: EntryList::Experience,
            },
        );
        let untouched = state.document.experience[1].clone();

        let enhanced = make_enhanced(
            "New summary",
            &["Rust"],
            vec![
                make_rewrite(1, &["Rewritten one"]),
                make_rewrite(3, &["Rewritten three"]),
            ],
        );
        apply(&mut state, DocumentPatch::MergeEnhancement(enhanced));

        assert_eq!(
            state.document.experience[0].description,
            vec!["Rewritten one"]
        );
        assert_eq!(
            state.document.experience[2].description,
            vec!["Rewritten three"]
        );
        // Entry 2 is byte-for-byte what it was before the merge.
        assert_eq!(state.document.experience[1], untouched);
    }

    #[test]
    fn test_merge_ignores_unknown_response_ids() {
        let mut state = make_state();
        let enhanced = make_enhanced(
            "S",
            &[],
            vec![make_rewrite(99, &["Bullet for a ghost entry"])],
        );
        apply(&mut state, DocumentPatch::MergeEnhancement(enhanced));
        // No new entry appeared and no description changed.
        assert_eq!(state.document.experience.len(), 2);
        assert!(state.document.experience[0].description[0].starts_with("Led a team"));
    }

    #[test]
    fn test_merge_never_touches_fields_outside_contract() {
        let mut state = make_state();
        let before = state.document.clone();
        let enhanced = make_enhanced("S2", &["Go", "Rust"], vec![make_rewrite(1, &["B1", "B2"])]);
        apply(&mut state, DocumentPatch::MergeEnhancement(enhanced));
        let doc = &state.document;

        // The three merged surfaces changed as requested...
        assert_eq!(doc.summary, "S2");
        assert_eq!(doc.skills, vec!["Go", "Rust"]);
        assert_eq!(doc.experience[0].description, vec!["B1", "B2"]);

        // ...and everything else is exactly as before, including the
        // response's ignored name/title and the matched entry's own
        // company/dates.
        assert_eq!(doc.name, before.name);
        assert_eq!(doc.title, before.title);
        assert_eq!(doc.contact, before.contact);
        assert_eq!(doc.education, before.education);
        assert_eq!(doc.interests, before.interests);
        assert_eq!(doc.achievements, before.achievements);
        assert_eq!(doc.experience[0].title, before.experience[0].title);
        assert_eq!(doc.experience[0].company, before.experience[0].company);
        assert_eq!(doc.experience[0].dates, before.experience[0].dates);
        assert_eq!(doc.experience[1], before.experience[1]);
    }

    // ── replay determinism ──────────────────────────────────────────────────

    #[test]
    fn test_same_patch_sequence_reproduces_same_document() {
        let sequence = vec![
            DocumentPatch::SetField {
                field: TopField::Summary,
                value: "Short summary".to_string(),
            },
            DocumentPatch::AddEntry {
                list: EntryList::Experience,
            },
            DocumentPatch::SetExperienceField {
                id: 3,
                field: ExperienceField::Title,
                value: "Consultant".to_string(),
            },
            DocumentPatch::ReplaceDelimitedList {
                field: DelimitedField::Skills,
                raw: "A, B".to_string(),
            },
            DocumentPatch::RemoveEntry {
                list: EntryList::Experience,
                id: 2,
            },
        ];

        let mut first = make_state();
        let mut second = make_state();
        for patch in &sequence {
            apply(&mut first, patch.clone());
            apply(&mut second, patch.clone());
        }
        assert_eq!(first, second);
    }
}
