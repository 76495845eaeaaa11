//! Typed edit operations.
//!
//! Every mutation the form editor can make is one variant of [`DocumentPatch`].
//! Field access deeper than the contact block is unrepresentable here, and the
//! delimiter for each list field is fixed by its variant rather than chosen by
//! the caller.

use serde::{Deserialize, Serialize};

use crate::models::resume::EnhancedResume;

/// Top-level scalar fields of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopField {
    Name,
    Title,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Email,
    Phone,
    Linkedin,
    Github,
    Website,
}

/// List fields edited as one delimited text blob.
/// Skills and interests split on commas with per-segment trimming;
/// achievements split on newlines with lines kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelimitedField {
    Skills,
    Interests,
    Achievements,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryList {
    Experience,
    Education,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Title,
    Company,
    Location,
    Dates,
    /// Multi-line value: one bullet per line, lines kept verbatim.
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Degree,
    Institution,
    Location,
    Dates,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DocumentPatch {
    /// Replace a top-level scalar field.
    SetField { field: TopField, value: String },
    /// Replace one field of the contact block.
    SetContactField { field: ContactField, value: String },
    /// Re-split a delimited text blob and replace the target list wholesale.
    ReplaceDelimitedList { field: DelimitedField, raw: String },
    /// Append a blank entry with a freshly allocated id.
    AddEntry { list: EntryList },
    /// Delete the entry with the given id. Unknown ids are a no-op.
    RemoveEntry { list: EntryList, id: u64 },
    /// Replace one field of the experience entry with the given id.
    SetExperienceField {
        id: u64,
        field: ExperienceField,
        value: String,
    },
    /// Replace one field of the education entry with the given id.
    SetEducationField {
        id: u64,
        field: EducationField,
        value: String,
    },
    /// Fold a successful AI rewrite into the document.
    MergeEnhancement(EnhancedResume),
}
