//! AI enhancement adapter.
//!
//! Sends the rewriteable subset of a document plus the target job description
//! to the LLM and parses the response against the fixed [`EnhancedResume`]
//! schema. Merging the result back into the document is the reducer's job
//! (`editor::DocumentPatch::MergeEnhancement`), so a parse failure here means
//! the document was never touched.

pub mod handlers;
pub mod prompts;

use serde_json::json;

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::resume::{EnhancedResume, ResumeDocument};

/// Stand-in target when the user has not pasted a job description.
pub const FALLBACK_JOB_DESCRIPTION: &str = "A senior frontend developer role at a tech company.";

/// Builds the user prompt. Only the fields the model may rewrite (plus
/// name/title for context) are included; contact and education never leave
/// the server.
pub fn build_prompt(doc: &ResumeDocument, job_description: &str) -> String {
    let resume_json = json!({
        "name": doc.name,
        "title": doc.title,
        "summary": doc.summary,
        "experience": doc.experience,
        "skills": doc.skills,
    });
    let jd = if job_description.trim().is_empty() {
        FALLBACK_JOB_DESCRIPTION
    } else {
        job_description
    };
    prompts::ENHANCE_PROMPT_TEMPLATE
        .replace("{resume_json}", &resume_json.to_string())
        .replace("{job_description}", jd)
}

/// One shot, no retries. Any transport, API, or schema failure surfaces as
/// `EnhancementFailed`.
pub async fn request_enhancement(
    llm: &LlmClient,
    doc: &ResumeDocument,
    job_description: &str,
) -> Result<EnhancedResume, AppError> {
    let prompt = build_prompt(doc, job_description);
    let system = format!("{} {}", prompts::ENHANCE_ROLE, JSON_ONLY_SYSTEM);
    llm.call_json::<EnhancedResume>(&prompt, &system)
        .await
        .map_err(|e| AppError::EnhancementFailed(format!("enhancement call failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_substitutes_job_description() {
        let doc = ResumeDocument::starter();
        let prompt = build_prompt(&doc, "Backend engineer, Rust, Postgres.");
        assert!(prompt.contains("Backend engineer, Rust, Postgres."));
        assert!(!prompt.contains("{job_description}"));
        assert!(!prompt.contains("{resume_json}"));
    }

    #[test]
    fn test_blank_job_description_uses_fallback() {
        let doc = ResumeDocument::starter();
        for blank in ["", "   ", "\n\t"] {
            let prompt = build_prompt(&doc, blank);
            assert!(prompt.contains(FALLBACK_JOB_DESCRIPTION));
        }
    }

    #[test]
    fn test_prompt_carries_entry_ids_for_correlation() {
        let doc = ResumeDocument::starter();
        let prompt = build_prompt(&doc, "any");
        assert!(prompt.contains("\"id\":1"));
        assert!(prompt.contains("\"id\":2"));
    }

    #[test]
    fn test_prompt_excludes_contact_and_education() {
        let doc = ResumeDocument::starter();
        let prompt = build_prompt(&doc, "any");
        assert!(!prompt.contains("richard.johnson@email.com"));
        assert!(!prompt.contains("University of Technology"));
    }
}
