//! ATS feedback adapter.
//!
//! Sends the rendered plain-text resume and the job description to the LLM
//! and parses the verdict verbatim into [`AtsFeedback`]. The score is the
//! model's, not ours: there is no local scoring pass, and nothing in the
//! report is ever merged into the document.

pub mod handlers;
pub mod prompts;

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::feedback::AtsFeedback;

pub fn build_prompt(resume_text: &str, job_description: &str) -> String {
    prompts::ATS_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}

/// One shot, no retries. Any transport, API, or schema failure surfaces as
/// `FeedbackFailed`.
pub async fn request_feedback(
    llm: &LlmClient,
    resume_text: &str,
    job_description: &str,
) -> Result<AtsFeedback, AppError> {
    let prompt = build_prompt(resume_text, job_description);
    let system = format!("{} {}", prompts::ATS_ROLE, JSON_ONLY_SYSTEM);
    llm.call_json::<AtsFeedback>(&prompt, &system)
        .await
        .map_err(|e| AppError::FeedbackFailed(format!("ATS feedback call failed: {e}")))
}
