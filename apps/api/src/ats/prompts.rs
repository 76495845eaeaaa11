// All LLM prompt constants for the ATS feedback adapter.

/// Role half of the system prompt. The shared JSON-only fragment from
/// `llm_client::prompts` is appended at call time.
pub const ATS_ROLE: &str = "You are an advanced Applicant Tracking System (ATS) simulator. \
    You analyze resume text against a job description the way a screening \
    pipeline would.";

/// ATS feedback prompt template.
/// Replace `{resume_text}` and `{job_description}` before sending.
pub const ATS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume text against the provided job description.

Your tasks are:
1. Calculate an ATS compatibility score from 0 to 100 based on keyword matching, formatting, and relevance.
2. Identify keywords from the job description that are present and absent in the resume.
3. Provide 3-5 clear, actionable suggestions for improvement.

Return a JSON object with this EXACT schema (no extra fields, all fields required):
{
  "score": 72,
  "match_rate": "A short phrase describing the keyword match rate, e.g. 'High', 'Medium', 'Low'",
  "keyword_analysis": {
    "found": ["keywords from the job description that appear in the resume"],
    "missing": ["crucial keywords from the job description that are absent"]
  },
  "suggestions": ["actionable suggestions to improve the score and overall quality"]
}

RESUME TEXT:
---
{resume_text}
---

JOB DESCRIPTION:
---
{job_description}
---"#;
