// All LLM prompt constants for the enhancement adapter.

/// Role half of the system prompt. The shared JSON-only fragment from
/// `llm_client::prompts` is appended at call time.
pub const ENHANCE_ROLE: &str = "You are an expert resume writer and career coach. \
    You rewrite and optimize resume content to be highly ATS-friendly and \
    tailored to a specific job.";

/// Enhancement prompt template.
/// Replace `{resume_json}` and `{job_description}` before sending.
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"Analyze the following resume data and job description, then rewrite and optimize the resume content for that job.

Return a JSON object with this EXACT schema (no extra fields, all fields required):
{
  "name": "unchanged full name",
  "title": "unchanged job title",
  "summary": "A professional summary of 2-4 sentences, optimized with keywords from the job description",
  "experience": [
    {
      "id": 1,
      "title": "unchanged",
      "company": "unchanged",
      "location": "unchanged",
      "dates": "unchanged",
      "description": ["3-5 bullet points, rewritten to be action-oriented, results-driven, and tailored to the job description keywords"]
    }
  ],
  "skills": ["relevant skills, prioritizing those mentioned in the job description"]
}

Rules:
- Enhance the professional summary to be concise and impactful, incorporating key qualifications from the job description.
- Rewrite the experience bullet points to be action-oriented and quantify achievements where possible. Use the STAR (Situation, Task, Action, Result) method.
- Align the skills section with the requirements listed in the job description.
- Do NOT change personal details like name, contact info, company names, dates, or education details. Only enhance the summary, experience descriptions, and skills list.
- Keep every experience entry's "id" exactly as it appears in the resume data.

RESUME DATA:
{resume_json}

JOB DESCRIPTION:
{job_description}"#;
