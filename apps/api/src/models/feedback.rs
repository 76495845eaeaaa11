//! ATS feedback report. Display-only: nothing in here is ever merged back
//! into a document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    /// Job-description keywords found in the resume text.
    pub found: Vec<String>,
    /// Crucial keywords the resume is missing.
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsFeedback {
    /// Compatibility score, 0 to 100.
    pub score: u8,
    /// Short phrase describing the keyword match rate, e.g. "High".
    pub match_rate: String,
    pub keyword_analysis: KeywordAnalysis,
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_parses_from_model_output() {
        let json = r#"{
            "score": 72,
            "match_rate": "Medium",
            "keyword_analysis": {
                "found": ["React", "TypeScript"],
                "missing": ["Kubernetes"]
            },
            "suggestions": ["Add a DevOps bullet to the most recent role."]
        }"#;
        let feedback: AtsFeedback = serde_json::from_str(json).unwrap();
        assert_eq!(feedback.score, 72);
        assert_eq!(feedback.keyword_analysis.missing, vec!["Kubernetes"]);
    }

    #[test]
    fn test_feedback_rejects_missing_analysis() {
        let json = r#"{"score": 50, "match_rate": "Low", "suggestions": []}"#;
        assert!(serde_json::from_str::<AtsFeedback>(json).is_err());
    }
}
