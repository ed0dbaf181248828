use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use sqlx::types::Json;

/// Placeholder stored in the resume blob until an upload replaces it.
pub const NO_RESUME_SENTINEL: &str = "No resume on file!";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDoc {
    pub original_filename: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicantEntry {
    pub applicant_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub resume: Json<ResumeDoc>,
}

impl ApplicantEntry {
    pub fn has_resume(&self) -> bool {
        self.resume.original_filename != NO_RESUME_SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applicant_with_resume(original_filename: &str) -> ApplicantEntry {
        ApplicantEntry {
            applicant_id: "a-1".into(),
            email: "jane@example.com".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            resume: Json(ResumeDoc {
                original_filename: original_filename.into(),
                extra: Map::new(),
            }),
        }
    }

    #[test]
    fn test_sentinel_means_no_resume() {
        assert!(!applicant_with_resume(NO_RESUME_SENTINEL).has_resume());
    }

    #[test]
    fn test_uploaded_filename_means_resume() {
        assert!(applicant_with_resume("jane-doe-cv.pdf").has_resume());
    }
}
