//! Shape of the extraction contract: what the generator is asked to fill
//! and what the rest of the service trusts after validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resume::domains::FALLBACK_DOMAIN;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateInfo {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: String,
    /// Structured JSON rendition of the source document, stored as-is.
    #[serde(default)]
    pub resume_json: Value,
    #[serde(default)]
    pub domain: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationInfo {
    pub degree: String,
    #[serde(default)]
    pub field_of_study: Option<String>,
    pub college_name: String,
    #[serde(default)]
    pub university_name: Option<String>,
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default)]
    pub end_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateInfo {
    pub certificate_name: String,
    #[serde(default)]
    pub certificate_issuer: String,
    #[serde(default)]
    pub certificate_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub project_name: String,
    #[serde(default)]
    pub project_description: String,
    #[serde(default)]
    pub project_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillInfo {
    pub skill_name: String,
}

/// Full result of one extraction run. Constructed once per request, coerced
/// by validation, and never mutated afterwards. List fields are `None` when
/// the section was not found in the source text, never an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeExtraction {
    pub candidates: CandidateInfo,
    #[serde(default)]
    pub education: Option<Vec<EducationInfo>>,
    #[serde(default)]
    pub certificates: Option<Vec<CertificateInfo>>,
    #[serde(default)]
    pub projects: Option<Vec<ProjectInfo>>,
    #[serde(default)]
    pub skills: Option<Vec<SkillInfo>>,
    #[serde(default)]
    pub analysis: String,
    #[serde(default)]
    pub resume_score: i64,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub skill_analysis: String,
    #[serde(default)]
    pub suggested_projects: String,
}

impl ResumeExtraction {
    /// The successful "not a resume" outcome: nothing extracted, nothing
    /// scored. Persisted like any other result so callers see a uniform
    /// shape.
    pub fn empty() -> Self {
        Self {
            candidates: CandidateInfo {
                phone: None,
                bio: String::new(),
                resume_json: Value::Null,
                domain: FALLBACK_DOMAIN.to_string(),
            },
            education: None,
            certificates: None,
            projects: None,
            skills: None,
            analysis: "No resume content was detected in the uploaded document.".to_string(),
            resume_score: 0,
            domain: FALLBACK_DOMAIN.to_string(),
            skill_analysis: String::new(),
            suggested_projects: String::new(),
        }
    }
}

/// The four fields echoed back to the caller. Everything else is persisted
/// but not returned by the upload call.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeInsights {
    pub analysis: String,
    pub resume_score: i64,
    pub skill_analysis: String,
    pub suggested_projects: String,
}

impl From<&ResumeExtraction> for ResumeInsights {
    fn from(extraction: &ResumeExtraction) -> Self {
        Self {
            analysis: extraction.analysis.clone(),
            resume_score: extraction.resume_score,
            skill_analysis: extraction.skill_analysis.clone(),
            suggested_projects: extraction.suggested_projects.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_fixture() -> ResumeExtraction {
        let json = r#"{
            "candidates": {
                "phone": "+1 555 0100",
                "bio": "Backend engineer with 4 years of experience.",
                "resume_json": {"sections": ["education", "skills"]},
                "domain": "Web Development"
            },
            "education": [
                {
                    "degree": "B.Tech",
                    "field_of_study": "Computer Science",
                    "college_name": "Example Institute of Technology",
                    "university_name": "Example University",
                    "gpa": 8.4,
                    "start_year": 2017,
                    "end_year": 2021
                }
            ],
            "certificates": null,
            "projects": [
                {
                    "project_name": "Inventory API",
                    "project_description": "REST service for warehouse stock.",
                    "project_link": null
                }
            ],
            "skills": [{"skill_name": "Rust"}, {"skill_name": "PostgreSQL"}],
            "analysis": "Solid fundamentals, thin on production metrics.",
            "resume_score": 78,
            "domain": "Web Development",
            "skill_analysis": "You need to improve your cloud deployment skills.",
            "suggested_projects": "Build a rate-limited public API."
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_full_extraction_deserializes() {
        let extraction = full_fixture();
        assert_eq!(extraction.resume_score, 78);
        assert_eq!(extraction.domain, "Web Development");
        assert_eq!(extraction.education.as_ref().unwrap().len(), 1);
        assert!(extraction.certificates.is_none());
        assert_eq!(extraction.skills.as_ref().unwrap()[1].skill_name, "PostgreSQL");
        assert_eq!(
            extraction.candidates.phone.as_deref(),
            Some("+1 555 0100")
        );
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{
            "candidates": {"bio": "A person.", "domain": "AI/ML"},
            "analysis": "Sparse resume.",
            "resume_score": 20,
            "domain": "AI/ML"
        }"#;
        let extraction: ResumeExtraction = serde_json::from_str(json).unwrap();
        assert!(extraction.candidates.phone.is_none());
        assert!(extraction.education.is_none());
        assert!(extraction.skill_analysis.is_empty());
    }

    #[test]
    fn test_projection_carries_exactly_four_fields() {
        let insights = ResumeInsights::from(&full_fixture());
        let value = serde_json::to_value(&insights).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for key in ["analysis", "resume_score", "skill_analysis", "suggested_projects"] {
            assert!(object.contains_key(key), "missing projected field {key}");
        }
    }

    #[test]
    fn test_empty_result_has_no_sections() {
        let empty = ResumeExtraction::empty();
        assert!(empty.education.is_none());
        assert!(empty.certificates.is_none());
        assert!(empty.projects.is_none());
        assert!(empty.skills.is_none());
        assert_eq!(empty.resume_score, 0);
        assert_eq!(empty.domain, FALLBACK_DOMAIN);
    }
}
