//! Post-validation and coercion of generation results.
//!
//! Structured output from the generator is best-effort, not guaranteed:
//! every result passes through here before anything downstream trusts a
//! field.

use serde_json::Value;

use crate::resume::domains::canonical_domain;
use crate::resume::models::ResumeExtraction;

const SCORE_MIN: i64 = 0;
const SCORE_MAX: i64 = 100;

/// True when the generator signalled "this is not a resume": an empty JSON
/// object, or a result with no candidate block. This is a successful
/// outcome, not a contract violation.
pub fn is_empty_extraction(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::Object(map) => {
            map.is_empty() || map.get("candidates").map(Value::is_null).unwrap_or(true)
        }
        _ => false,
    }
}

/// Enforces the extraction contract on a parsed result: score clamped into
/// bounds, domains canonicalized against the fixed enumeration, empty list
/// sections coerced back to absent.
pub fn coerce_extraction(mut extraction: ResumeExtraction) -> ResumeExtraction {
    extraction.resume_score = extraction.resume_score.clamp(SCORE_MIN, SCORE_MAX);
    extraction.domain = canonical_domain(&extraction.domain).to_string();
    extraction.candidates.domain = canonical_domain(&extraction.candidates.domain).to_string();

    extraction.education = drop_if_empty(extraction.education);
    extraction.certificates = drop_if_empty(extraction.certificates);
    extraction.projects = drop_if_empty(extraction.projects);
    extraction.skills = drop_if_empty(extraction.skills);

    extraction
}

/// An empty list means the generator ignored the "null instead of empty"
/// instruction; absent is the canonical form.
fn drop_if_empty<T>(list: Option<Vec<T>>) -> Option<Vec<T>> {
    list.filter(|items| !items.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::domains::FALLBACK_DOMAIN;
    use crate::resume::models::{CertificateInfo, SkillInfo};
    use serde_json::json;

    fn extraction_with(score: i64, domain: &str) -> ResumeExtraction {
        let mut extraction = ResumeExtraction::empty();
        extraction.resume_score = score;
        extraction.domain = domain.to_string();
        extraction.candidates.domain = domain.to_string();
        extraction
    }

    #[test]
    fn test_score_above_bounds_is_clamped() {
        let coerced = coerce_extraction(extraction_with(150, "AI/ML"));
        assert_eq!(coerced.resume_score, 100);
    }

    #[test]
    fn test_score_below_bounds_is_clamped() {
        let coerced = coerce_extraction(extraction_with(-5, "AI/ML"));
        assert_eq!(coerced.resume_score, 0);
    }

    #[test]
    fn test_score_in_bounds_is_untouched() {
        let coerced = coerce_extraction(extraction_with(83, "AI/ML"));
        assert_eq!(coerced.resume_score, 83);
    }

    #[test]
    fn test_unknown_domain_maps_to_fallback() {
        let coerced = coerce_extraction(extraction_with(50, "Astrology"));
        assert_eq!(coerced.domain, FALLBACK_DOMAIN);
        assert_eq!(coerced.candidates.domain, FALLBACK_DOMAIN);
    }

    #[test]
    fn test_known_domain_is_preserved() {
        let coerced = coerce_extraction(extraction_with(50, "data science"));
        assert_eq!(coerced.domain, "Data Science");
    }

    #[test]
    fn test_empty_lists_coerce_to_absent() {
        let mut extraction = extraction_with(50, "AI/ML");
        extraction.certificates = Some(vec![]);
        extraction.skills = Some(vec![]);
        let coerced = coerce_extraction(extraction);
        assert!(coerced.certificates.is_none());
        assert!(coerced.skills.is_none());
    }

    #[test]
    fn test_non_empty_lists_survive() {
        let mut extraction = extraction_with(50, "AI/ML");
        extraction.certificates = Some(vec![CertificateInfo {
            certificate_name: "AWS SAA".to_string(),
            certificate_issuer: "Amazon".to_string(),
            certificate_date: None,
        }]);
        extraction.skills = Some(vec![SkillInfo {
            skill_name: "Rust".to_string(),
        }]);
        let coerced = coerce_extraction(extraction);
        assert_eq!(coerced.certificates.unwrap().len(), 1);
        assert_eq!(coerced.skills.unwrap().len(), 1);
    }

    #[test]
    fn test_empty_object_is_not_a_resume() {
        assert!(is_empty_extraction(&json!({})));
        assert!(is_empty_extraction(&Value::Null));
        assert!(is_empty_extraction(&json!({ "candidates": null })));
    }

    #[test]
    fn test_populated_object_is_a_resume() {
        assert!(!is_empty_extraction(
            &json!({ "candidates": { "bio": "x", "domain": "AI/ML" } })
        ));
    }

    #[test]
    fn test_non_object_is_not_empty() {
        // A bare string is a malformed result, not the empty signal.
        assert!(!is_empty_extraction(&json!("not a resume")));
    }
}
