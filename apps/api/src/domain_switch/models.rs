//! Shape of the domain-switch advisory contract.
//!
//! The three-level string sets are closed enums, so an out-of-vocabulary
//! value from the generator fails at deserialization instead of passing
//! through silently.

use serde::{Deserialize, Serialize};

/// Priority of a skill in the transition plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportanceLevel {
    High,
    Medium,
    Low,
}

/// Current hiring demand for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

/// How hard the switch is expected to be for this candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionDifficulty {
    Easy,
    Moderate,
    Challenging,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillToDevelop {
    pub skill: String,
    pub importance: ImportanceLevel,
    pub why_this_matters: String,
    pub suggested_resources: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub step: u32,
    pub title: String,
    pub description: String,
    pub estimated_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRole {
    pub role: String,
    pub demand_level: DemandLevel,
    pub average_salary: String,
    pub description: String,
}

/// Full advisory result, returned to the caller verbatim, with no projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainSwitchAnalysis {
    pub target_domain: String,
    pub is_switch_recommended: bool,
    pub recommendation_summary: String,
    pub current_strengths: Vec<String>,
    pub transferable_skills: Vec<String>,
    pub skills_to_develop: Vec<SkillToDevelop>,
    pub learning_roadmap: Vec<RoadmapStep>,
    pub job_opportunities: Vec<JobRole>,
    pub market_outlook: String,
    pub transition_difficulty: TransitionDifficulty,
    pub estimated_transition_time: String,
    pub long_term_growth_potential: String,
    pub final_guidance: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_importance_level_parses_lowercase() {
        let level: ImportanceLevel = serde_json::from_str(r#""high""#).unwrap();
        assert_eq!(level, ImportanceLevel::High);
    }

    #[test]
    fn test_out_of_vocabulary_importance_is_rejected() {
        assert!(serde_json::from_str::<ImportanceLevel>(r#""critical""#).is_err());
        assert!(serde_json::from_str::<ImportanceLevel>(r#""High""#).is_err());
    }

    #[test]
    fn test_transition_difficulty_vocabulary() {
        for (raw, expected) in [
            (r#""easy""#, TransitionDifficulty::Easy),
            (r#""moderate""#, TransitionDifficulty::Moderate),
            (r#""challenging""#, TransitionDifficulty::Challenging),
        ] {
            let parsed: TransitionDifficulty = serde_json::from_str(raw).unwrap();
            assert_eq!(parsed, expected);
        }
        assert!(serde_json::from_str::<TransitionDifficulty>(r#""hard""#).is_err());
    }

    #[test]
    fn test_full_analysis_deserializes() {
        let json = r#"{
            "target_domain": "Data Science",
            "is_switch_recommended": true,
            "recommendation_summary": "Your analytics background transfers well.",
            "current_strengths": ["SQL", "statistics coursework"],
            "transferable_skills": ["Python scripting", "dashboarding"],
            "skills_to_develop": [
                {
                    "skill": "Machine learning fundamentals",
                    "importance": "high",
                    "why_this_matters": "Core of most data science roles.",
                    "suggested_resources": ["fast.ai", "Hands-On ML"]
                }
            ],
            "learning_roadmap": [
                {
                    "step": 1,
                    "title": "Refresh statistics",
                    "description": "Work through inference and regression.",
                    "estimated_time": "3 weeks"
                }
            ],
            "job_opportunities": [
                {
                    "role": "Junior Data Scientist",
                    "demand_level": "medium",
                    "average_salary": "$95k-$120k",
                    "description": "Entry modelling and reporting work."
                }
            ],
            "market_outlook": "Stable demand with growth in applied ML.",
            "transition_difficulty": "moderate",
            "estimated_transition_time": "6-9 months",
            "long_term_growth_potential": "Strong over the next decade.",
            "final_guidance": "Ship two portfolio projects before applying."
        }"#;

        let analysis: DomainSwitchAnalysis = serde_json::from_str(json).unwrap();
        assert!(analysis.is_switch_recommended);
        assert_eq!(analysis.skills_to_develop[0].importance, ImportanceLevel::High);
        assert_eq!(analysis.job_opportunities[0].demand_level, DemandLevel::Medium);
        assert_eq!(analysis.transition_difficulty, TransitionDifficulty::Moderate);
        assert_eq!(analysis.learning_roadmap[0].step, 1);
    }

    #[test]
    fn test_analysis_with_invalid_demand_level_is_rejected() {
        let json = r#"{
            "role": "Analyst",
            "demand_level": "extreme",
            "average_salary": "$90k",
            "description": "x"
        }"#;
        assert!(serde_json::from_str::<JobRole>(json).is_err());
    }
}
