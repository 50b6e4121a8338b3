// Prompt constants for the domain-switch advisory.

use serde_json::Value;

/// System prompt; enforces JSON-only output.
pub const DOMAIN_SWITCH_SYSTEM: &str = "\
You are an expert career mentor and hiring strategist. \
You MUST respond with valid JSON only matching the requested schema, with \
no markdown fences, no text outside the JSON object.";

/// Advisory prompt template.
/// Replace `{user_info_json}` and `{target_domain}` before sending.
pub const DOMAIN_SWITCH_PROMPT_TEMPLATE: &str = r#"USER PROFILE (JSON):
{user_info_json}

TARGET DOMAIN:
{target_domain}

Analyze whether this domain transition is realistic and beneficial.

Guidelines:
- Be honest, practical, and personalized
- Consider current hiring trends
- Give realistic timelines
- Avoid generic advice

Return a JSON object with this EXACT schema:
{
  "target_domain": "the domain being analyzed",
  "is_switch_recommended": true or false,
  "recommendation_summary": "personalized explanation of the verdict",
  "current_strengths": ["..."],
  "transferable_skills": ["..."],
  "skills_to_develop": [
    {
      "skill": "...",
      "importance": "high" or "medium" or "low",
      "why_this_matters": "...",
      "suggested_resources": ["..."]
    }
  ],
  "learning_roadmap": [
    {
      "step": 1,
      "title": "...",
      "description": "...",
      "estimated_time": "e.g. '3 weeks', '2 months'"
    }
  ],
  "job_opportunities": [
    {
      "role": "...",
      "demand_level": "high" or "medium" or "low",
      "average_salary": "...",
      "description": "..."
    }
  ],
  "market_outlook": "...",
  "transition_difficulty": "easy" or "moderate" or "challenging",
  "estimated_transition_time": "...",
  "long_term_growth_potential": "...",
  "final_guidance": "..."
}"#;

/// Builds the advisory prompt for one profile and target domain.
pub fn build_domain_switch_prompt(profile_json: &Value, target_domain: &str) -> String {
    DOMAIN_SWITCH_PROMPT_TEMPLATE
        .replace("{user_info_json}", &profile_json.to_string())
        .replace("{target_domain}", target_domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_embeds_profile_and_target() {
        let profile = json!({ "skills": ["Rust"], "domain": "Web Development" });
        let prompt = build_domain_switch_prompt(&profile, "Data Science");
        assert!(prompt.contains(r#""skills":["Rust"]"#));
        assert!(prompt.contains("TARGET DOMAIN:\nData Science"));
        assert!(!prompt.contains("{user_info_json}"));
        assert!(!prompt.contains("{target_domain}"));
    }
}
