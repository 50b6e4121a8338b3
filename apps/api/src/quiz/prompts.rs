// Prompt constants for quiz generation.

use serde_json::Value;

use crate::quiz::models::QUIZ_LENGTH;

/// System prompt; enforces JSON-only output.
pub const QUIZ_SYSTEM: &str = "\
You are a technical interviewer preparing a screening quiz. \
You MUST respond with valid JSON only, with no markdown fences, no explanations, \
no text outside the JSON object.";

/// Quiz prompt template.
/// Replace `{quiz_length}` and `{user_info_json}` before sending.
pub const QUIZ_PROMPT_TEMPLATE: &str = r#"Using the candidate profile below, write a mock-interview quiz
for the candidate's primary domain.

CANDIDATE PROFILE (JSON):
{user_info_json}

Return a JSON object with this EXACT schema:
{
  "questions": [
    {
      "question": "...",
      "options": [
        {"key": "A", "text": "..."},
        {"key": "B", "text": "..."},
        {"key": "C", "text": "..."},
        {"key": "D", "text": "..."}
      ],
      "correct_answer": "A",
      "explanation": "..."
    }
  ]
}

RULES:
1. Exactly {quiz_length} questions.
2. Every question has exactly four options keyed A, B, C, D.
3. correct_answer must be one of the question's own option keys.
4. Pitch the difficulty at the candidate's level as evidenced by the profile."#;

/// Builds the quiz prompt for one profile.
pub fn build_quiz_prompt(profile_json: &Value) -> String {
    QUIZ_PROMPT_TEMPLATE
        .replace("{quiz_length}", &QUIZ_LENGTH.to_string())
        .replace("{user_info_json}", &profile_json.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_embeds_profile_and_length() {
        let profile = json!({ "domain": "AI/ML" });
        let prompt = build_quiz_prompt(&profile);
        assert!(prompt.contains(r#""domain":"AI/ML""#));
        assert!(prompt.contains("Exactly 10 questions"));
        assert!(!prompt.contains("{user_info_json}"));
    }
}
