//! Shape of the mock-interview quiz contract.

use serde::{Deserialize, Serialize};

/// A quiz always carries exactly this many questions.
pub const QUIZ_LENGTH: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McqOption {
    /// Option key: A, B, C or D.
    pub key: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McqQuestion {
    pub question: String,
    pub options: Vec<McqOption>,
    /// Key of the correct option; must match exactly one entry in `options`.
    pub correct_answer: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub questions: Vec<McqQuestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_deserializes() {
        let json = r#"{
            "questions": [
                {
                    "question": "What does ACID's I stand for?",
                    "options": [
                        {"key": "A", "text": "Integrity"},
                        {"key": "B", "text": "Isolation"},
                        {"key": "C", "text": "Idempotence"},
                        {"key": "D", "text": "Indexing"}
                    ],
                    "correct_answer": "B",
                    "explanation": "Transactions must not observe each other's partial state."
                }
            ]
        }"#;
        let quiz: QuizResponse = serde_json::from_str(json).unwrap();
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].options.len(), 4);
        assert_eq!(quiz.questions[0].correct_answer, "B");
    }
}
