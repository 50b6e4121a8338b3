//! Mock-interview quiz generation over the stored profile.

pub mod models;
pub mod prompts;

use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;

use crate::auth::require_session;
use crate::errors::AppError;
use crate::state::AppState;

use self::models::{QuizResponse, QUIZ_LENGTH};
use self::prompts::{build_quiz_prompt, QUIZ_SYSTEM};

/// Referential-consistency check on a generated quiz: exactly ten questions,
/// and each `correct_answer` names exactly one of the question's own option
/// keys. The generator is not structurally guaranteed to satisfy either.
pub fn validate_quiz(quiz: &QuizResponse) -> Result<(), String> {
    if quiz.questions.len() != QUIZ_LENGTH {
        return Err(format!(
            "expected {QUIZ_LENGTH} questions, got {}",
            quiz.questions.len()
        ));
    }
    for (index, question) in quiz.questions.iter().enumerate() {
        let matches = question
            .options
            .iter()
            .filter(|option| option.key == question.correct_answer)
            .count();
        if matches != 1 {
            return Err(format!(
                "question {} has {} options matching correct_answer {:?}",
                index + 1,
                matches,
                question.correct_answer
            ));
        }
    }
    Ok(())
}

pub async fn generate_quiz(state: &AppState, user_id: i64) -> Result<QuizResponse, AppError> {
    let profile = state
        .store
        .get_full_candidate_profile(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No profile found for user {user_id}")))?;

    let prompt = build_quiz_prompt(&profile);
    let quiz = state
        .llm
        .call_json::<QuizResponse>(&prompt, QUIZ_SYSTEM)
        .await
        .map_err(AppError::from_generation)?;
    validate_quiz(&quiz).map_err(AppError::GenerationMalformed)?;
    Ok(quiz)
}

/// POST /mock_interview
pub async fn handle_mock_interview(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<QuizResponse>, AppError> {
    let user_id = require_session(&jar)?;
    let quiz = generate_quiz(&state, user_id).await?;
    Ok(Json(quiz))
}
