use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;

use crate::handlers::ApiError;
use crate::models::QuizRequest;
use crate::services::{
    quiz_service::{QuizScope, QuizService},
    AppState,
};

/// POST /quizzes - one unseen question at random, or null when the scope
/// is exhausted
pub async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuizRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let category_id = req
        .quiz_category
        .and_then(|c| c.id)
        .ok_or_else(|| ApiError::bad_request("quiz_category with an id field is required"))?;

    let previous_ids: HashSet<i64> = req.previous_questions.into_iter().collect();

    let service = QuizService::new(state.store.clone());
    let question = service
        .next_question(QuizScope::from_wire(category_id), &previous_ids)
        .await?;

    Ok(Json(json!({
        "success": true,
        "question": question,
    })))
}
