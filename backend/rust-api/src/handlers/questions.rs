use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::handlers::ApiError;
use crate::models::{CreateQuestionRequest, ListQuery, SearchRequest};
use crate::services::{question_service::QuestionService, AppState};

/// GET /questions - paginated listing with the category index
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let service = QuestionService::new(state.store.clone());
    let page = service.list_all(query.page.unwrap_or(1)).await?;

    Ok(Json(json!({
        "success": true,
        "questions": page.questions,
        "total_questions": page.total_questions,
        "categories": page.categories,
    })))
}

/// POST /questions - create a question from its four required fields
pub async fn create_question(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::unprocessable(e.to_string()))?;

    let service = QuestionService::new(state.store.clone());
    let outcome = service.create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "created": outcome.created,
            "questions": outcome.questions,
            "total_questions": outcome.total_questions,
        })),
    ))
}

/// DELETE /questions/{id}
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    Path(question_id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let service = QuestionService::new(state.store.clone());
    let outcome = service
        .delete(question_id, query.page.unwrap_or(1))
        .await?;

    Ok(Json(json!({
        "success": true,
        "deleted": outcome.deleted,
        "questions": outcome.questions,
        "total_questions": outcome.total_questions,
    })))
}

/// POST /questions/search
///
/// An absent term falls back to the blank sentinel the frontend sends,
/// which the engine rejects as an invalid argument.
pub async fn search_questions(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let term = req.search_term.as_deref().unwrap_or(" ");

    let service = QuestionService::new(state.store.clone());
    let results = service.search(term).await?;

    Ok(Json(json!({
        "success": true,
        "questions": results.questions,
        "total_questions": results.total_questions,
    })))
}
