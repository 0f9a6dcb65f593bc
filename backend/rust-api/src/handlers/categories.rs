use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::error::EngineError;
use crate::handlers::ApiError;
use crate::models::{category_map, ListQuery};
use crate::services::{question_service::QuestionService, AppState};

/// GET /categories - id to display name, ordered by id
pub async fn all_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state
        .store
        .list_categories()
        .await
        .map_err(EngineError::from)?;

    Ok(Json(json!({
        "success": true,
        "categories": category_map(&categories),
    })))
}

/// GET /categories/{id}/questions
pub async fn questions_by_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<i64>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let service = QuestionService::new(state.store.clone());
    let results = service
        .by_category(category_id, query.page.unwrap_or(1))
        .await?;

    Ok(Json(json!({
        "success": true,
        "questions": results.questions,
        "total_questions": results.total_questions,
        "current_category": results.current_category,
    })))
}
