use axum::{
    http::{header, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

pub use config::Config;
pub use services::AppState;

pub fn create_router(app_state: std::sync::Arc<services::AppState>) -> Router {
    // The frontend is served from a different origin.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_origin(tower_http::cors::Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/categories", get(handlers::categories::all_categories))
        .route(
            "/categories/{id}/questions",
            get(handlers::categories::questions_by_category),
        )
        .route(
            "/questions",
            get(handlers::questions::list_questions).post(handlers::questions::create_question),
        )
        .route(
            "/questions/{id}",
            delete(handlers::questions::delete_question),
        )
        .route(
            "/questions/search",
            post(handlers::questions::search_questions),
        )
        .route("/quizzes", post(handlers::quizzes::next_quiz_question))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
