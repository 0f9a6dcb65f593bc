use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;
use trivia_api::{
    config::Config,
    create_router,
    models::{Category, Question},
    services::AppState,
    store::MemoryStore,
};

pub async fn create_test_app() -> Router {
    // Initialize tracing for tests
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    let config = Config {
        bind_addr: "127.0.0.1:0".to_string(),
        mongo_uri: "mongodb://unused-in-tests".to_string(),
        mongo_database: "trivia_test".to_string(),
    };

    let store = Arc::new(seeded_store());
    let app_state = Arc::new(AppState::new(config, store));

    create_router(app_state)
}

fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();

    for (id, name) in [
        (1, "Science"),
        (2, "Art"),
        (3, "Geography"),
        (4, "History"),
        (5, "Entertainment"),
        (6, "Sports"),
    ] {
        store.seed_category(Category {
            id,
            name: name.to_string(),
        });
    }

    let questions: &[(i64, &str, &str, i64, i32)] = &[
        (1, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
        (
            2,
            "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
            "Apollo 13",
            5,
            4,
        ),
        (
            3,
            "What boxer's original name is Cassius Clay?",
            "Muhammad Ali",
            4,
            1,
        ),
        (
            4,
            "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
            "Tom Cruise",
            5,
            4,
        ),
        (
            5,
            "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
            "Maya Angelou",
            4,
            2,
        ),
        (
            6,
            "Which is the only team to play in every soccer World Cup tournament?",
            "Brazil",
            6,
            3,
        ),
        (
            7,
            "Which country won the first ever soccer World Cup in 1930?",
            "Uruguay",
            6,
            4,
        ),
        (
            8,
            "The Taj Mahal is located in which Indian city?",
            "Agra",
            3,
            2,
        ),
        (
            9,
            "What is the heaviest organ in the human body?",
            "The Liver",
            1,
            4,
        ),
        (10, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
        (
            11,
            "Hematology is a branch of medicine involving the study of what?",
            "Blood",
            1,
            4,
        ),
        (
            12,
            "Which Dutch graphic artist was a creator of optical illusions?",
            "Escher",
            2,
            1,
        ),
        (13, "La Giaconda is better known as what?", "Mona Lisa", 2, 3),
        (
            14,
            "Who forged the One Ring in the fires of Mount Doom?",
            "Sauron",
            4,
            2,
        ),
    ];

    for (id, question, answer, category, difficulty) in questions {
        store.seed_question(Question {
            id: *id,
            question: question.to_string(),
            answer: answer.to_string(),
            category: *category,
            difficulty: *difficulty,
        });
    }

    store
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    parse(response).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    parse(response).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    parse(response).await
}

async fn parse(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}
