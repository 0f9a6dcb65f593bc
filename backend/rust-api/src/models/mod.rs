use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// A trivia question as it travels over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// Payload for inserting a question; the store assigns the identifier.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// Read-only reference data. The display name is serialized as `type`,
/// the key existing datasets and clients use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub name: String,
}

/// Category id -> display name, ordered by id.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.name.clone()))
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, message = "question text is required"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer text is required"))]
    pub answer: String,
    #[validate(range(min = 1, message = "category must be a positive id"))]
    pub category: i64,
    #[validate(range(min = 1, message = "difficulty must be a positive integer"))]
    pub difficulty: i32,
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(req: CreateQuestionRequest) -> Self {
        NewQuestion {
            question: req.question,
            answer: req.answer,
            category: req.category,
            difficulty: req.difficulty,
        }
    }
}

/// Body of a quiz round. `quiz_category` and its `id` stay optional so a
/// malformed request surfaces as a validation failure instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryParam>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategoryParam {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub name: Option<String>,
}

/// Result of a paginated listing of every question.
#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteOutcome {
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CreateOutcome {
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}
