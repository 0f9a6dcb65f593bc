use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Category, NewQuestion, Question};

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Any failure inside a store collaborator. The engine does not retry;
/// a store error surfaces to the caller exactly once.
#[derive(Debug, Error)]
#[error("store unavailable: {0}")]
pub struct StoreError(pub anyhow::Error);

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        StoreError(err)
    }
}

/// Durable question/category storage as the engine sees it.
///
/// Questions are listed in ascending id order. Per-call read-committed
/// consistency is the store's responsibility; the engine adds no locking
/// of its own.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    async fn find_question(&self, id: i64) -> Result<Option<Question>, StoreError>;

    async fn find_questions_by_category(&self, category: i64)
        -> Result<Vec<Question>, StoreError>;

    /// Case-insensitive substring match over question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    /// Inserts a question and returns the store-assigned identifier.
    async fn insert_question(&self, new: NewQuestion) -> Result<i64, StoreError>;

    /// Removes a question; `false` when no record had that id.
    async fn delete_question(&self, id: i64) -> Result<bool, StoreError>;

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn find_category(&self, id: i64) -> Result<Option<Category>, StoreError>;
}
