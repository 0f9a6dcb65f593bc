use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::models::{Category, NewQuestion, Question};
use crate::store::{QuestionStore, StoreError};

/// In-memory question store. Backs the test suite and any deployment
/// that has no MongoDB at hand; ordering and id assignment match the
/// durable store.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    questions: BTreeMap<i64, Question>,
    categories: BTreeMap<i64, Category>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a category, replacing any previous entry with the same id.
    pub fn seed_category(&self, category: Category) {
        let mut inner = self.inner.write().expect("memory store lock poisoned");
        inner.categories.insert(category.id, category);
    }

    /// Seeds a question under its own id and keeps the id sequence ahead
    /// of every seeded record.
    pub fn seed_question(&self, question: Question) {
        let mut inner = self.inner.write().expect("memory store lock poisoned");
        inner.next_id = inner.next_id.max(question.id);
        inner.questions.insert(question.id, question);
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        let inner = self.inner.read().expect("memory store lock poisoned");
        Ok(inner.questions.values().cloned().collect())
    }

    async fn find_question(&self, id: i64) -> Result<Option<Question>, StoreError> {
        let inner = self.inner.read().expect("memory store lock poisoned");
        Ok(inner.questions.get(&id).cloned())
    }

    async fn find_questions_by_category(
        &self,
        category: i64,
    ) -> Result<Vec<Question>, StoreError> {
        let inner = self.inner.read().expect("memory store lock poisoned");
        Ok(inner
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();
        let inner = self.inner.read().expect("memory store lock poisoned");
        Ok(inner
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<i64, StoreError> {
        let mut inner = self.inner.write().expect("memory store lock poisoned");
        let id = inner.next_id + 1;
        inner.next_id = id;
        inner.questions.insert(
            id,
            Question {
                id,
                question: new.question,
                answer: new.answer,
                category: new.category,
                difficulty: new.difficulty,
            },
        );
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().expect("memory store lock poisoned");
        Ok(inner.questions.remove(&id).is_some())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let inner = self.inner.read().expect("memory store lock poisoned");
        Ok(inner.categories.values().cloned().collect())
    }

    async fn find_category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        let inner = self.inner.read().expect("memory store lock poisoned");
        Ok(inner.categories.get(&id).cloned())
    }
}
