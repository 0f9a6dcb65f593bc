use std::sync::Arc;

use crate::error::EngineError;
use crate::models::{
    category_map, CategoryQuestions, CreateOutcome, DeleteOutcome, NewQuestion, QuestionPage,
    SearchResults,
};
use crate::store::QuestionStore;
use crate::utils::pagination::{paginate, QUESTIONS_PER_PAGE};

/// Read and write operations over the question catalog. Every call takes
/// its inputs as parameters and leaves no state behind, so the service is
/// freely shareable across request handlers.
pub struct QuestionService {
    store: Arc<dyn QuestionStore>,
}

impl QuestionService {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// Paginated view of every question plus the full category index.
    ///
    /// `total_questions` counts the returned page, not the dataset.
    /// Existing clients read it that way, so the count stays as is
    /// (see DESIGN.md).
    pub async fn list_all(&self, page: i64) -> Result<QuestionPage, EngineError> {
        let questions = self.store.list_questions().await?;
        let categories = self.store.list_categories().await?;

        let current = paginate(&questions, page, QUESTIONS_PER_PAGE);
        let total_questions = current.len();

        Ok(QuestionPage {
            questions: current,
            total_questions,
            categories: category_map(&categories),
        })
    }

    /// Case-insensitive substring search over question text.
    ///
    /// `total_questions` reports the whole dataset rather than the match
    /// count; another count existing clients rely on (see DESIGN.md).
    pub async fn search(&self, term: &str) -> Result<SearchResults, EngineError> {
        if term.trim().is_empty() {
            return Err(EngineError::invalid_argument("search term is required"));
        }

        let matches = self.store.search_questions(term).await?;
        let total_questions = self.store.list_questions().await?.len();

        Ok(SearchResults {
            questions: paginate(&matches, 1, QUESTIONS_PER_PAGE),
            total_questions,
        })
    }

    /// Questions belonging to one category. An unknown category is
    /// `NotFound`; a known category with no questions is an empty page.
    pub async fn by_category(
        &self,
        category_id: i64,
        page: i64,
    ) -> Result<CategoryQuestions, EngineError> {
        let category = self
            .store
            .find_category(category_id)
            .await?
            .ok_or_else(|| EngineError::not_found(format!("unknown category {category_id}")))?;

        let matches = self.store.find_questions_by_category(category_id).await?;
        let total_questions = matches.len();

        Ok(CategoryQuestions {
            questions: paginate(&matches, page, QUESTIONS_PER_PAGE),
            total_questions,
            current_category: category.name,
        })
    }

    /// Removes a question and returns the refreshed first view. Either the
    /// record is gone and the follow-up read reflects that, or the call
    /// fails and nothing changed.
    pub async fn delete(&self, question_id: i64, page: i64) -> Result<DeleteOutcome, EngineError> {
        let existing = self.store.find_question(question_id).await?;
        if existing.is_none() {
            return Err(EngineError::not_found(format!(
                "unknown question {question_id}"
            )));
        }

        if !self.store.delete_question(question_id).await? {
            return Err(EngineError::not_found(format!(
                "unknown question {question_id}"
            )));
        }

        tracing::info!(question_id, "question deleted");

        let remaining = self.store.list_questions().await?;
        let total_questions = remaining.len();

        Ok(DeleteOutcome {
            deleted: question_id,
            questions: paginate(&remaining, page, QUESTIONS_PER_PAGE),
            total_questions,
        })
    }

    /// Inserts a new question; the store assigns the identifier.
    pub async fn create(&self, new: NewQuestion) -> Result<CreateOutcome, EngineError> {
        if new.question.trim().is_empty() {
            return Err(EngineError::invalid_argument("question text is required"));
        }
        if new.answer.trim().is_empty() {
            return Err(EngineError::invalid_argument("answer text is required"));
        }
        if new.category < 1 {
            return Err(EngineError::invalid_argument(
                "category must be a positive id",
            ));
        }
        if new.difficulty < 1 {
            return Err(EngineError::invalid_argument(
                "difficulty must be a positive integer",
            ));
        }

        let created = self.store.insert_question(new).await?;

        tracing::info!(question_id = created, "question created");

        let questions = self.store.list_questions().await?;
        let total_questions = questions.len();

        Ok(CreateOutcome {
            created,
            questions: paginate(&questions, 1, QUESTIONS_PER_PAGE),
            total_questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Question};
    use crate::store::MemoryStore;

    fn question(id: i64, text: &str, category: i64) -> Question {
        Question {
            id,
            question: text.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: 2,
        }
    }

    fn seeded_service() -> QuestionService {
        let store = MemoryStore::new();
        store.seed_category(Category {
            id: 1,
            name: "Science".to_string(),
        });
        store.seed_category(Category {
            id: 4,
            name: "History".to_string(),
        });
        for id in 1..=12 {
            store.seed_question(question(id, &format!("Question number {id}?"), 1));
        }
        store.seed_question(question(20, "Who forged the One Ring?", 4));
        QuestionService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn list_all_reports_page_count_and_categories() {
        let service = seeded_service();

        let first = service.list_all(1).await.unwrap();
        assert_eq!(first.questions.len(), 10);
        assert_eq!(first.total_questions, 10);
        assert_eq!(first.categories.get(&4).unwrap(), "History");

        let second = service.list_all(2).await.unwrap();
        assert_eq!(second.questions.len(), 3);
        assert_eq!(second.total_questions, 3);

        let past_end = service.list_all(50).await.unwrap();
        assert!(past_end.questions.is_empty());
        assert_eq!(past_end.total_questions, 0);
    }

    #[tokio::test]
    async fn search_rejects_blank_terms() {
        let service = seeded_service();

        assert!(matches!(
            service.search("").await,
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(matches!(
            service.search(" ").await,
            Err(EngineError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn search_is_case_insensitive_and_counts_whole_dataset() {
        let service = seeded_service();

        let results = service.search("ring").await.unwrap();
        assert_eq!(results.questions.len(), 1);
        assert_eq!(results.questions[0].id, 20);
        // Dataset count, not match count.
        assert_eq!(results.total_questions, 13);
    }

    #[tokio::test]
    async fn by_category_distinguishes_unknown_from_empty() {
        let store = MemoryStore::new();
        store.seed_category(Category {
            id: 7,
            name: "Geography".to_string(),
        });
        let service = QuestionService::new(Arc::new(store));

        let empty = service.by_category(7, 1).await.unwrap();
        assert!(empty.questions.is_empty());
        assert_eq!(empty.total_questions, 0);
        assert_eq!(empty.current_category, "Geography");

        assert!(matches!(
            service.by_category(99, 1).await,
            Err(EngineError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn by_category_counts_all_matches() {
        let service = seeded_service();

        let science = service.by_category(1, 2).await.unwrap();
        assert_eq!(science.questions.len(), 2);
        assert_eq!(science.total_questions, 12);
        assert_eq!(science.current_category, "Science");
    }

    #[tokio::test]
    async fn delete_removes_permanently() {
        let service = seeded_service();

        let outcome = service.delete(20, 1).await.unwrap();
        assert_eq!(outcome.deleted, 20);
        assert_eq!(outcome.total_questions, 12);

        let listing = service.list_all(2).await.unwrap();
        assert!(listing.questions.iter().all(|q| q.id != 20));

        assert!(matches!(
            service.delete(20, 1).await,
            Err(EngineError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_unknown_id_leaves_store_unchanged() {
        let service = seeded_service();

        assert!(matches!(
            service.delete(999, 1).await,
            Err(EngineError::NotFound(_))
        ));

        let listing = service.search("Question").await.unwrap();
        assert_eq!(listing.total_questions, 13);
    }

    #[tokio::test]
    async fn create_validates_fields() {
        let service = seeded_service();

        let blank_question = NewQuestion {
            question: "  ".to_string(),
            answer: "A".to_string(),
            category: 4,
            difficulty: 2,
        };
        assert!(matches!(
            service.create(blank_question).await,
            Err(EngineError::InvalidArgument(_))
        ));

        let zero_difficulty = NewQuestion {
            question: "Q?".to_string(),
            answer: "A".to_string(),
            category: 4,
            difficulty: 0,
        };
        assert!(matches!(
            service.create(zero_difficulty).await,
            Err(EngineError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn created_question_shows_up_in_listing() {
        let service = seeded_service();

        let outcome = service
            .create(NewQuestion {
                question: "Q?".to_string(),
                answer: "A".to_string(),
                category: 4,
                difficulty: 2,
            })
            .await
            .unwrap();

        assert_eq!(outcome.total_questions, 14);
        assert!(outcome.created > 20);

        let mut seen = Vec::new();
        for page in 1.. {
            let chunk = service.list_all(page).await.unwrap().questions;
            if chunk.is_empty() {
                break;
            }
            seen.extend(chunk.into_iter().map(|q| q.id));
        }
        assert!(seen.contains(&outcome.created));
    }
}
