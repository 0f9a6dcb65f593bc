use rand::seq::IndexedRandom;
use std::collections::HashSet;
use std::sync::Arc;

use crate::error::EngineError;
use crate::models::Question;
use crate::store::QuestionStore;

/// Category restriction for one quiz round. The wire encodes `All` as
/// category id 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

impl QuizScope {
    pub fn from_wire(id: i64) -> Self {
        if id == 0 {
            QuizScope::All
        } else {
            QuizScope::Category(id)
        }
    }
}

/// Picks quiz questions. Stateless: the caller owns session continuity by
/// accumulating previously served ids and resupplying them each round.
pub struct QuizService {
    store: Arc<dyn QuestionStore>,
}

impl QuizService {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// Uniform random pick over the in-scope questions not yet served.
    ///
    /// The exclusion happens before the draw, so a round is a single
    /// bounded pick even when most candidates were already seen. `None`
    /// means the scope is exhausted and the quiz is over.
    pub async fn next_question(
        &self,
        scope: QuizScope,
        previous_ids: &HashSet<i64>,
    ) -> Result<Option<Question>, EngineError> {
        let candidates = match scope {
            QuizScope::All => self.store.list_questions().await?,
            QuizScope::Category(id) => self.store.find_questions_by_category(id).await?,
        };

        let unseen: Vec<Question> = candidates
            .into_iter()
            .filter(|q| !previous_ids.contains(&q.id))
            .collect();

        Ok(unseen.choose(&mut rand::rng()).cloned())
    }
}
