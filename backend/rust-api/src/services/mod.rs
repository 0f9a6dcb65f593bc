use std::sync::Arc;

use crate::config::Config;
use crate::store::QuestionStore;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn QuestionStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn QuestionStore>) -> Self {
        Self { config, store }
    }
}

pub mod question_service;
pub mod quiz_service;
