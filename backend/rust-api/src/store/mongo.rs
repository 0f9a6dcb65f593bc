use anyhow::{anyhow, Context};
use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{FindOptions, ReturnDocument},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::models::{Category, NewQuestion, Question};
use crate::store::{QuestionStore, StoreError};

const QUESTIONS_COLLECTION: &str = "questions";
const CATEGORIES_COLLECTION: &str = "categories";
const COUNTERS_COLLECTION: &str = "counters";

/// MongoDB-backed question store. Identifiers are small sequential
/// integers handed out through a `counters` collection so they stay
/// stable and wire-compatible.
pub struct MongoStore {
    db: Database,
}

#[derive(Debug, Serialize, Deserialize)]
struct QuestionDocument {
    #[serde(rename = "_id")]
    id: i64,
    question: String,
    answer: String,
    category: i64,
    difficulty: i32,
    // Absent in datasets imported before the field existed.
    #[serde(default)]
    created_at: Option<mongodb::bson::DateTime>,
}

impl From<QuestionDocument> for Question {
    fn from(doc: QuestionDocument) -> Self {
        Question {
            id: doc.id,
            question: doc.question,
            answer: doc.answer,
            category: doc.category,
            difficulty: doc.difficulty,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CategoryDocument {
    #[serde(rename = "_id")]
    id: i64,
    #[serde(rename = "type")]
    name: String,
}

impl From<CategoryDocument> for Category {
    fn from(doc: CategoryDocument) -> Self {
        Category {
            id: doc.id,
            name: doc.name,
        }
    }
}

impl MongoStore {
    /// Connects and verifies the deployment responds to a ping before the
    /// server starts taking requests.
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let client = mongodb::Client::with_uri_str(&config.mongo_uri)
            .await
            .context("Failed to connect to MongoDB")?;
        let db = client.database(&config.mongo_database);

        db.run_command(doc! { "ping": 1 })
            .await
            .context("MongoDB did not answer ping")?;

        tracing::info!(database = %config.mongo_database, "MongoDB connected");

        Ok(Self { db })
    }

    fn questions(&self) -> Collection<QuestionDocument> {
        self.db.collection(QUESTIONS_COLLECTION)
    }

    fn categories(&self) -> Collection<CategoryDocument> {
        self.db.collection(CATEGORIES_COLLECTION)
    }

    async fn collect_questions(&self, filter: Document) -> Result<Vec<Question>, StoreError> {
        let find_options = FindOptions::builder().sort(doc! { "_id": 1 }).build();

        let cursor = self
            .questions()
            .find(filter)
            .with_options(find_options)
            .await
            .context("Failed to query questions")?;

        let docs: Vec<QuestionDocument> = cursor
            .try_collect()
            .await
            .context("Failed to collect question documents")?;

        Ok(docs.into_iter().map(Question::from).collect())
    }

    async fn next_question_id(&self) -> Result<i64, StoreError> {
        let counters: Collection<Document> = self.db.collection(COUNTERS_COLLECTION);
        let counter = counters
            .find_one_and_update(
                doc! { "_id": QUESTIONS_COLLECTION },
                doc! { "$inc": { "seq": 1i64 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
            .context("Failed to advance question id counter")?
            .ok_or_else(|| anyhow!("Counter upsert returned no document"))?;

        counter
            .get_i64("seq")
            .context("Counter document missing seq")
            .map_err(StoreError::from)
    }
}

#[async_trait]
impl QuestionStore for MongoStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .context("MongoDB ping failed")?;
        Ok(())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        self.collect_questions(Document::new()).await
    }

    async fn find_question(&self, id: i64) -> Result<Option<Question>, StoreError> {
        let doc = self
            .questions()
            .find_one(doc! { "_id": id })
            .await
            .context("Failed to fetch question")?;
        Ok(doc.map(Question::from))
    }

    async fn find_questions_by_category(
        &self,
        category: i64,
    ) -> Result<Vec<Question>, StoreError> {
        self.collect_questions(doc! { "category": category }).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let pattern = format!("(?i){}", regex::escape(term));
        self.collect_questions(doc! { "question": { "$regex": pattern } })
            .await
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<i64, StoreError> {
        let id = self.next_question_id().await?;
        let document = QuestionDocument {
            id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
            created_at: Some(mongodb::bson::DateTime::from_millis(
                Utc::now().timestamp_millis(),
            )),
        };

        self.questions()
            .insert_one(document)
            .await
            .context("Failed to insert question")?;

        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StoreError> {
        let result = self
            .questions()
            .delete_one(doc! { "_id": id })
            .await
            .context("Failed to delete question")?;
        Ok(result.deleted_count > 0)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let find_options = FindOptions::builder().sort(doc! { "_id": 1 }).build();

        let cursor = self
            .categories()
            .find(Document::new())
            .with_options(find_options)
            .await
            .context("Failed to query categories")?;

        let docs: Vec<CategoryDocument> = cursor
            .try_collect()
            .await
            .context("Failed to collect category documents")?;

        Ok(docs.into_iter().map(Category::from).collect())
    }

    async fn find_category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        let doc = self
            .categories()
            .find_one(doc! { "_id": id })
            .await
            .context("Failed to fetch category")?;
        Ok(doc.map(Category::from))
    }
}
