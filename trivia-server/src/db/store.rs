//! Store contract for questions and categories

use async_trait::async_trait;

use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence for the trivia domain.
///
/// Every list method returns rows in ascending id order.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All questions.
    async fn list_questions(&self) -> Result<Vec<Question>, DbError>;

    async fn count_questions(&self) -> Result<i64, DbError>;

    /// Questions whose category equals `category`.
    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>, DbError>;

    /// Questions whose text contains `term`, ignoring case. `term` is
    /// matched literally.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError>;

    /// Questions in `category` whose id is not in `exclude`.
    async fn unseen_in_category(
        &self,
        category: CategoryId,
        exclude: &[QuestionId],
    ) -> Result<Vec<Question>, DbError>;

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, DbError>;

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, DbError>;

    /// Remove a question. Returns `false` when no row had that id.
    async fn delete_question(&self, id: QuestionId) -> Result<bool, DbError>;

    async fn list_categories(&self) -> Result<Vec<Category>, DbError>;

    /// Insert a category label. Used by seeding, not exposed over HTTP.
    async fn insert_category(&self, kind: &str) -> Result<Category, DbError>;
}
