//! Question service - orchestrates store queries per use case
//!
//! The store is injected at construction so tests can run the whole
//! service over [`MemoryStore`](crate::db::MemoryStore). Category ids here
//! are always natural ids; index arithmetic happens in the HTTP layer.

use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::config::{QuizSelection, TriviaConfig};
use crate::db::{DbError, TriviaStore};
use crate::models::{CategoryId, NewQuestion, Paginated, Pagination, Question, QuestionId};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service-level failure, one variant per externally visible outcome
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unprocessable: {0}")]
    Unprocessable(String),

    #[error(transparent)]
    Store(#[from] DbError),
}

/// Page of all questions plus every category label
#[derive(Debug, Clone)]
pub struct QuestionListing {
    pub page: Paginated<Question>,
    pub categories: Vec<String>,
}

/// Page of questions in one category
#[derive(Debug, Clone)]
pub struct CategoryListing {
    pub page: Paginated<Question>,
    pub current_category: CategoryId,
}

/// Outcome of asking for the next quiz question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPick {
    Question(Question),
    /// Every question in the category has been served
    GameOver,
}

#[derive(Clone)]
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
    config: TriviaConfig,
}

impl QuestionService {
    pub fn new(store: Arc<dyn TriviaStore>, config: TriviaConfig) -> Self {
        Self { store, config }
    }

    fn pagination(&self, page: u32) -> Pagination {
        Pagination::new(page, self.config.questions_per_page)
    }

    /// All questions by ascending id. An empty page is `NotFound`.
    pub async fn list_questions(&self, page: u32) -> ServiceResult<QuestionListing> {
        let questions = self.store.list_questions().await?;
        let mut page = self.pagination(page).slice(questions);
        if page.is_empty() {
            return Err(ServiceError::NotFound(format!("page {} of questions", page.page)));
        }
        page.total = self.store.count_questions().await?;

        Ok(QuestionListing {
            page,
            categories: self.list_categories().await?,
        })
    }

    /// Questions in `category`. Unknown categories are `BadRequest`; an
    /// empty page of a known category is not an error.
    pub async fn list_by_category(
        &self,
        category: CategoryId,
        page: u32,
    ) -> ServiceResult<CategoryListing> {
        let categories = self.store.list_categories().await?;
        if !categories.iter().any(|c| c.id == category) {
            return Err(ServiceError::BadRequest(format!("unknown category {}", category)));
        }

        let questions = self.store.questions_in_category(category).await?;
        Ok(CategoryListing {
            page: self.pagination(page).slice(questions),
            current_category: category,
        })
    }

    /// Category labels in id order.
    pub async fn list_categories(&self) -> ServiceResult<Vec<String>> {
        let categories = self.store.list_categories().await?;
        Ok(categories.into_iter().map(|c| c.kind).collect())
    }

    pub async fn get_question(&self, id: QuestionId) -> ServiceResult<Question> {
        self.store
            .get_question(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("question {}", id)))
    }

    /// Persist a new question. Every failure, including store errors,
    /// surfaces as `Unprocessable`.
    pub async fn create_question(&self, question: NewQuestion) -> ServiceResult<Question> {
        if self.config.validate_category {
            let categories = self.store.list_categories().await.map_err(|e| {
                tracing::warn!(error = %e, "category lookup failed during create");
                ServiceError::Unprocessable("category lookup failed".into())
            })?;
            if !categories.iter().any(|c| c.id == question.category) {
                tracing::warn!(category = %question.category, "rejecting question with unknown category");
                return Err(ServiceError::Unprocessable(format!(
                    "unknown category {}",
                    question.category
                )));
            }
        }

        let created = self.store.insert_question(question).await.map_err(|e| {
            tracing::error!(error = %e, "insert failed");
            ServiceError::Unprocessable("insert failed".into())
        })?;
        tracing::info!(id = created.id, category = %created.category, "question created");
        Ok(created)
    }

    /// Remove a question. Missing ids are `NotFound`, including a repeat
    /// delete; removal failures are `Unprocessable`.
    pub async fn delete_question(&self, id: QuestionId) -> ServiceResult<()> {
        if self.store.get_question(id).await?.is_none() {
            return Err(ServiceError::NotFound(format!("question {}", id)));
        }

        let removed = self.store.delete_question(id).await.map_err(|e| {
            tracing::error!(id, error = %e, "delete failed");
            ServiceError::Unprocessable("delete failed".into())
        })?;
        if !removed {
            // lost a race with a concurrent delete
            return Err(ServiceError::NotFound(format!("question {}", id)));
        }

        tracing::info!(id, "question deleted");
        Ok(())
    }

    /// Case-insensitive substring search on question text. An empty page
    /// is `NotFound`.
    pub async fn search_questions(
        &self,
        term: &str,
        page: u32,
    ) -> ServiceResult<Paginated<Question>> {
        let matches = self.store.search_questions(term).await?;
        tracing::debug!(term, matches = matches.len(), "search");

        let page = self.pagination(page).slice(matches);
        if page.is_empty() {
            return Err(ServiceError::NotFound(format!("no questions match '{}'", term)));
        }
        Ok(page)
    }

    /// Next question in `category` not among `previous`.
    pub async fn next_quiz_question(
        &self,
        category: CategoryId,
        previous: &[QuestionId],
    ) -> ServiceResult<QuizPick> {
        let in_category = self.store.questions_in_category(category).await?;
        if previous.len() == in_category.len() {
            return Ok(QuizPick::GameOver);
        }

        let candidates = if previous.is_empty() {
            in_category
        } else {
            self.store.unseen_in_category(category, previous).await?
        };

        Ok(pick(candidates, self.config.quiz_selection))
    }
}

fn pick(mut candidates: Vec<Question>, selection: QuizSelection) -> QuizPick {
    let chosen = match selection {
        QuizSelection::First if candidates.is_empty() => None,
        QuizSelection::First => Some(candidates.swap_remove(0)),
        QuizSelection::Random => candidates.choose(&mut rand::thread_rng()).cloned(),
    };
    chosen.map_or(QuizPick::GameOver, QuizPick::Question)
}
