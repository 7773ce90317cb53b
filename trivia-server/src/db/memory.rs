//! In-memory store for tests and database-less runs
//!
//! Ids come from a monotonic counter and are never reused after delete,
//! matching `SERIAL` semantics.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, TriviaStore};
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId};

#[derive(Default)]
struct Tables {
    questions: Vec<Question>,
    categories: Vec<Category>,
    next_question_id: QuestionId,
    next_category_id: i32,
}

/// Vector-backed store guarded by an async RwLock
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding the given category labels (ids 1..=n).
    pub async fn with_categories<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let store = Self::new();
        {
            let mut tables = store.tables.write().await;
            for label in labels {
                tables.next_category_id += 1;
                let id = CategoryId::new(tables.next_category_id);
                tables.categories.push(Category {
                    id,
                    kind: label.as_ref().to_owned(),
                });
            }
        }
        store
    }

    /// Make every subsequent call fail with [`DbError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), DbError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DbError::Unavailable("memory store marked unavailable".into()));
        }
        Ok(())
    }

    async fn filtered<F>(&self, predicate: F) -> Result<Vec<Question>, DbError>
    where
        F: Fn(&Question) -> bool + Send,
    {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| predicate(q))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
        self.filtered(|_| true).await
    }

    async fn count_questions(&self) -> Result<i64, DbError> {
        self.check()?;
        Ok(self.tables.read().await.questions.len() as i64)
    }

    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>, DbError> {
        self.filtered(move |q| q.category == category).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let needle = term.to_lowercase();
        self.filtered(move |q| q.question.to_lowercase().contains(&needle))
            .await
    }

    async fn unseen_in_category(
        &self,
        category: CategoryId,
        exclude: &[QuestionId],
    ) -> Result<Vec<Question>, DbError> {
        self.filtered(|q| q.category == category && !exclude.contains(&q.id))
            .await
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, DbError> {
        self.check()?;
        let tables = self.tables.read().await;
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, DbError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        tables.next_question_id += 1;
        let record = question.with_id(tables.next_question_id);
        // ids are monotonic, so pushing keeps the vec sorted by id
        tables.questions.push(record.clone());
        Ok(record)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool, DbError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);
        Ok(tables.questions.len() != before)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        self.check()?;
        Ok(self.tables.read().await.categories.clone())
    }

    async fn insert_category(&self, kind: &str) -> Result<Category, DbError> {
        self.check()?;
        let mut tables = self.tables.write().await;
        tables.next_category_id += 1;
        let category = Category {
            id: CategoryId::new(tables.next_category_id),
            kind: kind.to_owned(),
        };
        tables.categories.push(category.clone());
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i32) -> NewQuestion {
        NewQuestion {
            question: text.into(),
            answer: "answer".into(),
            difficulty: 1,
            category: CategoryId::new(category),
        }
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.insert_question(new_question("one", 1)).await.unwrap();
        assert!(store.delete_question(first.id).await.unwrap());

        let second = store.insert_question(new_question("two", 1)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn unseen_excludes_ids_and_other_categories() {
        let store = MemoryStore::new();
        let a = store.insert_question(new_question("a", 1)).await.unwrap();
        let b = store.insert_question(new_question("b", 1)).await.unwrap();
        store.insert_question(new_question("c", 2)).await.unwrap();

        let unseen = store
            .unseen_in_category(CategoryId::new(1), &[a.id])
            .await
            .unwrap();
        assert_eq!(unseen, vec![b]);
    }

    #[tokio::test]
    async fn search_ignores_case() {
        let store = MemoryStore::new();
        store.insert_question(new_question("Which MAN walked first?", 1)).await.unwrap();
        store.insert_question(new_question("What is a woman's right?", 1)).await.unwrap();
        store.insert_question(new_question("Name a planet", 1)).await.unwrap();

        let found = store.search_questions("man").await.unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = MemoryStore::with_categories(["Science"]).await;
        store.set_unavailable(true);
        assert!(matches!(
            store.list_categories().await,
            Err(DbError::Unavailable(_))
        ));
        assert!(store.insert_question(new_question("x", 1)).await.is_err());
    }
}
