//! Postgres-backed store
//!
//! All queries are single statements with bound parameters. Scans are
//! ordered by id so the service can paginate them deterministically.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, TriviaStore};
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId};

const QUESTION_COLUMNS: &str = "id, question, answer, difficulty, category";

/// Escape LIKE wildcards so `term` matches as a literal substring.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Question store over a connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_questions(&self) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn count_questions(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = $1 ORDER BY id"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let pattern = like_pattern(term);
        tracing::debug!(%pattern, "searching questions");

        let rows = sqlx::query_as::<_, Question>(&format!(
            r"SELECT {QUESTION_COLUMNS} FROM questions WHERE question ILIKE $1 ESCAPE '\' ORDER BY id"
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn unseen_in_category(
        &self,
        category: CategoryId,
        exclude: &[QuestionId],
    ) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions \
             WHERE category = $1 AND NOT (id = ANY($2)) \
             ORDER BY id"
        ))
        .bind(category)
        .bind(exclude)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, DbError> {
        let row = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, DbError> {
        let row = sqlx::query_as::<_, Question>(&format!(
            "INSERT INTO questions (question, answer, difficulty, category) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {QUESTION_COLUMNS}"
        ))
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.difficulty)
        .bind(question.category)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, DbError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert_category(&self, kind: &str) -> Result<Category, DbError> {
        let row = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (type) VALUES ($1) RETURNING id, type",
        )
        .bind(kind)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("man"), "%man%");
        assert_eq!(like_pattern("100%"), r"%100\%%");
        assert_eq!(like_pattern("a_b"), r"%a\_b%");
        assert_eq!(like_pattern(r"c:\"), r"%c:\\%");
    }

    // Integration tests - run with DATABASE_URL set
    // cargo test -p trivia-server -- --ignored

    async fn test_store() -> PgStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");
        PgStore::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_delete_round_trip() {
        let store = test_store().await;
        let created = store
            .insert_question(NewQuestion {
                question: "Which planet is known as the Red Planet?".into(),
                answer: "Mars".into(),
                difficulty: 1,
                category: CategoryId::new(1),
            })
            .await
            .expect("insert failed");

        let fetched = store.get_question(created.id).await.expect("get failed");
        assert_eq!(fetched.as_ref(), Some(&created));

        assert!(store.delete_question(created.id).await.expect("delete failed"));
        assert!(!store.delete_question(created.id).await.expect("delete failed"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn search_is_case_insensitive() {
        let store = test_store().await;
        let created = store
            .insert_question(NewQuestion {
                question: "What MANner of beast is a platypus?".into(),
                answer: "Monotreme".into(),
                difficulty: 2,
                category: CategoryId::new(1),
            })
            .await
            .expect("insert failed");

        let found = store.search_questions("manner").await.expect("search failed");
        assert!(found.iter().any(|q| q.id == created.id));

        store.delete_question(created.id).await.expect("cleanup failed");
    }
}
