//! Question endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PageQuery, QuestionIdPath};
use crate::http::server::AppState;
use crate::models::{CategoryId, CategoryIndex, IntLike, NewQuestion, Question, ValidationError};

/// Page of questions
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(serialize_with = "super::serialize_current_category")]
    pub current_category: Option<CategoryId>,
}

/// Single question
#[derive(Serialize)]
pub struct QuestionResponse {
    pub success: bool,
    pub question: Question,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// POST /add body. Numeric fields accept numbers or numeric strings;
/// `category` is a zero-based index.
#[derive(Deserialize)]
pub struct AddQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<IntLike>,
    pub category: Option<IntLike>,
}

impl AddQuestionRequest {
    pub fn into_new_question(self) -> Result<NewQuestion, ValidationError> {
        let question = self.question.ok_or(ValidationError::Missing { field: "question" })?;
        let answer = self.answer.ok_or(ValidationError::Missing { field: "answer" })?;
        let difficulty = self
            .difficulty
            .ok_or(ValidationError::Missing { field: "difficulty" })?
            .coerce_i32("difficulty")?;
        let index = self
            .category
            .ok_or(ValidationError::Missing { field: "category" })?
            .coerce("category")?;
        let category = CategoryIndex::from_i64("category", index)?.to_id();

        Ok(NewQuestion {
            question,
            answer,
            difficulty,
            category,
        })
    }
}

/// GET /questions?page=N
async fn list_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let listing = state.service.list_questions(page).await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions: listing.page.items,
        total_questions: listing.page.total,
        categories: Some(listing.categories),
        current_category: None,
    }))
}

/// GET /questions/{id}
async fn get_question(
    State(state): State<Arc<AppState>>,
    QuestionIdPath(id): QuestionIdPath,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = state.service.get_question(id).await?;
    Ok(Json(QuestionResponse {
        success: true,
        question,
    }))
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<Arc<AppState>>,
    QuestionIdPath(id): QuestionIdPath,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.service.delete_question(id).await?;
    Ok(Json(DeleteResponse { success: true }))
}

/// POST /questions/{searchTerm}?page=N
async fn search_questions(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let result = state.service.search_questions(&term, page).await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions: result.items,
        total_questions: result.total,
        categories: None,
        current_category: None,
    }))
}

/// POST /add
async fn add_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<AddQuestionRequest>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let new_question = req.into_new_question()?;
    let question = state.service.create_question(new_question).await?;

    Ok(Json(QuestionResponse {
        success: true,
        question,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions))
        .route(
            "/questions/{id}",
            get(get_question)
                .delete(delete_question)
                .post(search_questions),
        )
        .route("/add", post(add_question))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> AddQuestionRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn add_request_shifts_category_index() {
        let new_question = request(serde_json::json!({
            "question": "Who rules the world?",
            "answer": "Nobody",
            "difficulty": "5",
            "category": "4"
        }))
        .into_new_question()
        .unwrap();

        assert_eq!(new_question.difficulty, 5);
        assert_eq!(new_question.category, CategoryId::new(5));
    }

    #[test]
    fn add_request_requires_fields() {
        let err = request(serde_json::json!({
            "question": "Incomplete?",
            "difficulty": 1,
            "category": 0
        }))
        .into_new_question()
        .unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "answer" });
    }

    #[test]
    fn add_request_rejects_non_numeric_category() {
        let err = request(serde_json::json!({
            "question": "q",
            "answer": "a",
            "difficulty": 1,
            "category": "science"
        }))
        .into_new_question()
        .unwrap_err();
        assert!(matches!(err, ValidationError::NotNumeric { field: "category", .. }));
    }

    #[test]
    fn unset_category_serializes_as_empty_string() {
        let body = QuestionsResponse {
            success: true,
            questions: vec![],
            total_questions: 0,
            categories: None,
            current_category: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["currentCategory"], "");
        assert_eq!(json["totalQuestions"], 0);
        assert!(json.get("categories").is_none());
    }
}
