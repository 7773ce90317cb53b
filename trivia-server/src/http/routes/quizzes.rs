//! Quiz play endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{CategoryIndex, IntLike, Question, QuestionId};
use crate::service::QuizPick;

/// POST /quizzes body
#[derive(Deserialize)]
pub struct QuizRequest {
    /// Zero-based category index
    pub quiz_category: IntLike,
    #[serde(default)]
    pub previous_questions: Vec<QuestionId>,
}

/// Either the next question or `false` once the category is exhausted
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuizQuestion {
    Next(Question),
    Done(bool),
}

impl From<QuizPick> for QuizQuestion {
    fn from(pick: QuizPick) -> Self {
        match pick {
            QuizPick::Question(q) => Self::Next(q),
            QuizPick::GameOver => Self::Done(false),
        }
    }
}

#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: QuizQuestion,
}

/// POST /quizzes
async fn next_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let raw = req.quiz_category.coerce("quiz_category")?;
    let category = CategoryIndex::from_i64("quiz_category", raw)?.to_id();

    let pick = state
        .service
        .next_quiz_question(category, &req.previous_questions)
        .await?;

    Ok(Json(QuizResponse {
        success: true,
        question: pick.into(),
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
