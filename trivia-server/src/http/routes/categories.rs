//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::questions::QuestionsResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{CategoryIndexPath, PageQuery};
use crate::http::server::AppState;

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<String>,
}

/// GET /categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.service.list_categories().await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{index}/questions?page=N
async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    CategoryIndexPath(index): CategoryIndexPath,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let listing = state.service.list_by_category(index.to_id(), page).await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions: listing.page.items,
        total_questions: listing.page.total,
        categories: None,
        current_category: Some(listing.current_category),
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(list_category_questions))
}
