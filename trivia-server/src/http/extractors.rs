//! Custom Axum extractors
//!
//! Each one maps axum's rejection into [`ApiError`] so malformed input
//! gets the common error body.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{CategoryIndex, PaginationParams, QuestionId};

/// `?page=N`; absent means page 1
pub struct PageQuery(pub u32);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<PaginationParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(format!("invalid page parameter: {}", e)))?;

        Ok(Self(params.page.unwrap_or(1)))
    }
}

/// Integer question id from path.
///
/// `/questions/{segment}` with anything but digits only names the
/// POST-only search route, so any other verb gets 405. An all-digit id
/// too large for `QuestionId` cannot exist and is 404.
pub struct QuestionIdPath(pub QuestionId);

impl<S> FromRequestParts<S> for QuestionIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::NotFound(format!("no route for question id: {}", e)))?;

        parse_question_id(&segment).map(Self)
    }
}

fn parse_question_id(segment: &str) -> Result<QuestionId, ApiError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::MethodNotAllowed);
    }
    segment
        .parse::<QuestionId>()
        .map_err(|_| ApiError::NotFound(format!("question {}", segment)))
}

/// Zero-based category index from path
pub struct CategoryIndexPath(pub CategoryIndex);

impl<S> FromRequestParts<S> for CategoryIndexPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<i64> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::NotFound(format!("no route for category: {}", e)))?;

        let index = CategoryIndex::from_i64("category", raw)
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        Ok(Self(index))
    }
}

/// JSON body; any rejection is a 422
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Unprocessable(format!("invalid JSON body: {}", e)))?;

        Ok(Self(value))
    }
}
