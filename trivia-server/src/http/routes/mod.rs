//! Route handlers organized by resource

pub mod health;
pub mod questions;
pub mod categories;
pub mod quizzes;

use serde::{Serialize, Serializer};

use crate::models::CategoryId;

/// Serialize an unset category as `""` and a set one as its id.
pub(crate) fn serialize_current_category<S>(
    category: &Option<CategoryId>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match category {
        Some(id) => id.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}
