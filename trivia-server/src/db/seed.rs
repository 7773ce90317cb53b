//! Category seeding
//!
//! Categories have no HTTP create route. They are loaded once, either by
//! `trivia seed` or when serving from the in-memory store.

use super::{DbError, TriviaStore};

/// Labels of the stock trivia categories, in id order
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Insert `labels` when the store holds no categories yet.
///
/// Returns the number of categories inserted; zero means the store was
/// already seeded and was left untouched.
pub async fn seed_categories(store: &dyn TriviaStore, labels: &[&str]) -> Result<usize, DbError> {
    let existing = store.list_categories().await?;
    if !existing.is_empty() {
        tracing::info!(count = existing.len(), "categories already present, skipping seed");
        return Ok(0);
    }

    for label in labels {
        store.insert_category(label).await?;
    }
    tracing::info!(count = labels.len(), "seeded categories");
    Ok(labels.len())
}
