//! Category identifiers
//!
//! The store addresses categories by their natural id (1-based, assigned
//! by the database). Clients address them by zero-based index. The only
//! place the two meet is [`CategoryIndex::to_id`].

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Natural category id as stored in the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct CategoryId(i32);

impl CategoryId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Zero-based category position used on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryIndex(u32);

impl CategoryIndex {
    /// Build an index from a client-supplied integer.
    ///
    /// Negative values and values whose natural id would overflow `i32`
    /// are rejected.
    pub fn from_i64(field: &'static str, value: i64) -> Result<Self, ValidationError> {
        if !(0..i32::MAX as i64).contains(&value) {
            return Err(ValidationError::OutOfRange { field, value });
        }
        Ok(Self(value as u32))
    }

    /// Natural id addressed by this index (`index + 1`).
    pub fn to_id(self) -> CategoryId {
        CategoryId(self.0 as i32 + 1)
    }
}

/// Category record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_shifts_by_one() {
        let index = CategoryIndex::from_i64("category", 0).unwrap();
        assert_eq!(index.to_id(), CategoryId::new(1));

        let index = CategoryIndex::from_i64("category", 4).unwrap();
        assert_eq!(index.to_id().get(), 5);
    }

    #[test]
    fn rejects_negative_index() {
        let err = CategoryIndex::from_i64("quiz_category", -1).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { value: -1, .. }));
    }

    #[test]
    fn rejects_index_that_overflows_id() {
        let err = CategoryIndex::from_i64("category", i32::MAX as i64).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn category_serializes_type_label() {
        let category = Category {
            id: CategoryId::new(1),
            kind: "Science".into(),
        };
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "type": "Science"}));
    }
}
