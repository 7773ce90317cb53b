//! Question records and the create-question payload

use serde::{Deserialize, Serialize};

use super::{CategoryId, ValidationError};

pub type QuestionId = i32;

/// Question record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: CategoryId,
}

/// Validated payload for inserting a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: CategoryId,
}

impl NewQuestion {
    /// Attach a store-assigned id.
    pub fn with_id(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            difficulty: self.difficulty,
            category: self.category,
        }
    }
}

/// Integer field that clients send either as a number or a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IntLike {
    Int(i64),
    Float(f64),
    Str(String),
}

impl IntLike {
    /// Coerce to an integer. Strings are trimmed; floats are accepted only
    /// when they carry no fractional part.
    pub fn coerce(&self, field: &'static str) -> Result<i64, ValidationError> {
        match self {
            Self::Int(v) => Ok(*v),
            Self::Float(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => Ok(*v as i64),
            Self::Float(v) => Err(ValidationError::NotNumeric {
                field,
                value: v.to_string(),
            }),
            Self::Str(s) => s.trim().parse().map_err(|_| ValidationError::NotNumeric {
                field,
                value: s.clone(),
            }),
        }
    }

    /// Coerce to an `i32`, rejecting values that do not fit.
    pub fn coerce_i32(&self, field: &'static str) -> Result<i32, ValidationError> {
        let value = self.coerce(field)?;
        i32::try_from(value).map_err(|_| ValidationError::OutOfRange { field, value })
    }
}
