//! Domain models with validation at construction
//!
//! Request payloads are coerced into these types at the HTTP boundary.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod category;
pub mod question;
pub mod pagination;

pub use validation::ValidationError;
pub use category::{Category, CategoryId, CategoryIndex};
pub use question::{IntLike, NewQuestion, Question, QuestionId};
pub use pagination::{paginate, Paginated, Pagination, PaginationParams};
