//! trivia-server: HTTP API for a trivia game
//!
//! Lists, paginates, searches, creates and deletes questions grouped by
//! category, and serves quiz questions that skip ones already seen.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod service;

pub use config::{ConfigError, QuizSelection, TriviaConfig};
pub use http::{build_router, run_server, ServerConfig};
pub use service::{QuestionService, QuizPick, ServiceError};
