//! Database layer - connection pool and question store
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Single-statement queries only; no cross-statement transactions
//! - Every scan is ordered by id so pagination is stable
//! - The store is a trait object injected into the service

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod seed;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgStore;
pub use seed::{seed_categories, DEFAULT_CATEGORIES};
pub use store::{DbError, TriviaStore};
