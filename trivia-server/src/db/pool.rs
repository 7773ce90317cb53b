//! Postgres pool for the question store

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Request handlers hold a connection for one statement at a time.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// A request waiting longer than this for a connection fails with a 500.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connect with the default connection limit.
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/trivia").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(max_connections, "connecting to database");
    PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations, PgStore, TriviaStore};

    // Run with: DATABASE_URL=postgres://... cargo test -p trivia-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_serves_store_after_bootstrap() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool_with_options(&url, 2).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("bootstrap failed");

        let store = PgStore::new(pool);
        let count = store.count_questions().await.expect("count failed");
        assert!(count >= 0);
    }
}
