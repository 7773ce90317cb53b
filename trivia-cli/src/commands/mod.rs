pub mod migrate;
pub mod seed;
pub mod serve;

pub use migrate::run_migrate;
pub use seed::run_seed;
pub use serve::run_serve;

use anyhow::{Context, Result};
use clap::Args;
use trivia_server::db::{create_pool, PgStore};

/// Database connection arguments shared by subcommands
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

impl DatabaseArgs {
    /// Connect and run schema bootstrap when `migrate` is set.
    pub async fn open_store(&self, migrate: bool) -> Result<PgStore> {
        let url = self
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        let pool = create_pool(url)
            .await
            .context("Failed to create database pool")?;

        if migrate {
            trivia_server::db::migrations::run(&pool)
                .await
                .context("Failed to run migrations")?;
        }

        Ok(PgStore::new(pool))
    }
}
