//! HTTP server command for the trivia API

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{seed_categories, MemoryStore, TriviaStore, DEFAULT_CATEGORIES};
use trivia_server::{run_server, QuestionService, ServerConfig, TriviaConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins, methods, headers)
    #[arg(long)]
    pub cors_permissive: bool,

    /// Config file (default: ~/.trivia/config.toml if present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Serve from a process-local store seeded with the stock categories
    /// (ignores the database URL)
    #[arg(long)]
    pub in_memory: bool,

    /// Create tables before serving
    #[arg(long)]
    pub migrate: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let trivia_config = TriviaConfig::load(args.config.as_deref()).context("Failed to load config")?;
    tracing::info!(
        per_page = trivia_config.questions_per_page,
        validate_category = trivia_config.validate_category,
        selection = ?trivia_config.quiz_selection,
        "trivia config loaded"
    );

    let store: Arc<dyn TriviaStore> = if args.in_memory {
        tracing::warn!("Serving from in-memory store; data is lost on shutdown");
        let store = MemoryStore::new();
        seed_categories(&store, &DEFAULT_CATEGORIES).await?;
        Arc::new(store)
    } else {
        Arc::new(args.db.open_store(args.migrate).await?)
    };

    let service = QuestionService::new(store, trivia_config);
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    tracing::info!("Starting trivia server on {}", args.bind);

    // blocks until shutdown
    run_server(service, config).await.context("Server error")?;

    Ok(())
}
