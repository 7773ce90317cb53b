//! trivia CLI - runs and administers the trivia API
//!
//! - `serve`: HTTP API over Postgres (or an in-memory store)
//! - `migrate`: create the questions and categories tables
//! - `seed`: load the stock categories

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "HTTP API for a trivia game: questions, categories, and quiz play"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create database tables if missing
    Migrate(commands::migrate::MigrateArgs),
    /// Insert the stock categories into an empty database
    Seed(commands::seed::SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::Seed(args) => commands::run_seed(args).await?,
    }

    Ok(())
}
