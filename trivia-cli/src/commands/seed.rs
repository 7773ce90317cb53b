//! Load the stock categories

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::{seed_categories, DEFAULT_CATEGORIES};

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,

    /// Category labels to insert instead of the defaults (in id order)
    #[arg(long = "category", value_name = "LABEL")]
    pub categories: Vec<String>,
}

pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let store = args.db.open_store(true).await?;

    let labels: Vec<&str> = if args.categories.is_empty() {
        DEFAULT_CATEGORIES.to_vec()
    } else {
        args.categories.iter().map(String::as_str).collect()
    };

    let inserted = seed_categories(&store, &labels)
        .await
        .context("Failed to seed categories")?;

    if inserted == 0 {
        println!("Categories already present, nothing to do");
    } else {
        println!("✅ Seeded {} categories", inserted);
    }
    Ok(())
}
