//! Create the trivia tables

use anyhow::Result;
use clap::Parser;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    args.db.open_store(true).await?;
    println!("✅ Schema is up to date");
    Ok(())
}
