//! Ping command - Checks that the document store is reachable.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the ping command
pub async fn execute(config: Config) -> AppResult<()> {
    let database = Database::connect(&config).await?;
    database.ping().await?;

    tracing::info!(database = database.name(), "Database reachable");
    println!("ok");
    Ok(())
}
