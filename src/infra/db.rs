//! Database connection and initialization.

use mongodb::{
    bson::{doc, Document},
    Client, Collection, Database as MongoDatabase,
};

use crate::config::{Config, DEFAULT_DATABASE_NAME, USERS_COLLECTION};
use crate::errors::AppResult;

/// Database wrapper for connection management.
///
/// The driver connects lazily: building the client only parses the
/// connection string, so an unreachable server is reported by the first
/// operation rather than here.
#[derive(Clone, Debug)]
pub struct Database {
    database: MongoDatabase,
}

impl Database {
    /// Build the client from the configured connection string.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let client = Client::with_uri_str(&config.mongo_uri).await?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE_NAME));

        tracing::info!(database = database.name(), "Database client configured");

        Ok(Self { database })
    }

    /// Name of the selected database.
    pub fn name(&self) -> &str {
        self.database.name()
    }

    /// Handle to the users collection.
    pub fn users(&self) -> Collection<Document> {
        self.database.collection(USERS_COLLECTION)
    }

    /// Check database connectivity with a `ping` command.
    pub async fn ping(&self) -> AppResult<()> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}
