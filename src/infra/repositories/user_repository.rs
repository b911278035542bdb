//! User repository backed by the `users` collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, Bson, Document},
    options::FindOptions,
    Collection,
};
use serde_json::Value;

use crate::domain::UserDocument;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a single document; the generated id is discarded
    async fn insert(&self, user: UserDocument) -> AppResult<()>;

    /// All documents in storage order, without the store id
    async fn find_all(&self) -> AppResult<Vec<UserDocument>>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Concrete implementation of UserRepository over the users collection
pub struct UserStore {
    database: Database,
    collection: Collection<Document>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(database: Database) -> Self {
        let collection = database.users();
        Self {
            database,
            collection,
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn insert(&self, user: UserDocument) -> AppResult<()> {
        let document = to_document(&user)?;
        let result = self.collection.insert_one(document, None).await?;

        tracing::debug!(id = %result.inserted_id, "User inserted");
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<UserDocument>> {
        let documents: Vec<Document> = self
            .collection
            .find(doc! {}, find_options())
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(from_document).collect()
    }

    async fn ping(&self) -> AppResult<()> {
        self.database.ping().await
    }
}

/// Full scan options; the store id is projected away.
fn find_options() -> FindOptions {
    FindOptions::builder()
        .projection(doc! { "_id": 0 })
        .build()
}

/// Convert a user document into BSON for storage.
fn to_document(user: &UserDocument) -> AppResult<Document> {
    Ok(bson::to_document(user.fields())?)
}

/// Convert a stored document back into JSON.
///
/// Non-JSON BSON types (dates, ObjectIds in extra fields) use relaxed
/// Extended JSON.
fn from_document(document: Document) -> AppResult<UserDocument> {
    match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(fields) => Ok(UserDocument::new(fields)),
        other => Err(AppError::internal(format!(
            "Stored user is not an object: {}",
            other
        ))),
    }
}
