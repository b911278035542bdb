//! User service unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};

use user_api::domain::UserDocument;
use user_api::errors::{AppError, AppResult};
use user_api::infra::UserRepository;
use user_api::services::{UserManager, UserService};

/// Repository that records every call
#[derive(Default)]
struct RecordingRepository {
    inserted: Mutex<Vec<UserDocument>>,
    find_calls: Mutex<usize>,
}

#[async_trait]
impl UserRepository for RecordingRepository {
    async fn insert(&self, user: UserDocument) -> AppResult<()> {
        self.inserted.lock().unwrap().push(user);
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<UserDocument>> {
        *self.find_calls.lock().unwrap() += 1;
        Ok(self.inserted.lock().unwrap().clone())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

fn user(value: Value) -> UserDocument {
    serde_json::from_value(value).unwrap()
}

fn service() -> (UserManager, Arc<RecordingRepository>) {
    let repo = Arc::new(RecordingRepository::default());
    (UserManager::new(repo.clone()), repo)
}

#[tokio::test]
async fn test_create_user_success() {
    let (service, repo) = service();

    assert_ok!(
        service
            .create_user(user(json!({"name": "John", "email": "john@example.com"})))
            .await
    );

    let inserted = repo.inserted.lock().unwrap();
    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0].get("email"), Some(&json!("john@example.com")));
}

#[tokio::test]
async fn test_create_user_missing_email() {
    let (service, repo) = service();

    let err = assert_err!(service.create_user(user(json!({"name": "John"}))).await);

    assert!(matches!(err, AppError::MissingFields));
    assert!(repo.inserted.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_user_empty_name() {
    let (service, repo) = service();

    let err = assert_err!(
        service
            .create_user(user(json!({"name": "", "email": "john@example.com"})))
            .await
    );

    assert!(matches!(err, AppError::MissingFields));
    assert!(repo.inserted.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_users_empty() {
    let (service, _) = service();

    let users = assert_ok!(service.list_users().await);
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_list_users_rereads_every_call() {
    let (service, repo) = service();

    service
        .create_user(user(json!({"name": "A", "email": "a@example.com"})))
        .await
        .unwrap();
    assert_eq!(service.list_users().await.unwrap().len(), 1);

    service
        .create_user(user(json!({"name": "B", "email": "b@example.com"})))
        .await
        .unwrap();
    assert_eq!(service.list_users().await.unwrap().len(), 2);

    assert_eq!(*repo.find_calls.lock().unwrap(), 2);
}

#[tokio::test]
async fn test_health_ok() {
    let (service, _) = service();
    assert_ok!(service.health().await);
}
