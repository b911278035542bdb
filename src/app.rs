//! Application bootstrap - builds a fully wired router.

use std::sync::Arc;

use axum::Router;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;
use crate::services::UserService;

/// Build the application from environment configuration.
pub async fn create_app_from_env() -> AppResult<Router> {
    create_app(&Config::from_env()).await
}

/// Build the application: database handle, services, routes.
///
/// No connection is opened here; an unreachable store is reported by the
/// first request that touches it.
pub async fn create_app(config: &Config) -> AppResult<Router> {
    let database = Database::connect(config).await?;
    Ok(create_router(AppState::from_database(database)))
}

/// Build the router over an already constructed user service.
pub fn router_with_service(user_service: Arc<dyn UserService>) -> Router {
    create_router(AppState::new(user_service))
}
