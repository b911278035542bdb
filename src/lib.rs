//! User API - create and list users in a MongoDB collection
//!
//! # Architecture Layers
//!
//! - **app**: Application bootstrap
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User documents and field validation
//! - **services**: Application use cases
//! - **infra**: MongoDB client and repositories
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # Endpoints
//!
//! - `POST /add_user` - store a user document (`name` and `email` required)
//! - `GET /get_users` - list every stored user without its store id
//! - `GET /health` - database connectivity
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Check the database
//! cargo run -- ping
//! ```

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use app::{create_app, create_app_from_env, router_with_service};
pub use config::Config;
pub use domain::UserDocument;
pub use errors::{AppError, AppResult};
