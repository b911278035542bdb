//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - MongoDB client lifecycle
//! - Repositories over the `users` collection

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
