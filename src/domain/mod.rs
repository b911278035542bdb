//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod user;

pub use user::{is_truthy, CreateUser, UserDocument};

use crate::errors::AppResult;

/// Boundary validation for incoming payloads.
pub trait Validate {
    fn validate(&self) -> AppResult<()>;
}
