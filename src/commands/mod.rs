//! Commands module - CLI command implementations.

pub mod ping;
pub mod serve;
