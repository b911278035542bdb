//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Database
// =============================================================================

/// Default MongoDB connection string
pub const DEFAULT_MONGO_URI: &str = "mongodb://mongo:27017/userdb";

/// Database used when the connection string names none
pub const DEFAULT_DATABASE_NAME: &str = "userdb";

/// Collection holding user documents
pub const USERS_COLLECTION: &str = "users";

/// Reported by the health check when the store cannot be reached
pub const DATABASE_UNREACHABLE_MESSAGE: &str = "Database unreachable";

// =============================================================================
// Server
// =============================================================================

/// Default server host
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

// =============================================================================
// Users
// =============================================================================

/// Fields every user document must carry with a truthy value
pub const REQUIRED_USER_FIELDS: [&str; 2] = ["name", "email"];

/// Message returned when a required field is missing or empty
pub const MISSING_FIELDS_MESSAGE: &str = "Missing fields";

/// Message returned after a successful insert
pub const USER_ADDED_MESSAGE: &str = "User added successfully";
