//! LightBnB data-access layer
//!
//! Async functions to look up and register users, list a guest's
//! reservations, search property listings with optional filters and add new
//! listings. Users, reservations and searches are served from PostgreSQL;
//! new listings go to a fixture-seeded in-memory store unless the database
//! backend is configured.

pub mod config;
pub mod models;
pub mod database;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use crate::config::Settings;
pub use crate::utils::errors::{LightBnbError, Result};

// Re-export main components for easy access
pub use crate::database::DatabaseService;
pub use crate::state::PropertyStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
