//! Database module
//!
//! This module handles database connections and operations

pub mod connection;
pub mod query;
pub mod repositories;
pub mod service;

// Re-export commonly used database components
pub use connection::{DatabasePool, create_pool, health_check};
pub use query::{build_property_search, QueryParam, QueryPlan};
pub use repositories::{UserRepository, ReservationRepository, PropertyRepository};
pub use service::DatabaseService;
