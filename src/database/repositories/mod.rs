//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod user;
pub mod reservation;
pub mod property;

// Re-export repositories
pub use user::UserRepository;
pub use reservation::ReservationRepository;
pub use property::PropertyRepository;
