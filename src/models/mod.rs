//! Data models module
//!
//! This module contains all data structures used throughout the crate

pub mod user;
pub mod property;
pub mod reservation;

// Re-export commonly used models
pub use user::{User, CreateUserRequest};
pub use property::{Property, PropertyListing, CreatePropertyRequest, PropertySearch};
pub use reservation::{Reservation, GuestReservation};
