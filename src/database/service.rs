//! Database service layer
//!
//! This module provides the caller-facing interface to the data-access
//! operations: user lookup and registration, a guest's reservations,
//! property search, and adding a listing.

use std::sync::Arc;

use tracing::{debug, info};
use crate::config::{PropertyBackend, Settings};
use crate::database::{DatabasePool, UserRepository, ReservationRepository, PropertyRepository};
use crate::models::*;
use crate::state::PropertyStore;
use crate::utils::errors::{LightBnbError, Result};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub reservations: ReservationRepository,
    pub properties: PropertyRepository,
    store: Arc<PropertyStore>,
    default_limit: i64,
    property_backend: PropertyBackend,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool, store: Arc<PropertyStore>, settings: &Settings) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            reservations: ReservationRepository::new(pool.clone()),
            properties: PropertyRepository::new(pool),
            store,
            default_limit: settings.search.default_limit,
            property_backend: settings.features.property_backend,
        }
    }

    pub fn store(&self) -> &Arc<PropertyStore> {
        &self.store
    }

    pub fn default_limit(&self) -> i64 {
        self.default_limit
    }

    /// Resolve an optional caller limit against the configured default
    pub fn resolve_limit(&self, limit: Option<i64>) -> Result<i64> {
        match limit {
            None => Ok(self.default_limit),
            Some(limit) if limit > 0 => Ok(limit),
            Some(limit) => Err(LightBnbError::InvalidInput(format!(
                "limit must be greater than 0, got {}",
                limit
            ))),
        }
    }

    /// Get a single user by email; `Ok(None)` when no user has it
    pub async fn get_user_with_email(&self, email: &str) -> Result<Option<User>> {
        self.users.find_by_email(email).await
    }

    /// Get a single user by id; `Ok(None)` when it does not exist
    pub async fn get_user_with_id(&self, id: i32) -> Result<Option<User>> {
        self.users.find_by_id(id).await
    }

    /// Register a new user
    ///
    /// Fails with [`LightBnbError::ConstraintViolation`] when the email is
    /// already taken.
    pub async fn add_user(&self, request: CreateUserRequest) -> Result<User> {
        let user = self.users.create(request).await?;
        info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Reservations of one guest, earliest start date first
    pub async fn get_all_reservations(&self, guest_id: i32, limit: Option<i64>) -> Result<Vec<GuestReservation>> {
        let limit = self.resolve_limit(limit)?;
        self.reservations.list_for_guest(guest_id, limit).await
    }

    /// Search reviewed properties, cheapest first
    pub async fn get_all_properties(&self, criteria: &PropertySearch, limit: Option<i64>) -> Result<Vec<PropertyListing>> {
        let limit = self.resolve_limit(limit)?;
        criteria.validate()?;
        let listings = self.properties.search(criteria, limit).await?;
        debug!(results = listings.len(), limit = limit, "Property search completed");
        Ok(listings)
    }

    /// Add a listing to the configured property backend
    pub async fn add_property(&self, request: CreatePropertyRequest) -> Result<Property> {
        let property = match self.property_backend {
            PropertyBackend::Memory => self.store.add_property(request).await,
            PropertyBackend::Database => self.properties.create(request).await?,
        };

        info!(
            property_id = property.id,
            backend = ?self.property_backend,
            "Property added"
        );
        Ok(property)
    }
}
