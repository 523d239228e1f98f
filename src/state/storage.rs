//! In-memory property storage
//!
//! This module holds the process-local property listings seeded from the
//! JSON fixture files. New listings get the next sequential identifier
//! (stored count + 1), assigned while the write lock is held so concurrent
//! inserts never share an id.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, error, info};
use crate::config::FixturesConfig;
use crate::models::{CreatePropertyRequest, Property, User};
use crate::utils::errors::{LightBnbError, Result};

/// Fixture-backed property store
#[derive(Debug, Default)]
pub struct PropertyStore {
    properties: RwLock<BTreeMap<i32, Property>>,
    /// Read-only baseline of fixture users
    users: BTreeMap<i32, User>,
}

impl PropertyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given records
    pub fn with_seed(properties: BTreeMap<i32, Property>, users: BTreeMap<i32, User>) -> Self {
        Self {
            properties: RwLock::new(properties),
            users,
        }
    }

    /// Load the property and user fixtures named in the configuration
    pub async fn load(config: &FixturesConfig) -> Result<Self> {
        let properties: BTreeMap<i32, Property> = read_fixture(Path::new(&config.properties_path)).await?;
        let users: BTreeMap<i32, User> = read_fixture(Path::new(&config.users_path)).await?;

        info!(
            properties = properties.len(),
            users = users.len(),
            "Fixtures loaded into memory"
        );
        Ok(Self::with_seed(properties, users))
    }

    /// Store a new listing and return it with its assigned id
    pub async fn add_property(&self, request: CreatePropertyRequest) -> Property {
        let mut properties = self.properties.write().await;

        // count + 1, stepping past ids already taken by sparse fixtures
        let mut id = properties.len() as i32 + 1;
        while properties.contains_key(&id) {
            id += 1;
        }

        let property = request.into_property(id);
        properties.insert(id, property.clone());
        debug!(property_id = id, owner_id = property.owner_id, "Property stored in memory");
        property
    }

    pub async fn get_property(&self, id: i32) -> Option<Property> {
        self.properties.read().await.get(&id).cloned()
    }

    /// Number of stored listings
    pub async fn len(&self) -> usize {
        self.properties.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.properties.read().await.is_empty()
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|user| user.email == email)
    }

    pub fn find_user_by_id(&self, id: i32) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

async fn read_fixture<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let wrap = |source: LightBnbError| LightBnbError::Fixture {
        path: path.to_path_buf(),
        source: Box::new(source),
    };

    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to read fixture");
        wrap(e.into())
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to parse fixture");
        wrap(e.into())
    })
}
