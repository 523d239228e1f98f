//! LightBnB data-access layer
//!
//! Startup check: loads configuration, connects to the database, seeds the
//! in-memory store and reports readiness.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use lightbnb::{
    config::Settings,
    database::{create_pool, DatabaseService},
    state::PropertyStore,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", lightbnb::info());

    info!("Connecting to database...");
    let pool = create_pool(&settings.database)
        .await
        .context("failed to connect to the database")?;

    info!("Loading fixtures...");
    let store = Arc::new(PropertyStore::load(&settings.fixtures).await?);

    let service = DatabaseService::new(pool.clone(), store, &settings);

    info!(
        stored_properties = service.store().len().await,
        fixture_users = service.store().user_count(),
        default_limit = service.default_limit(),
        property_backend = ?settings.features.property_backend,
        "LightBnB data layer is ready"
    );

    pool.close().await;
    Ok(())
}
