//! Property repository implementation

use std::time::Instant;

use sqlx::PgPool;
use tracing::error;
use crate::database::query::build_property_search;
use crate::models::property::{Property, PropertyListing, CreatePropertyRequest, PropertySearch};
use crate::utils::errors::LightBnbError;
use crate::utils::logging::{log_database_operation, log_generated_query};

#[derive(Clone, Debug)]
pub struct PropertyRepository {
    pool: PgPool,
}

impl PropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Reviewed properties matching `criteria`, cheapest first
    pub async fn search(&self, criteria: &PropertySearch, limit: i64) -> Result<Vec<PropertyListing>, LightBnbError> {
        let plan = build_property_search(criteria, limit);
        log_generated_query("search", &plan.sql, &plan.parameters);

        let started = Instant::now();
        let result = plan
            .query_as::<PropertyListing>()
            .fetch_all(&self.pool)
            .await;

        log_database_operation("search", "properties", started.elapsed().as_millis() as u64, result.is_ok());
        result.map_err(|e| {
            error!(criteria = ?criteria, error = %e, "Failed to search properties");
            e.into()
        })
    }

    /// Insert a listing into the properties table
    pub async fn create(&self, request: CreatePropertyRequest) -> Result<Property, LightBnbError> {
        let started = Instant::now();
        let result = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                                    cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                                    country, street, city, province, post_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#
        )
        .bind(request.owner_id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.thumbnail_photo_url)
        .bind(&request.cover_photo_url)
        .bind(request.cost_per_night)
        .bind(request.parking_spaces)
        .bind(request.number_of_bathrooms)
        .bind(request.number_of_bedrooms)
        .bind(&request.country)
        .bind(&request.street)
        .bind(&request.city)
        .bind(&request.province)
        .bind(&request.post_code)
        .fetch_one(&self.pool)
        .await;

        log_database_operation("create", "properties", started.elapsed().as_millis() as u64, result.is_ok());
        result.map_err(|e| {
            error!(owner_id = request.owner_id, error = %e, "Failed to insert property");
            e.into()
        })
    }
}
