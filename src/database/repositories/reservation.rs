//! Reservation repository implementation

use std::time::Instant;

use sqlx::PgPool;
use tracing::error;
use crate::models::reservation::GuestReservation;
use crate::utils::errors::LightBnbError;
use crate::utils::logging::log_database_operation;

#[derive(Clone, Debug)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Reservations made by a guest, earliest stay first, joined with the
    /// reserved property and its average rating
    pub async fn list_for_guest(&self, guest_id: i32, limit: i64) -> Result<Vec<GuestReservation>, LightBnbError> {
        let started = Instant::now();
        let result = sqlx::query_as::<_, GuestReservation>(
            r#"
            SELECT reservations.id, reservations.guest_id, reservations.property_id,
                   reservations.start_date, reservations.end_date,
                   properties.owner_id, properties.title, properties.description,
                   properties.thumbnail_photo_url, properties.cover_photo_url,
                   properties.cost_per_night, properties.parking_spaces,
                   properties.number_of_bathrooms, properties.number_of_bedrooms,
                   properties.country, properties.street, properties.city,
                   properties.province, properties.post_code, properties.active,
                   AVG(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
            GROUP BY properties.id, reservations.id
            ORDER BY reservations.start_date
            LIMIT $2
            "#
        )
        .bind(guest_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await;

        log_database_operation("list_for_guest", "reservations", started.elapsed().as_millis() as u64, result.is_ok());
        result.map_err(|e| {
            error!(guest_id = guest_id, error = %e, "Failed to load reservations");
            e.into()
        })
    }
}
