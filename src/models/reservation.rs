//! Reservation model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use super::property::Property;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: i32,
    pub guest_id: i32,
    pub property_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A guest's reservation together with the reserved property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestReservation {
    pub reservation: Reservation,
    pub property: Property,
    /// `None` when the property has no reviews yet
    pub average_rating: Option<f64>,
}

// The joined row carries both `reservations.id` and the property columns, so
// the property id is read back from `property_id`.
impl<'r> FromRow<'r, PgRow> for GuestReservation {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let reservation = Reservation::from_row(row)?;
        let property = Property {
            id: reservation.property_id,
            owner_id: row.try_get("owner_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            thumbnail_photo_url: row.try_get("thumbnail_photo_url")?,
            cover_photo_url: row.try_get("cover_photo_url")?,
            cost_per_night: row.try_get("cost_per_night")?,
            parking_spaces: row.try_get("parking_spaces")?,
            number_of_bathrooms: row.try_get("number_of_bathrooms")?,
            number_of_bedrooms: row.try_get("number_of_bedrooms")?,
            country: row.try_get("country")?,
            street: row.try_get("street")?,
            city: row.try_get("city")?,
            province: row.try_get("province")?,
            post_code: row.try_get("post_code")?,
            active: row.try_get("active")?,
        };

        Ok(Self {
            reservation,
            property,
            average_rating: row.try_get("average_rating")?,
        })
    }
}

impl Reservation {
    /// Number of nights covered by the reservation
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
