//! Repository for the `bookings` table.

use sqlx::SqlitePool;

use crate::models::booking::{Booking, CreateBooking};

const COLUMNS: &str = "id, name, email, phone, location, message, created_at";

/// Provides persistence operations for booking requests.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (name, email, phone, location, message)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.location)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// List all bookings, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Booking>(&query).fetch_all(pool).await
    }
}
