//! Booking entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A row from the `bookings` table. Bookings are write-once: never
/// mutated or deleted after creation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub message: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a booking. Required fields are validated at the API
/// layer before this struct is built.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub message: Option<String>,
}
