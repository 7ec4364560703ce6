//! Booking submission and listing handlers.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use folio_core::error::CoreError;
use folio_db::models::{Booking, CreateBooking};
use folio_db::repositories::BookingRepo;
use folio_notify::BookingMessage;

use crate::error::{AppError, AppResult};
use crate::handlers::required;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Raw booking form. Every field is optional at the wire level so that
/// missing ones produce a field-specific validation error instead of a
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct BookingForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub message: Option<String>,
}

impl BookingForm {
    fn validate(self) -> Result<CreateBooking, CoreError> {
        Ok(CreateBooking {
            name: required(self.name, "name")?,
            email: required(self.email, "email")?,
            phone: required(self.phone, "phone")?,
            location: required(self.location, "location")?,
            message: self.message,
        })
    }
}

/// POST /api/bookings
///
/// Persists the booking first, then sends the notification email. A
/// notification failure does not undo the booking; it is surfaced as a
/// distinct error so the caller knows the record was saved.
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<BookingForm>,
) -> AppResult<Json<SuccessResponse>> {
    let data = form.validate()?;
    let booking = BookingRepo::create(&state.pool, &data).await?;

    let message = BookingMessage {
        name: booking.name.clone(),
        email: booking.email.clone(),
        phone: booking.phone.clone(),
        location: booking.location.clone(),
        message: booking.message.clone(),
    };
    if let Err(e) = state.notifier.booking_created(&message).await {
        tracing::error!(booking_id = booking.id, error = %e, "booking notification failed");
        return Err(AppError::NotificationFailed(e.to_string()));
    }

    Ok(Json(SuccessResponse { success: true }))
}

/// GET /api/bookings
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Booking>>> {
    let bookings = BookingRepo::list(&state.pool).await?;
    Ok(Json(bookings))
}
