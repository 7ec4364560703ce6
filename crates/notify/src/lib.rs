//! Best-effort notification email for new booking submissions.
//!
//! The [`Notifier`] trait is the seam the booking handler calls; the
//! SMTP implementation lives in [`email`]. Delivery failures are
//! reported to the caller but must never undo the booking write.

pub mod email;

use async_trait::async_trait;

pub use email::{EmailConfig, NotifyError, SmtpNotifier};

/// The fields carried into a booking notification message.
#[derive(Debug, Clone)]
pub struct BookingMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub message: Option<String>,
}

/// A fire-and-forget notification capability.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a notification for a newly created booking.
    async fn booking_created(&self, booking: &BookingMessage) -> Result<(), NotifyError>;
}

/// Notifier used when SMTP is not configured: logs and succeeds.
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn booking_created(&self, booking: &BookingMessage) -> Result<(), NotifyError> {
        tracing::info!(name = %booking.name, "SMTP not configured, skipping booking notification");
        Ok(())
    }
}
