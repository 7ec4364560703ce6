pub mod booking;
pub mod image;
pub mod project;
pub mod upload;

use folio_core::error::CoreError;

/// Unwrap a required form field, rejecting absent or blank values.
///
/// Shared by every form validator so the error wording stays uniform.
pub(crate) fn required(value: Option<String>, field: &str) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}
