use crate::types::DbId;

/// Domain-level error type shared across the workspace.
///
/// HTTP mapping happens in `folio-api`; repositories return `sqlx::Error`
/// directly and handlers lift missing rows into [`CoreError::NotFound`].
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A required input field is missing or blank.
    #[error("{0}")]
    Validation(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}
