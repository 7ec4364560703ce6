//! Shared response types for API handlers.
//!
//! Use these instead of ad-hoc `serde_json::json!` literals so the
//! wire shapes stay consistent and compile-checked.

use serde::Serialize;

use folio_core::types::DbId;

use crate::upload::UploadFailure;

/// `201` response for entity creation: `{ "id": ... }`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
}

/// `{ "success": bool }` envelope for write operations.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Aggregated outcome of one image upload batch.
///
/// `success` is true only when every file in the batch was uploaded and
/// persisted. `images` holds the successful URLs in input order;
/// `failures` is present only when at least one file failed.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<UploadFailure>>,
}
