//! Image entity model.
//!
//! Image rows are created only by the upload orchestrator after a
//! successful remote upload, and destroyed only by their owning
//! project's cascade delete. There is no standalone image mutation.

use serde::Serialize;
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A row from the `images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Image {
    pub id: DbId,
    pub project_id: DbId,
    pub image_url: String,
    pub created_at: Timestamp,
}
