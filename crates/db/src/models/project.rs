//! Project entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub owner_name: String,
    pub location: String,
    pub completion_date: Option<NaiveDate>,
    pub created_at: Timestamp,
}

/// DTO for creating a new project. Required fields are validated at the
/// API layer before this struct is built.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub owner_name: String,
    pub location: String,
    pub completion_date: Option<NaiveDate>,
}

/// DTO for replacing an existing project's fields. Updates are
/// full-field replacements, so the shape matches [`CreateProject`].
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: String,
    pub description: String,
    pub owner_name: String,
    pub location: String,
    pub completion_date: Option<NaiveDate>,
}

/// A project annotated with its attached image URLs, as returned by the
/// read endpoints (list / get / search).
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithImages {
    #[serde(flatten)]
    pub project: Project,
    pub images: Vec<String>,
}
