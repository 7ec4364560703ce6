//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::project::{CreateProject, Project, ProjectWithImages, UpdateProject};
use folio_db::repositories::{ImageRepo, ProjectRepo};
use folio_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::required;
use crate::response::{CreatedResponse, SuccessResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request forms
// ---------------------------------------------------------------------------

/// Incoming project fields. Presence of the required fields is checked
/// here, before any repository call, so a missing field is a 400 and
/// never a storage error.
#[derive(Debug, Deserialize)]
pub struct ProjectForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub owner_name: Option<String>,
    pub location: Option<String>,
    pub completion_date: Option<NaiveDate>,
}

impl ProjectForm {
    fn validate(self) -> Result<CreateProject, CoreError> {
        Ok(CreateProject {
            title: required(self.title, "title")?,
            description: required(self.description, "description")?,
            owner_name: required(self.owner_name, "owner_name")?,
            location: required(self.location, "location")?,
            completion_date: self.completion_date,
        })
    }
}

/// Query parameters for `/projects/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub owner: Option<String>,
    pub location: Option<String>,
}

// ---------------------------------------------------------------------------
// Read-path aggregation
// ---------------------------------------------------------------------------

/// Annotate each project with its image URLs.
///
/// Image fetches for the batch run concurrently; any single fetch fault
/// fails the whole request (partial read results would be misleading).
async fn with_images(
    pool: &DbPool,
    projects: Vec<Project>,
) -> Result<Vec<ProjectWithImages>, sqlx::Error> {
    futures::future::try_join_all(projects.into_iter().map(|project| async move {
        let images = ImageRepo::list_urls(pool, project.id).await?;
        Ok::<_, sqlx::Error>(ProjectWithImages { project, images })
    }))
    .await
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<ProjectForm>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let input = form.validate()?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: project.id })))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectWithImages>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(with_images(&state.pool, projects).await?))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectWithImages>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    let images = ImageRepo::list_urls(&state.pool, project.id).await?;
    Ok(Json(ProjectWithImages { project, images }))
}

/// PUT /api/projects/{id}
///
/// Full-field replacement: every field is taken from the request body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(form): Json<ProjectForm>,
) -> AppResult<Json<SuccessResponse>> {
    let fields = form.validate()?;
    let input = UpdateProject {
        title: fields.title,
        description: fields.description,
        owner_name: fields.owner_name,
        location: fields.location,
        completion_date: fields.completion_date,
    };
    let updated = ProjectRepo::update(&state.pool, id, &input).await?;
    if updated {
        Ok(Json(SuccessResponse { success: true }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// DELETE /api/projects/{id}
///
/// Cascades to the project's images; both deletions apply atomically or
/// not at all.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(SuccessResponse { success: true }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// GET /api/projects/search?owner=&location=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<ProjectWithImages>>> {
    let owner = params.owner.unwrap_or_default();
    let location = params.location.unwrap_or_default();
    let projects = ProjectRepo::search(&state.pool, &owner, &location).await?;
    Ok(Json(with_images(&state.pool, projects).await?))
}
