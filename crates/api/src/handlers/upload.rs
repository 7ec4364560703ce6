//! Handler for `POST /projects/{id}/images`: the image attachment
//! endpoint.
//!
//! This is HTTP glue only; the batch semantics live in [`crate::upload`].
//! The quota gate runs here, before any storage call, so an oversized
//! batch is rejected with zero side effects. The check is not serialized
//! against other in-flight batches for the same project; that race is an
//! accepted limitation of this design.

use axum::extract::{Multipart, Path, State};
use axum::Json;

use folio_core::error::CoreError;
use folio_core::quota;
use folio_core::types::DbId;
use folio_db::repositories::{ImageRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::response::UploadResponse;
use crate::state::AppState;
use crate::upload::{run_batch, UploadPayload};

/// Fallback content type for file parts that do not declare one.
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// POST /api/projects/{id}/images
///
/// Multipart request whose file parts (field `images`) form one batch.
pub async fn upload_images(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    // Resolve the project before touching the quota or the store.
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    // Collect file parts in request order; the index is the identity
    // each per-file outcome is reported under.
    let mut files: Vec<UploadPayload> = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            // Non-file form fields are not part of the batch.
            continue;
        };
        let content_type = field
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        files.push(UploadPayload {
            index: files.len(),
            file_name,
            content_type,
            data,
        });
    }

    if files.is_empty() {
        return Err(AppError::BadRequest("No image files uploaded".to_string()));
    }

    // All-or-nothing quota gate for the whole batch; no uploads have
    // been attempted yet.
    let current = ImageRepo::count_by_project(&state.pool, project_id).await?;
    if !quota::batch_fits(current, files.len()) {
        return Err(AppError::QuotaExceeded {
            current,
            remaining: quota::remaining_slots(current),
        });
    }

    let outcome = run_batch(
        &state.pool,
        state.storage.as_ref(),
        state.config.upload_timeout,
        project_id,
        files,
    )
    .await;

    Ok(Json(UploadResponse {
        success: outcome.failures.is_empty(),
        images: outcome.urls,
        failures: if outcome.failures.is_empty() {
            None
        } else {
            Some(outcome.failures)
        },
    }))
}
