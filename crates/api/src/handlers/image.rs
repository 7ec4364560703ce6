//! Handler for the global `/images` listing.

use axum::extract::State;
use axum::Json;

use folio_db::models::image::Image;
use folio_db::repositories::ImageRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/images -- every image across all projects, newest first.
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Image>>> {
    let images = ImageRepo::list_all(&state.pool).await?;
    Ok(Json(images))
}
