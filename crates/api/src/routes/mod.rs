pub mod health;
pub mod project;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /projects                  list, create
/// /projects/search           search (?owner, ?location)
/// /projects/{id}             get, update, delete
/// /projects/{id}/images      upload batch (multipart)
///
/// /images                    list all stored image records
///
/// /bookings                  list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Project CRUD, search, and image uploads.
        .nest("/projects", project::router())
        // Flat listing of every stored image record.
        .route("/images", get(handlers::image::list_all))
        // Booking submission and listing.
        .route(
            "/bookings",
            get(handlers::booking::list).post(handlers::booking::create),
        )
}
