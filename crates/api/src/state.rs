use std::sync::Arc;

use folio_cloud::ObjectStorage;
use folio_notify::Notifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created once at startup.
    pub pool: folio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object-storage capability used by the upload orchestrator.
    pub storage: Arc<dyn ObjectStorage>,
    /// Booking notification capability.
    pub notifier: Arc<dyn Notifier>,
}
