//! Repository for the `images` table.
//!
//! The 5-image quota is deliberately NOT enforced here: the upload
//! orchestrator decides for an entire batch at once, which a single-row
//! insert cannot do. This layer only persists and reads rows.

use sqlx::SqlitePool;

use folio_core::types::DbId;

use crate::models::image::Image;

const COLUMNS: &str = "id, project_id, image_url, created_at";

/// Provides persistence operations for project images.
pub struct ImageRepo;

impl ImageRepo {
    /// Count the images currently attached to a project.
    pub async fn count_by_project(pool: &SqlitePool, project_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM images WHERE project_id = ?1")
            .bind(project_id)
            .fetch_one(pool)
            .await
    }

    /// Insert a new image row, returning the created row.
    ///
    /// Fails with a foreign-key constraint error if `project_id` does
    /// not reference an existing project.
    pub async fn insert(
        pool: &SqlitePool,
        project_id: DbId,
        image_url: &str,
    ) -> Result<Image, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (project_id, image_url)
             VALUES (?1, ?2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(project_id)
            .bind(image_url)
            .fetch_one(pool)
            .await
    }

    /// List the image URLs for a project in insertion order.
    ///
    /// Returns an empty vec (not an error) when the project has no
    /// images or does not exist.
    pub async fn list_urls(pool: &SqlitePool, project_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT image_url FROM images WHERE project_id = ?1 ORDER BY id ASC")
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List every image, newest first.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Image>(&query).fetch_all(pool).await
    }

    /// Delete every image attached to a project. Idempotent; used only
    /// inside the project-delete transaction. Returns the number of
    /// rows removed.
    pub async fn delete_all_for_project<'e, E>(executor: E, project_id: DbId) -> Result<u64, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM images WHERE project_id = ?1")
            .bind(project_id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
