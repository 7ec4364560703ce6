//! Repository for the `projects` table.

use sqlx::SqlitePool;

use folio_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::repositories::ImageRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, owner_name, location, completion_date, created_at";

/// Provides CRUD and search operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, owner_name, location, completion_date)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.owner_name)
            .bind(&input.location)
            .bind(input.completion_date)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Replace all fields of a project.
    ///
    /// Returns `false` (not an error) if no row with the given `id`
    /// exists; storage faults still surface as `Err`.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET
                title = ?2,
                description = ?3,
                owner_name = ?4,
                location = ?5,
                completion_date = ?6
             WHERE id = ?1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.owner_name)
        .bind(&input.location)
        .bind(input.completion_date)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a project and all of its attached images.
    ///
    /// Both deletions run in one transaction: if the image cascade
    /// fails, the project row survives and the error propagates instead
    /// of reporting a partially-applied delete as success. Returns
    /// `false` if the project did not exist.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        ImageRepo::delete_all_for_project(&mut *tx, id).await?;

        let result = sqlx::query("DELETE FROM projects WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Search projects by substring on owner name and location.
    ///
    /// An empty filter matches everything for that field; both filters
    /// are ANDed. SQLite's LIKE is case-insensitive for ASCII, which is
    /// the contract here. Ordered by most recently created first.
    pub async fn search(
        pool: &SqlitePool,
        owner: &str,
        location: &str,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE owner_name LIKE '%' || ?1 || '%'
               AND location LIKE '%' || ?2 || '%'
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(owner)
            .bind(location)
            .fetch_all(pool)
            .await
    }
}
