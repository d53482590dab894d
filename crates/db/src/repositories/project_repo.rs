//! Repository for the `projects` table.

use projecthub_core::filter::ProjectFilter;
use projecthub_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectDigest, StatusCount, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, status, start_date, end_date";

/// Listing order: newest start first, undated projects last.
const LIST_ORDER: &str = "ORDER BY start_date DESC NULLS LAST, name ASC";

/// Provides CRUD and aggregate queries for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project under the caller-supplied `id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (id, name, description, status, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects matching `filter`. Unpaginated.
    pub async fn list(pool: &PgPool, filter: &ProjectFilter) -> Result<Vec<Project>, sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.status.is_some() {
            conditions.push(format!("status = ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.name_contains.is_some() {
            conditions.push(format!("name ILIKE ${bind_idx}"));
            bind_idx += 1;
        }
        if filter.start_between.is_some() {
            conditions.push(format!(
                "start_date BETWEEN ${bind_idx} AND ${next_idx}",
                next_idx = bind_idx + 1
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("SELECT {COLUMNS} FROM projects {where_clause} {LIST_ORDER}");

        let mut q = sqlx::query_as::<_, Project>(&query);

        // Bind dynamic parameters in order.
        if let Some(status) = filter.status {
            q = q.bind(status);
        }
        if let Some(pattern) = filter.name_pattern() {
            q = q.bind(pattern);
        }
        if let Some(range) = filter.start_between {
            q = q.bind(range.from).bind(range.to);
        }

        q.fetch_all(pool).await
    }

    /// Update a project. Only fields present in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        // Dates: the outer Option says whether the key was sent, the inner
        // value (possibly NULL) is what gets written.
        let start_date_provided = input.start_date.is_some();
        let start_date_value = input.start_date.flatten();
        let end_date_provided = input.end_date.is_some();
        let end_date_value = input.end_date.flatten();

        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                start_date = CASE WHEN $5 THEN $6 ELSE start_date END,
                end_date = CASE WHEN $7 THEN $8 ELSE end_date END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.description.as_deref())
            .bind(input.status)
            .bind(start_date_provided)
            .bind(start_date_value)
            .bind(end_date_provided)
            .bind(end_date_value)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count projects per status, ascending by status. Statuses with no
    /// projects are omitted.
    pub async fn count_by_status(pool: &PgPool) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*) AS count
             FROM projects
             GROUP BY status
             ORDER BY status ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Name and description of every project, for the AI summary.
    pub async fn list_digests(pool: &PgPool) -> Result<Vec<ProjectDigest>, sqlx::Error> {
        sqlx::query_as::<_, ProjectDigest>(
            "SELECT name, description FROM projects ORDER BY name ASC",
        )
        .fetch_all(pool)
        .await
    }
}
