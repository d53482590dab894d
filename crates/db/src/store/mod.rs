//! The store seam between HTTP handlers and persistence.
//!
//! [`ProjectStore`] owns the project lifecycle rules: field validation on
//! create and update, id assignment before insert, and `NotFound` for
//! unknown ids. [`PgProjectStore`] is the production implementation;
//! [`InMemoryProjectStore`] keeps the same semantics in process memory.

mod memory;
mod postgres;

use async_trait::async_trait;
use projecthub_core::error::CoreError;
use projecthub_core::filter::ProjectFilter;
use projecthub_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectDigest, StatusCount, UpdateProject};

pub use memory::InMemoryProjectStore;
pub use postgres::PgProjectStore;

/// Entity name used in `NotFound` errors.
pub const PROJECT_ENTITY: &str = "Project";

/// Errors returned by a [`ProjectStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain error (validation failure, unknown id).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backing database failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub(crate) fn not_found(id: DbId) -> Self {
        Self::Core(CoreError::NotFound {
            entity: PROJECT_ENTITY,
            id,
        })
    }
}

/// Persistence operations over projects.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Validate `input`, assign a fresh id and persist the project.
    async fn create(&self, input: CreateProject) -> Result<Project, StoreError>;

    /// Fetch one project, failing with `NotFound` if absent.
    async fn get(&self, id: DbId) -> Result<Project, StoreError>;

    /// All projects matching `filter`, newest start date first.
    async fn list(&self, filter: &ProjectFilter) -> Result<Vec<Project>, StoreError>;

    /// Apply the fields present in `input`, re-validating them first.
    async fn update(&self, id: DbId, input: &UpdateProject) -> Result<Project, StoreError>;

    /// Remove a project permanently.
    async fn delete(&self, id: DbId) -> Result<(), StoreError>;

    /// Per-status counts, ascending by status.
    async fn count_by_status(&self) -> Result<Vec<StatusCount>, StoreError>;

    /// Name and description of every project.
    async fn digests(&self) -> Result<Vec<ProjectDigest>, StoreError>;

    /// Whether the backing storage is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
