use async_trait::async_trait;
use projecthub_core::filter::ProjectFilter;
use projecthub_core::project::into_core_error;
use projecthub_core::types::{new_project_id, DbId};
use validator::Validate;

use super::{ProjectStore, StoreError};
use crate::models::project::{CreateProject, Project, ProjectDigest, StatusCount, UpdateProject};
use crate::repositories::ProjectRepo;
use crate::DbPool;

/// [`ProjectStore`] backed by the `projects` table.
#[derive(Clone)]
pub struct PgProjectStore {
    pool: DbPool,
}

impl PgProjectStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn create(&self, input: CreateProject) -> Result<Project, StoreError> {
        input.validate().map_err(into_core_error)?;

        let id = new_project_id();
        let project = ProjectRepo::create(&self.pool, id, &input).await?;
        tracing::debug!(project_id = %project.id, "Inserted project");
        Ok(project)
    }

    async fn get(&self, id: DbId) -> Result<Project, StoreError> {
        ProjectRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn list(&self, filter: &ProjectFilter) -> Result<Vec<Project>, StoreError> {
        Ok(ProjectRepo::list(&self.pool, filter).await?)
    }

    async fn update(&self, id: DbId, input: &UpdateProject) -> Result<Project, StoreError> {
        if let Err(errors) = input.validate() {
            // Unknown ids report NotFound ahead of field errors.
            self.get(id).await?;
            return Err(into_core_error(errors).into());
        }

        ProjectRepo::update(&self.pool, id, input)
            .await?
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        if ProjectRepo::delete(&self.pool, id).await? {
            Ok(())
        } else {
            Err(StoreError::not_found(id))
        }
    }

    async fn count_by_status(&self) -> Result<Vec<StatusCount>, StoreError> {
        Ok(ProjectRepo::count_by_status(&self.pool).await?)
    }

    async fn digests(&self) -> Result<Vec<ProjectDigest>, StoreError> {
        Ok(ProjectRepo::list_digests(&self.pool).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
