use std::collections::BTreeMap;

use async_trait::async_trait;
use projecthub_core::filter::ProjectFilter;
use projecthub_core::project::into_core_error;
use projecthub_core::types::{new_project_id, DbId, StatusId};
use tokio::sync::RwLock;
use validator::Validate;

use super::{ProjectStore, StoreError};
use crate::models::project::{CreateProject, Project, ProjectDigest, StatusCount, UpdateProject};

/// [`ProjectStore`] holding projects in process memory.
///
/// Mirrors [`super::PgProjectStore`] ordering and validation. Concurrent
/// writers to the same record resolve last-write-wins.
#[derive(Default)]
pub struct InMemoryProjectStore {
    projects: RwLock<Vec<Project>>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn is_empty(&self) -> bool {
        self.projects.read().await.is_empty()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn create(&self, input: CreateProject) -> Result<Project, StoreError> {
        input.validate().map_err(into_core_error)?;

        let project = input.into_project(new_project_id());
        self.projects.write().await.push(project.clone());
        Ok(project)
    }

    async fn get(&self, id: DbId) -> Result<Project, StoreError> {
        self.projects
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn list(&self, filter: &ProjectFilter) -> Result<Vec<Project>, StoreError> {
        let mut matched: Vec<Project> = self
            .projects
            .read()
            .await
            .iter()
            .filter(|p| filter.matches(&p.name, p.status, p.start_date))
            .cloned()
            .collect();

        // `None < Some`, so reversing the comparison puts undated projects last.
        matched.sort_by(|a, b| {
            b.start_date
                .cmp(&a.start_date)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(matched)
    }

    async fn update(&self, id: DbId, input: &UpdateProject) -> Result<Project, StoreError> {
        let mut projects = self.projects.write().await;
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        input.validate().map_err(into_core_error)?;

        input.apply_to(project);
        Ok(project.clone())
    }

    async fn delete(&self, id: DbId) -> Result<(), StoreError> {
        let mut projects = self.projects.write().await;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() < before {
            Ok(())
        } else {
            Err(StoreError::not_found(id))
        }
    }

    async fn count_by_status(&self) -> Result<Vec<StatusCount>, StoreError> {
        let mut counts: BTreeMap<StatusId, i64> = BTreeMap::new();
        for project in self.projects.read().await.iter() {
            *counts.entry(project.status).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect())
    }

    async fn digests(&self) -> Result<Vec<ProjectDigest>, StoreError> {
        let mut digests: Vec<ProjectDigest> = self
            .projects
            .read()
            .await
            .iter()
            .map(|p| ProjectDigest {
                name: p.name.clone(),
                description: p.description.clone(),
            })
            .collect();
        digests.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(digests)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
