//! Handlers for the `/projects` resource.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use projecthub_core::project::MISSING_REQUIRED_FIELDS;
use projecthub_core::summary::{build_summary_prompt, NO_PROJECTS_MESSAGE};
use projecthub_core::types::{DbId, ProjectDate, StatusId};
use projecthub_db::models::project::{CreateProject, Project, StatusCount, UpdateProject};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::query::ProjectListParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

/// Body of `POST /projects`. Required fields are optional here so their
/// absence can be reported with a single message before store validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<StatusId>,
    pub start_date: Option<ProjectDate>,
    pub end_date: Option<ProjectDate>,
}

impl CreateProjectRequest {
    /// Returns `None` when `name`, `description` or `status` is missing,
    /// empty, or zero.
    pub fn into_create(self) -> Option<CreateProject> {
        let name = self.name.filter(|n| !n.is_empty())?;
        let description = self.description.filter(|d| !d.is_empty())?;
        let status = self.status.filter(|s| *s != 0)?;

        Some(CreateProject {
            name,
            description,
            status,
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub resume: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let Json(request) = payload?;
    let input = request
        .into_create()
        .ok_or_else(|| AppError::BadRequest(MISSING_REQUIRED_FIELDS.to_string()))?;

    let project = state.store.create(input).await?;

    tracing::info!(project_id = %project.id, status = project.status, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects?status=&name=&startDate=&endDate=
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<ProjectListParams>, QueryRejection>,
) -> AppResult<Json<Vec<Project>>> {
    let Query(params) = params?;
    let projects = state.store.list(&params.to_filter()).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Project>> {
    let Path(id) = id?;
    let project = state.store.get(id).await?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<UpdateProject>, JsonRejection>,
) -> AppResult<Json<Project>> {
    let Path(id) = id?;
    let Json(input) = payload?;

    let project = state.store.update(id, &input).await?;

    tracing::info!(project_id = %id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = id?;
    state.store.delete(id).await?;

    tracing::info!(project_id = %id, "Project deleted");
    Ok(Json(MessageResponse {
        message: "Project deleted successfully",
    }))
}

/// GET /api/projects/graficos
///
/// Project counts per status, for the dashboard chart.
pub async fn status_chart(State(state): State<AppState>) -> AppResult<Json<Vec<StatusCount>>> {
    let counts = state.store.count_by_status().await?;
    Ok(Json(counts))
}

/// GET /api/projects/analisis
///
/// AI-written summary of every project description. Returns a fixed
/// message without calling the generator when there are no projects.
pub async fn summary(State(state): State<AppState>) -> AppResult<Json<SummaryResponse>> {
    let digests = state.store.digests().await?;

    let Some(prompt) =
        build_summary_prompt(digests.iter().map(|d| (d.name.as_str(), d.description.as_str())))
    else {
        return Ok(Json(SummaryResponse {
            resume: NO_PROJECTS_MESSAGE.to_string(),
        }));
    };

    let resume = state.generator.generate(&prompt).await?;

    tracing::info!(project_count = digests.len(), "Generated project summary");
    Ok(Json(SummaryResponse { resume }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        name: Option<&str>,
        description: Option<&str>,
        status: Option<StatusId>,
    ) -> CreateProjectRequest {
        CreateProjectRequest {
            name: name.map(str::to_string),
            description: description.map(str::to_string),
            status,
            start_date: None,
            end_date: None,
        }
    }

    #[test]
    fn complete_request_converts() {
        let input = request(Some("A"), Some("B"), Some(1)).into_create().unwrap();
        assert_eq!(input.name, "A");
        assert_eq!(input.status, 1);
    }

    #[test]
    fn missing_or_empty_fields_are_rejected() {
        assert!(request(None, Some("B"), Some(1)).into_create().is_none());
        assert!(request(Some(""), Some("B"), Some(1)).into_create().is_none());
        assert!(request(Some("A"), None, Some(1)).into_create().is_none());
        assert!(request(Some("A"), Some(""), Some(1)).into_create().is_none());
        assert!(request(Some("A"), Some("B"), None).into_create().is_none());
        assert!(request(Some("A"), Some("B"), Some(0)).into_create().is_none());
    }

    #[test]
    fn out_of_range_status_passes_boundary_check() {
        // Range is enforced by store validation, not the presence check.
        assert!(request(Some("A"), Some("B"), Some(4)).into_create().is_some());
    }
}
