//! Project entity model and DTOs.

use projecthub_core::project::{validate_description, validate_name, validate_status};
use projecthub_core::types::{DbId, ProjectDate, StatusId};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub status: StatusId,
    pub start_date: Option<ProjectDate>,
    pub end_date: Option<ProjectDate>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(custom(function = "validate_description"))]
    pub description: String,
    #[validate(custom(function = "validate_status"))]
    pub status: StatusId,
    pub start_date: Option<ProjectDate>,
    pub end_date: Option<ProjectDate>,
}

impl CreateProject {
    /// Materialize the row that will be inserted under `id`.
    pub fn into_project(self, id: DbId) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// DTO for updating an existing project. All fields are optional.
///
/// The date fields use `Option<Option<_>>`: an absent key keeps the stored
/// value, an explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_description"))]
    pub description: Option<String>,
    #[validate(custom(function = "validate_status"))]
    pub status: Option<StatusId>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub start_date: Option<Option<ProjectDate>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub end_date: Option<Option<ProjectDate>>,
}

impl UpdateProject {
    /// Overwrite the fields of `project` that are present in this update.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(ref name) = self.name {
            project.name.clone_from(name);
        }
        if let Some(ref description) = self.description {
            project.description.clone_from(description);
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(start_date) = self.start_date {
            project.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            project.end_date = end_date;
        }
    }
}

/// Marks a key as present so that `null` becomes `Some(None)` rather than `None`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// One row of the grouped status count.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct StatusCount {
    pub status: StatusId,
    pub count: i64,
}

/// The text fields fed to the AI summary.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectDigest {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use projecthub_core::project::{
        first_validation_message, DESCRIPTION_REQUIRED, INVALID_STATUS, NAME_REQUIRED,
    };

    use super::*;

    fn create(name: &str, description: &str, status: StatusId) -> CreateProject {
        CreateProject {
            name: name.to_string(),
            description: description.to_string(),
            status,
            start_date: None,
            end_date: None,
        }
    }

    fn message(input: &impl Validate) -> String {
        first_validation_message(&input.validate().unwrap_err())
    }

    #[test]
    fn valid_create_passes() {
        assert!(create("A", "B", 1).validate().is_ok());
        assert!(create("A", "B", 3).validate().is_ok());
    }

    #[test]
    fn create_messages_match_core_constants() {
        assert_eq!(message(&create("", "B", 1)), NAME_REQUIRED);
        assert_eq!(message(&create("A", "", 1)), DESCRIPTION_REQUIRED);
        assert_eq!(message(&create("A", "B", 0)), INVALID_STATUS);
        assert_eq!(message(&create("A", "B", 4)), INVALID_STATUS);
    }

    #[test]
    fn update_validates_only_present_fields() {
        assert!(UpdateProject::default().validate().is_ok());

        let update = UpdateProject {
            status: Some(5),
            ..Default::default()
        };
        assert_eq!(message(&update), INVALID_STATUS);

        let update = UpdateProject {
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(message(&update), NAME_REQUIRED);
    }

    #[test]
    fn update_distinguishes_null_from_absent_dates() {
        let absent: UpdateProject = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(absent.start_date, None);

        let cleared: UpdateProject =
            serde_json::from_value(serde_json::json!({ "startDate": null })).unwrap();
        assert_eq!(cleared.start_date, Some(None));

        let set: UpdateProject =
            serde_json::from_value(serde_json::json!({ "endDate": "2024-03-01" })).unwrap();
        assert_eq!(set.end_date, Some(Some("2024-03-01".parse().unwrap())));
    }

    #[test]
    fn apply_to_changes_only_supplied_fields() {
        let mut project = create("A", "B", 1).into_project(projecthub_core::types::new_project_id());
        project.start_date = Some("2024-01-01".parse().unwrap());
        let before = project.clone();

        let update = UpdateProject {
            status: Some(3),
            ..Default::default()
        };
        update.apply_to(&mut project);

        assert_eq!(project.status, 3);
        assert_eq!(project.name, before.name);
        assert_eq!(project.description, before.description);
        assert_eq!(project.start_date, before.start_date);
        assert_eq!(project.end_date, before.end_date);
    }

    #[test]
    fn project_serializes_camel_case() {
        let project = create("A", "B", 2).into_project(projecthub_core::types::new_project_id());
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["status"], 2);
        assert!(json["id"].is_string());
        assert!(json.get("startDate").is_some());
        assert!(json["endDate"].is_null());
    }
}
