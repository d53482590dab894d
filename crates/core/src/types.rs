/// Project primary keys are application-generated UUIDs.
pub type DbId = uuid::Uuid;

/// Project start/end dates are plain calendar dates (`YYYY-MM-DD`).
pub type ProjectDate = chrono::NaiveDate;

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

/// Generate the id for a project that is about to be inserted.
///
/// Ids are assigned by the store before persistence, never by the database.
pub fn new_project_id() -> DbId {
    uuid::Uuid::new_v4()
}
