//! Project status codes and field-validation rules.
//!
//! The DTOs in `projecthub-db` attach the rules below through
//! `#[validate(custom(..))]`; this module owns their messages and turns a
//! set of failures into the single message reported to callers.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::types::StatusId;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Project lifecycle status. Discriminants are the stored status codes.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Pending = 1,
    InProgress = 2,
    Finished = 3,
}

impl ProjectStatus {
    /// Look up a status by its stored code.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            1 => Some(Self::Pending),
            2 => Some(Self::InProgress),
            3 => Some(Self::Finished),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub const NAME_REQUIRED: &str = "Name is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const INVALID_STATUS: &str = "Status is required and must be 1, 2 or 3";

/// Returned by the create boundary when `name`, `description` or `status`
/// is absent (or empty / zero).
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields to create the project";

/// Fields in the order their failures are reported.
const FIELD_ORDER: &[&str] = &["name", "description", "status"];

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// `validator` rule for the project name.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(failure("required", NAME_REQUIRED));
    }
    Ok(())
}

/// `validator` rule for the project description.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.is_empty() {
        return Err(failure("required", DESCRIPTION_REQUIRED));
    }
    Ok(())
}

/// `validator` rule for the status code: must name a [`ProjectStatus`].
pub fn validate_status(status: &StatusId) -> Result<(), ValidationError> {
    match ProjectStatus::from_id(*status) {
        Some(_) => Ok(()),
        None => Err(failure("status", INVALID_STATUS)),
    }
}

/// Pick the message of the first failing field, in declaration order.
///
/// `ValidationErrors` keeps fields in a hash map, so the order is fixed here
/// to keep the reported message deterministic.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    let ordered = FIELD_ORDER
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .chain(field_errors.values());

    for errs in ordered {
        if let Some(message) = errs.iter().find_map(|e| e.message.as_ref()) {
            return message.to_string();
        }
    }

    "Invalid project data".to_string()
}

/// Convert `validator` output into a [`CoreError::Validation`].
pub fn into_core_error(errors: ValidationErrors) -> CoreError {
    CoreError::Validation(first_validation_message(&errors))
}
