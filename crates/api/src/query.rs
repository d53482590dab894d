//! Query parameter types for API handlers.

use std::fmt::Display;
use std::str::FromStr;

use projecthub_core::filter::ProjectFilter;
use projecthub_core::types::{ProjectDate, StatusId};
use serde::{de, Deserialize, Deserializer};

/// Filters accepted by `GET /projects` (`?status=&name=&startDate=&endDate=`).
///
/// Blank values count as absent. `startDate`/`endDate` only filter when both
/// are present.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<StatusId>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub start_date: Option<ProjectDate>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub end_date: Option<ProjectDate>,
}

impl ProjectListParams {
    pub fn to_filter(&self) -> ProjectFilter {
        ProjectFilter::from_params(
            self.status,
            self.name.as_deref(),
            self.start_date,
            self.end_date,
        )
    }
}

/// Parse a query value with `FromStr`, mapping a blank value to `None`.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
