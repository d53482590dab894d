//! Query/filter builder for project listings.
//!
//! Turns the optional list parameters (`status`, `name`, `startDate`,
//! `endDate`) into a [`ProjectFilter`]. Absent parameters contribute no
//! condition. The date range applies only when both bounds are supplied;
//! a lone bound is ignored.

use crate::types::{ProjectDate, StatusId};

/// Inclusive `[from, to]` range matched against a project's start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: ProjectDate,
    pub to: ProjectDate,
}

impl DateRange {
    pub fn contains(&self, date: ProjectDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// Predicate consumed by the store's list operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Exact status match.
    pub status: Option<StatusId>,
    /// Case-insensitive substring of the project name.
    pub name_contains: Option<String>,
    /// Inclusive range for `start_date`.
    pub start_between: Option<DateRange>,
}

impl ProjectFilter {
    /// Build a filter from raw list parameters.
    ///
    /// An empty `name` is treated as absent.
    pub fn from_params(
        status: Option<StatusId>,
        name: Option<&str>,
        start_date: Option<ProjectDate>,
        end_date: Option<ProjectDate>,
    ) -> Self {
        let name_contains = name.filter(|n| !n.is_empty()).map(str::to_string);

        let start_between = match (start_date, end_date) {
            (Some(from), Some(to)) => Some(DateRange { from, to }),
            _ => None,
        };

        Self {
            status,
            name_contains,
            start_between,
        }
    }

    /// True when no condition is set (matches every project).
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.name_contains.is_none() && self.start_between.is_none()
    }

    /// Evaluate the filter against a project's fields.
    pub fn matches(&self, name: &str, status: StatusId, start_date: Option<ProjectDate>) -> bool {
        if let Some(wanted) = self.status {
            if wanted != status {
                return false;
            }
        }

        if let Some(ref needle) = self.name_contains {
            if !name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }

        if let Some(range) = self.start_between {
            match start_date {
                Some(date) if range.contains(date) => {}
                _ => return false,
            }
        }

        true
    }

    /// `ILIKE` pattern for the name condition, if any.
    pub fn name_pattern(&self) -> Option<String> {
        self.name_contains.as_deref().map(contains_pattern)
    }
}

/// Wrap `needle` in `%...%`, escaping `LIKE` metacharacters so they match
/// literally (backslash is the default escape character in Postgres).
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
