//! Client-side filter predicates for request records.
//!
//! Every applied filter must match for a record to stay in the working copy.
//! Filtering always starts from the full fetched data, never from a previous
//! working copy.

use std::fmt;
use std::str::FromStr;

use crate::api::ApiError;
use crate::api::models::{ApprovalState, RequestRecord};
use crate::i18n::Catalog;

use super::fields::FilterField;

/// A user-chosen filter instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedFilter {
    /// Field the filter targets.
    pub field: FilterField,
    /// Value typed or selected by the user.
    pub value: String,
}

impl AppliedFilter {
    /// Creates a filter for `field` with `value`.
    #[must_use]
    pub fn new(field: FilterField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Returns `true` when `record` satisfies this filter.
    #[must_use]
    pub fn matches(&self, record: &RequestRecord, catalog: &Catalog) -> bool {
        match self.field {
            FilterField::Description => contains_ignore_case(&record.description, &self.value),
            FilterField::RequestId => contains_ignore_case(&record.id.to_string(), &self.value),
            FilterField::RequesterName => {
                contains_ignore_case(&record.requester_name, &self.value)
            }
            FilterField::RequestDate => contains_ignore_case(&record.medium_date(), &self.value),
            FilterField::ApprovalState => resolve_status_label(&self.value, catalog)
                .is_some_and(|state| state == record.approval_state),
        }
    }
}

impl fmt::Display for AppliedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.field, self.value)
    }
}

impl FromStr for AppliedFilter {
    type Err = ApiError;

    /// Parses `field=value`, e.g. `approval_state=Denied`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (field, value) = raw.split_once('=').ok_or_else(|| ApiError::InvalidFilter {
            message: format!("expected field=value, got `{raw}`"),
        })?;
        if value.is_empty() {
            return Err(ApiError::InvalidFilter {
                message: format!("filter `{field}` has an empty value"),
            });
        }
        Ok(Self::new(field.parse()?, value))
    }
}

/// Parses a comma-separated list of `field=value` filters.
///
/// # Errors
///
/// Returns [`ApiError::InvalidFilter`] for the first malformed entry.
pub fn parse_filters(raw: &str) -> Result<Vec<AppliedFilter>, ApiError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::parse::<AppliedFilter>)
        .collect()
}

/// Maps a status label to its approval state.
///
/// Both the translated label and the literal English label are accepted,
/// compared exactly.
#[must_use]
pub fn resolve_status_label(label: &str, catalog: &Catalog) -> Option<ApprovalState> {
    ApprovalState::ALL.into_iter().find(|state| {
        let literal = state.label();
        label == catalog.tr(literal) || label == literal
    })
}

/// Returns the records matching every filter, in their original order.
///
/// An empty filter set keeps every record.
#[must_use]
pub fn apply_filters(
    records: &[RequestRecord],
    filters: &[AppliedFilter],
    catalog: &Catalog,
) -> Vec<RequestRecord> {
    records
        .iter()
        .filter(|record| filters.iter().all(|filter| filter.matches(record, catalog)))
        .cloned()
        .collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
