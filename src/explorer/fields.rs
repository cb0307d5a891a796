//! Filter and sort field identifiers and their toolbar descriptors.

use std::fmt;
use std::str::FromStr;

use crate::api::ApiError;
use crate::api::models::ApprovalState;
use crate::i18n::Catalog;

/// Fields a filter can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// Request description (free text).
    Description,
    /// Request identifier (free text).
    RequestId,
    /// Requester display name (free text).
    RequesterName,
    /// Creation date as a medium date string (free text).
    RequestDate,
    /// Approval status (select).
    ApprovalState,
}

impl FilterField {
    /// Every filter field in toolbar order.
    pub const ALL: [Self; 5] = [
        Self::Description,
        Self::RequestId,
        Self::RequesterName,
        Self::RequestDate,
        Self::ApprovalState,
    ];

    /// Stable identifier used in configuration and persisted state.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::RequestId => "request_id",
            Self::RequesterName => "requester_name",
            Self::RequestDate => "request_date",
            Self::ApprovalState => "approval_state",
        }
    }

    /// Untranslated title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::RequestId => "Request ID",
            Self::RequesterName => "Requester",
            Self::RequestDate => "Request Date",
            Self::ApprovalState => "Request Status",
        }
    }

    /// Untranslated input placeholder.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Description => "Filter by Description",
            Self::RequestId => "Filter by Request ID",
            Self::RequesterName => "Filter by Requester",
            Self::RequestDate => "Filter by Request Date",
            Self::ApprovalState => "Filter by Status",
        }
    }

    /// How the filter value is entered.
    #[must_use]
    pub const fn kind(self) -> FilterKind {
        match self {
            Self::ApprovalState => FilterKind::Select,
            Self::Description | Self::RequestId | Self::RequesterName | Self::RequestDate => {
                FilterKind::Text
            }
        }
    }

    /// Returns the next field in toolbar order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Description => Self::RequestId,
            Self::RequestId => Self::RequesterName,
            Self::RequesterName => Self::RequestDate,
            Self::RequestDate => Self::ApprovalState,
            Self::ApprovalState => Self::Description,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FilterField {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.id() == value.trim())
            .ok_or_else(|| ApiError::InvalidFilter {
                message: format!("unknown filter field `{value}`"),
            })
    }
}

/// Presentation of a filter input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Free text entry.
    Text,
    /// Choice from an enumerated list.
    Select,
}

/// Fields the list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// Request description.
    Description,
    /// Request identifier.
    Id,
    /// Requester display name.
    RequesterName,
    /// Creation timestamp.
    Requested,
    /// Approval state wire value.
    Status,
}

impl SortField {
    /// Every sort field in toolbar order.
    pub const ALL: [Self; 5] = [
        Self::Description,
        Self::Id,
        Self::RequesterName,
        Self::Requested,
        Self::Status,
    ];

    /// Stable identifier used in configuration and persisted state.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Id => "id",
            Self::RequesterName => "requester_name",
            Self::Requested => "requested",
            Self::Status => "status",
        }
    }

    /// Untranslated title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Id => "Request ID",
            Self::RequesterName => "Requester",
            Self::Requested => "Request Date",
            Self::Status => "Request Status",
        }
    }

    /// Whether values sort alphabetically or numerically.
    #[must_use]
    pub const fn kind(self) -> SortKind {
        match self {
            Self::Description | Self::RequesterName | Self::Status => SortKind::Alpha,
            Self::Id | Self::Requested => SortKind::Numeric,
        }
    }

    /// Returns the next field in toolbar order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Description => Self::Id,
            Self::Id => Self::RequesterName,
            Self::RequesterName => Self::Requested,
            Self::Requested => Self::Status,
            Self::Status => Self::Description,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortField {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.id() == value.trim())
            .ok_or_else(|| ApiError::InvalidSortField(value.to_owned()))
    }
}

/// Ordering family of a sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    /// Locale-style string ordering.
    Alpha,
    /// Numeric or chronological ordering.
    Numeric,
}

/// A filter field as offered by the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDescriptor {
    /// Field the filter targets.
    pub field: FilterField,
    /// Translated title.
    pub title: String,
    /// Translated placeholder.
    pub placeholder: String,
    /// Entry style.
    pub kind: FilterKind,
    /// Translated options for select filters; empty for text filters.
    pub values: Vec<String>,
}

/// A sort field as offered by the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDescriptor {
    /// Field to sort by.
    pub field: SortField,
    /// Translated title.
    pub title: String,
    /// Ordering family.
    pub kind: SortKind,
}

/// Builds the five filter descriptors with translated labels.
#[must_use]
pub fn filter_fields(catalog: &Catalog) -> Vec<FilterDescriptor> {
    FilterField::ALL
        .into_iter()
        .map(|field| FilterDescriptor {
            field,
            title: catalog.tr(field.title()).to_owned(),
            placeholder: catalog.tr(field.placeholder()).to_owned(),
            kind: field.kind(),
            values: match field.kind() {
                FilterKind::Select => status_labels(catalog),
                FilterKind::Text => Vec::new(),
            },
        })
        .collect()
}

/// Builds the five sort descriptors with translated titles.
#[must_use]
pub fn sort_fields(catalog: &Catalog) -> Vec<SortDescriptor> {
    SortField::ALL
        .into_iter()
        .map(|field| SortDescriptor {
            field,
            title: catalog.tr(field.title()).to_owned(),
            kind: field.kind(),
        })
        .collect()
}

/// Translated status labels offered by the approval-state filter.
#[must_use]
pub fn status_labels(catalog: &Catalog) -> Vec<String> {
    ApprovalState::ALL
        .into_iter()
        .map(|state| catalog.tr(state.label()).to_owned())
        .collect()
}
