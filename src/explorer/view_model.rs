//! Configuration handed to the list and toolbar presentation components.

use crate::i18n::Catalog;

use super::fields::{FilterDescriptor, SortDescriptor, filter_fields, sort_fields};
use super::filter::AppliedFilter;
use super::sort::SortState;

/// Row presentation options for the request list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Whether rows can be multi-selected.
    pub select_items: bool,
    /// Whether a selection checkbox is drawn.
    pub show_select_box: bool,
    /// Record property that identifies a row.
    pub selection_match_prop: &'static str,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            select_items: false,
            show_select_box: false,
            selection_match_prop: "id",
        }
    }
}

/// Filter half of the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Offered filter fields.
    pub fields: Vec<FilterDescriptor>,
    /// Size of the working copy.
    pub results_count: usize,
    /// Filters currently in force.
    pub applied_filters: Vec<AppliedFilter>,
}

/// Sort half of the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// Offered sort fields.
    pub fields: Vec<SortDescriptor>,
    /// Active sort field and direction.
    pub state: SortState,
}

impl SortConfig {
    /// Descriptor of the active sort field.
    #[must_use]
    pub fn current_field(&self) -> Option<&SortDescriptor> {
        self.fields
            .iter()
            .find(|descriptor| descriptor.field == self.state.current_field)
    }

    /// `true` for ascending order.
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        self.state.is_ascending
    }
}

/// Toolbar model combining filter and sort configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarConfig {
    /// Filter configuration.
    pub filter_config: FilterConfig,
    /// Sort configuration.
    pub sort_config: SortConfig,
}

impl ToolbarConfig {
    /// Builds the toolbar with translated field descriptors, no results and
    /// the given filters and sort.
    #[must_use]
    pub fn new(catalog: &Catalog, applied_filters: Vec<AppliedFilter>, sort: SortState) -> Self {
        Self {
            filter_config: FilterConfig {
                fields: filter_fields(catalog),
                results_count: 0,
                applied_filters,
            },
            sort_config: SortConfig {
                fields: sort_fields(catalog),
                state: sort,
            },
        }
    }
}
