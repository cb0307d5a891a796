//! Request list component for displaying the explorer's working copy.
//!
//! This component renders a scrollable table of request records with cursor
//! highlighting. Column headings and status labels are translated through
//! the catalog.

use crate::api::RequestRecord;
use crate::i18n::Catalog;

use super::text_truncate::fit_to_width;

/// Default visible height for the request list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

const CURSOR_WIDTH: usize = 2;
const ID_WIDTH: usize = 8;
const REQUESTER_WIDTH: usize = 18;
const DATE_WIDTH: usize = 14;
const STATUS_WIDTH: usize = 12;
const MIN_DESCRIPTION_WIDTH: usize = 10;

/// Message shown while the first fetch is outstanding.
pub const LOADING_MESSAGE: &str = "Loading requests...";

/// Message shown when no row survives the filters.
pub const EMPTY_MESSAGE: &str = "No requests match the current filters.";

/// Context for rendering the request list view.
#[derive(Debug, Clone, Copy)]
pub struct RequestListViewContext<'a> {
    /// Visible rows in display order.
    pub rows: &'a [RequestRecord],
    /// Catalog for headings and status labels.
    pub catalog: &'a Catalog,
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of rows scrolled from top.
    pub scroll_offset: usize,
    /// Maximum number of data rows to render.
    pub visible_height: usize,
    /// Maximum line width in columns.
    pub max_width: usize,
    /// Whether a fetch is outstanding.
    pub loading: bool,
}

/// Component for displaying the list of requests.
#[derive(Debug, Clone)]
pub struct RequestListComponent {
    /// Visible height in rows (for scrolling calculations).
    visible_height: usize,
}

impl Default for RequestListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestListComponent {
    /// Creates a new request list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the heading row followed by the rows inside the viewport.
    #[must_use]
    pub fn view(&self, ctx: &RequestListViewContext<'_>) -> String {
        if ctx.rows.is_empty() {
            let message = if ctx.loading {
                LOADING_MESSAGE
            } else {
                EMPTY_MESSAGE
            };
            return format!("  {}\n", ctx.catalog.tr(message));
        }

        let columns = Columns::for_width(ctx.max_width);
        let mut output = columns.heading(ctx.catalog);

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        for (display_index, record) in ctx
            .rows
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(visible_height)
        {
            let prefix = if display_index == ctx.cursor_position {
                ">"
            } else {
                " "
            };
            output.push_str(&columns.row(record, prefix, ctx.catalog));
            output.push('\n');
        }

        output
    }
}

/// Column widths for one render.
#[derive(Debug, Clone, Copy)]
struct Columns {
    description: usize,
}

impl Columns {
    const fn for_width(max_width: usize) -> Self {
        let fixed = CURSOR_WIDTH + ID_WIDTH + REQUESTER_WIDTH + DATE_WIDTH + STATUS_WIDTH;
        let remaining = max_width.saturating_sub(fixed);
        let description = if remaining > MIN_DESCRIPTION_WIDTH {
            remaining
        } else {
            MIN_DESCRIPTION_WIDTH
        };
        Self { description }
    }

    fn heading(self, catalog: &Catalog) -> String {
        format!(
            "{}{}{}{}{}{}\n",
            " ".repeat(CURSOR_WIDTH),
            fit_to_width(catalog.tr("Request ID"), ID_WIDTH),
            fit_to_width(catalog.tr("Description"), self.description),
            fit_to_width(catalog.tr("Requester"), REQUESTER_WIDTH),
            fit_to_width(catalog.tr("Request Date"), DATE_WIDTH),
            fit_to_width(catalog.tr("Request Status"), STATUS_WIDTH),
        )
    }

    fn row(self, record: &RequestRecord, prefix: &str, catalog: &Catalog) -> String {
        format!(
            "{prefix} {}{}{}{}{}",
            fit_to_width(&record.id.to_string(), ID_WIDTH),
            fit_to_width(&record.description, self.description),
            fit_to_width(&record.requester_name, REQUESTER_WIDTH),
            fit_to_width(&record.medium_date(), DATE_WIDTH),
            fit_to_width(catalog.tr(record.approval_state.label()), STATUS_WIDTH),
        )
    }
}
