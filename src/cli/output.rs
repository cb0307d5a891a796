//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use docket::explorer::ToolbarConfig;
use docket::{ApiError, Catalog, RequestRecord};

/// Writes the visible requests, one per line, followed by a summary of the
/// active filters and sort.
///
/// # Errors
///
/// Returns [`ApiError::Io`] when writing fails.
pub fn write_request_listing<W: Write>(
    writer: &mut W,
    rows: &[RequestRecord],
    toolbar: &ToolbarConfig,
    catalog: &Catalog,
) -> Result<(), ApiError> {
    for record in rows {
        writeln!(
            writer,
            "#{} [{}] {} ({}, {})",
            record.id,
            catalog.tr(record.approval_state.label()),
            record.description,
            record.requester_name,
            record.medium_date()
        )
        .map_err(|e| io_error(&e))?;
    }

    writeln!(writer).map_err(|e| io_error(&e))?;

    let filters = &toolbar.filter_config;
    if !filters.applied_filters.is_empty() {
        let summary = filters
            .applied_filters
            .iter()
            .map(|filter| format!("{}: {}", catalog.tr(filter.field.title()), filter.value))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(writer, "{}: {summary}", catalog.tr("Filters")).map_err(|e| io_error(&e))?;
    }

    let sort = toolbar.sort_config.state;
    writeln!(
        writer,
        "{}: {} {} ({} {})",
        catalog.tr("Sort"),
        catalog.tr(sort.current_field.title()),
        sort.direction_arrow(),
        filters.results_count,
        catalog.tr("Results")
    )
    .map_err(|e| io_error(&e))
}

/// Converts an I/O error to an [`ApiError::Io`].
pub(crate) fn io_error(error: &io::Error) -> ApiError {
    ApiError::Io {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use docket::api::models::test_support::two_requests;
    use docket::{AppliedFilter, FilterField, SortField, SortState};

    use super::*;

    fn render(rows: &[RequestRecord], toolbar: &ToolbarConfig) -> String {
        let mut buffer = Vec::new();
        write_request_listing(&mut buffer, rows, toolbar, &Catalog::english())
            .unwrap_or_else(|error| panic!("listing should be written: {error}"));
        String::from_utf8(buffer).unwrap_or_else(|error| panic!("output should be UTF-8: {error}"))
    }

    #[test]
    fn listing_writes_one_line_per_request() {
        let rows = two_requests();
        let mut toolbar = ToolbarConfig::new(&Catalog::english(), Vec::new(), SortState::default());
        toolbar.filter_config.results_count = rows.len();

        let output = render(&rows, &toolbar);

        assert!(
            output.contains("#2 [Approved] B (Bob, "),
            "missing first row: {output}"
        );
        assert!(
            output.contains("#1 [Pending] A (Al, "),
            "missing second row: {output}"
        );
        assert!(
            output.contains("Sort: Request Date \u{2193} (2 Results)"),
            "missing sort summary: {output}"
        );
        assert!(!output.contains("Filters:"), "no filters were applied: {output}");
    }

    #[test]
    fn listing_summarises_applied_filters() {
        let filters = vec![AppliedFilter::new(FilterField::RequesterName, "bob")];
        let toolbar = ToolbarConfig::new(
            &Catalog::english(),
            filters,
            SortState::new(SortField::Id, true),
        );

        let output = render(&[], &toolbar);

        assert!(
            output.contains("Filters: Requester: bob"),
            "missing filter summary: {output}"
        );
        assert!(
            output.contains("Sort: Request ID \u{2191} (0 Results)"),
            "missing sort summary: {output}"
        );
    }
}
