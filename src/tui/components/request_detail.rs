//! Detail view for a single request.

use crate::api::RequestRecord;
use crate::explorer::Route;
use crate::i18n::Catalog;

use super::text_truncate::{truncate_to_display_width_with_ellipsis, truncate_to_height};

/// Context for rendering the request detail view.
#[derive(Debug, Clone, Copy)]
pub struct RequestDetailViewContext<'a> {
    /// Route that opened the view.
    pub route: Route,
    /// Record to show, when it was found among the visible rows.
    pub record: Option<&'a RequestRecord>,
    /// Catalog for labels.
    pub catalog: &'a Catalog,
    /// Maximum line width in columns.
    pub max_width: usize,
    /// Maximum height in lines.
    pub max_height: usize,
}

/// Stateless detail renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestDetailComponent;

impl RequestDetailComponent {
    /// Renders the labelled request attributes.
    #[must_use]
    pub fn view(ctx: &RequestDetailViewContext<'_>) -> String {
        let mut lines = vec![ctx.route.to_string(), String::new()];

        match ctx.record {
            Some(record) => lines.extend(Self::attribute_lines(record, ctx.catalog)),
            None => lines.push(ctx.catalog.tr("Request not found.").to_owned()),
        }

        let mut output = String::new();
        for line in lines {
            output.push_str(&truncate_to_display_width_with_ellipsis(&line, ctx.max_width));
            output.push('\n');
        }
        truncate_to_height(&mut output, ctx.max_height);
        output
    }

    fn attribute_lines(record: &RequestRecord, catalog: &Catalog) -> Vec<String> {
        let mut lines = vec![
            format!("{}: {}", catalog.tr("Request ID"), record.id),
            format!("{}: {}", catalog.tr("Description"), record.description),
            format!("{}: {}", catalog.tr("Requester"), record.requester_name),
            format!("{}: {}", catalog.tr("Request Date"), record.medium_date()),
            format!(
                "{}: {}",
                catalog.tr("Request Status"),
                catalog.tr(record.approval_state.label())
            ),
        ];
        if let Some(image) = record.image_href() {
            lines.push(format!("{}: {image}", catalog.tr("Picture")));
        }
        if let Some(href) = &record.href {
            lines.push(format!("{}: {href}", catalog.tr("Resource")));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Picture;
    use crate::api::models::ApprovalState;
    use crate::api::models::test_support::request;

    fn render(record: Option<&RequestRecord>, max_height: usize) -> String {
        RequestDetailComponent::view(&RequestDetailViewContext {
            route: Route::RequestDetails { request_id: 7 },
            record,
            catalog: &Catalog::english(),
            max_width: 120,
            max_height,
        })
    }

    #[test]
    fn shows_every_attribute() {
        let record = RequestRecord {
            picture: Some(Picture {
                image_href: Some("/pictures/7.png".to_owned()),
            }),
            href: Some("https://miq.example.com/api/requests/7".to_owned()),
            ..request(7, "Provision VM", "Alice", "2021-03-04", ApprovalState::Denied)
        };

        let output = render(Some(&record), 0);

        assert!(output.starts_with("services.requests.details(requestId=7)\n"));
        for expected in [
            "Request ID: 7",
            "Description: Provision VM",
            "Requester: Alice",
            "Request Date: Mar 4, 2021",
            "Request Status: Denied",
            "Picture: /pictures/7.png",
            "Resource: https://miq.example.com/api/requests/7",
        ] {
            assert!(output.contains(expected), "missing `{expected}` in {output}");
        }
    }

    #[test]
    fn missing_record_is_reported() {
        assert!(render(None, 0).contains("Request not found."));
    }

    #[test]
    fn output_respects_max_height() {
        let record = request(1, "A", "Al", "2020-01-01", ApprovalState::Approved);
        assert_eq!(render(Some(&record), 3).lines().count(), 3);
    }
}
