//! Builders for request records used across unit and behavioural tests.
//!
//! ```
//! use docket::api::models::ApprovalState;
//! use docket::api::models::test_support::request;
//!
//! let record = request(1, "Provision VM", "Alice", "2020-01-01", ApprovalState::Approved);
//! assert_eq!(record.id, 1);
//! ```

use chrono::{TimeZone, Utc};

use super::{ApprovalState, CollectionPage, RequestRecord, parse_timestamp};
use crate::api::REQUESTS_COLLECTION;

/// Builds a request record with no picture or href.
///
/// `created_on` accepts the same formats as the API decoder; an
/// unparseable value falls back to the Unix epoch.
#[must_use]
pub fn request(
    id: u64,
    description: &str,
    requester_name: &str,
    created_on: &str,
    approval_state: ApprovalState,
) -> RequestRecord {
    let created = parse_timestamp(created_on).unwrap_or_else(|_| Utc.timestamp_nanos(0));
    RequestRecord {
        id,
        description: description.to_owned(),
        requester_name: requester_name.to_owned(),
        created_on: created,
        approval_state,
        picture: None,
        href: None,
    }
}

/// The two-record fetch used by the explorer scenarios: id 2 first, id 1
/// second, so any id sort is observable.
#[must_use]
pub fn two_requests() -> Vec<RequestRecord> {
    vec![
        request(2, "B", "Bob", "2020-01-02", ApprovalState::Approved),
        request(1, "A", "Al", "2020-01-01", ApprovalState::PendingApproval),
    ]
}

/// JSON resources matching [`two_requests`], as the API returns them.
#[must_use]
pub fn two_requests_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 2,
            "description": "B",
            "requester_name": "Bob",
            "created_on": "2020-01-02",
            "approval_state": "approved"
        },
        {
            "id": 1,
            "description": "A",
            "requester_name": "Al",
            "created_on": "2020-01-01",
            "approval_state": "pending_approval"
        }
    ])
}

/// A requests collection page carrying [`two_requests_json`].
#[must_use]
pub fn two_requests_page() -> CollectionPage {
    let resources = match two_requests_json() {
        serde_json::Value::Array(items) => items,
        other => vec![other],
    };
    CollectionPage {
        name: Some(REQUESTS_COLLECTION.to_owned()),
        count: Some(2),
        subcount: Some(2),
        resources,
    }
}
