//! Data models for request records returned by the collections API.
//!
//! Types prefixed with `Api` are internal deserialisation targets that are
//! validated and converted into the public domain types.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ApiError;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Approval status of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalState {
    /// Waiting for an approver.
    PendingApproval,
    /// Rejected by an approver.
    Denied,
    /// Approved and ready to run.
    Approved,
}

impl ApprovalState {
    /// Every approval state, in the order the status filter offers them.
    pub const ALL: [Self; 3] = [Self::PendingApproval, Self::Denied, Self::Approved];

    /// Returns the wire value used by the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingApproval => "pending_approval",
            Self::Denied => "denied",
            Self::Approved => "approved",
        }
    }

    /// Returns the untranslated display label, also used as the message id
    /// for translation lookups.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PendingApproval => "Pending",
            Self::Denied => "Denied",
            Self::Approved => "Approved",
        }
    }
}

/// Picture attached to the catalog item behind a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    /// Relative or absolute URL of the image.
    #[serde(default)]
    pub image_href: Option<String>,
}

/// A request record as listed by the explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    /// Request identifier.
    pub id: u64,
    /// Free-form description of the request.
    pub description: String,
    /// Display name of the requester.
    pub requester_name: String,
    /// Creation timestamp.
    pub created_on: DateTime<Utc>,
    /// Current approval state.
    pub approval_state: ApprovalState,
    /// Picture data, when the API expanded it.
    pub picture: Option<Picture>,
    /// Canonical API URL of the resource, when provided.
    pub href: Option<String>,
}

impl RequestRecord {
    /// Formats `created_on` as a medium date, e.g. `Jan 2, 2020`.
    ///
    /// The date is always taken in UTC, not the viewer's local time zone, so
    /// a request created late in the evening west of Greenwich shows (and
    /// matches date filters) as the following day.
    #[must_use]
    pub fn medium_date(&self) -> String {
        self.created_on.format("%b %-d, %Y").to_string()
    }

    /// Returns the picture URL, if any.
    #[must_use]
    pub fn image_href(&self) -> Option<&str> {
        self.picture
            .as_ref()
            .and_then(|picture| picture.image_href.as_deref())
    }
}

/// One page of a collection query.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CollectionPage {
    /// Collection name echoed by the API.
    #[serde(default)]
    pub name: Option<String>,
    /// Total number of resources in the collection.
    #[serde(default)]
    pub count: Option<u64>,
    /// Number of resources matching the query.
    #[serde(default)]
    pub subcount: Option<u64>,
    /// Raw resources, decoded by the caller.
    #[serde(default)]
    pub resources: Vec<serde_json::Value>,
}

impl CollectionPage {
    /// Decodes every resource into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when any resource does not match `T`.
    pub fn decode_resources<T: DeserializeOwned>(&self) -> Result<Vec<T>, ApiError> {
        self.resources
            .iter()
            .map(|resource| {
                T::deserialize(resource).map_err(|error| ApiError::Decode {
                    message: error.to_string(),
                })
            })
            .collect()
    }

    /// Decodes and validates the resources as request records.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when a resource is missing required
    /// fields or carries an unparseable identifier or timestamp.
    pub fn request_records(&self) -> Result<Vec<RequestRecord>, ApiError> {
        self.decode_resources::<ApiRequestRecord>()?
            .into_iter()
            .map(RequestRecord::try_from)
            .collect()
    }
}

/// Identifiers arrive as JSON numbers from some API versions and as numeric
/// strings from others.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiIdentifier {
    Number(u64),
    Text(String),
}

impl ApiIdentifier {
    fn into_u64(self) -> Result<u64, ApiError> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Text(text) => text.trim().parse().map_err(|_| ApiError::Decode {
                message: format!("request id `{text}` is not numeric"),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiRequestRecord {
    id: ApiIdentifier,
    description: String,
    requester_name: String,
    created_on: String,
    approval_state: ApprovalState,
    #[serde(default)]
    picture: Option<Picture>,
    #[serde(default)]
    href: Option<String>,
}

impl TryFrom<ApiRequestRecord> for RequestRecord {
    type Error = ApiError;

    fn try_from(value: ApiRequestRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into_u64()?,
            description: value.description,
            requester_name: value.requester_name,
            created_on: parse_timestamp(&value.created_on)?,
            approval_state: value.approval_state,
            picture: value.picture,
            href: value.href,
        })
    }
}

/// Parses an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when neither format matches.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ApiError> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| ApiError::Decode {
            message: format!("timestamp `{raw}` is not RFC 3339 or YYYY-MM-DD"),
        })
}
