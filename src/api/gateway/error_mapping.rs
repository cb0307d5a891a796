//! Error mapping helpers for the HTTP collections gateway.

use http::StatusCode;

use crate::api::error::ApiError;

/// Longest response-body excerpt carried into an error message.
const MAX_BODY_EXCERPT: usize = 160;

/// Checks if a status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Maps a non-success HTTP response into an [`ApiError`].
pub(super) fn map_status_error(operation: &str, status: StatusCode, body: &str) -> ApiError {
    let message = extract_api_message(body).unwrap_or_else(|| excerpt(body));
    if is_auth_failure(status) {
        ApiError::Authentication {
            message: format!("{operation} failed: API returned {status} {message}"),
        }
    } else {
        ApiError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

/// Maps a transport failure from reqwest into an [`ApiError`].
pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> ApiError {
    if error.is_decode() {
        return ApiError::Decode {
            message: format!("{operation} returned an unreadable body: {error}"),
        };
    }
    if error.is_timeout() {
        return ApiError::Network {
            message: format!("{operation} timed out: {error}"),
        };
    }
    ApiError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

/// Pulls the human-readable message out of an API error body.
///
/// Accepts both `{"error": {"message": ...}}` and `{"message": ...}`.
pub(super) fn extract_api_message(body: &str) -> Option<String> {
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    value
        .get("error")
        .and_then(|error| error.get("message"))
        .or_else(|| value.get("message"))
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "(empty response body)".to_owned();
    }
    match trimmed.char_indices().nth(MAX_BODY_EXCERPT) {
        Some((cut, _)) => trimmed.get(..cut).map_or_else(
            || trimmed.to_owned(),
            |head| format!("{head}..."),
        ),
        None => trimmed.to_owned(),
    }
}
