//! Error types exposed by the collections API layer.

use thiserror::Error;

/// Errors surfaced while configuring or talking to the collections API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No API base URL was configured.
    #[error("API URL is required")]
    MissingApiUrl,

    /// The configured URL could not be parsed or uses an unsupported scheme.
    #[error("API URL is invalid: {0}")]
    InvalidUrl(String),

    /// Neither a token nor a username/password pair was supplied.
    #[error("API credentials are required (token or username and password)")]
    MissingCredentials,

    /// The API rejected the supplied credentials.
    #[error("the API rejected the credentials: {message}")]
    Authentication {
        /// Message returned alongside the 401/403 response.
        message: String,
    },

    /// The API returned a non-success status other than an auth failure.
    #[error("API error: {message}")]
    Api {
        /// Response detail describing the failure.
        message: String,
    },

    /// Networking failed while calling the API.
    #[error("network error talking to the API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("unexpected API response: {message}")]
    Decode {
        /// Deserialisation error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A filter expression could not be parsed.
    #[error("invalid filter: {message}")]
    InvalidFilter {
        /// Description of the rejected filter.
        message: String,
    },

    /// A sort field identifier was not recognised.
    #[error("unknown sort field: {0}")]
    InvalidSortField(String),
}
