//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.docket.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `DOCKET_API_URL`, `DOCKET_TOKEN`, or legacy
//!    `MIQ_TOKEN`
//! 4. **Command-line arguments** – `--api-url`/`-u` and `--token`/`-t`
//!
//! # Configuration File
//!
//! Place `.docket.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! api_url = "https://manageiq.example.com"
//! token = "0123456789abcdef"
//! catalog = "locale/fr.json"
//! filters = "approval_state=Pending,requester_name=alice"
//! sort = "id"
//! descending = true
//! ```

use std::env;
use std::time::Duration;

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::api::{ApiCredentials, ApiEndpoint, ApiError};
use crate::explorer::{AppliedFilter, SortField, SortState, parse_filters};

/// Legacy environment variable consulted when no token is configured.
pub const LEGACY_TOKEN_ENV: &str = "MIQ_TOKEN";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive terminal explorer.
    Interactive,
    /// Print the filtered, sorted requests and exit.
    PlainListing,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `DOCKET_API_URL` or `--api-url`: Base URL of the collections API
/// - `DOCKET_TOKEN`, `MIQ_TOKEN`, or `--token`: Authentication token
/// - `DOCKET_USERNAME` / `DOCKET_PASSWORD`: Basic-auth credentials
/// - `DOCKET_CATALOG` or `--catalog`: Translation catalog path
/// - `DOCKET_FILTERS` or `--filters`: Initial filters
/// - `DOCKET_SORT` or `--sort`: Initial sort field
///
/// # Example
///
/// ```no_run
/// use docket::DocketConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = DocketConfig::load().expect("failed to load configuration");
/// let endpoint = config.require_api_url().expect("API URL required");
/// let credentials = config.resolve_credentials().expect("credentials required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "DOCKET",
    discovery(
        dotfile_name = ".docket.toml",
        config_file_name = "docket.toml",
        app_name = "docket"
    )
)]
pub struct DocketConfig {
    /// Base URL of the collections API (e.g. `https://miq.example.com`).
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-u <URL>`
    /// - Environment: `DOCKET_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub api_url: Option<String>,

    /// API token sent in the `X-Auth-Token` header.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `DOCKET_TOKEN` or `MIQ_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Username for HTTP basic authentication, used when no token is set.
    #[ortho_config()]
    pub username: Option<String>,

    /// Password for HTTP basic authentication.
    #[ortho_config(cli_short = 'P')]
    pub password: Option<String>,

    /// Path to a JSON translation catalog.
    ///
    /// Can be provided via:
    /// - CLI: `--catalog <PATH>` or `-c <PATH>`
    /// - Environment: `DOCKET_CATALOG`
    /// - Config file: `catalog = "..."`
    #[ortho_config(cli_short = 'c')]
    pub catalog: Option<String>,

    /// Initial filters as comma-separated `field=value` pairs.
    ///
    /// Field ids are `description`, `request_id`, `requester_name`,
    /// `request_date` and `approval_state`.
    #[ortho_config(cli_short = 'f')]
    pub filters: Option<String>,

    /// Initial sort field id: `description`, `id`, `requester_name`,
    /// `requested` or `status`.
    #[ortho_config(cli_short = 's')]
    pub sort: Option<String>,

    /// Sorts the initial sort field in descending order.
    ///
    /// Note: Environment variable `DOCKET_DESCENDING` is not supported
    /// because `ortho_config` does not load boolean values from the
    /// environment.
    #[ortho_config(cli_short = 'd')]
    pub descending: bool,

    /// Prints the requests as plain text and exits instead of starting the
    /// interactive explorer.
    ///
    /// Can be provided via:
    /// - CLI: `--plain` / `-p`
    /// - Config file: `plain = true`
    #[ortho_config(cli_short = 'p')]
    pub plain: bool,

    /// HTTP request timeout in seconds.
    #[ortho_config()]
    pub timeout_secs: u64,
}

impl Default for DocketConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            token: None,
            username: None,
            password: None,
            catalog: None,
            filters: None,
            sort: None,
            descending: false,
            plain: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DocketConfig {
    /// Parses the configured API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingApiUrl`] when no URL is configured and
    /// [`ApiError::InvalidUrl`] when it cannot be parsed.
    pub fn require_api_url(&self) -> Result<ApiEndpoint, ApiError> {
        let raw = self.api_url.as_deref().ok_or(ApiError::MissingApiUrl)?;
        ApiEndpoint::parse(raw)
    }

    /// Resolves credentials from the token, the legacy `MIQ_TOKEN`
    /// environment variable, or the username/password pair, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingCredentials`] when no source provides
    /// usable credentials.
    pub fn resolve_credentials(&self) -> Result<ApiCredentials, ApiError> {
        let token = self
            .token
            .clone()
            .or_else(|| env::var(LEGACY_TOKEN_ENV).ok());
        if let Some(value) = token {
            return ApiCredentials::token(value);
        }

        match (&self.username, &self.password) {
            (Some(username), Some(password)) => ApiCredentials::basic(username, password.clone()),
            _ => Err(ApiError::MissingCredentials),
        }
    }

    /// Parses the configured initial filters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidFilter`] when an entry is malformed or
    /// names an unknown field.
    pub fn applied_filters(&self) -> Result<Vec<AppliedFilter>, ApiError> {
        self.filters
            .as_deref()
            .map_or_else(|| Ok(Vec::new()), parse_filters)
    }

    /// Returns the initial sort.
    ///
    /// Without a configured field the explorer shows the newest requests
    /// first; with one, `descending` picks the direction.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidSortField`] for an unknown field id.
    pub fn sort_state(&self) -> Result<SortState, ApiError> {
        let Some(raw) = self.sort.as_deref() else {
            return Ok(SortState::default());
        };
        let field: SortField = raw.parse()?;
        Ok(SortState::new(field, !self.descending))
    }

    /// Path of the configured translation catalog, if any.
    #[must_use]
    pub fn catalog_path(&self) -> Option<&Utf8Path> {
        self.catalog.as_deref().map(Utf8Path::new)
    }

    /// HTTP timeout as a duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.plain {
            OperationMode::PlainListing
        } else {
            OperationMode::Interactive
        }
    }
}

#[cfg(test)]
mod tests;
