//! API endpoint parsing and credential wrappers.

use std::fmt;

use url::Url;

use super::error::ApiError;

/// Base URL of a collections API, validated to be HTTP(S).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint(Url);

impl ApiEndpoint {
    /// Parses a base URL such as `https://miq.example.com` or
    /// `https://miq.example.com/api`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when the value cannot be parsed or is
    /// not an `http`/`https` URL.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let url = Url::parse(raw.trim()).map_err(|error| ApiError::InvalidUrl(error.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "unsupported scheme `{}`",
                url.scheme()
            )));
        }
        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!("`{raw}` cannot be a base URL")));
        }
        Ok(Self(url))
    }

    /// Returns the URL of a collection, appending `api/` unless the base
    /// already ends with it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when the collection name does not
    /// form a valid path.
    pub fn collection_url(&self, collection: &str) -> Result<Url, ApiError> {
        let mut url = self.0.clone();
        let ends_with_api = url
            .path_segments()
            .and_then(|mut segments| segments.rfind(|segment| !segment.is_empty()))
            .is_some_and(|last| last == "api");

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ApiError::InvalidUrl(self.0.to_string()))?;
            segments.pop_if_empty();
            if !ends_with_api {
                segments.push("api");
            }
            segments.push(collection);
        }
        Ok(url)
    }

    /// Borrows the base URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Credentials presented to the API.
#[derive(Clone, PartialEq, Eq)]
pub enum ApiCredentials {
    /// Session token sent in the `X-Auth-Token` header.
    Token(String),
    /// HTTP basic authentication.
    Basic {
        /// Login name.
        username: String,
        /// Password.
        password: String,
    },
}

impl ApiCredentials {
    /// Builds token credentials, trimming whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingCredentials`] when the token is blank.
    pub fn token(value: impl AsRef<str>) -> Result<Self, ApiError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ApiError::MissingCredentials);
        }
        Ok(Self::Token(trimmed.to_owned()))
    }

    /// Builds basic-auth credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingCredentials`] when the username is blank.
    pub fn basic(username: impl AsRef<str>, password: impl Into<String>) -> Result<Self, ApiError> {
        let user = username.as_ref().trim();
        if user.is_empty() {
            return Err(ApiError::MissingCredentials);
        }
        Ok(Self::Basic {
            username: user.to_owned(),
            password: password.into(),
        })
    }
}

// Secrets stay out of debug output and logs.
impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(_) => f.write_str("ApiCredentials::Token(..)"),
            Self::Basic { username, .. } => f
                .debug_struct("ApiCredentials::Basic")
                .field("username", username)
                .finish_non_exhaustive(),
        }
    }
}
