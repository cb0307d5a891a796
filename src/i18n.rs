//! Message catalog for translated labels.
//!
//! A catalog maps English message ids (e.g. `"Pending"`) to translations.
//! Missing entries fall back to the message id itself, so the default
//! catalog renders English.
//!
//! Catalog files are flat JSON objects:
//!
//! ```json
//! { "Pending": "En attente", "Filter by Status": "Filtrer par statut" }
//! ```

use std::collections::HashMap;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::api::ApiError;

/// Translation lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Returns the identity (English) catalog.
    #[must_use]
    pub fn english() -> Self {
        Self::default()
    }

    /// Builds a catalog from `(msgid, translation)` pairs.
    #[must_use]
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(msgid, translation)| (msgid.into(), translation.into()))
                .collect(),
        }
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] when the file cannot be read or is not a
    /// flat JSON object of strings.
    pub fn load(path: &Utf8Path) -> Result<Self, ApiError> {
        let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
        let parent_dir = if parent.as_str().is_empty() {
            Utf8Path::new(".")
        } else {
            parent
        };
        let file_name = path.file_name().ok_or_else(|| ApiError::Io {
            message: format!("invalid catalog path '{path}': no file name"),
        })?;

        let dir = Dir::open_ambient_dir(parent_dir, ambient_authority()).map_err(|error| {
            ApiError::Io {
                message: format!("failed to open catalog directory '{parent_dir}': {error}"),
            }
        })?;
        let content = dir
            .read_to_string(file_name)
            .map_err(|error| ApiError::Io {
                message: format!("failed to read catalog '{path}': {error}"),
            })?;

        let entries: HashMap<String, String> =
            serde_json::from_str(&content).map_err(|error| ApiError::Io {
                message: format!("failed to parse catalog '{path}': {error}"),
            })?;
        tracing::debug!(path = %path, entries = entries.len(), "loaded message catalog");
        Ok(Self { entries })
    }

    /// Translates `msgid`, falling back to the id itself.
    #[must_use]
    pub fn tr<'a>(&'a self, msgid: &'a str) -> &'a str {
        self.entries.get(msgid).map_or(msgid, String::as_str)
    }

    /// Returns the number of translated entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the catalog has no translations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
