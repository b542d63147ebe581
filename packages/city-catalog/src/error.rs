//! Typed errors for the city catalog.
//!
//! Uses `thiserror` for library errors (not `anyhow`). Resolution itself
//! never fails: see [`crate::resolver::Resolution`] for the degraded paths.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by lookups, route parsing and data loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// State slug is not in the registry
    #[error("state not found: {slug}")]
    StateNotFound { slug: String },

    /// City segment could not be turned into a city page
    #[error("city not found in {state}: {segment}")]
    CityNotFound { state: String, segment: String },

    /// Path does not match any page route
    #[error("no page route for: {path}")]
    RouteNotFound { path: String },

    /// Input is not a lowercase, hyphen-delimited slug
    #[error("invalid slug {input:?}: {reason}")]
    InvalidSlug { input: String, reason: &'static str },

    /// Registry contains the same slug twice
    #[error("duplicate state slug: {slug}")]
    DuplicateState { slug: String },

    /// Registry entry has a malformed abbreviation
    #[error("invalid abbreviation for {slug}: {abbreviation:?}")]
    InvalidAbbreviation { slug: String, abbreviation: String },

    /// Data file could not be read
    #[error("failed to read {path}: {source}")]
    FeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// City feed JSON is malformed
    #[error("city feed parse error: {0}")]
    FeedParse(#[source] serde_json::Error),

    /// State registry JSON is malformed
    #[error("state registry parse error: {0}")]
    RegistryParse(#[source] serde_json::Error),
}

impl CatalogError {
    /// True for the conditions a page handler should render as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::StateNotFound { .. }
                | CatalogError::CityNotFound { .. }
                | CatalogError::RouteNotFound { .. }
        )
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
