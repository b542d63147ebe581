//! Authoritative per-state city lists collected by the offline scraper.
//!
//! The feed is read once at startup and handed to the resolver. A missing
//! or empty entry is not an error here; the resolver falls back to the
//! synthetic tables.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CatalogError, Result};

/// Source of authoritative city slugs, keyed by state slug.
pub trait CitySource: Send + Sync {
    /// Raw list for a state, as collected. `None` when the state was never
    /// collected.
    fn cities_for(&self, state_slug: &str) -> Option<&[String]>;
}

/// Scraped entries are either bare slugs or city objects with a slug.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedEntry {
    Slug(String),
    City { slug: String },
}

impl FeedEntry {
    fn into_slug(self) -> String {
        match self {
            FeedEntry::Slug(slug) | FeedEntry::City { slug } => slug,
        }
    }
}

/// In-memory city feed.
#[derive(Debug, Clone, Default)]
pub struct CityFeed {
    states: BTreeMap<String, Vec<String>>,
}

impl CityFeed {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the scraper output: `{ "texas": ["houston", ...], ... }`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<FeedEntry>> =
            serde_json::from_str(json).map_err(CatalogError::FeedParse)?;

        let states = raw
            .into_iter()
            .map(|(state, entries)| {
                let cities = entries.into_iter().map(FeedEntry::into_slug).collect();
                (state, cities)
            })
            .collect();

        Ok(Self { states })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::FeedIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn insert<I, S>(&mut self, state_slug: impl Into<String>, cities: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states
            .insert(state_slug.into(), cities.into_iter().map(Into::into).collect());
    }

    pub fn with_state<I, S>(mut self, state_slug: impl Into<String>, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(state_slug, cities);
        self
    }

    /// Number of states with an entry (empty entries included).
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl CitySource for CityFeed {
    fn cities_for(&self, state_slug: &str) -> Option<&[String]> {
        self.states.get(state_slug).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_scraper_output() {
        let json = r#"{"texas": ["austin", "houston"], "ohio": []}"#;
        let feed = CityFeed::from_json_str(json).unwrap();

        assert_eq!(feed.state_count(), 2);
        assert_eq!(feed.cities_for("texas").unwrap(), ["austin", "houston"]);
        assert_eq!(feed.cities_for("ohio").unwrap().len(), 0);
        assert!(feed.cities_for("utah").is_none());
    }

    #[test]
    fn test_parses_city_objects() {
        let json = r#"{"texas": [{"slug": "dallas", "name": "Dallas", "url": "/texas/dallas/"}, "waco"]}"#;
        let feed = CityFeed::from_json_str(json).unwrap();
        assert_eq!(feed.cities_for("texas").unwrap(), ["dallas", "waco"]);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = CityFeed::from_json_str(r#"{"texas": 5}"#).unwrap_err();
        assert!(matches!(err, CatalogError::FeedParse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CityFeed::from_path("/definitely/not/here/scraped-cities.json").unwrap_err();
        assert!(matches!(err, CatalogError::FeedIo { .. }));
    }

    #[test]
    fn test_builder() {
        let feed = CityFeed::empty().with_state("texas", ["houston"]);
        assert_eq!(feed.cities_for("texas").unwrap(), ["houston"]);
    }
}
