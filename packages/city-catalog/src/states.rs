//! Fixed registry of U.S. states, loaded once and never mutated.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::slug::{state_page_path, validate_slug};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub slug: String,
    pub name: String,
    pub abbreviation: String,
    pub url: String,
}

impl State {
    pub fn new(slug: &str, name: &str, abbreviation: &str) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            url: state_page_path(slug),
        }
    }
}

/// (slug, name, abbreviation), alphabetical by name.
const BUILTIN_STATES: &[(&str, &str, &str)] = &[
    ("alabama", "Alabama", "AL"),
    ("alaska", "Alaska", "AK"),
    ("arizona", "Arizona", "AZ"),
    ("arkansas", "Arkansas", "AR"),
    ("california", "California", "CA"),
    ("colorado", "Colorado", "CO"),
    ("connecticut", "Connecticut", "CT"),
    ("delaware", "Delaware", "DE"),
    ("district-of-columbia", "District of Columbia", "DC"),
    ("florida", "Florida", "FL"),
    ("georgia", "Georgia", "GA"),
    ("hawaii", "Hawaii", "HI"),
    ("idaho", "Idaho", "ID"),
    ("illinois", "Illinois", "IL"),
    ("indiana", "Indiana", "IN"),
    ("iowa", "Iowa", "IA"),
    ("kansas", "Kansas", "KS"),
    ("kentucky", "Kentucky", "KY"),
    ("louisiana", "Louisiana", "LA"),
    ("maine", "Maine", "ME"),
    ("maryland", "Maryland", "MD"),
    ("massachusetts", "Massachusetts", "MA"),
    ("michigan", "Michigan", "MI"),
    ("minnesota", "Minnesota", "MN"),
    ("mississippi", "Mississippi", "MS"),
    ("missouri", "Missouri", "MO"),
    ("montana", "Montana", "MT"),
    ("nebraska", "Nebraska", "NE"),
    ("nevada", "Nevada", "NV"),
    ("new-hampshire", "New Hampshire", "NH"),
    ("new-jersey", "New Jersey", "NJ"),
    ("new-mexico", "New Mexico", "NM"),
    ("new-york", "New York", "NY"),
    ("north-carolina", "North Carolina", "NC"),
    ("north-dakota", "North Dakota", "ND"),
    ("ohio", "Ohio", "OH"),
    ("oklahoma", "Oklahoma", "OK"),
    ("oregon", "Oregon", "OR"),
    ("pennsylvania", "Pennsylvania", "PA"),
    ("rhode-island", "Rhode Island", "RI"),
    ("south-carolina", "South Carolina", "SC"),
    ("south-dakota", "South Dakota", "SD"),
    ("tennessee", "Tennessee", "TN"),
    ("texas", "Texas", "TX"),
    ("utah", "Utah", "UT"),
    ("vermont", "Vermont", "VT"),
    ("virginia", "Virginia", "VA"),
    ("washington", "Washington", "WA"),
    ("west-virginia", "West Virginia", "WV"),
    ("wisconsin", "Wisconsin", "WI"),
    ("wyoming", "Wyoming", "WY"),
];

/// Read-only lookup of valid states, in load order.
#[derive(Debug, Clone)]
pub struct StateRegistry {
    states: Vec<State>,
    index: HashMap<String, usize>,
}

impl StateRegistry {
    /// The 50 states plus the District of Columbia.
    pub fn builtin() -> Self {
        let states = BUILTIN_STATES
            .iter()
            .map(|(slug, name, abbreviation)| State::new(slug, name, abbreviation))
            .collect::<Vec<_>>();
        let index = states
            .iter()
            .enumerate()
            .map(|(i, s)| (s.slug.clone(), i))
            .collect();

        Self { states, index }
    }

    pub fn from_states(states: Vec<State>) -> Result<Self> {
        let mut index = HashMap::with_capacity(states.len());

        for (i, state) in states.iter().enumerate() {
            validate_slug(&state.slug)?;

            let abbreviation_ok = state.abbreviation.len() == 2
                && state.abbreviation.chars().all(|c| c.is_ascii_uppercase());
            if !abbreviation_ok {
                return Err(CatalogError::InvalidAbbreviation {
                    slug: state.slug.clone(),
                    abbreviation: state.abbreviation.clone(),
                });
            }

            if index.insert(state.slug.clone(), i).is_some() {
                return Err(CatalogError::DuplicateState {
                    slug: state.slug.clone(),
                });
            }
        }

        Ok(Self { states, index })
    }

    /// Parse the scraped `all-states.json` shape: an array of states.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let states: Vec<State> = serde_json::from_str(json).map_err(CatalogError::RegistryParse)?;
        Self::from_states(states)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::FeedIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn get(&self, slug: &str) -> Option<&State> {
        self.index.get(slug).map(|&i| &self.states[i])
    }

    /// Like [`get`](Self::get), for callers that render a not-found page.
    pub fn require(&self, slug: &str) -> Result<&State> {
        self.get(slug).ok_or_else(|| CatalogError::StateNotFound {
            slug: slug.to_string(),
        })
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.index.contains_key(slug)
    }

    pub fn by_abbreviation(&self, abbreviation: &str) -> Option<&State> {
        self.states
            .iter()
            .find(|s| s.abbreviation.eq_ignore_ascii_case(abbreviation))
    }

    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Default for StateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
