//! City Source Resolver.
//!
//! Turns a state slug into an ordered list of unique city slugs:
//!
//! 1. the authoritative feed entry when present and non-empty, with
//!    nationally recognizable cities moved to the front (stable partition);
//! 2. otherwise a synthetic list: up to half the limit from the curated
//!    majors table, the rest from the shuffled generic pool;
//! 3. otherwise the placeholder list.
//!
//! Resolution never fails. Degraded paths are reported through
//! [`Resolution::origin`] and [`Resolution::warnings`].

use std::collections::{HashMap, HashSet};
use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::feed::{CityFeed, CitySource};
use crate::slug::{normalize_slug, validate_slug, CityView};
use crate::synthetic::{curated_majors, GENERIC_PLACE_NAMES, PLACEHOLDER_CITIES, PRIORITY_CITIES};

/// Cities listed on a state landing page.
pub const STATE_PAGE_CITY_COUNT: usize = 10;

/// Upper bound on the number of cities resolved for one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CityLimit {
    AtMost(usize),
    Unbounded,
}

impl CityLimit {
    pub fn capacity(self) -> Option<usize> {
        match self {
            CityLimit::AtMost(n) => Some(n),
            CityLimit::Unbounded => None,
        }
    }

    fn is_full(self, len: usize) -> bool {
        matches!(self, CityLimit::AtMost(n) if len >= n)
    }
}

impl From<usize> for CityLimit {
    fn from(n: usize) -> Self {
        CityLimit::AtMost(n)
    }
}

/// Where a resolved list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CityOrigin {
    Authoritative,
    Synthetic,
    Placeholder,
    /// Input was invalid; the list is empty.
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolveWarning {
    InvalidStateSlug { input: String, reason: &'static str },
    ZeroLimit,
    FeedMissing,
    FeedEmpty,
    DroppedFeedEntry { entry: String },
    PlaceholderUsed,
}

impl fmt::Display for ResolveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveWarning::InvalidStateSlug { input, reason } => {
                write!(f, "invalid state slug {:?}: {}", input, reason)
            }
            ResolveWarning::ZeroLimit => write!(f, "city limit is zero"),
            ResolveWarning::FeedMissing => write!(f, "no authoritative city list, using synthetic"),
            ResolveWarning::FeedEmpty => write!(f, "authoritative city list is empty, using synthetic"),
            ResolveWarning::DroppedFeedEntry { entry } => write!(f, "dropped feed entry {:?}", entry),
            ResolveWarning::PlaceholderUsed => write!(f, "no city names available, using placeholders"),
        }
    }
}

/// Outcome of [`CityResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub state: String,
    pub cities: Vec<String>,
    pub origin: CityOrigin,
    pub warnings: Vec<ResolveWarning>,
}

impl Resolution {
    fn rejected(state: &str, warning: ResolveWarning) -> Self {
        Self {
            state: state.to_string(),
            cities: Vec::new(),
            origin: CityOrigin::Rejected,
            warnings: vec![warning],
        }
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// True when the authoritative list was not used.
    pub fn used_fallback(&self) -> bool {
        matches!(self.origin, CityOrigin::Synthetic | CityOrigin::Placeholder)
    }
}

/// Tables and randomness driving the resolver.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Cities moved to the front of an authoritative list.
    pub priority_cities: Vec<String>,

    /// Curated majors per state, most important first.
    pub curated: HashMap<String, Vec<String>>,

    /// Shared fragments used to fill synthetic lists.
    pub generic_pool: Vec<String>,

    /// Used when nothing else produces a city.
    pub placeholders: Vec<String>,

    /// Seed for the generic pool shuffle.
    ///
    /// `None` draws from OS entropy, so synthetic lists differ between
    /// runs. With a seed, each state gets its own stream derived from the
    /// seed and the state slug.
    pub seed: Option<u64>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        let curated = ["texas", "california", "florida", "new-york", "illinois", "pennsylvania"]
            .into_iter()
            .filter_map(|state| {
                curated_majors(state).map(|cities| (state.to_string(), owned_table(cities)))
            })
            .collect();

        Self {
            priority_cities: owned_table(PRIORITY_CITIES),
            curated,
            generic_pool: owned_table(GENERIC_PLACE_NAMES),
            placeholders: owned_table(PLACEHOLDER_CITIES),
            seed: None,
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_priority_cities(mut self, cities: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.priority_cities = cities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_curated(
        mut self,
        state_slug: impl Into<String>,
        cities: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.curated
            .insert(state_slug.into(), cities.into_iter().map(Into::into).collect());
        self
    }

    pub fn without_curated(mut self) -> Self {
        self.curated.clear();
        self
    }

    pub fn with_generic_pool(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.generic_pool = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_placeholders(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.placeholders = names.into_iter().map(Into::into).collect();
        self
    }
}

fn owned_table(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

/// Keep valid slugs only, first occurrence wins.
fn sanitize_table(name: &str, table: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    table
        .into_iter()
        .filter(|slug| match validate_slug(slug) {
            Ok(()) => seen.insert(slug.clone()),
            Err(e) => {
                warn!(table = name, error = %e, "Dropping invalid slug from resolver table");
                false
            }
        })
        .collect()
}

/// FNV-1a, stable across builds (unlike `DefaultHasher`).
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(*b)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

/// Resolves city lists for states. Built once and shared by reference.
pub struct CityResolver<S: CitySource = CityFeed> {
    source: S,
    config: ResolverConfig,
    priority: HashSet<String>,
}

impl<S: CitySource> CityResolver<S> {
    pub fn new(source: S, config: ResolverConfig) -> Self {
        let config = ResolverConfig {
            priority_cities: sanitize_table("priority", config.priority_cities),
            curated: config
                .curated
                .into_iter()
                .map(|(state, cities)| {
                    let cities = sanitize_table("curated", cities);
                    (state, cities)
                })
                .collect(),
            generic_pool: sanitize_table("generic", config.generic_pool),
            placeholders: sanitize_table("placeholder", config.placeholders),
            seed: config.seed,
        };
        let priority = config.priority_cities.iter().cloned().collect();

        Self {
            source,
            config,
            priority,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn resolve(&self, state_slug: &str, limit: CityLimit) -> Resolution {
        if let Err(e) = validate_slug(state_slug) {
            warn!(state = %state_slug, error = %e, "Rejected city resolution for invalid state slug");
            let reason = match e {
                CatalogError::InvalidSlug { reason, .. } => reason,
                _ => "invalid",
            };
            return Resolution::rejected(
                state_slug,
                ResolveWarning::InvalidStateSlug {
                    input: state_slug.to_string(),
                    reason,
                },
            );
        }

        if limit == CityLimit::AtMost(0) {
            warn!(state = %state_slug, "Rejected city resolution with zero limit");
            return Resolution::rejected(state_slug, ResolveWarning::ZeroLimit);
        }

        let mut warnings = Vec::new();

        match self.source.cities_for(state_slug) {
            Some(raw) => {
                let cities = self.from_feed(raw, limit, &mut warnings);
                if !cities.is_empty() {
                    debug!(state = %state_slug, count = cities.len(), "Resolved cities from feed");
                    return Resolution {
                        state: state_slug.to_string(),
                        cities,
                        origin: CityOrigin::Authoritative,
                        warnings,
                    };
                }
                warn!(state = %state_slug, "Authoritative city list is empty, falling back to synthetic");
                warnings.push(ResolveWarning::FeedEmpty);
            }
            None => {
                warn!(state = %state_slug, "No authoritative city list, falling back to synthetic");
                warnings.push(ResolveWarning::FeedMissing);
            }
        }

        let cities = self.synthetic(state_slug, limit);
        if !cities.is_empty() {
            debug!(state = %state_slug, count = cities.len(), "Resolved synthetic cities");
            return Resolution {
                state: state_slug.to_string(),
                cities,
                origin: CityOrigin::Synthetic,
                warnings,
            };
        }

        warn!(state = %state_slug, "No city names available, using placeholders");
        warnings.push(ResolveWarning::PlaceholderUsed);
        let cities = self
            .config
            .placeholders
            .iter()
            .take(limit.capacity().unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Resolution {
            state: state_slug.to_string(),
            cities,
            origin: CityOrigin::Placeholder,
            warnings,
        }
    }

    /// Bounded subset of a state's cities for the state landing page.
    pub fn state_page_cities(&self, state_slug: &str, limit: usize) -> Vec<CityView> {
        self.resolve(state_slug, CityLimit::AtMost(limit))
            .cities
            .iter()
            .filter_map(|city| CityView::new(state_slug, city).ok())
            .collect()
    }

    fn from_feed(&self, raw: &[String], limit: CityLimit, warnings: &mut Vec<ResolveWarning>) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut cities = Vec::with_capacity(raw.len());

        for entry in raw {
            match normalize_slug(entry) {
                Some(slug) => {
                    if seen.insert(slug.clone()) {
                        cities.push(slug);
                    }
                }
                None => warnings.push(ResolveWarning::DroppedFeedEntry {
                    entry: entry.clone(),
                }),
            }
        }

        let (mut ordered, rest): (Vec<_>, Vec<_>) =
            cities.into_iter().partition(|city| self.priority.contains(city));
        ordered.extend(rest);

        if let Some(cap) = limit.capacity() {
            ordered.truncate(cap);
        }
        ordered
    }

    fn synthetic(&self, state_slug: &str, limit: CityLimit) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut cities = Vec::new();

        if let Some(majors) = self.config.curated.get(state_slug) {
            let take = match limit {
                CityLimit::AtMost(n) => n / 2,
                CityLimit::Unbounded => majors.len(),
            };
            for city in majors.iter().take(take) {
                if seen.insert(city.as_str()) {
                    cities.push(city.clone());
                }
            }
        }

        let mut pool: Vec<&String> = self.config.generic_pool.iter().collect();
        pool.shuffle(&mut self.rng_for(state_slug));

        for name in pool {
            if limit.is_full(cities.len()) {
                break;
            }
            if seen.insert(name.as_str()) {
                cities.push(name.clone());
            }
        }

        cities
    }

    fn rng_for(&self, state_slug: &str) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ fnv1a(state_slug.as_bytes())),
            None => StdRng::from_entropy(),
        }
    }
}
