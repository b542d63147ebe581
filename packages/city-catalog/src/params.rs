//! Static Parameter Generator: the (state, city) pairs to pre-render.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::feed::CitySource;
use crate::resolver::{CityLimit, CityOrigin, CityResolver};
use crate::slug::{catch_all_segment, city_page_path, CityView};
use crate::states::{State, StateRegistry};

/// Home, about, contact, by-state, dumpster-sizes, not-found.
pub const MAIN_PAGES: usize = 6;

/// Default size of the internal-link lists on a city page.
pub const LINK_LIST_LEN: usize = 8;

/// One city page to generate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageParam {
    pub state: String,
    pub city: String,
}

impl PageParam {
    pub fn path(&self) -> String {
        city_page_path(&self.state, &self.city)
    }

    pub fn catch_all(&self) -> CatchAllParam {
        CatchAllParam {
            state: self.state.clone(),
            slug: vec![catch_all_segment(&self.city)],
        }
    }

    pub fn view(&self) -> Option<CityView> {
        CityView::new(&self.state, &self.city).ok()
    }
}

/// Param shape for the `/{state}/[...slug]` route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchAllParam {
    pub state: String,
    pub slug: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateOrder {
    /// Registry order.
    #[default]
    Registry,
    /// Major states first, each group in registry order.
    MajorsFirst,
}

/// Caps and ordering for a generation run.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// States that get `major_state_cap` instead of `regular_state_cap`.
    pub major_states: BTreeSet<String>,

    pub major_state_cap: CityLimit,

    pub regular_state_cap: CityLimit,

    /// Stop once this many params have been emitted. `None` = unbounded.
    pub global_cap: Option<usize>,

    pub order: StateOrder,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            major_states: ["texas", "california", "florida", "new-york", "illinois", "pennsylvania"]
                .into_iter()
                .map(String::from)
                .collect(),
            major_state_cap: CityLimit::AtMost(50),
            regular_state_cap: CityLimit::AtMost(25),
            global_cap: None,
            order: StateOrder::Registry,
        }
    }
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_major_states(mut self, states: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.major_states = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_major_state_cap(mut self, cap: CityLimit) -> Self {
        self.major_state_cap = cap;
        self
    }

    pub fn with_regular_state_cap(mut self, cap: CityLimit) -> Self {
        self.regular_state_cap = cap;
        self
    }

    pub fn with_global_cap(mut self, cap: usize) -> Self {
        self.global_cap = Some(cap);
        self
    }

    pub fn with_order(mut self, order: StateOrder) -> Self {
        self.order = order;
        self
    }

    pub fn is_major(&self, state_slug: &str) -> bool {
        self.major_states.contains(state_slug)
    }

    pub fn cap_for(&self, state_slug: &str) -> CityLimit {
        if self.is_major(state_slug) {
            self.major_state_cap
        } else {
            self.regular_state_cap
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSummary {
    pub state: String,
    pub major: bool,
    pub origin: CityOrigin,
    pub emitted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedState {
    pub state: String,
    pub reason: String,
}

/// Result of [`generate_all_params`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParamReport {
    pub params: Vec<PageParam>,
    pub states: Vec<StateSummary>,
    pub skipped: Vec<SkippedState>,
    /// True when the global cap cut the run short.
    pub truncated: bool,
}

impl ParamReport {
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn for_state<'a>(&'a self, state_slug: &'a str) -> impl Iterator<Item = &'a PageParam> + 'a {
        self.params.iter().filter(move |p| p.state == state_slug)
    }

    /// First cities of a state, as listed on its city pages.
    pub fn top_cities(&self, state_slug: &str, limit: usize) -> Vec<CityView> {
        self.for_state(state_slug)
            .filter_map(PageParam::view)
            .take(limit)
            .collect()
    }

    /// Other cities in the same state, for internal linking.
    pub fn related_cities(&self, state_slug: &str, city_slug: &str, limit: usize) -> Vec<CityView> {
        self.for_state(state_slug)
            .filter(|p| p.city != city_slug)
            .filter_map(PageParam::view)
            .take(limit)
            .collect()
    }

    pub fn catch_all_params(&self) -> Vec<CatchAllParam> {
        self.params.iter().map(PageParam::catch_all).collect()
    }
}

fn ordered_states<'a>(registry: &'a StateRegistry, config: &GenerationConfig) -> Vec<&'a State> {
    match config.order {
        StateOrder::Registry => registry.iter().collect(),
        StateOrder::MajorsFirst => {
            let (mut majors, regular): (Vec<_>, Vec<_>) =
                registry.iter().partition(|s| config.is_major(&s.slug));
            majors.extend(regular);
            majors
        }
    }
}

/// Enumerate every city page to pre-render.
///
/// Only registry states are visited, so every param names a known state.
/// A state whose resolution comes back rejected or empty is recorded in
/// [`ParamReport::skipped`] and the run moves on.
pub fn generate_all_params<S: CitySource>(
    registry: &StateRegistry,
    resolver: &CityResolver<S>,
    config: &GenerationConfig,
) -> ParamReport {
    let mut report = ParamReport::default();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let at_cap = |emitted: usize| matches!(config.global_cap, Some(cap) if emitted >= cap);

    for state in ordered_states(registry, config) {
        if at_cap(report.params.len()) {
            report.truncated = true;
            break;
        }

        let major = config.is_major(&state.slug);
        let resolution = resolver.resolve(&state.slug, config.cap_for(&state.slug));

        if resolution.origin == CityOrigin::Rejected || resolution.is_empty() {
            let reason = resolution
                .warnings
                .first()
                .map(ToString::to_string)
                .unwrap_or_else(|| "no cities resolved".to_string());
            warn!(state = %state.slug, reason = %reason, "Skipping state during param generation");
            report.skipped.push(SkippedState {
                state: state.slug.clone(),
                reason,
            });
            continue;
        }

        let mut emitted = 0;
        for city in resolution.cities {
            if at_cap(report.params.len()) {
                report.truncated = true;
                break;
            }
            if city.trim().is_empty() {
                continue;
            }
            if seen.insert((state.slug.clone(), city.clone())) {
                report.params.push(PageParam {
                    state: state.slug.clone(),
                    city,
                });
                emitted += 1;
            }
        }

        debug!(state = %state.slug, major, origin = ?resolution.origin, emitted, "Generated state params");
        report.states.push(StateSummary {
            state: state.slug.clone(),
            major,
            origin: resolution.origin,
            emitted,
        });
    }

    info!(
        params = report.params.len(),
        skipped = report.skipped.len(),
        truncated = report.truncated,
        "Generated city page params"
    );
    report
}

/// Page totals for a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageCounts {
    pub city_pages: usize,
    pub state_pages: usize,
    pub main_pages: usize,
    pub total: usize,
}

impl PageCounts {
    fn new(city_pages: usize, state_pages: usize) -> Self {
        Self {
            city_pages,
            state_pages,
            main_pages: MAIN_PAGES,
            total: city_pages.saturating_add(state_pages).saturating_add(MAIN_PAGES),
        }
    }

    /// Actual counts from a finished run.
    pub fn from_report(report: &ParamReport, registry: &StateRegistry) -> Self {
        Self::new(report.len(), registry.len())
    }

    /// Upper bound from the caps alone. `None` if a cap in use is unbounded
    /// or the total overflows.
    pub fn planned(registry: &StateRegistry, config: &GenerationConfig) -> Option<Self> {
        let mut city_pages = 0usize;
        for state in registry.iter() {
            city_pages = city_pages.checked_add(config.cap_for(&state.slug).capacity()?)?;
        }
        if let Some(cap) = config.global_cap {
            city_pages = city_pages.min(cap);
        }
        Some(Self::new(city_pages, registry.len()))
    }
}
