//! Page routes: the canonical `/{state}/dumpster-rental-{city}/` form and
//! the catch-all `/{state}/{...slug}` form both land here.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{CatalogError, Result};
use crate::slug::{validate_slug, CityView, CITY_SEGMENT_PREFIX};
use crate::states::{State, StateRegistry};

lazy_static! {
    // /texas/ or /texas/<segment>/ with optional trailing slash
    static ref PAGE_PATH: Regex = Regex::new(r"^/([^/]+)(?:/([^/]+))?/?$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRoute {
    State { state: String },
    City { state: String, city: String },
}

impl PageRoute {
    /// Parse a site path into a route.
    pub fn parse(path: &str) -> Result<Self> {
        let caps = PAGE_PATH
            .captures(path)
            .ok_or_else(|| CatalogError::RouteNotFound {
                path: path.to_string(),
            })?;

        let state = caps[1].to_string();
        match caps.get(2) {
            None => Ok(PageRoute::State { state }),
            Some(segment) => Self::from_catch_all(&state, &[segment.as_str()]),
        }
    }

    /// Build a route from the catch-all form, where `segments[0]` must be
    /// `dumpster-rental-{city}`.
    pub fn from_catch_all<S: AsRef<str>>(state: &str, segments: &[S]) -> Result<Self> {
        let not_found = |segment: &str| CatalogError::CityNotFound {
            state: state.to_string(),
            segment: segment.to_string(),
        };

        let first = match segments {
            [first] => first.as_ref(),
            [] => return Err(not_found("")),
            [first, ..] => return Err(not_found(first.as_ref())),
        };

        let city = first
            .strip_prefix(CITY_SEGMENT_PREFIX)
            .ok_or_else(|| not_found(first))?;
        validate_slug(city).map_err(|_| not_found(first))?;

        Ok(PageRoute::City {
            state: state.to_string(),
            city: city.to_string(),
        })
    }

    pub fn state(&self) -> &str {
        match self {
            PageRoute::State { state } | PageRoute::City { state, .. } => state,
        }
    }
}

/// A route matched against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPage<'a> {
    pub state: &'a State,
    pub city: Option<CityView>,
}

pub fn resolve_page<'a>(registry: &'a StateRegistry, route: &PageRoute) -> Result<ResolvedPage<'a>> {
    let state = registry.require(route.state())?;

    let city = match route {
        PageRoute::State { .. } => None,
        PageRoute::City { city, .. } => {
            let view = CityView::new(&state.slug, city).map_err(|_| CatalogError::CityNotFound {
                state: state.slug.clone(),
                segment: city.clone(),
            })?;
            Some(view)
        }
    };

    Ok(ResolvedPage { state, city })
}
