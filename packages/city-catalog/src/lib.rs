//! City catalog for the dumpster-rental landing pages.
//!
//! Everything here runs at build time over in-memory tables:
//!
//! - [`states`] - fixed state registry
//! - [`slug`] - slug validation, display names, page paths
//! - [`route`] - canonical and catch-all page routes
//! - [`feed`] - authoritative city lists from the scraper
//! - [`synthetic`] - curated and generic name tables
//! - [`resolver`] - per-state city resolution with fallbacks
//! - [`params`] - the full set of city pages to pre-render
//!
//! # Usage
//!
//! ```rust,ignore
//! use city_catalog::{
//!     generate_all_params, CityFeed, CityResolver, GenerationConfig, ResolverConfig, StateRegistry,
//! };
//!
//! let registry = StateRegistry::builtin();
//! let feed = CityFeed::from_path("data/scraped-cities.json")?;
//! let resolver = CityResolver::new(feed, ResolverConfig::default().with_seed(2024));
//!
//! let report = generate_all_params(&registry, &resolver, &GenerationConfig::default());
//! for param in &report.params {
//!     println!("{}", param.path());
//! }
//! ```

pub mod error;
pub mod feed;
pub mod params;
pub mod resolver;
pub mod route;
pub mod slug;
pub mod states;
pub mod synthetic;

pub use error::{CatalogError, Result};
pub use feed::{CityFeed, CitySource};
pub use params::{
    generate_all_params, CatchAllParam, GenerationConfig, PageCounts, PageParam, ParamReport,
    SkippedState, StateOrder, StateSummary, LINK_LIST_LEN, MAIN_PAGES,
};
pub use resolver::{
    CityLimit, CityOrigin, CityResolver, Resolution, ResolveWarning, ResolverConfig,
    STATE_PAGE_CITY_COUNT,
};
pub use route::{resolve_page, PageRoute, ResolvedPage};
pub use slug::{
    catch_all_segment, city_page_path, normalize_slug, state_page_path, to_display_name,
    validate_slug, CityView,
};
pub use states::{State, StateRegistry};
