use anyhow::{Context, Result};
use city_catalog::{
    city_page_path, generate_all_params, resolve_page, state_page_path, to_display_name, CityFeed,
    CityLimit, CityResolver, CityView, GenerationConfig, PageCounts, PageRoute, ResolverConfig,
    ResolvedPage, StateOrder, StateRegistry, LINK_LIST_LEN, STATE_PAGE_CITY_COUNT,
};
use colored::Colorize;
use serde::Serialize;

use crate::config::Config;

/// Registry and resolver built once per invocation.
pub struct Catalog {
    pub registry: StateRegistry,
    pub resolver: CityResolver,
    pub global_cap: Option<usize>,
}

impl Catalog {
    pub fn load(config: &Config) -> Result<Self> {
        let registry = match &config.states_file {
            Some(path) => StateRegistry::from_path(path)
                .with_context(|| format!("Failed to load state registry from {}", path.display()))?,
            None => StateRegistry::builtin(),
        };
        tracing::info!(states = registry.len(), "State registry loaded");

        let feed = load_feed(config);

        let mut resolver_config = ResolverConfig::default();
        if let Some(seed) = config.seed {
            resolver_config = resolver_config.with_seed(seed);
        }

        Ok(Self {
            registry,
            resolver: CityResolver::new(feed, resolver_config),
            global_cap: config.global_cap,
        })
    }

    fn generation_config(&self) -> GenerationConfig {
        let config = GenerationConfig::default();
        match self.global_cap {
            Some(cap) => config.with_global_cap(cap),
            None => config,
        }
    }
}

/// A missing or unreadable feed degrades to synthetic lists.
fn load_feed(config: &Config) -> CityFeed {
    let Some(path) = &config.city_feed else {
        tracing::info!("No city feed configured, using synthetic city lists");
        return CityFeed::empty();
    };

    match CityFeed::from_path(path) {
        Ok(feed) => {
            tracing::info!(path = %path.display(), states = feed.state_count(), "City feed loaded");
            feed
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "City feed unavailable, using synthetic city lists");
            CityFeed::empty()
        }
    }
}

fn output<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn cmd_states(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        let states: Vec<_> = catalog.registry.iter().collect();
        return output(&states);
    }

    for state in catalog.registry.iter() {
        println!("{}  {:<22} {}", state.abbreviation.bold(), state.name, state.slug.dimmed());
    }
    Ok(())
}

/// Accepts a slug or a postal abbreviation (`TX`).
pub fn cmd_cities(catalog: &Catalog, state: &str, limit: CityLimit, json: bool) -> Result<()> {
    let state = catalog
        .registry
        .by_abbreviation(state)
        .map(|s| s.slug.as_str())
        .unwrap_or(state);
    let resolution = catalog.resolver.resolve(state, limit);
    if json {
        return output(&resolution);
    }

    println!(
        "{} {} ({:?}, {} cities)",
        "Cities for".bright_cyan(),
        state.bold(),
        resolution.origin,
        resolution.len()
    );
    for warning in &resolution.warnings {
        println!("  {} {}", "warning:".yellow(), warning);
    }
    for city in &resolution.cities {
        let name = to_display_name(city).unwrap_or_else(|_| city.clone());
        println!("  {:<28} {}", name, city_page_path(state, city).dimmed());
    }
    Ok(())
}

pub struct ParamsArgs {
    pub catch_all: bool,
    pub major_cap: usize,
    pub regular_cap: usize,
    pub majors_first: bool,
}

pub fn cmd_params(catalog: &Catalog, args: ParamsArgs) -> Result<()> {
    let mut config = catalog
        .generation_config()
        .with_major_state_cap(CityLimit::AtMost(args.major_cap))
        .with_regular_state_cap(CityLimit::AtMost(args.regular_cap));
    if args.majors_first {
        config = config.with_order(StateOrder::MajorsFirst);
    }

    let report = generate_all_params(&catalog.registry, &catalog.resolver, &config);

    if args.catch_all {
        output(&report.catch_all_params())
    } else {
        output(&report.params)
    }
}

#[derive(Serialize)]
struct CountResponse {
    planned: Option<PageCounts>,
    actual: PageCounts,
    skipped_states: usize,
    truncated: bool,
}

pub fn cmd_count(catalog: &Catalog, json: bool) -> Result<()> {
    let config = catalog.generation_config();
    let report = generate_all_params(&catalog.registry, &catalog.resolver, &config);
    let response = CountResponse {
        planned: PageCounts::planned(&catalog.registry, &config),
        actual: PageCounts::from_report(&report, &catalog.registry),
        skipped_states: report.skipped.len(),
        truncated: report.truncated,
    };

    if json {
        return output(&response);
    }

    let actual = response.actual;
    println!("{}", "Page count".bright_cyan().bold());
    println!("  City pages:  {}", actual.city_pages);
    println!("  State pages: {}", actual.state_pages);
    println!("  Main pages:  {}", actual.main_pages);
    println!("  {} {}", "Total:".bold(), actual.total);
    if let Some(planned) = response.planned {
        if planned.total != actual.total {
            println!("  {} planned {}", "note:".yellow(), planned.total);
        }
    }
    if response.skipped_states > 0 {
        println!("  {} {} states skipped", "warning:".yellow(), response.skipped_states);
    }
    Ok(())
}

#[derive(Serialize)]
struct RouteResponse<'a> {
    state: &'a str,
    state_name: &'a str,
    abbreviation: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    city_name: Option<String>,
    canonical_path: String,
    /// State page listing.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    listed_cities: Vec<CityView>,
    /// City page link lists.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    related_cities: Vec<CityView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    top_cities: Vec<CityView>,
}

fn route_response<'a>(catalog: &Catalog, page: &'a ResolvedPage<'a>) -> RouteResponse<'a> {
    let mut response = RouteResponse {
        state: &page.state.slug,
        state_name: &page.state.name,
        abbreviation: &page.state.abbreviation,
        city: page.city.as_ref().map(|c| c.slug.clone()),
        city_name: page.city.as_ref().map(|c| c.name.clone()),
        canonical_path: state_page_path(&page.state.slug),
        listed_cities: Vec::new(),
        related_cities: Vec::new(),
        top_cities: Vec::new(),
    };

    match &page.city {
        Some(city) => {
            let report = generate_all_params(&catalog.registry, &catalog.resolver, &catalog.generation_config());
            response.canonical_path = city.path.clone();
            response.related_cities = report.related_cities(&page.state.slug, &city.slug, LINK_LIST_LEN);
            response.top_cities = report.top_cities(&page.state.slug, LINK_LIST_LEN);
        }
        None => {
            response.listed_cities = catalog
                .resolver
                .state_page_cities(&page.state.slug, STATE_PAGE_CITY_COUNT);
        }
    }
    response
}

pub fn cmd_route(catalog: &Catalog, path: &str, json: bool) -> Result<()> {
    let route = PageRoute::parse(path).with_context(|| format!("No page for {}", path))?;
    let page = resolve_page(&catalog.registry, &route).with_context(|| format!("No page for {}", path))?;
    let response = route_response(catalog, &page);

    if json {
        return output(&response);
    }

    match &response.city_name {
        Some(city_name) => println!(
            "{} {}, {}",
            "Dumpster Rental".bold(),
            city_name,
            response.abbreviation
        ),
        None => println!("{} {}", "Dumpster Rental".bold(), response.state_name),
    }
    println!("  {}", response.canonical_path.dimmed());
    for city in &response.listed_cities {
        println!("    {:<28} {}", city.name, city.path.dimmed());
    }
    for (heading, cities) in [("Other cities", &response.related_cities), ("Top cities", &response.top_cities)] {
        if cities.is_empty() {
            continue;
        }
        println!("  {}", heading.bright_cyan());
        for city in cities {
            println!("    {:<28} {}", city.name, city.path.dimmed());
        }
    }
    Ok(())
}
