//! Property tests for city resolution and param generation.

use std::collections::HashSet;

use city_catalog::synthetic::GENERIC_PLACE_NAMES;
use city_catalog::{
    generate_all_params, to_display_name, validate_slug, CityFeed, CityLimit, CityOrigin,
    CityResolver, GenerationConfig, ResolverConfig, StateOrder, StateRegistry,
};
use proptest::prelude::*;

fn seeded_resolver(seed: u64, feed: CityFeed) -> CityResolver {
    CityResolver::new(feed, ResolverConfig::default().with_seed(seed))
}

/// Turn a display name back into slug form.
fn reslug(display: &str) -> String {
    display.to_lowercase().replace(' ', "-")
}

proptest! {
    #[test]
    fn resolve_is_bounded_unique_and_non_empty(seed in any::<u64>(), limit in 1usize..120) {
        let registry = StateRegistry::builtin();
        let resolver = seeded_resolver(seed, CityFeed::empty());

        for state in registry.iter() {
            let resolution = resolver.resolve(&state.slug, CityLimit::AtMost(limit));
            prop_assert!(resolution.len() <= limit);
            prop_assert!(!resolution.is_empty());

            let unique: HashSet<_> = resolution.cities.iter().collect();
            prop_assert_eq!(unique.len(), resolution.len());
            prop_assert!(resolution.cities.iter().all(|c| !c.trim().is_empty()));
        }
    }

    #[test]
    fn feed_resolution_is_bounded_unique_and_valid(
        seed in any::<u64>(),
        limit in 1usize..40,
        entries in proptest::collection::vec(
            proptest::collection::vec("[A-Za-z_ .-]{0,14}|houston|dallas|akron", 0..60),
            5,
        ),
    ) {
        let states = ["texas", "ohio", "vermont", "new-york", "wyoming"];
        let feed = states
            .iter()
            .zip(entries)
            .fold(CityFeed::empty(), |feed, (state, cities)| feed.with_state(*state, cities));
        let resolver = seeded_resolver(seed, feed);

        for state in states {
            let resolution = resolver.resolve(state, CityLimit::AtMost(limit));
            prop_assert!(resolution.len() <= limit);
            prop_assert!(!resolution.is_empty());

            let unique: HashSet<_> = resolution.cities.iter().collect();
            prop_assert_eq!(unique.len(), resolution.len());
            prop_assert!(resolution.cities.iter().all(|c| validate_slug(c).is_ok()));
        }
    }

    #[test]
    fn display_name_round_trips(slug in "[a-z0-9]{1,8}(-[a-z0-9]{1,8}){0,3}") {
        let display = to_display_name(&slug).unwrap();
        prop_assert_eq!(reslug(&display), slug.clone());
        prop_assert_eq!(to_display_name(&reslug(&display)).unwrap(), display.clone());

        for word in display.split(' ') {
            let first = word.chars().next().unwrap();
            prop_assert!(!first.is_ascii_lowercase());
        }
    }

    #[test]
    fn params_reference_known_states_without_duplicates(
        seed in any::<u64>(),
        major_cap in 1usize..60,
        regular_cap in 1usize..40,
        global_cap in proptest::option::of(0usize..2000),
        majors_first in any::<bool>(),
    ) {
        let registry = StateRegistry::builtin();
        let resolver = seeded_resolver(seed, CityFeed::empty());
        let mut config = GenerationConfig::default()
            .with_major_state_cap(CityLimit::AtMost(major_cap))
            .with_regular_state_cap(CityLimit::AtMost(regular_cap));
        if let Some(cap) = global_cap {
            config = config.with_global_cap(cap);
        }
        if majors_first {
            config = config.with_order(StateOrder::MajorsFirst);
        }

        let report = generate_all_params(&registry, &resolver, &config);

        if let Some(cap) = global_cap {
            prop_assert!(report.len() <= cap);
        }

        let mut seen = HashSet::new();
        for param in &report.params {
            prop_assert!(registry.contains(&param.state));
            prop_assert!(!param.city.is_empty());
            prop_assert!(seen.insert((param.state.clone(), param.city.clone())));
        }
    }

    #[test]
    fn priority_cities_move_to_front_in_order(
        before in proptest::collection::vec("[a-z]{3,6}-town", 0..5),
        after in proptest::collection::vec("[a-z]{3,6}-ville", 0..5),
    ) {
        let mut list = before.clone();
        list.push("houston".to_string());
        list.extend(after.clone());

        let feed = CityFeed::empty().with_state("texas", list.clone());
        let resolver = seeded_resolver(0, feed);
        let resolution = resolver.resolve("texas", CityLimit::Unbounded);

        let mut expected = vec!["houston".to_string()];
        let mut seen: HashSet<String> = expected.iter().cloned().collect();
        for city in before.iter().chain(after.iter()) {
            if seen.insert(city.clone()) {
                expected.push(city.clone());
            }
        }
        prop_assert_eq!(resolution.cities, expected);
    }
}

#[test]
fn test_priority_reordering_example() {
    let feed = CityFeed::empty().with_state("texas", ["abilene", "houston", "beaumont"]);
    let resolver = seeded_resolver(1, feed);
    let resolution = resolver.resolve("texas", CityLimit::Unbounded);
    assert_eq!(resolution.cities, ["houston", "abilene", "beaumont"]);
}

#[test]
fn test_unknown_state_never_empty_or_panics() {
    let resolver = CityResolver::new(CityFeed::empty(), ResolverConfig::default());
    let resolution = resolver.resolve("unknown-state-xyz", CityLimit::AtMost(5));
    assert!(resolution.len() <= 5);
    assert!(!resolution.is_empty());
}

/// Unknown states get generic names, not the placeholder list, and a fixed
/// seed pins which ones.
#[test]
fn test_unknown_state_gets_seeded_generic_names() {
    let first = seeded_resolver(2024, CityFeed::empty()).resolve("unknown-state-xyz", CityLimit::AtMost(5));
    let second = seeded_resolver(2024, CityFeed::empty()).resolve("unknown-state-xyz", CityLimit::AtMost(5));

    assert_eq!(first.origin, CityOrigin::Synthetic);
    assert_eq!(first.len(), 5);
    assert!(first.cities.iter().all(|c| GENERIC_PLACE_NAMES.contains(&c.as_str())));
    assert_eq!(first, second);
}

#[test]
fn test_unseeded_params_still_hold_invariants() {
    let registry = StateRegistry::builtin();
    let resolver = CityResolver::new(CityFeed::empty(), ResolverConfig::default());
    let report = generate_all_params(&registry, &resolver, &GenerationConfig::default());

    let unique: HashSet<_> = report.params.iter().collect();
    assert_eq!(unique.len(), report.len());
    assert!(report.params.iter().all(|p| registry.contains(&p.state)));
}
