//! Slug validation, display names and canonical page paths.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Prefix of every city page segment: `/texas/dumpster-rental-houston/`.
pub const CITY_SEGMENT_PREFIX: &str = "dumpster-rental-";

/// Check that `slug` is lowercase kebab-case (`new-york`, `route-66`).
pub fn validate_slug(slug: &str) -> Result<()> {
    let reason = if slug.is_empty() {
        Some("empty")
    } else if slug.starts_with('-') || slug.ends_with('-') {
        Some("leading or trailing hyphen")
    } else if slug.contains("--") {
        Some("empty segment")
    } else if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        Some("must be lowercase ascii letters, digits and hyphens")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CatalogError::InvalidSlug {
            input: slug.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Coerce loosely formatted input (`" San Antonio "`, `fort_worth`) into a slug.
///
/// Returns `None` when nothing usable remains, or when the input holds a
/// non-ASCII letter or digit (`Cañon City`), since dropping it would yield a
/// different city's slug.
pub fn normalize_slug(input: &str) -> Option<String> {
    let mut out = String::with_capacity(input.len());
    for c in input.trim().chars() {
        if c.is_alphanumeric() && !c.is_ascii() {
            return None;
        }
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if (c == '-' || c == '_' || c.is_whitespace()) && !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }

    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

/// Title-case each hyphen segment: `san-antonio` -> `San Antonio`.
pub fn to_display_name(slug: &str) -> Result<String> {
    validate_slug(slug)?;

    let name = slug
        .split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    Ok(name)
}

pub fn city_page_path(state_slug: &str, city_slug: &str) -> String {
    format!("/{}/{}{}/", state_slug, CITY_SEGMENT_PREFIX, city_slug)
}

pub fn state_page_path(state_slug: &str) -> String {
    format!("/{}/", state_slug)
}

/// First segment of the catch-all route form.
pub fn catch_all_segment(city_slug: &str) -> String {
    format!("{}{}", CITY_SEGMENT_PREFIX, city_slug)
}

/// Display data for one city page, derived on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityView {
    pub slug: String,
    pub name: String,
    pub state_slug: String,
    pub path: String,
}

impl CityView {
    pub fn new(state_slug: &str, city_slug: &str) -> Result<Self> {
        validate_slug(state_slug)?;
        let name = to_display_name(city_slug)?;

        Ok(Self {
            slug: city_slug.to_string(),
            name,
            state_slug: state_slug.to_string(),
            path: city_page_path(state_slug, city_slug),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_title_cases_segments() {
        assert_eq!(to_display_name("san-antonio").unwrap(), "San Antonio");
        assert_eq!(to_display_name("houston").unwrap(), "Houston");
        assert_eq!(to_display_name("st-petersburg").unwrap(), "St Petersburg");
    }

    #[test]
    fn test_display_name_keeps_digits() {
        assert_eq!(to_display_name("route-66").unwrap(), "Route 66");
    }

    #[test]
    fn test_display_name_rejects_mixed_case() {
        let err = to_display_name("San-Antonio").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSlug { .. }));
    }

    #[test]
    fn test_display_name_rejects_empty() {
        assert!(to_display_name("").is_err());
        assert!(to_display_name("-").is_err());
        assert!(to_display_name("a--b").is_err());
    }

    #[test]
    fn test_city_page_path_is_stable() {
        let first = city_page_path("texas", "houston");
        let second = city_page_path("texas", "houston");
        assert_eq!(first, "/texas/dumpster-rental-houston/");
        assert_eq!(first, second);
    }

    #[test]
    fn test_state_page_path() {
        assert_eq!(state_page_path("new-york"), "/new-york/");
    }

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug(" San Antonio "), Some("san-antonio".to_string()));
        assert_eq!(normalize_slug("fort_worth"), Some("fort-worth".to_string()));
        assert_eq!(normalize_slug("st. petersburg"), Some("st-petersburg".to_string()));
        assert_eq!(normalize_slug("--abc--"), Some("abc".to_string()));
        assert_eq!(normalize_slug("   "), None);
        assert_eq!(normalize_slug("!!!"), None);
    }

    #[test]
    fn test_normalize_slug_rejects_non_ascii_letters() {
        assert_eq!(normalize_slug("Cañon City"), None);
        assert_eq!(normalize_slug("San José"), None);
        assert_eq!(normalize_slug("Canon City"), Some("canon-city".to_string()));
        // Non-ASCII punctuation is a separator, not a letter.
        assert_eq!(normalize_slug("Coeur d’Alene"), Some("coeur-dalene".to_string()));
    }

    #[test]
    fn test_normalized_slug_is_valid() {
        for input in ["New  York", "a - b", "x_y_z", "O'Fallon"] {
            let slug = normalize_slug(input).unwrap();
            assert!(validate_slug(&slug).is_ok(), "{} -> {}", input, slug);
        }
    }

    #[test]
    fn test_city_view() {
        let view = CityView::new("texas", "fort-worth").unwrap();
        assert_eq!(view.name, "Fort Worth");
        assert_eq!(view.path, "/texas/dumpster-rental-fort-worth/");
        assert_eq!(view.state_slug, "texas");
    }
}
