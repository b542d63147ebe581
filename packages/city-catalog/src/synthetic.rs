//! Static tables behind the synthetic fallback list.

/// Generic place-name fragments shared by every state.
pub const GENERIC_PLACE_NAMES: &[&str] = &[
    // Metro areas
    "capital-city", "downtown", "metro-area", "city-center",
    // Directions
    "north-side", "south-side", "east-side", "west-side",
    "northeast", "southeast", "northwest", "southwest",
    // Common town names
    "springfield", "franklin", "clinton", "georgetown", "madison",
    "washington", "jefferson", "lincoln", "jackson", "monroe",
    "adams", "hamilton", "harrison", "cleveland", "wilson",
    "roosevelt", "kennedy", "johnson", "davis", "miller",
    "brown", "jones", "smith", "williams", "taylor",
    // Geography
    "riverside", "lakeside", "hillside", "valley", "heights",
    "park", "gardens", "grove", "hills", "creek",
    "river-crossing", "lake-view", "mountain-view", "forest",
    "meadows", "springs", "falls", "bridge", "crossing",
    // Descriptors
    "central", "suburban", "industrial", "commercial", "residential",
    "historic", "old-town", "new-town", "midtown", "uptown",
    // Endings
    "town", "ville", "burg", "field", "wood", "dale", "ridge",
    "port", "mount", "glen", "brook", "ford", "ton", "ham",
];

/// Last resort when a state has neither a feed entry nor synthetic names.
pub const PLACEHOLDER_CITIES: &[&str] = &[
    "capital-city",
    "major-city",
    "downtown",
    "northside",
    "southside",
    "eastside",
    "westside",
    "suburbs",
    "metro-area",
    "industrial-district",
];

/// Cities pulled to the front of an authoritative list.
pub const PRIORITY_CITIES: &[&str] = &[
    "new-york", "los-angeles", "chicago", "houston", "phoenix",
    "philadelphia", "san-antonio", "san-diego", "dallas", "austin",
    "jacksonville", "san-jose", "fort-worth", "columbus", "charlotte",
    "indianapolis", "san-francisco", "seattle", "denver", "washington",
    "nashville", "oklahoma-city", "el-paso", "boston", "portland",
    "las-vegas", "detroit", "memphis", "louisville", "baltimore",
    "milwaukee", "albuquerque", "tucson", "fresno", "sacramento",
    "kansas-city", "atlanta", "miami", "tampa", "orlando",
    "minneapolis", "new-orleans", "cleveland", "pittsburgh", "st-louis",
];

const TEXAS: &[&str] = &[
    "houston", "dallas", "austin", "san-antonio", "fort-worth",
    "el-paso", "arlington", "corpus-christi", "plano", "lubbock",
    "laredo", "irving", "garland", "frisco", "mckinney", "amarillo",
    "grand-prairie", "brownsville", "pasadena", "mesquite",
    "killeen", "carrollton", "midland", "denton", "abilene",
    "beaumont", "round-rock", "odessa", "waco", "richardson",
    "tyler", "college-station", "pearland", "league-city",
];

const CALIFORNIA: &[&str] = &[
    "los-angeles", "san-diego", "san-jose", "san-francisco", "fresno",
    "sacramento", "long-beach", "oakland", "bakersfield", "anaheim",
    "santa-ana", "riverside", "stockton", "irvine", "chula-vista",
    "fremont", "san-bernardino", "modesto", "fontana", "oxnard",
    "moreno-valley", "huntington-beach", "glendale", "santa-clarita",
    "garden-grove", "oceanside", "rancho-cucamonga", "santa-rosa",
    "ontario", "lancaster", "elk-grove", "corona", "palmdale",
    "salinas", "pomona", "hayward", "escondido", "torrance",
];

const FLORIDA: &[&str] = &[
    "jacksonville", "miami", "tampa", "orlando", "st-petersburg",
    "hialeah", "tallahassee", "fort-lauderdale", "port-st-lucie",
    "cape-coral", "pembroke-pines", "hollywood", "miramar",
    "gainesville", "coral-springs", "clearwater", "miami-gardens",
    "brandon", "west-palm-beach", "lakeland", "pompano-beach",
    "davie", "miami-beach", "sunrise", "plantation", "boca-raton",
    "deltona", "palm-bay", "largo", "melbourne", "boynton-beach",
    "fort-myers", "kissimmee", "homestead", "deerfield-beach",
];

const NEW_YORK: &[&str] = &[
    "new-york", "buffalo", "rochester", "yonkers", "syracuse",
    "albany", "new-rochelle", "mount-vernon", "schenectady",
    "utica", "white-plains", "troy", "niagara-falls", "binghamton",
    "freeport", "valley-stream", "long-beach", "rome", "watertown",
    "ithaca", "middletown", "spring-valley", "kiryas-joel",
    "newburgh", "poughkeepsie", "jamestown", "elmira", "saratoga-springs",
];

const ILLINOIS: &[&str] = &[
    "chicago", "aurora", "joliet", "naperville", "rockford",
    "springfield", "elgin", "peoria", "champaign", "waukegan",
    "cicero", "bloomington", "arlington-heights", "evanston", "schaumburg",
    "bolingbrook", "palatine", "skokie", "des-plaines", "orland-park",
    "tinley-park", "oak-lawn", "berwyn", "mount-prospect", "normal",
    "wheaton", "hoffman-estates", "oak-park", "downers-grove", "elmhurst",
];

const PENNSYLVANIA: &[&str] = &[
    "philadelphia", "pittsburgh", "allentown", "reading", "erie",
    "scranton", "bethlehem", "lancaster", "harrisburg", "altoona",
    "york", "state-college", "wilkes-barre", "chester", "norristown",
    "bethel-park", "williamsport", "monroeville", "plum", "easton",
    "lebanon", "hazleton", "new-castle", "johnstown", "mckeesport",
    "hermitage", "greensburg", "pottsville", "sharon", "butler",
];

/// Curated "known major cities" for a state, most populous first.
pub fn curated_majors(state_slug: &str) -> Option<&'static [&'static str]> {
    match state_slug {
        "texas" => Some(TEXAS),
        "california" => Some(CALIFORNIA),
        "florida" => Some(FLORIDA),
        "new-york" => Some(NEW_YORK),
        "illinois" => Some(ILLINOIS),
        "pennsylvania" => Some(PENNSYLVANIA),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slug::validate_slug;
    use std::collections::HashSet;

    fn assert_valid_unique(name: &str, table: &[&str]) {
        let mut seen = HashSet::new();
        for slug in table {
            assert!(validate_slug(slug).is_ok(), "{}: bad slug {}", name, slug);
            assert!(seen.insert(*slug), "{}: duplicate {}", name, slug);
        }
    }

    #[test]
    fn test_tables_hold_valid_unique_slugs() {
        assert_valid_unique("generic", GENERIC_PLACE_NAMES);
        assert_valid_unique("placeholder", PLACEHOLDER_CITIES);
        assert_valid_unique("priority", PRIORITY_CITIES);
        for state in ["texas", "california", "florida", "new-york", "illinois", "pennsylvania"] {
            assert_valid_unique(state, curated_majors(state).unwrap());
        }
    }

    #[test]
    fn test_curated_majors_lookup() {
        assert_eq!(curated_majors("texas").unwrap()[0], "houston");
        assert!(curated_majors("vermont").is_none());
    }
}
