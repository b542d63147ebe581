use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

use crate::cli::GlobalArgs;

/// Build configuration loaded from environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub city_feed: Option<PathBuf>,
    pub states_file: Option<PathBuf>,
    pub seed: Option<u64>,
    pub global_cap: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            city_feed: non_empty("PAGEGEN_CITY_FEED").map(PathBuf::from),
            states_file: non_empty("PAGEGEN_STATES_FILE").map(PathBuf::from),
            seed: non_empty("PAGEGEN_SEED")
                .map(|v| v.trim().parse::<u64>())
                .transpose()
                .context("PAGEGEN_SEED must be a valid u64")?,
            global_cap: non_empty("PAGEGEN_GLOBAL_CAP")
                .map(|v| v.trim().parse::<usize>())
                .transpose()
                .context("PAGEGEN_GLOBAL_CAP must be a valid number")?,
        })
    }

    /// Command-line flags win over the environment.
    pub fn with_overrides(mut self, args: &GlobalArgs) -> Self {
        if let Some(feed) = &args.feed {
            self.city_feed = Some(feed.clone());
        }
        if let Some(states) = &args.states {
            self.states_file = Some(states.clone());
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if args.global_cap.is_some() {
            self.global_cap = args.global_cap;
        }
        self
    }
}
