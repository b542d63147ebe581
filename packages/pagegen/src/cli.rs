use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pagegen")]
#[command(version, about = "Emit city landing page parameters for the static build")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Default, Clone)]
pub struct GlobalArgs {
    /// Scraped per-state city list (overrides PAGEGEN_CITY_FEED)
    #[arg(long, global = true)]
    pub feed: Option<PathBuf>,

    /// State registry JSON (overrides PAGEGEN_STATES_FILE)
    #[arg(long, global = true)]
    pub states: Option<PathBuf>,

    /// Seed for the synthetic city shuffle (overrides PAGEGEN_SEED)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Stop after this many city pages (overrides PAGEGEN_GLOBAL_CAP)
    #[arg(long, global = true)]
    pub global_cap: Option<usize>,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the state registry
    States,

    /// Resolve the city list for one state
    Cities {
        /// State slug or postal abbreviation
        state: String,
        #[arg(long, default_value_t = 25)]
        limit: usize,
        /// Ignore the limit
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },

    /// Generate every city page param (always JSON)
    Params {
        /// Emit `{state, slug: ["dumpster-rental-{city}"]}` for the catch-all route
        #[arg(long)]
        catch_all: bool,
        #[arg(long, default_value_t = 50)]
        major_cap: usize,
        #[arg(long, default_value_t = 25)]
        regular_cap: usize,
        /// Visit major states before the rest
        #[arg(long)]
        majors_first: bool,
    },

    /// Planned and actual page totals
    Count,

    /// Resolve a site path to its page
    Route { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params_defaults() {
        let cli = Cli::try_parse_from(["pagegen", "params"]).unwrap();
        match cli.command {
            Commands::Params {
                catch_all,
                major_cap,
                regular_cap,
                majors_first,
            } => {
                assert!(!catch_all);
                assert_eq!(major_cap, 50);
                assert_eq!(regular_cap, 25);
                assert!(!majors_first);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pagegen", "cities", "texas", "--limit", "10", "--seed", "9", "--json",
        ])
        .unwrap();
        assert_eq!(cli.global.seed, Some(9));
        assert!(cli.global.json);
        assert!(matches!(
            cli.command,
            Commands::Cities { ref state, limit: 10, all: false } if state == "texas"
        ));
    }

    #[test]
    fn test_all_conflicts_with_limit() {
        assert!(Cli::try_parse_from(["pagegen", "cities", "texas", "--all", "--limit", "3"]).is_err());
    }

    #[test]
    fn test_route_requires_path() {
        assert!(Cli::try_parse_from(["pagegen", "route"]).is_err());
    }
}
