//! Build-time page parameter CLI.
//!
//! Prints JSON on stdout for the static site build; logs go to stderr.

use anyhow::{Context, Result};
use city_catalog::CityLimit;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;

use cli::{Cli, Commands};
use commands::{Catalog, ParamsArgs};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,city_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()
        .context("Failed to load configuration")?
        .with_overrides(&cli.global);
    let catalog = Catalog::load(&config)?;
    let json = cli.global.json;

    match cli.command {
        Commands::States => commands::cmd_states(&catalog, json),
        Commands::Cities { state, limit, all } => {
            let limit = if all {
                CityLimit::Unbounded
            } else {
                CityLimit::AtMost(limit)
            };
            commands::cmd_cities(&catalog, &state, limit, json)
        }
        Commands::Params {
            catch_all,
            major_cap,
            regular_cap,
            majors_first,
        } => commands::cmd_params(
            &catalog,
            ParamsArgs {
                catch_all,
                major_cap,
                regular_cap,
                majors_first,
            },
        ),
        Commands::Count => commands::cmd_count(&catalog, json),
        Commands::Route { path } => commands::cmd_route(&catalog, &path, json),
    }
}
