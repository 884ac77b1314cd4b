//! Folio - typed portfolio content with a static-site build descriptor.

mod check;
mod cli;
mod config;
mod content;
mod export;
mod logger;
mod theme;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Check => check::run(),
        Commands::Export { clean } => export::run(config, *clean),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error: the defaults reproduce the
/// site's full descriptor.
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(std::path::Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
