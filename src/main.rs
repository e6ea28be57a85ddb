//! routemap - expand router path templates into a sitemap.xml.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use routemap::{
    cli::{self, Cli, Commands},
    config::SiteConfig,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_sitemap(&config).map(|_| ()),
        Commands::List { args } => cli::list::list_entries(&config, args.pretty),
    }
}
