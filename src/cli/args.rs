//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Default config file name, searched upward from the working directory.
pub const DEFAULT_CONFIG: &str = "routemap.toml";

/// Expand router path templates into a sitemap.xml
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: routemap.toml)
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Expand all routes and write sitemap.xml
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },

    /// Expand all routes and print the entries as JSON
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },
}

/// Arguments shared by every command that expands routes
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Override the site hostname (`[site] url`)
    #[arg(short = 'U', long, value_hint = clap::ValueHint::Url)]
    pub url: Option<String>,

    /// Override the route source file (`[routes] source`)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub routes: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output directory (`[sitemap] output`)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Minify the sitemap
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,
}

/// List command arguments
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

impl Cli {
    /// Route-source arguments of the active command.
    pub fn source_args(&self) -> &SourceArgs {
        match &self.command {
            Commands::Build { args } => &args.source,
            Commands::List { args } => &args.source,
        }
    }
}
