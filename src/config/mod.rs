//! Configuration management for `routemap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── options    # [options."<template>"] validation
//! │   ├── routes     # [routes]
//! │   ├── site       # [site]
//! │   └── sitemap    # [sitemap]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | `[site]`     | Hostname                                         |
//! | `[routes]`   | Route source file and inline templates           |
//! | `[sitemap]`  | Output directory, minify, entry defaults         |
//! | `[options]`  | Per-template ignore/priority/changefreq/slugs    |
//!
//! The file is optional; without one every value comes from the defaults and
//! the command line.

pub mod section;
pub mod types;
mod util;

pub use section::{CHANGEFREQ_VALUES, RoutesConfig, SiteInfoConfig, SitemapConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file_from;

use crate::{
    cli::{Cli, Commands, DEFAULT_CONFIG, SourceArgs},
    debug, log,
    options::PathOptions,
    utils::url::trim_hostname,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::resolve_config_path;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing routemap.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths are resolved against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site hostname
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Route sources
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Output and entry defaults
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// Per-template overrides
    #[serde(default)]
    pub options: PathOptions,
}

impl SiteConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's directory, or cwd when no file exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        crate::logger::set_verbose(cli.source_args().verbose);
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file_from(&cwd, &cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None if cli.config != Path::new(DEFAULT_CONFIG) => {
                bail!(ConfigError::Validation(format!(
                    "config file `{}` not found",
                    cli.config.display()
                )));
            }
            None => {
                debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG);
                Self {
                    root: cwd.clone(),
                    ..Self::default()
                }
            }
        };

        config.apply_command_options(cli, &cwd);
        config.finalize();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Hostname prefixed to every location.
    pub fn hostname(&self) -> &str {
        self.site.hostname()
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    ///
    /// Paths given on the command line are relative to `cwd`, not the root.
    fn apply_command_options(&mut self, cli: &Cli, cwd: &Path) {
        self.apply_source_args(cli.source_args(), cwd);

        match &cli.command {
            Commands::Build { args } => {
                if let Some(output) = &args.output {
                    self.sitemap.output = cwd.join(output);
                }
                Self::update_option(&mut self.sitemap.minify, args.minify.as_ref());
            }
            // List command only reads
            Commands::List { .. } => {}
        }
    }

    fn apply_source_args(&mut self, args: &SourceArgs, cwd: &Path) {
        if let Some(url) = &args.url {
            self.site.url = Some(url.clone());
        }
        if let Some(routes) = &args.routes {
            self.routes.source = Some(cwd.join(routes));
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // normalization
    // ========================================================================

    /// Normalize hostname and resolve paths against the root.
    fn finalize(&mut self) {
        self.site.url = self
            .site
            .url
            .as_deref()
            .map(trim_hostname)
            .filter(|url| !url.is_empty())
            .map(str::to_owned);

        self.sitemap.output = resolve_config_path(&self.sitemap.output, &self.root);
        if let Some(source) = self.routes.source.take() {
            self.routes.source = Some(resolve_config_path(&source, &self.root));
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once. Warnings are
    /// printed and never fail the load.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every section check without printing.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.routes.validate(&mut diag);
        self.sitemap.validate(&mut diag);
        section::validate_options(&self.options, &mut diag);
        diag
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    const FULL: &str = r#"
[site]
url = "https://example.org/"

[routes]
source = "routes.xml"
paths = ["/extra"]

[sitemap]
output = "dist"
minify = true
default_priority = 1
default_changefreq = "weekly"

[options."/pizza/:id/:test"]
priority = 0.8
slugs = { id = ["a", "b"], test = ["x", "y"] }

[options."/admin"]
ignore = true
"#;

    fn write_site(toml: &str) -> (tempfile::TempDir, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let config = tmp.path().join("routemap.toml");
        fs::write(&config, toml).unwrap();
        fs::write(
            tmp.path().join("routes.xml"),
            r#"<Routes><Route path="/hello"/><Route path="/pizza/:id/:test"/></Routes>"#,
        )
        .unwrap();
        (tmp, config)
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::from_str("[site\nurl = \"x\"").is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert!(config.config_path.is_none());
        assert_eq!(config.hostname(), "");
        assert!(config.routes.source.is_none());
        assert_eq!(config.sitemap.output, PathBuf::from("public"));
        assert_eq!(config.sitemap.default_priority, 0.0);
        assert_eq!(config.sitemap.default_changefreq, "never");
        assert!(config.options.is_empty());
    }

    #[test]
    fn test_from_str_full() {
        let config = SiteConfig::from_str(FULL).unwrap();
        assert_eq!(config.site.url.as_deref(), Some("https://example.org/"));
        assert_eq!(config.routes.paths, vec!["/extra"]);
        assert!(config.sitemap.minify);
        assert_eq!(config.sitemap.default_priority, 1.0);
        assert_eq!(config.options.len(), 2);
        assert!(config.options.resolve("/admin").ignore);
        assert_eq!(
            config.options.resolve("/pizza/:id/:test").slug_values("test"),
            ["x", "y"]
        );
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nurl = \"https://example.org\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.hostname(), "https://example.org");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored(FULL).unwrap();
        assert!(ignored.is_empty(), "unexpected unknown fields: {ignored:?}");
    }

    #[test]
    fn test_load_resolves_relative_to_config() {
        let (tmp, path) = write_site(FULL);
        let cli = cli(&["routemap", "build", "-C", path.to_str().unwrap()]);

        let config = SiteConfig::load(&cli).unwrap();

        assert_eq!(config.root, tmp.path());
        assert_eq!(config.hostname(), "https://example.org");
        assert_eq!(config.sitemap.output, tmp.path().join("dist"));
        assert_eq!(config.routes.source, Some(tmp.path().join("routes.xml")));

        let routes = config.routes.collect().unwrap();
        let names: Vec<&str> = routes.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, vec!["/hello", "/pizza/:id/:test", "/extra"]);
    }

    #[test]
    fn test_load_cli_overrides() {
        let (_tmp, path) = write_site(FULL);
        let cli = cli(&[
            "routemap",
            "build",
            "-C",
            path.to_str().unwrap(),
            "--url",
            "https://other.example/",
            "--minify",
            "false",
        ]);

        let config = SiteConfig::load(&cli).unwrap();
        assert_eq!(config.hostname(), "https://other.example");
        assert!(!config.sitemap.minify);
    }

    #[test]
    fn test_load_explicit_missing_config() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.toml");
        let cli = cli(&["routemap", "list", "-C", missing.to_str().unwrap()]);

        let err = SiteConfig::load(&cli).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_reports_missing_route_source() {
        let (tmp, path) = write_site("[routes]\nsource = \"missing.xml\"\n");
        let cli = cli(&["routemap", "build", "-C", path.to_str().unwrap()]);

        let err = SiteConfig::load(&cli).unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        assert!(matches!(config_err, ConfigError::Diagnostics(d) if d.len() == 1));
        drop(tmp);
    }

    #[test]
    fn test_blank_url_becomes_none() {
        let mut config = SiteConfig::from_str("[site]\nurl = \" / \"").unwrap();
        config.finalize();
        assert!(config.site.url.is_none());
    }

    #[test]
    fn test_diagnostics_collects_all_sections() {
        let config = SiteConfig::from_str(
            r#"
[sitemap]
default_changefreq = ""

[options."/help/*"]
ignore = true

[options."/x"]
priority = nan
"#,
        )
        .unwrap();

        let diag = config.diagnostics();
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.warnings().len(), 1);
    }
}
