//! Shared command plumbing.

use crate::{
    config::SiteConfig,
    debug,
    generator::{SitemapDocument, generate_sitemap_with},
    log,
    template::PathTemplate,
    utils::plural_count,
};
use anyhow::{Context, Result};

/// Collect routes and expand them under the loaded config.
pub fn generate(config: &SiteConfig) -> Result<(Vec<PathTemplate>, SitemapDocument)> {
    let templates = config
        .routes
        .collect()
        .context("Failed to read route source")?;
    debug!("routes"; "{}", plural_count(templates.len(), "template"));

    let document = generate_sitemap_with(
        config.site.hostname(),
        &templates,
        &config.options,
        &config.sitemap.entry_defaults(),
    )?;

    if document.is_empty() {
        log!("warning"; "no route produced a url, check `[options]` slugs");
    }
    Ok((templates, document))
}
