//! `routemap build`: expand routes and write sitemap.xml.

use super::common::generate;
use crate::{
    config::SiteConfig,
    generator::{minify_xml, write_sitemap},
    log,
    utils::plural_count,
};
use anyhow::Result;
use std::path::PathBuf;

/// Generate and persist the sitemap. Returns the written file path.
pub fn build_sitemap(config: &SiteConfig) -> Result<PathBuf> {
    let (templates, document) = generate(config)?;

    let xml = document.to_xml();
    let xml = minify_xml(&xml, config.sitemap.minify);
    let path = write_sitemap(&xml, &config.sitemap.output)?;

    log!(
        "build";
        "{} from {}",
        plural_count(document.len(), "url"),
        plural_count(templates.len(), "route")
    );
    Ok(path)
}
