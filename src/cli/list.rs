//! `routemap list`: print expanded entries as JSON.

use super::common::generate;
use crate::config::SiteConfig;
use anyhow::Result;
use std::io::{Write, stdout};

/// Print every sitemap entry to stdout.
pub fn list_entries(config: &SiteConfig, pretty: bool) -> Result<()> {
    let (_, document) = generate(config)?;
    let json = render(&document, pretty)?;

    let mut out = stdout().lock();
    writeln!(out, "{json}")?;
    Ok(())
}

fn render(document: &crate::generator::SitemapDocument, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}
