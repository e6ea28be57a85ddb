//! Sitemap generation.
//!
//! - **Expand**: path templates + options -> ordered [`SitemapEntry`] list
//! - **Sitemap**: entry list -> `sitemap.xml` document, and writing it to disk
//!
//! Both stages are pure functions over in-memory data; only
//! [`write_sitemap`] touches the filesystem.

pub mod expand;
pub mod sitemap;

pub use expand::{
    EntryDefaults, Expander, GenerateError, expand_paths, generate_sitemap, generate_sitemap_with,
};
pub use sitemap::{
    SITEMAP_FILE, SITEMAP_NS, SitemapDocument, SitemapEntry, serialize, write_sitemap,
};

use std::borrow::Cow;

/// Minify XML content if enabled.
pub fn minify_xml(content: &str, enabled: bool) -> Cow<'_, str> {
    if enabled {
        let minified = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified)
    } else {
        Cow::Borrowed(content)
    }
}
