//! Sitemap serialization and persistence.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.org/hello</loc>
//!     <priority>0</priority>
//!     <changefreq>never</changefreq>
//!   </url>
//! </urlset>
//! ```
//!
//! An empty entry list renders the root as a self-closing element. The output
//! never ends with a newline and carries no timestamps, so identical input
//! always yields identical bytes.

use crate::log;
use anyhow::{Context, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// File name written by [`write_sitemap`].
pub const SITEMAP_FILE: &str = "sitemap.xml";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub priority: f64,
    pub changefreq: String,
}

/// Ordered entries for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SitemapDocument {
    entries: Vec<SitemapEntry>,
}

impl SitemapDocument {
    pub fn new(entries: Vec<SitemapEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a pretty-printed sitemap document.
    pub fn to_xml(&self) -> String {
        serialize(&self.entries)
    }
}

/// Render entries as a sitemap document with two-space indentation.
pub fn serialize(entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(128 + entries.len() * 128);

    xml.push_str(XML_DECL);
    xml.push_str("\n<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);

    if entries.is_empty() {
        xml.push_str("\"/>");
        return xml;
    }
    xml.push_str("\">");

    for entry in entries {
        xml.push_str("\n  <url>\n    <loc>");
        xml.push_str(&escape_xml(&entry.loc));
        xml.push_str("</loc>\n    <priority>");
        xml.push_str(&format_priority(entry.priority));
        xml.push_str("</priority>\n    <changefreq>");
        xml.push_str(&escape_xml(&entry.changefreq));
        xml.push_str("</changefreq>\n  </url>");
    }

    xml.push_str("\n</urlset>");
    xml
}

/// Shortest decimal form of a priority: `0`, `1`, `0.5`, `660`.
fn format_priority(priority: f64) -> String {
    // `-0` would otherwise print with its sign
    if priority == 0.0 {
        return "0".to_owned();
    }
    priority.to_string()
}

/// Write `content` to `<dir>/sitemap.xml`, creating `dir` if needed.
///
/// Returns the path of the written file.
pub fn write_sitemap(content: &str, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(SITEMAP_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

    log!("sitemap"; "{}", path.display());
    Ok(path)
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(loc: &str) -> SitemapEntry {
        SitemapEntry {
            loc: loc.to_string(),
            priority: 0.0,
            changefreq: "never".to_string(),
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(
            serialize(&[]),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\"/>"
        );
    }

    #[test]
    fn test_serialize_single() {
        assert_eq!(
            serialize(&[entry("https://example.org/hello")]),
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n  <url>\n    <loc>https://example.org/hello</loc>\n    <priority>0</priority>\n    <changefreq>never</changefreq>\n  </url>\n</urlset>"
        );
    }

    #[test]
    fn test_serialize_multiple_in_order() {
        let xml = serialize(&[
            entry("https://example.org/hello"),
            entry("https://example.org/test"),
            entry("https://example.org/heythere"),
        ]);

        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n  <url>\n    <loc>https://example.org/hello</loc>\n    <priority>0</priority>\n    <changefreq>never</changefreq>\n  </url>\n  <url>\n    <loc>https://example.org/test</loc>\n    <priority>0</priority>\n    <changefreq>never</changefreq>\n  </url>\n  <url>\n    <loc>https://example.org/heythere</loc>\n    <priority>0</priority>\n    <changefreq>never</changefreq>\n  </url>\n</urlset>"
        );
    }

    #[test]
    fn test_serialize_child_order() {
        let xml = serialize(&[entry("https://example.org/")]);
        let loc = xml.find("<loc>").unwrap();
        let priority = xml.find("<priority>").unwrap();
        let changefreq = xml.find("<changefreq>").unwrap();
        assert!(loc < priority && priority < changefreq);
    }

    #[test]
    fn test_serialize_escapes_special_chars() {
        let mut e = entry("https://example.org/search?q=a&b=c");
        e.changefreq = "<weekly>".to_string();
        let xml = serialize(&[e]);

        assert!(xml.contains("<loc>https://example.org/search?q=a&amp;b=c</loc>"));
        assert!(xml.contains("<changefreq>&lt;weekly&gt;</changefreq>"));
    }

    #[test]
    fn test_serialize_is_stable() {
        let entries = vec![entry("https://example.org/a"), entry("https://example.org/b")];
        assert_eq!(serialize(&entries), serialize(&entries));
    }

    #[test]
    fn test_format_priority() {
        assert_eq!(format_priority(0.0), "0");
        assert_eq!(format_priority(-0.0), "0");
        assert_eq!(format_priority(1.0), "1");
        assert_eq!(format_priority(0.5), "0.5");
        assert_eq!(format_priority(660.0), "660");
    }

    #[test]
    fn test_document_to_xml() {
        let doc = SitemapDocument::new(vec![entry("https://example.org/x")]);
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.to_xml(), serialize(doc.entries()));
        assert!(SitemapDocument::default().is_empty());
    }

    #[test]
    fn test_write_sitemap_creates_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("public");

        let path = write_sitemap("<urlset/>", &dir).unwrap();

        assert_eq!(path, dir.join(SITEMAP_FILE));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<urlset/>");
    }

    #[test]
    fn test_write_sitemap_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        write_sitemap("old", tmp.path()).unwrap();
        let path = write_sitemap("new", tmp.path()).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn test_write_sitemap_reports_path_on_failure() {
        let tmp = tempfile::tempdir().unwrap();
        // A regular file where the output directory should be
        let blocker = tmp.path().join("public");
        fs::write(&blocker, "").unwrap();

        let err = write_sitemap("x", &blocker.join("sub")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to create output directory"));
    }
}
