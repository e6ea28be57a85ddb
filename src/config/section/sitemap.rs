//! `[sitemap]` section configuration.
//!
//! ```toml
//! [sitemap]
//! output = "public"              # directory receiving sitemap.xml
//! minify = false                 # single-line output instead of pretty-printed
//! default_priority = 0           # used when an option has no priority
//! default_changefreq = "never"   # used when an option has no changefreq
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::generator::EntryDefaults;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `changefreq` vocabulary of the sitemap protocol.
pub const CHANGEFREQ_VALUES: &[&str] = &[
    "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Output directory for sitemap.xml.
    pub output: PathBuf,

    /// Collapse the document onto one line.
    pub minify: bool,

    /// Priority for entries whose option sets none.
    pub default_priority: f64,

    /// Change frequency for entries whose option sets none.
    pub default_changefreq: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        let defaults = EntryDefaults::default();
        Self {
            output: "public".into(),
            minify: false,
            default_priority: defaults.priority,
            default_changefreq: defaults.changefreq,
        }
    }
}

impl SitemapConfig {
    pub const DEFAULT_PRIORITY: FieldPath = FieldPath::new("sitemap.default_priority");
    pub const DEFAULT_CHANGEFREQ: FieldPath = FieldPath::new("sitemap.default_changefreq");

    pub fn entry_defaults(&self) -> EntryDefaults {
        EntryDefaults {
            priority: self.default_priority,
            changefreq: self.default_changefreq.clone(),
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.default_priority.is_finite() {
            diag.error(Self::DEFAULT_PRIORITY, "priority must be a finite number");
        }

        if self.default_changefreq.trim().is_empty() {
            diag.error_with_hint(
                Self::DEFAULT_CHANGEFREQ,
                "change frequency must not be empty",
                format!("one of: {}", CHANGEFREQ_VALUES.join(", ")),
            );
        } else if !is_known_changefreq(&self.default_changefreq) {
            diag.warn(
                Self::DEFAULT_CHANGEFREQ,
                format!("`{}` is not a sitemap change frequency", self.default_changefreq),
            );
        }
    }
}

/// Whether `value` belongs to the sitemap protocol vocabulary.
pub(super) fn is_known_changefreq(value: &str) -> bool {
    CHANGEFREQ_VALUES.contains(&value)
}
