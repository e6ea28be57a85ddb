//! `[site]` section configuration.
//!
//! ```toml
//! [site]
//! url = "https://example.org"    # prefixed to every sitemap location
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site hostname (scheme + host, optionally a path prefix).
    pub url: Option<String>,
}

impl SiteInfoConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");

    /// Hostname as used for locations, empty when unset.
    pub fn hostname(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    /// Warn about hostnames that will not produce absolute locations.
    ///
    /// A missing hostname is not reported here; generation refuses to run
    /// without one.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = self.url.as_deref()
            && !url.is_empty()
            && !url.contains("://")
        {
            diag.warn(
                Self::URL,
                format!("`{url}` has no scheme, locations will not be absolute URLs"),
            );
        }
    }
}
