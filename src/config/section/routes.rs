//! `[routes]` section configuration.
//!
//! ```toml
//! [routes]
//! source = "routes.xml"               # route tree (.xml) or list (any other extension)
//! paths = ["/hello", "/pizza/:id"]    # inline templates, appended after `source`
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::source::{SourceError, load_routes};
use crate::template::PathTemplate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Route source file (relative to the config file).
    pub source: Option<PathBuf>,

    /// Inline path templates.
    pub paths: Vec<String>,
}

impl RoutesConfig {
    pub const SOURCE: FieldPath = FieldPath::new("routes.source");

    /// Templates from `source` followed by the inline `paths`.
    pub fn collect(&self) -> Result<Vec<PathTemplate>, SourceError> {
        let mut templates = match &self.source {
            Some(path) => load_routes(path)?,
            None => Vec::new(),
        };
        templates.extend(self.paths.iter().map(PathTemplate::new));
        Ok(templates)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(source) = &self.source
            && !source.is_file()
        {
            diag.error_with_hint(
                Self::SOURCE,
                format!("route source `{}` does not exist", source.display()),
                "paths are relative to the config file",
            );
        }
    }
}
