//! Plain-text route lists.

use super::{RouteSource, SourceError};
use crate::template::PathTemplate;

/// One template per line. Blank lines and `#` comments are skipped.
///
/// ```text
/// # public pages
/// /hello
/// /pizza/:id/:test
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteList {
    lines: Vec<String>,
}

impl RouteList {
    pub fn new(content: &str) -> Self {
        let lines = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_owned)
            .collect();
        Self { lines }
    }
}

impl RouteSource for RouteList {
    fn templates(&self) -> Result<Vec<PathTemplate>, SourceError> {
        Ok(self.lines.iter().map(PathTemplate::new).collect())
    }
}
