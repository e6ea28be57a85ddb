//! Path template analysis.
//!
//! A path template is a router path such as `/pizza/:id/:test`. Segments are
//! separated by `/`; a segment starting with [`PARAM_MARKER`] is a parameter
//! whose name is the rest of the segment.
//!
//! ```text
//! /pizza/:id/:test
//!  ─────  ─── ─────
//!  literal │   └─ parameter `test`
//!          └───── parameter `id`
//! ```

use std::fmt;
use std::sync::Arc;

/// Character that opens a parameter segment.
pub const PARAM_MARKER: char = ':';

/// Path segment separator.
pub const SEGMENT_SEPARATOR: char = '/';

/// Router path template, immutable once read from a route source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathTemplate(Arc<str>);

impl PathTemplate {
    pub fn new(template: impl AsRef<str>) -> Self {
        Self(Arc::from(template.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parameter names in left-to-right order, marker stripped.
    pub fn params(&self) -> Vec<&str> {
        analyze(&self.0)
    }

    /// Whether the template has no parameter segments.
    pub fn is_literal(&self) -> bool {
        self.0.split(SEGMENT_SEPARATOR).all(|s| param_name(s).is_none())
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PathTemplate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PathTemplate {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract parameter names from a template, in segment order.
///
/// A bare marker segment (`/:/`) has no name and is treated as a literal.
///
/// # Examples
/// ```
/// use routemap::template::analyze;
/// assert_eq!(analyze("/help/:id/:test"), vec!["id", "test"]);
/// assert_eq!(analyze("/test/:cook/test"), vec!["cook"]);
/// assert!(analyze("/about").is_empty());
/// ```
pub fn analyze(template: &str) -> Vec<&str> {
    template
        .split(SEGMENT_SEPARATOR)
        .filter_map(param_name)
        .collect()
}

/// Name of a parameter segment, or `None` for literal segments.
#[inline]
fn param_name(segment: &str) -> Option<&str> {
    segment
        .strip_prefix(PARAM_MARKER)
        .filter(|name| !name.is_empty())
}

/// Rebuild `template` with each bound parameter segment replaced by its value.
///
/// Segments are matched against the template only, in a single pass, so an
/// inserted value is never read back as a parameter. Position does not matter,
/// and unbound or literal segments (including `:idx` when only `id` is bound)
/// are copied verbatim.
pub fn fill(template: &str, bindings: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    for (i, segment) in template.split(SEGMENT_SEPARATOR).enumerate() {
        if i > 0 {
            out.push(SEGMENT_SEPARATOR);
        }
        let value = param_name(segment)
            .and_then(|name| bindings.iter().find(|(bound, _)| *bound == name))
            .map(|(_, value)| *value);
        out.push_str(value.unwrap_or(segment));
    }
    out
}
