//! Per-path overrides.
//!
//! Options are keyed by the exact template string. Keys that look like
//! patterns (`/help/*`) are matched literally like any other key.

use crate::template::PathTemplate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Shared all-defaults record returned on lookup misses.
static DEFAULT_OPTION: LazyLock<PathOption> = LazyLock::new(PathOption::default);

/// Overrides for one path template.
///
/// ```toml
/// [options."/pizza/:id/:test"]
/// priority = 0.8
/// changefreq = "weekly"
/// slugs = { id = ["a", "b"], test = ["x", "y"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathOption {
    /// Leave the template out of the sitemap entirely.
    pub ignore: bool,

    /// Entry priority. `None` falls back to the generator default.
    pub priority: Option<f64>,

    /// Entry change frequency. `None` falls back to the generator default.
    pub changefreq: Option<String>,

    /// Candidate values for each parameter name.
    pub slugs: FxHashMap<String, Vec<String>>,
}

impl PathOption {
    pub fn ignored() -> Self {
        Self {
            ignore: true,
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_changefreq(mut self, changefreq: impl Into<String>) -> Self {
        self.changefreq = Some(changefreq.into());
        self
    }

    pub fn with_slugs<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slugs
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Candidate values for one parameter, empty when none are configured.
    pub fn slug_values(&self, name: &str) -> &[String] {
        self.slugs.get(name).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Option records keyed by exact template string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathOptions(FxHashMap<String, PathOption>);

impl PathOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, template: impl Into<String>, option: PathOption) {
        self.0.insert(template.into(), option);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, template: impl Into<String>, option: PathOption) -> Self {
        self.insert(template, option);
        self
    }

    /// Look up the record for `template`; a miss yields all defaults.
    pub fn resolve(&self, template: &str) -> &PathOption {
        self.0.get(template).unwrap_or(&*DEFAULT_OPTION)
    }

    /// Like [`resolve`](Self::resolve), but tells a miss apart from a hit.
    pub fn get(&self, template: &PathTemplate) -> Option<&PathOption> {
        self.0.get(template.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PathOption)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, PathOption)> for PathOptions {
    fn from_iter<T: IntoIterator<Item = (String, PathOption)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PathOptions {
        PathOptions::new()
            .with("/help/*", PathOption::ignored())
            .with("/dashboard/*", PathOption::default().with_priority(1.0))
            .with(
                "/help/:id/:test",
                PathOption::default()
                    .with_priority(3.0)
                    .with_slugs("id", ["test1", "test2", "test3"])
                    .with_slugs("test", ["hello", "hi", "hey"]),
            )
    }

    #[test]
    fn test_resolve_exact_key() {
        let options = sample();
        assert!(options.resolve("/help/*").ignore);
        assert_eq!(options.resolve("/help/:id/:test").slug_values("id").len(), 3);
    }

    #[test]
    fn test_resolve_miss_is_default() {
        let options = sample();
        let option = options.resolve("/help/");
        assert_eq!(option, &PathOption::default());
        assert!(!option.ignore);
        assert!(option.priority.is_none());
        assert!(option.changefreq.is_none());
    }

    #[test]
    fn test_pattern_keys_are_literal() {
        let options = sample();
        // `/help/*` does not cover `/help/faq`
        assert!(!options.resolve("/help/faq").ignore);
        assert!(options.resolve("/dashboard/stats").priority.is_none());
    }

    #[test]
    fn test_slug_values() {
        let options = sample();
        let option = options.resolve("/help/:id/:test");
        assert_eq!(option.slug_values("test")[2], "hey");
        assert!(option.slug_values("missing").is_empty());
    }

    #[test]
    fn test_get_distinguishes_miss() {
        let options = sample();
        assert!(options.get(&PathTemplate::from("/help/*")).is_some());
        assert!(options.get(&PathTemplate::from("/nope")).is_none());
    }

    #[test]
    fn test_deserialize_from_toml() {
        let content = r#"
["/pizza/:id/:test"]
priority = 0.8
changefreq = "weekly"
slugs = { id = ["a", "b"], test = ["x", "y"] }

["/errors/*"]
ignore = true
"#;
        let options: PathOptions = toml::from_str(content).unwrap();
        assert_eq!(options.len(), 2);

        let pizza = options.resolve("/pizza/:id/:test");
        assert_eq!(pizza.priority, Some(0.8));
        assert_eq!(pizza.changefreq.as_deref(), Some("weekly"));
        assert_eq!(pizza.slug_values("id"), ["a", "b"]);
        assert!(options.resolve("/errors/*").ignore);
    }
}
