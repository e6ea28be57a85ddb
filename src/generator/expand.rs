//! Template expansion.
//!
//! Every parameter of a template is bound to each of its candidate values and
//! the results are combined as a cross-product:
//!
//! ```text
//! /pizza/:id/:test   id = [a, b]   test = [x, y]
//!
//! { /pizza/:id/:test }
//!   ── id ──▶ { /pizza/a/:test, /pizza/b/:test }
//!   ── test ─▶ { /pizza/a/x, /pizza/a/y, /pizza/b/x, /pizza/b/y }
//! ```
//!
//! A parameter without candidates empties the working set, so a template is
//! either resolved on every parameter or contributes nothing.

use super::sitemap::{SitemapDocument, SitemapEntry};
use crate::options::{PathOption, PathOptions};
use crate::template::{self, PathTemplate};
use crate::debug;
use crate::utils::url::location;
use thiserror::Error;

/// Preconditions of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("no hostname configured, set `site.url` or pass `--url`")]
    MissingHostname,

    #[error("no routes defined")]
    NoRoutes,
}

/// Values used when an option record leaves priority or changefreq unset.
///
/// `priority` is written to the document as given and must be finite.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDefaults {
    pub priority: f64,
    pub changefreq: String,
}

impl Default for EntryDefaults {
    fn default() -> Self {
        Self {
            priority: 0.0,
            changefreq: "never".to_owned(),
        }
    }
}

/// Expands templates into sitemap entries for one hostname.
#[derive(Debug, Clone)]
pub struct Expander<'a> {
    hostname: &'a str,
    defaults: &'a EntryDefaults,
}

impl<'a> Expander<'a> {
    pub fn new(hostname: &'a str, defaults: &'a EntryDefaults) -> Self {
        Self { hostname, defaults }
    }

    /// Entries for one template under its option record.
    pub fn expand(&self, template: &PathTemplate, option: &PathOption) -> Vec<SitemapEntry> {
        if option.ignore {
            return Vec::new();
        }

        expand_paths(template.as_str(), option)
            .into_iter()
            .map(|path| self.entry(&path, option))
            .collect()
    }

    fn entry(&self, path: &str, option: &PathOption) -> SitemapEntry {
        SitemapEntry {
            loc: location(self.hostname, path),
            priority: self.priority(option),
            changefreq: self.changefreq(option).to_owned(),
        }
    }

    /// Zero counts as unset. NaN and infinities are never emitted.
    fn priority(&self, option: &PathOption) -> f64 {
        option
            .priority
            .filter(|p| p.is_finite() && *p != 0.0)
            .unwrap_or(self.defaults.priority)
    }

    /// An empty string counts as unset.
    fn changefreq<'o>(&'o self, option: &'o PathOption) -> &'o str {
        option
            .changefreq
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(self.defaults.changefreq.as_str())
    }
}

/// Fully substituted paths for a template, in emission order.
///
/// Parameters are processed left to right and, within a parameter, candidate
/// values in their configured order. A name repeated in one template is bound
/// once and fills every segment that carries it. Values are inserted into the
/// original template, so a value is never substituted a second time.
pub fn expand_paths(template: &str, option: &PathOption) -> Vec<String> {
    let mut params = template::analyze(template);
    if params.is_empty() {
        return vec![template.to_owned()];
    }
    dedup_in_order(&mut params);

    let mut bindings: Vec<Vec<(&str, &str)>> = vec![Vec::new()];
    for name in params {
        let values = option.slug_values(name);
        if values.is_empty() {
            debug!("expand"; "{} has no values for `{}`, skipped", template, name);
            return Vec::new();
        }
        bindings = bindings
            .iter()
            .flat_map(|bound| {
                values.iter().map(move |value| {
                    let mut next = bound.clone();
                    next.push((name, value.as_str()));
                    next
                })
            })
            .collect();
    }

    bindings
        .iter()
        .map(|bound| template::fill(template, bound))
        .collect()
}

fn dedup_in_order(params: &mut Vec<&str>) {
    let mut seen = Vec::with_capacity(params.len());
    params.retain(|p| {
        if seen.contains(p) {
            false
        } else {
            seen.push(*p);
            true
        }
    });
}

/// Expand all templates with the default entry policy.
///
/// Fails before doing any work when the hostname is blank or no templates are
/// given. Unresolvable templates are not errors; they contribute no entries.
pub fn generate_sitemap(
    hostname: &str,
    templates: &[PathTemplate],
    options: &PathOptions,
) -> Result<SitemapDocument, GenerateError> {
    generate_sitemap_with(hostname, templates, options, &EntryDefaults::default())
}

/// [`generate_sitemap`] with explicit defaults for priority and changefreq.
pub fn generate_sitemap_with(
    hostname: &str,
    templates: &[PathTemplate],
    options: &PathOptions,
    defaults: &EntryDefaults,
) -> Result<SitemapDocument, GenerateError> {
    if hostname.trim().is_empty() {
        return Err(GenerateError::MissingHostname);
    }
    if templates.is_empty() {
        return Err(GenerateError::NoRoutes);
    }

    let expander = Expander::new(hostname, defaults);
    let entries = templates
        .iter()
        .flat_map(|t| expander.expand(t, options.resolve(t.as_str())))
        .collect();

    Ok(SitemapDocument::new(entries))
}
