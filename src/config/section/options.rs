//! `[options]` validation.
//!
//! ```toml
//! [options."/pizza/:id/:test"]
//! priority = 0.8
//! changefreq = "weekly"
//! slugs = { id = ["a", "b"], test = ["x", "y"] }
//!
//! [options."/admin"]
//! ignore = true
//! ```
//!
//! The table itself is [`PathOptions`]; this module only reports problems.

use super::sitemap::is_known_changefreq;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::options::PathOptions;
use crate::template;

/// Check every option record. Keys are visited in sorted order so the
/// report is stable.
pub fn validate_options(options: &PathOptions, diag: &mut ConfigDiagnostics) {
    let mut records: Vec<_> = options.iter().collect();
    records.sort_unstable_by_key(|(key, _)| *key);

    for (key, option) in records {
        if key.contains('*') {
            diag.warn(
                FieldPath::option(key, "*"),
                "keys are matched exactly, `*` is not a wildcard",
            );
        }

        if let Some(priority) = option.priority
            && !priority.is_finite()
        {
            diag.error(
                FieldPath::option(key, "priority"),
                "priority must be a finite number",
            );
        }

        if let Some(changefreq) = option.changefreq.as_deref()
            && !changefreq.is_empty()
            && !is_known_changefreq(changefreq)
        {
            diag.warn(
                FieldPath::option(key, "changefreq"),
                format!("`{changefreq}` is not a sitemap change frequency"),
            );
        }

        let params = template::analyze(key);
        let mut names: Vec<&str> = option.slugs.keys().map(String::as_str).collect();
        names.sort_unstable();
        for name in names {
            if !params.contains(&name) {
                diag.warn(
                    FieldPath::option(key, "slugs"),
                    format!("`{name}` is not a parameter of this template"),
                );
            }
        }
    }
}
