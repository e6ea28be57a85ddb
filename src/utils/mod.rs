//! Small shared helpers.
//!
//! - [`url`]: URL path normalization (`ensure_leading_slash`, `trim_hostname`)
//! - [`plural`]: count formatting for log output

pub mod plural;
pub mod url;

pub use plural::plural_count;
