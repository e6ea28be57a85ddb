//! Configuration sections.
//!
//! | Section      | Purpose                                           |
//! |--------------|---------------------------------------------------|
//! | `[site]`     | Hostname prefixed to every location               |
//! | `[routes]`   | Where path templates come from                    |
//! | `[sitemap]`  | Output directory, minification, entry defaults    |
//! | `[options]`  | Per-template overrides, keyed by exact template   |

mod options;
mod routes;
mod site;
mod sitemap;

pub use options::validate_options;
pub use routes::RoutesConfig;
pub use site::SiteInfoConfig;
pub use sitemap::{CHANGEFREQ_VALUES, SitemapConfig};
