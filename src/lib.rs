//! routemap - expand router path templates into a sitemap.
//!
//! ```text
//! route source ──▶ [PathTemplate] ──┐
//!                                   ├─▶ expand ──▶ [SitemapEntry] ──▶ serialize ──▶ sitemap.xml
//!              PathOptions ─────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use routemap::{PathOption, PathOptions, PathTemplate, generate_sitemap};
//!
//! let routes = vec![PathTemplate::from("/hello"), PathTemplate::from("/pizza/:id")];
//! let options = PathOptions::new().with(
//!     "/pizza/:id",
//!     PathOption::default().with_slugs("id", ["margherita", "marinara"]),
//! );
//!
//! let sitemap = generate_sitemap("https://example.org", &routes, &options).unwrap();
//! assert_eq!(sitemap.len(), 3);
//! assert!(sitemap.to_xml().contains("<loc>https://example.org/pizza/marinara</loc>"));
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod logger;
pub mod options;
pub mod source;
pub mod template;
pub mod utils;

pub use generator::{
    EntryDefaults, GenerateError, SitemapDocument, SitemapEntry, generate_sitemap,
    generate_sitemap_with, serialize, write_sitemap,
};
pub use options::{PathOption, PathOptions};
pub use source::{RouteList, RouteSource, RouteTree, SourceError, load_routes};
pub use template::{PathTemplate, analyze};
