//! Route sources.
//!
//! The generator only needs an ordered list of path templates. This module
//! provides the adapters that produce one:
//!
//! | Adapter       | Input                                              |
//! |---------------|----------------------------------------------------|
//! | [`RouteTree`] | XML route manifest (`<Routes><Route path=".."/>`)  |
//! | [`RouteList`] | one template per line, `#` comments                |
//!
//! [`load_routes`] picks an adapter from the file extension.

mod list;
mod tree;

pub use list::RouteList;
pub use tree::RouteTree;

use crate::template::PathTemplate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Route source errors
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed route tree in `{origin}`: {message}")]
    Malformed { origin: String, message: String },
}

/// Anything that yields path templates in route order.
pub trait RouteSource {
    fn templates(&self) -> Result<Vec<PathTemplate>, SourceError>;
}

impl RouteSource for [PathTemplate] {
    fn templates(&self) -> Result<Vec<PathTemplate>, SourceError> {
        Ok(self.to_vec())
    }
}

impl RouteSource for Vec<PathTemplate> {
    fn templates(&self) -> Result<Vec<PathTemplate>, SourceError> {
        Ok(self.clone())
    }
}

/// Read a route file, choosing the adapter by extension.
///
/// `.xml` files are parsed as a route tree; anything else as a plain list.
pub fn load_routes(path: &Path) -> Result<Vec<PathTemplate>, SourceError> {
    let content =
        fs::read_to_string(path).map_err(|err| SourceError::Io(path.to_path_buf(), err))?;
    let origin = path.display().to_string();

    if is_tree_file(path) {
        RouteTree::new(content).with_origin(origin).templates()
    } else {
        RouteList::new(&content).templates()
    }
}

fn is_tree_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}
