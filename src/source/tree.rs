//! XML route manifests.
//!
//! Mirrors a client-side router configuration:
//!
//! ```xml
//! <Routes>
//!   <Route path="/hello"/>
//!   <Route path="/pizza/:id/:test"/>
//!   <Route path="/admin" sitemapIndex="false"/>
//!   <Route>                                  <!-- layout route, no path -->
//!     <Route path="/heythere/:id"/>
//!   </Route>
//! </Routes>
//! ```
//!
//! Every `Route` element at any depth contributes its `path` attribute in
//! document order. Paths are taken as written; nested paths are not joined.

use super::{RouteSource, SourceError};
use crate::template::PathTemplate;
use quick_xml::{Reader, escape::unescape, events::BytesStart, events::Event};
use std::borrow::Cow;

const ROUTE_TAG: &[u8] = b"Route";
const PATH_ATTR: &[u8] = b"path";
const INDEX_ATTR: &[u8] = b"sitemapIndex";

/// A route manifest held in memory.
#[derive(Debug, Clone)]
pub struct RouteTree {
    content: String,
    origin: String,
}

impl RouteTree {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            origin: "<inline>".to_owned(),
        }
    }

    /// Name used in error messages (usually the file path).
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    fn malformed(&self, err: impl std::fmt::Display) -> SourceError {
        SourceError::Malformed {
            origin: self.origin.clone(),
            message: err.to_string(),
        }
    }
}

impl RouteSource for RouteTree {
    fn templates(&self) -> Result<Vec<PathTemplate>, SourceError> {
        let mut reader = Reader::from_str(&self.content);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();
        let mut templates = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                    if e.name().as_ref() == ROUTE_TAG
                        && let Some(path) = route_path(e)
                    {
                        templates.push(PathTemplate::from(path));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(self.malformed(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(templates)
    }
}

/// The `path` of a sitemap-indexed route element.
///
/// `sitemapIndex="false"` drops the route as a whole: a parameterized route
/// never reaches expansion, so none of its slug values are emitted either.
fn route_path(e: &BytesStart<'_>) -> Option<String> {
    let mut path = None;
    for attr in e.attributes().flatten() {
        let value = attr_value(&attr.value);
        match attr.key.as_ref() {
            PATH_ATTR => path = Some(value),
            INDEX_ATTR if value.trim().eq_ignore_ascii_case("false") => return None,
            _ => {}
        }
    }
    path
}

fn attr_value(raw: &[u8]) -> String {
    let raw = String::from_utf8_lossy(raw);
    unescape(&raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}
