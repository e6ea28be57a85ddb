//! URL string helpers.
//!
//! Locations are built by plain concatenation of hostname and path, so the
//! only normalization done here is on the slash at the seam.

use std::borrow::Cow;

/// Prefix `/` to a path that lacks one.
///
/// # Examples
/// ```
/// use routemap::utils::url::ensure_leading_slash;
/// assert_eq!(ensure_leading_slash("test"), "/test");
/// assert_eq!(ensure_leading_slash("/test"), "/test");
/// ```
#[inline]
pub fn ensure_leading_slash(path: &str) -> Cow<'_, str> {
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}

/// Strip surrounding whitespace and trailing slashes from a hostname.
///
/// # Examples
/// ```
/// use routemap::utils::url::trim_hostname;
/// assert_eq!(trim_hostname("https://example.org/"), "https://example.org");
/// assert_eq!(trim_hostname(" https://example.org "), "https://example.org");
/// ```
#[inline]
pub fn trim_hostname(hostname: &str) -> &str {
    hostname.trim().trim_end_matches('/')
}

/// Join hostname and path into an absolute location.
#[inline]
pub fn location(hostname: &str, path: &str) -> String {
    format!("{hostname}{}", ensure_leading_slash(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_leading_slash() {
        assert_eq!(ensure_leading_slash("test"), "/test");
        assert_eq!(ensure_leading_slash("/test"), "/test");
        assert_eq!(ensure_leading_slash(""), "/");
        assert!(matches!(ensure_leading_slash("/x"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_trim_hostname() {
        assert_eq!(trim_hostname("https://example.org"), "https://example.org");
        assert_eq!(trim_hostname("https://example.org///"), "https://example.org");
        assert_eq!(trim_hostname("  "), "");
    }

    #[test]
    fn test_location() {
        assert_eq!(location("https://example.org", "hello"), "https://example.org/hello");
        assert_eq!(location("https://example.org", "/hello"), "https://example.org/hello");
        assert_eq!(location("https://example.org", "/"), "https://example.org/");
    }
}
