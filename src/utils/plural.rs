//! Pluralization for log messages.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 urls)
/// - `plural_s(1)` -> `""` (1 url)
/// - `plural_s(5)` -> `"s"` (5 urls)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "route")` -> `"0 routes"`
/// - `plural_count(1, "route")` -> `"1 route"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
