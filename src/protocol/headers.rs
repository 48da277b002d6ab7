//! Header parsing helpers for the Inertia protocol.
//!
//! # Header Formats
//!
//! | Header | Format | Example |
//! |--------|--------|---------|
//! | X-Inertia | Boolean flag | `true` |
//! | X-Inertia-Version | Opaque string | `a1b2c3` |
//! | X-Inertia-Partial-Data | Comma-separated prop names | `user, status` |
//! | X-Inertia-Partial-Component | Component name | `Users/Index` |
//!
//! # Examples
//!
//! ```
//! use inertia_axum::protocol::{is_truthy, parse_partial_data, redirect_status};
//!
//! assert!(is_truthy("true"));
//!
//! let keep = parse_partial_data("user, status");
//! assert!(keep.contains("user"));
//!
//! assert_eq!(redirect_status("PUT"), 303);
//! ```

use super::constants::status;
use std::collections::BTreeSet;

/// Whether a flag header such as `X-Inertia` is set.
///
/// Only `true` (any case, surrounding whitespace ignored) counts.
///
/// # Examples
///
/// ```
/// use inertia_axum::protocol::is_truthy;
///
/// assert!(is_truthy("TRUE"));
/// assert!(!is_truthy("false"));
/// assert!(!is_truthy(""));
/// ```
#[inline]
pub fn is_truthy(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Parse the `X-Inertia-Partial-Data` header into the set of props to keep.
///
/// Malformed entries are tolerated rather than rejected: blank names are
/// dropped and duplicates collapse into one.
///
/// # Examples
///
/// ```
/// use inertia_axum::protocol::parse_partial_data;
///
/// let keep = parse_partial_data("user, ,status,user");
/// assert_eq!(keep.len(), 2);
///
/// assert!(parse_partial_data("").is_empty());
/// ```
pub fn parse_partial_data(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether a request method is subject to asset version checks.
///
/// Only safe methods are checked so that a form submission is never silently
/// turned into a reload.
#[inline]
pub fn is_version_checked_method(method: &str) -> bool {
    method.eq_ignore_ascii_case("GET") || method.eq_ignore_ascii_case("HEAD")
}

/// Whether a redirect issued in response to `method` must use 303.
#[inline]
pub fn requires_see_other(method: &str) -> bool {
    ["PUT", "PATCH", "DELETE"]
        .iter()
        .any(|m| method.eq_ignore_ascii_case(m))
}

/// Redirect status for a request made with `method`.
///
/// # Examples
///
/// ```
/// use inertia_axum::protocol::redirect_status;
///
/// assert_eq!(redirect_status("DELETE"), 303);
/// assert_eq!(redirect_status("POST"), 302);
/// ```
#[inline]
pub fn redirect_status(method: &str) -> u16 {
    if requires_see_other(method) {
        status::SEE_OTHER
    } else {
        status::FOUND
    }
}
