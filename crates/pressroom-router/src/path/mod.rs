/// Path utilities for validation, normalization and base-path handling
///
/// All functions are **pure**: given same input, always produce same output with no side effects.
use std::borrow::Cow;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//`, `\`, `?` or `#`
/// - Must not end with `/` (except root `/`)
///
/// # Examples
///
/// ```
/// use pressroom_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/single/42"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("products"));
/// assert!(!is_valid_path("/products/"));
/// assert!(!is_valid_path("/products?page=2"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains(['\\', '?', '#']) {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical. Query strings
/// and fragments are dropped; trailing, doubled and backward slashes are folded.
///
/// # Examples
///
/// ```
/// use pressroom_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/orders"), Cow::Borrowed("/orders")));
/// assert_eq!(normalize_path("/orders/"), "/orders");
/// assert_eq!(normalize_path("\\single\\7"), "/single/7");
/// assert_eq!(normalize_path("/pricing?tier=pro#top"), "/pricing");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let without_query = path
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or_default();

    if is_valid_path(without_query) {
        return Cow::Borrowed(without_query);
    }

    let normalized = without_query
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Canonical form of a configured base path
///
/// An empty base or `/` means "no base"; everything else becomes
/// `/segment[/segment...]` without a trailing slash.
///
/// # Examples
///
/// ```
/// use pressroom_router::path::normalize_base;
///
/// assert_eq!(normalize_base(""), "");
/// assert_eq!(normalize_base("/"), "");
/// assert_eq!(normalize_base("admin/"), "/admin");
/// ```
pub fn normalize_base(base: &str) -> String {
    match &*normalize_path(base.trim()) {
        "/" => String::new(),
        other => other.to_string(),
    }
}

/// Strips a canonical base prefix from a canonical path
///
/// The base must end on a segment boundary and is compared ASCII-case-insensitively.
/// Returns `None` when the path lies outside the base.
///
/// # Examples
///
/// ```
/// use pressroom_router::path::strip_base;
///
/// assert_eq!(strip_base("/admin/orders", "/admin"), Some("/orders"));
/// assert_eq!(strip_base("/ADMIN", "/admin"), Some("/"));
/// assert_eq!(strip_base("/administrator", "/admin"), None);
/// assert_eq!(strip_base("/orders", ""), Some("/orders"));
/// ```
pub fn strip_base<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    if base.is_empty() {
        return Some(path);
    }

    let prefix_matches = path
        .get(..base.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(base));
    if !prefix_matches {
        return None;
    }

    match &path[base.len()..] {
        "" => Some("/"),
        rest if rest.starts_with('/') => Some(rest),
        _ => None,
    }
}

/// Prefixes an application path with a canonical base path
///
/// # Examples
///
/// ```
/// use pressroom_router::path::join_base;
///
/// assert_eq!(join_base("/admin", "/"), "/admin");
/// assert_eq!(join_base("/admin", "/orders"), "/admin/orders");
/// assert_eq!(join_base("", "/orders"), "/orders");
/// ```
pub fn join_base(base: &str, path: &str) -> String {
    match (base.is_empty(), path) {
        (true, _) => path.to_string(),
        (false, "/") | (false, "") => base.to_string(),
        (false, _) => format!("{}{}", base, path),
    }
}

/// Percent-decodes a single captured segment, keeping the raw text when it is not valid UTF-8
pub fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| segment.to_string())
}
