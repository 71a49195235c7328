//! Helpers for backslash-separated qualified names (`Project\Sub\Type`).
//!
//! Names are compared case-sensitively and stored as written. A leading
//! separator marks the absolute form (`\Project\Type`); registry keys never
//! carry it.

/// Namespace separator in qualified names.
pub const SEPARATOR: char = '\\';

/// Last segment of a qualified name (`Project\Sub\Type` -> `Type`).
pub fn short_name(qualified: &str) -> &str {
    match qualified.rfind(SEPARATOR) {
        Some(idx) => &qualified[idx + 1..],
        None => qualified,
    }
}

/// Namespace part of a qualified name, `None` for global names.
pub fn namespace_of(qualified: &str) -> Option<&str> {
    qualified.rfind(SEPARATOR).map(|idx| &qualified[..idx])
}

/// Join a namespace and a relative name. An empty namespace is the global one.
pub fn join(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}{SEPARATOR}{name}")
    }
}

/// Strip the leading separator of an absolute token, `None` for relative ones.
pub fn strip_absolute(token: &str) -> Option<&str> {
    token.strip_prefix(SEPARATOR)
}

/// Split a relative token into its first segment and the remainder.
pub fn split_first(token: &str) -> (&str, Option<&str>) {
    match token.find(SEPARATOR) {
        Some(idx) => (&token[..idx], Some(&token[idx + 1..])),
        None => (token, None),
    }
}
