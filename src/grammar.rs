//! # Directive Mini-Language
//!
//! Shared parsing primitives for the `field|value` mini-language embedded in
//! directive values. Every builder parses through these, so malformed input
//! is handled one way everywhere: an entry that does not fit the grammar is
//! skipped, never a panic.
//!
//! Grammar:
//!
//! ```text
//! entries    := entry ( ',' entry )*
//! entry      := part '|' part
//! field-list := field ( ',' field )*
//! ```

/// Split a directive value into comma-separated entries, trimmed,
/// empties dropped.
pub fn entries(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Split an entry into exactly two `|`-separated parts.
///
/// Returns `None` when the entry has fewer or more than two parts; callers
/// treat that as a malformed entry and skip it.
pub fn pair(entry: &str) -> Option<(&str, &str)> {
    let mut parts = entry.split('|');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(head), Some(tail), None) => Some((head.trim(), tail.trim())),
        _ => None,
    }
}

/// Split a comma-separated field list, trimmed, empties dropped.
pub fn fields(raw: &str) -> Vec<&str> {
    entries(raw).collect()
}
