//! # Value Coercion
//!
//! Turns raw query-string values into typed filter values. The coercion
//! ladder is checked in order, first match wins:
//!
//! 1. 24-character hex string -> object identifier (Extended JSON `$oid`)
//! 2. `"true"` / `"false"` -> boolean
//! 3. full integer or finite float parse -> number
//! 4. anything else -> string
//!
//! Search text additionally passes through an escaping step before it is
//! wrapped in a `$regex` predicate; see [`regex_value`].

use regex::Regex;
use serde_json::{json, Value};

use crate::config::EscapeMode;
use crate::errors::{QueryError, QueryResult};

/// Coerce a raw query value into a typed filter value. Infallible.
pub fn coerce(raw: &str) -> Value {
    if is_object_id(raw) {
        return json!({ "$oid": raw });
    }
    if raw == "true" {
        return Value::Bool(true);
    }
    if raw == "false" {
        return Value::Bool(false);
    }
    if let Some(n) = coerce_number(raw) {
        return n;
    }
    Value::String(raw.to_string())
}

/// Check the lexical form of a datastore object identifier:
/// exactly 24 hex digits.
pub fn is_object_id(raw: &str) -> bool {
    raw.len() == 24 && raw.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a string that is entirely a number. Integers stay integers;
/// non-finite floats are rejected so `"inf"` and `"NaN"` remain strings.
fn coerce_number(raw: &str) -> Option<Value> {
    if let Ok(n) = raw.parse::<i64>() {
        return Some(Value::Number(n.into()));
    }
    if let Ok(f) = raw.parse::<f64>() {
        if f.is_finite() {
            return serde_json::Number::from_f64(f).map(Value::Number);
        }
    }
    None
}

/// Build a `$regex` predicate value from search text.
///
/// The escape mode runs first, then the pattern is validated with the
/// `regex` crate before it is embedded in the filter document. A pattern
/// that fails to compile is a client-input error.
pub fn regex_value(text: &str, case_insensitive: bool, escape: EscapeMode) -> QueryResult<Value> {
    let pattern = escape_text(text, escape);

    let probe = if case_insensitive {
        format!("(?i){}", pattern)
    } else {
        pattern.clone()
    };
    Regex::new(&probe).map_err(|e| QueryError::InvalidPattern(e.to_string()))?;

    if case_insensitive {
        Ok(json!({ "$regex": pattern, "$options": "i" }))
    } else {
        Ok(json!({ "$regex": pattern }))
    }
}

/// Apply the configured search-text escaping.
fn escape_text(text: &str, escape: EscapeMode) -> String {
    match escape {
        // Historical behavior: only the first occurrence of each character
        EscapeMode::FirstPlusMinus => text.replacen('+', "\\+", 1).replacen('-', "\\-", 1),
        EscapeMode::AllMetacharacters => regex::escape(text),
    }
}
