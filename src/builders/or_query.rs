//! Explicit disjunction: the `$or` directive.
//!
//! `$or=city|NY,city|LA` becomes `{ "$or": [{ "city": "NY" }, { "city": "LA" }] }`.
//! Unlike the search family, clauses are literal string equality: no regex
//! and no coercion.

use serde_json::json;

use crate::classify::ClassifiedQuery;
use crate::filter::Filter;
use crate::grammar;

/// Build the explicit `$or` fragment.
///
/// Each malformed entry (not exactly two `|`-separated parts) is skipped
/// individually; an entirely malformed directive yields an empty fragment,
/// never an empty `$or` list.
pub fn or_fragment(classified: &ClassifiedQuery) -> Filter {
    let mut fragment = Filter::new();
    let Some(value) = classified.directive("$or") else {
        return fragment;
    };

    for entry in grammar::entries(value.first()) {
        let Some((field, literal)) = grammar::pair(entry) else {
            tracing::warn!(entry, "skipping malformed $or entry");
            continue;
        };
        if field.is_empty() {
            tracing::warn!(entry, "skipping $or entry with empty field");
            continue;
        }
        fragment.push_or(json!({ field: literal }));
    }

    fragment
}
