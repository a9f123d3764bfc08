//! Negation predicates: `field[$ne]`.

use serde_json::json;

use crate::classify::ClassifiedQuery;
use crate::coerce::coerce;
use crate::filter::{ComparisonOperator, Filter};

/// Build negation predicates from the bracket-operator set.
///
/// `status[$ne]=archived` becomes `{ "status": { "$ne": "archived" } }`;
/// the value is coerced, so 24-char hex identifiers become `$oid` values.
pub fn negation_fragment(classified: &ClassifiedQuery) -> Filter {
    let mut fragment = Filter::new();

    for param in classified.operators_for(ComparisonOperator::Ne) {
        fragment.insert(
            param.field.clone(),
            json!({ "$ne": coerce(param.value.first()) }),
        );
    }

    fragment
}
