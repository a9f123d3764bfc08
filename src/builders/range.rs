//! Range predicates: `field[$gt]`, `field[$gte]`, `field[$lt]`, `field[$lte]`.

use serde_json::json;

use crate::classify::ClassifiedQuery;
use crate::coerce::coerce;
use crate::filter::{ComparisonOperator, Filter};

const RANGE_OPS: [ComparisonOperator; 4] = [
    ComparisonOperator::Gt,
    ComparisonOperator::Gte,
    ComparisonOperator::Lt,
    ComparisonOperator::Lte,
];

/// Build range predicates from the bracket-operator set.
///
/// `age[$gte]=18` becomes `{ "age": { "$gte": 18 } }`. The comparison
/// target is coerced like any other value; no type restriction applies.
pub fn range_fragment(classified: &ClassifiedQuery) -> Filter {
    let mut fragment = Filter::new();

    for op in RANGE_OPS {
        for param in classified.operators_for(op) {
            fragment.insert(
                param.field.clone(),
                json!({ op.as_str(): coerce(param.value.first()) }),
            );
        }
    }

    fragment
}
