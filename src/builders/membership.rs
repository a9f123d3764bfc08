//! Membership predicates: `field[$in]`, `field[$nin]`.

use serde_json::{json, Value};

use crate::classify::ClassifiedQuery;
use crate::coerce::coerce;
use crate::filter::{ComparisonOperator, Filter};
use crate::grammar;

/// Build membership predicates from the bracket-operator set.
///
/// The value is split on `,` and each element is coerced individually:
/// `status[$in]=a,b,c` becomes `{ "status": { "$in": ["a", "b", "c"] } }`.
pub fn membership_fragment(classified: &ClassifiedQuery) -> Filter {
    let mut fragment = Filter::new();

    for op in [ComparisonOperator::In, ComparisonOperator::Nin] {
        for param in classified.operators_for(op) {
            let values: Vec<Value> = grammar::entries(param.value.first())
                .map(coerce)
                .collect();
            fragment.insert(param.field.clone(), json!({ op.as_str(): values }));
        }
    }

    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::params::RawParams;

    #[test]
    fn test_in_splits_and_coerces() {
        let classified = classify(RawParams::from([("status[$in]", "a,b,c")]));
        let fragment = membership_fragment(&classified);
        assert_eq!(
            fragment.get("status"),
            Some(&json!({ "$in": ["a", "b", "c"] }))
        );
    }

    #[test]
    fn test_elements_coerced_individually() {
        let classified = classify(RawParams::from([("age[$in]", "18,21,unknown")]));
        let fragment = membership_fragment(&classified);
        assert_eq!(
            fragment.get("age"),
            Some(&json!({ "$in": [18, 21, "unknown"] }))
        );
    }

    #[test]
    fn test_nin() {
        let classified = classify(RawParams::from([("status[$nin]", "archived,deleted")]));
        let fragment = membership_fragment(&classified);
        assert_eq!(
            fragment.get("status"),
            Some(&json!({ "$nin": ["archived", "deleted"] }))
        );
    }

    #[test]
    fn test_empty_elements_dropped() {
        let classified = classify(RawParams::from([("status[$in]", "a,,b,")]));
        let fragment = membership_fragment(&classified);
        assert_eq!(fragment.get("status"), Some(&json!({ "$in": ["a", "b"] })));
    }
}
