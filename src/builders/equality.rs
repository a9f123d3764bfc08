//! Plain-key equality predicates.
//!
//! Runs last over whatever the classifier left in the plain set; every
//! other builder's keys were already claimed by classification, so nothing
//! is reprocessed here.

use serde_json::Value;

use crate::classify::ClassifiedQuery;
use crate::coerce::coerce;
use crate::filter::Filter;
use crate::params::ParamValue;

/// Build equality predicates from the remaining plain keys.
///
/// A repeated key compares against the array of its coerced values, the
/// way repeated query-string keys arrive from the host framework.
pub fn equality_fragment(classified: &ClassifiedQuery) -> Filter {
    let mut fragment = Filter::new();

    for (field, value) in &classified.plain {
        let predicate = match value {
            ParamValue::Single(raw) => coerce(raw),
            ParamValue::Many(raws) => {
                Value::Array(raws.iter().map(|raw| coerce(raw)).collect())
            }
        };
        fragment.insert(field.clone(), predicate);
    }

    fragment
}
