//! # Compiler Entry Point
//!
//! Orchestrates one compilation: classify the raw parameters, run every
//! predicate builder, assemble the filter, build the options. Pure and
//! synchronous; the only shared input is the read-only [`BuilderConfig`].

use serde::Serialize;

use crate::builders::{
    equality_fragment, membership_fragment, negation_fragment, or_fragment, range_fragment,
    search_fragments,
};
use crate::classify::classify;
use crate::config::BuilderConfig;
use crate::errors::QueryResult;
use crate::filter::Filter;
use crate::options::{build_options, QueryOptions};
use crate::params::RawParams;

/// The compiled query: a filter document plus execution options
#[derive(Debug, Clone, Serialize)]
pub struct ParsedQuery {
    pub filter: Filter,
    pub options: QueryOptions,
}

/// Compile raw query-string parameters into a [`ParsedQuery`].
///
/// Fragments merge in a fixed order: equality, range, membership, negation,
/// search family, explicit `$or`. Disjunction contributions concatenate in
/// that order; plain-field collisions resolve to the later fragment.
///
/// Any builder error aborts the whole compilation; malformed individual
/// directive entries were already skipped inside the builders.
pub fn compile(params: RawParams, config: &BuilderConfig) -> QueryResult<ParsedQuery> {
    let classified = classify(params);

    let mut fragments = vec![
        equality_fragment(&classified),
        range_fragment(&classified),
        membership_fragment(&classified),
        negation_fragment(&classified),
    ];
    fragments.extend(search_fragments(&classified, config)?);
    fragments.push(or_fragment(&classified));

    let filter = Filter::assemble(fragments);
    let options = build_options(&classified, config)?;

    tracing::debug!(
        fields = filter.field_count(),
        or_clauses = filter.or_clauses().len(),
        limit = options.limit,
        skip = options.skip,
        "query compiled"
    );

    Ok(ParsedQuery { filter, options })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compile_mixed_query() {
        let params = RawParams::from([
            ("age[$gte]", "18"),
            ("name", "john"),
            ("$sort", "age|desc"),
            ("$limit", "10"),
        ]);
        let parsed = compile(params, &BuilderConfig::default()).unwrap();

        assert_eq!(
            parsed.filter.into_value(),
            json!({ "name": "john", "age": { "$gte": 18 } })
        );
        assert_eq!(parsed.options.limit, 10);
        assert_eq!(parsed.options.sort_document(), json!({ "age": -1 }));
    }

    #[test]
    fn test_search_and_or_union() {
        let params = RawParams::from([("$search", "name|a,email|b"), ("$or", "city|NY,city|LA")]);
        let parsed = compile(params, &BuilderConfig::default()).unwrap();

        // One $or list, search clauses first, then explicit $or clauses
        assert_eq!(
            parsed.filter.or_clauses(),
            &[
                json!({ "name": { "$regex": "a" } }),
                json!({ "email": { "$regex": "b" } }),
                json!({ "city": "NY" }),
                json!({ "city": "LA" }),
            ]
        );
    }

    #[test]
    fn test_empty_params() {
        let parsed = compile(RawParams::new(), &BuilderConfig::default()).unwrap();
        assert!(parsed.filter.is_empty());
        assert_eq!(parsed.options.limit, 50);
    }
}
