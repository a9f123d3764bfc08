//! Text-search predicates: `$search`, `$isearch`, `$searchOr`, `$isearchOr`
//! and the free-text multi-field `$q`.
//!
//! All five directives express regex predicates; they differ in which side
//! of the `|` carries the field list and whether matching is case-sensitive.

use serde_json::{json, Value};

use crate::classify::ClassifiedQuery;
use crate::coerce::regex_value;
use crate::config::BuilderConfig;
use crate::errors::QueryResult;
use crate::filter::Filter;
use crate::grammar;

/// Build all search-family fragments, in directive order:
/// `$search`, `$isearch`, `$searchOr`, `$isearchOr`, `$q`.
pub fn search_fragments(
    classified: &ClassifiedQuery,
    config: &BuilderConfig,
) -> QueryResult<Vec<Filter>> {
    Ok(vec![
        field_search_fragment(classified, config, "$search", false)?,
        field_search_fragment(classified, config, "$isearch", true)?,
        shared_text_fragment(classified, config, "$searchOr", false)?,
        shared_text_fragment(classified, config, "$isearchOr", true)?,
        free_text_fragment(classified, config)?,
    ])
}

/// `$search` / `$isearch`: entries of shape `field|text`.
///
/// One well-formed entry yields a direct field predicate; several yield a
/// disjunction. Malformed entries are skipped individually.
fn field_search_fragment(
    classified: &ClassifiedQuery,
    config: &BuilderConfig,
    directive: &str,
    case_insensitive: bool,
) -> QueryResult<Filter> {
    let mut fragment = Filter::new();
    let Some(value) = classified.directive(directive) else {
        return Ok(fragment);
    };

    let mut predicates: Vec<(String, Value)> = Vec::new();
    for raw in value.iter() {
        for entry in grammar::entries(raw) {
            let Some((field, text)) = grammar::pair(entry) else {
                tracing::warn!(directive, entry, "skipping malformed search entry");
                continue;
            };
            if field.is_empty() {
                tracing::warn!(directive, entry, "skipping search entry with empty field");
                continue;
            }
            let regex = regex_value(text, case_insensitive, config.escape_mode)?;
            predicates.push((field.to_string(), regex));
        }
    }

    if predicates.len() == 1 {
        let (field, regex) = predicates.remove(0);
        fragment.insert(field, regex);
    } else {
        for (field, regex) in predicates {
            fragment.push_or(json!({ field: regex }));
        }
    }

    Ok(fragment)
}

/// `$searchOr` / `$isearchOr`: `field1,field2,…|text`, the same regex
/// applied to every listed field as a disjunction.
fn shared_text_fragment(
    classified: &ClassifiedQuery,
    config: &BuilderConfig,
    directive: &str,
    case_insensitive: bool,
) -> QueryResult<Filter> {
    let mut fragment = Filter::new();
    let Some(value) = classified.directive(directive) else {
        return Ok(fragment);
    };

    let Some((field_list, text)) = grammar::pair(value.first()) else {
        tracing::warn!(directive, "skipping malformed shared-text search directive");
        return Ok(fragment);
    };

    let regex = regex_value(text, case_insensitive, config.escape_mode)?;
    for field in grammar::fields(field_list) {
        fragment.push_or(json!({ field: regex.clone() }));
    }

    Ok(fragment)
}

/// `$q`: `text|field1,field2,…`, always case-insensitive.
fn free_text_fragment(classified: &ClassifiedQuery, config: &BuilderConfig) -> QueryResult<Filter> {
    let mut fragment = Filter::new();
    let Some(value) = classified.directive("$q") else {
        return Ok(fragment);
    };

    let Some((text, field_list)) = grammar::pair(value.first()) else {
        tracing::warn!("skipping malformed $q directive");
        return Ok(fragment);
    };

    let regex = regex_value(text, true, config.escape_mode)?;
    for field in grammar::fields(field_list) {
        fragment.push_or(json!({ field: regex.clone() }));
    }

    Ok(fragment)
}
