//! # Key Classifier
//!
//! Partitions the raw parameters into three disjoint sets: `$`-prefixed
//! directives, `field[$op]` bracket operators, and plain equality keys.
//! Classification consumes the parameter map, so every key lands in exactly
//! one set and nothing is double-counted.

use crate::filter::ComparisonOperator;
use crate::params::{ParamValue, RawParams};

/// Keys discarded before classification. Artifacts of an upstream
/// documentation generator; they carry no query semantics.
const IGNORED_KEYS: [&str; 2] = ["", "$count"];

/// Request version key, read and removed before classification
const VERSION_KEY: &str = "v";

/// Default request version when `v` is absent or unparsable
const DEFAULT_VERSION: u32 = 1;

/// One `field[$op]` parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketParam {
    pub field: String,
    pub op: ComparisonOperator,
    pub value: ParamValue,
}

/// The partitioned request parameters
#[derive(Debug, Clone, Default)]
pub struct ClassifiedQuery {
    /// Request version from the `v` key
    pub version: u32,
    /// `$`-prefixed control keys, in query-string order
    pub directives: Vec<(String, ParamValue)>,
    /// Recognized `field[$op]` keys
    pub operators: Vec<BracketParam>,
    /// Everything else; becomes equality predicates
    pub plain: Vec<(String, ParamValue)>,
}

impl ClassifiedQuery {
    /// Value of a directive, if present
    pub fn directive(&self, name: &str) -> Option<&ParamValue> {
        self.directives
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Bracket parameters carrying the given operator
    pub fn operators_for(&self, op: ComparisonOperator) -> impl Iterator<Item = &BracketParam> {
        self.operators.iter().filter(move |param| param.op == op)
    }
}

/// Partition the raw parameters.
///
/// Consumes the working copy: once a key is classified it exists in exactly
/// one of the three sets. The `v` key and the ignored legacy keys never
/// reach any set.
pub fn classify(params: RawParams) -> ClassifiedQuery {
    let mut classified = ClassifiedQuery {
        version: DEFAULT_VERSION,
        ..Default::default()
    };

    for (key, value) in params.into_pairs() {
        if IGNORED_KEYS.contains(&key.as_str()) {
            continue;
        }
        if key == VERSION_KEY {
            classified.version = value.first().parse().unwrap_or(DEFAULT_VERSION);
            continue;
        }
        if key.starts_with('$') {
            classified.directives.push((key, value));
            continue;
        }
        let bracket = parse_bracket_key(&key).map(|(field, op)| (field.to_string(), op));
        match bracket {
            Some((field, op)) => classified.operators.push(BracketParam { field, op, value }),
            None => classified.plain.push((key, value)),
        }
    }

    classified
}

/// Parse a key of exact shape `field[$op]` with a recognized operator.
///
/// An unrecognized bracket suffix (or an empty field) is not an operator
/// key; the caller keeps it as a plain key rather than silently matching.
fn parse_bracket_key(key: &str) -> Option<(&str, ComparisonOperator)> {
    let inner = key.strip_suffix(']')?;
    let open = inner.find('[')?;
    let (field, token) = inner.split_at(open);
    if field.is_empty() {
        return None;
    }
    let op = ComparisonOperator::from_token(&token[1..])?;
    Some((field, op))
}
