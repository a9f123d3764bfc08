//! # Query Options Builder
//!
//! Reads the directive set into pagination, sort, projection, and relation
//! expansion options. Never touches predicate state.

use serde::Serialize;

use crate::classify::ClassifiedQuery;
use crate::config::{BuilderConfig, DefaultSelect};
use crate::errors::{QueryError, QueryResult};
use crate::grammar;

/// Sort direction, serialized as the datastore expects (`1` / `-1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Normalize a direction token; `None` for unrecognized tokens
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "1" | "asc" => Some(SortDirection::Asc),
            "-1" | "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    /// Datastore representation
    pub fn as_i32(&self) -> i32 {
        match self {
            SortDirection::Asc => 1,
            SortDirection::Desc => -1,
        }
    }
}

impl Serialize for SortDirection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_i32())
    }
}

/// One sort clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Query-execution options compiled from the directive set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOptions {
    /// Maximum records to return
    pub limit: u64,
    /// Records to skip before the first result
    pub skip: u64,
    /// Sort clauses, in directive order
    pub sort: Vec<SortSpec>,
    /// Field projection, passed through to the datastore layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<String>,
    /// Relation names to expand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub populate: Option<Vec<String>>,
}

impl QueryOptions {
    /// Sort clauses as a datastore sort document, e.g. `{ "age": -1 }`
    pub fn sort_document(&self) -> serde_json::Value {
        let mut doc = serde_json::Map::new();
        for spec in &self.sort {
            doc.insert(spec.field.clone(), spec.direction.as_i32().into());
        }
        serde_json::Value::Object(doc)
    }
}

/// Build query options from the classified directives.
pub fn build_options(
    classified: &ClassifiedQuery,
    config: &BuilderConfig,
) -> QueryResult<QueryOptions> {
    let limit = match classified.directive("$limit") {
        Some(value) => parse_integer("$limit", value.first())?,
        None => config.default_limit,
    };

    let skip = match classified.directive("$skip") {
        Some(value) => parse_integer("$skip", value.first())?,
        None => 0,
    };

    let sort = match classified.directive("$sort") {
        Some(value) => parse_sort(value.first()),
        None => Vec::new(),
    };

    // Two independent policies can force identifier-only projection: the
    // registration-time default and the legacy version-2 request path.
    // Inclusive OR, no precedence between them.
    let explicit_select = classified.directive("$select").map(|v| v.first().to_string());
    let force_id_only = config.default_select == DefaultSelect::IdOnly
        || (config.legacy_version_select && classified.version == 2);
    let select = match explicit_select {
        Some(spec) => Some(spec),
        None if force_id_only => Some("_id".to_string()),
        None => None,
    };

    let populate = classified.directive("$populate").map(|value| {
        grammar::fields(value.first())
            .into_iter()
            .map(str::to_string)
            .collect()
    });

    Ok(QueryOptions {
        limit,
        skip,
        sort,
        select,
        populate,
    })
}

/// Strict integer parse for pagination directives; failure is a 400.
fn parse_integer(directive: &str, raw: &str) -> QueryResult<u64> {
    raw.parse()
        .map_err(|_| QueryError::InvalidParam(format!("{} must be an integer, got {:?}", directive, raw)))
}

/// Parse `field|direction` sort entries; entries with an unrecognized
/// direction or malformed shape are skipped.
fn parse_sort(raw: &str) -> Vec<SortSpec> {
    let mut sort = Vec::new();

    for entry in grammar::entries(raw) {
        let Some((field, token)) = grammar::pair(entry) else {
            tracing::warn!(entry, "skipping malformed $sort entry");
            continue;
        };
        let Some(direction) = SortDirection::from_token(token) else {
            tracing::warn!(entry, token, "skipping $sort entry with unknown direction");
            continue;
        };
        if field.is_empty() {
            continue;
        }
        sort.push(SortSpec {
            field: field.to_string(),
            direction,
        });
    }

    sort
}
