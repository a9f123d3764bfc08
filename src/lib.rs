//! # axum-query-builder
//!
//! Compiles the key/value pairs of an HTTP GET query string into a
//! MongoDB-style filter document and a set of query-execution options
//! (pagination, sort, projection, relation expansion), ready to hand to a
//! datastore layer.
//!
//! The query mini-language:
//!
//! | Key pattern | Effect |
//! |---|---|
//! | `field` | equality predicate (value coerced) |
//! | `field[$in]`, `field[$nin]` | membership over comma-separated values |
//! | `field[$gt]`, `field[$gte]`, `field[$lt]`, `field[$lte]` | range predicate |
//! | `field[$ne]` | negation predicate |
//! | `$search`, `$isearch` | `field\|text` regex predicate(s) |
//! | `$searchOr`, `$isearchOr` | `f1,f2\|text` shared-text regex disjunction |
//! | `$q` | `text\|f1,f2` case-insensitive multi-field search |
//! | `$or` | `f1\|v1,f2\|v2` literal-equality disjunction |
//! | `$limit`, `$skip`, `$sort`, `$select`, `$populate` | execution options |
//!
//! # Usage
//!
//! ```ignore
//! use axum_query_builder::{compile, BuilderConfig, ParsedQuery, RawParams};
//!
//! let config = BuilderConfig::default();
//! let params = RawParams::from([("age[$gte]", "18"), ("$limit", "10")]);
//! let ParsedQuery { filter, options } = compile(params, &config)?;
//! ```
//!
//! In an axum application, `ParsedQuery` is also an extractor (with
//! `BuilderConfig` in the router state), and [`middleware::parse_query`]
//! attaches it to GET requests as an extension.

pub mod builders;
pub mod classify;
pub mod coerce;
pub mod compiler;
pub mod config;
pub mod errors;
pub mod filter;
pub mod grammar;
pub mod middleware;
pub mod options;
pub mod params;

pub use classify::{classify, BracketParam, ClassifiedQuery};
pub use coerce::coerce;
pub use compiler::{compile, ParsedQuery};
pub use config::{BuilderConfig, BuilderOptions, DefaultSelect, EscapeMode};
pub use errors::{QueryError, QueryResult};
pub use filter::{ComparisonOperator, Filter};
pub use middleware::parse_query;
pub use options::{QueryOptions, SortDirection, SortSpec};
pub use params::{ParamValue, RawParams};
