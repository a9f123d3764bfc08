//! # Builder Configuration
//!
//! Registration-time options for the query compiler. Validated once when the
//! builder is registered with the host application, then treated as immutable
//! for the process lifetime.

use serde::Deserialize;

use crate::errors::{QueryError, QueryResult};

/// Default record limit when `$limit` is absent and none is configured
pub const DEFAULT_LIMIT: u64 = 50;

/// Default projection when `$select` is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultSelect {
    /// Return all fields
    #[default]
    All,
    /// Return only the document identifier
    IdOnly,
}

/// How search text is escaped before it becomes a regex pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// Escape only the first `+` and the first `-`, matching the historical
    /// behavior of the query mini-language
    #[default]
    FirstPlusMinus,
    /// Escape every regex metacharacter so search text matches literally
    AllMetacharacters,
}

/// Raw registration options, as supplied by the host application
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuilderOptions {
    /// Record limit applied when `$limit` is absent
    #[serde(default)]
    pub default_limit: Option<i64>,

    /// Default projection: `"all"` or `"_id"`
    #[serde(default)]
    pub default_select_field: Option<String>,

    /// Whether request version 2 forces `_id`-only projection
    #[serde(default)]
    pub legacy_version_select: Option<bool>,

    /// Search escaping: `"first"` (first `+`/`-` only) or `"full"`
    #[serde(default)]
    pub escape_mode: Option<String>,
}

/// Validated, process-wide compiler configuration
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    pub default_limit: u64,
    pub default_select: DefaultSelect,
    pub legacy_version_select: bool,
    pub escape_mode: EscapeMode,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            default_select: DefaultSelect::All,
            legacy_version_select: true,
            escape_mode: EscapeMode::FirstPlusMinus,
        }
    }
}

impl BuilderConfig {
    /// Validate raw registration options into a config.
    ///
    /// A validation failure here is fatal to registration; it is never a
    /// per-request error.
    pub fn from_options(options: BuilderOptions) -> QueryResult<Self> {
        let default_limit = match options.default_limit {
            None => DEFAULT_LIMIT,
            Some(n) if n >= 0 => n as u64,
            Some(n) => {
                return Err(QueryError::Config(format!(
                    "default_limit must be >= 0, got {}",
                    n
                )))
            }
        };

        let default_select = match options.default_select_field.as_deref() {
            None | Some("all") => DefaultSelect::All,
            Some("_id") => DefaultSelect::IdOnly,
            Some(other) => {
                return Err(QueryError::Config(format!(
                    "default_select_field must be \"_id\" or \"all\", got {:?}",
                    other
                )))
            }
        };

        let escape_mode = match options.escape_mode.as_deref() {
            None | Some("first") => EscapeMode::FirstPlusMinus,
            Some("full") => EscapeMode::AllMetacharacters,
            Some(other) => {
                return Err(QueryError::Config(format!(
                    "escape_mode must be \"first\" or \"full\", got {:?}",
                    other
                )))
            }
        };

        Ok(Self {
            default_limit,
            default_select,
            legacy_version_select: options.legacy_version_select.unwrap_or(true),
            escape_mode,
        })
    }
}
