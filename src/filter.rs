//! # Filter Tree
//!
//! The assembled filter document handed to the datastore layer: an ordered
//! map of field predicates plus one optional `$or` disjunction list.
//!
//! The `$or` slot is a dedicated vector rather than an ordinary map entry,
//! so merging two fragments can only ever concatenate their disjunctions.
//! One fragment's `$or` silently replacing another's is unrepresentable.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Bracket comparison operators (`field[$op]` keys)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Greater than
    Gt,
    /// Greater than or equal
    Gte,
    /// Less than
    Lt,
    /// Less than or equal
    Lte,
    /// Value in list
    In,
    /// Value not in list
    Nin,
    /// Not equal
    Ne,
}

impl ComparisonOperator {
    /// Parse the `$op` token inside a bracket key
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "$gt" => Some(ComparisonOperator::Gt),
            "$gte" => Some(ComparisonOperator::Gte),
            "$lt" => Some(ComparisonOperator::Lt),
            "$lte" => Some(ComparisonOperator::Lte),
            "$in" => Some(ComparisonOperator::In),
            "$nin" => Some(ComparisonOperator::Nin),
            "$ne" => Some(ComparisonOperator::Ne),
            _ => None,
        }
    }

    /// Get the datastore operator token
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Gt => "$gt",
            ComparisonOperator::Gte => "$gte",
            ComparisonOperator::Lt => "$lt",
            ComparisonOperator::Lte => "$lte",
            ComparisonOperator::In => "$in",
            ComparisonOperator::Nin => "$nin",
            ComparisonOperator::Ne => "$ne",
        }
    }

    /// Whether the operator takes a comma-separated value list
    pub fn takes_list(&self) -> bool {
        matches!(self, ComparisonOperator::In | ComparisonOperator::Nin)
    }
}

/// A filter document under assembly
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    fields: Map<String, Value>,
    or: Vec<Value>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field predicate; a later insert for the same field wins
    pub fn insert(&mut self, field: impl Into<String>, predicate: Value) {
        self.fields.insert(field.into(), predicate);
    }

    /// Append one clause to the disjunction list
    pub fn push_or(&mut self, clause: Value) {
        self.or.push(clause);
    }

    /// Merge another fragment into this one.
    ///
    /// Field predicates shallow-merge with the incoming fragment winning on
    /// collision; `$or` lists concatenate, this filter's entries first.
    pub fn merge(&mut self, other: Filter) {
        for (field, predicate) in other.fields {
            self.fields.insert(field, predicate);
        }
        self.or.extend(other.or);
    }

    /// Merge an ordered sequence of fragments into one filter
    pub fn assemble<I: IntoIterator<Item = Filter>>(fragments: I) -> Filter {
        let mut merged = Filter::new();
        for fragment in fragments {
            merged.merge(fragment);
        }
        merged
    }

    /// Predicate for a field, if present
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The disjunction clauses accumulated so far
    pub fn or_clauses(&self) -> &[Value] {
        &self.or
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.or.is_empty()
    }

    /// Number of field predicates (excluding `$or`)
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// The final filter document. `$or` appears only when non-empty.
    pub fn into_value(self) -> Value {
        let mut doc = self.fields;
        if !self.or.is_empty() {
            doc.insert("$or".to_string(), Value::Array(self.or));
        }
        Value::Object(doc)
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let or_slot = usize::from(!self.or.is_empty());
        let mut map = serializer.serialize_map(Some(self.fields.len() + or_slot))?;
        for (field, predicate) in &self.fields {
            map.serialize_entry(field, predicate)?;
        }
        if !self.or.is_empty() {
            map.serialize_entry("$or", &self.or)?;
        }
        map.end()
    }
}

impl From<Filter> for Value {
    fn from(filter: Filter) -> Self {
        filter.into_value()
    }
}
