//! # Raw Request Parameters
//!
//! The decoded query-string pairs, as an ordered multimap. A key that repeats
//! in the query string groups into a [`ParamValue::Many`], preserving the
//! order of first occurrence. The classifier consumes this structure by
//! value, so no compilation ever observes another request's parameters.

/// Value of one query-string key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Key appeared once
    Single(String),
    /// Key repeated; values in query-string order
    Many(Vec<String>),
}

impl ParamValue {
    /// First value for this key
    pub fn first(&self) -> &str {
        match self {
            ParamValue::Single(v) => v,
            ParamValue::Many(vs) => vs.first().map(String::as_str).unwrap_or(""),
        }
    }

    /// Iterate all values for this key
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            ParamValue::Single(v) => std::slice::from_ref(v).iter(),
            ParamValue::Many(vs) => vs.iter(),
        }
        .map(String::as_str)
    }

    fn push(&mut self, value: String) {
        match self {
            ParamValue::Single(existing) => {
                let first = std::mem::take(existing);
                *self = ParamValue::Many(vec![first, value]);
            }
            ParamValue::Many(vs) => vs.push(value),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Single(v.to_string())
    }
}

/// Ordered mapping of query-string keys to values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams(Vec<(String, ParamValue)>);

impl RawParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from decoded `key=value` pairs, grouping repeated keys
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            params.insert(key, value);
        }
        params
    }

    /// Append one decoded pair
    pub fn insert(&mut self, key: String, value: String) {
        if let Some(position) = self.0.iter().position(|(k, _)| *k == key) {
            self.0[position].1.push(value);
        } else {
            self.0.push((key, ParamValue::Single(value)));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Consume into the underlying ordered pairs
    pub(crate) fn into_pairs(self) -> Vec<(String, ParamValue)> {
        self.0
    }
}

impl FromIterator<(String, String)> for RawParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for RawParams {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::from_pairs(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }
}
