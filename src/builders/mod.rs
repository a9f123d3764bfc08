//! # Predicate Builders
//!
//! One builder per predicate family. Each consumes its slice of the
//! classified query and returns a [`Filter`](crate::filter::Filter)
//! fragment; the compiler merges the fragments in a fixed order.

pub mod equality;
pub mod membership;
pub mod negation;
pub mod or_query;
pub mod range;
pub mod search;

pub use equality::equality_fragment;
pub use membership::membership_fragment;
pub use negation::negation_fragment;
pub use or_query::or_fragment;
pub use range::range_fragment;
pub use search::search_fragments;
