//! German grammar support: inflection tables and separable verbs.

pub mod inflections;
pub mod separable;

pub use inflections::{InflectionSet, inflections};
pub use separable::{SEPARABLE_PREFIXES, search_targets, split_separable};
