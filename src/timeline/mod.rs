//! Sequences of phrases and their nesting adapter.

pub(crate) mod nested;
pub(crate) mod ops;
pub(crate) mod sequence;
