//! Shared primitives: time helpers and the crate error type.

pub(crate) mod error;
pub(crate) mod time;
