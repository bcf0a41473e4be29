//! Serde boundary model for describing sequences as data.

pub(crate) mod model;
