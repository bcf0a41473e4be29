//! Value interpolation and easing used by interpolating phrases.

pub(crate) mod ease;
pub(crate) mod lerp;
