use std::sync::Arc;

use crate::animation::ease::Ease;
use crate::animation::lerp::Lerp;
use crate::foundation::time::Time;
use crate::phrase::PhraseRef;
use crate::phrase::hold::Hold;
use crate::phrase::meta::{Mix, Reverse};
use crate::phrase::procedural::Procedural;
use crate::phrase::ramp::RampTo;

/// Shared [`Hold`] of `value` for `duration`.
pub fn hold<T>(value: T, duration: Time) -> PhraseRef<T>
where
    T: Clone + Send + Sync + 'static,
{
    Arc::new(Hold::new(value, duration))
}

/// Shared [`RampTo`] from `start` to `end`.
pub fn ramp<T>(start: T, end: T, duration: Time, ease: Ease) -> PhraseRef<T>
where
    T: Lerp + Clone + Send + Sync + 'static,
{
    Arc::new(RampTo::with_ease(start, end, duration, ease))
}

/// Shared [`Procedural`] phrase.
pub fn procedural<T, F>(duration: Time, func: F) -> PhraseRef<T>
where
    T: 'static,
    F: Fn(f64) -> T + Send + Sync + 'static,
{
    Arc::new(Procedural::new(duration, func))
}

/// Shared [`Reverse`] of `inner`.
pub fn reverse<T: 'static>(inner: PhraseRef<T>) -> PhraseRef<T> {
    Arc::new(Reverse::new(inner))
}

/// Shared [`Mix`] of `a` and `b`.
pub fn mix<T>(a: PhraseRef<T>, b: PhraseRef<T>, factor: f64) -> PhraseRef<T>
where
    T: Lerp + 'static,
{
    Arc::new(Mix::new(a, b, factor))
}

#[cfg(test)]
#[path = "../../tests/unit/phrase/ops.rs"]
mod tests;
