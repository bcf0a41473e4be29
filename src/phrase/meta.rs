//! Phrases built from other phrases.

use crate::animation::lerp::Lerp;
use crate::foundation::time::Time;
use crate::phrase::{Phrase, PhraseRef};

/// Plays an inner phrase backwards.
#[derive(Clone)]
pub struct Reverse<T> {
    inner: PhraseRef<T>,
}

impl<T> Reverse<T> {
    /// Reverse `inner`; the result has the same duration.
    pub fn new(inner: PhraseRef<T>) -> Self {
        Self { inner }
    }
}

impl<T> Phrase<T> for Reverse<T> {
    fn duration(&self) -> Time {
        self.inner.duration()
    }

    fn value_at(&self, time: Time) -> T {
        let duration = self.inner.duration().max(0.0);
        self.inner.value_at((duration - time).max(0.0).min(duration))
    }

    fn start_value(&self) -> T {
        self.inner.end_value()
    }

    fn end_value(&self) -> T {
        self.inner.start_value()
    }
}

/// Blends two phrases with a fixed mix factor.
///
/// Runs for the longer of the two inputs; the shorter one holds its end value once it finishes.
#[derive(Clone)]
pub struct Mix<T> {
    a: PhraseRef<T>,
    b: PhraseRef<T>,
    factor: f64,
}

impl<T> Mix<T> {
    /// Blend `a` toward `b` by `factor` (`0` is all `a`, `1` is all `b`).
    ///
    /// The factor is clamped into `[0, 1]`; NaN counts as `0`.
    pub fn new(a: PhraseRef<T>, b: PhraseRef<T>, factor: f64) -> Self {
        let factor = if factor.is_nan() {
            0.0
        } else {
            factor.clamp(0.0, 1.0)
        };
        Self { a, b, factor }
    }

    /// Effective mix factor.
    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl<T> Phrase<T> for Mix<T>
where
    T: Lerp,
{
    fn duration(&self) -> Time {
        self.a.duration().max(self.b.duration())
    }

    fn value_at(&self, time: Time) -> T {
        let av = self.a.value_at(time.min(self.a.duration()));
        let bv = self.b.value_at(time.min(self.b.duration()));
        T::lerp(&av, &bv, self.factor)
    }

    fn start_value(&self) -> T {
        T::lerp(&self.a.start_value(), &self.b.start_value(), self.factor)
    }

    fn end_value(&self) -> T {
        T::lerp(&self.a.end_value(), &self.b.end_value(), self.factor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/phrase/meta.rs"]
mod tests;
