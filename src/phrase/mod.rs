//! The phrase capability consumed by sequences, plus the stock phrase kinds.
//!
//! A phrase is an immutable, time-bounded function of local time. Once a phrase is appended to a
//! [`crate::Sequence`] it is only ever read, so handles are shared freely through [`PhraseRef`].

use std::sync::Arc;

use crate::foundation::time::Time;

pub(crate) mod hold;
pub(crate) mod meta;
pub(crate) mod ops;
pub(crate) mod procedural;
pub(crate) mod ramp;

/// A time-bounded, immutable unit that produces a value from local elapsed time.
///
/// `value_at` is well-defined for `time` in `[0, duration]`; what a phrase returns outside that
/// window is up to the implementation. Sequences never query outside it.
pub trait Phrase<T>: Send + Sync {
    /// Fixed length of this phrase. Must not change after construction.
    fn duration(&self) -> Time;

    /// Value at local `time`.
    fn value_at(&self, time: Time) -> T;

    /// Value at local time `0`.
    fn start_value(&self) -> T;

    /// Value at local time `duration`.
    fn end_value(&self) -> T;

    /// Local `time` as progress in `[0, 1]`. Zero-length phrases are always complete.
    fn normalized_time(&self, time: Time) -> f64 {
        let duration = self.duration();
        if duration > 0.0 {
            (time / duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Shared, immutable phrase handle.
pub type PhraseRef<T> = Arc<dyn Phrase<T>>;

/// A phrase kind that can be built as a transition between two values.
///
/// This is the factory used by [`crate::Sequence::then`]: the sequence supplies its current end
/// value as `start`, so phrases appended this way begin exactly where the sequence left off.
pub trait PhraseKind<T>: Phrase<T> + Sized + 'static {
    /// Extra construction parameters (for example an easing curve).
    type Options: Default;

    /// Build a phrase of this kind spanning `duration` from `start` toward `end`.
    fn between(start: T, end: T, duration: Time, options: Self::Options) -> Self;
}
