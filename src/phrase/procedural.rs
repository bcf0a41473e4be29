use std::fmt;
use std::sync::Arc;

use crate::foundation::time::{Time, sanitize_duration};
use crate::phrase::Phrase;

type ProgressFn<T> = dyn Fn(f64) -> T + Send + Sync;

/// A phrase computed by a caller-supplied function of normalized progress.
///
/// The function receives progress in `[0, 1]`; start and end values are the function evaluated at
/// `0` and `1`. Procedural phrases have no "from/to" form, so they are appended with
/// [`crate::Sequence::then_phrase`].
pub struct Procedural<T> {
    duration: Time,
    func: Arc<ProgressFn<T>>,
}

impl<T> Procedural<T> {
    /// Build a phrase spanning `duration` that evaluates `func(progress)`.
    pub fn new<F>(duration: Time, func: F) -> Self
    where
        F: Fn(f64) -> T + Send + Sync + 'static,
    {
        Self {
            duration: sanitize_duration(duration),
            func: Arc::new(func),
        }
    }
}

impl<T> Clone for Procedural<T> {
    fn clone(&self) -> Self {
        Self {
            duration: self.duration,
            func: Arc::clone(&self.func),
        }
    }
}

impl<T> fmt::Debug for Procedural<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Procedural")
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

impl<T> Phrase<T> for Procedural<T> {
    fn duration(&self) -> Time {
        self.duration
    }

    fn value_at(&self, time: Time) -> T {
        (self.func)(self.normalized_time(time))
    }

    fn start_value(&self) -> T {
        (self.func)(0.0)
    }

    fn end_value(&self) -> T {
        (self.func)(1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/phrase/procedural.rs"]
mod tests;
