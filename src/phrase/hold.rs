use crate::foundation::time::{Time, sanitize_duration};
use crate::phrase::{Phrase, PhraseKind};

/// Holds a constant value for its whole span.
///
/// A zero-length hold is an instantaneous snap: it contributes no time, but moves the sequence's
/// end value to `value`.
#[derive(Clone, Debug, PartialEq)]
pub struct Hold<T> {
    duration: Time,
    value: T,
}

impl<T> Hold<T> {
    /// Hold `value` for `duration`.
    pub fn new(value: T, duration: Time) -> Self {
        Self {
            duration: sanitize_duration(duration),
            value,
        }
    }

    /// The held value.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> Phrase<T> for Hold<T>
where
    T: Clone + Send + Sync,
{
    fn duration(&self) -> Time {
        self.duration
    }

    fn value_at(&self, _time: Time) -> T {
        self.value.clone()
    }

    fn start_value(&self) -> T {
        self.value.clone()
    }

    fn end_value(&self) -> T {
        self.value.clone()
    }
}

impl<T> PhraseKind<T> for Hold<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Options = ();

    // Holds jump straight to `end`; the previous value is intentionally discarded.
    fn between(_start: T, end: T, duration: Time, _options: ()) -> Self {
        Self::new(end, duration)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/phrase/hold.rs"]
mod tests;
