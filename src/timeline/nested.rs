use crate::foundation::time::Time;
use crate::phrase::Phrase;
use crate::timeline::sequence::Sequence;

/// A phrase that plays a whole sequence.
///
/// The wrapped sequence is owned privately and never handed out again, so it is frozen for the
/// lifetime of the phrase. Built by [`Sequence::as_phrase`].
pub struct SequencePhrase<T> {
    sequence: Sequence<T>,
}

impl<T> SequencePhrase<T> {
    /// Take ownership of `sequence` and expose it as a phrase.
    pub fn new(sequence: Sequence<T>) -> Self {
        Self { sequence }
    }
}

impl<T> From<Sequence<T>> for SequencePhrase<T> {
    fn from(sequence: Sequence<T>) -> Self {
        Self::new(sequence)
    }
}

impl<T> Phrase<T> for SequencePhrase<T>
where
    T: Clone + Send + Sync,
{
    fn duration(&self) -> Time {
        self.sequence.duration()
    }

    fn value_at(&self, time: Time) -> T {
        self.sequence.value_at(time)
    }

    fn start_value(&self) -> T {
        self.sequence.start_value()
    }

    fn end_value(&self) -> T {
        self.sequence.end_value()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/nested.rs"]
mod tests;
