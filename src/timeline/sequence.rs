use std::fmt;
use std::sync::Arc;

use crate::foundation::error::{SequenceError, SequenceResult};
use crate::foundation::time::{Time, loop_time, wrap_time};
use crate::phrase::hold::Hold;
use crate::phrase::{PhraseKind, PhraseRef};
use crate::timeline::nested::SequencePhrase;

/// Shared, read-only sequence handle.
pub type SequenceRef<T> = Arc<Sequence<T>>;

/// An ordered chain of phrases describing how one value changes over time.
///
/// A sequence describes motion without driving it: time is always supplied by the caller, and
/// sampling never mutates anything. Phrases are append-only and immutable once added, which is
/// what lets the total duration be cached and phrase handles be shared between sequences.
///
/// ```
/// use wavyte_sequence::{Hold, RampTo, Sequence};
///
/// let mut s = Sequence::new(0.0);
/// s.then::<RampTo<f64>>(10.0, 2.0)
///     .then::<Hold<f64>>(10.0, 0.0)
///     .then::<RampTo<f64>>(0.0, 1.0);
///
/// assert_eq!(s.duration(), 3.0);
/// assert_eq!(s.value_at(2.5), 5.0);
/// ```
pub struct Sequence<T> {
    phrases: Vec<PhraseRef<T>>,
    initial_value: T,
    duration: Time, // sum of phrase durations
}

impl<T> Sequence<T> {
    /// Create an empty sequence that sits at `initial_value`.
    pub fn new(initial_value: T) -> Self {
        Self {
            phrases: Vec::new(),
            initial_value,
            duration: 0.0,
        }
    }

    /// Total duration (cached sum of phrase durations).
    pub fn duration(&self) -> Time {
        self.duration
    }

    /// Number of phrases in the sequence.
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Return `true` when no phrases have been appended yet.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Phrases in temporal order.
    pub fn phrases(&self) -> &[PhraseRef<T>] {
        &self.phrases
    }

    /// Recompute the duration from the phrases, ignoring the cache.
    pub fn calc_duration(&self) -> Time {
        self.phrases.iter().map(|p| p.duration()).sum()
    }

    /// Append an already-built phrase.
    ///
    /// No continuity check is made: a phrase whose start differs from the current end value is
    /// a deliberate jump.
    pub fn then_phrase(&mut self, phrase: PhraseRef<T>) -> &mut Self {
        self.push(phrase);
        tracing::trace!(
            phrases = self.phrases.len(),
            duration = self.duration,
            "appended phrase"
        );
        self
    }

    /// Append every phrase of `next`, in order. Phrase handles are shared, not copied.
    pub fn then_sequence(&mut self, next: &Sequence<T>) -> &mut Self {
        for phrase in &next.phrases {
            self.push(Arc::clone(phrase));
        }
        tracing::trace!(
            appended = next.phrases.len(),
            phrases = self.phrases.len(),
            duration = self.duration,
            "flattened sequence"
        );
        self
    }

    /// Move this sequence behind a shared handle.
    pub fn into_shared(self) -> SequenceRef<T> {
        Arc::new(self)
    }

    /// Check that every phrase duration is finite and non-negative and that the cached duration
    /// matches the phrase sum.
    pub fn validate(&self) -> SequenceResult<()> {
        for (idx, phrase) in self.phrases.iter().enumerate() {
            let d = phrase.duration();
            if !d.is_finite() || d < 0.0 {
                return Err(SequenceError::validation(format!(
                    "phrase {idx} has invalid duration {d}"
                )));
            }
        }
        let recomputed = self.calc_duration();
        let tolerance = 1e-9 * recomputed.abs().max(1.0);
        if (recomputed - self.duration).abs() > tolerance {
            return Err(SequenceError::validation(format!(
                "cached duration {} does not match phrase sum {recomputed}",
                self.duration
            )));
        }
        Ok(())
    }

    fn push(&mut self, phrase: PhraseRef<T>) {
        self.duration += phrase.duration();
        self.phrases.push(phrase);
    }
}

impl<T> Sequence<T>
where
    T: Clone,
{
    /// Value before the first phrase begins.
    pub fn start_value(&self) -> T {
        self.initial_value.clone()
    }

    /// Value once every phrase has finished.
    pub fn end_value(&self) -> T {
        match self.phrases.last() {
            Some(last) => last.end_value(),
            None => self.initial_value.clone(),
        }
    }

    /// Sample the sequence at `time`.
    ///
    /// Times before `0` (and NaN) give the start value; times at or past the end give the end
    /// value. A query that lands exactly on a phrase boundary is answered by the following
    /// phrase at its local time `0`. Zero-length phrases placed at that instant win over the
    /// phrase after them; when several are stacked there, the last one is observed.
    pub fn value_at(&self, time: Time) -> T {
        if time.is_nan() || time < 0.0 {
            return self.initial_value.clone();
        }
        if time >= self.duration {
            return self.end_value();
        }

        let mut remaining = time;
        let mut iter = self.phrases.iter().peekable();
        while let Some(phrase) = iter.next() {
            let d = phrase.duration();
            if d > 0.0 {
                if d <= remaining {
                    remaining -= d;
                } else {
                    return phrase.value_at(remaining);
                }
            } else if remaining <= 0.0 {
                let stacked = iter.peek().is_some_and(|next| next.duration() <= 0.0);
                if !stacked {
                    return phrase.end_value();
                }
            }
        }
        // Only reachable through float drift between the cached and scanned sums.
        self.end_value()
    }

    /// Sample at `time` folded into one period of the sequence, for looping playback.
    ///
    /// Wraps occur at `inflection + k * duration()`; see [`wrap_time`].
    pub fn value_at_wrapped(&self, time: Time, inflection: Time) -> T {
        self.value_at(wrap_time(time, self.duration, inflection))
    }

    /// Sample with "play once, then loop back to `loop_from`" semantics; see [`loop_time`].
    pub fn value_at_looped(&self, time: Time, loop_from: Time) -> T {
        self.value_at(loop_time(time, self.duration, loop_from))
    }
}

impl<T> Sequence<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Set the end value of the sequence.
    ///
    /// With no phrases this replaces the initial value. Otherwise it appends a zero-length
    /// [`Hold`], so already-described motion is left untouched.
    pub fn set(&mut self, value: T) -> &mut Self {
        if self.phrases.is_empty() {
            self.initial_value = value;
            tracing::trace!("set initial value");
            self
        } else {
            self.then::<Hold<T>>(value, 0.0)
        }
    }

    /// Append a phrase of kind `K` moving from the current end value to `value` over
    /// `duration`, using the kind's default options.
    pub fn then<K>(&mut self, value: T, duration: Time) -> &mut Self
    where
        K: PhraseKind<T>,
    {
        self.then_with::<K>(value, duration, K::Options::default())
    }

    /// Like [`Sequence::then`], with explicit options for the phrase kind (e.g. an easing).
    pub fn then_with<K>(&mut self, value: T, duration: Time, options: K::Options) -> &mut Self
    where
        K: PhraseKind<T>,
    {
        let phrase = K::between(self.end_value(), value, duration, options);
        self.then_phrase(Arc::new(phrase))
    }

    /// Wrap a private copy of this sequence as a single phrase.
    ///
    /// Later changes to `self` do not affect the returned phrase.
    #[tracing::instrument(
        level = "debug",
        skip(self),
        fields(phrases = self.phrases.len(), duration = self.duration)
    )]
    pub fn as_phrase(&self) -> PhraseRef<T> {
        Arc::new(SequencePhrase::new(self.clone()))
    }
}

impl<T> Clone for Sequence<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut copy = Self {
            phrases: self.phrases.clone(),
            initial_value: self.initial_value.clone(),
            duration: 0.0,
        };
        copy.duration = copy.calc_duration();
        copy
    }
}

impl<T> fmt::Debug for Sequence<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("initial_value", &self.initial_value)
            .field("phrase_count", &self.phrases.len())
            .field("duration", &self.duration)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequence.rs"]
mod tests;
