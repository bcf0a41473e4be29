use crate::animation::ease::Ease;
use crate::animation::lerp::Lerp;
use crate::foundation::time::{Time, sanitize_duration};
use crate::phrase::{Phrase, PhraseKind};

/// Interpolates from a start value to an end value over its span, shaped by an [`Ease`].
#[derive(Clone, Debug, PartialEq)]
pub struct RampTo<T> {
    duration: Time,
    start: T,
    end: T,
    ease: Ease,
}

impl<T> RampTo<T> {
    /// Linear ramp from `start` to `end` over `duration`.
    pub fn new(start: T, end: T, duration: Time) -> Self {
        Self::with_ease(start, end, duration, Ease::Linear)
    }

    /// Eased ramp from `start` to `end` over `duration`.
    pub fn with_ease(start: T, end: T, duration: Time, ease: Ease) -> Self {
        Self {
            duration: sanitize_duration(duration),
            start,
            end,
            ease,
        }
    }

    /// Easing curve applied to progress.
    pub fn ease(&self) -> Ease {
        self.ease
    }
}

impl<T> Phrase<T> for RampTo<T>
where
    T: Lerp + Clone + Send + Sync,
{
    fn duration(&self) -> Time {
        self.duration
    }

    fn value_at(&self, time: Time) -> T {
        let progress = self.ease.apply(self.normalized_time(time));
        // Endpoints are returned verbatim so chained phrases meet exactly.
        if progress <= 0.0 {
            self.start.clone()
        } else if progress >= 1.0 {
            self.end.clone()
        } else {
            T::lerp(&self.start, &self.end, progress)
        }
    }

    fn start_value(&self) -> T {
        self.start.clone()
    }

    fn end_value(&self) -> T {
        self.end.clone()
    }
}

impl<T> PhraseKind<T> for RampTo<T>
where
    T: Lerp + Clone + Send + Sync + 'static,
{
    type Options = Ease;

    fn between(start: T, end: T, duration: Time, ease: Ease) -> Self {
        Self::with_ease(start, end, duration, ease)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/phrase/ramp.rs"]
mod tests;
