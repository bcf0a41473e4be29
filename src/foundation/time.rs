/// Elapsed time in seconds.
///
/// No unit conversion happens anywhere in this crate; callers may feed any consistent unit.
pub type Time = f64;

/// Fold `time` into `[0, duration)` with wrap points at `inflection + k * duration`.
///
/// The result is periodic in `duration` for every `inflection`. An inflection of `0` wraps at the
/// sequence start; a non-zero inflection shifts where the seam lands on the caller's clock (the
/// caller time `inflection` maps to sequence time `0`).
///
/// Zero, negative, or non-finite durations leave `time` untouched so the caller's clamping still
/// applies.
pub fn wrap_time(time: Time, duration: Time, inflection: Time) -> Time {
    if !time.is_finite() || !duration.is_finite() || duration <= 0.0 {
        return time;
    }
    let inflection = if inflection.is_finite() {
        inflection
    } else {
        0.0
    };
    (time - inflection).rem_euclid(duration)
}

/// Map `time` so playback runs once to `duration`, then repeats `[loop_from, duration)` forever.
///
/// Times up to and including `duration` pass through unchanged (including negative times).
/// `loop_from` is clamped into `[0, duration]`; an empty loop window holds at `duration`.
pub fn loop_time(time: Time, duration: Time, loop_from: Time) -> Time {
    if !time.is_finite() || !duration.is_finite() || duration <= 0.0 || time <= duration {
        return time;
    }
    let from = if loop_from.is_nan() {
        0.0
    } else {
        loop_from.clamp(0.0, duration)
    };
    let span = duration - from;
    if span <= 0.0 {
        return duration;
    }
    from + (time - duration).rem_euclid(span)
}

/// Coerce a caller-supplied duration into a usable, non-negative finite span.
///
/// NaN, infinite, and negative values collapse to `0` so cached sequence durations stay finite.
pub(crate) fn sanitize_duration(duration: Time) -> Time {
    if duration.is_finite() && duration >= 0.0 {
        duration
    } else {
        tracing::warn!(duration, "phrase duration is not a finite non-negative value; using 0");
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/time.rs"]
mod tests;
