use crate::timeline::sequence::{Sequence, SequenceRef};

/// Start a new sequence at `initial_value`.
pub fn sequence<T>(initial_value: T) -> Sequence<T> {
    Sequence::new(initial_value)
}

/// Start a new empty sequence behind a shared handle.
pub fn shared_sequence<T>(initial_value: T) -> SequenceRef<T> {
    Sequence::new(initial_value).into_shared()
}

/// Chain several sequences end to end.
///
/// The result starts at the first sequence's start value and contains every phrase of every
/// input, in order. Returns `None` when `parts` is empty.
pub fn concat<'a, T, I>(parts: I) -> Option<Sequence<T>>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a Sequence<T>>,
{
    let mut iter = parts.into_iter();
    let mut out = iter.next()?.clone();
    for next in iter {
        out.then_sequence(next);
    }
    Some(out)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/ops.rs"]
mod tests;
