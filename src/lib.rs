//! Composable, time-queryable phrase sequences.
//!
//! A [`Sequence`] describes how one value changes over time as an ordered chain of immutable
//! [`Phrase`]s (ramps, holds, procedural curves, or other sequences). Callers build it once and
//! then sample it with their own clock, typically once per rendered frame:
//!
//! ```
//! use wavyte_sequence::{Ease, Hold, RampTo, Sequence};
//!
//! let mut opacity = Sequence::new(0.0);
//! opacity
//!     .then_with::<RampTo<f64>>(1.0, 0.5, Ease::OutCubic)
//!     .then::<Hold<f64>>(1.0, 2.0)
//!     .then::<RampTo<f64>>(0.0, 0.5);
//!
//! assert_eq!(opacity.value_at(-1.0), 0.0);
//! assert_eq!(opacity.value_at(1.0), 1.0);
//! assert_eq!(opacity.value_at(99.0), 0.0);
//! ```
//!
//! Design constraints:
//!
//! - **Caller-owned time**: sequences never track or advance time themselves.
//! - **Total sampling**: out-of-range times clamp to the start or end value; sampling never fails.
//! - **Append-only, shared phrases**: phrases are immutable once appended and shared via `Arc`,
//!   so flattening and copying sequences is cheap and nesting via [`Sequence::as_phrase`] is
//!   isolated from later edits.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod composition;
mod foundation;
mod phrase;
mod timeline;

pub use animation::ease::Ease;
pub use animation::lerp::Lerp;
pub use composition::model::{SequenceDef, StepDef};
pub use foundation::error::{SequenceError, SequenceResult};
pub use foundation::time::{Time, loop_time, wrap_time};
pub use phrase::hold::Hold;
pub use phrase::meta::{Mix, Reverse};
pub use phrase::ops::{hold, mix, procedural, ramp, reverse};
pub use phrase::procedural::Procedural;
pub use phrase::ramp::RampTo;
pub use phrase::{Phrase, PhraseKind, PhraseRef};
pub use timeline::nested::SequencePhrase;
pub use timeline::ops::{concat, sequence, shared_sequence};
pub use timeline::sequence::{Sequence, SequenceRef};
