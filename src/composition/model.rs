use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::animation::lerp::Lerp;
use crate::foundation::error::{SequenceError, SequenceResult};
use crate::foundation::time::Time;
use crate::phrase::hold::Hold;
use crate::phrase::ramp::RampTo;
use crate::timeline::sequence::Sequence;

/// Serializable description of a [`Sequence`].
///
/// This is the JSON-facing form used for presets and hand-edited motion. Building validates
/// every step first, so a successfully built sequence never contains clamped durations.
///
/// ```
/// use wavyte_sequence::SequenceDef;
///
/// let def: SequenceDef<f64> = SequenceDef::from_json(
///     r#"{ "initial": 0.0,
///          "steps": [ { "kind": "ramp", "to": 10.0, "duration": 2.0 },
///                     { "kind": "ramp", "to": 0.0, "duration": 1.0, "ease": "out_quad" } ] }"#,
/// ).unwrap();
/// let seq = def.build().unwrap();
/// assert_eq!(seq.duration(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct SequenceDef<T> {
    /// Value before the first step.
    pub initial: T,
    /// Steps in temporal order.
    #[serde(default)]
    pub steps: Vec<StepDef<T>>,
}

/// One step of a [`SequenceDef`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub enum StepDef<T> {
    /// [`Sequence::set`]: replace the initial value, or snap once motion exists.
    Set {
        /// Target value.
        value: T,
    },
    /// Hold `value` for `duration` (instant when omitted).
    Hold {
        /// Held value.
        value: T,
        /// Hold length.
        #[serde(default)]
        duration: Time,
    },
    /// Ramp from the current end value to `to`.
    Ramp {
        /// Target value.
        to: T,
        /// Ramp length.
        duration: Time,
        /// Easing curve (linear when omitted).
        #[serde(default)]
        ease: Ease,
    },
    /// Another sequence, flattened in place or nested as a single phrase.
    Sequence {
        /// The embedded sequence.
        def: SequenceDef<T>,
        /// Nest as one phrase instead of flattening.
        #[serde(default)]
        nested: bool,
    },
}

impl<T> SequenceDef<T> {
    /// Empty definition starting at `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            initial,
            steps: Vec::new(),
        }
    }

    /// Check that every step duration (recursively) is finite and non-negative.
    pub fn validate(&self) -> SequenceResult<()> {
        validate_steps(&self.steps, "steps")
    }
}

fn validate_steps<T>(steps: &[StepDef<T>], path: &str) -> SequenceResult<()> {
    for (idx, step) in steps.iter().enumerate() {
        let here = format!("{path}[{idx}]");
        match step {
            StepDef::Set { .. } => {}
            StepDef::Hold { duration, .. } => check_duration(*duration, &here, "hold")?,
            StepDef::Ramp { duration, .. } => check_duration(*duration, &here, "ramp")?,
            StepDef::Sequence { def, .. } => {
                validate_steps(&def.steps, &format!("{here}.def.steps"))?
            }
        }
    }
    Ok(())
}

fn check_duration(duration: Time, path: &str, kind: &str) -> SequenceResult<()> {
    if duration.is_finite() && duration >= 0.0 {
        Ok(())
    } else {
        Err(SequenceError::phrase(format!(
            "{path}: {kind} duration must be finite and >= 0, got {duration}"
        )))
    }
}

impl<T> SequenceDef<T>
where
    T: DeserializeOwned,
{
    /// Parse a definition from a JSON string.
    pub fn from_json(s: &str) -> SequenceResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| SequenceError::definition(format!("parse sequence JSON: {e}")))
    }

    /// Parse a definition from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SequenceResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SequenceError::definition(format!("parse sequence JSON: {e}")))
    }

    /// Parse a definition from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SequenceResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SequenceError::definition(format!("open sequence JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

impl<T> SequenceDef<T>
where
    T: Serialize,
{
    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> SequenceResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SequenceError::definition(format!("serialize sequence JSON: {e}")))
    }
}

impl<T> SequenceDef<T>
where
    T: Lerp + Clone + Send + Sync + 'static,
{
    /// Validate, then build the described sequence.
    #[tracing::instrument(level = "debug", skip(self), fields(steps = self.steps.len()))]
    pub fn build(&self) -> SequenceResult<Sequence<T>> {
        self.validate()?;
        Ok(self.build_unchecked())
    }

    fn build_unchecked(&self) -> Sequence<T> {
        let mut seq = Sequence::new(self.initial.clone());
        for step in &self.steps {
            match step {
                StepDef::Set { value } => {
                    seq.set(value.clone());
                }
                StepDef::Hold { value, duration } => {
                    seq.then::<Hold<T>>(value.clone(), *duration);
                }
                StepDef::Ramp { to, duration, ease } => {
                    seq.then_with::<RampTo<T>>(to.clone(), *duration, *ease);
                }
                StepDef::Sequence { def, nested } => {
                    let sub = def.build_unchecked();
                    if *nested {
                        seq.then_phrase(sub.as_phrase());
                    } else {
                        seq.then_sequence(&sub);
                    }
                }
            }
        }
        seq
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
