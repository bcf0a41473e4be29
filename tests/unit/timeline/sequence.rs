use super::*;
use crate::animation::ease::Ease;
use crate::phrase::Phrase;
use crate::phrase::ops::{hold, ramp};
use crate::phrase::ramp::RampTo;

fn bounce() -> Sequence<f64> {
    let mut s = Sequence::new(0.0);
    s.then::<RampTo<f64>>(10.0, 2.0)
        .then::<Hold<f64>>(10.0, 0.0)
        .then::<RampTo<f64>>(0.0, 1.0);
    s
}

struct NegativePhrase;

impl Phrase<f64> for NegativePhrase {
    fn duration(&self) -> Time {
        -1.0
    }

    fn value_at(&self, _time: Time) -> f64 {
        0.0
    }

    fn start_value(&self) -> f64 {
        0.0
    }

    fn end_value(&self) -> f64 {
        0.0
    }
}

#[test]
fn bounce_samples_match_expected_values() {
    let s = bounce();
    assert_eq!(s.duration(), 3.0);
    assert_eq!(s.phrase_count(), 3);
    assert_eq!(s.value_at(-1.0), 0.0);
    assert_eq!(s.value_at(0.0), 0.0);
    assert_eq!(s.value_at(1.0), 5.0);
    assert_eq!(s.value_at(2.0), 10.0);
    assert_eq!(s.value_at(2.5), 5.0);
    assert_eq!(s.value_at(3.0), 0.0);
    assert_eq!(s.value_at(10.0), 0.0);
}

#[test]
fn empty_sequence_is_its_initial_value_everywhere() {
    let s = Sequence::new(3.0);
    assert!(s.is_empty());
    assert_eq!(s.duration(), 0.0);
    assert_eq!(s.start_value(), 3.0);
    assert_eq!(s.end_value(), 3.0);
    for t in [-2.0, 0.0, 5.0] {
        assert_eq!(s.value_at(t), 3.0);
    }
}

#[test]
fn set_on_empty_replaces_initial_value() {
    let mut s = Sequence::new(0.0);
    s.set(5.0);
    assert_eq!(s.duration(), 0.0);
    assert_eq!(s.phrase_count(), 0);
    assert_eq!(s.start_value(), 5.0);
    assert_eq!(s.end_value(), 5.0);
}

#[test]
fn set_after_motion_appends_instant_hold() {
    let mut s = Sequence::new(0.0);
    s.then::<RampTo<f64>>(10.0, 2.0);
    let before = s.duration();
    s.set(7.0);
    assert_eq!(s.duration() - before, 0.0);
    assert_eq!(s.phrase_count(), 2);
    assert_eq!(s.start_value(), 0.0);
    assert_eq!(s.end_value(), 7.0);
}

#[test]
fn instant_snap_is_visible_at_its_time() {
    let mut s = Sequence::new(0.0);
    s.then::<RampTo<f64>>(10.0, 2.0).set(4.0);
    assert_eq!(s.value_at(1.75), 8.75);
    assert_eq!(s.value_at(2.0), 4.0);

    s.then::<RampTo<f64>>(0.0, 1.0);
    assert_eq!(s.value_at(1.75), 8.75);
    assert_eq!(s.value_at(2.0), 4.0);
    assert_eq!(s.value_at(2.5), 2.0);
}

#[test]
fn boundary_resolves_into_next_phrase() {
    let mut s = Sequence::new(0.0);
    s.then::<RampTo<f64>>(10.0, 2.0)
        .then_phrase(ramp(50.0, 60.0, 1.0, Ease::Linear));
    assert_eq!(s.value_at(2.0), 50.0);
    assert_eq!(s.value_at(1.0), 5.0);
    assert_eq!(s.value_at(2.5), 55.0);
}

#[test]
fn zero_length_snap_wins_its_instant_over_a_jump() {
    let mut s = Sequence::new(0.0);
    s.then::<RampTo<f64>>(10.0, 2.0)
        .then_phrase(hold(99.0, 0.0))
        .then_phrase(ramp(50.0, 60.0, 1.0, Ease::Linear));
    assert_eq!(s.value_at(1.0), 5.0);
    assert_eq!(s.value_at(2.0), 99.0);
    assert_eq!(s.value_at(2.5), 55.0);
    assert_eq!(s.value_at(3.0), 60.0);
}

#[test]
fn stacked_snaps_resolve_to_the_last_one() {
    let mut s = Sequence::new(0.0);
    s.then::<RampTo<f64>>(10.0, 1.0)
        .then_phrase(hold(3.0, 0.0))
        .then_phrase(hold(4.0, 0.0))
        .then_phrase(ramp(-1.0, -2.0, 1.0, Ease::Linear));
    assert_eq!(s.value_at(1.0), 4.0);
    assert_eq!(s.value_at(1.5), -1.5);
}

#[test]
fn leading_snap_is_observed_at_zero() {
    let mut s = Sequence::new(0.0);
    s.then_phrase(hold(5.0, 0.0))
        .then_phrase(ramp(20.0, 30.0, 1.0, Ease::Linear));
    assert_eq!(s.value_at(-0.5), 0.0);
    assert_eq!(s.value_at(0.0), 5.0);
    assert_eq!(s.value_at(0.5), 25.0);
}

#[test]
fn then_starts_from_current_end_value() {
    let mut s = Sequence::new(1.0);
    s.then::<RampTo<f64>>(3.0, 1.0)
        .then_phrase(hold(8.0, 1.0))
        .then::<RampTo<f64>>(0.0, 2.0);
    let last = s.phrases().last().unwrap();
    assert_eq!(last.start_value(), 8.0);
    assert_eq!(last.end_value(), 0.0);
}

#[test]
fn then_with_forwards_options() {
    let mut s = Sequence::new(0.0);
    s.then_with::<RampTo<f64>>(1.0, 1.0, Ease::InQuad);
    assert_eq!(s.value_at(0.5), 0.25);
}

#[test]
fn raw_phrases_may_jump() {
    let mut s = Sequence::new(0.0);
    s.then_phrase(ramp(5.0, 6.0, 1.0, Ease::Linear));
    assert_eq!(s.value_at(-0.5), 0.0);
    assert_eq!(s.value_at(0.0), 5.0);
    assert_eq!(s.value_at(0.5), 5.5);
}

#[test]
fn duration_tracks_phrase_sum_after_every_mutation() {
    let mut s = Sequence::new(0.0);
    s.then::<RampTo<f64>>(1.0, 0.5);
    assert_eq!(s.duration(), s.calc_duration());
    s.set(2.0);
    assert_eq!(s.duration(), s.calc_duration());
    s.then_phrase(hold(2.0, 1.25));
    assert_eq!(s.duration(), s.calc_duration());
    let other = bounce();
    s.then_sequence(&other);
    assert_eq!(s.duration(), s.calc_duration());
    assert_eq!(s.duration(), 4.75);
    assert!(s.validate().is_ok());
}

#[test]
fn negative_ramp_duration_is_treated_as_instant() {
    let mut s = Sequence::new(0.0);
    s.then::<RampTo<f64>>(4.0, -3.0);
    assert_eq!(s.duration(), 0.0);
    assert_eq!(s.end_value(), 4.0);
    assert!(s.validate().is_ok());
}

#[test]
fn flatten_shares_phrase_handles() {
    let src = bounce();
    let mut dst = Sequence::new(0.0);
    dst.then_sequence(&src).then_sequence(&src);
    assert_eq!(dst.phrase_count(), 6);
    assert_eq!(dst.duration(), 6.0);
    assert!(Arc::ptr_eq(&dst.phrases()[0], &src.phrases()[0]));
    assert!(Arc::ptr_eq(&dst.phrases()[3], &src.phrases()[0]));
    assert_eq!(dst.value_at(4.0), 5.0);
}

#[test]
fn clone_recomputes_duration_and_is_independent() {
    let s = bounce();
    let mut copy = s.clone();
    assert_eq!(copy.duration(), 3.0);
    copy.then::<RampTo<f64>>(1.0, 1.0);
    assert_eq!(copy.duration(), 4.0);
    assert_eq!(s.duration(), 3.0);
    assert_eq!(s.phrase_count(), 3);
}

#[test]
fn nan_time_reads_start_value() {
    let s = bounce();
    assert_eq!(s.value_at(f64::NAN), 0.0);
}

#[test]
fn wrapped_queries_fold_into_one_period() {
    let s = bounce();
    assert_eq!(s.value_at_wrapped(0.5, 0.0), 2.5);
    assert_eq!(s.value_at_wrapped(3.5, 0.0), 2.5);
    assert_eq!(s.value_at_wrapped(-0.5, 0.0), 5.0);
    assert_eq!(s.value_at_wrapped(3.0, 0.0), 0.0);
    // Seam shifted to caller time 1.0.
    assert_eq!(s.value_at_wrapped(1.5, 1.0), 2.5);
}

#[test]
fn wrapped_queries_repeat_every_duration() {
    let s = bounce();
    for p in [0.0, 0.5, 2.25] {
        for t in [-1.25, 0.0, 0.75, 2.0, 2.5] {
            let base = s.value_at_wrapped(t, p);
            for k in [-2.0, 1.0, 3.0] {
                assert_eq!(s.value_at_wrapped(t + k * s.duration(), p), base);
            }
        }
    }
}

#[test]
fn wrapping_an_empty_sequence_is_constant() {
    let s = Sequence::new(1.5);
    assert_eq!(s.value_at_wrapped(12.0, 0.0), 1.5);
}

#[test]
fn looped_queries_return_to_loop_start() {
    let s = bounce();
    assert_eq!(s.value_at_looped(1.0, 2.0), 5.0);
    assert_eq!(s.value_at_looped(3.0, 2.0), 0.0);
    assert_eq!(s.value_at_looped(3.5, 2.0), 5.0);
    assert_eq!(s.value_at_looped(4.5, 2.0), 5.0);
}

#[test]
fn validate_rejects_negative_phrase_duration() {
    let mut s = Sequence::<f64>::new(0.0);
    s.then_phrase(Arc::new(NegativePhrase));
    let err = s.validate().unwrap_err();
    assert!(err.to_string().contains("invalid duration"));
}

#[test]
fn debug_shows_summary() {
    let dbg = format!("{:?}", bounce());
    assert!(dbg.contains("phrase_count: 3"));
    assert!(dbg.contains("duration: 3.0"));
}
