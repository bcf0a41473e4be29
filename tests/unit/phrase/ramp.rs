use super::*;

#[test]
fn linear_ramp_interpolates() {
    let r = RampTo::new(0.0, 10.0, 2.0);
    assert_eq!(r.value_at(0.0), 0.0);
    assert_eq!(r.value_at(0.5), 2.5);
    assert_eq!(r.value_at(1.0), 5.0);
    assert_eq!(r.value_at(2.0), 10.0);
}

#[test]
fn endpoints_are_exact_for_awkward_values() {
    let r = RampTo::new(0.1, 0.3, 0.7);
    assert_eq!(r.value_at(0.0), 0.1);
    assert_eq!(r.value_at(0.7), 0.3);
    assert_eq!(r.start_value(), 0.1);
    assert_eq!(r.end_value(), 0.3);
}

#[test]
fn eased_ramp_follows_curve() {
    let r = RampTo::with_ease(0.0, 1.0, 1.0, Ease::InQuad);
    assert_eq!(r.value_at(0.5), 0.25);
    assert_eq!(r.ease(), Ease::InQuad);
}

#[test]
fn zero_length_ramp_is_its_end_value() {
    let r = RampTo::new(3.0, 8.0, 0.0);
    assert_eq!(r.value_at(0.0), 8.0);
}

#[test]
fn out_of_span_queries_clamp() {
    let r = RampTo::new(0.0, 4.0, 1.0);
    assert_eq!(r.value_at(-1.0), 0.0);
    assert_eq!(r.value_at(9.0), 4.0);
}

#[test]
fn between_uses_options_as_ease() {
    let r = <RampTo<f64> as PhraseKind<f64>>::between(2.0, 4.0, 1.0, Ease::OutCubic);
    assert_eq!(r.ease(), Ease::OutCubic);
    assert_eq!(r.start_value(), 2.0);
}

#[test]
fn ramps_vectors() {
    let r = RampTo::new(kurbo::Vec2::new(0.0, 0.0), kurbo::Vec2::new(2.0, 4.0), 1.0);
    assert_eq!(r.value_at(0.5), kurbo::Vec2::new(1.0, 2.0));
}
