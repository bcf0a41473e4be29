use wavyte_sequence::{Ease, Hold, RampTo, Sequence, SequenceDef, procedural};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut wobble = Sequence::new(0.0);
    wobble
        .then_with::<RampTo<f64>>(1.0, 0.5, Ease::OutCubic)
        .then_phrase(procedural(1.0, |u| 1.0 + 0.25 * (u * std::f64::consts::TAU).sin()))
        .then::<Hold<f64>>(1.0, 0.25)
        .then_with::<RampTo<f64>>(0.0, 0.5, Ease::InCubic);
    wobble.validate()?;

    let def: SequenceDef<f64> =
        SequenceDef::from_json(include_str!("../tests/data/bounce.json"))?;
    let mut bounce = def.build()?;
    bounce.then_phrase(wobble.as_phrase());

    let fps = 12.0;
    let frames = (bounce.duration() * fps).ceil() as u32;
    for frame in 0..=frames {
        let t = f64::from(frame) / fps;
        println!(
            "frame {frame:3} t={t:5.2}s value={:7.3} looped={:7.3}",
            bounce.value_at(t),
            bounce.value_at_wrapped(t + 1.0, 0.0)
        );
    }

    Ok(())
}
