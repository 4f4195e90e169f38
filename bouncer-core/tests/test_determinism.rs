//! Determinism tests - same parameters must produce identical traces.

use bouncer_core::engine::{Bounds, Particle};
use bouncer_core::params::SimParams;
use bouncer_core::runner::Runner;
use bouncer_core::tests::test_helpers::reference_drop;
use glam::Vec2;

#[test]
fn test_reference_drop_determinism() {
    let (particle, params) = reference_drop();
    let mut first = Runner::new(particle.clone(), params);
    let mut second = Runner::new(particle, params);

    let trace_a = first.trace(300, 10);
    let trace_b = second.trace(300, 10);

    // Bit-equal, not just approximately equal.
    assert_eq!(trace_a, trace_b);
}

#[test]
fn test_box_bounce_determinism() {
    let params = SimParams {
        bounds: Bounds::boxed(0.0, 20.0, 0.0, 10.0),
        ..SimParams::default()
    };
    let particle = Particle::new(Vec2::new(2.0, 2.0), Vec2::new(13.0, -7.0), 0.5, 1.0);

    let traces: Vec<_> = (0..5)
        .map(|_| Runner::new(particle.clone(), params).trace(1000, 1))
        .collect();

    for trace in &traces[1..] {
        assert_eq!(&traces[0], trace);
    }
}
