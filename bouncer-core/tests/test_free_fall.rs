//! Unit tests for gravity-only free fall (no boundary contact).

use bouncer_core::engine::{Bounds, Particle};
use bouncer_core::integrator::step;
use bouncer_core::params::SimParams;
use bouncer_core::tests::test_helpers::approx_eq_f32;
use glam::Vec2;

fn far_floor_params() -> SimParams {
    SimParams {
        bounds: Bounds::floor_only(1.0e6),
        ..SimParams::default()
    }
}

#[test]
fn test_velocity_gains_gravity_dt_each_step() {
    let params = far_floor_params();
    let mut particle = Particle::new(Vec2::ZERO, Vec2::new(2.0, 0.0), 0.5, 1.0);

    // Replicate the recurrence with the same f32 operations: the stepper
    // must match it bit for bit.
    let dv = params.gravity * params.dt;
    let mut expected_vy = 0.0f32;
    for _ in 0..50 {
        step(&mut particle, &params);
        expected_vy += dv;
        assert_eq!(particle.vel.y, expected_vy);
    }
}

#[test]
fn test_position_follows_post_update_velocity() {
    let params = far_floor_params();
    let mut particle = Particle::new(Vec2::ZERO, Vec2::ZERO, 0.5, 1.0);

    // Semi-implicit Euler: y_{n+1} = y_n + v_{n+1} * dt, with v already
    // incremented by gravity this frame.
    let dv = params.gravity * params.dt;
    let mut expected_vy = 0.0f32;
    let mut expected_y = 0.0f32;
    for _ in 0..100 {
        step(&mut particle, &params);
        expected_vy += dv;
        expected_y += expected_vy * params.dt;
        assert!(approx_eq_f32(particle.pos.y, expected_y, 1e-5));
    }
}

#[test]
fn test_velocity_increases_monotonically() {
    let params = far_floor_params();
    let mut particle = Particle::new(Vec2::ZERO, Vec2::ZERO, 0.5, 1.0);

    let mut prev_vy = particle.vel.y;
    for _ in 0..200 {
        step(&mut particle, &params);
        assert!(particle.vel.y > prev_vy);
        prev_vy = particle.vel.y;
    }
}

#[test]
fn test_horizontal_velocity_unchanged_without_walls() {
    let params = far_floor_params();
    let mut particle = Particle::new(Vec2::ZERO, Vec2::new(2.0, 0.0), 0.5, 1.0);

    let mut expected_x = 0.0f32;
    for _ in 0..100 {
        step(&mut particle, &params);
        expected_x += 2.0 * params.dt;
        assert_eq!(particle.vel.x, 2.0);
        assert!(approx_eq_f32(particle.pos.x, expected_x, 1e-5));
    }
}

#[test]
fn test_non_finite_input_propagates_without_panic() {
    let params = SimParams::default();
    let mut particle = Particle::new(Vec2::new(f32::NAN, f32::NAN), Vec2::ZERO, 0.5, 1.0);

    // Total function: must not panic, NaN stays NaN.
    step(&mut particle, &params);
    assert!(particle.pos.x.is_nan());
    assert!(particle.pos.y.is_nan());

    // Infinite velocity overshoots the floor; the clamp pulls the
    // position back but the reflected velocity stays infinite.
    let mut flying = Particle::new(Vec2::ZERO, Vec2::new(0.0, f32::INFINITY), 0.5, 1.0);
    step(&mut flying, &params);
    assert!(!flying.vel.y.is_finite());
}
