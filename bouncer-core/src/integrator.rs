//! Semi-implicit Euler stepping with per-axis boundary collision response.

use crate::engine::Particle;
use crate::params::SimParams;

/// Which end of the axis a boundary plane caps.
#[derive(Debug, Clone, Copy)]
enum Side {
    /// Plane at the small end of the axis (left wall, ceiling).
    Min,
    /// Plane at the large end of the axis (right wall, floor).
    Max,
}

/// Advance the particle by one fixed timestep.
///
/// Order is fixed: apply gravity to the velocity, move the position with
/// the *updated* velocity (semi-implicit Euler, for energy stability at a
/// fixed dt), then resolve each configured boundary plane per axis. Both
/// axes may collide in the same step (corner hit).
///
/// Total over floats: never panics, no error return. Non-finite input
/// propagates to non-finite output (NaN comparisons are false, so the
/// clamp simply does not fire).
pub fn step(particle: &mut Particle, params: &SimParams) {
    // Gravity is the only force; constant acceleration adds directly.
    particle.vel.y += params.gravity * params.dt;
    particle.pos += particle.vel * params.dt;

    let bounds = &params.bounds;
    let radius = particle.radius;
    if let Some(left) = bounds.left {
        resolve_axis(
            &mut particle.pos.x,
            &mut particle.vel.x,
            radius,
            left,
            Side::Min,
            params,
        );
    }
    if let Some(right) = bounds.right {
        resolve_axis(
            &mut particle.pos.x,
            &mut particle.vel.x,
            radius,
            right,
            Side::Max,
            params,
        );
    }
    if let Some(ceiling) = bounds.ceiling {
        resolve_axis(
            &mut particle.pos.y,
            &mut particle.vel.y,
            radius,
            ceiling,
            Side::Min,
            params,
        );
    }
    resolve_axis(
        &mut particle.pos.y,
        &mut particle.vel.y,
        radius,
        bounds.floor,
        Side::Max,
        params,
    );
}

/// Resolve one boundary plane on one axis.
///
/// If the leading edge (pos ± radius) crossed the plane: clamp the
/// position so the edge lies exactly on it (prevents sinking/tunneling),
/// reflect the normal velocity scaled by the damping coefficient, and
/// snap the rebound to zero when it falls below the sleep threshold.
/// The snap applies uniformly to every plane, walls included.
fn resolve_axis(
    pos: &mut f32,
    vel: &mut f32,
    radius: f32,
    boundary: f32,
    side: Side,
    params: &SimParams,
) {
    let penetrated = match side {
        Side::Min => *pos - radius < boundary,
        Side::Max => *pos + radius > boundary,
    };
    if !penetrated {
        return;
    }

    *pos = match side {
        Side::Min => boundary + radius,
        Side::Max => boundary - radius,
    };
    *vel = -*vel * params.damping;
    if vel.abs() < params.sleep_threshold {
        *vel = 0.0;
    }
}
