use crate::engine::Bounds;
use crate::error::{Error, Result};

/// Immutable per-run simulation parameters.
///
/// Defaults mirror the reference drop: Earth gravity, a 60 FPS timestep
/// and a fairly bouncy restitution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    /// Constant downward acceleration (m/s^2).
    pub gravity: f32,
    /// Fixed timestep (s).
    pub dt: f32,
    /// Fraction of velocity magnitude kept after a bounce
    /// (1.0 = superball, 0.0 = fully inelastic).
    pub damping: f32,
    /// Reflected speeds below this snap to zero, so a settling particle
    /// does not micro-bounce forever on floating-point residue.
    pub sleep_threshold: f32,
    pub bounds: Bounds,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            dt: 0.016, // 1.0 / 60.0
            damping: 0.8,
            sleep_threshold: 0.5,
            bounds: Bounds::default(),
        }
    }
}

impl SimParams {
    /// Check the parameters before a run.
    ///
    /// `step` itself never validates (it is total over floats); callers
    /// that accept external input run this once up front.
    pub fn validate(&self) -> Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(Error::InvalidParam("dt must be finite and > 0".into()));
        }
        if !self.gravity.is_finite() {
            return Err(Error::InvalidParam("gravity must be finite".into()));
        }
        if !self.damping.is_finite() || !(0.0..=1.0).contains(&self.damping) {
            return Err(Error::InvalidParam(
                "damping must be finite and within [0, 1]".into(),
            ));
        }
        if !self.sleep_threshold.is_finite() || self.sleep_threshold < 0.0 {
            return Err(Error::InvalidParam(
                "sleep threshold must be finite and >= 0".into(),
            ));
        }
        if !self.bounds.floor.is_finite() {
            return Err(Error::InvalidBounds("floor must be finite".into()));
        }
        if let Some(ceiling) = self.bounds.ceiling {
            if !ceiling.is_finite() || ceiling >= self.bounds.floor {
                return Err(Error::InvalidBounds(
                    "ceiling must be finite and below the floor".into(),
                ));
            }
        }
        if let Some(left) = self.bounds.left {
            if !left.is_finite() {
                return Err(Error::InvalidBounds("left wall must be finite".into()));
            }
        }
        if let Some(right) = self.bounds.right {
            if !right.is_finite() {
                return Err(Error::InvalidBounds("right wall must be finite".into()));
            }
        }
        if let (Some(left), Some(right)) = (self.bounds.left, self.bounds.right) {
            if left >= right {
                return Err(Error::InvalidBounds(
                    "left wall must be left of the right wall".into(),
                ));
            }
        }
        Ok(())
    }
}
