use glam::Vec2;

/// A point mass in the simulation.
///
/// The y axis grows downward: gravity is a positive acceleration and the
/// floor sits at a larger y than the spawn point.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Half-extent used for boundary contact (leading edge = pos ± radius).
    pub radius: f32,
    /// Unused by the current force model (gravity is mass-independent),
    /// kept for force extensions.
    pub mass: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, mass: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            mass,
        }
    }
}

/// Axis-aligned boundary planes of the simulation region.
///
/// The floor is always present; the remaining planes are optional so the
/// same stepper covers both the open floor drop and the closed box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// y coordinate of the floor plane (maximum y).
    pub floor: f32,
    /// y coordinate of the ceiling plane (minimum y), if any.
    pub ceiling: Option<f32>,
    /// x coordinate of the left wall (minimum x), if any.
    pub left: Option<f32>,
    /// x coordinate of the right wall (maximum x), if any.
    pub right: Option<f32>,
}

impl Bounds {
    /// An open region with only a floor plane.
    pub fn floor_only(floor: f32) -> Self {
        Self {
            floor,
            ceiling: None,
            left: None,
            right: None,
        }
    }

    /// A closed box with all four planes present.
    pub fn boxed(left: f32, right: f32, ceiling: f32, floor: f32) -> Self {
        Self {
            floor,
            ceiling: Some(ceiling),
            left: Some(left),
            right: Some(right),
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        // The floor is at y = 10 meters
        Self::floor_only(10.0)
    }
}
