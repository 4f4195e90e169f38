pub mod engine;
pub mod error;
pub mod integrator;
pub mod params;
pub mod runner;

pub use engine::{Bounds, Particle};
pub use error::{Error, Result};
pub use glam::Vec2;
pub use integrator::step;
pub use params::SimParams;
pub use runner::{Frame, Pacing, Runner};
