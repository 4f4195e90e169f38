//! Frame loop driving the stepper: explicit termination, swappable
//! pacing, and per-frame trace sampling.

use crate::engine::Particle;
use crate::integrator::step;
use crate::params::SimParams;
use glam::Vec2;
use log::debug;
use std::thread;
use std::time::Duration;

/// One observed simulation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Zero-based index of the frame that was just simulated.
    pub index: u32,
    /// Elapsed simulated time at this frame: index * dt.
    pub time: f32,
    pub pos: Vec2,
    pub vel: Vec2,
}

/// How the loop paces real time between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pacing {
    /// Sleep one timestep per frame, for watching live output.
    Realtime,
    /// No sleep, for batch runs and tests.
    Batch,
}

impl Pacing {
    fn pace(self, dt: f32) {
        if self == Pacing::Realtime {
            thread::sleep(Duration::from_secs_f32(dt));
        }
    }
}

/// Owns the particle and parameters and advances them frame by frame.
///
/// Runs always terminate after an explicit frame count; there is no
/// unconditional loop. The particle has a single writer (the stepper)
/// per frame; observers see the state only between steps.
#[derive(Debug)]
pub struct Runner {
    particle: Particle,
    params: SimParams,
    pacing: Pacing,
    frame: u32,
}

impl Runner {
    pub fn new(particle: Particle, params: SimParams) -> Self {
        Self {
            particle,
            params,
            pacing: Pacing::Batch,
            frame: 0,
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn particle(&self) -> &Particle {
        &self.particle
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Number of frames simulated so far.
    pub fn frames_done(&self) -> u32 {
        self.frame
    }

    /// Simulated time covered so far.
    pub fn elapsed(&self) -> f32 {
        self.frame as f32 * self.params.dt
    }

    /// Advance one frame and return its sample, pacing afterwards.
    pub fn step_frame(&mut self) -> Frame {
        step(&mut self.particle, &self.params);
        let frame = Frame {
            index: self.frame,
            time: self.frame as f32 * self.params.dt,
            pos: self.particle.pos,
            vel: self.particle.vel,
        };
        self.frame += 1;
        self.pacing.pace(self.params.dt);
        frame
    }

    /// Run `frames` frames, invoking `observe` after each one.
    pub fn run_with<F>(&mut self, frames: u32, mut observe: F)
    where
        F: FnMut(&Frame),
    {
        debug!("running {} frames at dt = {}", frames, self.params.dt);
        for _ in 0..frames {
            let frame = self.step_frame();
            observe(&frame);
        }
        debug!(
            "run finished: t = {:.3}s, pos = ({:.3}, {:.3})",
            self.elapsed(),
            self.particle.pos.x,
            self.particle.pos.y
        );
    }

    /// Run `frames` frames without observation.
    pub fn run(&mut self, frames: u32) {
        self.run_with(frames, |_| {});
    }

    /// Run `frames` frames, collecting every `sample_every`-th sample.
    ///
    /// `sample_every == 0` is treated as 1 (sample every frame).
    pub fn trace(&mut self, frames: u32, sample_every: u32) -> Vec<Frame> {
        let every = sample_every.max(1);
        let mut samples = Vec::new();
        self.run_with(frames, |frame| {
            if frame.index % every == 0 {
                samples.push(*frame);
            }
        });
        samples
    }
}
