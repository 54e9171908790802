//! Scene dispatch: one place the event loop talks to, whatever is on screen.

use crate::cyclone::CycloneSystem;
use crate::geometry::ShapeBatch;
use crate::params::Rgba;
use crate::wave::WaveSystem;

/// The running animation. Wave covers both the open-water and near-shore
/// variants (the system knows which field it carries); Cyclone is its own
/// system.
pub enum Scene {
    Wave(WaveSystem),
    Cyclone(CycloneSystem),
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::Wave(system) => {
                if system.is_shoaling() {
                    "shoal"
                } else {
                    "wave"
                }
            }
            Scene::Cyclone(_) => "cyclone",
        }
    }

    /// Surface clear color; only visible before the first paint covers the
    /// canvas.
    pub fn clear_color(&self) -> Rgba {
        match self {
            Scene::Wave(system) => system.sky_color(),
            Scene::Cyclone(system) => system.sky_color(),
        }
    }

    /// New canvas size in logical px.
    pub fn resize(&mut self, width: f32, height: f32) {
        match self {
            Scene::Wave(system) => system.resize(width, height),
            Scene::Cyclone(system) => system.resize(width, height),
        }
    }

    /// One fixed simulation tick at sim time `t`.
    pub fn step(&mut self, t: f32, dt: f32) {
        match self {
            Scene::Wave(system) => system.step(t, dt),
            Scene::Cyclone(system) => system.step(t, dt),
        }
    }

    /// Rebuild the frame's geometry.
    pub fn paint(&mut self, batch: &mut ShapeBatch) {
        match self {
            Scene::Wave(system) => system.paint(batch),
            Scene::Cyclone(system) => system.paint(batch),
        }
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        match self {
            Scene::Wave(system) => system.pointer_moved(x, y),
            Scene::Cyclone(system) => system.pointer_moved(x, y),
        }
    }

    pub fn pointer_left(&mut self) {
        match self {
            Scene::Wave(system) => system.pointer_left(),
            Scene::Cyclone(system) => system.pointer_left(),
        }
    }

    /// Click or touch-start. Wave scenes drop a ripple; the cyclone ignores
    /// taps.
    pub fn tap(&mut self, x: f32, _y: f32) {
        if let Scene::Wave(system) = self {
            system.inject_ripple(x);
        }
    }

    /// Vertical touch drag. Wave scenes scale their amplitude; the cyclone
    /// ignores drags.
    pub fn drag(&mut self, delta_y_px: f32) {
        if let Scene::Wave(system) = self {
            system.drag_amplitude(delta_y_px);
        }
    }
}
