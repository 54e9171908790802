//! Cyclone geometry: wrapped meander track and rotating log-spiral bands.
//!
//! Everything here is a pure function of params, canvas size and sim time,
//! in the same spirit as the wave field: no hidden state, so the storm can
//! be probed at any instant.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::params::{CycloneParams, MAX_BAND_COUNT, MAX_WIND_INTENSITY, MIN_BAND_COUNT};

pub struct CycloneField {
    params: CycloneParams,
}

impl CycloneField {
    pub fn new(params: CycloneParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CycloneParams {
        &self.params
    }

    /// Band count with the configured value clamped to the supported range.
    pub fn band_count(&self) -> u32 {
        self.params.band_count.clamp(MIN_BAND_COUNT, MAX_BAND_COUNT)
    }

    /// Wind intensity clamped to [0, 1.6].
    pub fn wind(&self) -> f32 {
        self.params.wind_intensity.clamp(0.0, MAX_WIND_INTENSITY)
    }

    /// Wind as a 0..1 fraction of the maximum, for visual scaling.
    pub fn wind_frac(&self) -> f32 {
        self.wind() / MAX_WIND_INTENSITY
    }

    /// Storm center at sim time `t`.
    ///
    /// The x track wraps over the canvas width plus an off-screen margin on
    /// each side, so the storm leaves one edge fully before re-entering the
    /// other. The y track meanders sinusoidally around mid-height as a
    /// function of distance travelled.
    pub fn center(&self, width: f32, height: f32, t: f32) -> Vec2 {
        let margin = self.params.wrap_margin_px;
        let span = (width + 2.0 * margin).max(1.0);
        let travelled = t * self.params.travel_px_per_s;
        let x = travelled.rem_euclid(span) - margin;
        let y = height * 0.5
            + self.params.path_amplitude_px * (travelled * self.params.path_freq_rad_per_px).sin();
        Vec2::new(x, y)
    }

    /// Accumulated band rotation at sim time `t` (radians).
    pub fn rotation(&self, t: f32) -> f32 {
        t * self.params.spin_rad_per_s
    }

    /// Log-spiral radius r = a * e^(b * theta).
    pub fn spiral_radius(&self, theta: f32) -> f32 {
        self.params.spiral_a_px * (self.params.spiral_b * theta).exp()
    }

    /// Largest radius any band reaches.
    pub fn max_radius(&self) -> f32 {
        self.spiral_radius(self.params.spiral_turns * TAU)
    }

    /// Sample one rain band into `out` as a polyline around `center`.
    ///
    /// Bands share the same spiral and are phase-offset by 2π/band_count;
    /// the whole set rotates rigidly with accumulated spin.
    pub fn band_points(&self, center: Vec2, band_index: u32, t: f32, out: &mut Vec<Vec2>) {
        out.clear();
        let band_count = self.band_count();
        let phase = band_index as f32 * TAU / band_count as f32 + self.rotation(t);
        let theta_max = self.params.spiral_turns * TAU;
        let step = self.params.band_step_rad.max(1e-3);
        let mut theta = 0.0_f32;
        while theta <= theta_max {
            let r = self.spiral_radius(theta);
            let angle = theta + phase;
            out.push(center + Vec2::new(angle.cos(), angle.sin()) * r);
            theta += step;
        }
    }
}
