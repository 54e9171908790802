//! Cyclone scene: a travelling log-spiral storm with a fading track.

mod field;
mod trail;

pub use field::CycloneField;
pub use trail::TrailBuffer;

use glam::Vec2;

use crate::geometry::ShapeBatch;
use crate::params::{CycloneParams, Palette, Rgba, TrailParams};
use crate::pointer::PointerState;

/// Stroke width of the innermost band at wind fraction 1 (logical px).
const BAND_BASE_WIDTH_PX: f32 = 3.8;
/// Width lost per band index.
const BAND_WIDTH_STEP_PX: f32 = 0.35;
const BAND_MIN_WIDTH_PX: f32 = 1.2;
/// Outer bands fade to this fraction of the innermost band's alpha.
const BAND_ALPHA_FALLOFF: f32 = 0.55;
/// Radius of the pointer spotlight (logical px).
const SPOTLIGHT_RADIUS_PX: f32 = 70.0;

pub struct CycloneSystem {
    field: CycloneField,
    trail: TrailBuffer,
    pointer: PointerState,
    palette: Palette,
    width: f32,
    height: f32,
    center: Vec2,
    time_s: f32,
    band_scratch: Vec<Vec2>,
    color_scratch: Vec<Rgba>,
}

impl CycloneSystem {
    pub fn new(params: CycloneParams, trail: TrailParams, palette: Palette) -> Self {
        Self {
            field: CycloneField::new(params),
            trail: TrailBuffer::new(trail),
            pointer: PointerState::default(),
            palette,
            width: 0.0,
            height: 0.0,
            center: Vec2::ZERO,
            time_s: 0.0,
            band_scratch: Vec::new(),
            color_scratch: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.moved(x, y);
    }

    pub fn pointer_left(&mut self) {
        self.pointer.left();
    }

    pub fn sky_color(&self) -> Rgba {
        self.palette.sky_top
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    /// One fixed simulation tick at sim time `t`: move the center along its
    /// wrapped track and record it into the trail.
    pub fn step(&mut self, t: f32, _dt: f32) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        self.center = self.field.center(self.width, self.height, t);
        self.trail.record(self.center, t);
        self.time_s = t;
    }

    /// Paint back-to-front: sky, trail, rain bands, eyewall, eye, spotlight.
    pub fn paint(&mut self, batch: &mut ShapeBatch) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        let palette = &self.palette;
        batch.rect_vgradient(
            0.0,
            0.0,
            self.width,
            self.height,
            palette.sky_top,
            palette.sky_bottom,
        );

        // Track, oldest to newest, alpha ramping up toward the head. Runs
        // are split at the wrap seam so no stroke stretches across the
        // canvas.
        let total = self.trail.len();
        if total >= 2 {
            let mut drawn = 0;
            for run in self.trail.runs() {
                self.color_scratch.clear();
                for i in 0..run.len() {
                    let frac = (drawn + i + 1) as f32 / total as f32;
                    self.color_scratch.push(palette.trail.faded(frac));
                }
                drawn += run.len();
                batch.polyline(
                    &run,
                    self.trail.params().width_px,
                    &self.color_scratch,
                );
            }
        }

        let t = self.time_s;
        let wind_frac = self.field.wind_frac();
        let band_count = self.field.band_count();
        for band_index in (0..band_count).rev() {
            self.field
                .band_points(self.center, band_index, t, &mut self.band_scratch);
            let falloff = 1.0 - band_index as f32 / band_count as f32 * BAND_ALPHA_FALLOFF;
            let alpha = falloff * (0.45 + 0.55 * wind_frac);
            let width = (BAND_BASE_WIDTH_PX - band_index as f32 * BAND_WIDTH_STEP_PX)
                .max(BAND_MIN_WIDTH_PX)
                * (0.75 + 0.5 * wind_frac);
            batch.polyline(&self.band_scratch, width, &[palette.band.faded(alpha)]);
        }

        let params = self.field.params();
        batch.ring(
            self.center,
            params.eyewall_inner_px,
            params.eyewall_outer_px,
            palette.eyewall.faded(0.5 + 0.5 * wind_frac),
            40,
        );
        batch.disc(
            self.center,
            params.eye_radius_px,
            palette.eye,
            palette.eye.faded(0.35),
            24,
        );

        if let Some(pos) = self.pointer.position() {
            batch.disc(
                pos,
                SPOTLIGHT_RADIUS_PX,
                palette.spotlight,
                palette.spotlight.with_alpha(0.0),
                24,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 960.0;
    const HEIGHT: f32 = 720.0;

    fn default_system() -> CycloneSystem {
        let mut system = CycloneSystem::new(
            CycloneParams::default(),
            TrailParams::default(),
            Palette::storm(),
        );
        system.resize(WIDTH, HEIGHT);
        system
    }

    #[test]
    fn test_trail_fills_but_never_exceeds_cap() {
        let mut system = default_system();
        let cap = TrailParams::default().cap;
        // Long run: far more movement than the cap can hold
        for tick in 0..60_000 {
            system.step(tick as f32 / 60.0, 1.0 / 60.0);
            assert!(system.trail_len() <= cap);
        }
        assert_eq!(system.trail_len(), cap);
    }

    #[test]
    fn test_center_reflects_travel_speed() {
        let mut system = CycloneSystem::new(
            CycloneParams {
                travel_px_per_s: 80.0,
                ..CycloneParams::default()
            },
            TrailParams::default(),
            Palette::storm(),
        );
        system.resize(WIDTH, HEIGHT);
        for tick in 1..=600 {
            system.step(tick as f32 / 60.0, 1.0 / 60.0);
        }
        // 10 seconds at 80 px/s, wrapped over width plus both margins
        let span = WIDTH + 2.0 * CycloneParams::default().wrap_margin_px;
        let expected = (800.0_f32).rem_euclid(span) - CycloneParams::default().wrap_margin_px;
        assert!((system.center().x - expected).abs() < 1e-2);
    }

    #[test]
    fn test_paint_emits_finite_geometry() {
        let mut system = default_system();
        system.pointer_moved(100.0, 100.0);
        for tick in 1..=400 {
            system.step(tick as f32 / 60.0, 1.0 / 60.0);
        }
        let mut batch = ShapeBatch::new();
        system.paint(&mut batch);
        assert!(!batch.is_empty());
        for v in &batch.vertices {
            assert!(v.position[0].is_finite() && v.position[1].is_finite());
        }
    }

    #[test]
    fn test_paint_across_wrap_has_no_stretched_trail_segment() {
        // Fast storm: wraps several times while the trail fills
        let mut system = CycloneSystem::new(
            CycloneParams {
                travel_px_per_s: 600.0,
                ..CycloneParams::default()
            },
            TrailParams::default(),
            Palette::storm(),
        );
        system.resize(WIDTH, HEIGHT);
        for tick in 1..=1200 {
            system.step(tick as f32 / 60.0, 1.0 / 60.0);
        }
        let limit = TrailParams::default().stretch_limit_px;
        let runs = system.trail.runs();
        assert!(runs.len() > 1, "expected the trail to break at wrap seams");
        for run in &runs {
            for pair in run.windows(2) {
                assert!(pair[0].distance(pair[1]) <= limit);
            }
        }
    }

    #[test]
    fn test_zero_size_is_noop() {
        let mut system = CycloneSystem::new(
            CycloneParams::default(),
            TrailParams::default(),
            Palette::storm(),
        );
        system.step(1.0, 1.0 / 60.0);
        assert_eq!(system.trail_len(), 0);
        let mut batch = ShapeBatch::new();
        system.paint(&mut batch);
        assert!(batch.is_empty());
    }
}
