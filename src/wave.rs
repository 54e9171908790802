//! Wave scenes: layered open water and the shoaling shore break.
//!
//! `WaveSystem` owns the surface field, the ripple and foam subsystems and
//! the pointer state, advances them on fixed ticks, and paints the result
//! back-to-front into a [`ShapeBatch`].

mod field;
mod foam;
mod ripple;

pub use field::{sample_surface, SurfaceColumn, WaveField};
pub use foam::{FoamParticle, FoamSystem};
pub use ripple::{Ripple, RippleSystem};

use glam::Vec2;

use crate::geometry::ShapeBatch;
use crate::params::{FoamParams, Palette, RippleParams, Rgba, ShoalProfile, WaveParams};
use crate::pointer::PointerState;

/// Depth fraction where the water gradient switches from the top tone to
/// the deep tone.
const WATER_MID_FRAC: f32 = 0.45;
/// Stroke width of the crest highlight (logical px).
const CREST_WIDTH_PX: f32 = 2.0;
/// Radius of the pointer spotlight (logical px).
const SPOTLIGHT_RADIUS_PX: f32 = 70.0;

pub struct WaveSystem {
    pub params: WaveParams,
    field: WaveField,
    ripples: RippleSystem,
    foam: FoamSystem,
    pointer: PointerState,
    palette: Palette,
    width: f32,
    height: f32,
    columns: Vec<SurfaceColumn>,
    stroke_scratch: Vec<Vec2>,
}

impl WaveSystem {
    /// Uniform deep-water scene.
    pub fn open_water(
        params: WaveParams,
        ripples: RippleParams,
        foam: FoamParams,
        palette: Palette,
    ) -> Self {
        Self::with_field(WaveField::uniform(), params, ripples, foam, palette)
    }

    /// Shoaling near-shore scene.
    pub fn near_shore(
        params: WaveParams,
        shoal: ShoalProfile,
        ripples: RippleParams,
        foam: FoamParams,
        palette: Palette,
    ) -> Self {
        Self::with_field(WaveField::shoaling(shoal), params, ripples, foam, palette)
    }

    fn with_field(
        field: WaveField,
        params: WaveParams,
        ripples: RippleParams,
        foam: FoamParams,
        palette: Palette,
    ) -> Self {
        Self {
            params,
            field,
            ripples: RippleSystem::new(ripples),
            foam: FoamSystem::new(foam),
            pointer: PointerState::default(),
            palette,
            width: 0.0,
            height: 0.0,
            columns: Vec::new(),
            stroke_scratch: Vec::new(),
        }
    }

    pub fn is_shoaling(&self) -> bool {
        self.field.is_shoaling()
    }

    pub fn sky_color(&self) -> Rgba {
        self.palette.sky_top
    }

    /// New canvas size in logical px. Column counts and the foam budget
    /// re-derive from it on the next tick.
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

    /// Click / touch-start: drop a ripple at the given x.
    pub fn inject_ripple(&mut self, x: f32) {
        self.ripples.inject(x);
    }

    pub fn ripple_count(&self) -> usize {
        self.ripples.len()
    }

    pub fn foam_count(&self) -> usize {
        self.foam.len()
    }

    pub fn amplitude(&self) -> f32 {
        self.params.amplitude_px
    }

    /// Set the master amplitude, clamped to the drag range.
    pub fn set_amplitude(&mut self, amplitude_px: f32) {
        self.params.amplitude_px =
            amplitude_px.clamp(self.params.min_amplitude_px, self.params.max_amplitude_px);
    }

    /// Vertical touch drag: dragging up (negative dy) raises the waves.
    pub fn drag_amplitude(&mut self, delta_y_px: f32) {
        self.set_amplitude(self.params.amplitude_px - delta_y_px * self.params.drag_gain);
    }

    /// Surface displacement (waves plus ripples) at (x, t), positive up.
    pub fn sample_displacement(&self, x: f32, t: f32) -> f32 {
        self.field.displacement(&self.params, x, t) + self.ripples.sample(x)
    }

    /// Interpolated surface y at `x` from the last tick's columns.
    pub fn surface_y(&self, x: f32) -> f32 {
        let waterline = self.height * self.params.waterline_frac;
        sample_surface(&self.columns, waterline, x)
    }

    /// One fixed simulation tick at sim time `t`.
    pub fn step(&mut self, t: f32, _dt: f32) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }

        let ripples = &self.ripples;
        self.field.columns(
            &self.params,
            self.width,
            self.height,
            t,
            &self.pointer,
            Some(|x: f32| ripples.sample(x)),
            &mut self.columns,
        );

        let columns = &self.columns;
        let waterline = self.height * self.params.waterline_frac;
        self.foam.step(self.width, self.height, &self.pointer, |x| {
            sample_surface(columns, waterline, x)
        });

        self.ripples.step();
    }

    /// Paint the scene back-to-front: sky, water body, seabed, crest
    /// stroke, foam, pointer spotlight.
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

        let sand_deep = palette.seabed.lerp(palette.water_deep, 0.6);
        for pair in self.columns.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            // Water body in two gradient bands
            let depth_a = a.bed_y - a.surface_y;
            let depth_b = b.bed_y - b.surface_y;
            if depth_a > 0.1 || depth_b > 0.1 {
                let mid_a = a.surface_y + depth_a.max(0.0) * WATER_MID_FRAC;
                let mid_b = b.surface_y + depth_b.max(0.0) * WATER_MID_FRAC;
                batch.quad(
                    [
                        Vec2::new(a.x, a.surface_y),
                        Vec2::new(b.x, b.surface_y),
                        Vec2::new(b.x, mid_b),
                        Vec2::new(a.x, mid_a),
                    ],
                    [
                        palette.water_top,
                        palette.water_top,
                        palette.water_mid,
                        palette.water_mid,
                    ],
                );
                batch.quad(
                    [
                        Vec2::new(a.x, mid_a),
                        Vec2::new(b.x, mid_b),
                        Vec2::new(b.x, b.bed_y),
                        Vec2::new(a.x, a.bed_y),
                    ],
                    [
                        palette.water_mid,
                        palette.water_mid,
                        palette.water_deep,
                        palette.water_deep,
                    ],
                );
            }
            // Seabed wedge down to the canvas bottom (shore scene only)
            if self.field.is_shoaling() {
                batch.quad(
                    [
                        Vec2::new(a.x, a.bed_y),
                        Vec2::new(b.x, b.bed_y),
                        Vec2::new(b.x, self.height),
                        Vec2::new(a.x, self.height),
                    ],
                    [palette.seabed, palette.seabed, sand_deep, sand_deep],
                );
            }
        }

        self.stroke_scratch.clear();
        self.stroke_scratch
            .extend(self.columns.iter().map(|c| Vec2::new(c.x, c.surface_y)));
        batch.polyline(&self.stroke_scratch, CREST_WIDTH_PX, &[palette.crest]);

        for p in self.foam.particles() {
            batch.disc(
                Vec2::new(p.x, p.y),
                p.size,
                palette.foam.with_alpha(p.alpha),
                palette.foam.with_alpha(0.0),
                8,
            );
        }

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
    use crate::params::WaveLayer;

    const WIDTH: f32 = 960.0;
    const HEIGHT: f32 = 720.0;

    fn single_layer_params() -> WaveParams {
        WaveParams {
            layers: vec![WaveLayer {
                amplitude_frac: 1.0,
                wavelength_frac: 1.0,
                speed_scale: 1.0,
                phase_offset: 0.0,
            }],
            ..WaveParams::default()
        }
    }

    fn open_water_system(params: WaveParams) -> WaveSystem {
        let mut system = WaveSystem::open_water(
            params,
            RippleParams::default(),
            FoamParams::default(),
            Palette::lagoon(),
        );
        system.resize(WIDTH, HEIGHT);
        system
    }

    #[test]
    fn test_ripple_injection_raises_surface_offset() {
        let mut system = open_water_system(single_layer_params());
        let x = 150.0;
        let before_t0 = system.sample_displacement(x, 0.0);
        // At t = 3.0 the base wave is well above the waterline, so the
        // magnitude comparison is not a sign accident.
        let before = system.sample_displacement(x, 3.0);
        assert!(before > 0.0);

        system.inject_ripple(x);
        let after = system.sample_displacement(x, 3.0);
        assert!(after.abs() > before.abs());
        // The fresh ripple contributes its full strength at its origin
        assert!((after - before - RippleParams::default().initial_strength).abs() < 1e-3);
        // Holds at t = 0 too, where the base wave dips below the waterline
        let after_t0 = system.sample_displacement(x, 0.0);
        assert!(after_t0.abs() > before_t0.abs());
    }

    #[test]
    fn test_ripple_visible_in_surface_columns() {
        let mut system = open_water_system(single_layer_params());
        system.step(3.0, 1.0 / 60.0);
        let undisturbed = system.surface_y(150.0);
        system.inject_ripple(150.0);
        system.step(3.0, 1.0 / 60.0);
        let disturbed = system.surface_y(150.0);
        // One decay tick has passed since injection; surface sits higher
        // (smaller y) by just under the initial strength
        let lift = undisturbed - disturbed;
        assert!(lift > 15.0 && lift <= 18.0, "lift was {}", lift);
    }

    #[test]
    fn test_amplitude_drag_respects_clamp() {
        let mut system = open_water_system(WaveParams::default());
        let params = WaveParams::default();

        system.drag_amplitude(-10_000.0);
        assert_eq!(system.amplitude(), params.max_amplitude_px);

        system.drag_amplitude(10_000.0);
        assert_eq!(system.amplitude(), params.min_amplitude_px);

        system.set_amplitude(50.0);
        assert_eq!(system.amplitude(), 50.0);
        // Drag up by 20px raises amplitude by 20 * drag_gain
        system.drag_amplitude(-20.0);
        assert!((system.amplitude() - (50.0 + 20.0 * params.drag_gain)).abs() < 1e-4);
    }

    #[test]
    fn test_step_populates_columns_and_foam() {
        let mut system = open_water_system(WaveParams::default());
        for tick in 1..=120 {
            system.step(tick as f32 / 60.0, 1.0 / 60.0);
        }
        assert!(system.foam_count() > 0);
        let expected_columns = (WIDTH / WaveParams::default().column_step_px).ceil() as usize + 1;
        assert_eq!(system.columns.len(), expected_columns);
    }

    #[test]
    fn test_paint_emits_finite_geometry() {
        let mut batch = ShapeBatch::new();
        for mut system in [
            open_water_system(WaveParams::default()),
            {
                let mut s = WaveSystem::near_shore(
                    WaveParams::default(),
                    ShoalProfile::default(),
                    RippleParams::default(),
                    FoamParams::default(),
                    Palette::abyss(),
                );
                s.resize(WIDTH, HEIGHT);
                s
            },
        ] {
            system.pointer_moved(300.0, 200.0);
            system.inject_ripple(480.0);
            for tick in 1..=30 {
                system.step(tick as f32 / 60.0, 1.0 / 60.0);
            }
            batch.clear();
            system.paint(&mut batch);
            assert!(!batch.is_empty());
            for v in &batch.vertices {
                assert!(v.position[0].is_finite() && v.position[1].is_finite());
            }
        }
    }

    #[test]
    fn test_zero_size_step_and_paint_are_noops() {
        let mut system = WaveSystem::open_water(
            WaveParams::default(),
            RippleParams::default(),
            FoamParams::default(),
            Palette::lagoon(),
        );
        system.step(1.0, 1.0 / 60.0);
        let mut batch = ShapeBatch::new();
        system.paint(&mut batch);
        assert!(batch.is_empty());
        assert_eq!(system.foam_count(), 0);
    }
}
