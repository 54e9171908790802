//! Wave surface sampling: layered sines, shoaling, seabed clamp.

use noise::{NoiseFn, Perlin};
use std::f32::consts::TAU;

use crate::params::{ShoalProfile, WaveParams, MIN_WAVELENGTH_PX};
use crate::pointer::PointerState;

/// One sampled surface column (logical px, y-down).
#[derive(Debug, Clone, Copy)]
pub struct SurfaceColumn {
    pub x: f32,
    pub surface_y: f32,
    pub bed_y: f32,
}

enum Profile {
    /// Open water: uniform layer stack, no visible bed.
    Uniform,
    /// Near shore: wavelength compresses and amplitude grows across the
    /// slope region while the bed rises to meet the surface.
    Shoaling {
        shoal: ShoalProfile,
        bed_noise: Perlin,
    },
}

/// Deterministic surface shape: same params, size and time always give the
/// same columns.
pub struct WaveField {
    profile: Profile,
}

impl WaveField {
    pub fn uniform() -> Self {
        Self {
            profile: Profile::Uniform,
        }
    }

    pub fn shoaling(shoal: ShoalProfile) -> Self {
        let bed_noise = Perlin::new(shoal.bed_noise_seed);
        Self {
            profile: Profile::Shoaling { shoal, bed_noise },
        }
    }

    pub fn is_shoaling(&self) -> bool {
        matches!(self.profile, Profile::Shoaling { .. })
    }

    fn shoal_progress(shoal: &ShoalProfile, x: f32, width: f32) -> f32 {
        let start = shoal.slope_start_frac * width;
        let end = shoal.slope_end_frac * width;
        smoothstep(start, end, x)
    }

    /// Seabed depth under `x`. Open water reports the canvas bottom edge;
    /// the shoaling bed rises shoreward with Perlin undulation, emerging
    /// above the waterline as dry beach near the right edge.
    pub fn bed_y(&self, x: f32, width: f32, height: f32) -> f32 {
        match &self.profile {
            Profile::Uniform => height,
            Profile::Shoaling { shoal, bed_noise } => {
                let p = Self::shoal_progress(shoal, x, width);
                let base = height * lerp(shoal.deep_bed_frac, shoal.shore_bed_frac, p);
                let detail = bed_noise.get([x as f64 * shoal.bed_noise_freq, 0.0]) as f32;
                base + detail * shoal.bed_noise_amp_px
            }
        }
    }

    /// Closed-form surface displacement at (x, t): the sum of the layer
    /// stack, positive lifting the surface. This is the open-water shape;
    /// the shoaling profile has no closed form and integrates phase across
    /// columns instead.
    pub fn displacement(&self, params: &WaveParams, x: f32, t: f32) -> f32 {
        let phase = t * params.speed * params.phase_rate_px_per_s;
        params
            .layers
            .iter()
            .map(|layer| {
                let wavelength =
                    (params.wavelength_px * layer.wavelength_frac).max(MIN_WAVELENGTH_PX);
                let k = TAU / wavelength;
                let amp = params.amplitude_px * layer.amplitude_frac;
                amp * ((x + phase * layer.speed_scale) * k + layer.phase_offset).sin()
            })
            .sum()
    }

    /// Sample surface columns across the canvas at `params.column_step_px`
    /// spacing.
    ///
    /// `extra` is an additive lift evaluated per column (ripples); the
    /// pointer contributes a triangular lift bump around its x. The result
    /// is clamped so the surface never passes below the bed. A zero-sized
    /// canvas yields no columns.
    pub fn columns<F>(
        &self,
        params: &WaveParams,
        width: f32,
        height: f32,
        t: f32,
        pointer: &PointerState,
        extra: Option<F>,
        out: &mut Vec<SurfaceColumn>,
    ) where
        F: Fn(f32) -> f32,
    {
        out.clear();
        let step = params.column_step_px;
        if width <= 0.0 || height <= 0.0 || step <= 0.0 {
            return;
        }
        let waterline = height * params.waterline_frac;
        let count = (width / step).ceil() as usize + 1;
        // Temporal frequency chosen so deep-water crests travel at the
        // configured phase rate; shallower columns (larger k) slow down.
        let omega = match &self.profile {
            Profile::Shoaling { shoal, .. } => {
                TAU * params.speed * params.phase_rate_px_per_s
                    / shoal.deep_wavelength_px.max(MIN_WAVELENGTH_PX)
            }
            Profile::Uniform => 0.0,
        };
        let mut theta = 0.0_f32;
        for i in 0..count {
            let x = (i as f32 * step).min(width);
            let mut disp = match &self.profile {
                Profile::Uniform => self.displacement(params, x, t),
                Profile::Shoaling { shoal, .. } => {
                    let p = Self::shoal_progress(shoal, x, width);
                    let wavelength = lerp(shoal.deep_wavelength_px, shoal.shallow_wavelength_px, p)
                        .max(MIN_WAVELENGTH_PX);
                    let gain = lerp(1.0, shoal.amplitude_gain, p);
                    // Phase accumulates spatially so the waveform stays
                    // continuous while the wavelength shrinks shoreward.
                    theta += TAU / wavelength * step;
                    params.amplitude_px * gain * (theta - omega * t).sin()
                }
            };
            if let Some(f) = &extra {
                disp += f(x);
            }
            if let Some(pos) = pointer.position() {
                let falloff = 1.0 - (x - pos.x).abs() / params.lift_radius_px;
                if falloff > 0.0 {
                    disp += params.lift_height_px * falloff;
                }
            }
            let bed = self.bed_y(x, width, height);
            let clearance = match &self.profile {
                Profile::Uniform => 0.0,
                Profile::Shoaling { shoal, .. } => shoal.bed_clearance_px,
            };
            let surface_y = (waterline - disp).min(bed - clearance);
            out.push(SurfaceColumn {
                x,
                surface_y,
                bed_y: bed,
            });
        }
    }
}

/// Interpolated surface height from sampled columns; `fallback` when no
/// columns exist (degenerate canvas).
pub fn sample_surface(columns: &[SurfaceColumn], fallback: f32, x: f32) -> f32 {
    let (first, last) = match (columns.first(), columns.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return fallback,
    };
    if x <= first.x {
        return first.surface_y;
    }
    if x >= last.x {
        return last.surface_y;
    }
    let idx = columns.partition_point(|c| c.x < x);
    let b = &columns[idx];
    let a = &columns[idx - 1];
    let span = b.x - a.x;
    if span <= f32::EPSILON {
        return b.surface_y;
    }
    lerp(a.surface_y, b.surface_y, (x - a.x) / span)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::WaveLayer;

    const WIDTH: f32 = 960.0;
    const HEIGHT: f32 = 720.0;

    fn no_extra() -> Option<fn(f32) -> f32> {
        None
    }

    #[test]
    fn test_displacement_bounded_by_layer_sum() {
        let field = WaveField::uniform();
        let params = WaveParams::default();
        let bound: f32 = params
            .layers
            .iter()
            .map(|l| params.amplitude_px * l.amplitude_frac)
            .sum();
        for i in 0..500 {
            let x = i as f32 * 1.7;
            let t = i as f32 * 0.013;
            let d = field.displacement(&params, x, t);
            assert!(d.is_finite());
            assert!(d.abs() <= bound + 1e-3);
        }
    }

    #[test]
    fn test_surface_never_passes_below_bed() {
        let params = WaveParams::default();
        let mut columns = Vec::new();
        for (field, clearance) in [
            (WaveField::uniform(), 0.0),
            (
                WaveField::shoaling(ShoalProfile::default()),
                ShoalProfile::default().bed_clearance_px,
            ),
        ] {
            for tick in 0..240 {
                let t = tick as f32 / 60.0;
                field.columns(
                    &params,
                    WIDTH,
                    HEIGHT,
                    t,
                    &PointerState::default(),
                    no_extra(),
                    &mut columns,
                );
                assert!(!columns.is_empty());
                for c in &columns {
                    assert!(c.surface_y.is_finite());
                    assert!(c.surface_y <= c.bed_y - clearance + 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_uniform_columns_match_closed_form() {
        let field = WaveField::uniform();
        let params = WaveParams::default();
        let waterline = HEIGHT * params.waterline_frac;
        let mut columns = Vec::new();
        field.columns(
            &params,
            WIDTH,
            HEIGHT,
            2.5,
            &PointerState::default(),
            no_extra(),
            &mut columns,
        );
        for c in columns.iter().step_by(17) {
            let expected = waterline - field.displacement(&params, c.x, 2.5);
            assert!((c.surface_y - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_shoaling_amplifies_toward_shore() {
        let field = WaveField::shoaling(ShoalProfile::default());
        let params = WaveParams::default();
        let waterline = HEIGHT * params.waterline_frac;
        let mut columns = Vec::new();

        // Wave envelope at a deep-zone column vs a mid-slope column,
        // measured over a full period so phase does not bias the result.
        let deep_x = WIDTH * 0.05;
        let slope_x = WIDTH * 0.45;
        let mut deep_env = 0.0_f32;
        let mut slope_env = 0.0_f32;
        for tick in 0..260 {
            let t = tick as f32 / 60.0;
            field.columns(
                &params,
                WIDTH,
                HEIGHT,
                t,
                &PointerState::default(),
                no_extra(),
                &mut columns,
            );
            let deep = sample_surface(&columns, waterline, deep_x);
            let slope = sample_surface(&columns, waterline, slope_x);
            deep_env = deep_env.max((deep - waterline).abs());
            slope_env = slope_env.max((slope - waterline).abs());
        }
        assert!(
            slope_env > deep_env * 1.3,
            "slope envelope {} not amplified over deep envelope {}",
            slope_env,
            deep_env
        );
    }

    #[test]
    fn test_shoaling_columns_have_no_phase_jumps() {
        let field = WaveField::shoaling(ShoalProfile::default());
        let params = WaveParams::default();
        let mut columns = Vec::new();
        for tick in [0, 37, 118, 223] {
            let t = tick as f32 / 60.0;
            field.columns(
                &params,
                WIDTH,
                HEIGHT,
                t,
                &PointerState::default(),
                no_extra(),
                &mut columns,
            );
            for pair in columns.windows(2) {
                let dy = (pair[1].surface_y - pair[0].surface_y).abs();
                assert!(
                    dy < 35.0,
                    "surface discontinuity {} at x={}",
                    dy,
                    pair[1].x
                );
            }
        }
    }

    #[test]
    fn test_shoal_bed_rises_toward_shore() {
        let field = WaveField::shoaling(ShoalProfile::default());
        let deep = field.bed_y(WIDTH * 0.1, WIDTH, HEIGHT);
        let shore = field.bed_y(WIDTH * 0.9, WIDTH, HEIGHT);
        // y-down: smaller y is higher on screen
        assert!(shore < deep - 50.0);
        // Shore bed emerges above the default waterline (dry beach)
        assert!(shore < HEIGHT * WaveParams::default().waterline_frac);
    }

    #[test]
    fn test_pointer_lift_raises_surface_locally() {
        let field = WaveField::uniform();
        let params = WaveParams::default();
        let mut plain = Vec::new();
        let mut lifted = Vec::new();
        field.columns(
            &params,
            WIDTH,
            HEIGHT,
            1.0,
            &PointerState::default(),
            no_extra(),
            &mut plain,
        );
        let mut pointer = PointerState::default();
        pointer.moved(450.0, 300.0);
        field.columns(&params, WIDTH, HEIGHT, 1.0, &pointer, no_extra(), &mut lifted);

        let waterline = HEIGHT * params.waterline_frac;
        let under = sample_surface(&lifted, waterline, 450.0);
        let under_plain = sample_surface(&plain, waterline, 450.0);
        assert!((under_plain - under - params.lift_height_px).abs() < 1e-3);
        // Beyond the lift radius the surface is untouched
        let far = sample_surface(&lifted, waterline, 450.0 + params.lift_radius_px + 50.0);
        let far_plain = sample_surface(&plain, waterline, 450.0 + params.lift_radius_px + 50.0);
        assert!((far - far_plain).abs() < 1e-3);
    }

    #[test]
    fn test_zero_canvas_yields_no_columns() {
        let field = WaveField::uniform();
        let params = WaveParams::default();
        let mut columns = vec![SurfaceColumn {
            x: 0.0,
            surface_y: 0.0,
            bed_y: 0.0,
        }];
        field.columns(
            &params,
            0.0,
            HEIGHT,
            1.0,
            &PointerState::default(),
            no_extra(),
            &mut columns,
        );
        assert!(columns.is_empty());
    }

    #[test]
    fn test_extra_offset_lifts_surface() {
        let field = WaveField::uniform();
        let params = WaveParams {
            layers: vec![WaveLayer {
                amplitude_frac: 1.0,
                wavelength_frac: 1.0,
                speed_scale: 1.0,
                phase_offset: 0.0,
            }],
            ..WaveParams::default()
        };
        let waterline = HEIGHT * params.waterline_frac;
        let mut columns = Vec::new();
        field.columns(
            &params,
            WIDTH,
            HEIGHT,
            0.0,
            &PointerState::default(),
            Some(|_x: f32| 10.0),
            &mut columns,
        );
        let lifted = sample_surface(&columns, waterline, 300.0);
        let expected = waterline - field.displacement(&params, 300.0, 0.0) - 10.0;
        assert!((lifted - expected).abs() < 1e-3);
    }

    #[test]
    fn test_sample_surface_clamps_to_ends() {
        let columns = [
            SurfaceColumn {
                x: 0.0,
                surface_y: 100.0,
                bed_y: 500.0,
            },
            SurfaceColumn {
                x: 10.0,
                surface_y: 200.0,
                bed_y: 500.0,
            },
        ];
        assert_eq!(sample_surface(&columns, 0.0, -5.0), 100.0);
        assert_eq!(sample_surface(&columns, 0.0, 25.0), 200.0);
        assert!((sample_surface(&columns, 0.0, 5.0) - 150.0).abs() < 1e-4);
        assert_eq!(sample_surface(&[], 42.0, 3.0), 42.0);
    }
}
