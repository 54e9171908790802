//! Wave surface parameters: layer stack, shoaling profile, ripples, foam

/// Wavelengths below this are meaningless at pixel scale and would explode
/// the wavenumber used for phase integration.
pub const MIN_WAVELENGTH_PX: f32 = 4.0;

/// One sinusoidal component of the layered surface.
///
/// Layers are expressed relative to the master amplitude/wavelength so the
/// whole stack scales together when the user drags the amplitude.
#[derive(Debug, Clone, Copy)]
pub struct WaveLayer {
    /// Height contribution as a fraction of the master amplitude
    pub amplitude_frac: f32,
    /// Wavelength as a fraction of the master wavelength
    pub wavelength_frac: f32,
    /// Phase speed multiplier (>1.0 means this layer travels faster)
    pub speed_scale: f32,
    /// Static phase offset (radians), decorrelates the layers
    pub phase_offset: f32,
}

/// Parameters for the animated water surface
#[derive(Debug, Clone)]
pub struct WaveParams {
    /// Master wave height in logical px (runtime-tunable via touch drag)
    pub amplitude_px: f32,
    /// Master wavelength in logical px
    pub wavelength_px: f32,
    /// Animation speed multiplier (1.0 = normal)
    pub speed: f32,
    /// Horizontal phase advance at speed 1.0 (logical px per second)
    pub phase_rate_px_per_s: f32,
    /// Sinusoidal layers summed into the surface
    pub layers: Vec<WaveLayer>,
    /// Still-water line as a fraction of canvas height (y-down)
    pub waterline_frac: f32,
    /// Lower clamp for touch-dragged amplitude (logical px)
    pub min_amplitude_px: f32,
    /// Upper clamp for touch-dragged amplitude (logical px)
    pub max_amplitude_px: f32,
    /// Amplitude change per logical px of vertical touch drag
    pub drag_gain: f32,
    /// Radius of the pointer lift bump (logical px)
    pub lift_radius_px: f32,
    /// Peak height of the pointer lift bump (logical px)
    pub lift_height_px: f32,
    /// Horizontal spacing of sampled surface columns (logical px)
    pub column_step_px: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude_px: 40.0,
            wavelength_px: 280.0,
            speed: 1.0,
            phase_rate_px_per_s: 60.0,
            layers: vec![
                WaveLayer {
                    amplitude_frac: 1.0,
                    wavelength_frac: 1.0,
                    speed_scale: 1.0,
                    phase_offset: 0.0,
                },
                WaveLayer {
                    amplitude_frac: 0.45,
                    wavelength_frac: 0.53,
                    speed_scale: 1.6,
                    phase_offset: 1.3,
                },
                WaveLayer {
                    amplitude_frac: 0.22,
                    wavelength_frac: 0.31,
                    speed_scale: 2.3,
                    phase_offset: 4.1,
                },
            ],
            waterline_frac: 0.52,
            min_amplitude_px: 6.0,
            max_amplitude_px: 96.0,
            drag_gain: 0.35,
            lift_radius_px: 90.0,
            lift_height_px: 14.0,
            column_step_px: 3.0,
        }
    }
}

/// Spatial shoaling profile for the near-shore scene.
///
/// Crossing the slope region (deep side to shore side) waves compress and
/// steepen: wavelength shrinks while amplitude grows, and the seabed rises to
/// meet the surface.
#[derive(Debug, Clone)]
pub struct ShoalProfile {
    /// Start of the slope region as a fraction of canvas width
    pub slope_start_frac: f32,
    /// End of the slope region as a fraction of canvas width
    pub slope_end_frac: f32,
    /// Amplitude multiplier reached at the shallow end (deep end is 1.0)
    pub amplitude_gain: f32,
    /// Wavelength on the deep side (logical px)
    pub deep_wavelength_px: f32,
    /// Wavelength at the shallow end (logical px)
    pub shallow_wavelength_px: f32,
    /// Seabed depth at the deep end as a fraction of canvas height
    pub deep_bed_frac: f32,
    /// Seabed depth at the shore end as a fraction of canvas height
    pub shore_bed_frac: f32,
    /// Perlin undulation amplitude on the seabed (logical px)
    pub bed_noise_amp_px: f32,
    /// Perlin spatial frequency along the seabed (cycles per px)
    pub bed_noise_freq: f64,
    /// Seed for the seabed Perlin detail
    pub bed_noise_seed: u32,
    /// Minimum gap kept between surface and seabed when clamping (logical px)
    pub bed_clearance_px: f32,
}

impl Default for ShoalProfile {
    fn default() -> Self {
        Self {
            slope_start_frac: 0.18,
            slope_end_frac: 0.72,
            amplitude_gain: 2.4,
            deep_wavelength_px: 260.0,
            shallow_wavelength_px: 70.0,
            deep_bed_frac: 0.92,
            shore_bed_frac: 0.42,
            bed_noise_amp_px: 7.0,
            bed_noise_freq: 0.012,
            bed_noise_seed: 7,
            bed_clearance_px: 3.0,
        }
    }
}

/// Parameters for pointer-injected ripples
#[derive(Debug, Clone)]
pub struct RippleParams {
    /// Strength (peak surface lift, logical px) of a fresh ripple
    pub initial_strength: f32,
    /// Influence radius around the ripple origin (logical px)
    pub radius_px: f32,
    /// Per-tick strength multiplier (<1.0)
    pub decay_rate: f32,
    /// Ripples weaker than this are removed
    pub prune_threshold: f32,
    /// Live ripple cap; injecting past it evicts the oldest
    pub max_live: usize,
}

impl Default for RippleParams {
    fn default() -> Self {
        Self {
            initial_strength: 18.0,
            radius_px: 120.0,
            decay_rate: 0.985,
            prune_threshold: 0.3,
            max_live: 12,
        }
    }
}

/// Parameters for the foam particle system
#[derive(Debug, Clone)]
pub struct FoamParams {
    /// Particle budget per logical px of canvas width
    pub capacity_per_px: f32,
    /// Lower clamp on the particle budget
    pub min_capacity: usize,
    /// Upper clamp on the particle budget
    pub max_capacity: usize,
    /// Fewest particles spawned per tick (while under budget)
    pub min_spawn_per_tick: u32,
    /// Most particles spawned per tick
    pub max_spawn_per_tick: u32,
    /// Horizontal flow bias applied to spawn velocity (px per tick)
    pub flow_px_per_tick: f32,
    /// Downward settling acceleration (px per tick^2)
    pub gravity_px_per_tick: f32,
    /// Pointer repulsion radius (logical px)
    pub repulsion_radius_px: f32,
    /// Peak velocity impulse from pointer repulsion (px per tick)
    pub repulsion_impulse: f32,
    /// Shortest particle lifetime (ticks)
    pub min_age_ticks: u32,
    /// Longest particle lifetime (ticks)
    pub max_age_ticks: u32,
    /// Smallest particle radius (logical px)
    pub min_size_px: f32,
    /// Largest particle radius (logical px)
    pub max_size_px: f32,
    /// Alpha of a newborn particle; fades linearly to zero over its life
    pub base_alpha: f32,
    /// Particles this far outside the canvas are culled (logical px)
    pub bounds_margin_px: f32,
    /// RNG seed for spawn placement and lifetimes
    pub seed: u64,
}

impl Default for FoamParams {
    fn default() -> Self {
        Self {
            capacity_per_px: 0.12,
            min_capacity: 40,
            max_capacity: 160,
            min_spawn_per_tick: 1,
            max_spawn_per_tick: 4,
            flow_px_per_tick: 0.55,
            gravity_px_per_tick: 0.045,
            repulsion_radius_px: 64.0,
            repulsion_impulse: 0.9,
            min_age_ticks: 70,
            max_age_ticks: 150,
            min_size_px: 1.5,
            max_size_px: 4.5,
            base_alpha: 0.85,
            bounds_margin_px: 24.0,
            seed: 0x5ea_f0a8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layers_normalized() {
        let params = WaveParams::default();
        assert!(!params.layers.is_empty());
        for layer in &params.layers {
            assert!(layer.amplitude_frac > 0.0 && layer.amplitude_frac <= 1.0);
            assert!(layer.wavelength_frac * params.wavelength_px >= MIN_WAVELENGTH_PX);
        }
    }

    #[test]
    fn test_default_amplitude_within_drag_clamp() {
        let params = WaveParams::default();
        assert!(params.amplitude_px >= params.min_amplitude_px);
        assert!(params.amplitude_px <= params.max_amplitude_px);
    }

    #[test]
    fn test_shoal_slope_region_ordered() {
        let profile = ShoalProfile::default();
        assert!(profile.slope_start_frac < profile.slope_end_frac);
        assert!(profile.slope_end_frac < 1.0);
        assert!(profile.shallow_wavelength_px < profile.deep_wavelength_px);
        assert!(profile.amplitude_gain > 1.0);
        // Shore bed sits above the deep bed (y-down canvas)
        assert!(profile.shore_bed_frac < profile.deep_bed_frac);
    }

    #[test]
    fn test_ripple_decay_reaches_prune_threshold() {
        let params = RippleParams::default();
        let mut strength = params.initial_strength;
        let mut ticks = 0;
        while strength >= params.prune_threshold {
            strength *= params.decay_rate;
            ticks += 1;
            assert!(ticks < 1000, "ripple never decays out");
        }
        // ~4.5 seconds at 60 Hz with the default constants
        assert!(ticks > 200 && ticks < 300);
    }

    #[test]
    fn test_foam_budget_bounds_sane() {
        let params = FoamParams::default();
        assert!(params.min_capacity <= params.max_capacity);
        assert!(params.min_age_ticks <= params.max_age_ticks);
        assert!(params.min_spawn_per_tick <= params.max_spawn_per_tick);
    }
}
