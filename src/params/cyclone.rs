//! Cyclone parameters: spin, travel, rain bands, track trail

/// Fewest rain bands a storm can render with.
pub const MIN_BAND_COUNT: u32 = 1;
/// Most rain bands a storm can render with.
pub const MAX_BAND_COUNT: u32 = 10;
/// Upper clamp for wind intensity.
pub const MAX_WIND_INTENSITY: f32 = 1.6;

/// Parameters for the cyclone scene
#[derive(Debug, Clone)]
pub struct CycloneParams {
    /// Angular velocity of the band rotation (rad/s)
    pub spin_rad_per_s: f32,
    /// Horizontal travel speed of the storm center (logical px/s)
    pub travel_px_per_s: f32,
    /// Visual intensity knob, clamped to [0, 1.6]
    pub wind_intensity: f32,
    /// Vertical meander amplitude around mid-height (logical px)
    pub path_amplitude_px: f32,
    /// Meander spatial frequency (radians per px of travel)
    pub path_freq_rad_per_px: f32,
    /// Requested rain band count, clamped to [1, 10]
    pub band_count: u32,
    /// Log-spiral scale `a` in r = a * e^(b * theta) (logical px)
    pub spiral_a_px: f32,
    /// Log-spiral growth rate `b` (dimensionless)
    pub spiral_b: f32,
    /// Angular extent of each band in full turns
    pub spiral_turns: f32,
    /// Off-screen margin the center wraps across (logical px)
    pub wrap_margin_px: f32,
    /// Radius of the calm eye disc (logical px)
    pub eye_radius_px: f32,
    /// Inner radius of the eyewall ring (logical px)
    pub eyewall_inner_px: f32,
    /// Outer radius of the eyewall ring (logical px)
    pub eyewall_outer_px: f32,
    /// Angular step between band polyline samples (radians)
    pub band_step_rad: f32,
}

impl Default for CycloneParams {
    fn default() -> Self {
        Self {
            spin_rad_per_s: 0.9,
            travel_px_per_s: 42.0,
            wind_intensity: 1.0,
            path_amplitude_px: 60.0,
            path_freq_rad_per_px: 0.0045,
            band_count: 5,
            spiral_a_px: 14.0,
            spiral_b: 0.16,
            spiral_turns: 2.2,
            wrap_margin_px: 120.0,
            eye_radius_px: 12.0,
            eyewall_inner_px: 16.0,
            eyewall_outer_px: 24.0,
            band_step_rad: 0.12,
        }
    }
}

/// Parameters for the storm track trail
#[derive(Debug, Clone)]
pub struct TrailParams {
    /// Hard cap on recorded track points (oldest evicted first)
    pub cap: usize,
    /// Minimum center movement between recorded points (logical px)
    pub min_distance_px: f32,
    /// Minimum sim-time gap between recorded points (seconds)
    pub min_interval_s: f32,
    /// Consecutive points further apart than this are not connected
    /// (hides the jump where the center wraps off one edge onto the other)
    pub stretch_limit_px: f32,
    /// Stroke width of the rendered trail (logical px)
    pub width_px: f32,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            cap: 400,
            min_distance_px: 6.0,
            min_interval_s: 0.04,
            stretch_limit_px: 180.0,
            width_px: 3.0,
        }
    }
}
