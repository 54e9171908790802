//! Parameter definitions with units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Units (logical px, seconds, radians, ticks)
//! - Documented ranges and meanings
//! - Defaults matching the stock scenes

mod cyclone;
mod palette;
mod render;
mod wave;

// Re-export all types
pub use cyclone::{
    CycloneParams, TrailParams, MAX_BAND_COUNT, MAX_WIND_INTENSITY, MIN_BAND_COUNT,
};
pub use palette::{Palette, Rgba};
pub use render::{RecordingConfig, RenderConfig};
pub use wave::{
    FoamParams, RippleParams, ShoalProfile, WaveLayer, WaveParams, MIN_WAVELENGTH_PX,
};
