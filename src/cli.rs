//! Command-line argument parsing and scene construction.

use clap::Parser;

use crate::cyclone::CycloneSystem;
use crate::params::{
    CycloneParams, FoamParams, Palette, RecordingConfig, RippleParams, ShoalProfile, TrailParams,
    WaveParams,
};
use crate::scene::Scene;
use crate::wave::WaveSystem;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Shoreline")]
#[command(about = "Procedural ocean and cyclone animations", long_about = None)]
pub struct Args {
    /// Scene: wave (default), shoal, cyclone
    #[arg(long, value_name = "SCENE", default_value = "wave")]
    pub scene: String,

    /// Palette: lagoon, abyss, storm (scene picks its own if omitted)
    #[arg(long, value_name = "NAME")]
    pub palette: Option<String>,

    /// Wave height in logical px (wave scenes)
    #[arg(long, value_name = "PX")]
    pub amplitude: Option<f32>,

    /// Master wavelength in logical px (wave scenes)
    #[arg(long, value_name = "PX")]
    pub wavelength: Option<f32>,

    /// Animation speed multiplier
    #[arg(long, value_name = "FACTOR")]
    pub speed: Option<f32>,

    /// Storm spin rate in rad/s (cyclone)
    #[arg(long, value_name = "RAD_S")]
    pub spin: Option<f32>,

    /// Storm travel speed in px/s (cyclone)
    #[arg(long, value_name = "PX_S")]
    pub travel: Option<f32>,

    /// Wind intensity, 0 to 1.6 (cyclone)
    #[arg(long, value_name = "INTENSITY")]
    pub wind: Option<f32>,

    /// Rain band count, 2-8 looks best (cyclone)
    #[arg(long, value_name = "COUNT")]
    pub bands: Option<u32>,

    /// Vertical meander amplitude in px (cyclone)
    #[arg(long, value_name = "PX")]
    pub path_amplitude: Option<f32>,

    /// Record to PNG frames (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,
}

impl Args {
    /// Build the scene selected on the command line.
    pub fn build_scene(&self) -> Scene {
        match self.scene.to_lowercase().as_str() {
            "shoal" | "shore" => {
                println!("Scene: Shoal (near-shore break)");
                Scene::Wave(WaveSystem::near_shore(
                    self.wave_params(),
                    ShoalProfile::default(),
                    RippleParams::default(),
                    FoamParams::default(),
                    self.palette_or("lagoon"),
                ))
            }
            "cyclone" | "storm" => {
                println!("Scene: Cyclone (log-spiral storm)");
                Scene::Cyclone(CycloneSystem::new(
                    self.cyclone_params(),
                    TrailParams::default(),
                    self.palette_or("storm"),
                ))
            }
            "wave" => {
                println!("Scene: Wave (open water)");
                Scene::Wave(WaveSystem::open_water(
                    self.wave_params(),
                    RippleParams::default(),
                    FoamParams::default(),
                    self.palette_or("lagoon"),
                ))
            }
            other => {
                eprintln!("Warning: Unknown scene '{}', using wave", other);
                Scene::Wave(WaveSystem::open_water(
                    self.wave_params(),
                    RippleParams::default(),
                    FoamParams::default(),
                    self.palette_or("lagoon"),
                ))
            }
        }
    }

    fn wave_params(&self) -> WaveParams {
        let mut params = WaveParams::default();
        if let Some(amplitude) = self.amplitude {
            params.amplitude_px = amplitude.clamp(params.min_amplitude_px, params.max_amplitude_px);
        }
        if let Some(wavelength) = self.wavelength {
            params.wavelength_px = wavelength.max(crate::params::MIN_WAVELENGTH_PX);
        }
        if let Some(speed) = self.speed {
            params.speed = speed.max(0.0);
        }
        params
    }

    fn cyclone_params(&self) -> CycloneParams {
        let mut params = CycloneParams::default();
        if let Some(spin) = self.spin {
            params.spin_rad_per_s = spin;
        }
        if let Some(travel) = self.travel {
            params.travel_px_per_s = travel;
        }
        if let Some(wind) = self.wind {
            params.wind_intensity = wind;
        }
        if let Some(bands) = self.bands {
            params.band_count = bands;
        }
        if let Some(path_amplitude) = self.path_amplitude {
            params.path_amplitude_px = path_amplitude.max(0.0);
        }
        if let Some(speed) = self.speed {
            let speed = speed.max(0.0);
            params.spin_rad_per_s *= speed;
            params.travel_px_per_s *= speed;
        }
        params
    }

    fn palette_or(&self, fallback: &str) -> Palette {
        let name = self.palette.as_deref().unwrap_or(fallback);
        let palette = Palette::by_name(name);
        println!("Palette: {}", palette.name);
        palette
    }

    /// Create recording configuration if recording mode is enabled
    pub fn create_recording_config(&self) -> Option<RecordingConfig> {
        self.record.map(|duration| {
            let config = RecordingConfig::new(duration);

            // Create output directories
            std::fs::create_dir_all(config.frames_dir())
                .expect("Failed to create frames directory");
            std::fs::create_dir_all(&config.output_dir).expect("Failed to create output directory");

            config
        })
    }
}
