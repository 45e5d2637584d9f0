//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::params::{CameraPreset, FixedCamera, OceanConfig, OrbitCamera, Rgb};
use crate::preview::MAX_PREVIEW_SIZE;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "tidewater")]
#[command(about = "Animated simplex-noise ocean plane", long_about = None)]
pub struct Args {
    /// Camera preset: orbit (default), fixed
    #[arg(long, value_name = "PRESET", default_value = "orbit")]
    pub camera: String,

    /// Grid cells per side
    #[arg(long, value_name = "N", default_value_t = 128)]
    pub segments: u32,

    /// Plane edge length (world units)
    #[arg(long, value_name = "UNITS", default_value_t = 60.0)]
    pub size: f32,

    /// Peak wave displacement (world units)
    #[arg(long, default_value_t = 0.15)]
    pub amplitude: f32,

    /// Spatial noise frequency
    #[arg(long, default_value_t = 0.8)]
    pub frequency: f32,

    /// Color of wave troughs
    #[arg(long, value_name = "HEX", default_value = "#0369a1", value_parser = parse_color)]
    pub deep: Rgb,

    /// Color of wave crests
    #[arg(long, value_name = "HEX", default_value = "#38bdf8", value_parser = parse_color)]
    pub shallow: Rgb,

    /// Write a top-down PNG snapshot instead of opening a window
    #[arg(long, value_name = "PATH")]
    pub preview: Option<PathBuf>,

    /// Time for the preview snapshot (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0)]
    pub time: f32,

    /// Preview long-side size (pixels)
    #[arg(
        long,
        value_name = "PX",
        default_value_t = 512,
        value_parser = clap::value_parser!(u32).range(1..=MAX_PREVIEW_SIZE as i64)
    )]
    pub preview_size: u32,
}

fn parse_color(s: &str) -> std::result::Result<Rgb, String> {
    Rgb::from_hex(s).map_err(|e| e.to_string())
}

impl Args {
    /// Parse camera preset from command-line arguments
    pub fn parse_camera_preset(&self) -> CameraPreset {
        match self.camera.to_lowercase().as_str() {
            "fixed" => {
                log::info!("Camera: Fixed");
                CameraPreset::Fixed(FixedCamera::default())
            }
            "orbit" => {
                log::info!("Camera: Orbit");
                CameraPreset::Orbit(OrbitCamera::default())
            }
            other => {
                log::warn!("Unknown camera preset '{}', using orbit", other);
                CameraPreset::Orbit(OrbitCamera::default())
            }
        }
    }

    /// Build and validate the ocean configuration
    pub fn ocean_config(&self) -> Result<OceanConfig> {
        let mut config = OceanConfig {
            width: self.size,
            depth: self.size,
            width_segments: self.segments,
            depth_segments: self.segments,
            ..OceanConfig::default()
        };
        config.waves.amplitude = self.amplitude;
        config.waves.frequency = self.frequency;
        config.shading.color_deep = self.deep;
        config.shading.color_shallow = self.shallow;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_ocean_defaults() {
        let args = Args::parse_from(["tidewater"]);
        let config = args.ocean_config().unwrap();
        let defaults = OceanConfig::default();

        assert_eq!(config.width, defaults.width);
        assert_eq!(config.width_segments, defaults.width_segments);
        assert_eq!(config.waves.amplitude, defaults.waves.amplitude);
        assert_eq!(config.waves.frequency, defaults.waves.frequency);
        assert_eq!(config.shading.color_deep, defaults.shading.color_deep);
        assert_eq!(config.shading.color_shallow, defaults.shading.color_shallow);
        assert!(args.preview.is_none());
        assert!(matches!(args.parse_camera_preset(), CameraPreset::Orbit(_)));
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "tidewater",
            "--camera",
            "FIXED",
            "--segments",
            "32",
            "--deep",
            "#000000",
            "--preview",
            "out.png",
            "--time",
            "2.5",
        ]);

        let config = args.ocean_config().unwrap();
        assert_eq!(config.depth_segments, 32);
        assert_eq!(config.shading.color_deep, Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(args.preview, Some(PathBuf::from("out.png")));
        assert_eq!(args.time, 2.5);
        assert!(matches!(args.parse_camera_preset(), CameraPreset::Fixed(_)));
    }

    #[test]
    fn test_unknown_camera_falls_back_to_orbit() {
        let args = Args::parse_from(["tidewater", "--camera", "drone"]);
        assert!(matches!(args.parse_camera_preset(), CameraPreset::Orbit(_)));
    }

    #[test]
    fn test_bad_color_is_a_parse_error() {
        assert!(Args::try_parse_from(["tidewater", "--deep", "blue"]).is_err());
    }

    #[test]
    fn test_zero_segments_fail_validation() {
        let args = Args::parse_from(["tidewater", "--segments", "0"]);
        assert!(args.ocean_config().is_err());
    }

    #[test]
    fn test_oversized_inputs_are_rejected() {
        let args = Args::parse_from(["tidewater", "--segments", "70000"]);
        assert!(args.ocean_config().is_err());

        assert!(Args::try_parse_from(["tidewater", "--preview-size", "4294967295"]).is_err());
        assert!(Args::try_parse_from(["tidewater", "--preview-size", "0"]).is_err());
        assert!(Args::try_parse_from(["tidewater", "--preview-size", "8192"]).is_ok());
    }
}
