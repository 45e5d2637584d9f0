//! Ocean plane geometry, wave and shading parameters.

use super::color::Rgb;
use crate::error::{OceanError, Result};
use crate::ocean::PlaneMesh;

/// Noise-driven vertex displacement
#[derive(Debug, Clone)]
pub struct WaveParams {
    /// Spatial frequency applied to plane X/Z before sampling noise
    pub frequency: f32,

    /// Peak displacement along +Y in world units
    pub amplitude: f32,

    /// Noise Z coordinate advances by `time_s * time_scale`
    pub time_scale: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            frequency: 0.8,
            amplitude: 0.15,
            time_scale: 0.2,
        }
    }
}

/// Height-based color blend
#[derive(Debug, Clone)]
pub struct ShadingParams {
    /// Color at low elevation
    pub color_deep: Rgb,

    /// Color at high elevation
    pub color_shallow: Rgb,

    /// Added to elevation before scaling
    /// Formula: mix_strength = (elevation + color_offset) * color_multiplier
    pub color_offset: f32,

    /// Scales the offset elevation into the blend factor
    pub color_multiplier: f32,

    /// Output alpha (plane is drawn blended)
    pub alpha: f32,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            color_deep: Rgb::new(3.0 / 255.0, 105.0 / 255.0, 161.0 / 255.0), // #0369a1
            color_shallow: Rgb::new(56.0 / 255.0, 189.0 / 255.0, 248.0 / 255.0), // #38bdf8
            color_offset: 0.1,
            color_multiplier: 5.0,
            alpha: 0.8,
        }
    }
}

/// Full description of one ocean plane
#[derive(Debug, Clone)]
pub struct OceanConfig {
    /// Extent along X (world units)
    pub width: f32,

    /// Extent along Z (world units)
    pub depth: f32,

    /// Grid cells along X (vertices per row = width_segments + 1)
    pub width_segments: u32,

    /// Grid cells along Z
    pub depth_segments: u32,

    /// World-space translation of the plane's center
    pub position: [f32; 3],

    pub waves: WaveParams,
    pub shading: ShadingParams,
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            width: 60.0,
            depth: 60.0,
            width_segments: 128,
            depth_segments: 128,
            position: [0.0, 0.0, 0.0],
            waves: WaveParams::default(),
            shading: ShadingParams::default(),
        }
    }
}

impl OceanConfig {
    /// Check the values the mesh builder and shader rely on
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(OceanError::InvalidConfig(format!(
                "width must be finite and > 0, got {}",
                self.width
            )));
        }
        if !(self.depth.is_finite() && self.depth > 0.0) {
            return Err(OceanError::InvalidConfig(format!(
                "depth must be finite and > 0, got {}",
                self.depth
            )));
        }
        PlaneMesh::grid_counts(self.width_segments, self.depth_segments)?;
        if self.position.iter().any(|c| !c.is_finite()) {
            return Err(OceanError::InvalidConfig(format!(
                "position must be finite, got {:?}",
                self.position
            )));
        }

        let waves = &self.waves;
        if !(waves.frequency.is_finite() && waves.amplitude.is_finite() && waves.time_scale.is_finite())
        {
            return Err(OceanError::InvalidConfig(format!(
                "wave parameters must be finite, got {:?}",
                waves
            )));
        }

        let shading = &self.shading;
        if !(0.0..=1.0).contains(&shading.alpha) {
            return Err(OceanError::InvalidConfig(format!(
                "alpha must be in [0, 1], got {}",
                shading.alpha
            )));
        }
        if !(shading.color_offset.is_finite() && shading.color_multiplier.is_finite()) {
            return Err(OceanError::InvalidConfig(
                "color offset and multiplier must be finite".to_string(),
            ));
        }

        Ok(())
    }
}
