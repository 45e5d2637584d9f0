//! CPU reference for the ocean shader's displacement and color blend.
//!
//! The vertex stage moves each vertex along +Y by
//! `snoise(x * frequency, z * frequency, t * time_scale) * amplitude`, and the
//! fragment stage blends two colors by that elevation. Both are reproduced
//! here so the math can be tested and rendered without a GPU.

use glam::{Vec3, Vec4};

use crate::noise::snoise;
use crate::params::{ShadingParams, WaveParams};

/// Noise height field over the plane
#[derive(Debug, Clone)]
pub struct Surface {
    waves: WaveParams,
}

impl Surface {
    pub fn new(waves: WaveParams) -> Self {
        Self { waves }
    }

    pub fn waves(&self) -> &WaveParams {
        &self.waves
    }

    /// Wave height at local plane coordinate (x, z) and time `time_s`
    pub fn elevation(&self, x: f32, z: f32, time_s: f32) -> f32 {
        let noise_pos = Vec3::new(
            x * self.waves.frequency,
            z * self.waves.frequency,
            time_s * self.waves.time_scale,
        );
        snoise(noise_pos) * self.waves.amplitude
    }

    /// Displace a local vertex position, returning it along with its elevation
    pub fn displace(&self, position: Vec3, time_s: f32) -> (Vec3, f32) {
        let elevation = self.elevation(position.x, position.z, time_s);
        (position + Vec3::Y * elevation, elevation)
    }
}

/// Linear-space color blend driven by elevation
#[derive(Debug, Clone)]
pub struct Shading {
    deep: Vec3,
    shallow: Vec3,
    color_offset: f32,
    color_multiplier: f32,
    alpha: f32,
}

impl Shading {
    pub fn new(params: &ShadingParams) -> Self {
        Self {
            deep: Vec3::from_array(params.color_deep.to_linear()),
            shallow: Vec3::from_array(params.color_shallow.to_linear()),
            color_offset: params.color_offset,
            color_multiplier: params.color_multiplier,
            alpha: params.alpha,
        }
    }

    /// Blend factor; not clamped, so the mix may extrapolate past either color
    pub fn mix_strength(&self, elevation: f32) -> f32 {
        (elevation + self.color_offset) * self.color_multiplier
    }

    /// Fragment color in linear RGBA, clamped the way the render target stores it
    pub fn shade(&self, elevation: f32) -> Vec4 {
        let color = self.deep.lerp(self.shallow, self.mix_strength(elevation));
        color.extend(self.alpha).clamp(Vec4::ZERO, Vec4::ONE)
    }

    pub fn deep(&self) -> Vec3 {
        self.deep
    }

    pub fn shallow(&self) -> Vec3 {
        self.shallow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_elevation_bounded_by_amplitude() {
        let surface = Surface::new(WaveParams::default());
        let amplitude = surface.waves().amplitude;

        for i in 0..400 {
            let x = (i % 20) as f32 * 3.0 - 30.0;
            let z = (i / 20) as f32 * 3.0 - 30.0;
            let e = surface.elevation(x, z, i as f32 * 0.05);
            assert!(e.abs() <= amplitude * 1.1, "elevation {} at ({}, {})", e, x, z);
        }
    }

    #[test]
    fn test_elevation_animates_over_time() {
        let surface = Surface::new(WaveParams::default());
        let moved = (0..50).any(|i| {
            let x = i as f32 * 0.7;
            (surface.elevation(x, 1.3, 0.0) - surface.elevation(x, 1.3, 5.0)).abs() > 1e-3
        });
        assert!(moved);
    }

    #[test]
    fn test_zero_amplitude_is_flat() {
        let surface = Surface::new(WaveParams {
            amplitude: 0.0,
            ..WaveParams::default()
        });
        let (pos, e) = surface.displace(Vec3::new(4.0, 0.0, -7.0), 12.0);
        assert_eq!(e, 0.0);
        assert_eq!(pos, Vec3::new(4.0, 0.0, -7.0));
    }

    #[test]
    fn test_displace_moves_only_y() {
        let surface = Surface::new(WaveParams::default());
        let (pos, e) = surface.displace(Vec3::new(2.5, 0.25, 3.5), 1.0);
        assert_eq!(pos.x, 2.5);
        assert_eq!(pos.z, 3.5);
        assert!(approx(pos.y, 0.25 + e));
    }

    #[test]
    fn test_mix_strength_formula() {
        let shading = Shading::new(&ShadingParams::default());

        // (e + 0.1) * 5.0
        assert!(approx(shading.mix_strength(-0.1), 0.0));
        assert!(approx(shading.mix_strength(0.1), 1.0));
        assert!(approx(shading.mix_strength(0.0), 0.5));
    }

    #[test]
    fn test_shade_endpoints_and_alpha() {
        let shading = Shading::new(&ShadingParams::default());

        let deep = shading.shade(-0.1);
        assert!(deep.truncate().abs_diff_eq(shading.deep(), 1e-5));
        assert!(approx(deep.w, 0.8));

        let shallow = shading.shade(0.1);
        assert!(shallow.truncate().abs_diff_eq(shading.shallow(), 1e-5));
    }

    #[test]
    fn test_shade_extrapolates_then_clamps() {
        let shading = Shading::new(&ShadingParams::default());

        // Strength 1.5 pushes past the shallow color but stays displayable
        let bright = shading.shade(0.2);
        let expected = shading
            .deep()
            .lerp(shading.shallow(), 1.5)
            .clamp(Vec3::ZERO, Vec3::ONE);
        assert!(bright.truncate().abs_diff_eq(expected, 1e-5));
        assert!(bright.truncate().cmpge(shading.shallow() - 1e-6).all());
        assert!(bright.max_element() <= 1.0);
    }
}
