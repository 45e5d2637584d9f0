//! Top-down CPU snapshot of the shaded ocean plane.
//!
//! Evaluates the same displacement and color blend as the shader for every
//! pixel and composites it over the background, so the look can be checked
//! (or captured in CI) without a GPU.

use std::path::Path;

use glam::Vec3;
use image::{Rgba, RgbaImage};

use crate::error::{OceanError, Result};
use crate::ocean::OceanPlane;
use crate::params::{linear_to_srgb, Rgb};

/// Longest preview side accepted, in pixels
pub const MAX_PREVIEW_SIZE: u32 = 8192;

/// Render the plane seen from straight above at time `time_s`
///
/// The image's long side is `size` pixels; the short side follows the plane's
/// aspect ratio. Row 0 is the plane's -Z edge.
pub fn render_preview(
    plane: &OceanPlane,
    time_s: f32,
    size: u32,
    background: Rgb,
) -> Result<RgbaImage> {
    if size == 0 || size > MAX_PREVIEW_SIZE {
        return Err(OceanError::InvalidConfig(format!(
            "preview size must be in 1..={}, got {}",
            MAX_PREVIEW_SIZE, size
        )));
    }

    let (width, depth) = plane.mesh().extent();
    let (img_w, img_h) = if width >= depth {
        (size, ((size as f32 * depth / width).round() as u32).max(1))
    } else {
        (((size as f32 * width / depth).round() as u32).max(1), size)
    };

    let bg = Vec3::from_array(background.to_linear());
    let mut img = RgbaImage::new(img_w, img_h);

    for (px, py, pixel) in img.enumerate_pixels_mut() {
        let x = ((px as f32 + 0.5) / img_w as f32 - 0.5) * width;
        let z = ((py as f32 + 0.5) / img_h as f32 - 0.5) * depth;

        let (_, color) = plane.sample(x, z, time_s);
        let blended = color.truncate() * color.w + bg * (1.0 - color.w);

        let to_byte = |c: f32| (linear_to_srgb(c.clamp(0.0, 1.0)) * 255.0).round() as u8;
        *pixel = Rgba([to_byte(blended.x), to_byte(blended.y), to_byte(blended.z), 255]);
    }

    Ok(img)
}

/// Render a preview and write it as PNG
pub fn save_preview(
    plane: &OceanPlane,
    time_s: f32,
    size: u32,
    background: Rgb,
    path: &Path,
) -> Result<()> {
    let img = render_preview(plane, time_s, size, background)?;
    img.save(path)?;
    log::info!(
        "Preview written: {} ({}x{}, t={:.2}s)",
        path.display(),
        img.width(),
        img.height(),
        time_s
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{OceanConfig, ShadingParams};

    fn background() -> Rgb {
        Rgb::new(0.0, 0.0, 0.0)
    }

    #[test]
    fn test_preview_dimensions_follow_aspect() {
        let plane = OceanPlane::new(OceanConfig {
            width: 60.0,
            depth: 30.0,
            width_segments: 8,
            depth_segments: 4,
            ..OceanConfig::default()
        })
        .unwrap();

        let img = render_preview(&plane, 0.0, 64, background()).unwrap();
        assert_eq!((img.width(), img.height()), (64, 32));
    }

    #[test]
    fn test_preview_is_blue_and_varies() {
        let plane = OceanPlane::new(OceanConfig::default()).unwrap();
        let img = render_preview(&plane, 1.0, 48, background()).unwrap();

        // Both palette colors are blue-dominant
        assert!(img.pixels().all(|p| p[2] >= p[0] && p[3] == 255));

        let first = img.get_pixel(0, 0);
        assert!(img.pixels().any(|p| p != first), "preview is a flat color");
    }

    #[test]
    fn test_flat_sea_is_uniform() {
        let mut config = OceanConfig::default();
        config.waves.amplitude = 0.0;
        let plane = OceanPlane::new(config).unwrap();

        let img = render_preview(&plane, 3.0, 16, background()).unwrap();
        let first = *img.get_pixel(0, 0);
        assert!(img.pixels().all(|p| *p == first));

        // Elevation 0 blends halfway at 80% opacity over black
        let shading = crate::ocean::Shading::new(&ShadingParams::default());
        let expected = shading.deep().lerp(shading.shallow(), 0.5) * 0.8;
        let expected_g = (linear_to_srgb(expected.y) * 255.0).round() as u8;
        assert_eq!(first[1], expected_g);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let plane = OceanPlane::new(OceanConfig::default()).unwrap();
        assert!(render_preview(&plane, 0.0, 0, background()).is_err());
    }

    #[test]
    fn test_oversized_preview_is_rejected() {
        let plane = OceanPlane::new(OceanConfig::default()).unwrap();
        assert!(matches!(
            render_preview(&plane, 0.0, u32::MAX, background()),
            Err(OceanError::InvalidConfig(_))
        ));
        assert!(render_preview(&plane, 0.0, MAX_PREVIEW_SIZE + 1, background()).is_err());
    }

    #[test]
    fn test_save_preview_writes_png() {
        let plane = OceanPlane::new(OceanConfig::default()).unwrap();
        let path = std::env::temp_dir().join(format!("tidewater_preview_{}.png", std::process::id()));

        save_preview(&plane, 0.5, 32, background(), &path).unwrap();

        let loaded = image::open(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (32, 32));
        let _ = std::fs::remove_file(&path);
    }
}
