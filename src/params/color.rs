//! sRGB colors as they appear in config and on the command line.

use std::fmt;
use std::str::FromStr;

use crate::error::{OceanError, Result};

/// Display-referred sRGB color, each channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string (leading `#` optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(OceanError::InvalidColor(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| OceanError::InvalidColor(hex.to_string()))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Convert to linear RGB for upload to the shader
    pub fn to_linear(self) -> [f32; 3] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
        ]
    }
}

impl FromStr for Rgb {
    type Err = OceanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }
}

/// sRGB electro-optical transfer function
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse of [`srgb_to_linear`], what an sRGB render target applies on store
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        let deep = Rgb::from_hex("#0369a1").unwrap();
        assert_eq!(deep, Rgb::new(3.0 / 255.0, 105.0 / 255.0, 161.0 / 255.0));

        // Prefix is optional, case does not matter
        let shallow: Rgb = "38BDF8".parse().unwrap();
        assert_eq!(shallow.to_string(), "#38bdf8");
    }

    #[test]
    fn test_reject_malformed_hex() {
        for bad in ["", "#", "#fff", "#0369a1ff", "#zz69a1", "#03 9a1"] {
            assert!(
                matches!(Rgb::from_hex(bad), Err(OceanError::InvalidColor(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_linear_conversion_roundtrip_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);

        // Mid grey is darker in linear space
        let mid = srgb_to_linear(0.5);
        assert!((mid - 0.2140).abs() < 1e-3);
        assert!((linear_to_srgb(mid) - 0.5).abs() < 1e-5);
    }
}
