//! Parameter definitions with world units and documented semantics.
//!
//! All magic numbers of the ocean plane live here with:
//! - World units (the plane is 60 x 60 by default)
//! - Documented ranges and meanings
//! - Validation where a bad value would break the mesh or shader

mod camera;
mod color;
mod ocean;
mod render;

// Re-export all types
pub use camera::{CameraPreset, FixedCamera, OrbitCamera};
pub use color::{linear_to_srgb, srgb_to_linear, Rgb};
pub use ocean::{OceanConfig, ShadingParams, WaveParams};
pub use render::RenderConfig;
