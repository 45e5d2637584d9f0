//! The ocean plane: mesh, shader parameters and the per-frame time hook.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

use super::mesh::PlaneMesh;
use super::surface::{Shading, Surface};
use crate::error::Result;
use crate::params::OceanConfig;

/// Uniform block shared by both shader stages (matches `OceanUniforms` in ocean.wgsl)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct OceanUniforms {
    pub model: [[f32; 4]; 4],
    pub view_proj: [[f32; 4]; 4],
    pub color_deep: [f32; 3],
    pub alpha: f32,
    pub color_shallow: [f32; 3],
    pub time: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub time_scale: f32,
    pub color_offset: f32,
    pub color_multiplier: f32,
    pub _padding: [f32; 3], // Pad to 16-byte multiple
}

/// Animated ocean surface, placed in the world by a translation
pub struct OceanPlane {
    mesh: PlaneMesh,
    surface: Surface,
    shading: Shading,
    position: Vec3,
    uniforms: OceanUniforms,
}

impl OceanPlane {
    /// Validate the config, build the mesh and the initial (t = 0) uniforms
    pub fn new(config: OceanConfig) -> Result<Self> {
        config.validate()?;

        let mesh = PlaneMesh::new(
            config.width,
            config.depth,
            config.width_segments,
            config.depth_segments,
        )?;
        let surface = Surface::new(config.waves.clone());
        let shading = Shading::new(&config.shading);
        let position = Vec3::from_array(config.position);

        let uniforms = OceanUniforms {
            model: Mat4::from_translation(position).to_cols_array_2d(),
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            color_deep: shading.deep().to_array(),
            alpha: config.shading.alpha,
            color_shallow: shading.shallow().to_array(),
            time: 0.0,
            amplitude: config.waves.amplitude,
            frequency: config.waves.frequency,
            time_scale: config.waves.time_scale,
            color_offset: config.shading.color_offset,
            color_multiplier: config.shading.color_multiplier,
            _padding: [0.0; 3],
        };

        log::debug!(
            "Ocean plane: {}x{} at {:?}, {} vertices",
            config.width,
            config.depth,
            config.position,
            mesh.vertices.len()
        );

        Ok(Self {
            mesh,
            surface,
            shading,
            position,
            uniforms,
        })
    }

    /// Per-frame hook: store the clock's elapsed seconds in the time uniform
    pub fn update(&mut self, elapsed_s: f32) {
        self.uniforms.time = elapsed_s;
    }

    /// Camera matrix owned by the host; not touched by `update`
    pub fn set_view_proj(&mut self, view_proj: Mat4) {
        self.uniforms.view_proj = view_proj.to_cols_array_2d();
    }

    pub fn time(&self) -> f32 {
        self.uniforms.time
    }

    pub fn uniforms(&self) -> &OceanUniforms {
        &self.uniforms
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn mesh(&self) -> &PlaneMesh {
        &self.mesh
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn shading(&self) -> &Shading {
        &self.shading
    }

    /// Elevation and shaded linear RGBA at local plane coordinate (x, z), time `time_s`
    pub fn sample(&self, x: f32, z: f32, time_s: f32) -> (f32, Vec4) {
        let elevation = self.surface.elevation(x, z, time_s);
        (elevation, self.shading.shade(elevation))
    }
}
