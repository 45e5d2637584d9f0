//! Flat, subdivided plane geometry in the XZ plane.

use bytemuck::{Pod, Zeroable};

use crate::error::{OceanError, Result};

/// Largest cell count accepted along either side of the plane
pub const MAX_SEGMENTS: u32 = 2048;

/// Vertex data for the plane (position + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Undisplaced plane mesh; the vertex shader adds the wave height
#[derive(Debug, Clone)]
pub struct PlaneMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    width: f32,
    depth: f32,
    width_segments: u32,
    depth_segments: u32,
}

impl PlaneMesh {
    /// Build a `width` x `depth` grid centered on the origin with the given cell counts
    pub fn new(width: f32, depth: f32, width_segments: u32, depth_segments: u32) -> Result<Self> {
        if !(width.is_finite() && width > 0.0 && depth.is_finite() && depth > 0.0) {
            return Err(OceanError::InvalidConfig(format!(
                "plane size must be finite and > 0, got {}x{}",
                width, depth
            )));
        }
        let (vertex_count, index_count) = Self::grid_counts(width_segments, depth_segments)?;

        let half_width = width / 2.0;
        let half_depth = depth / 2.0;
        let cell_x = width / width_segments as f32;
        let cell_z = depth / depth_segments as f32;
        let row = width_segments + 1;

        let mut vertices = Vec::with_capacity(vertex_count as usize);
        let mut indices = Vec::with_capacity(index_count as usize);

        for iz in 0..=depth_segments {
            for ix in 0..=width_segments {
                vertices.push(Vertex {
                    position: [
                        ix as f32 * cell_x - half_width,
                        0.0,
                        iz as f32 * cell_z - half_depth,
                    ],
                    uv: [
                        ix as f32 / width_segments as f32,
                        1.0 - iz as f32 / depth_segments as f32,
                    ],
                });
            }
        }

        // Counter-clockwise when viewed from +Y
        for iz in 0..depth_segments {
            for ix in 0..width_segments {
                let top_left = iz * row + ix;
                let top_right = top_left + 1;
                let bottom_left = (iz + 1) * row + ix;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Ok(Self {
            vertices,
            indices,
            width,
            depth,
            width_segments,
            depth_segments,
        })
    }

    /// Vertex and index counts for a grid, rejecting empty or oversized grids
    ///
    /// Both counts must fit in `u32` since the index buffer is `Uint32`.
    pub fn grid_counts(width_segments: u32, depth_segments: u32) -> Result<(u32, u32)> {
        if width_segments == 0 || depth_segments == 0 {
            return Err(OceanError::InvalidConfig(format!(
                "plane segments must be > 0, got {}x{}",
                width_segments, depth_segments
            )));
        }
        if width_segments > MAX_SEGMENTS || depth_segments > MAX_SEGMENTS {
            return Err(OceanError::InvalidConfig(format!(
                "plane segments must be <= {}, got {}x{}",
                MAX_SEGMENTS, width_segments, depth_segments
            )));
        }

        let vertex_count = (width_segments + 1).checked_mul(depth_segments + 1);
        let index_count = width_segments
            .checked_mul(depth_segments)
            .and_then(|cells| cells.checked_mul(6));

        match (vertex_count, index_count) {
            (Some(vertices), Some(indices)) => Ok((vertices, indices)),
            _ => Err(OceanError::InvalidConfig(format!(
                "plane grid {}x{} overflows u32 vertex indices",
                width_segments, depth_segments
            ))),
        }
    }

    /// World-space size (width along X, depth along Z)
    pub fn extent(&self) -> (f32, f32) {
        (self.width, self.depth)
    }

    pub fn segments(&self) -> (u32, u32) {
        (self.width_segments, self.depth_segments)
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}
