//! Ocean surface: plane mesh, noise displacement and height-based shading.

mod mesh;
mod plane;
mod surface;

// Re-export public types
pub use mesh::{PlaneMesh, Vertex, MAX_SEGMENTS};
pub use plane::{OceanPlane, OceanUniforms};
pub use surface::{Shading, Surface};
