//! Camera presets for the demo host.

/// Stationary camera
#[derive(Debug, Clone)]
pub struct FixedCamera {
    /// Camera position (world units)
    pub eye: [f32; 3],

    /// Look-at target (world units)
    pub target: [f32; 3],
}

impl Default for FixedCamera {
    fn default() -> Self {
        Self {
            eye: [0.0, 12.0, 38.0], // Above the near edge of a 60 x 60 plane
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Camera circling the plane's center at constant height
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Horizontal distance from the center (world units)
    pub radius: f32,

    /// Height above the center (world units)
    pub height: f32,

    /// Orbit rate (radians per second)
    pub angular_speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            radius: 40.0,
            height: 14.0,
            angular_speed: 0.05, // One lap every ~2 minutes
        }
    }
}

/// Camera preset selection
#[derive(Debug, Clone)]
pub enum CameraPreset {
    /// Fixed preset: stationary camera looking at the plane
    Fixed(FixedCamera),

    /// Orbit preset: slow circle around the plane
    Orbit(OrbitCamera),
}

impl Default for CameraPreset {
    fn default() -> Self {
        Self::Orbit(OrbitCamera::default())
    }
}
