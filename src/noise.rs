//! 3D simplex noise for the ocean surface.
//!
//! This is the permutation-polynomial simplex noise that the vertex shader
//! evaluates (`snoise` in `shaders/ocean.wgsl`). The CPU copy mirrors the WGSL
//! line for line so that heights computed here match what the GPU draws.
//! Output is roughly in [-1, 1]; there is no seed.

use glam::{Vec3, Vec3Swizzles, Vec4, Vec4Swizzles};
use ::noise::NoiseFn;

/// Stateless simplex noise generator
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplexNoise;

impl SimplexNoise {
    pub fn new() -> Self {
        Self
    }

    /// Sample noise at a 3D position
    pub fn sample(&self, p: Vec3) -> f32 {
        snoise(p)
    }
}

impl NoiseFn<f64, 3> for SimplexNoise {
    fn get(&self, point: [f64; 3]) -> f64 {
        snoise(Vec3::new(point[0] as f32, point[1] as f32, point[2] as f32)) as f64
    }
}

// GLSL-style `mod`, which floors rather than truncates
fn mod289_3(x: Vec3) -> Vec3 {
    x - (x / 289.0).floor() * 289.0
}

fn mod289_4(x: Vec4) -> Vec4 {
    x - (x / 289.0).floor() * 289.0
}

fn permute(x: Vec4) -> Vec4 {
    mod289_4((x * 34.0 + 1.0) * x)
}

fn taylor_inv_sqrt(r: Vec4) -> Vec4 {
    1.792_842_9 - 0.853_734_7 * r
}

// GLSL `step(edge, x)`: 0 where x < edge, else 1
fn step3(edge: Vec3, x: Vec3) -> Vec3 {
    Vec3::select(x.cmplt(edge), Vec3::ZERO, Vec3::ONE)
}

fn step4(edge: Vec4, x: Vec4) -> Vec4 {
    Vec4::select(x.cmplt(edge), Vec4::ZERO, Vec4::ONE)
}

/// Evaluate simplex noise at `v`
pub fn snoise(v: Vec3) -> f32 {
    const C_X: f32 = 1.0 / 6.0;
    const C_Y: f32 = 1.0 / 3.0;

    // First corner
    let i = (v + v.dot(Vec3::splat(C_Y))).floor();
    let x0 = v - i + i.dot(Vec3::splat(C_X));

    // Other corners
    let g = step3(x0.yzx(), x0);
    let l = 1.0 - g;
    let i1 = g.min(l.zxy());
    let i2 = g.max(l.zxy());

    let x1 = x0 - i1 + C_X;
    let x2 = x0 - i2 + 2.0 * C_X;
    let x3 = x0 - 1.0 + 3.0 * C_X;

    // Permutations
    let i = mod289_3(i);
    let p = permute(
        permute(
            permute(i.z + Vec4::new(0.0, i1.z, i2.z, 1.0)) + i.y + Vec4::new(0.0, i1.y, i2.y, 1.0),
        ) + i.x
            + Vec4::new(0.0, i1.x, i2.x, 1.0),
    );

    // Gradients: 7x7 points over a square, mapped onto an octahedron
    let n_ = 1.0 / 7.0;
    let ns = Vec3::new(2.0 * n_, 0.5 * n_ - 1.0, n_);

    let j = p - 49.0 * (p * ns.z * ns.z).floor();

    let x_ = (j * ns.z).floor();
    let y_ = (j - 7.0 * x_).floor();

    let x = x_ * ns.x + ns.y;
    let y = y_ * ns.x + ns.y;
    let h = 1.0 - x.abs() - y.abs();

    let b0 = Vec4::new(x.x, x.y, y.x, y.y);
    let b1 = Vec4::new(x.z, x.w, y.z, y.w);

    let s0 = b0.floor() * 2.0 + 1.0;
    let s1 = b1.floor() * 2.0 + 1.0;
    let sh = -step4(h, Vec4::ZERO);

    let a0 = b0.xzyw() + s0.xzyw() * sh.xxyy();
    let a1 = b1.xzyw() + s1.xzyw() * sh.zzww();

    let mut p0 = Vec3::new(a0.x, a0.y, h.x);
    let mut p1 = Vec3::new(a0.z, a0.w, h.y);
    let mut p2 = Vec3::new(a1.x, a1.y, h.z);
    let mut p3 = Vec3::new(a1.z, a1.w, h.w);

    // Normalise gradients
    let norm = taylor_inv_sqrt(Vec4::new(p0.dot(p0), p1.dot(p1), p2.dot(p2), p3.dot(p3)));
    p0 *= norm.x;
    p1 *= norm.y;
    p2 *= norm.z;
    p3 *= norm.w;

    // Mix final noise value
    let m = (0.6 - Vec4::new(x0.dot(x0), x1.dot(x1), x2.dot(x2), x3.dot(x3))).max(Vec4::ZERO);
    let m = m * m;
    42.0 * (m * m).dot(Vec4::new(p0.dot(x0), p1.dot(x1), p2.dot(x2), p3.dot(x3)))
}
