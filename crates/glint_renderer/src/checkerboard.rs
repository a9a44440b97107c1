//! Infinite checkerboard ground plane.

use crate::{Material, Ray, Surface};
use glint_math::{Color, Interval, Vec3};

/// Directions closer to parallel than this never meet the plane.
const PARALLEL_EPSILON: f64 = 1e-12;

/// The horizontal plane `z = height`, tiled with unit squares of two tones.
pub struct CheckBoard {
    height: f64,
    light: Color,
    dark: Color,
    material: Material,
}

impl CheckBoard {
    /// Create a checkerboard at the given height.
    pub fn new(height: f64, light: Color, dark: Color, material: Material) -> Self {
        Self {
            height,
            light,
            dark,
            material,
        }
    }
}

impl Default for CheckBoard {
    fn default() -> Self {
        Self::new(0.0, Color::splat(0.9), Color::splat(0.1), Material::default())
    }
}

impl Surface for CheckBoard {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        let denom = ray.direction().z;
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = (self.height - ray.origin().z) / denom;
        ray_t.surrounds(t).then_some(t)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        Vec3::Z
    }

    fn color_at(&self, point: Vec3) -> Color {
        let parity = (point.x.floor() + point.y.floor()).rem_euclid(2.0);
        if parity < 1.0 {
            self.light
        } else {
            self.dark
        }
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
