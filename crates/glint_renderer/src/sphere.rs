//! Sphere primitive for ray tracing.

use crate::{Material, Ray, Surface};
use glint_math::{Color, Interval, Vec3};

/// A solid-colored sphere.
pub struct Sphere {
    center: Vec3,
    color: Color,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, color: Color, radius: f64, material: Material) -> Self {
        Self {
            center,
            color,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Surface for Sphere {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 || a == 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let root = (h - sqrtd) / a;
        if ray_t.surrounds(root) {
            return Some(root);
        }
        let root = (h + sqrtd) / a;
        ray_t.surrounds(root).then_some(root)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize_or_zero()
    }

    fn color_at(&self, _point: Vec3) -> Color {
        self.color
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::ZERO, Color::new(0.5, 0.5, 0.5), 1.0, Material::default())
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere();
        let ray = Ray::primary(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        let t = sphere.intersect(&ray, Interval::FORWARD).unwrap();
        assert_eq!(t, 4.0);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere();

        // Ray pointing away from sphere
        let ray = Ray::primary(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.intersect(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = unit_sphere();
        let ray = Ray::primary(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(sphere.intersect(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_inside_sphere_uses_far_root() {
        let sphere = unit_sphere();
        let ray = Ray::primary(Vec3::ZERO, Vec3::X);
        let t = sphere.intersect(&ray, Interval::FORWARD).unwrap();
        assert!((t - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unnormalized_direction() {
        let sphere = unit_sphere();
        let ray = Ray::primary(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -2.0));
        let t = sphere.intersect(&ray, Interval::FORWARD).unwrap();
        assert!((ray.at(t) - Vec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_normal_and_color() {
        let sphere = Sphere::new(
            Vec3::new(1.0, 1.0, 1.0),
            Color::new(0.0, 1.0, 0.0),
            2.0,
            Material::default(),
        );
        assert_eq!(sphere.normal_at(Vec3::new(1.0, 1.0, 3.0)), Vec3::Z);
        assert_eq!(sphere.color_at(Vec3::ZERO), Color::new(0.0, 1.0, 0.0));
    }
}
