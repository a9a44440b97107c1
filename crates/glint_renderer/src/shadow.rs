//! Soft shadows from the area light.
//!
//! Shadow rays are aimed at random points on the light's disk, seen from
//! the shaded point, plus one ray at the disk center. Each ray returns the
//! Lambertian contribution of the light, black when an opaque object is in
//! the way, or a dimmed contribution through glass. The estimate is the
//! plain mean of all rays.

use std::f64::consts::PI;

use crate::surface::check_collisions_within;
use crate::{gen_f64, Light, Ray, SurfaceList};
use glint_math::{orthonormal_basis, try_unit, Color, Interval, Vec3};
use rand::RngCore;

/// Shadow rays run from the shaded point (t = 0) to the light sample (t = 1).
const SHADOW_INTERVAL: Interval = Interval { min: 0.0, max: 1.0 };

/// Rays from the origin of `ray_to_light` to `n` random points on the
/// light's disk, followed by `ray_to_light` itself.
///
/// The disk is perpendicular to `ray_to_light` and sampled in polar
/// coordinates: uniform angle, uniform distance from the center.
pub fn sample_light_points(ray_to_light: &Ray, light: &Light, n: u32, rng: &mut dyn RngCore) -> Vec<Ray> {
    let mut rays = Vec::with_capacity(n as usize + 1);

    // Falls back to X when the light is straight above or below the point.
    // No basis at all means the point sits on the light center.
    if let Some((v1, v2)) = orthonormal_basis(ray_to_light.direction(), Vec3::Z, Vec3::X) {
        let origin = ray_to_light.origin();
        for _ in 0..n {
            let angle = gen_f64(rng) * 2.0 * PI;
            let distance = gen_f64(rng) * light.radius;
            let on_disk = distance * (angle.cos() * v1 + angle.sin() * v2);
            rays.push(Ray::new(
                origin,
                light.position + on_disk - origin,
                ray_to_light.color(),
                ray_to_light.depth(),
            ));
        }
    }

    rays.push(*ray_to_light);
    rays
}

/// Light arriving along one shadow ray.
///
/// `normal_ray` starts at the shaded point and points along the surface
/// normal. Back-facing samples contribute nothing.
pub fn shadow_sample(
    ray_to_light: &Ray,
    normal_ray: &Ray,
    surface_color: Color,
    objects: &SurfaceList,
    light: &Light,
) -> Color {
    let facing_ratio = match try_unit(ray_to_light.direction()) {
        Some(dir) => dir.dot(normal_ray.direction()).max(0.0),
        None => return Color::ZERO,
    };
    let lit = facing_ratio * light.color * surface_color;

    match check_collisions_within(ray_to_light, objects, SHADOW_INTERVAL) {
        None => lit,
        Some(hit) => {
            let material = hit.object.material();
            if material.is_glass {
                lit * (1.0 - material.opacity)
            } else {
                Color::ZERO
            }
        }
    }
}

/// Estimate direct lighting at the origin of `normal_ray`.
///
/// Averages `shadow_samples` random disk samples plus the center ray.
pub fn soft_shadow(
    normal_ray: &Ray,
    surface_color: Color,
    objects: &SurfaceList,
    light: &Light,
    shadow_samples: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let ray_to_light = Ray::new(
        normal_ray.origin(),
        light.position - normal_ray.origin(),
        normal_ray.color(),
        normal_ray.depth(),
    );

    let rays = sample_light_points(&ray_to_light, light, shadow_samples, rng);
    let total = rays.iter().fold(Color::ZERO, |acc, ray| {
        acc + shadow_sample(ray, normal_ray, surface_color, objects, light)
    });

    total / rays.len() as f64
}
