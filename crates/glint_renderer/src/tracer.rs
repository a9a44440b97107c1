//! Recursive ray tracer.
//!
//! Each call resolves the nearest hit and then either follows a mirror
//! bounce (glass) or mixes a mirror bounce with soft-shadowed direct light
//! (everything else). Every bounce increments the ray depth, and a ray at
//! `max_depth` returns the background without touching the scene, so the
//! recursion always terminates.

use crate::shadow::soft_shadow;
use crate::surface::check_collisions;
use crate::{Light, Ray, SurfaceList};
use glint_core::RenderOptions;
use glint_math::{reflect, Color};
use rand::RngCore;

/// Offset along the normal applied to hit points so that secondary rays
/// do not hit the surface they start on.
pub const SURFACE_BIAS: f64 = 1e-5;

/// Compute the color seen by a ray.
pub fn trace(
    ray: &Ray,
    objects: &SurfaceList,
    light: &Light,
    options: &RenderOptions,
    rng: &mut dyn RngCore,
) -> Color {
    if ray.depth() >= options.max_depth {
        return options.background;
    }

    let Some(hit) = check_collisions(ray, objects) else {
        return options.background * ray.color();
    };

    let object = hit.object;
    let material = object.material();

    let normal = object.normal_at(ray.at(hit.t));
    let hit_point = ray.at(hit.t) + SURFACE_BIAS * normal;
    let surface_color = object.color_at(hit_point);
    let normal_ray = Ray::new(hit_point, normal, surface_color, ray.depth());

    if material.is_glass {
        let tint = Color::ONE.lerp(surface_color, material.opacity);
        let reflected = reflected_ray(ray, &normal_ray, tint);
        ray.color() * trace(&reflected, objects, light, options, rng)
    } else {
        let reflected = reflected_ray(ray, &normal_ray, surface_color);
        let reflected_color = trace(&reflected, objects, light, options, rng);
        let shadow_color = soft_shadow(
            &normal_ray,
            surface_color * ray.color(),
            objects,
            light,
            options.shadow_samples,
            rng,
        );
        material.roughness * shadow_color + (1.0 - material.roughness) * reflected_color
    }
}

/// Mirror bounce of `incoming` at the origin of `normal_ray`, one level deeper.
fn reflected_ray(incoming: &Ray, normal_ray: &Ray, tint: Color) -> Ray {
    Ray::new(
        normal_ray.origin(),
        reflect(incoming.direction(), normal_ray.direction()),
        tint,
        incoming.depth() + 1,
    )
}
