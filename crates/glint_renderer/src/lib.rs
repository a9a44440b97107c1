//! Glint CPU ray tracer.
//!
//! A recursive Whitted-style tracer: spheres and a checkerboard floor, one
//! area light with soft shadows, mirror and glass reflection, and a fixed
//! or jittered antialiasing pattern. Rows render in parallel on rayon.

mod camera;
mod checkerboard;
mod light;
mod output;
mod ray;
mod renderer;
mod shadow;
mod sphere;
mod surface;
mod tracer;
mod world;

pub use camera::Camera;
pub use checkerboard::CheckBoard;
pub use light::Light;
pub use output::{clamp_color, color_to_rgb, save_image, write_ppm, OutputError, OutputResult};
pub use ray::Ray;
pub use renderer::{render, render_pixel, row_seed, ImageBuffer};
pub use shadow::{sample_light_points, shadow_sample, soft_shadow};
pub use sphere::Sphere;
pub use surface::{check_collisions, check_collisions_within, Hit, Material, Surface, SurfaceList};
pub use tracer::{trace, SURFACE_BIAS};
pub use world::World;

/// Re-export the math types used throughout the renderer.
pub use glint_math::{Color, Interval, Vec3};

use rand::{Rng, RngCore};

/// Uniform sample in [0, 1).
#[inline]
pub(crate) fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen()
}
