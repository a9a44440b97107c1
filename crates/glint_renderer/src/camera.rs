//! Camera for primary ray generation.

use crate::{gen_f64, Ray};
use glint_core::{CameraDescription, RenderOptions, GRID_RAYS_PER_PIXEL};
use glint_math::{orthonormal_basis, Vec3};
use rand::RngCore;

/// Sub-pixel offsets of the deterministic 2x2 antialiasing grid.
const GRID_OFFSETS: [(f64, f64); GRID_RAYS_PER_PIXEL as usize] =
    [(0.25, 0.25), (0.25, 0.75), (0.75, 0.25), (0.75, 0.75)];

/// Pinhole camera looking through a flat image plane.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    position: Vec3,
    screen_center: Vec3,

    // Image plane basis, scaled to one pixel
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

impl Camera {
    /// Create a camera at `position` whose image plane passes through
    /// `screen_center`, perpendicular to the viewing direction.
    ///
    /// Image rows run along world `-Z` when possible; for a camera looking
    /// straight up or down the plane is oriented around `Y` instead.
    pub fn new(position: Vec3, screen_center: Vec3, pixel_size: f64, width: u32, height: u32) -> Self {
        let forward = screen_center - position;
        let (right, down) = orthonormal_basis(forward, Vec3::Z, Vec3::Y).unwrap_or((Vec3::X, -Vec3::Z));

        Self {
            image_width: width,
            image_height: height,
            position,
            screen_center,
            pixel_delta_u: right * pixel_size,
            pixel_delta_v: down * pixel_size,
        }
    }

    /// Build the camera for a scene description.
    pub fn from_description(desc: &CameraDescription, options: &RenderOptions) -> Self {
        Self::new(
            desc.position,
            desc.screen_center,
            options.pixel_size,
            options.width,
            options.height,
        )
    }

    /// Get the eye position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Point on the image plane for pixel (row, col) at a sub-pixel offset in [0, 1)^2.
    pub fn pixel_point(&self, row: u32, col: u32, dy: f64, dx: f64) -> Vec3 {
        let u = col as f64 + dx - self.image_width as f64 / 2.0;
        let v = row as f64 + dy - self.image_height as f64 / 2.0;
        self.screen_center + u * self.pixel_delta_u + v * self.pixel_delta_v
    }

    /// Primary ray through pixel (row, col) at the given sub-pixel offset.
    pub fn ray_through(&self, row: u32, col: u32, dy: f64, dx: f64) -> Ray {
        let direction = (self.pixel_point(row, col, dy, dx) - self.position).normalize_or_zero();
        Ray::primary(self.position, direction)
    }

    /// Four rays through a regular 2x2 grid inside the pixel.
    pub fn shoot_rays(&self, row: u32, col: u32) -> Vec<Ray> {
        GRID_OFFSETS
            .iter()
            .map(|&(dy, dx)| self.ray_through(row, col, dy, dx))
            .collect()
    }

    /// `n` rays through independently jittered points inside the pixel.
    pub fn shoot_random_rays(&self, row: u32, col: u32, n: u32, rng: &mut dyn RngCore) -> Vec<Ray> {
        (0..n)
            .map(|_| {
                let dy = gen_f64(rng);
                let dx = gen_f64(rng);
                self.ray_through(row, col, dy, dx)
            })
            .collect()
    }

    /// Primary rays for a pixel, using the sampling mode selected in `options`.
    pub fn primary_rays(&self, row: u32, col: u32, options: &RenderOptions, rng: &mut dyn RngCore) -> Vec<Ray> {
        if options.jitter_antialiasing {
            self.shoot_random_rays(row, col, options.samples_per_pixel, rng)
        } else {
            self.shoot_rays(row, col)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f64 = 1e-9;

    fn camera() -> Camera {
        // Looking along +X from x = -1, plane at x = 0
        Camera::new(Vec3::new(-1.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0), 0.01, 100, 100)
    }

    #[test]
    fn test_center_pixel_looks_forward() {
        let camera = camera();
        let ray = camera.ray_through(50, 50, 0.0, 0.0);

        assert_eq!(ray.origin(), Vec3::new(-1.0, 0.0, 1.0));
        assert!((ray.direction() - Vec3::X).length() < EPS);
        assert_eq!(ray.depth(), 0);
        assert_eq!(ray.color(), Vec3::ONE);
    }

    #[test]
    fn test_image_orientation() {
        let camera = camera();

        // Top rows look up, bottom rows look down
        assert!(camera.ray_through(0, 50, 0.5, 0.5).direction().z > 0.0);
        assert!(camera.ray_through(99, 50, 0.5, 0.5).direction().z < 0.0);

        // Left and right columns point to opposite sides
        let left = camera.ray_through(50, 0, 0.5, 0.5).direction().y;
        let right = camera.ray_through(50, 99, 0.5, 0.5).direction().y;
        assert!(left * right < 0.0);
    }

    #[test]
    fn test_pixel_spacing() {
        let camera = camera();
        let a = camera.pixel_point(10, 10, 0.0, 0.0);
        let b = camera.pixel_point(10, 11, 0.0, 0.0);
        let c = camera.pixel_point(11, 10, 0.0, 0.0);

        assert!(((b - a).length() - 0.01).abs() < EPS);
        assert!(((c - a).length() - 0.01).abs() < EPS);
        assert!((b - a).dot(c - a).abs() < EPS);
    }

    #[test]
    fn test_grid_rays_are_deterministic() {
        let camera = camera();
        let first = camera.shoot_rays(3, 7);
        let second = camera.shoot_rays(3, 7);

        assert_eq!(first.len(), 4);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.direction(), b.direction());
        }
    }

    #[test]
    fn test_random_rays_stay_inside_pixel() {
        let camera = camera();
        let mut rng = StdRng::seed_from_u64(42);

        let rays = camera.shoot_random_rays(20, 30, 16, &mut rng);
        assert_eq!(rays.len(), 16);

        let corner = camera.pixel_point(20, 30, 0.0, 0.0) - camera.position();
        let far_corner = camera.pixel_point(20, 30, 1.0, 1.0) - camera.position();
        let (lo, hi) = (corner.min(far_corner), corner.max(far_corner));

        for ray in &rays {
            // Scale back onto the image plane (distance 1 along +X)
            let on_plane = ray.direction() / ray.direction().x;
            assert!(on_plane.y >= lo.y - EPS && on_plane.y <= hi.y + EPS);
            assert!(on_plane.z >= lo.z - EPS && on_plane.z <= hi.z + EPS);
        }
    }

    #[test]
    fn test_primary_rays_follow_options() {
        let camera = camera();
        let mut rng = StdRng::seed_from_u64(7);
        let mut options = RenderOptions {
            samples_per_pixel: 9,
            ..Default::default()
        };

        let grid = camera.primary_rays(0, 0, &options, &mut rng);
        assert_eq!(grid.len(), GRID_RAYS_PER_PIXEL as usize);
        assert_eq!(grid.len(), options.rays_per_pixel() as usize);

        options.jitter_antialiasing = true;
        let jittered = camera.primary_rays(0, 0, &options, &mut rng);
        assert_eq!(jittered.len(), 9);
        assert_eq!(jittered.len(), options.rays_per_pixel() as usize);
    }

    #[test]
    fn test_vertical_camera_has_valid_basis() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 0.01, 10, 10);
        let ray = camera.ray_through(0, 0, 0.0, 0.0);
        assert!(ray.direction().is_finite());
        assert!(ray.direction().z < 0.0);
    }
}
