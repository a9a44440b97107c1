//! Parallel render driver.
//!
//! Rows are rendered independently on the rayon pool. Each row owns a
//! random generator seeded from the render seed and the row index, so
//! images are reproducible no matter how rows are scheduled.

use std::time::Instant;

use crate::{trace, World};
use glint_core::RenderOptions;
use glint_math::Color;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

/// Float image, row-major, one color per pixel.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (row, col).
    pub fn get(&self, row: u32, col: u32) -> Color {
        self.pixels[self.index(row, col)]
    }

    /// Set the pixel at (row, col).
    pub fn set(&mut self, row: u32, col: u32, color: Color) {
        let index = self.index(row, col);
        self.pixels[index] = color;
    }

    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }
}

/// Seed of the generator used for one image row.
pub fn row_seed(seed: u64, row: u32) -> u64 {
    seed.rotate_left(32) ^ row as u64
}

/// Render a single pixel: trace every primary ray and average the results.
pub fn render_pixel(
    world: &World,
    row: u32,
    col: u32,
    options: &RenderOptions,
    rng: &mut dyn RngCore,
) -> Color {
    let rays = world.camera.primary_rays(row, col, options, rng);
    if rays.is_empty() {
        return Color::ZERO;
    }

    let mut pixel_color = Color::ZERO;
    for ray in &rays {
        pixel_color += trace(ray, &world.objects, &world.light, options, rng);
    }

    pixel_color / rays.len() as f64
}

/// Render the whole image in parallel.
///
/// `on_row` is called once per finished row, from whichever worker
/// rendered it.
pub fn render<F>(world: &World, options: &RenderOptions, on_row: F) -> ImageBuffer
where
    F: Fn(u32) + Sync,
{
    log::info!(
        "Rendering {}x{} with {} rays/pixel, {} shadow samples, max depth {}",
        options.width,
        options.height,
        options.rays_per_pixel(),
        options.shadow_samples,
        options.max_depth
    );
    if world.objects.is_empty() {
        log::warn!("Scene has no objects; the image will be background only");
    }

    let start = Instant::now();
    let mut image = ImageBuffer::new(options.width, options.height);
    let width = options.width as usize;

    if width > 0 {
        image
            .pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, row_pixels)| {
                let row = row as u32;
                let mut rng = StdRng::seed_from_u64(row_seed(options.seed, row));
                for (col, pixel) in row_pixels.iter_mut().enumerate() {
                    *pixel = render_pixel(world, row, col as u32, options, &mut rng);
                }
                on_row(row);
            });
    }

    log::info!("Rendered in {:.3?}", start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::SceneDescription;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn small_scene(width: u32, height: u32) -> SceneDescription {
        let mut scene = SceneDescription::default_scene();
        scene.options.width = width;
        scene.options.height = height;
        scene.options.pixel_size = 2.048 / width as f64;
        scene
    }

    #[test]
    fn test_image_buffer_indexing() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(1, 2, Color::ONE);

        assert_eq!(image.get(1, 2), Color::ONE);
        assert_eq!(image.pixels[5], Color::ONE);
        assert_eq!(image.get(0, 0), Color::ZERO);
    }

    #[test]
    fn test_row_seeds_differ() {
        assert_ne!(row_seed(0, 0), row_seed(0, 1));
        assert_ne!(row_seed(0, 1), row_seed(1, 0));
    }

    #[test]
    fn test_render_reports_every_row() {
        let scene = small_scene(8, 6);
        let world = World::from_description(&scene);
        let rows = AtomicU32::new(0);

        let image = render(&world, &scene.options, |_| {
            rows.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(rows.load(Ordering::Relaxed), 6);
        assert_eq!(image.pixels.len(), 48);
        assert!(image.pixels.iter().all(|c| c.min_element() >= 0.0));
    }

    #[test]
    fn test_render_is_reproducible_for_a_seed() {
        let mut scene = small_scene(12, 12);
        scene.options.jitter_antialiasing = true;
        scene.options.samples_per_pixel = 3;
        scene.options.shadow_samples = 4;
        scene.options.seed = 1234;
        let world = World::from_description(&scene);

        let first = render(&world, &scene.options, |_| {});
        let second = render(&world, &scene.options, |_| {});
        assert_eq!(first.pixels, second.pixels);
    }

    #[test]
    fn test_empty_scene_renders_background() {
        let mut scene = small_scene(4, 4);
        scene.objects.clear();
        let world = World::from_description(&scene);

        let image = render(&world, &scene.options, |_| {});
        for pixel in &image.pixels {
            assert!((*pixel - scene.options.background).length() < 1e-12);
        }
    }

    #[test]
    fn test_center_pixel_sees_blue_sphere() {
        let scene = small_scene(16, 16);
        let world = World::from_description(&scene);
        let mut rng = StdRng::seed_from_u64(0);

        let color = render_pixel(&world, 8, 8, &scene.options, &mut rng);
        assert!(color.z > color.x && color.z > color.y, "{:?}", color);
    }
}
