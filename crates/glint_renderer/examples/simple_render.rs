//! Simple render example.
//!
//! Renders the built-in scene at a small size and saves it as PPM.

use glint_core::SceneDescription;
use glint_renderer::{render, save_image, World};

fn main() {
    env_logger::init();

    println!("Glint Ray Tracer - Simple Example");
    println!("=================================");

    let mut scene = SceneDescription::default_scene();
    scene.options.width = 256;
    scene.options.height = 256;
    scene.options.pixel_size = 0.008;
    scene.options.shadow_samples = 8;

    let start = std::time::Instant::now();
    let world = World::from_description(&scene);
    println!("Scene built in {:?}", start.elapsed());

    println!(
        "Rendering {}x{} @ {} rays/pixel...",
        scene.options.width,
        scene.options.height,
        scene.options.rays_per_pixel()
    );

    let start = std::time::Instant::now();
    let image = render(&world, &scene.options, |_| {});
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_image(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}
