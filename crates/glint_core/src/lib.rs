//! Glint Core - scene description and render options.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `ObjectDescription`,
//!   `CameraDescription`, `LightDescription`
//! - **Render options**: `RenderOptions`, shared by the renderer and the CLI
//! - **Loading**: JSON scene files and the built-in default scene
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} objects", scene.objects.len());
//! ```

pub mod loader;
pub mod options;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, SceneError, SceneResult};
pub use options::{RenderOptions, GRID_RAYS_PER_PIXEL};
pub use scene::{
    CameraDescription, LightDescription, MaterialDescription, ObjectDescription,
    SceneDescription,
};
