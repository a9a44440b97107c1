//! Scene file loading.
//!
//! Scenes are JSON documents mirroring [`SceneDescription`]. Missing
//! material and option fields fall back to their defaults.

use std::path::Path;

use thiserror::Error;

use crate::scene::SceneDescription;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(String),
}

/// Result type for loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load and validate a scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    log::info!("Loading scene from: {:?}", path);

    let source = std::fs::read_to_string(path)?;
    load_scene_from_str(&source)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(source: &str) -> SceneResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(source)?;
    scene.validate()?;

    log::info!(
        "Scene has {} objects, {}x{} pixels, max depth {}",
        scene.object_count(),
        scene.options.width,
        scene.options.height,
        scene.options.max_depth
    );
    for object in &scene.objects {
        log::debug!("  {} {:?}", object.kind(), object.material());
    }

    Ok(scene)
}
