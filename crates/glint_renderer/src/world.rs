//! Renderable world built from a scene description.

use crate::{Camera, CheckBoard, Light, Material, Sphere, SurfaceList};
use glint_core::{ObjectDescription, SceneDescription};

/// Everything the tracer reads while rendering a frame.
pub struct World {
    pub objects: SurfaceList,
    pub light: Light,
    pub camera: Camera,
}

impl World {
    /// Build the world for `scene`, using its render options for the camera.
    pub fn from_description(scene: &SceneDescription) -> Self {
        let mut objects = SurfaceList::new();

        for desc in &scene.objects {
            let material = Material::from(desc.material());
            match desc {
                ObjectDescription::Sphere {
                    center,
                    color,
                    radius,
                    ..
                } => objects.add(Box::new(Sphere::new(*center, *color, *radius, material))),
                ObjectDescription::Checkerboard {
                    height, light, dark, ..
                } => objects.add(Box::new(CheckBoard::new(*height, *light, *dark, material))),
            }
            log::debug!("Added {} ({:?})", desc.kind(), material);
        }

        let light = Light::from(&scene.light);
        let camera = Camera::from_description(&scene.camera, &scene.options);

        log::info!(
            "World ready: {} objects, light at {:?} (radius {})",
            objects.len(),
            light.position,
            light.radius
        );
        if scene.options.shadow_samples == 0 && light.radius > 0.0 {
            log::warn!("Area light with zero shadow samples; shadows will be hard");
        }

        Self {
            objects,
            light,
            camera,
        }
    }
}
