//! Scene description types for Glint.
//!
//! A description is plain data: where the camera sits, where the light is,
//! which primitives exist and with which material. The renderer turns it
//! into intersectable surfaces once, before rendering starts.

use glint_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

use crate::loader::{SceneError, SceneResult};
use crate::options::RenderOptions;

/// Surface material parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialDescription {
    /// Blend between direct lighting (1) and mirror reflection (0)
    pub roughness: f64,

    /// Reflective, partially see-through surface
    pub is_glass: bool,

    /// Opacity (0=transparent, 1=opaque)
    pub opacity: f64,
}

impl Default for MaterialDescription {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            is_glass: false,
            opacity: 1.0,
        }
    }
}

impl MaterialDescription {
    /// Diffuse/mirror mix with the given roughness.
    pub fn rough(roughness: f64) -> Self {
        Self {
            roughness,
            ..Default::default()
        }
    }

    /// Glass with the given opacity.
    pub fn glass(opacity: f64) -> Self {
        Self {
            is_glass: true,
            opacity,
            ..Default::default()
        }
    }
}

fn default_light_tone() -> Color {
    Color::splat(0.9)
}

fn default_dark_tone() -> Color {
    Color::splat(0.1)
}

fn default_white() -> Color {
    Color::ONE
}

/// A primitive in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectDescription {
    Sphere {
        center: Vec3,
        color: Color,
        radius: f64,
        #[serde(flatten)]
        material: MaterialDescription,
    },
    /// Infinite plane `z = height` with a unit checker pattern.
    Checkerboard {
        #[serde(default)]
        height: f64,
        #[serde(default = "default_light_tone")]
        light: Color,
        #[serde(default = "default_dark_tone")]
        dark: Color,
        #[serde(flatten)]
        material: MaterialDescription,
    },
}

impl ObjectDescription {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ObjectDescription::Sphere { .. } => "sphere",
            ObjectDescription::Checkerboard { .. } => "checkerboard",
        }
    }

    /// Material of this primitive.
    pub fn material(&self) -> &MaterialDescription {
        match self {
            ObjectDescription::Sphere { material, .. }
            | ObjectDescription::Checkerboard { material, .. } => material,
        }
    }
}

/// Pinhole camera placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraDescription {
    /// Eye position
    pub position: Vec3,
    /// Center of the image plane; the view direction points here
    pub screen_center: Vec3,
}

/// Spherical area light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightDescription {
    pub position: Vec3,
    #[serde(default = "default_white")]
    pub color: Color,
    /// Radius of the disk sampled for soft shadows
    #[serde(default)]
    pub radius: f64,
}

/// A complete scene: camera, light, objects and render options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub camera: CameraDescription,
    pub light: LightDescription,
    #[serde(default)]
    pub objects: Vec<ObjectDescription>,
    #[serde(default)]
    pub options: RenderOptions,
}

impl SceneDescription {
    /// The built-in scene: a checkerboard floor with three spheres resting
    /// on or above it, lit from the upper left.
    pub fn default_scene() -> Self {
        Self {
            camera: CameraDescription {
                position: Vec3::new(-1.0, 0.0, 1.001),
                screen_center: Vec3::new(0.0, 0.0, 1.0),
            },
            light: LightDescription {
                position: Vec3::new(-2.0, -4.0, 3.0),
                color: Color::ONE,
                radius: 0.1,
            },
            objects: vec![
                ObjectDescription::Checkerboard {
                    height: 0.0,
                    light: default_light_tone(),
                    dark: default_dark_tone(),
                    material: MaterialDescription::rough(0.8),
                },
                ObjectDescription::Sphere {
                    center: Vec3::new(2.0, 0.0, 1.0),
                    color: Color::new(0.0, 0.0, 1.0),
                    radius: 1.0,
                    material: MaterialDescription::default(),
                },
                ObjectDescription::Sphere {
                    center: Vec3::new(1.0, 1.0, 0.5),
                    color: Color::new(0.0, 1.0, 0.0),
                    radius: 0.5,
                    material: MaterialDescription::default(),
                },
                ObjectDescription::Sphere {
                    center: Vec3::new(1.0, -1.0, 0.5),
                    color: Color::new(1.0, 0.0, 0.0),
                    radius: 0.5,
                    material: MaterialDescription::default(),
                },
            ],
            options: RenderOptions::default(),
        }
    }

    /// Number of primitives.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Check that every value is usable by the renderer.
    ///
    /// An empty object list is valid; every ray then sees the background.
    pub fn validate(&self) -> SceneResult<()> {
        let options = &self.options;
        if options.width == 0 || options.height == 0 {
            return Err(invalid(format!(
                "image size must be positive, got {}x{}",
                options.width, options.height
            )));
        }
        if !(options.pixel_size.is_finite() && options.pixel_size > 0.0) {
            return Err(invalid(format!(
                "pixel_size must be positive, got {}",
                options.pixel_size
            )));
        }
        if options.samples_per_pixel == 0 {
            return Err(invalid("samples_per_pixel must be at least 1"));
        }
        if !options.background.is_finite() {
            return Err(invalid("background color must be finite"));
        }

        let camera = &self.camera;
        if !(camera.position.is_finite() && camera.screen_center.is_finite()) {
            return Err(invalid("camera position and screen_center must be finite"));
        }
        if camera.position == camera.screen_center {
            return Err(invalid("camera position and screen_center coincide"));
        }

        let light = &self.light;
        if !(light.position.is_finite() && light.color.is_finite()) {
            return Err(invalid("light position and color must be finite"));
        }
        if !(light.radius.is_finite() && light.radius >= 0.0) {
            return Err(invalid(format!(
                "light radius must be non-negative, got {}",
                light.radius
            )));
        }

        for (index, object) in self.objects.iter().enumerate() {
            validate_object(object).map_err(|message| {
                invalid(format!("object {} ({}): {}", index, object.kind(), message))
            })?;
        }

        Ok(())
    }
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self::default_scene()
    }
}

fn invalid(message: impl Into<String>) -> SceneError {
    SceneError::Invalid(message.into())
}

fn validate_object(object: &ObjectDescription) -> Result<(), String> {
    let material = object.material();
    if !(0.0..=1.0).contains(&material.roughness) {
        return Err(format!("roughness {} outside [0, 1]", material.roughness));
    }
    if !(0.0..=1.0).contains(&material.opacity) {
        return Err(format!("opacity {} outside [0, 1]", material.opacity));
    }

    match object {
        ObjectDescription::Sphere {
            center,
            color,
            radius,
            ..
        } => {
            if !(radius.is_finite() && *radius > 0.0) {
                return Err(format!("radius must be positive, got {}", radius));
            }
            if !(center.is_finite() && color.is_finite()) {
                return Err("center and color must be finite".to_string());
            }
        }
        ObjectDescription::Checkerboard {
            height, light, dark, ..
        } => {
            if !(height.is_finite() && light.is_finite() && dark.is_finite()) {
                return Err("height and tones must be finite".to_string());
            }
        }
    }

    Ok(())
}
