//! Surface trait and nearest-hit resolution.

use crate::Ray;
use glint_core::MaterialDescription;
use glint_math::{Color, Interval, Vec3};

/// Material parameters read by the tracer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Weight of direct (shadow) lighting; the rest is mirror reflection
    pub roughness: f64,
    /// Reflect-only surface that lets `1 - opacity` of light through in shadow tests
    pub is_glass: bool,
    /// Opacity (0=transparent, 1=opaque)
    pub opacity: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            is_glass: false,
            opacity: 1.0,
        }
    }
}

impl Material {
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

impl From<&MaterialDescription> for Material {
    fn from(desc: &MaterialDescription) -> Self {
        Self {
            roughness: desc.roughness,
            is_glass: desc.is_glass,
            opacity: desc.opacity,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Surface: Send + Sync {
    /// Ray parameter of the nearest intersection inside `ray_t`, if any.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f64>;

    /// Unit surface normal at a point on the surface.
    fn normal_at(&self, point: Vec3) -> Vec3;

    /// Surface color at a point on the surface.
    fn color_at(&self, point: Vec3) -> Color;

    /// Material parameters of this surface.
    fn material(&self) -> &Material;
}

/// Nearest intersection found by the collision resolver.
#[derive(Clone, Copy)]
pub struct Hit<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// The surface that was hit
    pub object: &'a dyn Surface,
}

/// The objects of a scene.
pub struct SurfaceList {
    objects: Vec<Box<dyn Surface>>,
}

impl SurfaceList {
    /// Create a new empty surface list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Surface>) {
        self.objects.push(object);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over the objects.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Surface> {
        self.objects.iter().map(|object| object.as_ref())
    }
}

impl Default for SurfaceList {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the nearest object in front of the ray origin.
pub fn check_collisions<'a>(ray: &Ray, objects: &'a SurfaceList) -> Option<Hit<'a>> {
    check_collisions_within(ray, objects, Interval::FORWARD)
}

/// Find the nearest object whose hit parameter lies strictly inside `ray_t`.
///
/// Linear scan; each accepted hit narrows the interval so later objects
/// must be strictly closer to replace it.
pub fn check_collisions_within<'a>(
    ray: &Ray,
    objects: &'a SurfaceList,
    ray_t: Interval,
) -> Option<Hit<'a>> {
    let mut closest: Option<Hit<'a>> = None;
    let mut closest_so_far = ray_t.max;

    for object in objects.iter() {
        if let Some(t) = object.intersect(ray, ray_t.with_max(closest_so_far)) {
            closest_so_far = t;
            closest = Some(Hit { t, object });
        }
    }

    closest
}
