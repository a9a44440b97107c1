//! Area light.

use glint_core::LightDescription;
use glint_math::{Color, Vec3};

/// A spherical emitter. Only its disk is sampled for shadows; it is never
/// intersected by camera or reflected rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
    pub radius: f64,
}

impl Light {
    /// Create a new light.
    pub fn new(position: Vec3, color: Color, radius: f64) -> Self {
        Self {
            position,
            color,
            radius: radius.max(0.0),
        }
    }
}

impl From<&LightDescription> for Light {
    fn from(desc: &LightDescription) -> Self {
        Self::new(desc.position, desc.color, desc.radius)
    }
}
