//! Ray type for recursive tracing.
//!
//! Besides origin and direction a ray carries the tint it has picked up
//! from the surfaces it bounced off, and its bounce depth.

use glint_math::{Color, Vec3};

/// A ray with origin, direction, carried color and recursion depth.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray
    origin: Vec3,
    /// Direction vector (not necessarily normalized)
    direction: Vec3,
    /// Tint carried through bounces
    color: Color,
    /// Number of bounces that produced this ray
    depth: u32,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3, color: Color, depth: u32) -> Self {
        Self {
            origin,
            direction,
            color,
            depth,
        }
    }

    /// Create a camera ray: depth 0 with a neutral white tint.
    #[inline]
    pub fn primary(origin: Vec3, direction: Vec3) -> Self {
        Self::new(origin, direction, Color::ONE, 0)
    }

    /// Get the ray's origin point.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the ray's direction vector.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the carried tint.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Get the bounce depth.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Compute a point along the ray at parameter t.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + t * self.direction
    }
}
