//! Glint math types.
//!
//! Double precision vectors from glam, plus the few helpers the tracer
//! needs on top of them: reflection, orthonormal bases and intervals.

// Re-export glam for convenience
pub use glam::*;

/// 3D vector used for points, directions and colors.
pub type Vec3 = glam::DVec3;

/// RGB color, channels nominally in [0, 1] but unbounded during shading.
pub type Color = glam::DVec3;

mod interval;
mod vector;

pub use interval::Interval;
pub use vector::{orthonormal_basis, reflect, try_unit};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_color_tinting() {
        // Element-wise multiply tints one color by another
        let white = Color::ONE;
        let red = Color::new(1.0, 0.0, 0.0);
        let gray = Color::splat(0.5);
        assert_eq!(white * red, red);
        assert_eq!(gray * red, Color::new(0.5, 0.0, 0.0));
    }
}
