//! Vector helpers shared by the camera, the tracer and the shadow sampler.

use crate::Vec3;

/// Reflect a vector about a normal: `v - 2 (v . n) n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Normalize `v`, or `None` if it has zero (or non-finite) length.
#[inline]
pub fn try_unit(v: Vec3) -> Option<Vec3> {
    v.try_normalize()
}

/// Two unit vectors perpendicular to `axis` and to each other.
///
/// The first vector is `axis x helper`. When `axis` is parallel to `helper`
/// that cross product vanishes and `fallback` is used instead. Returns `None`
/// only when `axis` itself is zero.
pub fn orthonormal_basis(axis: Vec3, helper: Vec3, fallback: Vec3) -> Option<(Vec3, Vec3)> {
    let v1 = try_unit(axis.cross(helper)).or_else(|| try_unit(axis.cross(fallback)))?;
    let v2 = try_unit(axis.cross(v1))?;
    Some((v1, v2))
}
