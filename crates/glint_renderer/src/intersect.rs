//! Ray/patch intersection.
//!
//! Solves `origin + t·dir = patch_origin + u·edge1 + v·edge2` with Cramer's
//! rule. The accepted region is the triangle `u, v ≥ 0, u + v ≤ 1`.

use glint_core::Surface;
use glint_math::{determinant_columns, DVec3, Ray};

/// Intersect a ray with the patch spanned by `edge1` and `edge2` at `patch_origin`.
///
/// Returns the ray parameter `t ≥ 0` of the hit. With `segment` set the ray
/// is treated as the segment `t ∈ [0, 1)`, which is how shadow rays from a
/// light to a shading point are bounded.
///
/// A zero determinant (ray parallel to the patch plane) is a miss.
pub fn intersect(
    origin: DVec3,
    direction: DVec3,
    patch_origin: DVec3,
    edge1: DVec3,
    edge2: DVec3,
    segment: bool,
) -> Option<f64> {
    let det = determinant_columns(direction, edge1, edge2);
    if det == 0.0 {
        return None;
    }

    let offset = patch_origin - origin;
    let t = determinant_columns(offset, edge1, edge2) / det;
    let u = -determinant_columns(direction, offset, edge2) / det;
    let v = -determinant_columns(direction, edge1, offset) / det;

    if t < 0.0 || u + v > 1.0 || u < 0.0 || v < 0.0 || (segment && t >= 1.0) {
        return None;
    }
    Some(t)
}

/// Distance along `ray` to `surface`, ignoring grazing hits at `t == 0`.
///
/// A hit exactly at the ray origin never counts as a blocker or a visible
/// surface; this is what keeps continuation rays from re-hitting patches that
/// share an edge with the surface they start on.
#[inline]
pub fn hit_distance(ray: &Ray, surface: &Surface, segment: bool) -> Option<f64> {
    intersect(
        ray.origin,
        ray.direction,
        surface.origin,
        surface.edge1,
        surface.edge2,
        segment,
    )
    .filter(|&t| t > 0.0)
}
