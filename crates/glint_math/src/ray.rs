use crate::DVec3;

/// A ray in 3D space with origin and direction.
///
/// The direction is not required to be unit length. Camera rays keep the
/// length produced by the view rotation, reflected rays are renormalized by
/// the caller where needed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + direction * t
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Reflect the direction about a unit normal: `d - n * 2(n·d)`.
    #[inline]
    pub fn reflected_direction(&self, normal: DVec3) -> DVec3 {
        self.direction - normal * (2.0 * normal.dot(self.direction))
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: DVec3::ZERO,
            direction: DVec3::X,
        }
    }
}
