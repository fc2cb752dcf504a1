// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod orientation;
mod ray;
pub use orientation::Orientation;
pub use ray::Ray;

/// RGB triple. Channels are linear radiance and are not clamped.
pub type Color = DVec3;

/// Determinant of the 3×3 matrix
///
/// ```text
/// | a b c |
/// | d e f |
/// | g h i |
/// ```
///
/// Expanded term by term in a fixed order so results are reproducible bit for bit.
#[inline]
#[allow(clippy::too_many_arguments)]
pub fn determinant3(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
    g: f64,
    h: f64,
    i: f64,
) -> f64 {
    a * e * i - a * f * h + b * f * g - b * d * i + c * d * h - c * e * g
}

/// Determinant of the matrix whose columns are `c0`, `c1`, `c2`.
#[inline]
pub fn determinant_columns(c0: DVec3, c1: DVec3, c2: DVec3) -> f64 {
    determinant3(c0.x, c1.x, c2.x, c0.y, c1.y, c2.y, c0.z, c1.z, c2.z)
}
