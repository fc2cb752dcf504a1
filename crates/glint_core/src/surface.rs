//! Planar patches and their materials.

use glint_math::{Color, DVec3};

/// Surface response to light.
///
/// A `Some` transparency or mirror term both flags the behaviour and carries
/// its per-channel factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Diffuse reflectance per channel
    pub diffuse: Color,
    /// Attenuation applied to light passing through the surface
    pub transparency: Option<Color>,
    /// Reflectance applied to the mirrored ray
    pub mirror: Option<Color>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: Color::ONE,
            transparency: None,
            mirror: None,
        }
    }
}

impl Material {
    /// Opaque diffuse material.
    pub fn diffuse(diffuse: Color) -> Self {
        Self {
            diffuse,
            ..Default::default()
        }
    }

    /// Make the material transparent with the given attenuation.
    pub fn with_transparency(mut self, attenuation: Color) -> Self {
        self.transparency = Some(attenuation);
        self
    }

    /// Make the material a mirror with the given reflectance.
    pub fn with_mirror(mut self, reflectance: Color) -> Self {
        self.mirror = Some(reflectance);
        self
    }
}

/// A planar patch `origin + u·edge1 + v·edge2`.
///
/// Only the triangular half `u, v ≥ 0, u + v ≤ 1` is hit by rays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub origin: DVec3,
    pub edge1: DVec3,
    pub edge2: DVec3,
    pub material: Material,
}

impl Surface {
    /// Create a new surface.
    pub fn new(origin: DVec3, edge1: DVec3, edge2: DVec3, material: Material) -> Self {
        Self {
            origin,
            edge1,
            edge2,
            material,
        }
    }

    /// Unit normal, `normalize(edge1 × edge2)`.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.edge1.cross(self.edge2).normalize()
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.material.transparency.is_some()
    }

    #[inline]
    pub fn is_mirror(&self) -> bool {
        self.material.mirror.is_some()
    }

    #[inline]
    pub fn diffuse(&self) -> Color {
        self.material.diffuse
    }

    /// Transparency attenuation (black for opaque surfaces).
    #[inline]
    pub fn transparency(&self) -> Color {
        self.material.transparency.unwrap_or(Color::ZERO)
    }

    /// Mirror reflectance (black for non-mirrors).
    #[inline]
    pub fn mirror_reflectance(&self) -> Color {
        self.material.mirror.unwrap_or(Color::ZERO)
    }

    /// True when the edges are parallel and the patch has no area.
    pub fn is_degenerate(&self) -> bool {
        self.edge1.cross(self.edge2) == DVec3::ZERO
    }
}
