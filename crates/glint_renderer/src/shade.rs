//! Direct lighting with shadow rays.

use glint_core::{Light, Surface};
use glint_math::{Color, DVec3, Ray};

use crate::intersect::hit_distance;

/// Direct illumination reflected by `surfaces[hit]` at `point`.
///
/// For every light that can reach the point, the segment from the light to
/// the point is tested against all other surfaces. An opaque blocker removes
/// the light entirely; each transparent blocker attenuates it by its
/// transparency factor. Surfaces are lit from either face, with an
/// inverse-square falloff.
pub fn shade(surfaces: &[Surface], lights: &[Light], hit: usize, point: DVec3) -> Color {
    let surface = &surfaces[hit];
    let normal = surface.normal();
    let mut brightness = Color::ZERO;

    for light in lights {
        if !light.illuminates(point) {
            continue;
        }

        let shadow_ray = Ray::new(light.position, point - light.position);
        let Some(intensity) = transmitted(surfaces, hit, &shadow_ray, light.color) else {
            continue;
        };

        let dist = shadow_ray.direction.length();
        let cos_theta = normal.dot(shadow_ray.direction.normalize()).abs();
        brightness += surface.diffuse() * intensity * cos_theta / dist / dist;
    }

    brightness
}

/// Light colour left after crossing the shadow segment, or `None` if an
/// opaque surface blocks it.
fn transmitted(surfaces: &[Surface], skip: usize, segment: &Ray, color: Color) -> Option<Color> {
    let mut intensity = color;
    for (index, other) in surfaces.iter().enumerate() {
        if index == skip || hit_distance(segment, other, true).is_none() {
            continue;
        }
        if !other.is_transparent() {
            return None;
        }
        intensity *= other.transparency();
    }
    Some(intensity)
}
