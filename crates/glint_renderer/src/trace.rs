//! Recursive ray tracing with mirrors and transparent layers.

use glint_core::{Light, Surface};
use glint_math::{Color, Ray};
use serde::{Deserialize, Serialize};

use crate::intersect::hit_distance;
use crate::shade::shade;

/// Default mirror recursion limit.
pub const MAX_BOUNCES: u32 = 4;

/// Tracer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Deepest mirror bounce that still contributes light
    pub max_bounces: u32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            max_bounces: MAX_BOUNCES,
        }
    }
}

/// Counters gathered while tracing one primary ray.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Calls into the recursive trace, including ones cut off by the depth limit
    pub invocations: u32,
    /// Deepest bounce level entered
    pub max_depth: u32,
}

/// A hit on the nearest opaque surface or on a transparent one in front of it.
#[derive(Debug, Clone, Copy)]
struct Hit {
    index: usize,
    distance: f64,
}

/// Read-only view of a scene that turns rays into brightness.
#[derive(Debug, Clone, Copy)]
pub struct Tracer<'a> {
    surfaces: &'a [Surface],
    lights: &'a [Light],
    config: TraceConfig,
}

impl<'a> Tracer<'a> {
    pub fn new(surfaces: &'a [Surface], lights: &'a [Light]) -> Self {
        Self::with_config(surfaces, lights, TraceConfig::default())
    }

    pub fn with_config(surfaces: &'a [Surface], lights: &'a [Light], config: TraceConfig) -> Self {
        Self {
            surfaces,
            lights,
            config,
        }
    }

    pub fn config(&self) -> TraceConfig {
        self.config
    }

    /// Brightness seen along a primary ray.
    pub fn trace(&self, ray: &Ray) -> Color {
        self.trace_with_stats(ray).0
    }

    /// Like [`Tracer::trace`], also reporting recursion counters.
    pub fn trace_with_stats(&self, ray: &Ray) -> (Color, TraceStats) {
        let mut stats = TraceStats::default();
        let color = self.trace_recursive(ray, 0, None, &mut stats);
        (color, stats)
    }

    fn trace_recursive(
        &self,
        ray: &Ray,
        depth: u32,
        exclude: Option<usize>,
        stats: &mut TraceStats,
    ) -> Color {
        stats.invocations += 1;
        stats.max_depth = stats.max_depth.max(depth);
        if depth > self.config.max_bounces {
            return Color::ZERO;
        }

        let (nearest, mut layers) = self.collect_hits(ray, exclude);
        let mut brightness = Color::ZERO;

        if let Some(hit) = nearest {
            let surface = &self.surfaces[hit.index];
            let point = ray.at(hit.distance);
            if surface.is_mirror() {
                let bounce = Ray::new(point, ray.reflected_direction(surface.normal()).normalize());
                let reflected = self.trace_recursive(&bounce, depth + 1, Some(hit.index), stats);
                brightness += surface.mirror_reflectance() * reflected;
            }
            brightness += shade(self.surfaces, self.lights, hit.index, point);
        }

        // Far to near, each layer filters everything behind it
        layers.sort_by(|a, b| b.distance.total_cmp(&a.distance));
        for hit in layers {
            let surface = &self.surfaces[hit.index];
            let point = ray.at(hit.distance);
            brightness *= surface.transparency();
            if surface.is_mirror() {
                // Reflected direction is left unnormalized here
                let bounce = Ray::new(point, ray.reflected_direction(surface.normal()));
                let reflected = self.trace_recursive(&bounce, depth + 1, Some(hit.index), stats);
                brightness += surface.mirror_reflectance() * reflected;
            }
            brightness += shade(self.surfaces, self.lights, hit.index, point);
        }

        brightness
    }

    /// Nearest opaque hit plus the transparent hits in front of it.
    fn collect_hits(&self, ray: &Ray, exclude: Option<usize>) -> (Option<Hit>, Vec<Hit>) {
        let mut min_dist = f64::INFINITY;
        let mut nearest = None;
        let mut layers: Vec<Hit> = Vec::new();

        for (index, surface) in self.surfaces.iter().enumerate() {
            if exclude == Some(index) {
                continue;
            }
            let Some(distance) = hit_distance(ray, surface, false) else {
                continue;
            };
            if distance >= min_dist {
                continue;
            }
            if surface.is_transparent() {
                layers.push(Hit { index, distance });
            } else {
                layers.retain(|layer| layer.distance < distance);
                min_dist = distance;
                nearest = Some(Hit { index, distance });
            }
        }

        (nearest, layers)
    }
}
