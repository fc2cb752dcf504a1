//! Point and spot light sources.

use glint_math::{Color, DVec3};

/// Colour temperature used when none is given, in Kelvin.
pub const DEFAULT_TEMPERATURE: f64 = 6500.0;

/// Light emission pattern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    /// Emits in every direction.
    Point,
    /// Emits inside a cone around `direction` (unit length).
    Spot { direction: DVec3, half_angle: f64 },
}

/// A light source.
///
/// `color` is derived from `intensity` and `temperature` at construction and
/// kept in sync by the builder methods.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: DVec3,
    pub intensity: f64,
    pub temperature: f64,
    pub color: Color,
    pub kind: LightKind,
}

impl Light {
    /// Create an omnidirectional light at the default temperature.
    pub fn point(intensity: f64, position: DVec3) -> Self {
        Self {
            position,
            intensity,
            temperature: DEFAULT_TEMPERATURE,
            color: color_from_temperature(intensity, DEFAULT_TEMPERATURE),
            kind: LightKind::Point,
        }
    }

    /// Create a cone light. `direction` is expected to be unit length.
    pub fn spot(intensity: f64, position: DVec3, direction: DVec3, half_angle: f64) -> Self {
        Self {
            kind: LightKind::Spot {
                direction,
                half_angle,
            },
            ..Self::point(intensity, position)
        }
    }

    /// Set the black-body temperature and recompute the colour.
    pub fn with_temperature(mut self, kelvin: f64) -> Self {
        self.temperature = kelvin;
        self.color = color_from_temperature(self.intensity, kelvin);
        self
    }

    /// Whether `point` lies inside the emission pattern.
    ///
    /// Says nothing about occluders.
    pub fn illuminates(&self, point: DVec3) -> bool {
        match self.kind {
            LightKind::Point => true,
            LightKind::Spot {
                direction,
                half_angle,
            } => (point - self.position).normalize().dot(direction) > half_angle.cos(),
        }
    }
}

/// Approximate the RGB colour of a black body at `kelvin`, scaled by `intensity`.
///
/// Piecewise fit in `kelvin / 100`. Channels are not clamped.
pub fn color_from_temperature(intensity: f64, kelvin: f64) -> Color {
    let scaled = kelvin / 100.0;

    let red = if scaled <= 66.0 {
        intensity
    } else {
        1.2929361861 * intensity * (scaled - 60.0).powf(-0.1332047592)
    };

    let green = if scaled <= 66.0 {
        0.3900815788 * scaled.ln() * intensity - 0.6318414438 * intensity
    } else {
        1.1298908609 * intensity * (scaled - 60.0).powf(-0.0755148492)
    };

    let blue = if scaled >= 66.0 {
        intensity
    } else if scaled <= 19.0 {
        0.0
    } else {
        0.5432067891 * intensity * (scaled - 10.0).ln() - 1.1962540891 * intensity
    };

    Color::new(red, green, blue)
}
