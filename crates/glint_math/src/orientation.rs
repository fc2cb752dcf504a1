//! Observer orientation as yaw/pitch angles.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::DVec3;

/// Yaw (`theta`, about the vertical z axis) and pitch (`phi`, measured from
/// straight up) of an observer.
///
/// `pitch = π/2` looks at the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub yaw: f64,
    pub pitch: f64,
}

impl Orientation {
    pub fn new(yaw: f64, pitch: f64) -> Self {
        Self { yaw, pitch }
    }

    /// Map a camera-local direction to world space.
    ///
    /// Camera-local `x` is forward, `y` is left and `z` is up.
    pub fn to_world(&self, local: DVec3) -> DVec3 {
        let a = self.yaw;
        let b = self.pitch - FRAC_PI_2;
        let (sin_a, cos_a) = (a.sin(), a.cos());
        let (sin_b, cos_b) = (b.sin(), b.cos());

        DVec3::new(
            local.x * (cos_a * cos_b) + local.y * -sin_a + local.z * (cos_a * sin_b),
            local.x * (sin_a * cos_b) + local.y * cos_a + local.z * (sin_a * sin_b),
            local.x * -sin_b + local.z * cos_b,
        )
    }

    /// Horizontal walking direction.
    pub fn forward(&self) -> DVec3 {
        DVec3::new(self.yaw.cos(), self.yaw.sin(), 0.0)
    }

    /// Horizontal strafing direction (to the observer's right).
    pub fn right(&self) -> DVec3 {
        DVec3::new(self.yaw.sin(), -self.yaw.cos(), 0.0)
    }

    /// Wrap both angles back into `[0, 2π]`.
    pub fn wrapped(self) -> Self {
        Self {
            yaw: wrap_angle(self.yaw),
            pitch: wrap_angle(self.pitch),
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: FRAC_PI_2,
        }
    }
}

/// Single-step wrap: angles only ever move by a small increment at a time.
fn wrap_angle(angle: f64) -> f64 {
    if angle < 0.0 {
        angle + TAU
    } else if angle > TAU {
        angle - TAU
    } else {
        angle
    }
}
