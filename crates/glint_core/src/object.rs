//! Scene-authoring objects.
//!
//! An object is a set of patches in local coordinates sharing one material
//! and one world position. Objects are flattened into `Surface`s when the
//! scene is built; the renderer never sees them.

use std::collections::VecDeque;
use std::f64::consts::{PI, TAU};

use glint_math::{DMat3, DVec3};

use crate::surface::{Material, Surface};

/// Latitude bands used for tessellated spheres.
pub const SPHERE_BANDS: usize = 30;

/// A patch in object-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Patch {
    pub origin: DVec3,
    pub edge1: DVec3,
    pub edge2: DVec3,
}

impl Patch {
    pub fn new(origin: DVec3, edge1: DVec3, edge2: DVec3) -> Self {
        Self {
            origin,
            edge1,
            edge2,
        }
    }

    fn transformed(&self, m: &DMat3) -> Self {
        Self {
            origin: *m * self.origin,
            edge1: *m * self.edge1,
            edge2: *m * self.edge2,
        }
    }

    fn scaled(&self, s: f64) -> Self {
        Self {
            origin: self.origin * s,
            edge1: self.edge1 * s,
            edge2: self.edge2 * s,
        }
    }
}

/// Rotation axis for [`SceneObject::rotate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A group of patches placed in the world.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    /// World-space position added to every patch origin
    pub position: DVec3,
    /// Local patches
    pub patches: Vec<Patch>,
    /// Shared material
    pub material: Material,
}

impl SceneObject {
    /// Create an empty object.
    pub fn new(position: DVec3, material: Material) -> Self {
        Self {
            position,
            patches: Vec::new(),
            material,
        }
    }

    /// Add a local patch.
    pub fn add_patch(&mut self, patch: Patch) {
        self.patches.push(patch);
    }

    /// Builder form of [`add_patch`](Self::add_patch).
    pub fn with_patch(mut self, origin: DVec3, edge1: DVec3, edge2: DVec3) -> Self {
        self.add_patch(Patch::new(origin, edge1, edge2));
        self
    }

    /// Axis-aligned cube centred on `position`, two triangles per face.
    pub fn cube(width: f64, position: DVec3, material: Material) -> Self {
        let h = width / 2.0;
        let w = width;
        let v = DVec3::new;
        let faces = [
            // y = -h
            (v(-h, -h, -h), v(w, 0.0, 0.0), v(0.0, 0.0, w)),
            (v(h, -h, h), v(-w, 0.0, 0.0), v(0.0, 0.0, -w)),
            // x = +h
            (v(h, -h, -h), v(0.0, w, 0.0), v(0.0, 0.0, w)),
            (v(h, h, h), v(0.0, -w, 0.0), v(0.0, 0.0, -w)),
            // y = +h
            (v(h, h, -h), v(-w, 0.0, 0.0), v(0.0, 0.0, w)),
            (v(-h, h, h), v(w, 0.0, 0.0), v(0.0, 0.0, -w)),
            // x = -h
            (v(-h, h, -h), v(0.0, -w, 0.0), v(0.0, 0.0, w)),
            (v(-h, -h, h), v(0.0, w, 0.0), v(0.0, 0.0, -w)),
            // z = -h
            (v(-h, -h, -h), v(w, 0.0, 0.0), v(0.0, w, 0.0)),
            (v(h, h, -h), v(-w, 0.0, 0.0), v(0.0, -w, 0.0)),
            // z = +h
            (v(-h, -h, h), v(w, 0.0, 0.0), v(0.0, w, 0.0)),
            (v(h, h, h), v(-w, 0.0, 0.0), v(0.0, -w, 0.0)),
        ];

        let mut object = Self::new(position, material);
        for (origin, edge1, edge2) in faces {
            object.add_patch(Patch::new(origin, edge1, edge2));
        }
        object
    }

    /// Horizontal rectangle centred on `position`.
    pub fn ground(length: f64, width: f64, position: DVec3, material: Material) -> Self {
        Self::new(position, material)
            .with_patch(
                DVec3::new(-length / 2.0, -width / 2.0, 0.0),
                DVec3::new(length, 0.0, 0.0),
                DVec3::new(0.0, width, 0.0),
            )
            .with_patch(
                DVec3::new(length / 2.0, width / 2.0, 0.0),
                DVec3::new(-length, 0.0, 0.0),
                DVec3::new(0.0, -width, 0.0),
            )
    }

    /// Tessellated sphere centred on `position`.
    pub fn sphere(radius: f64, position: DVec3, material: Material) -> Self {
        let mut object = Self::new(position, material);
        object.patches = unit_sphere_patches(SPHERE_BANDS)
            .into_iter()
            .map(|p| p.scaled(radius))
            .collect();
        object
    }

    /// Rotate every local patch about `axis` through the object origin.
    pub fn rotate(mut self, axis: Axis, radians: f64) -> Self {
        let m = match axis {
            Axis::X => DMat3::from_rotation_x(radians),
            Axis::Y => DMat3::from_rotation_y(radians),
            Axis::Z => DMat3::from_rotation_z(radians),
        };
        for patch in &mut self.patches {
            *patch = patch.transformed(&m);
        }
        self
    }

    pub fn rotate_x(self, radians: f64) -> Self {
        self.rotate(Axis::X, radians)
    }

    pub fn rotate_y(self, radians: f64) -> Self {
        self.rotate(Axis::Y, radians)
    }

    pub fn rotate_z(self, radians: f64) -> Self {
        self.rotate(Axis::Z, radians)
    }

    /// World-space surfaces for this object.
    pub fn to_surfaces(&self) -> Vec<Surface> {
        self.patches
            .iter()
            .map(|p| Surface::new(self.position + p.origin, p.edge1, p.edge2, self.material))
            .collect()
    }
}

/// Triangulate the unit sphere into `bands` latitude bands of `2 * bands`
/// longitude steps.
///
/// Each band is offset by half a step from the one above it so the triangles
/// between rings alternate. The polar bands are fans around the poles.
pub fn unit_sphere_patches(bands: usize) -> Vec<Patch> {
    let steps = 2 * bands;
    let north = DVec3::Z;
    let south = -DVec3::Z;
    let step = TAU / steps as f64;

    let mut patches = Vec::with_capacity(2 * steps * bands.saturating_sub(1));
    // Pairs of ring points from the previous band, in longitude order
    let mut previous: VecDeque<DVec3> = VecDeque::new();
    let mut bias = 0.0;

    for band in 1..bands {
        let phi = band as f64 / bands as f64 * PI;
        let mut ring = VecDeque::with_capacity(2 * steps);

        for j in 0..steps {
            let a = spherical(bias + j as f64 * step, phi);
            let b = spherical(bias + (j + 1) as f64 * step, phi);

            if band == 1 {
                patches.push(Patch::new(a, b - a, north - a));
            } else if let (Some(p3), Some(p4)) = (previous.pop_front(), previous.pop_front()) {
                patches.push(Patch::new(a, b - a, p3 - a));
                patches.push(Patch::new(p3, p4 - p3, b - p3));
            }

            ring.push_back(a);
            ring.push_back(b);
        }

        previous = ring;
        bias -= PI / steps as f64;
    }

    while let (Some(p3), Some(p4)) = (previous.pop_front(), previous.pop_front()) {
        patches.push(Patch::new(p3, p4 - p3, south - p3));
    }

    patches
}

fn spherical(theta: f64, phi: f64) -> DVec3 {
    DVec3::new(theta.cos() * phi.sin(), theta.sin() * phi.sin(), phi.cos())
}
