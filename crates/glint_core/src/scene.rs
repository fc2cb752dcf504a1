//! Scene container handed to the renderer.
//!
//! Surfaces and lights are flattened into plain vectors and referenced by
//! index. Nothing in the renderer mutates them.

use glint_math::{Color, DVec3, Orientation};

use crate::light::Light;
use crate::object::SceneObject;
use crate::surface::{Material, Surface};

/// Initial observer pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewpoint {
    pub position: DVec3,
    pub orientation: Orientation,
}

impl Viewpoint {
    pub fn new(position: DVec3, yaw: f64, pitch: f64) -> Self {
        Self {
            position,
            orientation: Orientation::new(yaw, pitch),
        }
    }
}

impl Default for Viewpoint {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            orientation: Orientation::default(),
        }
    }
}

/// A complete scene: surfaces, lights and where the observer starts.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Scene name (usually from filename)
    pub name: String,

    /// Flattened surfaces, in insertion order
    pub surfaces: Vec<Surface>,

    /// Light sources
    pub lights: Vec<Light>,

    /// Observer start pose
    pub viewpoint: Viewpoint,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the start pose.
    pub fn with_viewpoint(mut self, viewpoint: Viewpoint) -> Self {
        self.viewpoint = viewpoint;
        self
    }

    /// Flatten an object into surfaces and return the index range it occupies.
    pub fn add_object(&mut self, object: &SceneObject) -> std::ops::Range<usize> {
        let start = self.surfaces.len();
        self.surfaces.extend(object.to_surfaces());
        start..self.surfaces.len()
    }

    /// Add a light and return its index.
    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Small demo layout: a grey floor, a tinted glass cube, a yellow ball
    /// and three warm lights.
    pub fn demo() -> Self {
        let mut scene = Scene::new("demo").with_viewpoint(Viewpoint::new(
            DVec3::new(115.5, 177.8, 1.0),
            5.54,
            1.36,
        ));

        scene.add_object(&SceneObject::ground(
            300.0,
            300.0,
            DVec3::new(150.0, 150.0, 0.1),
            Material::diffuse(Color::splat(0.2)),
        ));
        scene.add_object(
            &SceneObject::cube(
                10.0,
                DVec3::new(130.0, 150.0, 5.0),
                Material::diffuse(Color::new(0.6, 0.6, 0.9))
                    .with_transparency(Color::new(0.2, 0.3, 0.6)),
            )
            .rotate_z(0.2),
        );
        scene.add_object(&SceneObject::sphere(
            5.0,
            DVec3::new(130.0, 170.0, 5.0),
            Material::diffuse(Color::new(0.8, 0.8, 0.1)),
        ));

        scene.add_light(Light::point(3_000_000.0, DVec3::new(150.0, 150.0, 180.0)).with_temperature(4000.0));
        scene.add_light(Light::point(5_000_000.0, DVec3::new(110.0, 250.0, 130.0)).with_temperature(4000.0));
        scene.add_light(Light::point(120_000.0, DVec3::new(70.0, 180.0, 17.0)).with_temperature(6600.0));

        scene
    }
}
