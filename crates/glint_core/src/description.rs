//! JSON scene description loading.
//!
//! A description lists objects, lights, the start pose and optional
//! renderer settings. Renderer settings are kept as raw JSON here so this
//! crate does not depend on the renderer; the viewer decodes them.
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let file = load_scene("scenes/room.json")?;
//! println!("{} surfaces, {} lights",
//!     file.scene.surface_count(),
//!     file.scene.light_count());
//! ```

use std::path::Path;

use glint_math::{Color, DVec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::light::{Light, DEFAULT_TEMPERATURE};
use crate::object::{Axis, Patch, SceneObject};
use crate::scene::{Scene, Viewpoint};
use crate::surface::Material;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Object {object} patch {patch} has parallel edges")]
    DegenerateSurface { object: usize, patch: usize },

    #[error("Invalid light {index}: {reason}")]
    InvalidLight { index: usize, reason: String },
}

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;

/// A loaded description: the scene plus renderer settings, if any.
#[derive(Debug)]
pub struct SceneFile {
    pub scene: Scene,
    pub camera: Option<serde_json::Value>,
}

/// Top-level JSON document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub viewpoint: ViewpointDescription,
    #[serde(default)]
    pub camera: Option<serde_json::Value>,
    #[serde(default)]
    pub objects: Vec<ObjectDescription>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ViewpointDescription {
    pub position: [f64; 3],
    pub yaw: f64,
    pub pitch: f64,
}

impl Default for ViewpointDescription {
    fn default() -> Self {
        let vp = Viewpoint::default();
        Self {
            position: vp.position.to_array(),
            yaw: vp.orientation.yaw,
            pitch: vp.orientation.pitch,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialDescription {
    #[serde(default = "white")]
    pub diffuse: [f64; 3],
    #[serde(default)]
    pub transparency: Option<[f64; 3]>,
    #[serde(default)]
    pub mirror: Option<[f64; 3]>,
}

fn white() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

impl From<&MaterialDescription> for Material {
    fn from(m: &MaterialDescription) -> Material {
        Material {
            diffuse: Color::from_array(m.diffuse),
            transparency: m.transparency.map(Color::from_array),
            mirror: m.mirror.map(Color::from_array),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisDescription {
    X,
    Y,
    Z,
}

impl From<AxisDescription> for Axis {
    fn from(a: AxisDescription) -> Axis {
        match a {
            AxisDescription::X => Axis::X,
            AxisDescription::Y => Axis::Y,
            AxisDescription::Z => Axis::Z,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RotationDescription {
    pub axis: AxisDescription,
    pub radians: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatchDescription {
    pub origin: [f64; 3],
    pub edge1: [f64; 3],
    pub edge2: [f64; 3],
}

/// Shape-specific part of an object.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeDescription {
    Cube { width: f64 },
    Ground { length: f64, width: f64 },
    Sphere { radius: f64 },
    Patches { patches: Vec<PatchDescription> },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObjectDescription {
    #[serde(flatten)]
    pub shape: ShapeDescription,
    pub position: [f64; 3],
    #[serde(default)]
    pub material: Option<MaterialDescription>,
    #[serde(default)]
    pub rotate: Vec<RotationDescription>,
}

impl From<&ObjectDescription> for SceneObject {
    fn from(o: &ObjectDescription) -> SceneObject {
        let position = DVec3::from_array(o.position);
        let material = o.material.as_ref().map(Material::from).unwrap_or_default();

        let object = match &o.shape {
            ShapeDescription::Cube { width } => SceneObject::cube(*width, position, material),
            ShapeDescription::Ground { length, width } => {
                SceneObject::ground(*length, *width, position, material)
            }
            ShapeDescription::Sphere { radius } => SceneObject::sphere(*radius, position, material),
            ShapeDescription::Patches { patches } => {
                let mut object = SceneObject::new(position, material);
                for p in patches {
                    object.add_patch(Patch::new(
                        DVec3::from_array(p.origin),
                        DVec3::from_array(p.edge1),
                        DVec3::from_array(p.edge2),
                    ));
                }
                object
            }
        };

        o.rotate
            .iter()
            .fold(object, |obj, r| obj.rotate(r.axis.into(), r.radians))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LightDescription {
    Point {
        intensity: f64,
        position: [f64; 3],
        #[serde(default = "default_temperature")]
        temperature: f64,
    },
    Spot {
        intensity: f64,
        position: [f64; 3],
        direction: [f64; 3],
        half_angle: f64,
        #[serde(default = "default_temperature")]
        temperature: f64,
    },
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

impl LightDescription {
    fn to_light(&self, index: usize) -> SceneResult<Light> {
        match self {
            LightDescription::Point {
                intensity,
                position,
                temperature,
            } => Ok(Light::point(*intensity, DVec3::from_array(*position)).with_temperature(*temperature)),
            LightDescription::Spot {
                intensity,
                position,
                direction,
                half_angle,
                temperature,
            } => {
                let direction = DVec3::from_array(*direction);
                if direction.length_squared() == 0.0 {
                    return Err(SceneError::InvalidLight {
                        index,
                        reason: "spot direction has zero length".to_string(),
                    });
                }
                Ok(Light::spot(
                    *intensity,
                    DVec3::from_array(*position),
                    direction.normalize(),
                    *half_angle,
                )
                .with_temperature(*temperature))
            }
        }
    }
}

impl SceneDescription {
    /// Build the scene, rejecting zero-area patches and invalid lights.
    pub fn build(&self, name: &str) -> SceneResult<SceneFile> {
        let vp = &self.viewpoint;
        let mut scene = Scene::new(self.name.clone().unwrap_or_else(|| name.to_string()))
            .with_viewpoint(Viewpoint::new(DVec3::from_array(vp.position), vp.yaw, vp.pitch));

        for (object_index, description) in self.objects.iter().enumerate() {
            let object = SceneObject::from(description);
            let range = scene.add_object(&object);
            if let Some(patch) = scene.surfaces[range.clone()].iter().position(|s| s.is_degenerate()) {
                return Err(SceneError::DegenerateSurface {
                    object: object_index,
                    patch,
                });
            }
        }

        for (index, description) in self.lights.iter().enumerate() {
            scene.add_light(description.to_light(index)?);
        }

        if scene.lights.is_empty() {
            log::warn!("Scene '{}' has no lights; everything will render black", scene.name);
        }

        log::info!(
            "Loaded scene '{}': {} objects, {} surfaces, {} lights",
            scene.name,
            self.objects.len(),
            scene.surface_count(),
            scene.light_count()
        );

        Ok(SceneFile {
            scene,
            camera: self.camera.clone(),
        })
    }
}

/// Load a scene description from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneFile> {
    let path = path.as_ref();
    let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("unnamed");
    let text = std::fs::read_to_string(path)?;
    let description: SceneDescription = serde_json::from_str(&text)?;
    description.build(name)
}

/// Load a scene description from a JSON string.
pub fn load_scene_from_str(json: &str) -> SceneResult<SceneFile> {
    let description: SceneDescription = serde_json::from_str(json)?;
    description.build("unnamed")
}
