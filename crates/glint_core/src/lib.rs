//! Glint Core - scene data for the progressive ray tracer.
//!
//! This crate provides:
//!
//! - **Scene data**: `Surface`, `Material`, `Light`, `Scene`
//! - **Authoring helpers**: `SceneObject` cubes, grounds and tessellated spheres
//! - **Scene files**: JSON description loading
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let file = load_scene("scene.json")?;
//! println!("Loaded {} surfaces, {} lights",
//!     file.scene.surface_count(),
//!     file.scene.light_count());
//! ```

pub mod description;
pub mod light;
pub mod object;
pub mod scene;
pub mod surface;

// Re-export commonly used types
pub use description::{load_scene, load_scene_from_str, SceneDescription, SceneError, SceneFile, SceneResult};
pub use light::{color_from_temperature, Light, LightKind, DEFAULT_TEMPERATURE};
pub use object::{Axis, Patch, SceneObject};
pub use scene::{Scene, Viewpoint};
pub use surface::{Material, Surface};
