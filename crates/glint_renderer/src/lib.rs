//! Glint Renderer - progressive CPU ray tracing of planar patch scenes.
//!
//! Rays are resolved against a flat list of [`Surface`](glint_core::Surface)s
//! with direct lighting, shadow rays, transparent layers and mirror bounces.
//! The [`Camera`] refines its sample grid a little on every tick and starts
//! over whenever the observer moves.

mod camera;
mod command;
mod grid;
mod intersect;
mod shade;
mod trace;

pub use camera::{Camera, CameraConfig, GridView, Progress, SamplerState, TickReport};
pub use command::{Command, ParseCommandError};
pub use grid::Grid;
pub use intersect::{hit_distance, intersect};
pub use shade::shade;
pub use trace::{TraceConfig, TraceStats, Tracer, MAX_BOUNCES};

/// Re-export the math types used in the public API
pub use glint_math::{Color, DVec3, Ray};
