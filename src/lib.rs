// src/lib.rs
//! Desk scene geometry
//!
//! Hierarchical PC, monitor and keyboard models built from JSON-described
//! faces, with relative-coordinate transforms, procedural generators and a
//! wgpu render boundary.

pub mod config;
pub mod error;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use error::{Result, SceneError};
pub use gfx::scene::{DeviceKind, Face, Object, Part, Point3, Scene};
