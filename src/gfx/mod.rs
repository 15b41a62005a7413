//! # Graphics Module
//!
//! Geometry, scene model and the GPU boundary for the desk scene.
//!
//! ## Architecture Overview
//!
//! - **Scene Model** ([`scene`]) - Object → Part → Face hierarchy, relative transforms, validation
//! - **Geometry** ([`geometry`]) - Procedural face generators and device builders
//! - **Camera** ([`camera`]) - Fly camera producing view-projection matrices
//! - **Rendering** ([`rendering`]) - Flat color wgpu pipeline and per-object GPU resources
//!
//! Data flows one way: generators produce faces, faces are assembled into
//! parts and objects, objects flatten themselves into per-part buffers, and
//! the rendering collaborator uploads and draws those buffers.
//!
//! ```no_run
//! use deskscene::gfx::scene::{Scene, SceneLayout};
//!
//! let scene = Scene::load("Config", &SceneLayout::default())?;
//! println!("{}", scene.statistics());
//! # Ok::<(), deskscene::SceneError>(())
//! ```

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod scene;
