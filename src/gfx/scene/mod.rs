//! # Scene Model
//!
//! The object hierarchy and everything that operates on it directly.
//!
//! - [`Point3`] - value type for positions, rotations and scales
//! - [`Face`] - a uniformly colored triangle list, vertices local to its centroid
//! - [`Part`] - faces sharing one transform, flattened into one buffer pair
//! - [`Object`] - parts plus scene placement, the unit of loading and saving
//! - [`Scene`] - the loaded objects, laid out in rows by device kind
//!
//! Coordinates are relative at every level. Centroids compose by plain
//! addition; only face-local vertices are scaled and rotated.

pub mod animation;
pub mod face;
pub mod object;
pub mod part;
pub mod point;
pub mod scene;
pub mod validation;

pub use animation::SceneAnimator;
pub use face::{Face, Rgb};
pub use object::{DeviceKind, Object, ObjectId, Renderable};
pub use part::{DrawRange, Part, PartBuffers};
pub use point::Point3;
pub use scene::{RowPlacement, Scene, SceneLayout};
