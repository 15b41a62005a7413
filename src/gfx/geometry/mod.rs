//! # Procedural Geometry Generation
//!
//! Device geometry is generated rather than modelled: the primitives emit
//! [`Face`](crate::gfx::scene::Face)s from a few parameters, and the device
//! builders assemble them into complete objects.
//!
//! ## Usage
//!
//! ```rust
//! use deskscene::gfx::geometry::{build_monitor, generate_fan, MonitorSpec};
//!
//! // Ventilator blades: 1 center + 6 tips
//! let blades = generate_fan("Blades", 0.3, 6, [0.3, 0.3, 0.3]);
//! assert_eq!(blades.vertices.len(), 7);
//!
//! let spec = MonitorSpec::default();
//! spec.validate().unwrap();
//! let monitor = build_monitor(&spec, 0);
//! assert_eq!(monitor.parts.len(), 3);
//! ```

pub mod constants;
pub mod devices;
pub mod primitives;

pub use devices::{build_default, build_keyboard, build_monitor, build_pc, KeyboardSpec, MonitorSpec, PcSpec};
pub use primitives::*;
