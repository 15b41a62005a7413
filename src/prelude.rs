//! # Prelude
//!
//! Commonly used types in one import.
//!
//! ```rust
//! use deskscene::prelude::*;
//!
//! let mut pc = build_pc(&PcSpec::default(), 0);
//! pc.initialize();
//! assert_eq!(pc.part_count(), 4);
//! ```

pub use crate::config::{generate_default_configs, ObjectRecord, DEFAULT_CONFIG_DIR};
pub use crate::error::{Result, SceneError};
pub use crate::gfx::camera::{Camera, CameraMotion, CameraSettings, FlyCamera};
pub use crate::gfx::geometry::{
    build_keyboard, build_monitor, build_pc, generate_box_faces, generate_fan, generate_key_grid,
    generate_rect, KeyGrid, KeyboardSpec, MonitorSpec, PcSpec,
};
pub use crate::gfx::rendering::{DrawObject, FlatColorPipeline, PipelineConfig, RenderResources};
pub use crate::gfx::scene::{
    DeviceKind, DrawRange, Face, Object, ObjectId, Part, PartBuffers, Point3, Renderable, Rgb,
    Scene, SceneAnimator, SceneLayout,
};
