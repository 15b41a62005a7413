//! Rendering collaborator
//!
//! Turns the per-part buffers and draw ranges of scene objects into wgpu
//! resources and draw calls. The scene model itself holds no GPU state; the
//! [`RenderResources`] table owns it, keyed by object id.

pub mod draw;
pub mod pipeline;
pub mod resources;
pub mod uniforms;
pub mod vertex;

// Re-export main types
pub use draw::{draw_calls, DrawCall, DrawObject};
pub use pipeline::{FlatColorPipeline, PipelineConfig};
pub use resources::{ObjectGpuResources, RenderResources};
pub use uniforms::DrawUniform;
pub use vertex::PositionVertex;
