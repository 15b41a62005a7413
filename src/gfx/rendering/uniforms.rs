use cgmath::{Matrix4, SquareMatrix};

use crate::gfx::camera::convert_matrix4_to_array;
use crate::gfx::scene::face::Rgb;

/// Per-draw-range uniform: the full model-view-projection matrix and the
/// range's color (alpha is always 1).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniform {
    pub mvp: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl DrawUniform {
    pub fn new(mvp: Matrix4<f32>, color: Rgb) -> Self {
        let [r, g, b] = color;
        Self {
            mvp: convert_matrix4_to_array(mvp),
            color: [r, g, b, 1.0],
        }
    }
}

impl Default for DrawUniform {
    fn default() -> Self {
        Self::new(Matrix4::identity(), [1.0, 1.0, 1.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_layout() {
        // mat4x4<f32> + vec4<f32>, both 16-byte aligned
        assert_eq!(std::mem::size_of::<DrawUniform>(), 80);

        let uniform = DrawUniform::new(Matrix4::from_scale(2.0), [0.1, 0.8, 0.1]);
        assert_eq!(uniform.color, [0.1, 0.8, 0.1, 1.0]);
        assert_eq!(uniform.mvp[0][0], 2.0);
        assert_eq!(uniform.mvp[3][3], 1.0);
    }
}
