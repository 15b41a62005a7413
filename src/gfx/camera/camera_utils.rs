use cgmath::{Matrix4, SquareMatrix};

/// Maps OpenGL clip-space depth (-1..1) to wgpu's (0..1).
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

pub trait Camera {
    fn build_view_projection_matrix(&self, aspect: f32) -> Matrix4<f32>;
}

/// Column-major copy of a cgmath matrix, as uniform buffers expect it.
pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    let mut result = [[0.0; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            result[i][j] = matrix4[i][j];
        }
    }

    result
}

pub fn identity_array() -> [[f32; 4]; 4] {
    convert_matrix4_to_array(Matrix4::identity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    #[test]
    fn test_convert_keeps_column_major_layout() {
        let m = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let a = convert_matrix4_to_array(m);
        assert_eq!(a[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(a[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(identity_array()[2], [0.0, 0.0, 1.0, 0.0]);
    }
}
