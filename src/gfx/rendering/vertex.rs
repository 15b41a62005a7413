//! Vertex layout of the flat color pipeline.

/// Position-only vertex, the layout of a part's flattened vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionVertex {
    pub position: [f32; 3],
}

impl PositionVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PositionVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    /// Reinterprets a flat `[x, y, z, x, y, z, ...]` buffer without copying.
    pub fn from_flat(positions: &[f32]) -> &[PositionVertex] {
        bytemuck::cast_slice(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_flat_buffers() {
        assert_eq!(std::mem::size_of::<PositionVertex>(), 12);
        assert_eq!(PositionVertex::desc().array_stride, 12);

        let flat = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let vertices = PositionVertex::from_flat(&flat);
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[1].position, [3.0, 4.0, 5.0]);
    }
}
