//! # Parts
//!
//! A [`Part`] groups faces under one frame (centroid, rotation, scale) and is
//! the unit of GPU upload: all of its faces are flattened into one vertex
//! buffer and one index buffer, with a draw range per face.

use cgmath::{Matrix4, Rad, SquareMatrix};

use crate::error::SceneError;
use crate::gfx::geometry::constants::validation::MIN_FACES_PER_PART;

use super::face::{Face, Rgb};
use super::point::Point3;

/// One uniform-color slice of a part's index buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRange {
    /// First index of the slice within the part's index buffer
    pub index_offset: u32,
    pub index_count: u32,
    pub color: Rgb,
}

/// Flattened geometry of one part, ready for upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartBuffers {
    /// Interleaved positions, 3 floats per vertex
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl PartBuffers {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn position(&self, index: usize) -> Option<Point3> {
        let start = index * 3;
        self.vertices
            .get(start..start + 3)
            .map(|p| Point3::new(p[0], p[1], p[2]))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    pub faces: Vec<Face>,
    /// Relative to the owning object
    pub centroid: Point3,
    /// Radians per axis
    pub rotation: Point3,
    pub scale: Point3,
    pub visible: bool,
}

impl Default for Part {
    fn default() -> Self {
        Self {
            name: String::new(),
            faces: Vec::new(),
            centroid: Point3::ZERO,
            rotation: Point3::ZERO,
            scale: Point3::ONE,
            visible: true,
        }
    }
}

impl Part {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_centroid(name: impl Into<String>, centroid: Point3) -> Self {
        Self {
            name: name.into(),
            centroid,
            ..Default::default()
        }
    }

    pub fn with_faces(mut self, faces: impl IntoIterator<Item = Face>) -> Self {
        self.faces.extend(faces);
        self
    }

    /// Flattens every face into one vertex/index buffer pair.
    ///
    /// Faces are concatenated in stored order; each face's indices are offset
    /// by the number of vertices emitted before it.
    pub fn build_buffers(&self, object_centroid: Point3) -> PartBuffers {
        let part_centroid = self.centroid.relative_to(object_centroid);
        let mut buffers = PartBuffers::default();
        let mut index_base = 0u32;

        for face in &self.faces {
            let transformed = face.transformed_vertices(part_centroid, self.rotation, self.scale);

            buffers
                .vertices
                .extend(transformed.iter().flat_map(|v| v.to_array()));
            buffers
                .indices
                .extend(face.indices.iter().map(|index| index.saturating_add(index_base)));

            // Out-of-range indices stay out of range; they are reported by `validate`.
            index_base = index_base.saturating_add(transformed.len() as u32);
        }

        buffers
    }

    /// Per-face draw ranges, built from the current face colors.
    pub fn draw_ranges(&self) -> Vec<DrawRange> {
        let mut offset = 0u32;
        self.faces
            .iter()
            .map(|face| {
                let range = DrawRange {
                    index_offset: offset,
                    index_count: face.indices.len() as u32,
                    color: face.color,
                };
                offset = offset.saturating_add(range.index_count);
                range
            })
            .collect()
    }

    /// Draw-time part matrix: scale, then rotation about X, Y and Z.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        if self.scale == Point3::ONE && self.rotation == Point3::ZERO {
            return Matrix4::identity();
        }
        Matrix4::from_angle_z(Rad(self.rotation.z))
            * Matrix4::from_angle_y(Rad(self.rotation.y))
            * Matrix4::from_angle_x(Rad(self.rotation.x))
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    pub fn rotate(&mut self, delta: Point3) {
        self.rotation += delta;
    }

    pub fn set_rotation(&mut self, rotation: Point3) {
        self.rotation = rotation;
    }

    /// Multiplies the current scale component-wise.
    pub fn scale_by(&mut self, factors: Point3) {
        self.scale = Point3::new(
            self.scale.x * factors.x,
            self.scale.y * factors.y,
            self.scale.z * factors.z,
        );
    }

    pub fn set_scale(&mut self, scale: Point3) {
        self.scale = scale;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Sets `centroid` to the mean of all face vertices placed at their face
    /// centroids. Origin when there are no faces; unchanged when the faces
    /// hold no vertices.
    pub fn calculate_centroid(&mut self) {
        if self.faces.is_empty() {
            self.centroid = Point3::ZERO;
            return;
        }

        let placed: Vec<Point3> = self
            .faces
            .iter()
            .flat_map(|face| face.vertices.iter().map(|v| v.relative_to(face.centroid)))
            .collect();

        if let Some(centroid) = super::face::mean(&placed) {
            self.centroid = centroid;
        }
    }

    /// Case-insensitive face lookup
    pub fn face(&self, name: &str) -> Option<&Face> {
        self.faces.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    pub fn face_mut(&mut self, name: &str) -> Option<&mut Face> {
        self.faces
            .iter_mut()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    pub fn vertex_count(&self) -> usize {
        self.faces.iter().map(Face::vertex_count).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.iter().map(Face::triangle_count).sum()
    }

    pub fn validate(&self) -> Vec<SceneError> {
        let mut violations = Vec::new();

        if self.name.is_empty() {
            violations.push(SceneError::StructuralViolation(
                "part has no name".to_string(),
            ));
        }

        if self.faces.len() < MIN_FACES_PER_PART {
            violations.push(SceneError::StructuralViolation(format!(
                "part '{}' has {} faces, at least {} required",
                self.name,
                self.faces.len(),
                MIN_FACES_PER_PART
            )));
        }

        for face in &self.faces {
            violations.extend(face.validate());
        }

        violations
    }

    pub fn statistics(&self) -> String {
        format!(
            "Part '{}': {} faces, {} vertices, {} triangles",
            self.name,
            self.faces.len(),
            self.vertex_count(),
            self.triangle_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::primitives::{generate_fan, generate_rect};
    use approx::assert_abs_diff_eq;
    use cgmath::Vector4;

    fn quad_part(count: usize) -> Part {
        let faces = (0..count).map(|i| {
            generate_rect(format!("q{i}"), 0.5, 0.5, [0.1 * i as f32, 0.0, 0.0])
                .at(Point3::new(i as f32, 0.0, 0.0))
        });
        Part::with_centroid("quads", Point3::new(0.0, 1.0, 0.0)).with_faces(faces)
    }

    #[test]
    fn test_index_offsets_accumulate_vertex_counts() {
        let part = quad_part(3);
        let buffers = part.build_buffers(Point3::ZERO);
        assert_eq!(buffers.vertex_count(), 12);
        assert_eq!(buffers.indices.len(), 18);
        for (i, chunk) in buffers.indices.chunks(6).enumerate() {
            let offset = 4 * i as u32;
            let expected: Vec<u32> = [0, 1, 2, 2, 3, 0].iter().map(|x| x + offset).collect();
            assert_eq!(chunk, expected.as_slice());
        }
    }

    #[test]
    fn test_mixed_face_sizes_keep_offsets_valid() {
        let part = Part::new("mixed").with_faces([
            generate_fan("fan", 1.0, 5, [1.0, 1.0, 1.0]),
            generate_rect("rect", 0.2, 0.2, [0.0, 0.0, 0.0]),
        ]);
        let buffers = part.build_buffers(Point3::ZERO);
        assert_eq!(buffers.vertex_count(), 6 + 4);
        assert_eq!(&buffers.indices[15..], &[6, 7, 8, 8, 9, 6]);
        let max = *buffers.indices.iter().max().unwrap();
        assert!((max as usize) < buffers.vertex_count());
    }

    #[test]
    fn test_centroids_compose_additively() {
        let part = quad_part(2);
        let buffers = part.build_buffers(Point3::new(10.0, 0.0, 0.0));
        // face 1 vertex 0: (-0.5, -0.5, 0) + face (1, 0, 0) + part (0, 1, 0) + object (10, 0, 0)
        let p = buffers.position(4).unwrap();
        assert!(p.approx_eq(Point3::new(10.5, 0.5, 0.0), 0.001));
    }

    #[test]
    fn test_draw_ranges_follow_face_order_and_colors() {
        let mut part = quad_part(3);
        part.faces[1].color = [0.9, 0.1, 0.1];
        let ranges = part.draw_ranges();
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[0].index_offset, 0);
        assert_eq!(ranges[1].index_offset, 6);
        assert_eq!(ranges[2].index_offset, 12);
        assert!(ranges.iter().all(|r| r.index_count == 6));
        assert_eq!(ranges[1].color, [0.9, 0.1, 0.1]);
    }

    #[test]
    fn test_transform_setters() {
        let mut part = Part::new("p");
        part.rotate(Point3::new(0.0, 0.5, 0.0));
        part.rotate(Point3::new(0.0, 0.25, 0.0));
        assert_abs_diff_eq!(part.rotation.y, 0.75, epsilon = 0.001);
        part.scale_by(Point3::new(2.0, 1.0, 0.5));
        part.scale_by(Point3::new(2.0, 1.0, 1.0));
        assert_eq!(part.scale, Point3::new(4.0, 1.0, 0.5));
        part.set_visible(false);
        assert!(!part.visible);
    }

    #[test]
    fn test_model_matrix_identity_and_rotation() {
        let mut part = Part::new("p");
        assert_eq!(part.model_matrix(), Matrix4::identity());

        part.set_rotation(Point3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0));
        let v = part.model_matrix() * Vector4::new(0.0, 0.0, 1.0, 1.0);
        assert_abs_diff_eq!(v.x, 1.0, epsilon = 0.001);
        assert_abs_diff_eq!(v.z, 0.0, epsilon = 0.001);
    }

    #[test]
    fn test_calculate_centroid_and_lookup() {
        let mut part = quad_part(3);
        part.calculate_centroid();
        assert!(part.centroid.approx_eq(Point3::new(1.0, 0.0, 0.0), 0.001));

        assert!(part.face("Q1").is_some());
        part.face_mut("q2").unwrap().color = [0.0, 0.0, 0.0];
        assert_eq!(part.faces[2].color, [0.0, 0.0, 0.0]);
        assert!(part.face("missing").is_none());

        let mut empty = Part::with_centroid("empty", Point3::ONE);
        empty.calculate_centroid();
        assert_eq!(empty.centroid, Point3::ZERO);
    }

    #[test]
    fn test_validate_requires_faces() {
        let violations = Part::new("empty").validate();
        assert_eq!(violations.len(), 1);
        assert!(quad_part(1).validate().is_empty());
    }
}
