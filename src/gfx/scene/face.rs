//! # Faces
//!
//! A [`Face`] is the leaf of the object hierarchy: a small triangle list whose
//! vertices are stored relative to the face's own centroid, drawn with a
//! single uniform color.

use crate::error::{Result, SceneError};
use crate::gfx::geometry::constants::validation::MIN_VERTICES_PER_FACE;

use super::point::Point3;

/// Linear RGB color, each channel in 0.0..=1.0
pub type Rgb = [f32; 3];

/// Indices of the two triangles that make up a quad `v0 v1 v2 v3`.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub name: String,
    /// Vertices relative to `centroid`
    pub vertices: Vec<Point3>,
    /// Triangle list into `vertices`
    pub indices: Vec<u32>,
    pub color: Rgb,
    /// Position of the face's frame inside its part
    pub centroid: Point3,
}

impl Default for Face {
    fn default() -> Self {
        Self {
            name: String::new(),
            vertices: Vec::new(),
            indices: Vec::new(),
            color: [1.0, 1.0, 1.0],
            centroid: Point3::ZERO,
        }
    }
}

impl Face {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_color(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            color,
            ..Default::default()
        }
    }

    /// Builder-style centroid setter
    pub fn at(mut self, centroid: Point3) -> Self {
        self.centroid = centroid;
        self
    }

    /// Vertices expressed in the owning object's frame.
    ///
    /// `part_centroid` is the part's absolute centroid (part centroid plus
    /// object centroid). Only the face-local coordinates go through the part's
    /// rotation and scale; the face centroid and the part centroid are added
    /// as plain translations.
    pub fn transformed_vertices(
        &self,
        part_centroid: Point3,
        part_rotation: Point3,
        part_scale: Point3,
    ) -> Vec<Point3> {
        self.vertices
            .iter()
            .map(|v| {
                v.transform(self.centroid, part_rotation, part_scale)
                    .relative_to(part_centroid)
            })
            .collect()
    }

    /// Sets `centroid` to the mean of the stored vertices (origin when empty).
    pub fn calculate_centroid(&mut self) {
        self.centroid = mean(&self.vertices).unwrap_or(Point3::ZERO);
    }

    /// Appends a quad as two triangles `{b, b+1, b+2, b+2, b+3, b}`.
    pub fn add_quad(&mut self, v1: Point3, v2: Point3, v3: Point3, v4: Point3) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&[v1, v2, v3, v4]);
        self.indices
            .extend(QUAD_INDICES.iter().map(|index| base + index));
    }

    /// Appends a counter-clockwise triangle.
    pub fn add_triangle(&mut self, v1: Point3, v2: Point3, v3: Point3) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&[v1, v2, v3]);
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, vertex: Point3) -> u32 {
        self.vertices.push(vertex);
        (self.vertices.len() - 1) as u32
    }

    /// Appends a triangle over existing vertices. Nothing is appended when any
    /// index is out of range.
    pub fn add_triangle_by_indices(&mut self, a: u32, b: u32, c: u32) -> Result<()> {
        let count = self.vertices.len() as u32;
        if a >= count || b >= count || c >= count {
            return Err(SceneError::StructuralViolation(format!(
                "face '{}': triangle ({}, {}, {}) references a vertex outside 0..{}",
                self.name, a, b, c, count
            )));
        }
        self.indices.extend_from_slice(&[a, b, c]);
        Ok(())
    }

    /// Reverses the winding of every triangle (swaps its 2nd and 3rd index).
    pub fn flip_winding(&mut self) {
        for triangle in self.indices.chunks_exact_mut(3) {
            triangle.swap(1, 2);
        }
    }

    /// Largest absolute face-local coordinate on each axis.
    pub fn half_extents(&self) -> Point3 {
        self.vertices.iter().fold(Point3::ZERO, |acc, v| {
            Point3::new(
                acc.x.max(v.x.abs()),
                acc.y.max(v.y.abs()),
                acc.z.max(v.z.abs()),
            )
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Every structural problem of this face.
    pub fn validate(&self) -> Vec<SceneError> {
        let mut violations = Vec::new();

        if self.vertices.len() < MIN_VERTICES_PER_FACE {
            violations.push(SceneError::StructuralViolation(format!(
                "face '{}' has {} vertices, at least {} required",
                self.name,
                self.vertices.len(),
                MIN_VERTICES_PER_FACE
            )));
        }

        if self.indices.len() % 3 != 0 {
            violations.push(SceneError::StructuralViolation(format!(
                "face '{}' has {} indices, not a whole number of triangles",
                self.name,
                self.indices.len()
            )));
        }

        for &index in &self.indices {
            if index as usize >= self.vertices.len() {
                violations.push(SceneError::StructuralViolation(format!(
                    "face '{}' has out-of-range index {}",
                    self.name, index
                )));
            }
        }

        violations
    }

    pub fn statistics(&self) -> String {
        format!(
            "Face '{}': {} vertices, {} triangles",
            self.name,
            self.vertex_count(),
            self.triangle_count()
        )
    }
}

/// Arithmetic mean of a point set, `None` when empty.
pub(crate) fn mean(points: &[Point3]) -> Option<Point3> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point3::ZERO, |acc, &p| acc + p);
    Some(sum * (1.0 / points.len() as f32))
}
