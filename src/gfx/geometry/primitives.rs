//! # Primitive Face Generation
//!
//! Pure functions that turn a handful of parameters into [`Face`]s. Every
//! quad uses the `{0, 1, 2, 2, 3, 0}` index pattern and counter-clockwise
//! winding, so the implied normal follows the right-hand rule.
//!
//! The generators do not check that their parameters make sense together
//! (a display larger than its frame, say); callers validate beforehand.

use std::f32::consts::PI;

use crate::gfx::scene::face::{Face, Rgb};
use crate::gfx::scene::point::Point3;

/// Generate a flat N-gon fan in the XZ plane around the face origin
///
/// Vertex 0 is the center, vertices `1..=segments` lie on the circle at
/// angles `2πi/segments`. Triangle `i` is `(0, i + 1, (i + 1) % segments + 1)`,
/// so the last triangle closes back onto vertex 1.
pub fn generate_fan(name: impl Into<String>, radius: f32, segments: u32, color: Rgb) -> Face {
    let mut face = Face::with_color(name, color);
    face.vertices.reserve(segments as usize + 1);
    face.indices.reserve(segments as usize * 3);

    face.vertices.push(Point3::ZERO);
    for i in 0..segments {
        let theta = 2.0 * PI * i as f32 / segments as f32;
        face.vertices
            .push(Point3::new(radius * theta.cos(), 0.0, radius * theta.sin()));
    }

    for i in 0..segments {
        face.indices
            .extend_from_slice(&[0, i + 1, (i + 1) % segments + 1]);
    }

    face
}

/// Generate a single quad from four corners given in winding order
pub fn generate_quad(name: impl Into<String>, corners: [Point3; 4], color: Rgb) -> Face {
    let mut face = Face::with_color(name, color);
    let [a, b, c, d] = corners;
    face.add_quad(a, b, c, d);
    face
}

/// Generate an axis-aligned rectangle in the XY plane facing +Z
pub fn generate_rect(name: impl Into<String>, half_width: f32, half_height: f32, color: Rgb) -> Face {
    generate_quad(
        name,
        [
            Point3::new(-half_width, -half_height, 0.0),
            Point3::new(half_width, -half_height, 0.0),
            Point3::new(half_width, half_height, 0.0),
            Point3::new(-half_width, half_height, 0.0),
        ],
        color,
    )
}

/// Generate a rectangle in the XZ plane facing +Y
pub fn generate_horizontal_rect(
    name: impl Into<String>,
    half_width: f32,
    half_depth: f32,
    color: Rgb,
) -> Face {
    generate_quad(
        name,
        [
            Point3::new(-half_width, 0.0, half_depth),
            Point3::new(half_width, 0.0, half_depth),
            Point3::new(half_width, 0.0, -half_depth),
            Point3::new(-half_width, 0.0, -half_depth),
        ],
        color,
    )
}

/// Box side names, in the order [`generate_box_faces`] emits them
pub const BOX_SIDES: [&str; 6] = ["Front", "Back", "Left", "Right", "Top", "Bottom"];

/// Generate the six faces of an axis-aligned box centered on the part origin
///
/// Each face sits at its side's center (`centroid`), with vertices relative to
/// it, and is wound so its normal points away from the box center. Face names
/// are `prefix` followed by the side name.
pub fn generate_box_faces(prefix: &str, half_extents: Point3, color: Rgb) -> Vec<Face> {
    let Point3 { x: hx, y: hy, z: hz } = half_extents;
    let p = Point3::new;

    let sides: [(Point3, [Point3; 4]); 6] = [
        // +Z
        (
            p(0.0, 0.0, hz),
            [p(-hx, -hy, 0.0), p(hx, -hy, 0.0), p(hx, hy, 0.0), p(-hx, hy, 0.0)],
        ),
        // -Z
        (
            p(0.0, 0.0, -hz),
            [p(-hx, hy, 0.0), p(hx, hy, 0.0), p(hx, -hy, 0.0), p(-hx, -hy, 0.0)],
        ),
        // -X
        (
            p(-hx, 0.0, 0.0),
            [p(0.0, hy, -hz), p(0.0, -hy, -hz), p(0.0, -hy, hz), p(0.0, hy, hz)],
        ),
        // +X
        (
            p(hx, 0.0, 0.0),
            [p(0.0, -hy, -hz), p(0.0, hy, -hz), p(0.0, hy, hz), p(0.0, -hy, hz)],
        ),
        // +Y
        (
            p(0.0, hy, 0.0),
            [p(hx, 0.0, -hz), p(-hx, 0.0, -hz), p(-hx, 0.0, hz), p(hx, 0.0, hz)],
        ),
        // -Y
        (
            p(0.0, -hy, 0.0),
            [p(-hx, 0.0, -hz), p(hx, 0.0, -hz), p(hx, 0.0, hz), p(-hx, 0.0, hz)],
        ),
    ];

    sides
        .into_iter()
        .zip(BOX_SIDES)
        .map(|((center, corners), side)| {
            generate_quad(format!("{prefix}{side}"), corners, color).at(center)
        })
        .collect()
}

/// Parameters of a rectangular grid of keys
#[derive(Debug, Clone, PartialEq)]
pub struct KeyGrid {
    pub rows: u32,
    pub columns: u32,
    /// X of the first column's key centers
    pub start_x: f32,
    /// Z of the first row's key centers; later rows step towards -Z
    pub start_z: f32,
    pub spacing: f32,
    pub key_width: f32,
    pub key_height: f32,
    pub key_depth: f32,
    /// Fraction of the key footprint the top face covers
    pub top_inset: f32,
    pub side_color: Rgb,
    pub top_color: Rgb,
}

/// Generate two faces per key, row by row: a lateral quad on the key's +Z side
/// named `KeySide_{row}_{col}`, then an inset top quad named `KeyTop_{row}_{col}`.
pub fn generate_key_grid(grid: &KeyGrid) -> Vec<Face> {
    let half_w = grid.key_width * 0.5;
    let half_h = grid.key_height * 0.5;
    let half_d = grid.key_depth * 0.5;

    let mut faces = Vec::with_capacity(grid.rows as usize * grid.columns as usize * 2);

    for row in 0..grid.rows {
        for col in 0..grid.columns {
            let x = grid.start_x + col as f32 * grid.spacing;
            let z = grid.start_z - row as f32 * grid.spacing;

            faces.push(
                generate_rect(format!("KeySide_{row}_{col}"), half_w, half_h, grid.side_color)
                    .at(Point3::new(x, half_h, z + half_d)),
            );
            faces.push(
                generate_horizontal_rect(
                    format!("KeyTop_{row}_{col}"),
                    half_w * grid.top_inset,
                    half_d * grid.top_inset,
                    grid.top_color,
                )
                .at(Point3::new(x, grid.key_height, z)),
            );
        }
    }

    faces
}

/// Normal implied by the winding of a face's first triangle (not normalized).
pub fn winding_normal(face: &Face) -> Option<Point3> {
    let tri = face.indices.get(0..3)?;
    let v0 = *face.vertices.get(tri[0] as usize)?;
    let v1 = *face.vertices.get(tri[1] as usize)?;
    let v2 = *face.vertices.get(tri[2] as usize)?;
    let e1 = v1 - v0;
    let e2 = v2 - v0;
    Some(Point3::new(
        e1.y * e2.z - e1.z * e2.y,
        e1.z * e2.x - e1.x * e2.z,
        e1.x * e2.y - e1.y * e2.x,
    ))
}
