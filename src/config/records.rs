//! On-disk object records.
//!
//! The records mirror the Object/Part/Face hierarchy one to one. Vertex
//! coordinates are stored face-local, exactly as the faces hold them. Every
//! field is optional on read and falls back to its default.

use serde::{Deserialize, Serialize};

use crate::gfx::scene::face::{Face, Rgb};
use crate::gfx::scene::object::Object;
use crate::gfx::scene::part::Part;
use crate::gfx::scene::point::Point3;

/// 3D coordinate triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vec3Record {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3Record {
    pub const ONE: Vec3Record = Vec3Record { x: 1.0, y: 1.0, z: 1.0 };
}

impl From<Point3> for Vec3Record {
    fn from(p: Point3) -> Self {
        Vec3Record { x: p.x, y: p.y, z: p.z }
    }
}

impl From<Vec3Record> for Point3 {
    fn from(r: Vec3Record) -> Self {
        Point3::new(r.x, r.y, r.z)
    }
}

/// RGB color; `x`/`y`/`z` are accepted as channel names too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorRecord {
    #[serde(alias = "x")]
    pub r: f32,
    #[serde(alias = "y")]
    pub g: f32,
    #[serde(alias = "z")]
    pub b: f32,
}

impl Default for ColorRecord {
    fn default() -> Self {
        ColorRecord { r: 1.0, g: 1.0, b: 1.0 }
    }
}

impl From<Rgb> for ColorRecord {
    fn from([r, g, b]: Rgb) -> Self {
        ColorRecord { r, g, b }
    }
}

impl From<ColorRecord> for Rgb {
    fn from(c: ColorRecord) -> Self {
        [c.r, c.g, c.b]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceRecord {
    pub name: String,
    pub centroid: Vec3Record,
    pub color: ColorRecord,
    pub vertices: Vec<Vec3Record>,
    pub indices: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartRecord {
    pub name: String,
    pub centroid: Vec3Record,
    pub rotation: Vec3Record,
    pub scale: Vec3Record,
    pub visible: bool,
    pub faces: Vec<FaceRecord>,
}

impl Default for PartRecord {
    fn default() -> Self {
        PartRecord {
            name: String::new(),
            centroid: Vec3Record::default(),
            rotation: Vec3Record::default(),
            scale: Vec3Record::ONE,
            visible: true,
            faces: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectRecord {
    pub name: String,
    pub centroid: Vec3Record,
    pub parts: Vec<PartRecord>,
}

impl From<&Face> for FaceRecord {
    fn from(face: &Face) -> Self {
        FaceRecord {
            name: face.name.clone(),
            centroid: face.centroid.into(),
            color: face.color.into(),
            vertices: face.vertices.iter().copied().map(Vec3Record::from).collect(),
            indices: face.indices.clone(),
        }
    }
}

impl From<&FaceRecord> for Face {
    fn from(record: &FaceRecord) -> Self {
        Face {
            name: record.name.clone(),
            vertices: record.vertices.iter().copied().map(Point3::from).collect(),
            indices: record.indices.clone(),
            color: record.color.into(),
            centroid: record.centroid.into(),
        }
    }
}

impl From<&Part> for PartRecord {
    fn from(part: &Part) -> Self {
        PartRecord {
            name: part.name.clone(),
            centroid: part.centroid.into(),
            rotation: part.rotation.into(),
            scale: part.scale.into(),
            visible: part.visible,
            faces: part.faces.iter().map(FaceRecord::from).collect(),
        }
    }
}

impl From<&PartRecord> for Part {
    fn from(record: &PartRecord) -> Self {
        Part {
            name: record.name.clone(),
            faces: record.faces.iter().map(Face::from).collect(),
            centroid: record.centroid.into(),
            rotation: record.rotation.into(),
            scale: record.scale.into(),
            visible: record.visible,
        }
    }
}

impl From<&Object> for ObjectRecord {
    fn from(object: &Object) -> Self {
        ObjectRecord {
            name: object.name.clone(),
            centroid: object.centroid.into(),
            parts: object.parts.iter().map(PartRecord::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let part: PartRecord = serde_json::from_str(r#"{"name": "p", "faces": [{}]}"#).unwrap();
        assert_eq!(part.scale, Vec3Record::ONE);
        assert!(part.visible);
        assert_eq!(part.faces[0].color, ColorRecord::default());
        assert!(part.faces[0].vertices.is_empty());
    }

    #[test]
    fn test_color_accepts_xyz_channels() {
        let color: ColorRecord = serde_json::from_str(r#"{"x": 0.1, "y": 0.2, "z": 0.3}"#).unwrap();
        assert_eq!(Rgb::from(color), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_face_conversion_keeps_local_vertices() {
        let mut face = Face::with_color("f", [0.2, 0.4, 0.6]).at(Point3::new(0.0, 1.0, 0.0));
        face.add_triangle(Point3::ZERO, Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 0.0, 1.0));

        let record = FaceRecord::from(&face);
        assert_eq!(record.vertices[1], Vec3Record { x: 1.0, y: 0.0, z: 0.0 });
        assert_eq!(record.centroid, Vec3Record { x: 0.0, y: 1.0, z: 0.0 });
        assert_eq!(Face::from(&record), face);
    }
}
