//! # Objects
//!
//! An [`Object`] owns its parts outright and carries two kinds of state:
//! its shape (parts, centroid) which is persisted, and its placement in the
//! scene (position, rotation, scale) which is not. Device kinds are plain
//! data on the object rather than separate types.

use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use cgmath::{Matrix4, Rad, Vector3};

use crate::config::{self, records::ObjectRecord};
use crate::error::{Result, SceneError};

use super::part::{DrawRange, Part, PartBuffers};
use super::point::Point3;
use super::validation;

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique object identity, used to key GPU resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    fn next() -> Self {
        ObjectId(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which structural checks apply to an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Pc,
    Monitor,
    Keyboard,
    Generic,
}

impl DeviceKind {
    /// The kinds that make up the default scene, in load order.
    pub const DEVICES: [DeviceKind; 3] = [DeviceKind::Pc, DeviceKind::Monitor, DeviceKind::Keyboard];

    /// Configuration file stem, e.g. `monitor` in `monitor_0.json`
    pub fn file_stem(self) -> &'static str {
        match self {
            DeviceKind::Pc => "pc",
            DeviceKind::Monitor => "monitor",
            DeviceKind::Keyboard => "keyboard",
            DeviceKind::Generic => "object",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeviceKind::Pc => "PC",
            DeviceKind::Monitor => "Monitor",
            DeviceKind::Keyboard => "Keyboard",
            DeviceKind::Generic => "Object",
        };
        f.write_str(label)
    }
}

/// What a rendering backend needs from a drawable object, per part.
pub trait Renderable {
    fn part_count(&self) -> usize;
    /// Flat positions, 3 floats per vertex. Empty until the object is initialized.
    fn vertex_buffer(&self, part: usize) -> &[f32];
    fn index_buffer(&self, part: usize) -> &[u32];
    fn draw_ranges(&self, part: usize) -> Vec<DrawRange>;
    fn is_part_visible(&self, part: usize) -> bool;
    /// Model matrix for drawing `part`: object placement times part transform
    fn part_matrix(&self, part: usize) -> Matrix4<f32>;
}

#[derive(Debug)]
pub struct Object {
    id: ObjectId,
    pub name: String,
    pub kind: DeviceKind,
    pub parts: Vec<Part>,
    pub centroid: Point3,
    pub position: Point3,
    /// Radians per axis
    pub rotation: Point3,
    pub scale: Point3,
    pub visible: bool,
    buffers: Vec<PartBuffers>,
}

impl Object {
    pub fn new(name: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            id: ObjectId::next(),
            name: name.into(),
            kind,
            parts: Vec::new(),
            centroid: Point3::ZERO,
            position: Point3::ZERO,
            rotation: Point3::ZERO,
            scale: Point3::ONE,
            visible: true,
            buffers: Vec::new(),
        }
    }

    pub fn with_parts(mut self, parts: impl IntoIterator<Item = Part>) -> Self {
        self.parts.extend(parts);
        self
    }

    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Loads an object record from `path` and reports, without failing, any
    /// structural findings for `kind`.
    pub fn load(path: impl AsRef<Path>, kind: DeviceKind) -> Result<Object> {
        let path = path.as_ref();
        let record = config::load_record(path)?;
        let object = Object::from_record(kind, &record);

        validation::report(&object.name, &object.validate());
        log::info!(
            "Loaded {} '{}' from {} with {} parts",
            kind,
            object.name,
            path.display(),
            object.parts.len()
        );
        Ok(object)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        config::save_record(path, &self.to_record())?;
        log::info!("Saved '{}' to {}", self.name, path.display());
        Ok(())
    }

    /// Shape-only snapshot; scene placement is left out.
    pub fn to_record(&self) -> ObjectRecord {
        ObjectRecord::from(self)
    }

    pub fn from_record(kind: DeviceKind, record: &ObjectRecord) -> Object {
        Object {
            centroid: record.centroid.into(),
            parts: record.parts.iter().map(Part::from).collect(),
            ..Object::new(record.name.clone(), kind)
        }
    }

    /// Flattens every part into its upload buffers.
    pub fn initialize(&mut self) {
        self.rebuild_buffers();
        log::info!(
            "Initialized '{}': {} parts, {} vertices",
            self.name,
            self.parts.len(),
            self.buffers.iter().map(PartBuffers::vertex_count).sum::<usize>()
        );
    }

    /// Buffers are not refreshed automatically; call this after editing vertices,
    /// face centroids or part centroids.
    pub fn rebuild_buffers(&mut self) {
        self.buffers = self
            .parts
            .iter()
            .map(|part| part.build_buffers(self.centroid))
            .collect();
    }

    pub fn is_initialized(&self) -> bool {
        !self.buffers.is_empty() || self.parts.is_empty()
    }

    pub fn buffers(&self) -> &[PartBuffers] {
        &self.buffers
    }

    /// Case-insensitive part lookup
    pub fn part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn part_mut(&mut self, name: &str) -> Option<&mut Part> {
        self.parts
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns false when no part has that name.
    pub fn rotate_part(&mut self, name: &str, delta: Point3) -> bool {
        self.part_mut(name).map(|part| part.rotate(delta)).is_some()
    }

    pub fn scale_part(&mut self, name: &str, factors: Point3) -> bool {
        self.part_mut(name).map(|part| part.scale_by(factors)).is_some()
    }

    pub fn set_part_visible(&mut self, name: &str, visible: bool) -> bool {
        self.part_mut(name)
            .map(|part| part.set_visible(visible))
            .is_some()
    }

    pub fn set_position(&mut self, position: Point3) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: Point3) {
        self.rotation = rotation;
    }

    pub fn set_scale(&mut self, scale: Point3) {
        self.scale = scale;
    }

    pub fn translate(&mut self, delta: Point3) {
        self.position += delta;
    }

    pub fn rotate(&mut self, delta: Point3) {
        self.rotation += delta;
    }

    /// Placement matrix: scale, rotate about X, Y, Z, then translate.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(Vector3::from(self.position))
            * Matrix4::from_angle_z(Rad(self.rotation.z))
            * Matrix4::from_angle_y(Rad(self.rotation.y))
            * Matrix4::from_angle_x(Rad(self.rotation.x))
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(Part::vertex_count).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(Part::triangle_count).sum()
    }

    pub fn face_count(&self) -> usize {
        self.parts.iter().map(|p| p.faces.len()).sum()
    }

    /// Every integrity and device-structure finding.
    pub fn validate(&self) -> Vec<SceneError> {
        validation::validate_object(self)
    }

    pub fn statistics(&self) -> String {
        format!(
            "{}: {} parts, {} faces, {} vertices, {} triangles",
            self.name,
            self.parts.len(),
            self.face_count(),
            self.vertex_count(),
            self.triangle_count()
        )
    }
}

impl Renderable for Object {
    fn part_count(&self) -> usize {
        self.parts.len()
    }

    fn vertex_buffer(&self, part: usize) -> &[f32] {
        self.buffers
            .get(part)
            .map(|b| b.vertices.as_slice())
            .unwrap_or(&[])
    }

    fn index_buffer(&self, part: usize) -> &[u32] {
        self.buffers
            .get(part)
            .map(|b| b.indices.as_slice())
            .unwrap_or(&[])
    }

    fn draw_ranges(&self, part: usize) -> Vec<DrawRange> {
        self.parts
            .get(part)
            .map(Part::draw_ranges)
            .unwrap_or_default()
    }

    fn is_part_visible(&self, part: usize) -> bool {
        self.visible && self.parts.get(part).is_some_and(|p| p.visible)
    }

    fn part_matrix(&self, part: usize) -> Matrix4<f32> {
        match self.parts.get(part) {
            Some(p) => self.model_matrix() * p.model_matrix(),
            None => self.model_matrix(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::devices::{build_keyboard, build_monitor, build_pc, KeyboardSpec, MonitorSpec, PcSpec};
    use approx::assert_abs_diff_eq;
    use cgmath::{SquareMatrix, Vector4};
    use std::f32::consts::FRAC_PI_2;

    fn temp_file(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("deskscene-object-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Object::new("a", DeviceKind::Generic);
        let b = Object::new("a", DeviceKind::Generic);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_initialize_builds_one_buffer_per_part() {
        let mut pc = build_pc(&PcSpec::default(), 0);
        assert!(pc.vertex_buffer(0).is_empty());
        pc.initialize();
        assert_eq!(pc.buffers().len(), pc.part_count());
        for i in 0..pc.part_count() {
            let vertices = pc.vertex_buffer(i).len() / 3;
            let max_index = pc.index_buffer(i).iter().copied().max().unwrap_or(0);
            assert!((max_index as usize) < vertices);
            let drawn: u32 = pc.draw_ranges(i).iter().map(|r| r.index_count).sum();
            assert_eq!(drawn as usize, pc.index_buffer(i).len());
        }
        assert!(pc.vertex_buffer(99).is_empty());
    }

    #[test]
    fn test_part_transform_does_not_touch_buffers() {
        let mut monitor = build_monitor(&MonitorSpec::default(), 0);
        monitor.initialize();
        let before = monitor.vertex_buffer(0).to_vec();
        assert!(monitor.rotate_part("screen", Point3::new(0.1, 0.0, 0.0)));
        assert_eq!(monitor.vertex_buffer(0), before.as_slice());
        assert!(!monitor.rotate_part("missing", Point3::ONE));
    }

    #[test]
    fn test_part_visibility_hides_draws() {
        let mut keyboard = build_keyboard(&KeyboardSpec::default(), 0);
        assert!(keyboard.set_part_visible("KEYS", false));
        assert!(keyboard.is_part_visible(0));
        assert!(!keyboard.is_part_visible(1));
        keyboard.visible = false;
        assert!(!keyboard.is_part_visible(0));
    }

    #[test]
    fn test_model_matrix_order() {
        let mut object = Object::new("o", DeviceKind::Generic);
        assert_eq!(object.model_matrix(), Matrix4::identity());

        object.set_scale(Point3::new(2.0, 1.0, 1.0));
        object.set_rotation(Point3::new(0.0, FRAC_PI_2, 0.0));
        object.set_position(Point3::new(0.0, 0.0, -5.0));
        // (1,0,0) -> scale (2,0,0) -> rotate Y (0,0,-2) -> translate (0,0,-7)
        let v = object.model_matrix() * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 0.001);
        assert_abs_diff_eq!(v.z, -7.0, epsilon = 0.001);

        object.translate(Point3::new(1.0, 0.0, 0.0));
        object.rotate(Point3::new(0.0, 0.5, 0.0));
        assert_eq!(object.position, Point3::new(1.0, 0.0, -5.0));
        assert_abs_diff_eq!(object.rotation.y, FRAC_PI_2 + 0.5, epsilon = 0.001);
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = temp_file("monitor_round_trip.json");
        let mut original = build_monitor(&MonitorSpec::default(), 2);
        original.centroid = Point3::new(0.5, 0.0, -0.25);
        original.rotate_part("Screen", Point3::new(0.03, 0.0, 0.0));
        original.set_part_visible("Stand", false);
        original.save(&path).unwrap();

        let mut loaded = Object::load(&path, DeviceKind::Monitor).unwrap();
        assert_eq!(loaded.name, original.name);
        assert!(loaded.centroid.approx_eq(original.centroid, 0.001));
        assert_eq!(loaded.parts.len(), original.parts.len());

        for (a, b) in original.parts.iter().zip(&loaded.parts) {
            assert_eq!(a.name, b.name);
            assert!(a.centroid.approx_eq(b.centroid, 0.001));
            assert!(a.rotation.approx_eq(b.rotation, 0.001));
            assert!(a.scale.approx_eq(b.scale, 0.001));
            assert_eq!(a.visible, b.visible);
            for (fa, fb) in a.faces.iter().zip(&b.faces) {
                assert_eq!(fa.name, fb.name);
                assert_eq!(fa.indices, fb.indices);
                assert!(fa.centroid.approx_eq(fb.centroid, 0.001));
                for (va, vb) in fa.vertices.iter().zip(&fb.vertices) {
                    assert!(va.approx_eq(*vb, 0.001));
                }
                for c in 0..3 {
                    assert_abs_diff_eq!(fa.color[c], fb.color[c], epsilon = 0.001);
                }
            }
        }

        original.initialize();
        loaded.initialize();
        for i in 0..original.part_count() {
            assert_eq!(original.index_buffer(i), loaded.index_buffer(i));
            for (a, b) in original.vertex_buffer(i).iter().zip(loaded.vertex_buffer(i)) {
                assert_abs_diff_eq!(*a, *b, epsilon = 0.001);
            }
        }

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_keeps_malformed_geometry() {
        let path = temp_file("malformed.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let text = r#"{
            "Name": "Crate",
            "Parts": [{
                "Name": "Body",
                "Faces": [
                    {"Name": "ok", "Vertices": [{"x": 0}, {"x": 1}, {"z": 1}], "Indices": [0, 1, 2]},
                    {"Name": "wild", "Vertices": [{"x": 0}, {"x": 1}, {"z": 1}], "Indices": [0, 1, 4294967295]},
                    {"Name": "thin", "Vertices": [{"x": 0}, {"x": 1}], "Indices": [0, 1]}
                ]
            }]
        }"#;
        std::fs::write(&path, text).unwrap();

        let mut object = Object::load(&path, DeviceKind::Generic).unwrap();
        let violations = object.validate();
        assert_eq!(violations.len(), 3);
        assert!(violations
            .iter()
            .all(|v| matches!(v, SceneError::StructuralViolation(_))));
        assert!(violations.iter().all(|v| !v.is_fatal()));

        object.initialize();
        let indices = object.index_buffer(0);
        assert_eq!(indices.len(), 8);
        assert_eq!(&indices[..3], &[0, 1, 2]);
        assert_eq!(&indices[3..6], &[3, 4, u32::MAX]);
        assert_eq!(&indices[6..], &[6, 7]);
        assert_eq!(object.vertex_buffer(0).len(), 8 * 3);

        let ranges = object.draw_ranges(0);
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[2].index_offset, 6);
        assert_eq!(ranges[2].index_count, 2);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let err = Object::load(temp_file("does_not_exist.json"), DeviceKind::Pc).unwrap_err();
        assert!(matches!(err, SceneError::MissingConfigFile { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_statistics() {
        let keyboard = build_keyboard(&KeyboardSpec::default().with_grid(1, 2), 0);
        // base: 6 quads; keys: 4 quads
        assert_eq!(
            keyboard.statistics(),
            "Keyboard_0: 2 parts, 10 faces, 40 vertices, 20 triangles"
        );
    }
}
