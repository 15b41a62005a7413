//! Desk scene
//!
//! Loads the nine device files, places each object on its row and offers
//! lookups and statistics over the whole set.

use std::path::Path;

use crate::config::config_path;
use crate::error::{Result, SceneError};
use crate::gfx::geometry::constants::scene as layout;

use super::object::{DeviceKind, Object, ObjectId};
use super::point::Point3;

/// Row placement shared by every object of one kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPlacement {
    pub y: f32,
    pub z: f32,
    /// Y rotation added per index in the row
    pub base_rotation: f32,
}

/// Where the loaded devices go: one row per kind along X.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub spacing: f32,
    pub initial_offset_x: f32,
    pub objects_per_kind: usize,
    pub pc: RowPlacement,
    pub monitor: RowPlacement,
    pub keyboard: RowPlacement,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            spacing: layout::OBJECT_SPACING,
            initial_offset_x: layout::INITIAL_OFFSET_X,
            objects_per_kind: layout::OBJECTS_PER_KIND,
            pc: RowPlacement {
                y: layout::PC_Y,
                z: layout::PC_Z,
                base_rotation: layout::PC_BASE_ROTATION,
            },
            monitor: RowPlacement {
                y: layout::MONITOR_Y,
                z: layout::MONITOR_Z,
                base_rotation: layout::MONITOR_BASE_ROTATION,
            },
            keyboard: RowPlacement {
                y: layout::KEYBOARD_Y,
                z: layout::KEYBOARD_Z,
                base_rotation: layout::KEYBOARD_BASE_ROTATION,
            },
        }
    }
}

impl SceneLayout {
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_initial_offset(mut self, x: f32) -> Self {
        self.initial_offset_x = x;
        self
    }

    pub fn with_objects_per_kind(mut self, count: usize) -> Self {
        self.objects_per_kind = count;
        self
    }

    pub fn with_row(mut self, kind: DeviceKind, row: RowPlacement) -> Self {
        match kind {
            DeviceKind::Pc => self.pc = row,
            DeviceKind::Monitor => self.monitor = row,
            DeviceKind::Keyboard => self.keyboard = row,
            DeviceKind::Generic => {}
        }
        self
    }

    /// Row for `kind`; generic objects sit at the origin row.
    pub fn row(&self, kind: DeviceKind) -> RowPlacement {
        match kind {
            DeviceKind::Pc => self.pc,
            DeviceKind::Monitor => self.monitor,
            DeviceKind::Keyboard => self.keyboard,
            DeviceKind::Generic => RowPlacement {
                y: 0.0,
                z: 0.0,
                base_rotation: 0.0,
            },
        }
    }

    /// Position and rotation of the `index`-th object of `kind`.
    pub fn placement(&self, kind: DeviceKind, index: usize) -> (Point3, Point3) {
        let row = self.row(kind);
        let x = self.initial_offset_x + index as f32 * self.spacing;
        (
            Point3::new(x, row.y, row.z),
            Point3::new(0.0, index as f32 * row.base_rotation, 0.0),
        )
    }
}

/// The set of objects drawn together.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<Object>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every configuration file the layout needs, in load order.
    pub fn required_files(dir: &Path, layout: &SceneLayout) -> Vec<(DeviceKind, usize, std::path::PathBuf)> {
        DeviceKind::DEVICES
            .into_iter()
            .flat_map(|kind| {
                (0..layout.objects_per_kind).map(move |i| (kind, i, config_path(dir, kind, i)))
            })
            .collect()
    }

    /// Loads, initializes and places every device of the layout.
    ///
    /// All files are checked up front; every missing one is logged and the
    /// first is returned as the error. Nothing is loaded in that case.
    pub fn load(dir: impl AsRef<Path>, layout: &SceneLayout) -> Result<Scene> {
        let dir = dir.as_ref();
        let required = Self::required_files(dir, layout);

        let missing: Vec<&std::path::PathBuf> = required
            .iter()
            .map(|(_, _, path)| path)
            .filter(|path| !path.is_file())
            .collect();
        if let Some(first) = missing.first() {
            for path in &missing {
                log::error!("Missing configuration file: {}", path.display());
            }
            return Err(SceneError::MissingConfigFile {
                path: first.to_path_buf(),
            });
        }
        log::info!("All {} configuration files are available", required.len());

        let mut scene = Scene::new();
        for (kind, index, path) in required {
            let mut object = Object::load(&path, kind)?;
            object.initialize();

            let (position, rotation) = layout.placement(kind, index);
            object.set_position(position);
            object.set_rotation(rotation);
            log::info!("{} {} placed at {}", kind, index, position);

            scene.add_object(object);
        }

        Ok(scene)
    }

    pub fn add_object(&mut self, object: Object) -> ObjectId {
        let id = object.id();
        self.objects.push(object);
        id
    }

    pub fn remove_object(&mut self, id: ObjectId) -> Option<Object> {
        let index = self.objects.iter().position(|o| o.id() == id)?;
        Some(self.objects.remove(index))
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [Object] {
        &mut self.objects
    }

    /// First object with that name, ignoring case
    pub fn object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|o| o.name.eq_ignore_ascii_case(name))
    }

    pub fn object_mut(&mut self, name: &str) -> Option<&mut Object> {
        self.objects
            .iter_mut()
            .find(|o| o.name.eq_ignore_ascii_case(name))
    }

    pub fn object_by_id(&self, id: ObjectId) -> Option<&Object> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn objects_of_kind(&self, kind: DeviceKind) -> impl Iterator<Item = &Object> {
        self.objects.iter().filter(move |o| o.kind == kind)
    }

    pub fn objects_of_kind_mut(&mut self, kind: DeviceKind) -> impl Iterator<Item = &mut Object> {
        self.objects.iter_mut().filter(move |o| o.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Flips every object to the opposite of the first one's visibility and
    /// returns the new state.
    pub fn toggle_visibility(&mut self) -> bool {
        let visible = !self.objects.first().is_some_and(|o| o.visible);
        for object in &mut self.objects {
            object.visible = visible;
        }
        visible
    }

    pub fn statistics(&self) -> String {
        let mut lines = vec![format!("Scene: {} objects", self.objects.len())];
        lines.extend(self.objects.iter().map(|o| format!("  {}", o.statistics())));
        lines.push(format!(
            "Total: {} faces, {} vertices, {} triangles",
            self.objects.iter().map(Object::face_count).sum::<usize>(),
            self.objects.iter().map(Object::vertex_count).sum::<usize>(),
            self.objects.iter().map(Object::triangle_count).sum::<usize>()
        ));
        lines.join("\n")
    }

    /// Top-down description of the rows in `layout`.
    pub fn layout_report(layout: &SceneLayout) -> String {
        let mut lines = vec!["Scene layout (top view, Y up, Z forward):".to_string()];
        for kind in [DeviceKind::Monitor, DeviceKind::Pc, DeviceKind::Keyboard] {
            let row = layout.row(kind);
            let xs: Vec<String> = (0..layout.objects_per_kind)
                .map(|i| format!("{:.1}", layout.placement(kind, i).0.x))
                .collect();
            lines.push(format!(
                "  {:<8} y={:<5} z={:<5} x=[{}]",
                kind.to_string(),
                row.y,
                row.z,
                xs.join(", ")
            ));
        }
        lines.join("\n")
    }
}
