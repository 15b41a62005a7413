//! # Object Configuration Files
//!
//! Objects are stored as pretty-printed JSON [`ObjectRecord`]s. Keys are
//! matched case-insensitively on read (`"Name"`, `"NAME"` and `"name"` are the
//! same field); saved files always use lowercase keys.

pub mod records;

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Result, SceneError};
use crate::gfx::geometry::constants::scene::OBJECTS_PER_KIND;
use crate::gfx::geometry::devices::{build_default, MonitorSpec};
use crate::gfx::scene::object::DeviceKind;

pub use records::{ColorRecord, FaceRecord, ObjectRecord, PartRecord, Vec3Record};

/// Directory the default scene is read from and generated into.
pub const DEFAULT_CONFIG_DIR: &str = "Config";

/// `{dir}/{kind}_{variant}.json`
pub fn config_path(dir: impl AsRef<Path>, kind: DeviceKind, variant: usize) -> PathBuf {
    dir.as_ref()
        .join(format!("{}_{}.json", kind.file_stem(), variant))
}

pub fn load_record(path: &Path) -> Result<ObjectRecord> {
    if !path.is_file() {
        return Err(SceneError::MissingConfigFile {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path)?;
    parse_record(path, &text)
}

/// Parses a record, folding every object key to lowercase first. `path` is
/// only used in error messages.
pub fn parse_record(path: &Path, text: &str) -> Result<ObjectRecord> {
    let malformed = |reason: String| SceneError::MalformedConfig {
        path: path.to_path_buf(),
        reason,
    };

    let value: Value = serde_json::from_str(text).map_err(|e| malformed(e.to_string()))?;
    if value.is_null() {
        return Err(malformed("document is null".to_string()));
    }

    serde_json::from_value(lowercase_keys(value)).map_err(|e| malformed(e.to_string()))
}

/// Recursively lowercases the keys of every JSON object in `value`.
pub fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lowercase(), lowercase_keys(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}

pub fn save_record(path: &Path, record: &ObjectRecord) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path, json)?;
    Ok(())
}

/// Writes the reference PC, monitor and keyboard in every palette variant.
pub fn generate_default_configs(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    MonitorSpec::default().validate()?;

    let mut written = Vec::with_capacity(DeviceKind::DEVICES.len() * OBJECTS_PER_KIND);
    for kind in DeviceKind::DEVICES {
        for variant in 0..OBJECTS_PER_KIND {
            let Some(object) = build_default(kind, variant) else {
                continue;
            };
            let path = config_path(dir, kind, variant);
            object.save(&path)?;
            written.push(path);
        }
    }

    log::info!("Generated {} configuration files in {}", written.len(), dir.display());
    Ok(written)
}
