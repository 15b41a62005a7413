//! Error types for scene loading, saving and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading, validating or persisting scene objects.
///
/// `MissingConfigFile` and `MalformedConfig` abort the load of the object they
/// concern. `StructuralViolation` and `DimensionViolation` are findings: the
/// geometry is still built and the caller decides whether to stop.
#[derive(Error, Debug)]
pub enum SceneError {
    /// A required configuration file does not exist.
    #[error("required configuration file not found: {}", path.display())]
    MissingConfigFile { path: PathBuf },

    /// The configuration could not be parsed into an object record.
    #[error("malformed configuration {}: {reason}", path.display())]
    MalformedConfig { path: PathBuf, reason: String },

    /// Counts below their minimum, out-of-range indices, or index lists that
    /// do not describe whole triangles.
    #[error("structural violation: {0}")]
    StructuralViolation(String),

    /// A sub-shape is not strictly contained in the shape it belongs to.
    #[error("dimension violation: {0}")]
    DimensionViolation(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SceneError {
    /// Whether this error stops the load of the object it concerns.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            SceneError::StructuralViolation(_) | SceneError::DimensionViolation(_)
        )
    }
}

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        let missing = SceneError::MissingConfigFile {
            path: PathBuf::from("Config/pc_0.json"),
        };
        let malformed = SceneError::MalformedConfig {
            path: PathBuf::from("x.json"),
            reason: "null document".to_string(),
        };
        assert!(missing.is_fatal());
        assert!(malformed.is_fatal());
        assert!(!SceneError::StructuralViolation("x".into()).is_fatal());
        assert!(!SceneError::DimensionViolation("x".into()).is_fatal());
    }

    #[test]
    fn test_messages_name_the_file() {
        let err = SceneError::MissingConfigFile {
            path: PathBuf::from("Config/monitor_2.json"),
        };
        assert!(err.to_string().contains("Config/monitor_2.json"));
    }
}
