//! Integrity and per-device structure checks.
//!
//! Every check returns findings instead of failing: a finding never stops an
//! object from being built, it is logged and handed back to the caller.

use crate::error::SceneError;
use crate::gfx::geometry::constants::validation::MIN_PARTS_PER_OBJECT;
use crate::gfx::geometry::devices::{names, KeyboardSpec, MonitorSpec, PcSpec};

use super::object::{DeviceKind, Object};

/// Generic integrity of the whole hierarchy: names, minimum counts, indices.
pub fn check_integrity(object: &Object) -> Vec<SceneError> {
    let mut violations = Vec::new();

    if object.name.is_empty() {
        violations.push(SceneError::StructuralViolation(
            "object has no name".to_string(),
        ));
    }

    if object.parts.len() < MIN_PARTS_PER_OBJECT {
        violations.push(SceneError::StructuralViolation(format!(
            "object '{}' has {} parts, at least {} required",
            object.name,
            object.parts.len(),
            MIN_PARTS_PER_OBJECT
        )));
    }

    for part in &object.parts {
        violations.extend(part.validate());
    }

    violations
}

/// Checks specific to the object's [`DeviceKind`], against the reference specs.
pub fn check_device_structure(object: &Object) -> Vec<SceneError> {
    match object.kind {
        DeviceKind::Pc => check_pc(object, &PcSpec::default()),
        DeviceKind::Monitor => check_monitor(object, &MonitorSpec::default()),
        DeviceKind::Keyboard => check_keyboard(object, &KeyboardSpec::default()),
        DeviceKind::Generic => Vec::new(),
    }
}

pub fn validate_object(object: &Object) -> Vec<SceneError> {
    let mut violations = check_integrity(object);
    violations.extend(check_device_structure(object));
    violations
}

/// Logs one warning per finding.
pub fn report(object_name: &str, violations: &[SceneError]) {
    if violations.is_empty() {
        log::debug!("Object '{}' passed validation", object_name);
        return;
    }
    log::warn!("Object '{}' has {} problem(s):", object_name, violations.len());
    for violation in violations {
        log::warn!("  - {}", violation);
    }
}

fn require_parts(object: &Object, required: &[&str], violations: &mut Vec<SceneError>) {
    for name in required {
        if object.part(name).is_none() {
            violations.push(SceneError::StructuralViolation(format!(
                "{} '{}' is missing required part '{}'",
                object.kind, object.name, name
            )));
        }
    }
}

pub fn check_pc(object: &Object, spec: &PcSpec) -> Vec<SceneError> {
    let mut violations = Vec::new();
    require_parts(
        object,
        &[names::PC_CASE, names::PC_LED_PANEL, names::PC_FAN, names::PC_PORTS],
        &mut violations,
    );

    let blades = object
        .part(names::PC_FAN)
        .and_then(|fan| fan.face(names::PC_FAN_BLADES));
    if let Some(blades) = blades {
        let expected = spec.fan_blades as usize + 1;
        if blades.vertex_count() != expected {
            violations.push(SceneError::StructuralViolation(format!(
                "PC '{}': fan has {} vertices, expected {}",
                object.name,
                blades.vertex_count(),
                expected
            )));
        }
    }

    violations
}

pub fn check_monitor(object: &Object, spec: &MonitorSpec) -> Vec<SceneError> {
    let mut violations = Vec::new();
    require_parts(
        object,
        &[names::MONITOR_SCREEN, names::MONITOR_BASE, names::MONITOR_STAND],
        &mut violations,
    );

    if let Some(screen) = object.part(names::MONITOR_SCREEN) {
        let frame = screen.face(names::MONITOR_FRAME).map(|f| f.half_extents());
        let display = screen.face(names::MONITOR_DISPLAY).map(|f| f.half_extents());
        if let (Some(frame), Some(display)) = (frame, display) {
            if display.x >= frame.x || display.y >= frame.y {
                violations.push(SceneError::DimensionViolation(format!(
                    "Monitor '{}': display half-extents ({:.3}, {:.3}) must be smaller than frame ({:.3}, {:.3})",
                    object.name, display.x, display.y, frame.x, frame.y
                )));
            }
        }
    }

    let base = object
        .part(names::MONITOR_BASE)
        .and_then(|base| base.face(names::MONITOR_BASE_FACE));
    if let Some(base) = base {
        let expected = spec.base_segments as usize + 1;
        if base.vertex_count() != expected {
            violations.push(SceneError::StructuralViolation(format!(
                "Monitor '{}': base has {} vertices, expected {}",
                object.name,
                base.vertex_count(),
                expected
            )));
        }
    }

    violations
}

pub fn check_keyboard(object: &Object, spec: &KeyboardSpec) -> Vec<SceneError> {
    let mut violations = Vec::new();
    require_parts(
        object,
        &[names::KEYBOARD_BASE, names::KEYBOARD_KEYS],
        &mut violations,
    );

    if let Some(keys) = object.part(names::KEYBOARD_KEYS) {
        let expected = spec.key_count();
        let count = |prefix: &str| {
            keys.faces
                .iter()
                .filter(|face| face.name.starts_with(prefix))
                .count()
        };

        for (label, prefix) in [("side", names::KEY_SIDE_PREFIX), ("top", names::KEY_TOP_PREFIX)] {
            let found = count(prefix);
            if found != expected {
                violations.push(SceneError::StructuralViolation(format!(
                    "Keyboard '{}': {} key {} faces, expected {}",
                    object.name, found, label, expected
                )));
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::devices::{build_keyboard, build_monitor, build_pc};
    use crate::gfx::scene::part::Part;

    #[test]
    fn test_missing_parts_are_reported() {
        let mut pc = build_pc(&PcSpec::default(), 0);
        pc.parts.retain(|p| p.name != names::PC_PORTS);
        let violations = check_device_structure(&pc);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].to_string().contains("UsbPorts"));
    }

    #[test]
    fn test_fan_blade_count_mismatch() {
        let pc = build_pc(&PcSpec::default().with_fan(0.3, 4), 0);
        let violations = check_pc(&pc, &PcSpec::default());
        assert_eq!(violations.len(), 1);
        assert!(!violations[0].is_fatal());
    }

    #[test]
    fn test_oversized_display_is_a_dimension_violation() {
        let spec = MonitorSpec::default().with_display(1.7, 0.7, 0.02);
        let monitor = build_monitor(&spec, 0);
        let violations = check_monitor(&monitor, &MonitorSpec::default());
        assert_eq!(violations.len(), 1);
        assert!(matches!(violations[0], SceneError::DimensionViolation(_)));
    }

    #[test]
    fn test_keyboard_key_count_mismatch() {
        let keyboard = build_keyboard(&KeyboardSpec::default().with_grid(3, 10), 0);
        let violations = check_keyboard(&keyboard, &KeyboardSpec::default());
        // sides and tops both short
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_generic_objects_only_get_integrity_checks() {
        let object = Object::new("", DeviceKind::Generic).with_parts([Part::new("empty")]);
        let violations = validate_object(&object);
        // unnamed object, part without faces
        assert_eq!(violations.len(), 2);
        assert!(check_device_structure(&object).is_empty());
    }

    #[test]
    fn test_object_without_parts() {
        let object = Object::new("bare", DeviceKind::Generic);
        assert_eq!(check_integrity(&object).len(), 1);
    }
}
