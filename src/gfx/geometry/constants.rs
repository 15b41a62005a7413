//! # Geometry Constants
//!
//! Reference dimensions, palettes and scene placement for the three device
//! kinds. The `*Spec` structs in [`super::devices`] default to these values.

use crate::gfx::scene::face::Rgb;
use crate::gfx::scene::point::Point3;

pub mod monitor {
    use super::Point3;

    pub const FRAME_WIDTH: f32 = 1.6;
    pub const FRAME_HEIGHT: f32 = 0.9;
    pub const FRAME_DEPTH: f32 = 0.05;

    pub const DISPLAY_WIDTH: f32 = 1.4;
    pub const DISPLAY_HEIGHT: f32 = 0.7;
    pub const DISPLAY_DEPTH: f32 = 0.02;

    pub const BASE_RADIUS: f32 = 0.6;
    pub const BASE_SEGMENTS: u32 = 8;

    pub const STAND_WIDTH: f32 = 0.2;
    pub const STAND_HEIGHT: f32 = 1.2;
    pub const STAND_DEPTH: f32 = 0.2;

    pub const SCREEN_CENTER: Point3 = Point3::new(0.0, 0.5, 0.0);
    pub const BASE_CENTER: Point3 = Point3::new(0.0, -1.0, 0.0);
    pub const STAND_CENTER: Point3 = Point3::new(0.0, -0.2, -0.2);
}

pub mod pc {
    use super::Point3;

    pub const CASE_WIDTH: f32 = 1.0;
    pub const CASE_HEIGHT: f32 = 2.0;
    pub const CASE_DEPTH: f32 = 1.6;

    pub const FAN_RADIUS: f32 = 0.3;
    pub const FAN_BLADES: u32 = 6;

    pub const LED_WIDTH: f32 = 0.4;
    pub const LED_HEIGHT: f32 = 0.08;
    pub const LED_DEPTH: f32 = 0.01;

    pub const PORT_WIDTH: f32 = 0.1;
    pub const PORT_HEIGHT: f32 = 0.06;
    pub const PORT_SPACING: f32 = 0.2;
    pub const PORT_COUNT: u32 = 2;

    pub const CASE_CENTER: Point3 = Point3::new(0.0, 0.0, 0.0);
    pub const LED_PANEL_CENTER: Point3 = Point3::new(0.0, 0.8, 0.9);
    pub const FAN_CENTER: Point3 = Point3::new(0.0, 1.2, 0.0);
    pub const PORTS_CENTER: Point3 = Point3::new(0.0, -0.8, 0.9);
}

pub mod keyboard {
    use super::Point3;

    pub const BASE_WIDTH: f32 = 4.0;
    pub const BASE_HEIGHT: f32 = 0.1;
    pub const BASE_DEPTH: f32 = 1.6;

    pub const KEY_WIDTH: f32 = 0.3;
    pub const KEY_HEIGHT: f32 = 0.08;
    pub const KEY_DEPTH: f32 = 0.3;
    /// Fraction of the key footprint covered by its top face
    pub const KEY_TOP_INSET: f32 = 0.9;

    pub const KEY_ROWS: u32 = 4;
    pub const KEY_COLUMNS: u32 = 10;
    pub const KEY_SPACING: f32 = 0.4;
    pub const KEYS_START_X: f32 = -1.8;
    pub const KEYS_START_Z: f32 = 0.6;

    pub const BASE_CENTER: Point3 = Point3::new(0.0, 0.0, 0.0);
    pub const KEYS_CENTER: Point3 = Point3::new(0.0, 0.15, 0.0);
}

/// Three variants per palette; a device built with variant `i` uses entry `i`
/// of every palette it draws from.
pub mod colors {
    use super::Rgb;

    pub const VARIANTS: usize = 3;

    pub const PC_CASES: [Rgb; VARIANTS] = [[0.2, 0.2, 0.25], [0.1, 0.1, 0.15], [0.25, 0.15, 0.15]];
    pub const PC_LEDS: [Rgb; VARIANTS] = [[0.1, 0.8, 0.1], [0.8, 0.1, 0.1], [0.1, 0.1, 0.8]];
    pub const MONITOR_FRAMES: [Rgb; VARIANTS] =
        [[0.1, 0.1, 0.1], [0.15, 0.12, 0.1], [0.12, 0.12, 0.15]];
    pub const MONITOR_DISPLAYS: [Rgb; VARIANTS] =
        [[0.1, 0.2, 0.4], [0.2, 0.1, 0.3], [0.1, 0.3, 0.2]];
    pub const KEYBOARD_BASES: [Rgb; VARIANTS] =
        [[0.2, 0.2, 0.2], [0.15, 0.15, 0.2], [0.2, 0.15, 0.15]];
    pub const KEY_SIDES: [Rgb; VARIANTS] = [[0.85, 0.85, 0.85], [0.8, 0.85, 0.9], [0.9, 0.85, 0.8]];
    pub const KEY_TOPS: [Rgb; VARIANTS] = [[0.95, 0.95, 0.95], [0.9, 0.95, 1.0], [1.0, 0.95, 0.9]];

    pub const FAN: Rgb = [0.3, 0.3, 0.3];
    pub const USB_PORT: Rgb = [0.0, 0.0, 0.0];
    pub const MONITOR_BASE: Rgb = [0.6, 0.6, 0.7];
    pub const MONITOR_STAND: Rgb = [0.3, 0.3, 0.3];

    /// Palette entry for `variant`, wrapping around past the last one.
    pub fn pick(palette: &[Rgb; VARIANTS], variant: usize) -> Rgb {
        palette[variant % VARIANTS]
    }
}

/// Placement of the default nine-object scene (three of each device kind in a row).
pub mod scene {
    pub const OBJECT_SPACING: f32 = 6.0;
    pub const INITIAL_OFFSET_X: f32 = -6.0;
    pub const OBJECTS_PER_KIND: usize = 3;

    pub const PC_Y: f32 = 0.0;
    pub const MONITOR_Y: f32 = 1.2;
    pub const KEYBOARD_Y: f32 = -0.05;

    pub const PC_Z: f32 = -3.0;
    pub const MONITOR_Z: f32 = -5.5;
    pub const KEYBOARD_Z: f32 = -0.5;

    pub const PC_BASE_ROTATION: f32 = 0.1;
    pub const MONITOR_BASE_ROTATION: f32 = 0.05;
    pub const KEYBOARD_BASE_ROTATION: f32 = 0.0;
}

pub mod camera {
    use super::Point3;

    pub const INITIAL_POSITION: Point3 = Point3::new(0.0, 6.0, 8.0);
    pub const INITIAL_TARGET: Point3 = Point3::new(0.0, 1.0, -2.0);
    pub const BASE_SPEED: f32 = 5.0;
    pub const FOV_DEGREES: f32 = 45.0;
    pub const Z_NEAR: f32 = 0.1;
    pub const Z_FAR: f32 = 100.0;
}

pub mod validation {
    pub const POSITION_TOLERANCE: f32 = 0.001;
    pub const MIN_VERTICES_PER_FACE: usize = 3;
    pub const MIN_FACES_PER_PART: usize = 1;
    pub const MIN_PARTS_PER_OBJECT: usize = 1;
}
