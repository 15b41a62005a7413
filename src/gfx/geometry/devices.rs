//! # Device Builders
//!
//! Assemble complete PC, monitor and keyboard [`Object`]s out of the
//! primitive generators. Dimensions come from a `*Spec` struct (defaulting to
//! the reference constants); colors come from a palette variant.

use crate::error::{Result, SceneError};
use crate::gfx::scene::face::Face;
use crate::gfx::scene::object::{DeviceKind, Object};
use crate::gfx::scene::part::Part;
use crate::gfx::scene::point::Point3;

use super::constants::{colors, keyboard, monitor, pc};
use super::primitives::{generate_box_faces, generate_fan, generate_key_grid, generate_rect, KeyGrid};

/// Part and face names shared by the builders and the structural checks
pub mod names {
    pub const PC_CASE: &str = "Case";
    pub const PC_LED_PANEL: &str = "LedPanel";
    pub const PC_LED: &str = "LED";
    pub const PC_FAN: &str = "TopFan";
    pub const PC_FAN_BLADES: &str = "Blades";
    pub const PC_PORTS: &str = "UsbPorts";

    pub const MONITOR_SCREEN: &str = "Screen";
    pub const MONITOR_FRAME: &str = "Frame";
    pub const MONITOR_FRAME_BACK: &str = "FrameBack";
    pub const MONITOR_DISPLAY: &str = "Display";
    pub const MONITOR_BASE: &str = "Base";
    pub const MONITOR_BASE_FACE: &str = "CircularBase";
    pub const MONITOR_STAND: &str = "Stand";

    pub const KEYBOARD_BASE: &str = "Base";
    pub const KEYBOARD_KEYS: &str = "Keys";
    pub const KEY_SIDE_PREFIX: &str = "KeySide_";
    pub const KEY_TOP_PREFIX: &str = "KeyTop_";
}

#[derive(Debug, Clone, PartialEq)]
pub struct PcSpec {
    pub case_width: f32,
    pub case_height: f32,
    pub case_depth: f32,
    pub fan_radius: f32,
    pub fan_blades: u32,
    pub led_width: f32,
    pub led_height: f32,
    pub led_depth: f32,
    pub port_width: f32,
    pub port_height: f32,
    pub port_spacing: f32,
    pub port_count: u32,
    pub case_center: Point3,
    pub led_panel_center: Point3,
    pub fan_center: Point3,
    pub ports_center: Point3,
}

impl Default for PcSpec {
    fn default() -> Self {
        Self {
            case_width: pc::CASE_WIDTH,
            case_height: pc::CASE_HEIGHT,
            case_depth: pc::CASE_DEPTH,
            fan_radius: pc::FAN_RADIUS,
            fan_blades: pc::FAN_BLADES,
            led_width: pc::LED_WIDTH,
            led_height: pc::LED_HEIGHT,
            led_depth: pc::LED_DEPTH,
            port_width: pc::PORT_WIDTH,
            port_height: pc::PORT_HEIGHT,
            port_spacing: pc::PORT_SPACING,
            port_count: pc::PORT_COUNT,
            case_center: pc::CASE_CENTER,
            led_panel_center: pc::LED_PANEL_CENTER,
            fan_center: pc::FAN_CENTER,
            ports_center: pc::PORTS_CENTER,
        }
    }
}

impl PcSpec {
    pub fn with_case(mut self, width: f32, height: f32, depth: f32) -> Self {
        self.case_width = width;
        self.case_height = height;
        self.case_depth = depth;
        self
    }

    pub fn with_fan(mut self, radius: f32, blades: u32) -> Self {
        self.fan_radius = radius;
        self.fan_blades = blades;
        self
    }

    pub fn with_ports(mut self, count: u32, spacing: f32) -> Self {
        self.port_count = count;
        self.port_spacing = spacing;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonitorSpec {
    pub frame_width: f32,
    pub frame_height: f32,
    pub frame_depth: f32,
    pub display_width: f32,
    pub display_height: f32,
    pub display_depth: f32,
    pub base_radius: f32,
    pub base_segments: u32,
    pub stand_width: f32,
    pub stand_height: f32,
    pub stand_depth: f32,
    pub screen_center: Point3,
    pub base_center: Point3,
    pub stand_center: Point3,
}

impl Default for MonitorSpec {
    fn default() -> Self {
        Self {
            frame_width: monitor::FRAME_WIDTH,
            frame_height: monitor::FRAME_HEIGHT,
            frame_depth: monitor::FRAME_DEPTH,
            display_width: monitor::DISPLAY_WIDTH,
            display_height: monitor::DISPLAY_HEIGHT,
            display_depth: monitor::DISPLAY_DEPTH,
            base_radius: monitor::BASE_RADIUS,
            base_segments: monitor::BASE_SEGMENTS,
            stand_width: monitor::STAND_WIDTH,
            stand_height: monitor::STAND_HEIGHT,
            stand_depth: monitor::STAND_DEPTH,
            screen_center: monitor::SCREEN_CENTER,
            base_center: monitor::BASE_CENTER,
            stand_center: monitor::STAND_CENTER,
        }
    }
}

impl MonitorSpec {
    pub fn with_frame(mut self, width: f32, height: f32, depth: f32) -> Self {
        self.frame_width = width;
        self.frame_height = height;
        self.frame_depth = depth;
        self
    }

    pub fn with_display(mut self, width: f32, height: f32, depth: f32) -> Self {
        self.display_width = width;
        self.display_height = height;
        self.display_depth = depth;
        self
    }

    pub fn with_base(mut self, radius: f32, segments: u32) -> Self {
        self.base_radius = radius;
        self.base_segments = segments;
        self
    }

    /// The display must sit strictly inside the frame on X and Y, and must not
    /// be deeper than it.
    pub fn validate(&self) -> Result<()> {
        if self.display_width >= self.frame_width || self.display_height >= self.frame_height {
            return Err(SceneError::DimensionViolation(format!(
                "display {}x{} does not fit strictly inside frame {}x{}",
                self.display_width, self.display_height, self.frame_width, self.frame_height
            )));
        }
        if self.display_depth > self.frame_depth {
            return Err(SceneError::DimensionViolation(format!(
                "display depth {} exceeds frame depth {}",
                self.display_depth, self.frame_depth
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardSpec {
    pub base_width: f32,
    pub base_height: f32,
    pub base_depth: f32,
    pub key_width: f32,
    pub key_height: f32,
    pub key_depth: f32,
    pub key_top_inset: f32,
    pub rows: u32,
    pub columns: u32,
    pub key_spacing: f32,
    pub keys_start_x: f32,
    pub keys_start_z: f32,
    pub base_center: Point3,
    pub keys_center: Point3,
}

impl Default for KeyboardSpec {
    fn default() -> Self {
        Self {
            base_width: keyboard::BASE_WIDTH,
            base_height: keyboard::BASE_HEIGHT,
            base_depth: keyboard::BASE_DEPTH,
            key_width: keyboard::KEY_WIDTH,
            key_height: keyboard::KEY_HEIGHT,
            key_depth: keyboard::KEY_DEPTH,
            key_top_inset: keyboard::KEY_TOP_INSET,
            rows: keyboard::KEY_ROWS,
            columns: keyboard::KEY_COLUMNS,
            key_spacing: keyboard::KEY_SPACING,
            keys_start_x: keyboard::KEYS_START_X,
            keys_start_z: keyboard::KEYS_START_Z,
            base_center: keyboard::BASE_CENTER,
            keys_center: keyboard::KEYS_CENTER,
        }
    }
}

impl KeyboardSpec {
    pub fn with_grid(mut self, rows: u32, columns: u32) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn with_key_size(mut self, width: f32, height: f32, depth: f32) -> Self {
        self.key_width = width;
        self.key_height = height;
        self.key_depth = depth;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.key_spacing = spacing;
        self
    }

    pub fn key_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

/// Fan in the XZ plane wound to face +Y
fn upward_fan(name: &str, radius: f32, segments: u32, color: [f32; 3]) -> Face {
    let mut fan = generate_fan(name, radius, segments, color);
    fan.flip_winding();
    fan
}

pub fn build_pc(spec: &PcSpec, variant: usize) -> Object {
    let case = Part::with_centroid(names::PC_CASE, spec.case_center).with_faces(generate_box_faces(
        "",
        Point3::new(spec.case_width * 0.5, spec.case_height * 0.5, spec.case_depth * 0.5),
        colors::pick(&colors::PC_CASES, variant),
    ));

    let led = generate_rect(
        names::PC_LED,
        spec.led_width * 0.5,
        spec.led_height * 0.5,
        colors::pick(&colors::PC_LEDS, variant),
    )
    .at(Point3::new(0.0, 0.0, spec.led_depth * 0.5));
    let led_panel = Part::with_centroid(names::PC_LED_PANEL, spec.led_panel_center).with_faces([led]);

    let fan = Part::with_centroid(names::PC_FAN, spec.fan_center).with_faces([upward_fan(
        names::PC_FAN_BLADES,
        spec.fan_radius,
        spec.fan_blades,
        colors::FAN,
    )]);

    let first_port_x = -(spec.port_count.saturating_sub(1) as f32) * spec.port_spacing * 0.5;
    let ports = Part::with_centroid(names::PC_PORTS, spec.ports_center).with_faces(
        (0..spec.port_count).map(|i| {
            generate_rect(
                format!("Port_{i}"),
                spec.port_width * 0.5,
                spec.port_height * 0.5,
                colors::USB_PORT,
            )
            .at(Point3::new(first_port_x + i as f32 * spec.port_spacing, 0.0, 0.0))
        }),
    );

    Object::new(format!("PC_{variant}"), DeviceKind::Pc).with_parts([case, led_panel, fan, ports])
}

/// Builds a monitor. Call [`MonitorSpec::validate`] first; an invalid spec
/// still produces geometry.
pub fn build_monitor(spec: &MonitorSpec, variant: usize) -> Object {
    let frame_z = spec.frame_depth * 0.5;
    let frame_color = colors::pick(&colors::MONITOR_FRAMES, variant);

    let frame = generate_rect(
        names::MONITOR_FRAME,
        spec.frame_width * 0.5,
        spec.frame_height * 0.5,
        frame_color,
    )
    .at(Point3::new(0.0, 0.0, frame_z));

    let mut frame_back = generate_rect(
        names::MONITOR_FRAME_BACK,
        spec.frame_width * 0.5,
        spec.frame_height * 0.5,
        frame_color,
    )
    .at(Point3::new(0.0, 0.0, -frame_z));
    frame_back.flip_winding();

    let display = generate_rect(
        names::MONITOR_DISPLAY,
        spec.display_width * 0.5,
        spec.display_height * 0.5,
        colors::pick(&colors::MONITOR_DISPLAYS, variant),
    )
    .at(Point3::new(0.0, 0.0, frame_z + spec.display_depth * 0.5));

    let screen = Part::with_centroid(names::MONITOR_SCREEN, spec.screen_center)
        .with_faces([frame, frame_back, display]);

    let base = Part::with_centroid(names::MONITOR_BASE, spec.base_center).with_faces([upward_fan(
        names::MONITOR_BASE_FACE,
        spec.base_radius,
        spec.base_segments,
        colors::MONITOR_BASE,
    )]);

    let stand = Part::with_centroid(names::MONITOR_STAND, spec.stand_center).with_faces(
        generate_box_faces(
            names::MONITOR_STAND,
            Point3::new(spec.stand_width * 0.5, spec.stand_height * 0.5, spec.stand_depth * 0.5),
            colors::MONITOR_STAND,
        ),
    );

    Object::new(format!("Monitor_{variant}"), DeviceKind::Monitor).with_parts([screen, base, stand])
}

pub fn build_keyboard(spec: &KeyboardSpec, variant: usize) -> Object {
    let base = Part::with_centroid(names::KEYBOARD_BASE, spec.base_center).with_faces(
        generate_box_faces(
            "",
            Point3::new(spec.base_width * 0.5, spec.base_height * 0.5, spec.base_depth * 0.5),
            colors::pick(&colors::KEYBOARD_BASES, variant),
        ),
    );

    let grid = KeyGrid {
        rows: spec.rows,
        columns: spec.columns,
        start_x: spec.keys_start_x,
        start_z: spec.keys_start_z,
        spacing: spec.key_spacing,
        key_width: spec.key_width,
        key_height: spec.key_height,
        key_depth: spec.key_depth,
        top_inset: spec.key_top_inset,
        side_color: colors::pick(&colors::KEY_SIDES, variant),
        top_color: colors::pick(&colors::KEY_TOPS, variant),
    };
    let keys = Part::with_centroid(names::KEYBOARD_KEYS, spec.keys_center).with_faces(generate_key_grid(&grid));

    Object::new(format!("Keyboard_{variant}"), DeviceKind::Keyboard).with_parts([base, keys])
}

/// Builds the reference device of `kind`. `Generic` has no reference shape.
pub fn build_default(kind: DeviceKind, variant: usize) -> Option<Object> {
    match kind {
        DeviceKind::Pc => Some(build_pc(&PcSpec::default(), variant)),
        DeviceKind::Monitor => Some(build_monitor(&MonitorSpec::default(), variant)),
        DeviceKind::Keyboard => Some(build_keyboard(&KeyboardSpec::default(), variant)),
        DeviceKind::Generic => None,
    }
}
