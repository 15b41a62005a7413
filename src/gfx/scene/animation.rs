//! Idle animations for the desk scene.

use crate::gfx::geometry::constants::colors;
use crate::gfx::geometry::devices::names;

use super::object::DeviceKind;
use super::point::Point3;
use super::scene::Scene;

/// Drives the LED pulse, fan spin and screen sway.
///
/// Only part transforms and face colors change, so no buffer rebuild is
/// needed after an update.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneAnimator {
    pub enabled: bool,
    elapsed: f32,
    /// Radians per second about Y
    pub fan_speed: f32,
    /// Angular frequency of the LED pulse
    pub led_frequency: f32,
    pub sway_frequency: f32,
    /// Peak screen tilt about X, radians
    pub sway_amplitude: f32,
}

impl Default for SceneAnimator {
    fn default() -> Self {
        Self {
            enabled: true,
            elapsed: 0.0,
            fan_speed: 8.0,
            led_frequency: 3.0,
            sway_frequency: 0.5,
            sway_amplitude: 0.03,
        }
    }
}

impl SceneAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Returns the new enabled state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        log::info!("Animations {}", if self.enabled { "enabled" } else { "paused" });
        self.enabled
    }

    /// LED color at the current time: green channel pulses, the others dim.
    pub fn led_color(&self) -> [f32; 3] {
        let intensity = ((self.elapsed * self.led_frequency).sin() + 1.0) * 0.5;
        let [r, g, b] = colors::PC_LEDS[0];
        [r * 0.2, g * intensity, b * 0.2]
    }

    pub fn screen_tilt(&self) -> f32 {
        (self.elapsed * self.sway_frequency).sin() * self.sway_amplitude
    }

    pub fn update(&mut self, dt: f32, scene: &mut Scene) {
        if !self.enabled {
            return;
        }
        self.elapsed += dt;

        let led_color = self.led_color();
        let fan_step = Point3::new(0.0, dt * self.fan_speed, 0.0);
        for pc in scene.objects_of_kind_mut(DeviceKind::Pc) {
            let led = pc
                .part_mut(names::PC_LED_PANEL)
                .and_then(|panel| panel.face_mut(names::PC_LED));
            if let Some(led) = led {
                led.color = led_color;
            }
            pc.rotate_part(names::PC_FAN, fan_step);
        }

        let tilt = Point3::new(self.screen_tilt(), 0.0, 0.0);
        for monitor in scene.objects_of_kind_mut(DeviceKind::Monitor) {
            if let Some(screen) = monitor.part_mut(names::MONITOR_SCREEN) {
                screen.set_rotation(tilt);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::devices::{build_monitor, build_pc, MonitorSpec, PcSpec};
    use approx::assert_abs_diff_eq;

    fn desk() -> Scene {
        let mut scene = Scene::new();
        scene.add_object(build_pc(&PcSpec::default(), 0));
        scene.add_object(build_monitor(&MonitorSpec::default(), 0));
        scene
    }

    #[test]
    fn test_fan_spins_at_fan_speed() {
        let mut scene = desk();
        let mut animator = SceneAnimator::new();
        animator.update(0.25, &mut scene);
        animator.update(0.25, &mut scene);

        let fan = scene.objects()[0].part(names::PC_FAN).unwrap();
        assert_abs_diff_eq!(fan.rotation.y, 4.0, epsilon = 0.001);
    }

    #[test]
    fn test_screen_sway_and_led_pulse() {
        let mut scene = desk();
        let mut animator = SceneAnimator::new();
        animator.update(1.0, &mut scene);

        let screen = scene.objects()[1].part(names::MONITOR_SCREEN).unwrap();
        assert_abs_diff_eq!(screen.rotation.x, 0.5f32.sin() * 0.03, epsilon = 0.0001);

        let led = scene.objects()[0]
            .part(names::PC_LED_PANEL)
            .and_then(|p| p.face(names::PC_LED))
            .unwrap();
        let intensity = (3.0f32.sin() + 1.0) * 0.5;
        assert_abs_diff_eq!(led.color[1], colors::PC_LEDS[0][1] * intensity, epsilon = 0.0001);
    }

    #[test]
    fn test_paused_animator_changes_nothing() {
        let mut scene = desk();
        let mut animator = SceneAnimator::new();
        assert!(!animator.toggle());
        animator.update(1.0, &mut scene);
        assert_eq!(animator.elapsed(), 0.0);
        let fan = scene.objects()[0].part(names::PC_FAN).unwrap();
        assert_eq!(fan.rotation, Point3::ZERO);
    }
}
