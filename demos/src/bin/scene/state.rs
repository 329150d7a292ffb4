//! Everything in the scene that changes from frame to frame.

use core::f32::consts::PI;

use lp::geom::{Color3, rgb};
use lp::math::{Angle, rads, vec3};
use lp::render::{Camera, Motion, Orbit, PointLight};

/// Rocket height at which the ascent speeds up.
const ASCENT_THRESHOLD: f32 = 8.0;

/// The mutable state of the scene, updated once per frame.
#[derive(Clone, Debug, Default)]
pub struct State {
    pub camera: Camera<Orbit>,
    pub anim: Anim,
    pub panel: LightPanel,
}

/// The input gathered during one frame.
#[derive(Copy, Clone, Debug, Default)]
pub struct Input {
    /// Movement keys held down.
    pub motion: Motion,
    /// Whether the fast movement modifier is held. Takes precedence
    /// over `slow` if both are held.
    pub fast: bool,
    /// Whether the slow movement modifier is held.
    pub slow: bool,
    /// Mouse movement in pixels, if the mouse is captured.
    pub look: Option<(f32, f32)>,
    /// Animation control pressed during the frame, if any.
    pub control: Option<Control>,
}

/// Animation playback controls.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Control {
    /// Half speed.
    Slower,
    /// Toggles the rocket launch on and off.
    PlayPause,
    /// Normal speed.
    Normal,
    /// Double speed.
    Faster,
}

/// Animation state of the fan and the rocket.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Anim {
    /// Rotation of the fan, in `0..FULL`.
    pub angle: Angle,
    /// Height of the rocket above the launch pad.
    pub height: f32,
    /// Height of the rocket on the previous frame.
    last: f32,
    /// Whether the rocket is ascending.
    pub playing: bool,
    /// Playback speed multiplier.
    pub speed: f32,
}

/// Settings of the light control panel.
///
/// Index 0 is the interior lights, 1 and 2 the two launch pad
/// floodlights.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightPanel {
    pub brightness: [f32; 3],
    /// Custom colors, used in place of the defaults if enabled.
    pub colors: [Color3; 3],
    pub overrides: [bool; 3],
}

impl State {
    /// Returns the initial state for a viewport of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        let mut s = Self::default();
        s.resize(width, height);
        s
    }

    /// Advances the scene by `dt` seconds, applying `input`.
    pub fn update(&mut self, dt: f32, input: &Input) {
        if let Some(c) = input.control {
            self.anim.control(c);
        }
        self.anim.update(dt);

        let cam = &mut self.camera.transform;
        cam.speed = if input.fast {
            2.0
        } else if input.slow {
            0.5
        } else {
            1.0
        };
        if let Some((dx, dy)) = input.look {
            cam.look(dx, dy);
        }
        cam.update(&input.motion, dt);
    }

    /// Resizes the viewport, unless either dimension is zero.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.projection.set_viewport(width, height);
    }
}

impl Anim {
    /// Fan rotation speed in radians per second.
    pub const FAN_SPEED: f32 = 0.3 * PI;

    /// Applies an animation control.
    pub fn control(&mut self, c: Control) {
        match c {
            Control::Slower => self.speed = 0.5,
            Control::PlayPause => self.playing = !self.playing,
            Control::Normal => self.speed = 1.0,
            Control::Faster => self.speed = 2.0,
        }
    }

    /// Advances the animation by `dt` seconds.
    ///
    /// The fan always turns at a constant rate. The rocket only moves
    /// while playing, each frame climbing in proportion to its previous
    /// height, and somewhat faster once above [`ASCENT_THRESHOLD`].
    pub fn update(&mut self, dt: f32) {
        self.angle = (self.angle + rads(dt * Self::FAN_SPEED)).wrap_once();

        if self.playing {
            let damping = if self.height < ASCENT_THRESHOLD {
                1.11
            } else {
                1.1
            };
            self.height += self.last / damping * 0.015 * self.speed;
            self.last = self.height;
        }
    }
}

impl LightPanel {
    /// Range of the brightness sliders.
    pub const BRIGHTNESS: (f32, f32) = (0.1, 5.0);

    /// Sets the brightness of light group `i`, clamped to the slider range.
    ///
    /// # Panics
    /// If `i` is not 0, 1, or 2.
    pub fn set_brightness(&mut self, i: usize, b: f32) {
        let (min, max) = Self::BRIGHTNESS;
        self.brightness[i] = b.clamp(min, max);
    }

    /// Returns the five point lights of the scene.
    ///
    /// In order: the red and the blue launch pad floodlights, the moon,
    /// and two interior lights sharing the same color.
    pub fn lights(&self) -> [PointLight; 5] {
        let [pad1, pad2] = [rgb(1.0, 0.0, 0.0), rgb(0.0, 0.0, 1.0)];
        let color = |i: usize, def: Color3| {
            if self.overrides[i] { self.colors[i] } else { def }
        };
        let [b0, b1, b2] = self.brightness;
        let white = rgb(1.0, 1.0, 1.0);
        [
            PointLight::new(vec3(2.7, 10.0, 1.51), color(1, pad1), b1, 0.25),
            PointLight::new(vec3(2.7, 10.0, 2.5), color(2, pad2), b2, 0.25),
            PointLight::new(vec3(19.7, 17.7, 23.8), white, 1.0, 0.5),
            PointLight::new(vec3(1.7, 1.63, 22.21), color(0, white), b0, 0.0),
            PointLight::new(vec3(6.1, 1.63, 22.21), color(0, white), b0, 0.1),
        ]
    }
}

impl Default for Anim {
    fn default() -> Self {
        Self {
            angle: Angle::ZERO,
            height: 0.0,
            last: 1.0,
            playing: false,
            speed: 1.0,
        }
    }
}

impl Default for LightPanel {
    fn default() -> Self {
        Self {
            brightness: [0.5, 0.3, 0.3],
            colors: [rgb(0.8, 0.3, 0.02); 3],
            overrides: [false; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use lp::assert_approx_eq;

    use super::*;

    #[test]
    fn fan_angle_wraps() {
        let mut a = Anim::default();
        a.update(1.0);
        assert_approx_eq!(a.angle, rads(0.3 * PI));
        for _ in 0..7 {
            a.update(1.0);
        }
        // 2.4π wraps to 0.4π
        assert_approx_eq!(a.angle, rads(0.4 * PI), eps = 1e-5);
    }

    #[test]
    fn rocket_waits_until_played() {
        let mut a = Anim::default();
        a.update(0.1);
        assert_eq!(a.height, 0.0);

        a.control(Control::PlayPause);
        a.update(0.1);
        assert_approx_eq!(a.height, 0.015 / 1.11);
        let h = a.height;
        a.update(0.1);
        assert_approx_eq!(a.height, h + h / 1.11 * 0.015);

        a.control(Control::PlayPause);
        a.update(0.1);
        assert_approx_eq!(a.height, h + h / 1.11 * 0.015);
    }

    #[test]
    fn rocket_speed_controls() {
        let mut slow = Anim::default();
        let mut fast = Anim::default();
        slow.control(Control::Slower);
        fast.control(Control::Faster);
        for a in [&mut slow, &mut fast] {
            a.control(Control::PlayPause);
            a.update(0.0);
        }
        assert_approx_eq!(fast.height, 4.0 * slow.height);

        fast.control(Control::Normal);
        assert_eq!(fast.speed, 1.0);
    }

    #[test]
    fn default_lights() {
        let [red, blue, moon, in1, in2] = LightPanel::default().lights();
        assert_approx_eq!(red.diffuse, rgb(0.3, 0.0, 0.0));
        assert_approx_eq!(blue.diffuse, rgb(0.0, 0.0, 0.3));
        assert_approx_eq!(blue.specular, rgb(0.0, 0.0, 0.25));
        assert_eq!(moon.diffuse, rgb(1.0, 1.0, 1.0));
        assert_eq!(moon.specular, rgb(0.5, 0.5, 0.5));
        assert_eq!(in1.diffuse, rgb(0.5, 0.5, 0.5));
        assert_eq!(in1.specular, rgb(0.0, 0.0, 0.0));
        assert_eq!(in2.diffuse, in1.diffuse);
        assert_approx_eq!(in2.specular, rgb(0.1, 0.1, 0.1));
    }

    #[test]
    fn overridden_light_colors() {
        let mut p = LightPanel::default();
        p.overrides[1] = true;
        p.set_brightness(1, 10.0);
        assert_eq!(p.brightness[1], 5.0);

        let [red, blue, ..] = p.lights();
        assert_approx_eq!(red.diffuse, rgb(4.0, 1.5, 0.1));
        assert_approx_eq!(red.ambient, rgb(0.04, 0.015, 0.001));
        assert_approx_eq!(blue.diffuse, rgb(0.0, 0.0, 0.3));
    }

    #[test]
    fn update_applies_speed_modifiers() {
        let mut s = State::new(1200, 720);
        let fwd = Input {
            motion: Motion { forward: true, ..Motion::default() },
            fast: true,
            ..Input::default()
        };
        let r = s.camera.transform.radius;
        s.update(0.1, &fwd);
        assert_approx_eq!(s.camera.transform.radius, r - 1.0);

        let slow = Input { fast: false, slow: true, ..fwd };
        s.update(0.1, &slow);
        assert_approx_eq!(s.camera.transform.radius, r - 1.25);

        let both = Input { fast: true, ..slow };
        s.update(0.1, &both);
        assert_approx_eq!(s.camera.transform.radius, r - 2.25);
    }

    #[test]
    fn resize_to_zero_keeps_aspect() {
        let mut s = State::new(800, 600);
        s.resize(0, 0);
        assert_approx_eq!(s.camera.projection.aspect, 800.0 / 600.0);
    }
}
