//! Cameras and camera transforms.

use core::ops::Range;

use crate::math::{Angle, Mat4x4, degs, rads};
#[cfg(feature = "fp")]
use crate::math::{perspective, rotate_x, rotate_y, translate3};

/// Trait for different modes of camera motion.
pub trait Transform {
    /// Returns the current world-to-view matrix.
    fn world_to_view(&self) -> Mat4x4;
}

/// Camera movement speed in world units per second.
pub const MOVE_SPEED: f32 = 5.0;

/// Camera rotation per pixel of mouse movement.
pub const MOUSE_SENSITIVITY: Angle = rads(0.01);

/// A camera: a world-to-view transform plus a projection.
#[derive(Clone, Debug, Default)]
pub struct Camera<Tf> {
    /// World-to-view transform.
    pub transform: Tf,
    /// Perspective projection parameters.
    pub projection: Projection,
}

/// Perspective projection parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    /// Vertical field of view.
    pub fov_y: Angle,
    /// Viewport width divided by height.
    pub aspect: f32,
    /// Distances of the near and far clip planes.
    pub near_far: Range<f32>,
}

/// Orbiting camera transform.
///
/// The camera sits `radius` units in front of the world origin, offset
/// by `(x, y)` and rotated by `yaw` and `pitch`. The view matrix is
/// `rotate_x(pitch) * rotate_y(yaw) * translate(x, y, -radius)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orbit {
    /// Rotation about the view x axis, clamped to ±90°.
    pub pitch: Angle,
    /// Rotation about the world y axis.
    pub yaw: Angle,
    /// Horizontal offset.
    pub x: f32,
    /// Vertical offset.
    pub y: f32,
    /// Distance from the origin along the view axis.
    pub radius: f32,
    /// Speed multiplier applied to all movement.
    pub speed: f32,
}

/// The movement keys held down during a frame.
///
/// Of each opposing pair, the first takes precedence if both are held.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Motion {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

//
// Inherent impls
//

impl<Tf> Camera<Tf> {
    /// Creates a camera with the given transform and projection.
    pub fn new(transform: Tf, projection: Projection) -> Self {
        Self { transform, projection }
    }
}

#[cfg(feature = "fp")]
impl<Tf: Transform> Camera<Tf> {
    /// Returns the composed world-to-projective matrix.
    pub fn world_to_project(&self) -> Mat4x4 {
        self.projection.matrix() * self.transform.world_to_view()
    }
}

impl Projection {
    /// Sets the aspect ratio to match a viewport of the given size.
    ///
    /// A zero-sized viewport, such as a minimized window, leaves the
    /// aspect ratio unchanged.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Returns the projection matrix.
    ///
    /// The matrix is recomputed on every call.
    #[cfg(feature = "fp")]
    pub fn matrix(&self) -> Mat4x4 {
        perspective(self.fov_y, self.aspect, self.near_far.clone())
    }
}

impl Orbit {
    /// Returns a camera at the given offset and distance, looking straight
    /// ahead at normal speed.
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            pitch: Angle::ZERO,
            yaw: Angle::ZERO,
            x,
            y,
            radius,
            speed: 1.0,
        }
    }

    /// Rotates the camera by mouse movement of `dx` and `dy` pixels.
    ///
    /// Horizontal movement turns the yaw freely; vertical movement turns
    /// the pitch, clamped so the camera cannot flip over.
    pub fn look(&mut self, dx: f32, dy: f32) {
        let lim = Angle::RIGHT;
        self.yaw += dx * MOUSE_SENSITIVITY;
        self.pitch = (self.pitch + dy * MOUSE_SENSITIVITY).clamp(-lim, lim);
    }
}

#[cfg(feature = "fp")]
impl Orbit {
    /// Moves the camera according to `motion` over `dt` seconds.
    ///
    /// Forward and back move along the viewing direction, left and right
    /// strafe horizontally, and up and down move along the world y axis.
    /// The distance moved is [`MOVE_SPEED`] × `dt` × `speed`.
    pub fn update(&mut self, motion: &Motion, dt: f32) {
        let d = MOVE_SPEED * dt * self.speed;
        let (sp, cp) = self.pitch.sin_cos();
        let (sy, cy) = self.yaw.sin_cos();

        let fwd = if motion.forward {
            1.0
        } else if motion.back {
            -1.0
        } else {
            0.0
        };
        self.y += fwd * sp * d;
        self.x -= fwd * cp * sy * d;
        self.radius -= fwd * cp * cy * d;

        let side = if motion.left {
            1.0
        } else if motion.right {
            -1.0
        } else {
            0.0
        };
        self.x += side * cy * d;
        self.radius -= side * sy * d;

        if motion.up {
            self.y -= d;
        } else if motion.down {
            self.y += d;
        }
    }
}

//
// Local trait impls
//

#[cfg(feature = "fp")]
impl Transform for Orbit {
    fn world_to_view(&self) -> Mat4x4 {
        rotate_x(self.pitch)
            * rotate_y(self.yaw)
            * translate3(self.x, self.y, -self.radius)
    }
}

impl Transform for Mat4x4 {
    fn world_to_view(&self) -> Mat4x4 {
        *self
    }
}

//
// Foreign trait impls
//

impl Default for Projection {
    /// Returns a 60° vertical field of view for a 1200×720 viewport, with
    /// clip planes at 0.1 and 100.
    fn default() -> Self {
        Self {
            fov_y: degs(60.0),
            aspect: 1200.0 / 720.0,
            near_far: 0.1..100.0,
        }
    }
}

impl Default for Orbit {
    /// Returns the camera looking at the launch pad from across the field.
    fn default() -> Self {
        Self::new(-3.5, -1.07, 22.29)
    }
}
