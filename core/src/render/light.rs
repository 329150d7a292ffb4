//! Light sources

use crate::geom::Color3;
use crate::math::Vec3;

/// A light source radiating omnidirectionally from a single point.
///
/// Holds the Blinn-Phong color terms the renderer feeds to its shader,
/// one per lighting component, and how the light falls off with distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    /// Position in world space.
    pub pos: Vec3,
    pub ambient: Color3,
    pub diffuse: Color3,
    pub specular: Color3,
    pub attenuation: Attenuation,
}

/// Coefficients of the falloff `1 / (constant + linear d + quadratic d²)`
/// at distance `d` from a light.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl PointLight {
    /// Ambient intensity relative to diffuse intensity.
    pub const AMBIENT_RATIO: f32 = 0.01;

    /// Creates a light at `pos` with the given color and brightness.
    ///
    /// The diffuse term is `color` scaled by `brightness`, the ambient
    /// term is a hundredth of that, and the specular term is `color`
    /// scaled by `specular`, independent of brightness.
    ///
    /// # Examples
    /// ```
    /// # use launchpad_core::{geom::rgb, math::vec3, render::PointLight};
    /// let pos = vec3(2.7, 10.0, 1.51);
    /// let red = PointLight::new(pos, rgb(1.0, 0.0, 0.0), 0.5, 0.25);
    /// assert_eq!(red.diffuse, rgb(0.5, 0.0, 0.0));
    /// assert_eq!(red.ambient, rgb(0.005, 0.0, 0.0));
    /// assert_eq!(red.specular, rgb(0.25, 0.0, 0.0));
    /// ```
    pub fn new(
        pos: Vec3,
        color: Color3,
        brightness: f32,
        specular: f32,
    ) -> Self {
        let diffuse = color * brightness;
        Self {
            pos,
            ambient: diffuse * Self::AMBIENT_RATIO,
            diffuse,
            specular: specular * color,
            attenuation: Attenuation::default(),
        }
    }

    /// Returns the attenuation factor at `pt`.
    #[cfg(feature = "fp")]
    pub fn attenuation_at(&self, pt: &Vec3) -> f32 {
        self.attenuation.at((*pt - self.pos).len())
    }
}

impl Attenuation {
    /// Returns the attenuation factor at distance `d`.
    pub fn at(&self, d: f32) -> f32 {
        1.0 / (self.constant + self.linear * d + self.quadratic * d * d)
    }
}

impl Default for Attenuation {
    /// Returns a falloff that halves intensity at a distance of about
    /// four units.
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}
