//! Vertex batches and placing them in world space.
//!
//! Every mesh in a scene, whether generated procedurally or loaded from
//! a file, ends up as a [`Batch`]: parallel arrays of per-vertex
//! attributes, three consecutive vertices per triangle. A batch starts in
//! its own [model space][crate::render::Model] and is moved into
//! [world space][crate::render::World] exactly once, by
//! [`pre_transform`].

use alloc::vec::Vec;
use core::iter::repeat_n;

use crate::math::{Vec2, Vec3, vec2, vec3};
#[cfg(feature = "fp")]
use crate::math::Mat4x4;

pub use batch::{Batch, Builder};

pub mod batch;

/// A surface normal in 3D.
pub type Normal3 = Vec3;

/// A texture coordinate pair.
pub type TexCoord = Vec2;

/// An RGB color with components nominally in 0.0..=1.0.
pub type Color3 = Vec3;

/// Returns a texture coordinate pair.
#[inline]
pub const fn uv(u: f32, v: f32) -> TexCoord {
    vec2(u, v)
}

/// Returns an RGB color.
#[inline]
pub const fn rgb(r: f32, g: f32, b: f32) -> Color3 {
    vec3(r, g, b)
}

/// Surface reflectance parameters for the Blinn-Phong lighting model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    /// Reflectance of ambient light.
    pub ambient: Color3,
    /// Reflectance of diffuse light.
    pub diffuse: Color3,
    /// Reflectance of specular highlights.
    pub specular: Color3,
    /// Specular exponent; higher values give smaller, sharper highlights.
    pub shininess: f32,
    /// Opacity, where 1.0 is fully opaque.
    pub alpha: f32,
}

/// The per-vertex material attributes of a batch, one array per field.
///
/// Kept as separate arrays so that each can be uploaded to the renderer
/// as is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Materials {
    pub ambient: Vec<Color3>,
    pub diffuse: Vec<Color3>,
    pub specular: Vec<Color3>,
    pub shininess: Vec<f32>,
    pub alpha: Vec<f32>,
}

impl Material {
    /// An orange, moderately shiny, opaque material.
    pub const DEFAULT: Self = Self {
        ambient: rgb(1.0, 1.0, 1.0),
        diffuse: rgb(1.0, 0.5, 0.31),
        specular: rgb(0.5, 0.5, 0.5),
        shininess: 32.0,
        alpha: 1.0,
    };

    /// Returns a material with the given colors and shininess, fully opaque.
    pub const fn new(
        ambient: Color3,
        diffuse: Color3,
        specular: Color3,
        shininess: f32,
    ) -> Self {
        Self { ambient, diffuse, specular, shininess, alpha: 1.0 }
    }

    /// Returns a material with every color component set to the matching
    /// gray level.
    ///
    /// # Examples
    /// ```
    /// # use launchpad_core::geom::{Material, rgb};
    /// let m = Material::gray(0.05, 0.1, 0.2, 12.8);
    /// assert_eq!(m.diffuse, rgb(0.1, 0.1, 0.1));
    /// assert_eq!(m.alpha, 1.0);
    /// ```
    pub const fn gray(
        ambient: f32,
        diffuse: f32,
        specular: f32,
        shininess: f32,
    ) -> Self {
        Self::new(
            rgb(ambient, ambient, ambient),
            rgb(diffuse, diffuse, diffuse),
            rgb(specular, specular, specular),
            shininess,
        )
    }

    /// Returns `self` with opacity `alpha`.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Materials {
    /// Returns the number of vertices whose material is stored.
    pub fn len(&self) -> usize {
        self.alpha.len()
    }

    /// Returns whether `self` stores no materials.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `n` copies of `mat`.
    pub fn push_n(&mut self, mat: &Material, n: usize) {
        self.ambient.extend(repeat_n(mat.ambient, n));
        self.diffuse.extend(repeat_n(mat.diffuse, n));
        self.specular.extend(repeat_n(mat.specular, n));
        self.shininess.extend(repeat_n(mat.shininess, n));
        self.alpha.extend(repeat_n(mat.alpha, n));
    }

    /// Appends a single copy of `mat`.
    pub fn push(&mut self, mat: &Material) {
        self.push_n(mat, 1);
    }

    /// Returns the material of the `i`th vertex, or `None` if `i` is
    /// out of bounds.
    pub fn get(&self, i: usize) -> Option<Material> {
        Some(Material {
            ambient: *self.ambient.get(i)?,
            diffuse: *self.diffuse.get(i)?,
            specular: *self.specular.get(i)?,
            shininess: *self.shininess.get(i)?,
            alpha: *self.alpha.get(i)?,
        })
    }

    /// Moves all the materials of `other` to the end of `self`.
    pub fn append(&mut self, other: &mut Self) {
        self.ambient.append(&mut other.ambient);
        self.diffuse.append(&mut other.diffuse);
        self.specular.append(&mut other.specular);
        self.shininess.append(&mut other.shininess);
        self.alpha.append(&mut other.alpha);
    }

    pub(crate) fn is_consistent(&self) -> bool {
        let n = self.len();
        let Self { ambient, diffuse, specular, shininess, .. } = self;
        [ambient.len(), diffuse.len(), specular.len(), shininess.len()]
            .iter()
            .all(|&l| l == n)
    }
}

/// Transforms positions and normals in place by the pre-transform `tf`.
///
/// Each position `p` is extended to `(x, y, z, 1)`, multiplied by `tf`,
/// and divided by the resulting w. Each normal is multiplied by the
/// [normal matrix][Mat4x4::normal_matrix] of `tf`, computed once, and
/// renormalized to unit length.
///
/// The function is pure apart from its outputs: calling it twice applies
/// the transform twice. Prefer [`Batch::pre_transform`], which can only
/// be called once per batch.
///
/// A singular `tf` produces non-finite normals, and any normal that
/// transforms to the zero vector becomes NaN; neither is checked.
///
/// # Examples
/// ```
/// # use launchpad_core::{assert_approx_eq, geom::pre_transform, math::*};
/// let mut pos = [vec3(1.0, 1.0, 0.0)];
/// let mut norm = [vec3(1.0, 1.0, 0.0).normalize()];
///
/// pre_transform(&mut pos, &mut norm, &scale3(2.0, 1.0, 1.0));
///
/// assert_eq!(pos, [vec3(2.0, 1.0, 0.0)]);
/// // The normal tilts away from the stretched axis
/// assert_approx_eq!(norm[0], vec3(1.0, 2.0, 0.0).normalize());
/// ```
#[cfg(feature = "fp")]
pub fn pre_transform(
    positions: &mut [Vec3],
    normals: &mut [Normal3],
    tf: &Mat4x4,
) {
    let normal_tf = tf.normal_matrix();
    for p in positions {
        *p = tf.transform_point(p);
    }
    for n in normals {
        *n = normal_tf.apply(n).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_defaults() {
        let m = Material::default();
        assert_eq!(m.ambient, rgb(1.0, 1.0, 1.0));
        assert_eq!(m.diffuse, rgb(1.0, 0.5, 0.31));
        assert_eq!(m.specular, rgb(0.5, 0.5, 0.5));
        assert_eq!(m.shininess, 32.0);
        assert_eq!(m.alpha, 1.0);
    }

    #[test]
    fn materials_push_and_get() {
        let mut ms = Materials::default();
        assert!(ms.is_empty());

        let glass = Material::gray(0.0, 0.01, 0.5, 50.0).with_alpha(0.1);
        ms.push_n(&glass, 3);
        ms.push(&Material::DEFAULT);

        assert_eq!(ms.len(), 4);
        assert!(ms.is_consistent());
        assert_eq!(ms.get(2), Some(glass));
        assert_eq!(ms.get(3), Some(Material::DEFAULT));
        assert_eq!(ms.get(4), None);
    }

    #[test]
    fn materials_append() {
        let mut a = Materials::default();
        a.push_n(&Material::DEFAULT, 2);
        let mut b = Materials::default();
        b.push(&Material::gray(1.0, 1.0, 1.0, 1.0));

        a.append(&mut b);
        assert_eq!(a.len(), 3);
        assert!(b.is_empty());
        assert_eq!(a.shininess, [32.0, 32.0, 1.0]);
    }

    #[cfg(feature = "fp")]
    mod fp {
        use crate::assert_approx_eq;
        use crate::math::{degs, rotate_y, scale3, translate3, vec3};

        use super::super::*;

        #[test]
        fn normals_stay_unit_length_under_nonuniform_scale() {
            let mut pos = [vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 1.0)];
            let mut norm = [
                vec3(1.0, 0.0, 0.0),
                vec3(0.0, 1.0, 1.0).normalize(),
            ];
            pre_transform(&mut pos, &mut norm, &scale3(2.0, 1.0, 1.0));

            assert_eq!(pos, [vec3(2.0, 0.0, 0.0), vec3(0.0, 1.0, 1.0)]);
            for n in norm {
                assert_approx_eq!(n.len(), 1.0);
            }
            assert_approx_eq!(norm[0], vec3(1.0, 0.0, 0.0));
        }

        #[test]
        fn sheared_normal_follows_inverse_transpose() {
            // Normal of the plane x + y = 1
            let n = vec3(1.0, 1.0, 0.0).normalize();
            let tf = scale3(2.0, 1.0, 1.0);
            let mut norm = [n];
            pre_transform(&mut [], &mut norm, &tf);

            // The naive result would be (2, 1, 0) normalized
            let expected = vec3(0.5, 1.0, 0.0).normalize();
            assert_approx_eq!(norm[0], expected);

            // Still perpendicular to a transformed tangent of the plane
            let t = tf.linear().apply(&vec3(1.0, -1.0, 0.0));
            assert_approx_eq!(norm[0].dot(&t), 0.0);
        }

        #[test]
        fn affine_positions_and_translation_invariant_normals() {
            let tf = rotate_y(degs(90.0)).then(&translate3(10.0, 0.0, 0.0));
            let mut pos = [vec3(0.0, 0.0, 1.0)];
            let mut norm = [vec3(0.0, 0.0, 1.0)];
            pre_transform(&mut pos, &mut norm, &tf);

            assert_approx_eq!(pos[0], vec3(11.0, 0.0, 0.0));
            assert_approx_eq!(norm[0], vec3(1.0, 0.0, 0.0));
        }

        #[test]
        fn singular_transform_yields_non_finite_normals() {
            let mut pos = [vec3(1.0, 2.0, 3.0)];
            let mut norm = [vec3(0.0, 1.0, 0.0)];
            pre_transform(&mut pos, &mut norm, &scale3(1.0, 0.0, 1.0));

            assert_eq!(pos[0], vec3(1.0, 0.0, 3.0));
            assert!(!norm[0].is_finite());
        }
    }
}
