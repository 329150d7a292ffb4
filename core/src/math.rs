//! Linear algebra and other useful mathematics.
//!
//! Includes [vectors][self::vec], [matrices][mat] and [angles][angle], as
//! well as approximate equality comparisons for testing floating-point
//! results.
//!
//! All types are plain `Copy` values over `f32`. Nothing in this module
//! allocates, and no operation checks its numeric preconditions: dividing
//! by zero, normalizing a zero vector, or inverting a singular matrix
//! yields infinities or NaNs rather than an error.

pub use {
    angle::{Angle, degs, rads, turns},
    approx::ApproxEq,
    mat::{
        Mat2x2, Mat3x3, Mat4x4, Matrix, scale, scale3, translate, translate3,
    },
    vec::{Vec2, Vec3, Vec4, Vector, vec2, vec3, vec4},
};
#[cfg(feature = "fp")]
pub use mat::{perspective, rotate2, rotate_x, rotate_y, rotate_z};

/// Implements a binary operator trait in terms of an op-assign trait.
macro_rules! impl_op {
    ($trait:ident :: $method:ident, $self:ty, $rhs:ty, $op:tt) => {
        impl<const N: usize> $trait<$rhs> for $self {
            type Output = Self;
            #[inline]
            fn $method(mut self, rhs: $rhs) -> Self {
                self $op rhs;
                self
            }
        }
    };
}

pub mod angle;
pub mod approx;
pub mod float;
pub mod mat;
pub mod vec;
