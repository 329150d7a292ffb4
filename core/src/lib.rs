//! Core functionality of the `launchpad` scene viewer.
//!
//! Includes a small linear algebra library with vectors, matrices, and
//! angles; vertex batches together with the pre-transform that places
//! them into world space; and the camera and light parameters that
//! a renderer consumes every frame.
//!
//! # Crate features
//!
//! * `std`:
//!   Uses the standard library for floating-point functions such as
//!   square roots and trigonometry. Enabled by default.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! Each of the above implies `fp`; enabling `fp` by itself, without one of
//! them, is a compile error. Without `fp`, rotations, projections,
//! normalization and anything built on them are unavailable, and the crate
//! only depends on `core` and `alloc`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

pub mod geom;
pub mod math;
pub mod render;

pub mod prelude {
    #[cfg(feature = "fp")]
    pub use crate::geom::pre_transform;
    #[cfg(feature = "fp")]
    pub use crate::math::mat::{
        perspective, rotate2, rotate_x, rotate_y, rotate_z,
    };
    pub use crate::math::{
        angle::{Angle, degs, rads, turns},
        approx::ApproxEq,
        mat::{
            Mat2x2, Mat3x3, Mat4x4, Matrix, scale, scale3, translate,
            translate3,
        },
        vec::{Vec2, Vec3, Vec4, Vector, vec2, vec3, vec4},
    };

    pub use crate::geom::{Batch, Material, Normal3, TexCoord, uv};
    pub use crate::render::{Model, View, World};
}
