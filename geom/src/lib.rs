//! Mesh generators for `launchpad` scenes.
//!
//! Provides the procedural [solids] a scene is built from and, with the
//! `std` feature, a loader for [Wavefront OBJ][io] files. Every generator
//! takes a material and a pre-transform and returns a world-space
//! [`Batch`][lp::geom::Batch], ready to be concatenated with others or
//! handed to a renderer.
//!
//! # Crate features
//!
//! * `std`: Enables the OBJ loader and uses the standard library for
//!   floating-point functions. Enabled by default.
//!
//! * `libm`, `mm`: Select the floating-point backend of `launchpad-core`
//!   for `no_std` builds. At least one of the three must be enabled.

#![no_std]

#[cfg(not(any(feature = "std", feature = "libm", feature = "mm")))]
compile_error!(
    "launchpad-geom needs a floating-point backend: \
     enable one of the `std`, `libm`, or `mm` features"
);

extern crate alloc;
extern crate core;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod io;
pub mod solids;
