//! Per-frame rendering parameters.
//!
//! The renderer itself lives outside this crate. This module provides
//! what it consumes every frame: the [camera][cam] matrices and the
//! [light sources][light], together with the coordinate basis tags that
//! track which space a [batch][crate::geom::Batch] is in.

pub use cam::{Camera, Motion, Orbit, Projection, Transform};
pub use light::{Attenuation, PointLight};

pub mod cam;
pub mod light;

/// Model space coordinate basis.
///
/// Vertices of a freshly generated or loaded mesh, before pre-transform.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Model;

/// World space coordinate basis.
///
/// The common space of every batch after pre-transform.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct World;

/// View (camera) space coordinate basis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct View;
