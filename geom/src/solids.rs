//! Mesh approximations of various geometric shapes.

use lp::geom::{Batch, Material};
use lp::math::Mat4x4;
use lp::render::{Model, World};

mod cube;
mod lathe;

pub use cube::*;
pub use lathe::*;

/// Trait for shapes that can be turned into vertex batches.
pub trait Build {
    /// Returns the shape as a model-space batch painted with `mat`.
    fn build_model(&self, mat: &Material) -> Batch<Model>;

    /// Returns the shape painted with `mat` and placed into world space
    /// by the pre-transform `tf`.
    fn build(&self, mat: &Material, tf: &Mat4x4) -> Batch<World> {
        self.build_model(mat).pre_transform(tf)
    }
}
