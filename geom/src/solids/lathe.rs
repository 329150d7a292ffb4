//! Surfaces of revolution about the x axis: cylinders and cones.

use core::f32::consts::FRAC_1_SQRT_2;

use lp::geom::{Batch, Material, TexCoord, uv};
use lp::math::{Angle, Vec2, turns, vec2, vec3};
use lp::render::Model;

use super::Build;

/// A cylinder of radius 1 along the x axis, from x = 0 to x = 1.
///
/// The round surface is approximated by `subdivs` flat segments of two
/// triangles each. Shell normals point radially outward and are smooth
/// across segments. If `capped`, both ends are closed with triangle fans
/// whose normals point along -x and +x respectively.
///
/// Texture coordinates are all (1, 1), so the cylinder samples a single
/// texel of whatever texture is bound.
#[derive(Copy, Clone, Debug)]
pub struct Cylinder {
    /// Number of segments around the circumference.
    pub subdivs: u32,
    /// Whether to close the ends.
    pub capped: bool,
}

/// A cone along the x axis with its base of radius 1 at x = 0 and its
/// apex at x = 1.
///
/// The slanted surface is approximated by `subdivs` triangles meeting at
/// the apex. Side normals are perpendicular to the slant, tilted 45°
/// towards +x. If `capped`, the base is closed with a triangle fan facing
/// -x.
///
/// Texture coordinates are all (1, 1).
#[derive(Copy, Clone, Debug)]
pub struct Cone {
    /// Number of segments around the circumference.
    pub subdivs: u32,
    /// Whether to close the base.
    pub capped: bool,
}

const TEX: TexCoord = uv(1.0, 1.0);

/// Returns the (y, z) coordinates of the start and end of each of `n`
/// arcs dividing the unit circle, counterclockwise from (1, 0), together
/// with the angle at the middle of each arc.
fn arcs(n: u32) -> impl Iterator<Item = (Vec2, Vec2, Angle)> {
    let at = move |i: u32| turns(i as f32 / n as f32);
    let yz = |a: Angle| vec2(a.cos(), a.sin());
    (0..n).map(move |i| {
        let (prev, cur) = (at(i), at(i + 1));
        (yz(prev), yz(cur), (prev + cur) / 2.0)
    })
}

impl Build for Cylinder {
    fn build_model(&self, mat: &Material) -> Batch<Model> {
        let [neg_x, pos_x] = [vec3(-1.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0)];
        let mut b = Batch::builder();

        for (prev, cur, _) in arcs(self.subdivs) {
            let at = |x, yz: Vec2| vec3(x, yz.x(), yz.y());
            let radial = |yz| at(0.0, yz);

            if self.capped {
                b.push_tex(at(0.0, prev), neg_x, TEX);
                b.push_tex(vec3(0.0, 0.0, 0.0), neg_x, TEX);
                b.push_tex(at(0.0, cur), neg_x, TEX);
            }

            b.push_tex(at(0.0, prev), radial(prev), TEX);
            b.push_tex(at(0.0, cur), radial(cur), TEX);
            b.push_tex(at(1.0, prev), radial(prev), TEX);

            b.push_tex(at(0.0, cur), radial(cur), TEX);
            b.push_tex(at(1.0, cur), radial(cur), TEX);
            b.push_tex(at(1.0, prev), radial(prev), TEX);

            if self.capped {
                b.push_tex(at(1.0, cur), pos_x, TEX);
                b.push_tex(vec3(1.0, 0.0, 0.0), pos_x, TEX);
                b.push_tex(at(1.0, prev), pos_x, TEX);
            }
        }
        b.build(mat)
    }
}

impl Build for Cone {
    fn build_model(&self, mat: &Material) -> Batch<Model> {
        let neg_x = vec3(-1.0, 0.0, 0.0);
        let apex = vec3(1.0, 0.0, 0.0);
        let mut b = Batch::builder();

        for (prev, cur, mid) in arcs(self.subdivs) {
            let at = |yz: Vec2| vec3(0.0, yz.x(), yz.y());
            let slant = |yz: Vec2| FRAC_1_SQRT_2 * vec3(1.0, yz.x(), yz.y());

            if self.capped {
                b.push_tex(at(prev), neg_x, TEX);
                b.push_tex(vec3(0.0, 0.0, 0.0), neg_x, TEX);
                b.push_tex(at(cur), neg_x, TEX);
            }

            b.push_tex(at(prev), slant(prev), TEX);
            b.push_tex(at(cur), slant(cur), TEX);
            b.push_tex(apex, slant(vec2(mid.cos(), mid.sin())), TEX);
        }
        b.build(mat)
    }
}
