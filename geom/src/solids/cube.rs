//! Axis-aligned cubes and flat textured quads.

use lp::geom::{Batch, Material, Normal3, TexCoord, uv};
use lp::math::{Vec3, vec3};
use lp::render::Model;

use super::Build;

/// A cube centered at the origin, with flat-shaded, textured faces.
///
/// Each of the six faces is made of two triangles that do not share
/// vertices with other faces, for a total of 36 vertices. Faces are in
/// the order +y, +z, -x, -y, +x, -z, and every face maps the whole
/// texture, with u increasing along the first and v along the second
/// of its tangent axes.
#[derive(Copy, Clone, Debug)]
pub struct Cube {
    /// Half the side length; the distance from the center to each face.
    pub half_size: f32,
}

/// A flat square in the xy plane, centered at the origin and facing +z.
///
/// Made of two triangles and six vertices, with texture coordinates
/// spanning the whole texture. Used as a screen or decal laid on top of
/// another surface.
#[derive(Copy, Clone, Debug)]
pub struct Quad {
    /// Half the side length.
    pub half_size: f32,
}

/// Texture coordinates of the six vertices of each face.
const FACE_UVS: [TexCoord; 6] = [
    uv(1.0, 1.0),
    uv(0.0, 1.0),
    uv(0.0, 0.0),
    uv(1.0, 1.0),
    uv(0.0, 0.0),
    uv(1.0, 0.0),
];

impl Cube {
    const FACES: [(Normal3, [Vec3; 6]); 6] = [
        // +y
        (
            vec3(0.0, 1.0, 0.0),
            [
                vec3(1.0, 1.0, -1.0),
                vec3(-1.0, 1.0, -1.0),
                vec3(-1.0, 1.0, 1.0),
                vec3(1.0, 1.0, -1.0),
                vec3(-1.0, 1.0, 1.0),
                vec3(1.0, 1.0, 1.0),
            ],
        ),
        // +z
        (
            vec3(0.0, 0.0, 1.0),
            [
                vec3(1.0, -1.0, 1.0),
                vec3(1.0, 1.0, 1.0),
                vec3(-1.0, 1.0, 1.0),
                vec3(1.0, -1.0, 1.0),
                vec3(-1.0, 1.0, 1.0),
                vec3(-1.0, -1.0, 1.0),
            ],
        ),
        // -x
        (
            vec3(-1.0, 0.0, 0.0),
            [
                vec3(-1.0, -1.0, 1.0),
                vec3(-1.0, 1.0, 1.0),
                vec3(-1.0, 1.0, -1.0),
                vec3(-1.0, -1.0, 1.0),
                vec3(-1.0, 1.0, -1.0),
                vec3(-1.0, -1.0, -1.0),
            ],
        ),
        // -y
        (
            vec3(0.0, -1.0, 0.0),
            [
                vec3(-1.0, -1.0, -1.0),
                vec3(1.0, -1.0, -1.0),
                vec3(1.0, -1.0, 1.0),
                vec3(-1.0, -1.0, -1.0),
                vec3(1.0, -1.0, 1.0),
                vec3(-1.0, -1.0, 1.0),
            ],
        ),
        // +x
        (
            vec3(1.0, 0.0, 0.0),
            [
                vec3(1.0, -1.0, -1.0),
                vec3(1.0, 1.0, -1.0),
                vec3(1.0, 1.0, 1.0),
                vec3(1.0, -1.0, -1.0),
                vec3(1.0, 1.0, 1.0),
                vec3(1.0, -1.0, 1.0),
            ],
        ),
        // -z
        (
            vec3(0.0, 0.0, -1.0),
            [
                vec3(-1.0, -1.0, -1.0),
                vec3(-1.0, 1.0, -1.0),
                vec3(1.0, 1.0, -1.0),
                vec3(-1.0, -1.0, -1.0),
                vec3(1.0, 1.0, -1.0),
                vec3(1.0, -1.0, -1.0),
            ],
        ),
    ];
}

impl Build for Cube {
    fn build_model(&self, mat: &Material) -> Batch<Model> {
        let mut b = Batch::builder();
        for (n, corners) in Self::FACES {
            for (c, tc) in corners.into_iter().zip(FACE_UVS) {
                b.push_tex(self.half_size * c, n, tc);
            }
        }
        b.build(mat)
    }
}

impl Quad {
    const CORNERS: [Vec3; 6] = [
        vec3(1.0, 1.0, 0.0),
        vec3(-1.0, 1.0, 0.0),
        vec3(-1.0, -1.0, 0.0),
        vec3(1.0, 1.0, 0.0),
        vec3(-1.0, -1.0, 0.0),
        vec3(1.0, -1.0, 0.0),
    ];
}

impl Build for Quad {
    fn build_model(&self, mat: &Material) -> Batch<Model> {
        let n = vec3(0.0, 0.0, 1.0);
        let mut b = Batch::builder();
        for (c, tc) in Self::CORNERS.into_iter().zip(FACE_UVS) {
            b.push_tex(self.half_size * c, n, tc);
        }
        b.build(mat)
    }
}

#[cfg(test)]
mod tests {
    use lp::assert_approx_eq;
    use lp::math::{scale3, translate3};

    use super::*;

    /// Asserts that every triangle winds counterclockwise about its normal.
    fn assert_ccw<B>(b: &Batch<B>) {
        for (ps, ns) in b.positions.chunks(3).zip(b.normals.chunks(3)) {
            let [p0, p1, p2] = [ps[0], ps[1], ps[2]];
            let face_n = (p1 - p0).cross(&(p2 - p0)).normalize();
            for n in ns {
                assert_approx_eq!(face_n, *n, "triangle {ps:?}");
            }
        }
    }

    #[test]
    fn cube_has_six_two_triangle_faces() {
        let c = Cube { half_size: 1.0 }.build_model(&Material::DEFAULT);
        assert_eq!(c.len(), 36);
        assert_eq!(c.texcoords.len(), 36);
        assert_eq!(c.materials.len(), 36);

        let face_normals: [_; 6] = core::array::from_fn(|i| c.normals[6 * i]);
        assert_eq!(
            face_normals,
            [
                vec3(0.0, 1.0, 0.0),
                vec3(0.0, 0.0, 1.0),
                vec3(-1.0, 0.0, 0.0),
                vec3(0.0, -1.0, 0.0),
                vec3(1.0, 0.0, 0.0),
                vec3(0.0, 0.0, -1.0),
            ]
        );
        assert_ccw(&c);
    }

    #[test]
    fn cube_vertices_lie_on_faces() {
        let c = Cube { half_size: 0.5 }.build_model(&Material::DEFAULT);
        for (p, n) in c.positions.iter().zip(&c.normals) {
            assert!(p.0.iter().all(|x| x.abs() == 0.5));
            assert_eq!(p.dot(n), 0.5);
        }
        assert_eq!(&c.texcoords[..6], &FACE_UVS);
    }

    #[test]
    fn cube_pre_transform() {
        let tf = scale3(0.1, 0.07, 0.02).then(&translate3(-1.2, 1.7, 4.0));
        let c = Cube { half_size: 1.0 }.build(&Material::DEFAULT, &tf);

        assert_eq!(c.len(), 36);
        assert_approx_eq!(c.positions[0], vec3(-1.1, 1.77, 3.98));
        for n in &c.normals {
            assert_approx_eq!(n.len(), 1.0);
        }
        assert_approx_eq!(c.normals[6], vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn quad_is_flat_and_faces_z() {
        let q = Quad { half_size: 2.0 }.build_model(&Material::DEFAULT);
        assert_eq!(q.len(), 6);
        assert!(q.positions.iter().all(|p| p.z() == 0.0));
        assert!(q.normals.iter().all(|n| *n == vec3(0.0, 0.0, 1.0)));
        assert_eq!(q.texcoords[2], uv(0.0, 0.0));
        assert_eq!(q.positions[2], vec3(-2.0, -2.0, 0.0));
        assert_ccw(&q);
    }
}
