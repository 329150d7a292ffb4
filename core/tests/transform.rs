use core::f32::consts::{FRAC_PI_2, PI};

use launchpad_core::assert_approx_eq;
use launchpad_core::geom::Builder;
use launchpad_core::prelude::*;

/// A unit square in the xz plane, as two triangles facing +y.
fn square(b: &mut Builder) {
    let n = vec3(0.0, 1.0, 0.0);
    let [a, c, d, e] = [
        vec3(-1.0, 0.0, -1.0),
        vec3(1.0, 0.0, -1.0),
        vec3(1.0, 0.0, 1.0),
        vec3(-1.0, 0.0, 1.0),
    ];
    for (p, tc) in [(a, uv(0.0, 0.0)), (c, uv(1.0, 0.0)), (d, uv(1.0, 1.0))] {
        b.push_tex(p, n, tc);
    }
    for (p, tc) in [(a, uv(0.0, 0.0)), (d, uv(1.0, 1.0)), (e, uv(0.0, 1.0))] {
        b.push_tex(p, n, tc);
    }
}

#[test]
fn identity_laws() {
    let v = vec4(1.5, -2.0, 1e-3, 7.0);
    assert_eq!(v + -v, Vec4::zero());

    let m = rotate_x(degs(12.0)).then(&translate3(1.0, 2.0, 3.0));
    assert_eq!(m * Mat4x4::IDENTITY, m);
    assert_eq!(Mat4x4::IDENTITY * m, m);
}

#[test]
fn inverse_law_for_rigid_and_scaling_transforms() {
    let transforms = [
        rotate_z(rads(FRAC_PI_2)),
        translate3(3.0, 5.0, 7.0),
        scale3(0.1, 0.02, 0.02),
        rotate_z(degs(45.0))
            * scale3(0.115, 0.02, 0.02)
            * translate3(0.3, 1.7, 0.0),
        scale3(0.005, 0.005, 0.005)
            * rotate_x(rads(-FRAC_PI_2))
            * translate3(750.0, -400.0, 600.0),
    ];
    for m in transforms {
        assert_approx_eq!(
            m * m.inverse(),
            Mat4x4::IDENTITY,
            eps = 1e-4,
            "M * M^-1 != I for {m:?}"
        );
    }
}

#[test]
fn scenario_rotate_z() {
    let v = rotate_z(rads(PI / 2.0)) * vec4(1.0, 0.0, 0.0, 1.0);
    assert_approx_eq!(v, vec4(0.0, 1.0, 0.0, 1.0));
}

#[test]
fn scenario_translate() {
    let v = translate(vec3(3.0, 5.0, 7.0)) * vec4(0.0, 0.0, 0.0, 1.0);
    assert_eq!(v, vec4(3.0, 5.0, 7.0, 1.0));
}

#[test]
fn scenario_perspective() {
    let m = perspective(rads(PI / 3.0), 1200.0 / 720.0, 0.1..100.0);
    assert_eq!(m[(3, 2)], -1.0);
    assert_eq!(m[(3, 3)], 0.0);
    assert_approx_eq!(m[(0, 0)], m[(1, 1)] * (720.0 / 1200.0));
}

#[test]
fn scenario_concatenation() {
    let mut b = Batch::builder();
    for _ in 0..6 {
        square(&mut b);
    }
    let big = b
        .build(&Material::default())
        .pre_transform(&scale3(2.0, 2.0, 2.0));

    let mut b = Batch::builder();
    square(&mut b);
    let small = b
        .build(&Material::gray(0.0, 0.01, 0.5, 50.0))
        .pre_transform(&translate3(0.0, 1.0, 5.01));

    assert_eq!(big.len(), 36);
    assert_eq!(small.len(), 6);

    let both = Batch::concat([big.clone(), small.clone()]);
    assert_eq!(both.len(), 42);

    let bits = |v: Vec3| v.0.map(f32::to_bits);
    for i in 0..42 {
        let (src, j) = if i < 36 { (&big, i) } else { (&small, i - 36) };
        assert_eq!(bits(both.positions[i]), bits(src.positions[j]));
        assert_eq!(bits(both.normals[i]), bits(src.normals[j]));
        assert_eq!(both.texcoords[i], src.texcoords[j]);
        assert_eq!(both.materials.get(i), src.materials.get(j));
    }
}

#[test]
fn affine_pre_transform_keeps_w_at_one() {
    let tf = rotate_y(degs(270.0))
        .then(&scale3(0.06, 0.02, 0.02))
        .then(&translate3(0.0, 5.7, 3.3));
    let p = vec3(0.5, -1.0, 2.0);

    let h = tf * p.to_homogeneous(1.0);
    assert_eq!(h.w(), 1.0);

    let mut pos = [p];
    pre_transform(&mut pos, &mut [], &tf);
    assert_approx_eq!(pos[0], tf.linear() * p + vec3(0.0, 5.7, 3.3));
}

#[test]
fn projective_pre_transform_divides_by_w() {
    let proj = perspective(degs(90.0), 1.0, 1.0..10.0);
    let mut pos = [vec3(1.0, 1.0, -2.0)];
    pre_transform(&mut pos, &mut [], &proj);
    assert_approx_eq!(pos[0].x(), 0.5);
    assert_approx_eq!(pos[0].y(), 0.5);
}

#[test]
fn normals_are_unit_after_nonuniform_scale() {
    let tf = scale3(2.0, 1.0, 1.0);

    // Before renormalization the normal matrix yields (0.5, 0, 0)
    let n = tf.normal_matrix() * vec3(1.0, 0.0, 0.0);
    assert_approx_eq!(n, vec3(0.5, 0.0, 0.0));

    let mut b = Batch::builder();
    b.push(vec3(1.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0));
    b.push(vec3(0.0, 1.0, 0.0), vec3(0.0, 1.0, 0.0));
    b.push(vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 1.0).normalize());
    let w = b.build(&Material::default()).pre_transform(&tf);

    for n in &w.normals {
        assert_approx_eq!(n.len(), 1.0);
    }
    assert_approx_eq!(w.normals[0], vec3(1.0, 0.0, 0.0));
    assert_approx_eq!(w.normals[2], vec3(0.5, 1.0, 1.0).normalize());
}

#[test]
fn checked_inverse_rejects_singular() {
    assert!(scale3(0.0, 1.0, 1.0).checked_inverse().is_none());
    assert!(!scale3(0.0, 1.0, 1.0).inverse().is_finite());

    let m = rotate_y(degs(33.0)).then(&translate3(1.0, 1.0, 1.0));
    assert_approx_eq!(m.checked_inverse(), Some(m.inverse()));
}
