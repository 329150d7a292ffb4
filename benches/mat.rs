//! Matrix operation benchmarks.

use divan::{Bencher, black_box};

use lp::math::{
    Mat4x4, degs, perspective, rotate_x, rotate_y, scale3, translate3,
};

fn view_matrix() -> Mat4x4 {
    rotate_x(degs(20.0))
        * rotate_y(degs(-35.0))
        * translate3(-3.5, -1.07, -22.29)
}

#[divan::bench]
fn mul(b: Bencher) {
    let m = view_matrix();
    let p = perspective(degs(60.0), 1200.0 / 720.0, 0.1..100.0);
    b.bench_local(|| black_box(p) * black_box(m));
}

#[divan::bench]
fn inverse(b: Bencher) {
    let m = view_matrix() * scale3(0.2, 0.1, 0.1);
    b.bench_local(|| black_box(m).inverse());
}

#[divan::bench]
fn checked_inverse(b: Bencher) {
    let m = view_matrix() * scale3(0.2, 0.1, 0.1);
    b.bench_local(|| black_box(m).checked_inverse());
}

#[divan::bench]
fn normal_matrix(b: Bencher) {
    let m = view_matrix() * scale3(0.2, 0.1, 0.1);
    b.bench_local(|| black_box(m).normal_matrix());
}

#[divan::bench]
fn determinant(b: Bencher) {
    let m = view_matrix();
    b.bench_local(|| black_box(m).determinant());
}

fn main() {
    divan::main()
}
