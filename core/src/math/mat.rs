//! Matrices and linear and affine transforms.
//!
//! Matrices are stored in row-major order and act on column vectors, so
//! `A * B` is the transform that applies `B` first and `A` second. The
//! builder functions at the bottom of this module return the transforms
//! a scene is assembled from: [`translate`], [`scale`], the rotations
//! [`rotate_x`], [`rotate_y`], and [`rotate_z`], and [`perspective`].

use core::array;
use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, AddAssign, Index, IndexMut, Mul};
#[cfg(feature = "fp")]
use core::ops::Range;

#[cfg(feature = "fp")]
use crate::math::angle::Angle;
use crate::math::approx::ApproxEq;
use crate::math::vec::{Vec3, Vector, vec3};

/// A square matrix of real elements.
///
/// `Repr` is the representation, an array of rows.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq)]
pub struct Matrix<Repr>(pub Repr);

/// A 2×2 matrix; the linear transforms of the plane.
pub type Mat2x2 = Matrix<[[f32; 2]; 2]>;
/// A 3×3 matrix; the linear transforms of 3-space.
pub type Mat3x3 = Matrix<[[f32; 3]; 3]>;
/// A 4×4 matrix; the affine and projective transforms of 3-space.
pub type Mat4x4 = Matrix<[[f32; 4]; 4]>;

impl<const N: usize> Matrix<[[f32; N]; N]> {
    /// Returns a matrix with the given rows.
    #[inline]
    pub const fn new(rows: [[f32; N]; N]) -> Self {
        Self(rows)
    }

    /// Returns the N×N identity matrix.
    ///
    /// # Examples
    /// ```
    /// # use launchpad_core::math::Mat2x2;
    /// assert_eq!(Mat2x2::identity().0, [[1.0, 0.0], [0.0, 1.0]]);
    /// ```
    pub const fn identity() -> Self {
        let mut els = [[0.0; N]; N];
        let mut i = 0;
        while i < N {
            els[i][i] = 1.0;
            i += 1;
        }
        Self(els)
    }

    /// Returns the `i`th row of `self` as a vector.
    ///
    /// # Panics
    /// If `i >= N`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<[f32; N]> {
        assert!(i < N, "row index {i} out of bounds for {N}x{N} matrix");
        Vector(self.0[i])
    }

    /// Returns the `j`th column of `self` as a vector.
    ///
    /// # Panics
    /// If `j >= N`.
    #[inline]
    pub fn col(&self, j: usize) -> Vector<[f32; N]> {
        assert!(j < N, "column index {j} out of bounds for {N}x{N} matrix");
        Vector(array::from_fn(|i| self.0[i][j]))
    }

    /// Returns the transpose of `self`, with rows and columns swapped.
    ///
    /// Only permutes elements, so `m.transpose().transpose() == m` exactly.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self(array::from_fn(|i| array::from_fn(|j| self.0[j][i])))
    }

    /// Returns the composite transform that applies `other` first and
    /// then `self`; that is, `self * other`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        *self * *other
    }

    /// Returns the composite transform that applies `self` first and
    /// then `other`; that is, `other * self`.
    ///
    /// Reads left to right, in the order the transforms take effect:
    /// ```
    /// # use launchpad_core::math::{scale3, translate3, vec3};
    /// let m = scale3(2.0, 2.0, 2.0).then(&translate3(1.0, 0.0, 0.0));
    /// let p = m.transform_point(&vec3(1.0, 1.0, 1.0));
    /// assert_eq!(p, vec3(3.0, 2.0, 2.0));
    /// ```
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        other.compose(self)
    }

    /// Applies `self` to the column vector `v`.
    #[inline]
    pub fn apply(&self, v: &Vector<[f32; N]>) -> Vector<[f32; N]> {
        Vector(array::from_fn(|i| self.row(i).dot(v)))
    }

    /// Returns whether every element of `self` is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().flatten().all(|e| e.is_finite())
    }
}

impl Mat4x4 {
    /// The 4×4 identity matrix, the transform that does nothing.
    pub const IDENTITY: Self = Self::identity();

    /// Returns the linear part of `self`, its upper-left 3×3 submatrix.
    ///
    /// Drops the translation column and the projective row.
    pub fn linear(&self) -> Mat3x3 {
        Matrix(array::from_fn(|i| array::from_fn(|j| self.0[i][j])))
    }

    /// Returns the determinant of `self`.
    ///
    /// Computed by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let [a, b, c, d] = self.0[0];

        let det3 = |j, k, l| {
            let [r, s, t] = [&self.0[1], &self.0[2], &self.0[3]];
            let [a, b, c] = [r[j], r[k], r[l]];
            let [d, e, f] = [s[j], s[k], s[l]];
            let [g, h, i] = [t[j], t[k], t[l]];

            a * (e * i - f * h) + b * (f * g - d * i) + c * (d * h - e * g)
        };

        a * det3(1, 2, 3) - b * det3(0, 2, 3) + c * det3(0, 1, 3)
            - d * det3(0, 1, 2)
    }

    /// Returns the inverse of `self`.
    ///
    /// The result is computed from the adjugate and the reciprocal of the
    /// determinant. No check is made: if `self` is singular, the
    /// determinant is zero and the result is full of infinities and NaNs.
    /// Use [`checked_inverse`][Self::checked_inverse] when `self` may be
    /// singular.
    ///
    /// # Examples
    /// ```
    /// # use launchpad_core::{assert_approx_eq, math::*};
    /// let m = translate3(1.0, 2.0, 3.0).then(&scale3(2.0, 4.0, 8.0));
    /// assert_approx_eq!(m * m.inverse(), Mat4x4::IDENTITY);
    /// ```
    #[must_use]
    pub fn inverse(&self) -> Self {
        let [
            [a00, a01, a02, a03],
            [a10, a11, a12, a13],
            [a20, a21, a22, a23],
            [a30, a31, a32, a33],
        ] = self.0;

        // 2×2 minors of the top two and bottom two rows
        let b00 = a00 * a11 - a01 * a10;
        let b01 = a00 * a12 - a02 * a10;
        let b02 = a00 * a13 - a03 * a10;
        let b03 = a01 * a12 - a02 * a11;
        let b04 = a01 * a13 - a03 * a11;
        let b05 = a02 * a13 - a03 * a12;
        let b06 = a20 * a31 - a21 * a30;
        let b07 = a20 * a32 - a22 * a30;
        let b08 = a20 * a33 - a23 * a30;
        let b09 = a21 * a32 - a22 * a31;
        let b10 = a21 * a33 - a23 * a31;
        let b11 = a22 * a33 - a23 * a32;

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07
            + b05 * b06;
        let r = 1.0 / det;

        Matrix([
            [
                (a11 * b11 - a12 * b10 + a13 * b09) * r,
                (a02 * b10 - a01 * b11 - a03 * b09) * r,
                (a31 * b05 - a32 * b04 + a33 * b03) * r,
                (a22 * b04 - a21 * b05 - a23 * b03) * r,
            ],
            [
                (a12 * b08 - a10 * b11 - a13 * b07) * r,
                (a00 * b11 - a02 * b08 + a03 * b07) * r,
                (a32 * b02 - a30 * b05 - a33 * b01) * r,
                (a20 * b05 - a22 * b02 + a23 * b01) * r,
            ],
            [
                (a10 * b10 - a11 * b08 + a13 * b06) * r,
                (a01 * b08 - a00 * b10 - a03 * b06) * r,
                (a30 * b04 - a31 * b02 + a33 * b00) * r,
                (a21 * b02 - a20 * b04 - a23 * b00) * r,
            ],
            [
                (a11 * b07 - a10 * b09 - a12 * b06) * r,
                (a00 * b09 - a01 * b07 + a02 * b06) * r,
                (a31 * b01 - a30 * b03 - a32 * b00) * r,
                (a20 * b03 - a21 * b01 + a22 * b00) * r,
            ],
        ])
    }

    /// Returns the inverse of `self`, or `None` if `self` is singular.
    ///
    /// A matrix whose determinant is zero, or whose inverse has
    /// non-finite elements, counts as singular.
    ///
    /// # Examples
    /// ```
    /// # use launchpad_core::math::*;
    /// assert!(scale3(1.0, 0.0, 1.0).checked_inverse().is_none());
    /// assert!(scale3(1.0, 2.0, 1.0).checked_inverse().is_some());
    /// ```
    pub fn checked_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(self.inverse()).filter(Self::is_finite)
    }

    /// Returns the matrix that transforms normals consistently with `self`.
    ///
    /// This is the linear part of the inverse-transpose of `self`. Unlike
    /// `self.linear()`, it keeps normals perpendicular to their surfaces
    /// under non-uniform scaling and shear. The result is generally not
    /// length-preserving, so transformed normals must be renormalized.
    pub fn normal_matrix(&self) -> Mat3x3 {
        self.inverse().transpose().linear()
    }

    /// Transforms the point `p` by `self`.
    ///
    /// `p` is extended to the homogeneous point `(x, y, z, 1)` and the
    /// result projected back to 3-space by dividing by its w component.
    /// For affine transforms w is always 1 and the division is exact.
    pub fn transform_point(&self, p: &Vec3) -> Vec3 {
        let v = self.apply(&p.to_homogeneous(1.0));
        v.xyz() / v.w()
    }
}

impl Mat3x3 {
    /// Returns the determinant of `self`.
    pub fn determinant(&self) -> f32 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        a * (e * i - f * h) + b * (f * g - d * i) + c * (d * h - e * g)
    }
}

impl Mat2x2 {
    /// Returns the determinant of `self`.
    pub fn determinant(&self) -> f32 {
        let [[a, b], [c, d]] = self.0;
        a * d - b * c
    }
}

//
// Trait impls
//

impl<const N: usize> Default for Matrix<[[f32; N]; N]> {
    /// Returns the identity matrix.
    fn default() -> Self {
        Self::identity()
    }
}

impl<const N: usize> Debug for Matrix<[[f32; N]; N]> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat{N}x{N}[")?;
        for row in &self.0 {
            writeln!(f, "    {row:6.2?}")?;
        }
        write!(f, "]")
    }
}

impl<const N: usize> From<[[f32; N]; N]> for Matrix<[[f32; N]; N]> {
    #[inline]
    fn from(rows: [[f32; N]; N]) -> Self {
        Self(rows)
    }
}

impl<const N: usize> Index<(usize, usize)> for Matrix<[[f32; N]; N]> {
    type Output = f32;

    /// Returns a reference to the element at row `i`, column `j`.
    ///
    /// # Panics
    /// If `i >= N` or `j >= N`.
    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f32 {
        assert!(
            i < N && j < N,
            "matrix index ({i}, {j}) out of bounds for {N}x{N} matrix"
        );
        &self.0[i][j]
    }
}

impl<const N: usize> IndexMut<(usize, usize)> for Matrix<[[f32; N]; N]> {
    /// Returns a mutable reference to the element at row `i`, column `j`.
    ///
    /// # Panics
    /// If `i >= N` or `j >= N`.
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f32 {
        assert!(
            i < N && j < N,
            "matrix index ({i}, {j}) out of bounds for {N}x{N} matrix"
        );
        &mut self.0[i][j]
    }
}

impl<const N: usize> ApproxEq for Matrix<[[f32; N]; N]> {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}

impl<const N: usize> AddAssign for Matrix<[[f32; N]; N]> {
    fn add_assign(&mut self, rhs: Self) {
        for (r, s) in self.0.iter_mut().zip(rhs.0) {
            for (a, b) in r.iter_mut().zip(s) {
                *a += b;
            }
        }
    }
}

impl_op!(Add::add, Matrix<[[f32; N]; N]>, Self, +=);

impl<const N: usize> Mul for Matrix<[[f32; N]; N]> {
    type Output = Self;

    /// Returns the matrix product `self * rhs`.
    ///
    /// Each element is summed over `k` in ascending order.
    fn mul(self, rhs: Self) -> Self {
        let mut els = [[0.0; N]; N];
        for i in 0..N {
            for j in 0..N {
                let mut sum = 0.0;
                for k in 0..N {
                    sum += self.0[i][k] * rhs.0[k][j];
                }
                els[i][j] = sum;
            }
        }
        Self(els)
    }
}

impl<const N: usize> Mul<Vector<[f32; N]>> for Matrix<[[f32; N]; N]> {
    type Output = Vector<[f32; N]>;

    /// Applies `self` to the column vector `rhs`.
    fn mul(self, rhs: Vector<[f32; N]>) -> Self::Output {
        self.apply(&rhs)
    }
}

//
// Transform builders
//

/// Returns a matrix that translates by the vector `t`.
///
/// The linear part is the identity; `t` is placed in the last column.
///
/// # Examples
/// ```
/// # use launchpad_core::math::*;
/// let m = translate(vec3(3.0, 5.0, 7.0));
/// assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(3.0, 5.0, 7.0, 1.0));
/// // Directions are unaffected
/// assert_eq!(m * vec4(1.0, 0.0, 0.0, 0.0), vec4(1.0, 0.0, 0.0, 0.0));
/// ```
pub const fn translate(t: Vec3) -> Mat4x4 {
    let [x, y, z] = t.0;
    Matrix([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix that translates by `(x, y, z)`.
pub const fn translate3(x: f32, y: f32, z: f32) -> Mat4x4 {
    translate(vec3(x, y, z))
}

/// Returns a matrix that scales each axis by the matching component
/// of `s`.
pub const fn scale(s: Vec3) -> Mat4x4 {
    let [x, y, z] = s.0;
    Matrix([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix that scales by `x`, `y`, and `z` along the
/// respective axes.
pub const fn scale3(x: f32, y: f32, z: f32) -> Mat4x4 {
    scale(vec3(x, y, z))
}

/// Returns a matrix that rotates by angle `a` about the x axis.
///
/// Positive angles turn y towards z.
#[cfg(feature = "fp")]
pub fn rotate_x(a: Angle) -> Mat4x4 {
    let (s, c) = a.sin_cos();
    Matrix([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix that rotates by angle `a` about the y axis.
///
/// Positive angles turn z towards x.
#[cfg(feature = "fp")]
pub fn rotate_y(a: Angle) -> Mat4x4 {
    let (s, c) = a.sin_cos();
    Matrix([
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix that rotates by angle `a` about the z axis.
///
/// Positive angles turn x towards y.
///
/// # Examples
/// ```
/// # use launchpad_core::{assert_approx_eq, math::*};
/// let m = rotate_z(degs(90.0));
/// assert_approx_eq!(m * vec4(1.0, 0.0, 0.0, 1.0), vec4(0.0, 1.0, 0.0, 1.0));
/// ```
#[cfg(feature = "fp")]
pub fn rotate_z(a: Angle) -> Mat4x4 {
    let (s, c) = a.sin_cos();
    Matrix([
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix that rotates 2-vectors counterclockwise by angle `a`.
#[cfg(feature = "fp")]
pub fn rotate2(a: Angle) -> Mat2x2 {
    let (s, c) = a.sin_cos();
    Matrix([[c, -s], [s, c]])
}

/// Returns an OpenGL-style perspective projection matrix.
///
/// The camera looks down the negative z axis. `fov_y` is the vertical
/// field of view and `aspect` the width-to-height ratio of the viewport.
/// Points at distances `near_far.start` and `near_far.end` in front of
/// the camera map to depths -1 and 1 after the perspective divide. The
/// last row is `(0, 0, -1, 0)` so that the resulting w equals -z.
///
/// # Panics
/// In debug builds, if `aspect <= 0` or unless `0 < near < far`.
///
/// # Examples
/// ```
/// # use launchpad_core::math::*;
/// let m = perspective(degs(60.0), 1200.0 / 720.0, 0.1..100.0);
/// assert_eq!(m.row(3), vec4(0.0, 0.0, -1.0, 0.0));
/// ```
#[cfg(feature = "fp")]
pub fn perspective(fov_y: Angle, aspect: f32, near_far: Range<f32>) -> Mat4x4 {
    let Range { start: n, end: f } = near_far;
    debug_assert!(aspect > 0.0, "aspect ratio must be positive: {aspect}");
    debug_assert!(
        0.0 < n && n < f,
        "clip planes must satisfy 0 < near < far: {n}..{f}"
    );

    let s = 1.0 / (fov_y / 2.0).tan();
    let z = -(f + n) / (f - n);
    let zw = -2.0 * f * n / (f - n);
    Matrix([
        [s / aspect, 0.0, 0.0, 0.0],
        [0.0, s, 0.0, 0.0],
        [0.0, 0.0, z, zw],
        [0.0, 0.0, -1.0, 0.0],
    ])
}
