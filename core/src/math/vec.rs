//! Real vectors.
//!
//! [`Vec2`], [`Vec3`], and [`Vec4`] are all aliases of the one generic
//! [`Vector`] type, so every componentwise operation is written once.

use core::array;
use core::fmt::{self, Debug, Formatter};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg,
    Sub, SubAssign,
};

use crate::math::approx::ApproxEq;

/// A vector of real components, represented as an array.
///
/// Vectors are immutable values: every operator returns a new vector,
/// except the op-assign forms (`+=`, `-=`, `*=`, `/=`) which update the
/// left operand in place.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Vector<Repr>(pub Repr);

/// A 2-vector with `f32` components.
pub type Vec2 = Vector<[f32; 2]>;
/// A 3-vector with `f32` components.
pub type Vec3 = Vector<[f32; 3]>;
/// A 4-vector with `f32` components.
///
/// Used for homogeneous coordinates; see [`Vec3::to_homogeneous`].
pub type Vec4 = Vector<[f32; 4]>;

/// Returns a 2-vector with components `x` and `y`.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vector([x, y])
}

/// Returns a 3-vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vector([x, y, z])
}

/// Returns a 4-vector with components `x`, `y`, `z`, and `w`.
#[inline]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    Vector([x, y, z, w])
}

impl<const N: usize> Vector<[f32; N]> {
    /// Returns a vector with all components zero.
    #[inline]
    pub const fn zero() -> Self {
        Self([0.0; N])
    }

    /// Returns a vector with all components equal to `s`.
    #[inline]
    pub const fn splat(s: f32) -> Self {
        Self([s; N])
    }

    /// Returns a vector whose components are `f` applied to the
    /// components of `self`.
    #[inline]
    #[must_use]
    pub fn map(self, f: impl FnMut(f32) -> f32) -> Self {
        Self(self.0.map(f))
    }

    /// Returns a vector whose components are `f` applied to each pair
    /// of corresponding components of `self` and `other`.
    #[inline]
    #[must_use]
    pub fn zip_map(
        self,
        other: Self,
        mut f: impl FnMut(f32, f32) -> f32,
    ) -> Self {
        Self(array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    /// Returns the dot product of `self` and `other`.
    ///
    /// The products are summed in index order.
    ///
    /// # Examples
    /// ```
    /// # use launchpad_core::math::vec3;
    /// assert_eq!(vec3(1.0, 2.0, 3.0).dot(&vec3(4.0, -5.0, 6.0)), 12.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        let mut res = 0.0;
        for i in 0..N {
            res += self.0[i] * other.0[i];
        }
        res
    }

    /// Returns the squared Euclidean length of `self`.
    ///
    /// Unlike [`len`][Self::len], does not require a square root.
    #[inline]
    pub fn len_sqr(&self) -> f32 {
        self.dot(self)
    }

    /// Returns the Euclidean length of `self`, `sqrt(self · self)`.
    #[cfg(feature = "fp")]
    #[inline]
    pub fn len(&self) -> f32 {
        use super::float::f32;
        f32::sqrt(self.len_sqr())
    }

    /// Returns `self` divided by its length.
    ///
    /// The zero vector has no direction: normalizing it divides by zero
    /// and every component of the result is NaN. No check is made.
    ///
    /// # Examples
    /// ```
    /// # use launchpad_core::math::vec3;
    /// assert_eq!(vec3(0.0, 3.0, 4.0).normalize(), vec3(0.0, 0.6, 0.8));
    /// assert!(vec3(0.0, 0.0, 0.0).normalize().x().is_nan());
    /// ```
    #[cfg(feature = "fp")]
    #[inline]
    #[must_use]
    pub fn normalize(&self) -> Self {
        *self / self.len()
    }

    /// Returns whether every component of `self` is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl Vec2 {
    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
}

impl Vec3 {
    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }

    /// Returns the cross product of `self` and `other`.
    ///
    /// The result is orthogonal to both operands and follows the
    /// right-hand rule: x × y = z.
    ///
    /// # Examples
    /// ```
    /// # use launchpad_core::math::vec3;
    /// let x = vec3(1.0, 0.0, 0.0);
    /// let y = vec3(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(&y), vec3(0.0, 0.0, 1.0));
    /// assert_eq!(y.cross(&x), vec3(0.0, 0.0, -1.0));
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let [a, b] = [self, other];
        let x = a.y() * b.z() - a.z() * b.y();
        let y = -(a.x() * b.z() - a.z() * b.x());
        let z = a.x() * b.y() - a.y() * b.x();
        vec3(x, y, z)
    }

    /// Reflects `self` about the plane whose normal is `normal`.
    ///
    /// Computes `self - 2 (self · normal) normal`. `normal` should have
    /// unit length; it is not renormalized.
    ///
    /// # Examples
    /// ```
    /// # use launchpad_core::math::vec3;
    /// let down_right = vec3(1.0, -1.0, 0.0);
    /// let up = vec3(0.0, 1.0, 0.0);
    /// assert_eq!(down_right.reflect(&up), vec3(1.0, 1.0, 0.0));
    /// ```
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - 2.0 * self.dot(normal) * *normal
    }

    /// Returns the homogeneous 4-vector `(x, y, z, w)`.
    ///
    /// Use `w = 1` for points and `w = 0` for directions.
    #[inline]
    pub const fn to_homogeneous(&self, w: f32) -> Vec4 {
        vec4(self.0[0], self.0[1], self.0[2], w)
    }
}

impl Vec4 {
    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.0[2]
    }
    /// Returns the w component of `self`.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.0[3]
    }
    /// Returns the x, y, and z components of `self`, dropping w.
    #[inline]
    pub const fn xyz(&self) -> Vec3 {
        vec3(self.0[0], self.0[1], self.0[2])
    }
}

//
// Trait impls
//

impl<const N: usize> Debug for Vector<[f32; N]> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{N}{:?}", self.0)
    }
}

impl<const N: usize> From<[f32; N]> for Vector<[f32; N]> {
    #[inline]
    fn from(els: [f32; N]) -> Self {
        Self(els)
    }
}

impl<const N: usize> From<Vector<[f32; N]>> for [f32; N] {
    #[inline]
    fn from(v: Vector<[f32; N]>) -> Self {
        v.0
    }
}

impl<const N: usize> Index<usize> for Vector<[f32; N]> {
    type Output = f32;

    /// Returns a reference to the `i`th component of `self`.
    ///
    /// # Panics
    /// If `i >= N`.
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        assert!(i < N, "vector index {i} out of bounds for Vec{N}");
        &self.0[i]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<[f32; N]> {
    /// Returns a mutable reference to the `i`th component of `self`.
    ///
    /// # Panics
    /// If `i >= N`.
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        assert!(i < N, "vector index {i} out of bounds for Vec{N}");
        &mut self.0[i]
    }
}

impl<const N: usize> ApproxEq for Vector<[f32; N]> {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}

impl<const N: usize> AddAssign for Vector<[f32; N]> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.0[i] += rhs.0[i];
        }
    }
}

impl<const N: usize> SubAssign for Vector<[f32; N]> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.0[i] -= rhs.0[i];
        }
    }
}

impl<const N: usize> MulAssign<f32> for Vector<[f32; N]> {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        for c in &mut self.0 {
            *c *= rhs;
        }
    }
}

impl<const N: usize> DivAssign<f32> for Vector<[f32; N]> {
    /// Divides every component of `self` by `rhs`.
    ///
    /// Each component is divided separately rather than multiplied by the
    /// reciprocal, so that results are correctly rounded.
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        for c in &mut self.0 {
            *c /= rhs;
        }
    }
}

impl<const N: usize> Neg for Vector<[f32; N]> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<const N: usize> Mul<Vector<[f32; N]>> for f32 {
    type Output = Vector<[f32; N]>;
    #[inline]
    fn mul(self, rhs: Vector<[f32; N]>) -> Self::Output {
        rhs.map(|c| self * c)
    }
}

impl_op!(Add::add, Vector<[f32; N]>, Self, +=);
impl_op!(Sub::sub, Vector<[f32; N]>, Self, -=);
impl_op!(Mul::mul, Vector<[f32; N]>, f32, *=);
impl_op!(Div::div, Vector<[f32; N]>, f32, /=);
