//! Angular quantities.

use core::f32::consts::TAU;
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::math::approx::ApproxEq;

/// A scalar angular quantity.
///
/// Prevents confusion between degrees and radians by requiring the use of
/// one of the named constructors to create an `Angle`, as well as one of
/// the named getter methods to obtain the angle as a raw `f32` value.
///
/// The scene is authored in degrees and turns, while every matrix builder
/// works in radians; `Angle` converts exactly once, at construction.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle(f32);

const RADS_PER_DEG: f32 = TAU / 360.0;
const RADS_PER_TURN: f32 = TAU;

/// Returns an angle of `a` radians.
pub const fn rads(a: f32) -> Angle {
    Angle(a)
}

/// Returns an angle of `a` degrees.
///
/// # Examples
/// ```
/// # use launchpad_core::{assert_approx_eq, math::{degs, turns}};
/// assert_approx_eq!(degs(180.0), turns(0.5));
/// ```
pub const fn degs(a: f32) -> Angle {
    Angle(a * RADS_PER_DEG)
}

/// Returns an angle of `a` turns.
pub const fn turns(a: f32) -> Angle {
    Angle(a * RADS_PER_TURN)
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Self = Self(0.0);
    /// A right angle, 90°.
    pub const RIGHT: Self = Self(RADS_PER_TURN / 4.0);
    /// A straight angle, 180°.
    pub const STRAIGHT: Self = Self(RADS_PER_TURN / 2.0);
    /// A full angle, 360°.
    pub const FULL: Self = Self(RADS_PER_TURN);

    /// Returns the value of `self` in radians.
    pub const fn to_rads(self) -> f32 {
        self.0
    }
    /// Returns the value of `self` in degrees.
    pub fn to_degs(self) -> f32 {
        self.0 / RADS_PER_DEG
    }
    /// Returns the value of `self` in turns.
    pub fn to_turns(self) -> f32 {
        self.0 / RADS_PER_TURN
    }

    /// Returns `self` clamped to the range `min..=max`.
    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(self.0.clamp(min.0, max.0))
    }

    /// Returns `self` wrapped to the range `0..FULL` by subtracting
    /// one full turn once it reaches or exceeds a full turn.
    ///
    /// Only a single turn is subtracted, so callers advancing by small
    /// steps stay in range.
    #[must_use]
    pub fn wrap_once(self) -> Self {
        if self.0 >= RADS_PER_TURN {
            Self(self.0 - RADS_PER_TURN)
        } else {
            self
        }
    }
}

#[cfg(feature = "fp")]
impl Angle {
    /// Returns the sine of `self`.
    pub fn sin(self) -> f32 {
        use super::float::f32;
        f32::sin(self.0)
    }
    /// Returns the cosine of `self`.
    pub fn cos(self) -> f32 {
        use super::float::f32;
        f32::cos(self.0)
    }
    /// Returns the tangent of `self`.
    pub fn tan(self) -> f32 {
        use super::float::f32;
        f32::tan(self.0)
    }
    /// Returns the sine and cosine of `self`, in that order.
    pub fn sin_cos(self) -> (f32, f32) {
        (self.sin(), self.cos())
    }
}

impl Debug for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} rad", self.0)
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.to_degs())
    }
}

impl ApproxEq for Angle {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}
impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}
impl Mul<f32> for Angle {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}
impl Mul<Angle> for f32 {
    type Output = Angle;
    fn mul(self, rhs: Angle) -> Angle {
        Angle(self * rhs.0)
    }
}
impl Div<f32> for Angle {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self(self.0 / rhs)
    }
}
