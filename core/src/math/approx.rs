//! Approximate equality of floating-point values.

use core::iter::zip;

/// Trait for comparing values for approximate equality.
///
/// Matrix products, inverses and trigonometric functions all accumulate
/// rounding error, so results that are equal in exact arithmetic seldom
/// compare equal as `f32`s. For example, `rotate_z(rads(PI / 2.0))` has a
/// cosine entry of about -4.4e-8 rather than zero.
///
/// Two values are considered approximately equal if their difference is at
/// most `eps` times the magnitude of `self`, or `eps` itself if the magnitude
/// is less than one. Non-finite values are never approximately equal to
/// anything, not even themselves.
pub trait ApproxEq<Other: ?Sized = Self> {
    /// Returns whether `self` and `other` are approximately equal,
    /// using [the default epsilon][Self::default_epsilon].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, Self::default_epsilon())
    }

    /// Returns whether `self` and `other` are approximately equal,
    /// using the relative epsilon `eps`.
    fn approx_eq_eps(&self, other: &Other, eps: f32) -> bool;

    /// Returns the default relative epsilon of `Self`.
    fn default_epsilon() -> f32 {
        if cfg!(feature = "mm") { 1e-3 } else { 1e-6 }
    }
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        let diff = (self - other).abs();
        diff <= eps * self.abs().max(1.0)
    }
}

impl<T: ApproxEq> ApproxEq for [T] {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.len() == other.len()
            && zip(self, other).all(|(s, o)| s.approx_eq_eps(o, eps))
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.as_slice().approx_eq_eps(other.as_slice(), eps)
    }
}

impl<T: ApproxEq> ApproxEq for Option<T> {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        match (self, other) {
            (Some(s), Some(o)) => s.approx_eq_eps(o, eps),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Asserts that two values are approximately equal.
///
/// Requires that the left operand has an applicable [`ApproxEq`] impl
/// and that both operands impl `Debug` unless a custom message is given.
///
/// # Panics
///
/// If the given values are not approximately equal.
///
/// # Examples
/// ```
/// # use launchpad_core::assert_approx_eq;
/// assert_ne!(1.0_f32, 1.0000001);
/// assert_approx_eq!(1.0_f32, 1.0000001);
///
/// // A custom epsilon
/// assert_approx_eq!(100.0_f32, 100.5, eps = 0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, eps = $eps:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "assertion failed: `{a:?} ≅ {b:?}` (eps = {})", $eps
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
    ($a:expr, $b:expr, eps = $eps:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, $eps),
                $fmt $(, $args)*
            )
        }
    }};
}
