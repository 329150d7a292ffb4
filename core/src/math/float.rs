//! Floating-point compatibility API.
//!
//! `core` lacks square roots and trigonometric functions. This module
//! routes them to `std`, the `libm` crate, or the `micromath` crate,
//! depending on which feature is enabled. Without any of them, only an
//! approximate square root is available.
//!
//! Callers import the selected backend as `f32` and write `f32::sqrt(x)`,
//! which reads the same whichever backend is active.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::sqrtf as sqrt;

    pub use libm::cosf as cos;
    pub use libm::sinf as sin;
    pub use libm::tanf as tan;
}

#[cfg(feature = "mm")]
pub mod mm {
    use micromath::F32Ext as mm;

    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        let y = mm::sqrt(x);
        // Two rounds of Newton's method
        let y = 0.5 * (y + (x / y));
        0.5 * (y + (x / y))
    }
    #[inline]
    pub fn sin(x: f32) -> f32 {
        mm::sin(x)
    }
    #[inline]
    pub fn cos(x: f32) -> f32 {
        mm::cos(x)
    }
    #[inline]
    pub fn tan(x: f32) -> f32 {
        mm::tan(x)
    }
}

pub mod fallback {
    /// Returns the approximate square root of `x`.
    ///
    /// Returns zero for zero and NaN for negative inputs.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        if x == 0.0 { 0.0 } else { x * fast_recip_sqrt(x) }
    }

    /// Returns a fast approximation of the reciprocal square root of `x`.
    ///
    /// Accurate to about five significant digits for positive normal inputs.
    #[inline]
    pub fn fast_recip_sqrt(x: f32) -> f32 {
        // https://en.wikipedia.org/wiki/Fast_inverse_square_root
        const MAGIC: u32 = 0x5f37_5a86;
        if x < 0.0 {
            return f32::NAN;
        }
        let mut y = f32::from_bits(MAGIC.wrapping_sub(x.to_bits() >> 1));
        // Two rounds of Newton's method
        y = y * (1.5 - 0.5 * x * y * y);
        y * (1.5 - 0.5 * x * y * y)
    }
}

pub use fallback::fast_recip_sqrt;

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f32 = core::primitive::f32;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f32;

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use mm as f32;

#[cfg(not(feature = "fp"))]
pub use fallback as f32;

#[cfg(all(
    feature = "fp",
    not(any(feature = "std", feature = "libm", feature = "mm"))
))]
compile_error!(
    "the `fp` feature needs a backend: \
     enable one of the `std`, `libm`, or `mm` features"
);

#[cfg(test)]
#[allow(unused_imports)]
mod tests {
    use core::f32::consts::*;

    use super::{fallback, fast_recip_sqrt};
    use crate::assert_approx_eq;

    #[cfg(feature = "libm")]
    use super::libm;
    #[cfg(feature = "mm")]
    use super::mm;

    #[test]
    fn fast_recip_sqrt_is_close() {
        assert_approx_eq!(fast_recip_sqrt(4.0), 0.5, eps = 1e-4);
        assert_approx_eq!(fast_recip_sqrt(100.0), 0.1, eps = 1e-4);
        assert!(fast_recip_sqrt(-1.0).is_nan());
    }

    #[test]
    fn fallback_sqrt() {
        assert_eq!(fallback::sqrt(0.0), 0.0);
        assert_approx_eq!(fallback::sqrt(9.0), 3.0, eps = 1e-4);
        assert_approx_eq!(fallback::sqrt(2.0), SQRT_2, eps = 1e-4);
        assert!(fallback::sqrt(-4.0).is_nan());
    }

    #[cfg(feature = "libm")]
    #[test]
    fn libm_functions() {
        assert_eq!(libm::sqrt(16.0), 4.0);
        assert!(libm::sqrt(-1.0).is_nan());
        assert_approx_eq!(libm::sin(FRAC_PI_6), 0.5);
        assert_eq!(libm::cos(PI), -1.0);
        assert_approx_eq!(libm::tan(FRAC_PI_4), 1.0);
    }

    #[cfg(feature = "mm")]
    #[test]
    fn mm_functions() {
        assert_approx_eq!(mm::sqrt(9.0), 3.0);
        assert_approx_eq!(mm::sin(FRAC_PI_6), 0.5, eps = 1e-3);
        assert_approx_eq!(mm::cos(PI), -1.0, eps = 1e-3);
        assert_approx_eq!(mm::tan(FRAC_PI_4), 1.0, eps = 1e-3);
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_functions() {
        assert_eq!(f32::sqrt(9.0), 3.0);
        assert!(f32::sqrt(-1.0).is_nan());
        assert_eq!(f32::cos(PI), -1.0);
        assert_approx_eq!(f32::tan(FRAC_PI_4), 1.0);
    }
}
