//! Element types accepted by [`FixedVector`](super::FixedVector).

use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Numeric element of a fixed-size vector.
///
/// Implemented for the primitive integer and floating-point types. The
/// conversion methods are lossy `as` casts.
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Additive identity.
    const ZERO: Self;

    fn to_f32(self) -> f32;
    fn to_f64(self) -> f64;
    fn to_i32(self) -> i32;
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_scalar {
    ($zero:expr => $($ty:ty),+) => {
        $(
            impl Scalar for $ty {
                const ZERO: Self = $zero;

                #[inline]
                fn to_f32(self) -> f32 {
                    self as f32
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn to_i32(self) -> i32 {
                    self as i32
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }
        )+
    };
}

impl_scalar!(0 => i8, i16, i32, i64, u8, u16, u32, u64);
impl_scalar!(0.0 => f32, f64);
