//! Fixed-size numeric vector.
//!
//! [`FixedVector<N, T>`] backs coordinates, normals and colors across the
//! engine. Arity is part of the type, so mismatched constructors and a
//! cross product on anything but three components are compile errors.
//!
//! # Example
//!
//! ```
//! use geoset_core::math::{vec3, FixedVector};
//!
//! let u = vec3(1, 2, 3);
//! let v = vec3(3, 2, 1);
//! assert_eq!(u * v, 10);
//! assert_eq!(u % v, vec3(-4, 8, -4));
//! assert_eq!((u + 10).to_string(), "[11, 12, 13]");
//! assert_eq!(u / 2, FixedVector::from_array([0.5, 1.0, 1.5]));
//! ```

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, Sub, SubAssign,
};

use super::Scalar;
use crate::error::{check_index, or_panic, CoreResult};

/// `N` components of type `T`, stored inline.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FixedVector<const N: usize, T: Scalar> {
    elm: [T; N],
}

/// Build a 2-component vector.
#[inline]
pub const fn vec2<T: Scalar>(x: T, y: T) -> FixedVector<2, T> {
    FixedVector::from_array([x, y])
}

/// Build a 3-component vector.
#[inline]
pub const fn vec3<T: Scalar>(x: T, y: T, z: T) -> FixedVector<3, T> {
    FixedVector::from_array([x, y, z])
}

/// Build a 4-component vector.
#[inline]
pub const fn vec4<T: Scalar>(x: T, y: T, z: T, w: T) -> FixedVector<4, T> {
    FixedVector::from_array([x, y, z, w])
}

#[inline(always)]
fn check_divisor<T: Scalar>(s: T) -> CoreResult<()> {
    #[cfg(feature = "checked")]
    if s == T::ZERO {
        return Err(crate::CoreError::DivisionByZero);
    }
    #[cfg(not(feature = "checked"))]
    let _ = s;
    Ok(())
}

impl<const N: usize, T: Scalar> FixedVector<N, T> {
    const NON_EMPTY: () = assert!(N > 0, "FixedVector needs at least one component");

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self { elm: [T::ZERO; N] }
    }

    /// Every component set to `s`.
    #[inline]
    pub fn splat(s: T) -> Self {
        Self { elm: [s; N] }
    }

    #[inline]
    pub const fn from_array(elm: [T; N]) -> Self {
        Self { elm }
    }

    /// Number of components (always `N`).
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Read component `i`.
    ///
    /// # Errors
    ///
    /// [`CoreError::IndexOutOfBounds`](crate::CoreError::IndexOutOfBounds) with range `[0, N)` when `i >= N`.
    #[inline]
    pub fn get(&self, i: usize) -> CoreResult<T> {
        check_index(i, N)?;
        Ok(self.elm[i])
    }

    /// Mutable reference to component `i`. Fails like [`get`](Self::get).
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> CoreResult<&mut T> {
        check_index(i, N)?;
        Ok(&mut self.elm[i])
    }

    /// Overwrite component `i`. Fails like [`get`](Self::get).
    #[inline]
    pub fn set(&mut self, i: usize, value: T) -> CoreResult<()> {
        *self.get_mut(i)? = value;
        Ok(())
    }

    /// Read component `i` without any bounds check.
    ///
    /// # Safety
    ///
    /// `i` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize) -> T {
        *self.elm.get_unchecked(i)
    }

    /// Mutable reference to component `i` without any bounds check.
    ///
    /// # Safety
    ///
    /// `i` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut T {
        self.elm.get_unchecked_mut(i)
    }

    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.elm
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.elm
            .iter()
            .zip(other.elm.iter())
            .fold(T::ZERO, |dot, (&lhs, &rhs)| dot + lhs * rhs)
    }

    /// Scalar division, promoted to `f32` whatever `T` is.
    ///
    /// # Errors
    ///
    /// [`CoreError::DivisionByZero`](crate::CoreError::DivisionByZero) when `s` is exactly zero.
    pub fn try_div(&self, s: T) -> CoreResult<FixedVector<N, f32>> {
        check_divisor(s)?;
        let s = s.to_f32();
        Ok(FixedVector {
            elm: self.elm.map(|e| e.to_f32() / s),
        })
    }

    /// In-place scalar division in `T`. Fails like [`try_div`](Self::try_div).
    pub fn try_div_assign(&mut self, s: T) -> CoreResult<()> {
        check_divisor(s)?;
        for e in &mut self.elm {
            *e /= s;
        }
        Ok(())
    }

    /// True iff every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.elm.iter().all(|&e| e == T::ZERO)
    }

    /// Euclidean norm. Squares are summed in `f64` so integer components
    /// never overflow `T`.
    pub fn length(&self) -> f32 {
        self.norm() as f32
    }

    fn norm(&self) -> f64 {
        self.elm
            .iter()
            .map(|e| e.to_f64() * e.to_f64())
            .sum::<f64>()
            .sqrt()
    }

    /// Scale to unit length in place.
    ///
    /// Zero components are skipped. Integer vectors truncate towards zero.
    ///
    /// # Errors
    ///
    /// [`CoreError::Arithmetic`](crate::CoreError::Arithmetic) for the zero vector.
    pub fn normalize(&mut self) -> CoreResult<()> {
        let norm = self.norm();
        #[cfg(feature = "checked")]
        if norm == 0.0 {
            return Err(crate::CoreError::Arithmetic(
                "Can not normalize the zero vector.".to_string(),
            ));
        }
        for e in &mut self.elm {
            if *e != T::ZERO {
                *e = T::from_f64(e.to_f64() / norm);
            }
        }
        Ok(())
    }

    /// Unit-length copy in `f32`. Fails like [`normalize`](Self::normalize).
    pub fn normalized(&self) -> CoreResult<FixedVector<N, f32>> {
        let mut v = self.to_float();
        v.normalize()?;
        Ok(v)
    }

    /// Largest component.
    pub fn max(&self) -> T {
        self.elm[self.max_index()]
    }

    /// Smallest component.
    pub fn min(&self) -> T {
        self.elm[self.min_index()]
    }

    /// Index of the largest component; the first one wins ties.
    pub fn max_index(&self) -> usize {
        let () = Self::NON_EMPTY;
        let mut m = 0;
        for i in 1..N {
            if self.elm[i] > self.elm[m] {
                m = i;
            }
        }
        m
    }

    /// Index of the smallest component; the first one wins ties.
    pub fn min_index(&self) -> usize {
        let () = Self::NON_EMPTY;
        let mut m = 0;
        for i in 1..N {
            if self.elm[i] < self.elm[m] {
                m = i;
            }
        }
        m
    }

    pub fn sum(&self) -> T {
        self.elm.iter().fold(T::ZERO, |s, &e| s + e)
    }

    pub fn to_int(&self) -> FixedVector<N, i32> {
        FixedVector {
            elm: self.elm.map(Scalar::to_i32),
        }
    }

    pub fn to_float(&self) -> FixedVector<N, f32> {
        FixedVector {
            elm: self.elm.map(Scalar::to_f32),
        }
    }

    pub fn to_double(&self) -> FixedVector<N, f64> {
        FixedVector {
            elm: self.elm.map(Scalar::to_f64),
        }
    }

    /// Copy the components into `out`.
    pub fn to_array(&self, out: &mut [T; N]) {
        *out = self.elm;
    }

    pub fn into_array(self) -> [T; N] {
        self.elm
    }
}

impl<T: Scalar> FixedVector<3, T> {
    /// Cross product.
    pub fn cross(&self, v: &Self) -> Self {
        let [a0, a1, a2] = self.elm;
        let [b0, b1, b2] = v.elm;
        Self {
            elm: [a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0],
        }
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, v: &Self) -> f32 {
        self.elm
            .iter()
            .zip(v.elm.iter())
            .map(|(a, b)| {
                let d = a.to_f64() - b.to_f64();
                d * d
            })
            .sum::<f64>()
            .sqrt() as f32
    }
}

impl<const N: usize, T: Scalar> Default for FixedVector<N, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize, T: Scalar> From<[T; N]> for FixedVector<N, T> {
    fn from(elm: [T; N]) -> Self {
        Self { elm }
    }
}

impl<const N: usize, T: Scalar> From<FixedVector<N, T>> for [T; N] {
    fn from(v: FixedVector<N, T>) -> Self {
        v.elm
    }
}

impl<const N: usize, T: Scalar> Index<usize> for FixedVector<N, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        or_panic(check_index(i, N));
        &self.elm[i]
    }
}

impl<const N: usize, T: Scalar> IndexMut<usize> for FixedVector<N, T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        or_panic(check_index(i, N));
        &mut self.elm[i]
    }
}

impl<const N: usize, T: Scalar> fmt::Display for FixedVector<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.elm.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "]")
    }
}

impl<const N: usize, T: Scalar> Add<T> for FixedVector<N, T> {
    type Output = Self;
    #[inline]
    fn add(self, s: T) -> Self {
        Self {
            elm: self.elm.map(|e| e + s),
        }
    }
}

impl<const N: usize, T: Scalar> Sub<T> for FixedVector<N, T> {
    type Output = Self;
    #[inline]
    fn sub(self, s: T) -> Self {
        Self {
            elm: self.elm.map(|e| e - s),
        }
    }
}

impl<const N: usize, T: Scalar> Mul<T> for FixedVector<N, T> {
    type Output = Self;
    #[inline]
    fn mul(self, s: T) -> Self {
        Self {
            elm: self.elm.map(|e| e * s),
        }
    }
}

impl<const N: usize, T: Scalar> Div<T> for FixedVector<N, T> {
    type Output = FixedVector<N, f32>;
    /// Panics on a zero divisor when checks are enabled.
    #[inline]
    fn div(self, s: T) -> FixedVector<N, f32> {
        or_panic(self.try_div(s))
    }
}

impl<const N: usize, T: Scalar> Add for FixedVector<N, T> {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<const N: usize, T: Scalar> Sub for FixedVector<N, T> {
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        for (lhs, rhs) in self.elm.iter_mut().zip(rhs.elm) {
            *lhs -= rhs;
        }
        self
    }
}

/// Dot product.
impl<const N: usize, T: Scalar> Mul for FixedVector<N, T> {
    type Output = T;
    #[inline]
    fn mul(self, rhs: Self) -> T {
        self.dot(&rhs)
    }
}

/// Cross product.
impl<T: Scalar> Rem for FixedVector<3, T> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.cross(&rhs)
    }
}

impl<const N: usize, T: Scalar + Neg<Output = T>> Neg for FixedVector<N, T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            elm: self.elm.map(|e| -e),
        }
    }
}

impl<const N: usize, T: Scalar> AddAssign<T> for FixedVector<N, T> {
    #[inline]
    fn add_assign(&mut self, s: T) {
        for e in &mut self.elm {
            *e += s;
        }
    }
}

impl<const N: usize, T: Scalar> AddAssign for FixedVector<N, T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.elm.iter_mut().zip(rhs.elm) {
            *lhs += rhs;
        }
    }
}

impl<const N: usize, T: Scalar> SubAssign<T> for FixedVector<N, T> {
    #[inline]
    fn sub_assign(&mut self, s: T) {
        for e in &mut self.elm {
            *e -= s;
        }
    }
}

impl<const N: usize, T: Scalar> MulAssign<T> for FixedVector<N, T> {
    #[inline]
    fn mul_assign(&mut self, s: T) {
        for e in &mut self.elm {
            *e *= s;
        }
    }
}

impl<const N: usize, T: Scalar> DivAssign<T> for FixedVector<N, T> {
    /// Panics on a zero divisor when checks are enabled.
    #[inline]
    fn div_assign(&mut self, s: T) {
        or_panic(self.try_div_assign(s));
    }
}

// Scalar on the left: `s + v` and `s * v`.
macro_rules! impl_commutative_scalar_ops {
    ($($ty:ty),+) => {
        $(
            impl<const N: usize> Add<FixedVector<N, $ty>> for $ty {
                type Output = FixedVector<N, $ty>;
                #[inline]
                fn add(self, v: FixedVector<N, $ty>) -> FixedVector<N, $ty> {
                    v + self
                }
            }

            impl<const N: usize> Mul<FixedVector<N, $ty>> for $ty {
                type Output = FixedVector<N, $ty>;
                #[inline]
                fn mul(self, v: FixedVector<N, $ty>) -> FixedVector<N, $ty> {
                    v * self
                }
            }
        )+
    };
}

impl_commutative_scalar_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// SAFETY: `FixedVector` is `repr(transparent)` over `[T; N]`, which has no
// padding and inherits the bit validity of `T`.
unsafe impl<const N: usize, T: Scalar + bytemuck::Zeroable> bytemuck::Zeroable
    for FixedVector<N, T>
{
}

// SAFETY: see the `Zeroable` impl above.
unsafe impl<const N: usize, T: Scalar + bytemuck::Pod> bytemuck::Pod for FixedVector<N, T> {}
