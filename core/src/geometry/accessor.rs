//! Bounds-checked views over one element's slice of a buffer.
//!
//! Access is two-level: [`SubPoints`] picks a sub-point `0..S`, then
//! [`Components`] picks a component `0..W` within it. `B` is the
//! borrowed buffer window, `&[f32]` for reads and `&mut [f32]` for writes.

use std::ops::{Index, IndexMut};

use crate::error::{check_index, or_panic, CoreResult};
use crate::math::FixedVector;

/// The `S` sub-points of one element, each `W` floats wide.
#[derive(Debug, Clone, Copy)]
pub struct SubPoints<B, const S: usize, const W: usize> {
    data: B,
}

impl<B, const S: usize, const W: usize> SubPoints<B, S, W> {
    pub(crate) fn new(data: B) -> Self {
        Self { data }
    }
}

impl<B: AsRef<[f32]>, const S: usize, const W: usize> SubPoints<B, S, W> {
    /// Read view of sub-point `i`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfBounds`](crate::CoreError::IndexOutOfBounds) with
    /// range `[0, S)` when `i >= S`.
    #[inline]
    pub fn point(&self, i: usize) -> CoreResult<Components<&[f32], W>> {
        check_index(i, S)?;
        Ok(Components::new(&self.data.as_ref()[i * W..(i + 1) * W]))
    }

    /// All sub-points of the element, flat.
    pub fn as_slice(&self) -> &[f32] {
        self.data.as_ref()
    }
}

impl<B: AsMut<[f32]>, const S: usize, const W: usize> SubPoints<B, S, W> {
    /// Write view of sub-point `i`. Fails like [`point`](Self::point).
    #[inline]
    pub fn point_mut(&mut self, i: usize) -> CoreResult<Components<&mut [f32], W>> {
        check_index(i, S)?;
        Ok(Components::new(&mut self.data.as_mut()[i * W..(i + 1) * W]))
    }
}

/// The `W` components of a single sub-point.
#[derive(Debug, Clone, Copy)]
pub struct Components<B, const W: usize> {
    data: B,
}

impl<B, const W: usize> Components<B, W> {
    fn new(data: B) -> Self {
        Self { data }
    }
}

impl<B: AsRef<[f32]>, const W: usize> Components<B, W> {
    /// Read component `j`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfBounds`](crate::CoreError::IndexOutOfBounds) with
    /// range `[0, W)` when `j >= W`.
    #[inline]
    pub fn get(&self, j: usize) -> CoreResult<f32> {
        check_index(j, W)?;
        Ok(self.data.as_ref()[j])
    }

    /// Read component `j` without any bounds check.
    ///
    /// # Safety
    ///
    /// `j` must be less than `W`.
    #[inline]
    pub unsafe fn get_unchecked(&self, j: usize) -> f32 {
        *self.data.as_ref().get_unchecked(j)
    }

    pub fn as_slice(&self) -> &[f32] {
        self.data.as_ref()
    }

    /// Copy the components out. Later changes to the result leave the
    /// buffer untouched.
    pub fn to_vector(&self) -> FixedVector<W, f32> {
        let mut elm = [0.0; W];
        elm.copy_from_slice(self.data.as_ref());
        FixedVector::from_array(elm)
    }
}

impl<B: AsMut<[f32]>, const W: usize> Components<B, W> {
    /// Overwrite component `j`. Fails like [`get`](Self::get).
    #[inline]
    pub fn set(&mut self, j: usize, value: f32) -> CoreResult<()> {
        *self.get_mut(j)? = value;
        Ok(())
    }

    /// Mutable reference to component `j`. Fails like [`get`](Self::get).
    #[inline]
    pub fn get_mut(&mut self, j: usize) -> CoreResult<&mut f32> {
        check_index(j, W)?;
        Ok(&mut self.data.as_mut()[j])
    }

    /// Mutable reference to component `j` without any bounds check.
    ///
    /// # Safety
    ///
    /// `j` must be less than `W`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, j: usize) -> &mut f32 {
        self.data.as_mut().get_unchecked_mut(j)
    }

    /// Raw view of the sub-point inside the buffer. Writes go straight
    /// to the owning set.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        self.data.as_mut()
    }

    /// Copy all `W` components of `v` into the buffer.
    pub fn assign(&mut self, v: &FixedVector<W, f32>) {
        self.data.as_mut().copy_from_slice(v.as_array());
    }
}

impl<B: AsRef<[f32]>, const W: usize> Index<usize> for Components<B, W> {
    type Output = f32;

    #[inline]
    fn index(&self, j: usize) -> &f32 {
        or_panic(check_index(j, W));
        &self.data.as_ref()[j]
    }
}

impl<B: AsRef<[f32]> + AsMut<[f32]>, const W: usize> IndexMut<usize> for Components<B, W> {
    #[inline]
    fn index_mut(&mut self, j: usize) -> &mut f32 {
        or_panic(check_index(j, W));
        &mut self.data.as_mut()[j]
    }
}
