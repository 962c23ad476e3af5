//! Per-element views yielded by [`GeometrySet::elements`] and
//! [`GeometrySet::elements_mut`].
//!
//! [`GeometrySet::elements`]: super::GeometrySet::elements
//! [`GeometrySet::elements_mut`]: super::GeometrySet::elements_mut

use super::accessor::SubPoints;
use super::set::TEXCOORD_COMPONENTS;

/// Shared view of one element.
#[derive(Debug, Clone, Copy)]
pub struct Element<'a, const D: usize, const S: usize> {
    pub index: i32,
    pub vert: SubPoints<&'a [f32], S, D>,
    pub texc: SubPoints<&'a [f32], S, TEXCOORD_COMPONENTS>,
}

/// Mutable view of one element.
#[derive(Debug)]
pub struct ElementMut<'a, const D: usize, const S: usize> {
    pub index: &'a mut i32,
    pub vert: SubPoints<&'a mut [f32], S, D>,
    pub texc: SubPoints<&'a mut [f32], S, TEXCOORD_COMPONENTS>,
}
