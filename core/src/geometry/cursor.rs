//! Element cursors over a [`GeometrySet`].
//!
//! A cursor starts on the first element and counts the remaining ones
//! down to zero. At zero it is exhausted: dereferencing it with
//! [`members`](Cursor::members) or moving it with
//! [`advance`](Cursor::advance) fails with
//! [`InvalidIterator`](CoreError::InvalidIterator). A default-constructed
//! cursor is exhausted from the start.
//!
//! ```
//! use geoset_core::geometry::GeometrySet;
//!
//! let mut set = GeometrySet::<2, 3>::new(2);
//! let mut elm = set.cursor_mut();
//! while elm.has_more() {
//!     let mut m = elm.members_mut()?;
//!     m.vert.point_mut(0)?.set(0, 1.0)?;
//!     m.vert.point_mut(1)?.set(0, 3.0)?;
//!     m.vert.point_mut(2)?.set(1, 3.0)?;
//!     elm.advance()?;
//! }
//! assert_eq!(set.vertices()[6..], [1.0, 0.0, 3.0, 0.0, 0.0, 3.0]);
//! # Ok::<(), geoset_core::CoreError>(())
//! ```

use std::ops::Range;

use super::accessor::SubPoints;
use super::set::{GeometrySet, TEXCOORD_COMPONENTS};
use crate::error::{CoreError, CoreResult};

/// How the texture-coordinate window moves when a cursor advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TexcoordAdvance {
    /// Vertex and texture windows move together.
    #[default]
    Lockstep,
    /// Only the vertex window moves; texture access stays on the first
    /// element. Kept for data written against the older cursor.
    VertexOnly,
}

/// Cursor configuration.
///
/// # Example
///
/// ```
/// use geoset_core::geometry::{CursorOptions, TexcoordAdvance};
///
/// let options = CursorOptions::new().with_texcoord_advance(TexcoordAdvance::VertexOnly);
/// assert_eq!(options.texcoord_advance, TexcoordAdvance::VertexOnly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CursorOptions {
    pub texcoord_advance: TexcoordAdvance,
}

impl CursorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_texcoord_advance(mut self, advance: TexcoordAdvance) -> Self {
        self.texcoord_advance = advance;
        self
    }
}

/// Per-element views returned by dereferencing a cursor.
#[derive(Debug)]
pub struct Members<B, const D: usize, const S: usize> {
    /// Vertex positions, `D` components per sub-point.
    pub vert: SubPoints<B, S, D>,
    /// Texture coordinates, always 2 components per sub-point.
    pub texc: SubPoints<B, S, TEXCOORD_COMPONENTS>,
}

const INVALID_ACCESS: &str = "attempt to access an invalid iterator";
#[cfg_attr(not(feature = "checked"), allow(dead_code))]
const INVALID_ADVANCE: &str = "attempt to advance past the end of an iterator";

/// Position state shared by [`Cursor`] and [`CursorMut`].
#[derive(Debug, Clone, Copy, Default)]
struct Position<const D: usize, const S: usize> {
    remaining: usize,
    vert: usize,
    texc: usize,
    options: CursorOptions,
}

impl<const D: usize, const S: usize> Position<D, S> {
    fn start(size: usize, options: CursorOptions) -> Self {
        if options.texcoord_advance == TexcoordAdvance::VertexOnly {
            log::debug!(
                "GeometrySet<{D}, {S}> cursor over {size} elements keeps texture coordinates on the first element"
            );
        }
        Self {
            remaining: size,
            vert: 0,
            texc: 0,
            options,
        }
    }

    #[inline(always)]
    fn check_valid(&self) -> CoreResult<()> {
        #[cfg(feature = "checked")]
        if self.remaining == 0 {
            return Err(CoreError::InvalidIterator(INVALID_ACCESS));
        }
        Ok(())
    }

    #[inline]
    fn advance(&mut self) -> CoreResult<()> {
        #[cfg(feature = "checked")]
        if self.remaining == 0 {
            return Err(CoreError::InvalidIterator(INVALID_ADVANCE));
        }
        self.remaining = self.remaining.saturating_sub(1);
        self.vert += D * S;
        if self.options.texcoord_advance == TexcoordAdvance::Lockstep {
            self.texc += TEXCOORD_COMPONENTS * S;
        }
        Ok(())
    }

    fn has_more(&self) -> bool {
        self.remaining > 0
    }

    /// View the current element of `set`. Fails with `InvalidIterator` when
    /// there is no set or the position is exhausted.
    fn members<'s>(
        &self,
        set: Option<&'s GeometrySet<D, S>>,
    ) -> CoreResult<Members<&'s [f32], D, S>> {
        let set = set.ok_or(CoreError::InvalidIterator(INVALID_ACCESS))?;
        self.check_valid()?;
        Ok(Members {
            vert: SubPoints::new(&set.vertices()[self.vert_range()]),
            texc: SubPoints::new(&set.texcoords()[self.texc_range()]),
        })
    }

    fn members_mut<'s>(
        &self,
        set: Option<&'s mut GeometrySet<D, S>>,
    ) -> CoreResult<Members<&'s mut [f32], D, S>> {
        let set = set.ok_or(CoreError::InvalidIterator(INVALID_ACCESS))?;
        self.check_valid()?;
        let (vertices, texcoords) = set.buffers_mut();
        Ok(Members {
            vert: SubPoints::new(&mut vertices[self.vert_range()]),
            texc: SubPoints::new(&mut texcoords[self.texc_range()]),
        })
    }

    fn vert_range(&self) -> Range<usize> {
        self.vert..self.vert + D * S
    }

    fn texc_range(&self) -> Range<usize> {
        self.texc..self.texc + TEXCOORD_COMPONENTS * S
    }
}

/// Read-only cursor. Any number may be open on the same set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cursor<'a, const D: usize, const S: usize> {
    set: Option<&'a GeometrySet<D, S>>,
    pos: Position<D, S>,
}

impl<'a, const D: usize, const S: usize> Cursor<'a, D, S> {
    pub(crate) fn new(set: &'a GeometrySet<D, S>, options: CursorOptions) -> Self {
        Self {
            pos: Position::start(set.size(), options),
            set: Some(set),
        }
    }

    /// True while the cursor sits on an element.
    pub fn has_more(&self) -> bool {
        self.pos.has_more()
    }

    /// Elements left, counting the current one.
    pub fn remaining(&self) -> usize {
        self.pos.remaining
    }

    /// Move to the next element.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidIterator`] when the cursor is already exhausted.
    pub fn advance(&mut self) -> CoreResult<()> {
        self.pos.advance()
    }

    /// Views of the current element.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidIterator`] when the cursor is empty or exhausted.
    pub fn members(&self) -> CoreResult<Members<&'a [f32], D, S>> {
        self.pos.members(self.set)
    }
}

/// Read-write cursor. Holds the set exclusively while alive.
#[derive(Debug, Default)]
pub struct CursorMut<'a, const D: usize, const S: usize> {
    set: Option<&'a mut GeometrySet<D, S>>,
    pos: Position<D, S>,
}

impl<'a, const D: usize, const S: usize> CursorMut<'a, D, S> {
    pub(crate) fn new(set: &'a mut GeometrySet<D, S>, options: CursorOptions) -> Self {
        Self {
            pos: Position::start(set.size(), options),
            set: Some(set),
        }
    }

    /// True while the cursor sits on an element.
    pub fn has_more(&self) -> bool {
        self.pos.has_more()
    }

    /// Elements left, counting the current one.
    pub fn remaining(&self) -> usize {
        self.pos.remaining
    }

    /// Move to the next element. Fails like [`Cursor::advance`].
    pub fn advance(&mut self) -> CoreResult<()> {
        self.pos.advance()
    }

    /// Read views of the current element. Fails like [`Cursor::members`].
    pub fn members(&self) -> CoreResult<Members<&[f32], D, S>> {
        self.pos.members(self.set.as_deref())
    }

    /// Write views of the current element. Fails like [`Cursor::members`].
    pub fn members_mut(&mut self) -> CoreResult<Members<&mut [f32], D, S>> {
        self.pos.members_mut(self.set.as_deref_mut())
    }
}
