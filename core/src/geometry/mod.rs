//! Geometry storage.
//!
//! This module provides:
//!
//! - [`GeometrySet`] - Owning container of `size` points, lines, triangles
//!   or quads in the plane or in space
//! - [`Cursor`] / [`CursorMut`] - Checked element-by-element access
//! - [`SubPoints`] / [`Components`] - The two-level bounds-checked accessors
//!   a cursor hands out
//! - [`Element`] / [`ElementMut`] - Views yielded by the std iterators over a set
//!
//! # Example
//!
//! ```
//! use geoset_core::geometry::Triangles2;
//! use geoset_core::math::vec2;
//!
//! let mut set = Triangles2::new(2);
//! let mut elm = set.cursor_mut();
//! {
//!     let mut m = elm.members_mut()?;
//!     m.vert.point_mut(0)?.assign(&vec2(1.0, 2.0));
//!     m.vert.point_mut(1)?.assign(&vec2(3.0, 4.0));
//!     m.vert.point_mut(2)?.assign(&vec2(5.0, 6.0));
//! }
//! elm.advance()?;
//! assert_eq!(elm.members()?.vert.point(2)?.to_vector(), vec2(0.0, 0.0));
//! assert_eq!(set.vertices()[..6], [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! # Ok::<(), geoset_core::CoreError>(())
//! ```

mod accessor;
mod cursor;
mod element;
mod set;
mod shape;

pub use accessor::{Components, SubPoints};
pub use cursor::{Cursor, CursorMut, CursorOptions, Members, TexcoordAdvance};
pub use element::{Element, ElementMut};
pub use set::{GeometrySet, TEXCOORD_COMPONENTS};
pub use shape::{GeometryDimension, GeometryShape};

// ===== Common instantiations =====

pub type Points2 = GeometrySet<2, 1>;
pub type Lines2 = GeometrySet<2, 2>;
pub type Triangles2 = GeometrySet<2, 3>;
pub type Quads2 = GeometrySet<2, 4>;
pub type Points3 = GeometrySet<3, 1>;
pub type Lines3 = GeometrySet<3, 2>;
pub type Triangles3 = GeometrySet<3, 3>;
pub type Quads3 = GeometrySet<3, 4>;
