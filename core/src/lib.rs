//! # geoset core
//!
//! Geometry storage for the scene graph: the [`GeometrySet`] container
//! and the [`FixedVector`] math type it converts sub-points into.
//!
//! # Safety checks
//!
//! The `checked` feature (on by default) compiles index, division and
//! cursor-validity checks into every accessor. Without it those checks are
//! skipped: out-of-range indices hit the slice bounds check, float
//! division by zero yields infinities, and no typed error is produced.
//!
//! [`GeometrySet`]: geometry::GeometrySet
//! [`FixedVector`]: math::FixedVector

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{CoreError, CoreResult};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Whether accessors were built with the `checked` feature.
pub const SAFETY_CHECKS: bool = cfg!(feature = "checked");
