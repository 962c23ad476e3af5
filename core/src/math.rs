//! Math types.
//!
//! Provides [`FixedVector`], the fixed-arity vector used for coordinates,
//! normals and colors, and the [`Scalar`] trait describing its elements.

mod scalar;
mod vector;

pub use scalar::Scalar;
pub use vector::{vec2, vec3, vec4, FixedVector};

// ===== Common aliases =====

/// 2D vector (f32).
pub type Vec2 = FixedVector<2, f32>;

/// 3D vector (f32).
pub type Vec3 = FixedVector<3, f32>;

/// 4D vector (f32), e.g. an RGBA color.
pub type Vec4 = FixedVector<4, f32>;

/// 3D integer vector.
pub type IVec3 = FixedVector<3, i32>;
