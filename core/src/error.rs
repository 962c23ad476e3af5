//! Error types and safety-check helpers.
//!
//! Every failure here is a caller contract violation. Checked operations
//! return [`CoreResult`]; operator impls that cannot return a `Result`
//! panic with the same message instead.
//!
//! Whether the checks exist at all is decided by the `checked` cargo
//! feature (see [`SAFETY_CHECKS`](crate::SAFETY_CHECKS)).

use thiserror::Error;

/// Errors raised by vector math and geometry accessors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A component or sub-point index fell outside `[lower, upper)`.
    #[error("Index {index} not in range: {lower} to {upper}.")]
    IndexOutOfBounds {
        index: usize,
        lower: usize,
        upper: usize,
    },
    #[error("Division by zero")]
    DivisionByZero,
    /// Arithmetic with no defined result, e.g. normalizing the zero vector.
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),
    /// Dereferencing or advancing an empty or exhausted cursor.
    #[error("Invalid iterator: {0}")]
    InvalidIterator(&'static str),
}

/// Convenience alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Validate `index < upper`.
///
/// Compiles to `Ok(())` when the `checked` feature is off.
#[inline(always)]
pub(crate) fn check_index(index: usize, upper: usize) -> CoreResult<()> {
    #[cfg(feature = "checked")]
    if index >= upper {
        return Err(CoreError::IndexOutOfBounds {
            index,
            lower: 0,
            upper,
        });
    }
    #[cfg(not(feature = "checked"))]
    let _ = (index, upper);
    Ok(())
}

/// Unwrap a check result inside an operator impl.
#[inline(always)]
pub(crate) fn or_panic<T>(result: CoreResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
