//! Root-finding error types.
//!
//! [`RootFindingError`] : common runtime errors
//! - non-finite function evaluation
//! - invalid global parameters (e.g. max_iter)
//!
//! [`ToleranceError`]   : tolerance configuration errors
//!
//! Each algorithm module defines its own error enum on top of these,
//! wrapping the shared variants via `#[error(transparent)]`.


use thiserror::Error;


/// Runtime errors shared by the scalar root-finding algorithms.
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}


/// Tolerance configuration errors.
///
/// Raised by the `set_eps` config setters before a solve ever runs.
#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("invalid `eps` tolerance: must be finite and > 0. got {got}")]
    InvalidEps { got: f64 },
}
