//! Newton's method for 2x2 nonlinear systems

use super::algorithms::{Algorithm, SystemFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{SystemReport, TerminationReason, ToleranceSatisfied};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::System(SystemFamily::Newton);


#[derive(Debug, Error)]
pub enum NewtonSystemError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: (x0, y0)=({x0}, {y0}) must be finite")]
    InvalidGuess { x0: f64, y0: f64 },

    #[error("residual non-finite at (x, y)=({x}, {y}): F=({f1}, {f2})")]
    NonFiniteEvaluation { x: f64, y: f64, f1: f64, f2: f64 },

    #[error("jacobian non-finite at (x, y)=({x}, {y})")]
    JacobianNotFinite { x: f64, y: f64 },

    #[error("singular jacobian at (x, y)=({x}, {y}): det={det}")]
    SingularJacobian { x: f64, y: f64, det: f64 },
}


/// Analytic partial derivatives of a two-equation system at a point.
///
/// Row-major over `(F1, F2)`: `df1_dx` is dF1/dx, `df2_dy` is dF2/dy.
#[derive(Debug, Copy, Clone)]
pub struct Jacobian2 {
    pub df1_dx: f64,
    pub df1_dy: f64,
    pub df2_dx: f64,
    pub df2_dy: f64,
}
impl Jacobian2 {
    #[inline]
    #[must_use]
    pub fn det(&self) -> f64 {
        self.df1_dx * self.df2_dy - self.df1_dy * self.df2_dx
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.df1_dx.is_finite()
            && self.df1_dy.is_finite()
            && self.df2_dx.is_finite()
            && self.df2_dy.is_finite()
    }
}


/// Newton-system configuration.
///
/// # Defaults
/// - `eps` defaults to [`NewtonSystemCfg::DEFAULT_EPS`].
/// - If `max_iter` is `None`, [`newton_system`] resolves it using
///   [`Algorithm::default_max_iter`] for [`SystemFamily::Newton`], or
///   [`GLOBAL_MAX_ITER_FALLBACK`] if unavailable.
#[derive(Debug, Copy, Clone)]
pub struct NewtonSystemCfg {
    common: CommonCfg,
}
impl NewtonSystemCfg {
    pub const DEFAULT_EPS: f64 = 1e-4;

    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(Self::DEFAULT_EPS),
        }
    }
}
impl_common_cfg!(NewtonSystemCfg);


/// Solves the two-equation system `F1(x, y) = 0`, `F2(x, y) = 0` by Newton's
/// method with an analytic Jacobian.
///
/// # Arguments
/// - `func` : residual closure `(x, y) -> (F1, F2)`
/// - `jac`  : Jacobian closure `(x, y) -> Jacobian2`
/// - `x0`, `y0` : finite initial guess
/// - `cfg`  : [`NewtonSystemCfg`] (step tolerance `eps`, optional `max_iter`)
///
/// # Behavior
/// The dimension is fixed at 2, so each step inverts the Jacobian in closed
/// form instead of factoring a matrix:
///
/// ```text
/// det   = J11*J22 - J12*J21
/// x_new = x - ( J22*F1 - J12*F2) / det
/// y_new = y - (-J21*F1 + J11*F2) / det
/// ```
///
/// The update runs at least once; the check
/// `max(|x_new - x|, |y_new - y|) <= eps` follows each update.
///
/// # Errors
/// - [`NewtonSystemError::InvalidGuess`]        : `x0` or `y0` non-finite
/// - [`NewtonSystemError::NonFiniteEvaluation`] : a residual produced NaN/inf
/// - [`NewtonSystemError::JacobianNotFinite`]   : a partial produced NaN/inf
/// - [`NewtonSystemError::SingularJacobian`]    : determinant zero or
///   degenerate enough that the step is non-finite
pub fn newton_system<F, J>(
    mut func: F,
    mut jac: J,
    x0: f64,
    y0: f64,
    cfg: NewtonSystemCfg,
) -> Result<SystemReport, NewtonSystemError>
where
    F: FnMut(f64, f64) -> (f64, f64),
    J: FnMut(f64, f64) -> Jacobian2,
{
    if !(x0.is_finite() && y0.is_finite()) {
        return Err(NewtonSystemError::InvalidGuess { x0, y0 });
    }

    let eps = cfg.common.eps();
    let num_iter = match cfg.common.max_iter() {
        Some(v) => v,
        None    => ALGORITHM
            .default_max_iter()
            .unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
    };

    let mut evals = 0;
    let mut x = x0;
    let mut y = y0;

    for iter in 1..=num_iter {
        let (f1, f2) = { evals += 1; func(x, y) };
        if !(f1.is_finite() && f2.is_finite()) {
            return Err(NewtonSystemError::NonFiniteEvaluation { x, y, f1, f2 });
        }

        let j = { evals += 1; jac(x, y) };
        if !j.is_finite() {
            return Err(NewtonSystemError::JacobianNotFinite { x, y });
        }

        // closed-form 2x2 inverse applied to (F1, F2)
        let det = j.det();
        let dx = ( j.df2_dy * f1 - j.df1_dy * f2) / det;
        let dy = (-j.df2_dx * f1 + j.df1_dx * f2) / det;
        if !(dx.is_finite() && dy.is_finite()) {
            return Err(NewtonSystemError::SingularJacobian { x, y, det });
        }

        x -= dx;
        y -= dy;

        if dx.abs().max(dy.abs()) <= eps {
            return Ok(SystemReport {
                x                   : x,
                y                   : y,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                algorithm_name      : ALGORITHM.algorithm_name(),
            });
        }
    }

    Ok(SystemReport {
        x                   : x,
        y                   : y,
        iterations          : num_iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        algorithm_name      : ALGORITHM.algorithm_name(),
    })
}
