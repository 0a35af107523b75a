//! Newton-Raphson method

use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use super::numeric::checked_eval;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::Newton);


#[derive(Debug, Error)]
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("step non-finite from vanishing derivative at x={x}, f'(x)={dfx}")]
    DerivativeTooSmall { x: f64, dfx: f64 },

    #[error("derivative non-finite at x={x}, f'(x)={dfx}")]
    DerivativeNotFinite { x: f64, dfx: f64 },

    #[error("step non-finite at x={x}, step={step}; x + step undefined")]
    StepNotFinite { x: f64, step: f64 },
}


/// Newton configuration.
///
/// # Defaults
/// - `eps` defaults to [`NewtonCfg::DEFAULT_EPS`].
/// - If `max_iter` is `None`, [`newton`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::Newton`], or
///   [`GLOBAL_MAX_ITER_FALLBACK`] if unavailable.
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    pub const DEFAULT_EPS: f64 = 1e-3;

    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(Self::DEFAULT_EPS),
        }
    }
}
impl_common_cfg!(NewtonCfg);


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method)
/// with the analytic derivative `dfunc`.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : analytic derivative of `func`
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`] (residual tolerance `eps`, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`       : final iterate
/// - `residual`   : `func(root)`
/// - `iterations` : number of update steps performed
///
/// # Behavior
/// - The update `x = x - func(x) / dfunc(x)` runs at least once; the residual
///   check `|func(x)| < eps` follows each update. A guess that already
///   satisfies the tolerance still takes one step.
/// - Stagnation: if `x + step == x` at machine precision, returns
///   [`TerminationReason::MachinePrecisionReached`].
///
/// # Errors
/// - [`NewtonError::InvalidGuess`]        : `x0` non-finite
/// - [`NewtonError::DerivativeTooSmall`]  : `dfunc(x)` vanished; the raw step
///   `-f/f'` is non-finite and no update is possible
/// - [`NewtonError::DerivativeNotFinite`] : `dfunc(x)` produced NaN/inf
/// - [`NewtonError::StepNotFinite`]       : `x + step` not representable
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
///
/// # Notes
/// - Quadratic convergence requires a good initial guess and smooth `func`.
///   Poor guesses or ill-behaved functions can diverge or cycle; the
///   iteration cap then reports [`TerminationReason::IterationLimit`].
/// - For guaranteed convergence, prefer a bracketed method (e.g. bisection).
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    if !x0.is_finite() {
        return Err(NewtonError::InvalidGuess { x0 });
    }

    let eps = cfg.common.eps();
    let num_iter = match cfg.common.max_iter() {
        Some(v) => v,
        None    => ALGORITHM
            .default_max_iter()
            .unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
    };

    let mut evals = 0;
    let mut x  = x0;
    let mut fx = checked_eval(&mut func, x, &mut evals)?;

    // no early exit on |f(x0)|: the update below always runs at least once
    for iter in 1..=num_iter {
        let dfx = { evals += 1; dfunc(x) };
        if !dfx.is_finite() {
            return Err(NewtonError::DerivativeNotFinite { x, dfx });
        }

        let step = -fx / dfx;
        if !step.is_finite() {
            return Err(NewtonError::DerivativeTooSmall { x, dfx });
        }

        let x_next = x + step;
        if !x_next.is_finite() {
            return Err(NewtonError::StepNotFinite { x, step });
        }

        // machine stagnation
        if x_next == x {
            return Ok(RootFindingReport {
                root                : x,
                residual            : fx,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::MachinePrecisionReached,
                tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                bracket             : None,
                algorithm_name      : ALGORITHM.algorithm_name(),
            });
        }

        let fx_next = checked_eval(&mut func, x_next, &mut evals)?;
        if fx_next.abs() < eps {
            return Ok(RootFindingReport {
                root                : x_next,
                residual            : fx_next,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
                bracket             : None,
                algorithm_name      : ALGORITHM.algorithm_name(),
            });
        }

        x  = x_next;
        fx = fx_next;
    }

    Ok(RootFindingReport {
        root                : x,
        residual            : fx,
        iterations          : num_iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        bracket             : None,
        algorithm_name      : ALGORITHM.algorithm_name(),
    })
}
