//! Fixed-point (simple) iteration

use super::algorithms::{Algorithm, OpenFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use super::numeric::checked_eval;
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Open(OpenFamily::FixedPoint);


#[derive(Debug, Error)]
pub enum FixedPointError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },
}


/// Fixed-point iteration configuration.
///
/// # Defaults
/// - `eps` defaults to [`FixedPointCfg::DEFAULT_EPS`].
/// - If `max_iter` is `None`, [`fixed_point`] resolves it using
///   [`Algorithm::default_max_iter`] for [`OpenFamily::FixedPoint`], or
///   [`GLOBAL_MAX_ITER_FALLBACK`] if unavailable.
#[derive(Debug, Copy, Clone)]
pub struct FixedPointCfg {
    common: CommonCfg,
}
impl FixedPointCfg {
    pub const DEFAULT_EPS: f64 = 1e-3;

    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(Self::DEFAULT_EPS),
        }
    }
}
impl_common_cfg!(FixedPointCfg);


/// Solves `x = map(x)` by
/// [fixed-point iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration)
/// from the starting guess `x0`.
///
/// The map is applied at least once; the step check `|x_next - x| <= eps`
/// happens after each application. Convergence requires `map` to be a
/// contraction near the fixed point; for a non-contractive map the iteration
/// wanders until the iteration cap and returns
/// [`TerminationReason::IterationLimit`] with the last iterate, rather than
/// looping forever.
///
/// # Returns
/// [`RootFindingReport`] with `root` = final iterate and `residual` =
/// `map(root) - root` (one extra evaluation, counted in `evaluations`).
///
/// # Errors
/// - [`FixedPointError::InvalidGuess`] : `x0` non-finite
/// - [`RootFindingError::NonFiniteEvaluation`] : `map(x)` produced NaN/inf
pub fn fixed_point<G>(
    mut map: G,
    x0: f64,
    cfg: FixedPointCfg,
) -> Result<RootFindingReport, FixedPointError>
where G: FnMut(f64) -> f64 {

    if !x0.is_finite() {
        return Err(FixedPointError::InvalidGuess { x0 });
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

    for iter in 1..=num_iter {
        let x_next = checked_eval(&mut map, x, &mut evals)?;

        if (x_next - x).abs() <= eps {
            let residual = checked_eval(&mut map, x_next, &mut evals)? - x_next;
            return Ok(RootFindingReport {
                root                : x_next,
                residual            : residual,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                bracket             : None,
                algorithm_name      : ALGORITHM.algorithm_name(),
            });
        }

        x = x_next;
    }

    let residual = checked_eval(&mut map, x, &mut evals)? - x;
    Ok(RootFindingReport {
        root                : x,
        residual            : residual,
        iterations          : num_iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        bracket             : None,
        algorithm_name      : ALGORITHM.algorithm_name(),
    })
}
