//! Bisection method

use super::algorithms::{Algorithm, BracketFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use super::numeric::{checked_eval, halving_iteration_bound};
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);


#[derive(Debug, Error)]
pub enum BisectionError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}


/// Bisection configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with the width tolerance and optional `max_iter`.
///
/// # Defaults
/// - `eps` defaults to [`BisectionCfg::DEFAULT_EPS`].
/// - If `max_iter` is `None`, [`bisection`] resolves it to the theoretical
///   halving count for the interval, capped by [`GLOBAL_MAX_ITER_FALLBACK`].
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    pub const DEFAULT_EPS: f64 = 1e-3;

    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(Self::DEFAULT_EPS),
        }
    }
}
impl_common_cfg!(BisectionCfg);


/// Midpoint of the current bracket.
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}


/// Finds a root of `func` on `[a, b]` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Assumes `func` is continuous on `[a, b]` and changes sign there. The sign
/// change is a *precondition, not a validated input*: with no sign change the
/// halving still runs to the width tolerance and lands on an arbitrary point
/// of the interval. Callers wanting a guarantee must verify the bracket
/// themselves.
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `a`    : lower bound of the search interval, finite and less than `b`
/// - `b`    : upper bound of the search interval
/// - `cfg`  : [`BisectionCfg`] (width tolerance `eps`, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`       : last midpoint computed
/// - `residual`   : `func(root)`
/// - `iterations` : number of halvings performed
/// - `bracket`    : `Some((a, b))`, the final interval
///
/// # Behavior
/// - Each halving evaluates the midpoint `m = (a + b) / 2` and keeps the half
///   where `func(a) * func(m) <= 0`; the `<= 0` comparison folds an exact
///   zero at the midpoint into the left half.
/// - The loop stops as soon as `b - a < eps`. An interval already narrower
///   than `eps` returns after zero halvings; the midpoint and its function
///   value are still computed for the report, costing one evaluation.
///
/// # Errors
/// - [`BisectionError::InvalidBounds`] : `a` or `b` is NaN/inf, or `a >= b`
/// - [`RootFindingError::NonFiniteEvaluation`] (via
///   [`BisectionError::RootFinding`]) : `func(x)` produced NaN/inf
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg,
) -> Result<RootFindingReport, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(BisectionError::InvalidBounds { a, b });
    }

    let eps = cfg.common.eps();

    let mut evals = 0;
    let mut fa = checked_eval(&mut func, a, &mut evals)?;

    // interval already narrower than eps: report its midpoint without halving
    if b - a < eps {
        let m  = midpoint(a, b);
        let fm = checked_eval(&mut func, m, &mut evals)?;
        return Ok(RootFindingReport {
            root                : m,
            residual            : fm,
            iterations          : 0,
            evaluations         : evals,
            termination_reason  : TerminationReason::ToleranceReached,
            tolerance_satisfied : ToleranceSatisfied::WidthTolReached,
            bracket             : Some((a, b)),
            algorithm_name      : ALGORITHM.algorithm_name(),
        });
    }

    let num_iter = match cfg.common.max_iter() {
        Some(m) => m,
        None    => halving_iteration_bound(a, b, eps).min(GLOBAL_MAX_ITER_FALLBACK),
    };

    let mut m  = a;     // gets overwritten on the first halving
    let mut fm = fa;    // gets overwritten
    for iter in 1..=num_iter {
        m  = midpoint(a, b);
        fm = checked_eval(&mut func, m, &mut evals)?;

        if fa * fm <= 0.0 {
            b = m;
        } else {
            a  = m;
            fa = fm;
        }

        if b - a < eps {
            return Ok(RootFindingReport {
                root                : m,
                residual            : fm,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::WidthTolReached,
                bracket             : Some((a, b)),
                algorithm_name      : ALGORITHM.algorithm_name(),
            });
        }
    }

    Ok(RootFindingReport {
        root                : m,
        residual            : fm,
        iterations          : num_iter,
        evaluations         : evals,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        bracket             : Some((a, b)),
        algorithm_name      : ALGORITHM.algorithm_name(),
    })
}
