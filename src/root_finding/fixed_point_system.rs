//! Fixed-point iteration for 2x2 nonlinear systems

use super::algorithms::{Algorithm, SystemFamily, GLOBAL_MAX_ITER_FALLBACK};
use super::report::{SystemReport, TerminationReason, ToleranceSatisfied};
use super::errors::{RootFindingError, ToleranceError};
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::System(SystemFamily::FixedPoint);


#[derive(Debug, Error)]
pub enum FixedPointSystemError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guess: (x0, y0)=({x0}, {y0}) must be finite")]
    InvalidGuess { x0: f64, y0: f64 },

    #[error("map non-finite at (x, y)=({x}, {y}): next=({x_next}, {y_next})")]
    NonFiniteEvaluation { x: f64, y: f64, x_next: f64, y_next: f64 },
}


/// Fixed-point-system configuration.
///
/// # Defaults
/// - `eps` defaults to [`FixedPointSystemCfg::DEFAULT_EPS`].
/// - If `max_iter` is `None`, [`fixed_point_system`] resolves it using
///   [`Algorithm::default_max_iter`] for [`SystemFamily::FixedPoint`], or
///   [`GLOBAL_MAX_ITER_FALLBACK`] if unavailable.
#[derive(Debug, Copy, Clone)]
pub struct FixedPointSystemCfg {
    common: CommonCfg,
}
impl FixedPointSystemCfg {
    pub const DEFAULT_EPS: f64 = 1e-4;

    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(Self::DEFAULT_EPS),
        }
    }
}
impl_common_cfg!(FixedPointSystemCfg);


/// Solves a two-unknown system rearranged into fixed-point form by sequential
/// (Gauss–Seidel-style) iteration.
///
/// The updates are NOT simultaneous: each sweep first computes
/// `x_next = map_x(x, y)` from the prior iterate, then `y_next = map_y(x_next)`
/// from the freshly updated x. The sweep runs at least once; the check
/// `max(|x_next - x|, |y_next - y|) <= eps` follows each sweep.
///
/// As with the scalar solver, convergence requires the combined map to be
/// contractive near the solution; otherwise the iteration cap reports
/// [`TerminationReason::IterationLimit`] with the last iterate.
///
/// # Errors
/// - [`FixedPointSystemError::InvalidGuess`]        : `x0` or `y0` non-finite
/// - [`FixedPointSystemError::NonFiniteEvaluation`] : a map produced NaN/inf
pub fn fixed_point_system<G1, G2>(
    mut map_x: G1,
    mut map_y: G2,
    x0: f64,
    y0: f64,
    cfg: FixedPointSystemCfg,
) -> Result<SystemReport, FixedPointSystemError>
where
    G1: FnMut(f64, f64) -> f64,
    G2: FnMut(f64) -> f64,
{
    if !(x0.is_finite() && y0.is_finite()) {
        return Err(FixedPointSystemError::InvalidGuess { x0, y0 });
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
        let x_next = { evals += 1; map_x(x, y) };
        let y_next = { evals += 1; map_y(x_next) };
        if !(x_next.is_finite() && y_next.is_finite()) {
            return Err(FixedPointSystemError::NonFiniteEvaluation { x, y, x_next, y_next });
        }

        let step = (x_next - x).abs().max((y_next - y).abs());
        x = x_next;
        y = y_next;

        if step <= eps {
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
