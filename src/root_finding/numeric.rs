//! Shared numeric helpers for the solver modules.
//! - `halving_iteration_bound` : theoretical bisection iteration count
//! - `checked_eval`            : finite-checked closure evaluation

use super::errors::RootFindingError;


/// Number of halvings needed for the width of `[a, b]` to drop below `eps`.
///
/// Returns at least 1 whenever the initial width is not already below `eps`,
/// so a resolved iteration budget never skips the loop outright.
pub(crate) fn halving_iteration_bound(a: f64, b: f64, eps: f64) -> usize {
    let w0 = b - a;
    if w0 < eps {
        0
    } else {
        (w0 / eps).log2().ceil().max(1.0) as usize
    }
}


/// Evaluates `f(x)`, counting the call and rejecting non-finite results.
#[inline]
pub(crate) fn checked_eval<F>(
    f: &mut F,
    x: f64,
    evals: &mut usize,
) -> Result<f64, RootFindingError>
where F: FnMut(f64) -> f64 {
    let fx = { *evals += 1; f(x) };
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx });
    }
    Ok(fx)
}
