//! tests for the scalar fixed-point iteration solver
use riffle::root_finding::fixed_point::{fixed_point, FixedPointCfg, FixedPointError};
use riffle::root_finding::errors::RootFindingError;
use riffle::root_finding::report::{TerminationReason, ToleranceSatisfied};
use approx::assert_abs_diff_eq;

type TestResult = Result<(), FixedPointError>;

#[test]
fn cosine_map_converges() -> TestResult {
    let g = |d: f64| (d.cos() + 2.0) / 3.0;

    let res = fixed_point(g, 8.75, FixedPointCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    assert!(res.residual.abs() <= 1e-3);
    assert_abs_diff_eq!(res.root, 0.8793, epsilon = 2e-3);
    Ok(())
}

#[test]
fn termination_is_tight() -> TestResult {
    let g = |d: f64| (d.cos() + 2.0) / 3.0;

    let res = fixed_point(g, 8.75, FixedPointCfg::new())?;

    // replay the sequence by hand and record each step size
    let mut x = 8.75;
    let mut steps = Vec::new();
    loop {
        let x_next = g(x);
        steps.push((x_next - x).abs());
        x = x_next;
        if *steps.last().unwrap() <= 1e-3 {
            break;
        }
    }

    assert_eq!(res.iterations, steps.len());
    assert_eq!(res.root, x);
    assert!(steps[steps.len() - 1] <= 1e-3);
    assert!(steps[steps.len() - 2] > 1e-3);
    Ok(())
}

#[test]
fn map_applied_at_least_once() -> TestResult {
    // every point is fixed; the solver must still take one step, not zero
    let g = |x: f64| x;

    let res = fixed_point(g, 1.0, FixedPointCfg::new())?;

    assert_eq!(res.iterations, 1);
    assert_eq!(res.root, 1.0);
    // one step plus the residual evaluation for the report
    assert_eq!(res.evaluations, 2);
    assert_eq!(res.residual, 0.0);
    Ok(())
}

#[test]
fn divergent_map_hits_iteration_limit() -> TestResult {
    let g = |x: f64| 2.0 * x;

    let cfg = FixedPointCfg::new().set_max_iter(25)?;
    let res = fixed_point(g, 1.0, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.iterations, 25);
    assert_eq!(res.root, (1u64 << 25) as f64);
    Ok(())
}

#[test]
fn invalid_guess() -> TestResult {
    let g = |x: f64| x;
    let err = fixed_point(g, f64::NAN, FixedPointCfg::new()).unwrap_err();
    assert!(matches!(err, FixedPointError::InvalidGuess { x0 } if x0.is_nan()));
    Ok(())
}

#[test]
fn non_finite_map_value() -> TestResult {
    let g = |_x: f64| f64::NAN;
    let err = fixed_point(g, 1.0, FixedPointCfg::new()).unwrap_err();

    assert!(matches!(
        err,
        FixedPointError::RootFinding(RootFindingError::NonFiniteEvaluation { x, fx })
        if x == 1.0 && fx.is_nan()));
    Ok(())
}
