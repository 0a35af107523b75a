//! tests for the 2x2 Newton system solver
use riffle::root_finding::newton_system::{
    newton_system, Jacobian2, NewtonSystemCfg, NewtonSystemError,
};
use riffle::root_finding::report::{TerminationReason, ToleranceSatisfied};
use approx::assert_abs_diff_eq;

type TestResult = Result<(), NewtonSystemError>;

// sin(x + y) = 1.2x + 0.2 intersected with the unit circle
fn circle_f(x: f64, y: f64) -> (f64, f64) {
    ((x + y).sin() - 1.2 * x - 0.2, x * x + y * y - 1.0)
}

fn circle_jac(x: f64, y: f64) -> Jacobian2 {
    Jacobian2 {
        df1_dx: (x + y).cos() - 1.2,
        df1_dy: (x + y).cos(),
        df2_dx: 2.0 * x,
        df2_dy: 2.0 * y,
    }
}

#[test]
fn converges_on_trig_circle_system() -> TestResult {
    let res = newton_system(circle_f, circle_jac, 0.8, 0.8, NewtonSystemCfg::new())?;

    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);

    let (f1, f2) = circle_f(res.x, res.y);
    assert!(f1.abs() < 1e-3);
    assert!(f2.abs() < 1e-3);
    assert_abs_diff_eq!(res.x, 0.6560, epsilon = 5e-3);
    assert_abs_diff_eq!(res.y, 0.7548, epsilon = 5e-3);
    Ok(())
}

#[test]
fn reruns_are_deterministic() -> TestResult {
    let first  = newton_system(circle_f, circle_jac, 0.8, 0.8, NewtonSystemCfg::new())?;
    let second = newton_system(circle_f, circle_jac, 0.8, 0.8, NewtonSystemCfg::new())?;

    assert_eq!(first.x, second.x);
    assert_eq!(first.y, second.y);
    assert_eq!(first.iterations, second.iterations);
    Ok(())
}

#[test]
fn solves_linear_system_in_one_correction() -> TestResult {
    let f   = |x: f64, y: f64| (x - 1.0, y - 2.0);
    let jac = |_x: f64, _y: f64| Jacobian2 {
        df1_dx: 1.0,
        df1_dy: 0.0,
        df2_dx: 0.0,
        df2_dy: 1.0,
    };

    let res = newton_system(f, jac, 0.0, 0.0, NewtonSystemCfg::new())?;

    // first step lands exactly on the solution; the second confirms it
    assert_eq!(res.x, 1.0);
    assert_eq!(res.y, 2.0);
    assert_eq!(res.iterations, 2);
    Ok(())
}

#[test]
fn update_runs_at_least_once_from_the_solution() -> TestResult {
    let f   = |x: f64, y: f64| (x - 1.0, y - 2.0);
    let jac = |_x: f64, _y: f64| Jacobian2 {
        df1_dx: 1.0,
        df1_dy: 0.0,
        df2_dx: 0.0,
        df2_dy: 1.0,
    };

    let res = newton_system(f, jac, 1.0, 2.0, NewtonSystemCfg::new())?;

    assert_eq!(res.iterations, 1);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    Ok(())
}

#[test]
fn singular_jacobian_fails_loud() -> TestResult {
    let f   = |_x: f64, _y: f64| (1.0, 1.0);
    let jac = |_x: f64, _y: f64| Jacobian2 {
        df1_dx: 0.0,
        df1_dy: 0.0,
        df2_dx: 0.0,
        df2_dy: 0.0,
    };

    let err = newton_system(f, jac, 0.0, 0.0, NewtonSystemCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonSystemError::SingularJacobian { det, .. } if det == 0.0));
    Ok(())
}

#[test]
fn uses_max_iter() -> TestResult {
    let cfg = NewtonSystemCfg::new().set_max_iter(1)?;
    let res = newton_system(circle_f, circle_jac, 0.8, 0.8, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.iterations, 1);
    Ok(())
}

#[test]
fn invalid_guess() -> TestResult {
    let err =
        newton_system(circle_f, circle_jac, f64::NAN, 0.8, NewtonSystemCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonSystemError::InvalidGuess { x0, .. } if x0.is_nan()));
    Ok(())
}

#[test]
fn non_finite_residual() -> TestResult {
    let f   = |_x: f64, _y: f64| (f64::NAN, 0.0);
    let jac = |_x: f64, _y: f64| Jacobian2 {
        df1_dx: 1.0,
        df1_dy: 0.0,
        df2_dx: 0.0,
        df2_dy: 1.0,
    };

    let err = newton_system(f, jac, 0.0, 0.0, NewtonSystemCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonSystemError::NonFiniteEvaluation { f1, .. } if f1.is_nan()));
    Ok(())
}
