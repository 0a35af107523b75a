//! Runs the three demonstration tasks in fixed order and prints each method's
//! result to stdout. The task numbering is historical: Task 3 does not exist.

use std::error::Error;

use riffle::root_finding::bisection::{bisection, BisectionCfg};
use riffle::root_finding::fixed_point::{fixed_point, FixedPointCfg};
use riffle::root_finding::fixed_point_system::{fixed_point_system, FixedPointSystemCfg};
use riffle::root_finding::newton::{newton, NewtonCfg};
use riffle::root_finding::newton_system::{newton_system, Jacobian2, NewtonSystemCfg};
use riffle::root_finding::report::{RootFindingReport, SystemReport};
use tracing::debug;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    task_1()?;
    task_2()?;
    task_4()?;
    Ok(())
}

fn print_result(method: &str, report: &RootFindingReport) {
    println!("{method}");
    println!("Root: {}", report.root);
    println!("Iterations: {}", report.iterations);
}

fn print_system_result(method: &str, report: &SystemReport) {
    println!("{method}");
    println!("Root: x = {}, y = {}", report.x, report.y);
    println!("Iterations: {}", report.iterations);
}

/// Bisection of `2*log10(d) - d/2 + 1` on `[0.1, 6.2]`.
fn task_1() -> Result<(), Box<dyn Error>> {
    println!("Task 1");

    let f = |d: f64| 2.0 * d.log10() - d / 2.0 + 1.0;
    let res = bisection(f, 0.1, 6.2, BisectionCfg::new())?;
    debug!(iterations = res.iterations, residual = res.residual, "bisection finished");
    print_result("Bisection", &res);

    println!();
    Ok(())
}

/// The equation `3d = cos(d) + 2` from 8.75: first as the fixed-point map
/// `d = (cos(d) + 2) / 3`, then as `3d - cos(d) - 2 = 0` by Newton.
fn task_2() -> Result<(), Box<dyn Error>> {
    println!("Task 2");

    let g = |d: f64| (d.cos() + 2.0) / 3.0;
    let res = fixed_point(g, 8.75, FixedPointCfg::new())?;
    debug!(iterations = res.iterations, residual = res.residual, "fixed point finished");
    print_result("Simple iteration", &res);

    let f = |d: f64| 3.0 * d - d.cos() - 2.0;
    let df = |d: f64| 3.0 + d.sin();
    let res = newton(f, df, 8.75, NewtonCfg::new())?;
    debug!(iterations = res.iterations, residual = res.residual, "newton finished");
    print_result("Newton", &res);

    println!();
    Ok(())
}

/// The system `sin(x + y) = 1.2x + 0.2`, `x^2 + y^2 = 1` from `(0.8, 0.8)`:
/// Newton with the analytic Jacobian, then sequential fixed-point iteration
/// on the rearranged forms.
fn task_4() -> Result<(), Box<dyn Error>> {
    println!("Task 4");

    let f = |x: f64, y: f64| ((x + y).sin() - 1.2 * x - 0.2, x * x + y * y - 1.0);
    let jac = |x: f64, y: f64| Jacobian2 {
        df1_dx: (x + y).cos() - 1.2,
        df1_dy: (x + y).cos(),
        df2_dx: 2.0 * x,
        df2_dy: 2.0 * y,
    };
    let res = newton_system(f, jac, 0.8, 0.8, NewtonSystemCfg::new())?;
    debug!(iterations = res.iterations, "newton system finished");
    print_system_result("Newton", &res);

    let g1 = |x: f64, y: f64| ((x + y).sin() - 0.2) / 1.2;
    let g2 = |x: f64| (1.0 - x * x).sqrt();
    let res = fixed_point_system(g1, g2, 0.8, 0.8, FixedPointSystemCfg::new())?;
    debug!(iterations = res.iterations, "fixed point system finished");
    print_system_result("Simple iteration", &res);

    Ok(())
}
