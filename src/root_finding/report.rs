//! Defines the report structs returned by all root-finding algorithms.

/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
    MachinePrecisionReached,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - residual methods (Newton)
///     - |f(x)| < eps
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - bracketing methods (bisection)
///     - [a, b] -> b - a < eps
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - fixed-point methods and system methods
///     - |x_n - x_{n-1}| <= eps (componentwise max for systems)
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - All methods
///     - Tolerance not reached, usually with [`TerminationReason::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    WidthTolReached,
    StepSizeReached,
    ToleranceNotReached,
}


/// Final report returned by the scalar root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`                : best solution estimate
/// - `residual`            : distance from the solution condition at `root`;
///                           `f(root)` for root solvers, `g(root) - root` for
///                           fixed-point iteration
/// - `iterations`          : total iterations
/// - `evaluations`         : total function evaluations
/// - `termination_reason`  : why the solver stopped  ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `bracket`             : final bracketing interval, bracket methods only
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Copy, Clone)]
pub struct RootFindingReport {
    pub root                : f64,
    pub residual            : f64,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub bracket             : Option<(f64, f64)>,
    pub algorithm_name      : &'static str,
}


/// Final report returned by the 2x2 system solvers.
///
/// Solved state is returned by value; repeated calls with the same inputs
/// are independent and yield identical reports.
#[derive(Debug, Copy, Clone)]
pub struct SystemReport {
    pub x                   : f64,
    pub y                   : f64,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub algorithm_name      : &'static str,
}
