//! Classical root-finding iteration methods.
//!
//! `root_finding` provides scalar solvers (bisection, fixed-point iteration,
//! Newton's method) and two solvers for 2x2 nonlinear systems (Newton with a
//! closed-form Jacobian inverse, and Gauss–Seidel-style fixed-point
//! iteration). Every solver takes the problem as closures, returns a report
//! struct with the result and termination data, and never loops unboundedly.

pub mod root_finding;
