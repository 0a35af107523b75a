//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the shared [`GLOBAL_MAX_ITER_FALLBACK`] hard cap.


/// Most methods use heuristic defaults from [`Algorithm::default_max_iter`].
/// This cap is applied when a bracket algorithm's theoretical iteration bound
/// would otherwise exceed it (e.g. [`BracketFamily::Bisection`] on a very
/// wide interval with a tight tolerance).
///
/// Serves as a practical safeguard against iteration counts that are
/// mathematically valid but computationally excessive.
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500;


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for scalar equations
/// - [`Algorithm::Open`]    contains open methods for scalar equations
/// - [`Algorithm::System`]  contains methods for 2x2 nonlinear systems
#[derive(Debug, Copy, Clone)]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
    System(SystemFamily),
}

#[derive(Debug, Copy, Clone)]
pub enum BracketFamily {
    Bisection,
}

#[derive(Debug, Copy, Clone)]
pub enum OpenFamily {
    FixedPoint,
    Newton,
}

#[derive(Debug, Copy, Clone)]
pub enum SystemFamily {
    Newton,
    FixedPoint,
}

impl Algorithm {
    /// Default iteration count if `max_iter` is unset in config.
    ///
    /// # Notes
    /// - Applied only when `max_iter` is unset.
    /// - Values are heuristic and method-specific: linearly convergent
    ///   fixed-point maps get a larger budget than Newton steps.
    /// - Methods with theoretical bounds ([`BracketFamily::Bisection`])
    ///   return `None`, meaning "compute theoretical bound instead".
    ///   - If that bound exceeds practical limits,
    ///     [`GLOBAL_MAX_ITER_FALLBACK`] is used.
    pub const fn default_max_iter(self) -> Option<usize> {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => None,
            Algorithm::Open(OpenFamily::FixedPoint)      => Some(200),
            Algorithm::Open(OpenFamily::Newton)          => Some(50),
            Algorithm::System(SystemFamily::Newton)      => Some(50),
            Algorithm::System(SystemFamily::FixedPoint)  => Some(200),
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => "bisection",
            Algorithm::Open(OpenFamily::FixedPoint)      => "fixed_point",
            Algorithm::Open(OpenFamily::Newton)          => "newton",
            Algorithm::System(SystemFamily::Newton)      => "newton_system",
            Algorithm::System(SystemFamily::FixedPoint)  => "fixed_point_system",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
