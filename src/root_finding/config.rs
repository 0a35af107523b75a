//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the convergence tolerance and iteration limit
//! used by all solver configs.
//!
//! [`CommonCfg`] — universal fields
//! - `eps`      : convergence tolerance, meaning depends on the method
//!                (interval width, step size, or residual magnitude)
//! - `max_iter` : iteration cap (optional; method default when unset)
//!
//! [`CommonCfg::new`] takes the method's default tolerance, since scalar
//! methods and system methods converge against different epsilons.


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    eps: f64,
    max_iter: Option<usize>,
}

impl CommonCfg {
    pub fn new(default_eps: f64) -> Self {
        Self {
            eps: default_eps,
            max_iter: None,
        }
    }

    // getters
    pub fn eps(&self)      -> f64 { self.eps }
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    // setters (internal)
    pub(crate) fn with_eps      (&mut self, v: f64)   { self.eps = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = Some(v); }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_eps(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ToleranceError::InvalidEps { got: v }
                    );
                }
                self.common.with_eps(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
