//! Shared configuration for root-finding algorithms.  
//! 
//! Provides [`CommonCfg`] with the default tolerance and iteration limit, 
//! used by both solver configs.
//!
//! [`CommonCfg`] — universal fields  
//! ├ `error_limit` : bound on |x_{n+1} - x_n| that counts as converged  
//! └ `max_iter`    : iteration cap (optional) 
//!
//! [`CommonCfg::new`] initializes configuration with default values. 
//!
//! The modified secant config carries one more argument, the relative 
//! perturbation `delta`.


pub const DEFAULT_ERROR_LIMIT : f64 = 1e-6;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    error_limit: f64,
    max_iter: Option<usize>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self { 
            error_limit : DEFAULT_ERROR_LIMIT, 
            max_iter    : None 
        }
    }

    // getters  
    pub fn error_limit(&self) -> f64 { self.error_limit }
    pub fn max_iter(&self)    -> Option<usize> { self.max_iter }

    // setters (internal) 
    pub(crate) fn with_error_limit (&mut self, v: f64)   { self.error_limit = v; }
    pub(crate) fn with_max_iter    (&mut self, v: usize) { self.max_iter = Some(v); }
}

impl Default for CommonCfg { 
    fn default() -> Self { 
        Self::new()
    }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn error_limit(&self) -> f64 { self.common.error_limit() }
            pub fn max_iter(&self) -> Option<usize> { self.common.max_iter() }

            /// `0.0` is accepted and makes convergence unreachable. 
            pub fn set_error_limit(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if !v.is_finite() || v < 0.0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidErrorLimit { got: v }
                    );
                }
                self.common.with_error_limit(v);
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
