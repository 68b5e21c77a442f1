//! Root-finding error types.  
//! 
//! ┌ [`RootFindingError`] : invalid parameters shared by every solver  
//! │   ├ invalid `max_iter` (must be >= 1)  
//! │   └ invalid `error_limit` (must be finite and >= 0)  
//! │
//! └ per-solver errors wrap it transparently  
//!     ├ [`SecantError`](super::secant::SecantError)  
//!     └ [`ModifiedSecantError`](super::modified_secant::ModifiedSecantError)  
//!
//! A zero secant denominator and an exhausted iteration cap are *not* errors. 
//! They end a run normally and show up as a 
//! [`TerminationReason`](super::report::TerminationReason) with a NaN root.


use thiserror::Error; 


/// Invalid parameter errors common to all solvers.  
/// 
/// ┌ Invalid `max_iter` (< 1)  
/// └ Invalid `error_limit` (negative or non-finite)
#[derive(Debug, Error, PartialEq)]
pub enum RootFindingError {
    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid `error_limit`: must be finite and >= 0. got {got}")]
    InvalidErrorLimit { got: f64 },
}
