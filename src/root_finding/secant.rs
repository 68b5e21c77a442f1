use std::iter::FusedIterator; 

use super::algorithms::Algorithm; 
use super::report::{RootFindingReport, SecantStep, Stencil, TerminationReason}; 
use super::errors::RootFindingError; 
use super::config::{CommonCfg, impl_common_cfg}; 
use super::target::target; 
use thiserror::Error; 


#[derive(Debug, Error, PartialEq)] 
pub enum SecantError{ 
    #[error(transparent)] 
    RootFinding(#[from] RootFindingError),

    #[error("invalid initial guesses: x0={x0} and x1={x1} must be finite")]
    InvalidGuess { x0: f64, x1: f64 }, 
}


/// Secant configuration 
///
/// # Fields 
/// - `common` : [`CommonCfg`] with `error_limit` and optional `max_iter`.
///
/// # Construction 
/// - Use [`SecantCfg::new`] then optional setters. 
///
/// # Defaults 
/// - If `common.max_iter` is `None`, [`SecantIter`] resolves it using 
///   [`Algorithm::default_max_iter`] for [`Algorithm::Secant`]. 
#[derive(Debug, Copy, Clone, Default)]
pub struct SecantCfg { 
    common: CommonCfg, 
}
impl SecantCfg { 
    pub fn new() -> Self { 
        Self { 
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(SecantCfg);


/// Secant x-intercept of the line through `(x0, fx0)` and `(x1, fx1)`. 
///
/// # Returns 
/// - `Some(x2)` : `x1 - fx1 * (x1 - x0) / (fx1 - fx0)` 
/// - `None`     : if `fx1 - fx0` is exactly `0.0` 
#[inline]
pub(crate) fn secant_x_intercept(
    (x0, fx0): (f64, f64), 
    (x1, fx1): (f64, f64), 
) -> Option<f64> {
    let denom = fx1 - fx0;
    if denom == 0.0 {
        return None;
    } 

    Some(x1 - fx1 * (x1 - x0) / denom)
}


/// Lazy secant iteration. 
/// 
/// Yields one [`SecantStep`] per completed iteration and stops for good 
/// once the run terminates; [`SecantIter::report`] is then `Some`. 
/// 
/// # Behavior 
/// - Update: 
///     x_{k+1} = x_k - f(x_k) * (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1})) 
/// - `f(x_k) - f(x_{k-1}) == 0.0` exactly ends the run with 
///   [`TerminationReason::DivisionByZero`] before a step is emitted. 
/// - `|x_{k+1} - x_k| < error_limit` ends the run with 
///   [`TerminationReason::Converged`] after the step is emitted. 
/// - Otherwise the run ends with [`TerminationReason::IterationLimit`] 
///   after `max_iter` steps. 
#[derive(Debug, Clone)]
pub struct SecantIter<F> { 
    func        : F, 
    x0          : f64, 
    x1          : f64, 
    error_limit : f64, 
    max_iter    : usize, 
    iter        : usize, 
    evals       : usize, 
    report      : Option<RootFindingReport>, 
}

impl<F> SecantIter<F> 
where F: FnMut(f64) -> f64 { 
    /// Starts a secant run on `func`. 
    ///
    /// # Errors
    /// - [`SecantError::InvalidGuess`]         : `x0` or `x1` is NaN/inf
    /// - [`RootFindingError::InvalidMaxIter`]  : `max_iter` = 0 
    ///
    /// Equal finite guesses are accepted; they end the first iteration 
    /// with [`TerminationReason::DivisionByZero`]. 
    pub fn new(func: F, x0: f64, x1: f64, cfg: SecantCfg) -> Result<Self, SecantError> { 
        if !(x0.is_finite() && x1.is_finite()) { 
            return Err(SecantError::InvalidGuess { x0, x1 });
        }

        let max_iter = match cfg.max_iter() {
            // already validated via building config; redundant guard
            Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()), 
            other   => Algorithm::Secant.resolve_max_iter(other), 
        };

        Ok(Self { 
            func, 
            x0, 
            x1, 
            error_limit : cfg.error_limit(), 
            max_iter, 
            iter        : 0, 
            evals       : 0, 
            report      : None, 
        })
    }

    /// Final report, available once the iterator has returned `None`. 
    pub fn report(&self) -> Option<RootFindingReport> { 
        self.report
    }

    /// Drives the remaining iterations and returns the final report. 
    pub fn run(mut self) -> RootFindingReport { 
        loop { 
            if let Some(report) = self.report { 
                return report; 
            }
            self.next(); 
        }
    }

    fn finish(&mut self, root: f64, reason: TerminationReason) { 
        self.report = Some(RootFindingReport { 
            root, 
            iterations         : self.iter, 
            evaluations        : self.evals, 
            termination_reason : reason, 
            stencil            : Stencil::doubleton(self.x0, self.x1), 
            algorithm          : Algorithm::Secant, 
        }); 
    }
}

impl<F> Iterator for SecantIter<F> 
where F: FnMut(f64) -> f64 { 
    type Item = SecantStep; 

    fn next(&mut self) -> Option<SecantStep> { 
        if self.report.is_some() { 
            return None; 
        }
        if self.iter >= self.max_iter { 
            self.finish(f64::NAN, TerminationReason::IterationLimit); 
            return None; 
        }

        let fx0 = (self.func)(self.x0); 
        let fx1 = (self.func)(self.x1); 
        self.evals += 2; 

        let Some(x2) = secant_x_intercept((self.x0, fx0), (self.x1, fx1)) else { 
            self.finish(f64::NAN, TerminationReason::DivisionByZero); 
            return None; 
        };
        let error = (x2 - self.x1).abs(); 
        self.iter += 1; 

        let step = SecantStep { 
            iteration : self.iter, 
            x0        : self.x0, 
            x1        : self.x1, 
            fx1, 
            x2, 
            error, 
        };

        if error < self.error_limit { 
            self.finish(x2, TerminationReason::Converged); 
            return Some(step); 
        }

        self.x0 = self.x1; 
        self.x1 = x2; 
        Some(step)
    }
}

impl<F> FusedIterator for SecantIter<F> where F: FnMut(f64) -> f64 {}


/// Secant iteration on the target function `e^x - 3x`. 
pub fn secant_steps(
    x0: f64, 
    x1: f64, 
    cfg: SecantCfg 
) -> Result<SecantIter<fn(f64) -> f64>, SecantError> { 
    SecantIter::new(target as fn(f64) -> f64, x0, x1, cfg)
}


/// Finds a root of `e^x - 3x` using the 
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `x0`  : first initial guess, must be finite
/// - `x1`  : second initial guess, must be finite
/// - `cfg` : [`SecantCfg`] (`error_limit`, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] whose `root` is NaN unless the run converged. 
///
/// # Errors
/// - [`SecantError::InvalidGuess`]                       : `x0` or `x1` is NaN/inf
/// - [`SecantError::RootFinding`] with `InvalidMaxIter`  : `max_iter` = 0
///
/// # Warning 
/// - Poor initial guesses may lead to divergence or extremely slow convergence.
pub fn secant(x0: f64, x1: f64, cfg: SecantCfg) -> Result<RootFindingReport, SecantError> { 
    Ok(secant_steps(x0, x1, cfg)?.run())
}
