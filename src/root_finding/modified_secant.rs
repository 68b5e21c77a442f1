//! Modified secant method 

use std::iter::FusedIterator; 

use super::algorithms::Algorithm; 
use super::report::{ModifiedSecantStep, RootFindingReport, Stencil, TerminationReason}; 
use super::errors::RootFindingError; 
use super::config::{CommonCfg, impl_common_cfg}; 
use super::target::target; 
use thiserror::Error;


pub const DEFAULT_DELTA: f64 = 0.01; 


#[derive(Debug, Error, PartialEq)] 
pub enum ModifiedSecantError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 }, 

    #[error("invalid delta: must be finite and != 0. got delta={got}")] 
    InvalidDelta { got: f64 },
}


/// Modified secant configuration 
///
/// # Fields 
/// - `common` : [`CommonCfg`] with `error_limit` and optional `max_iter`.
/// - `delta`  : relative perturbation; the second point is `x * (1 + delta)`.
#[derive(Debug, Copy, Clone)]
pub struct ModifiedSecantCfg { 
    common: CommonCfg, 
    delta: f64, 
}
impl ModifiedSecantCfg { 
    pub fn new() -> Self { 
        Self { 
            common: CommonCfg::new(), 
            delta: DEFAULT_DELTA, 
        }
    }

    pub fn delta(&self) -> f64 { self.delta }

    pub fn set_delta(mut self, v: f64) -> Result<Self, ModifiedSecantError> { 
        if !v.is_finite() || v == 0.0 { 
            return Err(ModifiedSecantError::InvalidDelta { got: v });
        }
        self.delta = v; 
        Ok(self)
    }
}
impl Default for ModifiedSecantCfg { 
    fn default() -> Self { 
        Self::new()
    }
}
impl_common_cfg!(ModifiedSecantCfg);


/// Next estimate from `x0` and its relative perturbation `x0 + delta * x0`. 
/// 
/// # Returns 
/// - `Some(x1)` : `x0 - fx * delta * x0 / (fx_delta - fx)` 
/// - `None`     : if `fx_delta - fx` is exactly `0.0` 
#[inline]
pub(crate) fn perturbed_secant_step(x0: f64, fx: f64, fx_delta: f64, delta: f64) -> Option<f64> { 
    let denom = fx_delta - fx; 
    if denom == 0.0 { 
        return None; 
    }

    Some(x0 - (fx * delta * x0) / denom)
}


/// Lazy modified secant iteration. 
/// 
/// Yields one [`ModifiedSecantStep`] per completed iteration and stops for 
/// good once the run terminates; [`ModifiedSecantIter::report`] is then `Some`. 
/// 
/// # Behavior 
/// - Update: 
///     x_{k+1} = x_k - f(x_k) * delta * x_k / (f(x_k + delta * x_k) - f(x_k)) 
/// - A zero denominator ends the run with [`TerminationReason::DivisionByZero`]. 
///   This always happens on the first iteration when `x0 == 0.0`, since the 
///   perturbed point is then `x0` itself. 
/// - `|x_{k+1} - x_k| < error_limit` ends the run with 
///   [`TerminationReason::Converged`] after the step is emitted. 
/// - Otherwise the run ends with [`TerminationReason::IterationLimit`] 
///   after `max_iter` steps. 
#[derive(Debug, Clone)]
pub struct ModifiedSecantIter<F> { 
    func        : F, 
    x0          : f64, 
    delta       : f64, 
    error_limit : f64, 
    max_iter    : usize, 
    iter        : usize, 
    evals       : usize, 
    report      : Option<RootFindingReport>, 
}

impl<F> ModifiedSecantIter<F> 
where F: FnMut(f64) -> f64 { 
    /// Starts a modified secant run on `func`. 
    ///
    /// # Errors
    /// - [`ModifiedSecantError::InvalidGuess`]  : `x0` is NaN/inf
    /// - [`ModifiedSecantError::InvalidDelta`]  : `delta` is 0 or NaN/inf
    /// - [`RootFindingError::InvalidMaxIter`]   : `max_iter` = 0 
    pub fn new(func: F, x0: f64, cfg: ModifiedSecantCfg) -> Result<Self, ModifiedSecantError> { 
        if !x0.is_finite() { 
            return Err(ModifiedSecantError::InvalidGuess { x0 });
        }

        // already validated via building config; redundant guards
        let delta = cfg.delta(); 
        if !delta.is_finite() || delta == 0.0 { 
            return Err(ModifiedSecantError::InvalidDelta { got: delta });
        }
        let max_iter = match cfg.max_iter() {
            Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()), 
            other   => Algorithm::ModifiedSecant.resolve_max_iter(other), 
        };

        Ok(Self { 
            func, 
            x0, 
            delta, 
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
            stencil            : Stencil::singleton(self.x0), 
            algorithm          : Algorithm::ModifiedSecant, 
        }); 
    }
}

impl<F> Iterator for ModifiedSecantIter<F> 
where F: FnMut(f64) -> f64 { 
    type Item = ModifiedSecantStep; 

    fn next(&mut self) -> Option<ModifiedSecantStep> { 
        if self.report.is_some() { 
            return None; 
        }
        if self.iter >= self.max_iter { 
            self.finish(f64::NAN, TerminationReason::IterationLimit); 
            return None; 
        }

        let x0       = self.x0; 
        let fx       = (self.func)(x0); 
        let fx_delta = (self.func)(x0 + self.delta * x0); 
        self.evals  += 2; 

        let Some(x1) = perturbed_secant_step(x0, fx, fx_delta, self.delta) else { 
            self.finish(f64::NAN, TerminationReason::DivisionByZero); 
            return None; 
        };
        let error = (x1 - x0).abs(); 
        let fx1   = (self.func)(x1); 
        self.evals += 1; 
        self.iter  += 1; 

        let step = ModifiedSecantStep { 
            iteration : self.iter, 
            x         : x1, 
            fx        : fx1, 
            error, 
        };

        if error < self.error_limit { 
            self.finish(x1, TerminationReason::Converged); 
            return Some(step); 
        }

        self.x0 = x1; 
        Some(step)
    }
}

impl<F> FusedIterator for ModifiedSecantIter<F> where F: FnMut(f64) -> f64 {}


/// Modified secant iteration on the target function `e^x - 3x`. 
pub fn modified_secant_steps(
    x0: f64, 
    cfg: ModifiedSecantCfg 
) -> Result<ModifiedSecantIter<fn(f64) -> f64>, ModifiedSecantError> { 
    ModifiedSecantIter::new(target as fn(f64) -> f64, x0, cfg)
}


/// Finds a root of `e^x - 3x` with the modified secant method, which 
/// replaces the second secant point by the relative perturbation 
/// `x * (1 + delta)`.
///
/// # Arguments
/// - `x0`  : initial guess, must be finite
/// - `cfg` : [`ModifiedSecantCfg`] (`delta`, `error_limit`, optional `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] whose `root` is NaN unless the run converged. 
///
/// # Errors
/// - [`ModifiedSecantError::InvalidGuess`] : `x0` is NaN/inf
/// - [`ModifiedSecantError::InvalidDelta`] : `delta` is 0 or NaN/inf
/// - [`ModifiedSecantError::RootFinding`]  : `max_iter` = 0
pub fn modified_secant(
    x0: f64, 
    cfg: ModifiedSecantCfg 
) -> Result<RootFindingReport, ModifiedSecantError> { 
    Ok(modified_secant_steps(x0, cfg)?.run())
}
