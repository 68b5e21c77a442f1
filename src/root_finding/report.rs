//! Defines the iteration records emitted by both solvers and the 
//! [`RootFindingReport`] returned once a run ends. 

use super::algorithms::Algorithm; 

/// Reasons a root-finding run may terminate.
/// - [`TerminationReason::Converged`]      : |x_{n+1} - x_n| < error_limit 
/// - [`TerminationReason::DivisionByZero`] : secant denominator was exactly 0.0 
/// - [`TerminationReason::IterationLimit`] : `max_iter` iterations without converging 
#[derive(Debug, Clone, Copy, PartialEq, Eq)] 
pub enum TerminationReason { 
    Converged, 
    DivisionByZero,
    IterationLimit,
}


/// Points used in the last update formula. 
/// - secant          : `[x0, x1]` 
/// - modified secant : `[x0]` 
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stencil { 
    x: [f64; 2], 
    len: usize, 
}
impl Stencil { 
    pub fn stencil(&self) -> &[f64] { 
        &self.x[..self.len]
    }
    pub fn singleton(x: f64) -> Self { 
        Stencil { x: [x, 0.0], len: 1 }
    }
    pub fn doubleton(x0: f64, x1: f64) -> Self { 
        Stencil { x: [x0, x1], len: 2 }
    }
}


/// One iteration of the secant method.
///
/// - `iteration` : 1-based iteration index
/// - `x0`, `x1`  : the two points the step was formed from
/// - `fx1`       : f(x1)
/// - `x2`        : new estimate
/// - `error`     : |x2 - x1|
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecantStep { 
    pub iteration : usize, 
    pub x0        : f64, 
    pub x1        : f64, 
    pub fx1       : f64, 
    pub x2        : f64, 
    pub error     : f64, 
}


/// One iteration of the modified secant method. 
/// 
/// - `iteration` : 1-based iteration index 
/// - `x`         : new estimate 
/// - `fx`        : f(x) at the new estimate 
/// - `error`     : |x - x_prev| 
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModifiedSecantStep { 
    pub iteration : usize, 
    pub x         : f64, 
    pub fx        : f64, 
    pub error     : f64, 
}


/// Final report returned by both root-finding algorithms.  
/// 
/// [`RootFindingReport`]
/// - `root`               : converged estimate, NaN when no root was found  
/// - `iterations`         : completed iterations (records emitted)  
/// - `evaluations`        : total function evaluations  
/// - `termination_reason` : why the solver stopped ([`TerminationReason`])  
/// - `stencil`            : points used in the last update formula    
/// - `algorithm`          : which method produced the report  
#[derive(Debug, Copy, Clone)] 
pub struct RootFindingReport {
    pub root               : f64, 
    pub iterations         : usize, 
    pub evaluations        : usize, 
    pub termination_reason : TerminationReason, 
    pub stencil            : Stencil, 
    pub algorithm          : Algorithm, 
}

impl RootFindingReport { 
    /// `true` only for [`TerminationReason::Converged`]. 
    pub fn converged(&self) -> bool { 
        self.termination_reason == TerminationReason::Converged
    }

    /// Algorithm name (e.g. `"secant"`). 
    pub fn algorithm_name(&self) -> &'static str { 
        self.algorithm.algorithm_name()
    }

    /// The root if one was found. 
    pub fn root(&self) -> Option<f64> { 
        self.converged().then_some(self.root)
    }
}
