//! Human-readable trace formatting.  
//! 
//! ┌ [`Heading`]           : method title, column header, rule line  
//! ├ [`SecantStep`]         : `iter  x0  x1  f(x1)  error`  
//! ├ [`ModifiedSecantStep`] : `iter  x  f(x)  error`  
//! └ [`RootFindingReport`]  : final status line  
//!
//! Columns are tab-separated with six decimals.

use std::fmt; 

use super::algorithms::Algorithm; 
use super::report::{ModifiedSecantStep, RootFindingReport, SecantStep, TerminationReason}; 


/// Title, column header and rule printed before a run's steps. 
#[derive(Debug, Copy, Clone)]
pub struct Heading(pub Algorithm); 

impl fmt::Display for Heading { 
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { 
        let (columns, rule_len) = match self.0 { 
            Algorithm::Secant         => ("Iter\t   x0\t\t x1\t\t f(x1)\t\t Error", 59), 
            Algorithm::ModifiedSecant => ("Iter\t   x\t\t f(x)\t\t Error", 50), 
        };
        writeln!(f, "{}:", self.0.title())?; 
        writeln!(f, "{columns}")?; 
        write!(f, "{}", "-".repeat(rule_len))
    }
}

impl fmt::Display for SecantStep { 
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { 
        write!(
            f, "{}\t {:.6}\t {:.6}\t {:.6}\t {:.6}", 
            self.iteration, self.x0, self.x1, self.fx1, self.error
        )
    }
}

impl fmt::Display for ModifiedSecantStep { 
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { 
        write!(f, "{}\t {:.6}\t {:.6}\t {:.6}", self.iteration, self.x, self.fx, self.error)
    }
}

impl fmt::Display for RootFindingReport { 
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { 
        match self.termination_reason { 
            TerminationReason::Converged => write!(
                f, "Root found near x = {:.6} after {} iterations", self.root, self.iterations
            ), 
            TerminationReason::DivisionByZero => write!(f, "Division by zero detected!"), 
            TerminationReason::IterationLimit => write!(
                f, "{} did not converge within max iterations.", self.algorithm.short_title()
            ), 
        }
    }
}
