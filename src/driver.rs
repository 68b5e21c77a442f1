//! Prompt driver comparing both methods on `e^x - 3x`.  
//! 
//! Reads, one value per line and in this order:  
//! ┌ modified secant : `x0`, `delta`, `error_limit`, `max_iter`  
//! └ standard secant : `x0`, `x1`  
//!
//! The standard secant run reuses `error_limit` and `max_iter` from the 
//! modified secant block. Both traces are written to the output; a solver 
//! that fails to find a root only changes the printed status line.

use std::io::{BufRead, Write}; 
use std::str::FromStr; 

use crate::root_finding::algorithms::Algorithm; 
use crate::root_finding::errors::RootFindingError; 
use crate::root_finding::modified_secant::{modified_secant_steps, ModifiedSecantCfg, ModifiedSecantError}; 
use crate::root_finding::report::RootFindingReport; 
use crate::root_finding::secant::{secant_steps, SecantCfg, SecantError}; 
use crate::root_finding::target::TARGET_EXPRESSION; 
use crate::root_finding::trace::Heading; 
use thiserror::Error; 


#[derive(Debug, Error)]
pub enum DriverError { 
    #[error(transparent)]
    Io(#[from] std::io::Error), 

    #[error("input ended before `{field}` was read")]
    UnexpectedEof { field: &'static str }, 

    #[error("could not parse `{field}` from {got:?}")]
    Parse { field: &'static str, got: String }, 

    #[error(transparent)]
    RootFinding(#[from] RootFindingError), 

    #[error(transparent)]
    Secant(#[from] SecantError), 

    #[error(transparent)]
    ModifiedSecant(#[from] ModifiedSecantError), 
}


/// Everything the driver reads before running the solvers. 
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Params { 
    pub modified_x0 : f64, 
    pub delta       : f64, 
    pub error_limit : f64, 
    pub max_iter    : usize, 
    pub secant_x0   : f64, 
    pub secant_x1   : f64, 
}

impl Params { 
    pub fn modified_secant_cfg(&self) -> Result<ModifiedSecantCfg, DriverError> { 
        Ok(ModifiedSecantCfg::new()
            .set_delta(self.delta)?
            .set_error_limit(self.error_limit)?
            .set_max_iter(self.max_iter)?)
    }

    pub fn secant_cfg(&self) -> Result<SecantCfg, DriverError> { 
        Ok(SecantCfg::new()
            .set_error_limit(self.error_limit)?
            .set_max_iter(self.max_iter)?)
    }
}


/// Writes a prompt, then reads and parses the next line. 
struct Prompter<R, W> { 
    input  : R, 
    output : W, 
    line   : String, 
}

impl<R: BufRead, W: Write> Prompter<R, W> { 
    fn ask<T: FromStr>(&mut self, field: &'static str, prompt: &str) -> Result<T, DriverError> { 
        write!(self.output, "{prompt}")?; 
        self.output.flush()?; 

        self.line.clear(); 
        if self.input.read_line(&mut self.line)? == 0 { 
            return Err(DriverError::UnexpectedEof { field });
        }
        let raw = self.line.trim(); 
        raw.parse().map_err(|_| DriverError::Parse { field, got: raw.to_owned() })
    }
}


/// Prompts for [`Params`] on `output` and reads them from `input`. 
pub fn read_params<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<Params, DriverError> { 
    let mut p = Prompter { input, output, line: String::new() }; 

    writeln!(p.output, "\nModified Secant Method Input:")?; 
    let modified_x0: f64 = p.ask("x0", "Enter initial guess x0: ")?; 
    let delta: f64       = p.ask("delta", "Enter delta (small value, e.g., 0.01): ")?; 
    let error_limit: f64 = p.ask("error_limit", "Enter error limit: ")?; 
    let max_iter: usize  = p.ask("max_iter", "Enter maximum iterations: ")?; 

    writeln!(p.output, "\nStandard Secant Method Input:")?; 
    let secant_x0: f64 = p.ask("x0", "Enter first guess x0: ")?; 
    let secant_x1: f64 = p.ask("x1", "Enter second guess x1: ")?; 

    Ok(Params { modified_x0, delta, error_limit, max_iter, secant_x0, secant_x1 })
}


/// Writes the heading and one trace line per step, draining `steps`. 
fn write_steps<W, I>(output: &mut W, algorithm: Algorithm, steps: &mut I) -> Result<(), DriverError> 
where 
    W: Write, 
    I: Iterator, 
    I::Item: std::fmt::Display, 
{ 
    writeln!(output, "\n{}", Heading(algorithm))?; 
    for step in steps { 
        writeln!(output, "{step}")?; 
    }
    Ok(())
}


/// Runs both solvers with `params`, writing their traces to `output`. 
/// 
/// Returns the modified secant and standard secant reports, in that order. 
pub fn compare<W: Write>(
    params: &Params, 
    output: &mut W 
) -> Result<(RootFindingReport, RootFindingReport), DriverError> { 
    let mut modified = modified_secant_steps(params.modified_x0, params.modified_secant_cfg()?)?; 
    let mut standard = secant_steps(params.secant_x0, params.secant_x1, params.secant_cfg()?)?; 

    write_steps(output, Algorithm::ModifiedSecant, &mut modified)?; 
    let modified = modified.run(); 
    writeln!(output, "{modified}")?; 

    write_steps(output, Algorithm::Secant, &mut standard)?; 
    let standard = standard.run(); 
    writeln!(output, "{standard}")?; 

    Ok((modified, standard))
}


/// Full interactive session: banner, prompts, both traces. 
/// 
/// Solver outcomes never turn into an `Err`; only I/O failures, unparseable 
/// input, and parameters rejected by the solver configs do. 
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<(), DriverError> { 
    writeln!(
        output, 
        "Comparing Modified Secant and Standard Secant Methods for f(x) = {TARGET_EXPRESSION}"
    )?; 
    let params = read_params(input, output)?; 
    compare(&params, output)?; 
    Ok(())
}
