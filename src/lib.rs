//! Secant and modified secant root finding for f(x) = e^x - 3x.
//!
//! ┌ [`root_finding`] : target function, both solvers, configs, reports
//! └ [`driver`]       : line-oriented prompt driver used by the binary

pub mod root_finding;
pub mod driver;
