//! The fixed test function both solvers are run against.

/// Human-readable form of [`target`], used in the driver banner. 
pub const TARGET_EXPRESSION: &str = "e^x - 3x";

/// f(x) = e^x - 3x 
/// 
/// Roots lie near `x ≈ 0.619061` and `x ≈ 1.512135`.
#[inline]
pub fn target(x: f64) -> f64 { 
    x.exp() - 3.0 * x
}
