//! tests for the secant root-finding algorithm
use approx::assert_abs_diff_eq;
use secant::root_finding::report::TerminationReason;
use secant::root_finding::secant::{secant, secant_steps, SecantCfg, SecantError, SecantIter};
use secant::root_finding::target::target;

type TestResult = Result<(), SecantError>;

const LOWER_ROOT: f64 = 0.619_061_286_735_945;
const UPPER_ROOT: f64 = 1.512_134_551_657_842;

fn cfg(error_limit: f64, max_iter: usize) -> Result<SecantCfg, SecantError> {
    Ok(SecantCfg::new()
        .set_error_limit(error_limit)?
        .set_max_iter(max_iter)?)
}

#[test]
fn finds_lower_root_from_zero_and_one() -> TestResult {
    let res = secant(0.0, 1.0, cfg(1e-6, 50)?)?;

    assert_eq!(res.termination_reason, TerminationReason::Converged);
    assert!(res.converged());
    assert_abs_diff_eq!(res.root, LOWER_ROOT, epsilon = 1e-6);
    assert!(res.iterations > 0 && res.iterations < 15);
    assert_eq!(res.evaluations, 2 * res.iterations);
    assert_eq!(res.algorithm_name(), "secant");
    Ok(())
}

#[test]
fn finds_upper_root_from_nearby_guesses() -> TestResult {
    let res = secant(1.4, 1.6, cfg(1e-6, 50)?)?;

    assert_eq!(res.termination_reason, TerminationReason::Converged);
    assert_abs_diff_eq!(res.root, UPPER_ROOT, epsilon = 1e-6);
    assert!(target(res.root).abs() < 1e-8);
    Ok(())
}

#[test]
fn default_cfg_converges() -> TestResult {
    let res = secant(0.0, 1.0, SecantCfg::new())?;

    assert_eq!(res.root(), Some(res.root));
    assert_abs_diff_eq!(res.root, LOWER_ROOT, epsilon = 1e-6);
    Ok(())
}

#[test]
fn steps_follow_the_update_formula() -> TestResult {
    let steps: Vec<_> = secant_steps(0.0, 1.0, cfg(1e-6, 50)?)?.collect();

    let first = steps[0];
    assert_eq!(first.iteration, 1);
    assert_eq!(first.x0, 0.0);
    assert_eq!(first.x1, 1.0);
    assert_eq!(first.fx1, target(1.0));

    let expected = 1.0 - target(1.0) * (1.0 - 0.0) / (target(1.0) - target(0.0));
    assert_eq!(first.x2, expected);
    assert_eq!(first.error, (expected - 1.0).abs());

    // consecutive steps shift x0 <- x1, x1 <- x2
    for pair in steps.windows(2) {
        assert_eq!(pair[1].iteration, pair[0].iteration + 1);
        assert_eq!(pair[1].x0, pair[0].x1);
        assert_eq!(pair[1].x1, pair[0].x2);
    }

    // only the last step satisfies the tolerance
    let (last, rest) = steps.split_last().unwrap();
    assert!(last.error < 1e-6);
    assert!(rest.iter().all(|s| s.error >= 1e-6));
    Ok(())
}

#[test]
fn report_matches_drained_iterator() -> TestResult {
    let mut steps = secant_steps(0.0, 1.0, cfg(1e-6, 50)?)?;
    assert!(steps.report().is_none());

    let last = steps.by_ref().last().unwrap();
    let res  = steps.report().unwrap();

    assert_eq!(res.root, last.x2);
    assert_eq!(res.iterations, last.iteration);
    assert_eq!(res.stencil.stencil(), &[last.x0, last.x1]);

    // finite and not restartable
    assert!(steps.next().is_none());
    Ok(())
}

#[test]
fn rerun_from_converged_value_converges_immediately() -> TestResult {
    let res = secant(0.0, 1.0, cfg(1e-6, 50)?)?;
    let prev = res.stencil.stencil()[1];

    let again = secant(prev, res.root, cfg(1e-6, 1)?)?;

    assert_eq!(again.termination_reason, TerminationReason::Converged);
    assert_eq!(again.iterations, 1);
    assert_abs_diff_eq!(again.root, res.root, epsilon = 1e-6);
    Ok(())
}

#[test]
fn equal_guesses_divide_by_zero() -> TestResult {
    let res = secant(1.0, 1.0, cfg(1e-6, 50)?)?;

    assert_eq!(res.termination_reason, TerminationReason::DivisionByZero);
    assert!(res.root.is_nan());
    assert_eq!(res.root(), None);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 2);

    assert_eq!(secant_steps(1.0, 1.0, cfg(1e-6, 50)?)?.count(), 0);
    Ok(())
}

#[test]
fn flat_function_divides_by_zero_after_first_step() -> TestResult {
    // f is constant for x <= 0.25; the first step lands at -0.25, 
    // so the second step sees f(0.25) == f(-0.25)
    let f = |x: f64| if x <= 0.25 { 1.0 } else { 1.0 + x };
    let mut steps = SecantIter::new(f, 0.5, 0.25, cfg(1e-12, 50)?)?;

    let first = steps.next().unwrap();
    assert_eq!(first.x2, -0.25);
    assert!(steps.next().is_none());

    let res = steps.report().unwrap();
    assert_eq!(res.termination_reason, TerminationReason::DivisionByZero);
    assert_eq!(res.iterations, 1);
    assert!(res.root.is_nan());
    Ok(())
}

#[test]
fn zero_error_limit_exhausts_max_iter() -> TestResult {
    // e^x has no root; secant steps drift left by roughly ln(2) each iteration
    let max_iter = 10;
    let mut steps = SecantIter::new(f64::exp, 0.0, 1.0, cfg(0.0, max_iter)?)?;

    assert_eq!(steps.by_ref().count(), max_iter);

    let res = steps.report().unwrap();
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, max_iter);
    assert!(res.root.is_nan());
    Ok(())
}

#[test]
fn max_iter_one_hits_limit() -> TestResult {
    let res = secant(0.0, 1.0, cfg(1e-6, 1)?)?;

    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.iterations, 1);
    assert!(res.root.is_nan());
    Ok(())
}

#[test]
fn invalid_non_finite_guess() {
    let err = secant(f64::NAN, 1.0, SecantCfg::new()).unwrap_err();
    assert!(matches!(err, SecantError::InvalidGuess { x0, x1 } if x0.is_nan() && x1 == 1.0));

    let err = secant(0.0, f64::INFINITY, SecantCfg::new()).unwrap_err();
    assert!(matches!(err, SecantError::InvalidGuess { .. }));
}
