//! Bracketed bisection with a sign-change scan.

use thiserror::Error;

/// Bisection solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct BisectConfig {
    /// Number of equal sub-intervals scanned for a sign change when the
    /// endpoints do not bracket one.
    pub scan_intervals: usize,
    /// Maximum bisection iterations
    pub max_iterations: usize,
    /// Convergence tolerance, applied to |f(m)| and to the interval width
    pub tol: f64,
}

impl Default for BisectConfig {
    fn default() -> Self {
        Self {
            scan_intervals: 50,
            max_iterations: 80,
            tol: 1e-6,
        }
    }
}

/// Errors from [`bisect`]. `E` is the error type of the evaluated function.
#[derive(Error, Debug)]
pub enum BisectError<E> {
    #[error("function evaluation failed during root search: {0}")]
    Eval(E),

    #[error("function value is not finite at x={x}")]
    NonFinite { x: f64 },

    #[error("no sign change in [{a}, {b}]")]
    NoSignChange { a: f64, b: f64 },

    #[error("bisection did not converge within {iterations} iterations")]
    NoConvergence { iterations: usize },
}

/// Find a root of `f` on `[a, b]`.
///
/// The endpoints are evaluated first; if they already bracket a sign change
/// the interval is bisected directly. Otherwise `scan_intervals` equal
/// sub-intervals are walked left to right and the first one containing a
/// sign change is bisected. Convergence is declared when |f(m)| or the
/// interval width drops below `tol`.
///
/// Any evaluation error aborts the search; there is no fallback to a
/// secondary method.
pub fn bisect<F, E>(f: F, a: f64, b: f64, cfg: &BisectConfig) -> Result<f64, BisectError<E>>
where
    F: Fn(f64) -> Result<f64, E>,
{
    let eval = |x: f64| -> Result<f64, BisectError<E>> {
        let y = f(x).map_err(BisectError::Eval)?;
        if y.is_nan() || y.is_infinite() {
            return Err(BisectError::NonFinite { x });
        }
        Ok(y)
    };

    let (orig_a, orig_b) = (a, b);
    let mut lo = a;
    let mut hi = b;
    let mut f_lo = eval(lo)?;
    let f_hi = eval(hi)?;

    if f_lo == 0.0 {
        return Ok(lo);
    }
    if f_hi == 0.0 {
        return Ok(hi);
    }

    if f_lo * f_hi > 0.0 {
        // Walk the interval for the first sub-interval with a sign change.
        let n = cfg.scan_intervals.max(1);
        let mut prev_x = lo;
        let mut prev_f = f_lo;
        let mut found = false;
        for k in 1..=n {
            let x = a + (k as f64 / n as f64) * (b - a);
            let fx = eval(x)?;
            if prev_f * fx <= 0.0 {
                lo = prev_x;
                hi = x;
                f_lo = prev_f;
                found = true;
                break;
            }
            prev_x = x;
            prev_f = fx;
        }
        if !found {
            return Err(BisectError::NoSignChange {
                a: orig_a,
                b: orig_b,
            });
        }
    }

    for _ in 0..cfg.max_iterations {
        let mid = 0.5 * (lo + hi);
        let f_mid = eval(mid)?;
        if f_mid.abs() < cfg.tol || (hi - lo).abs() < cfg.tol {
            return Ok(mid);
        }
        if f_lo * f_mid <= 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }
    Err(BisectError::NoConvergence {
        iterations: cfg.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn ok(f: impl Fn(f64) -> f64) -> impl Fn(f64) -> Result<f64, Infallible> {
        move |x| Ok(f(x))
    }

    #[test]
    fn simple_quadratic() {
        // x^2 - 4 = 0 on [0, 10]
        let cfg = BisectConfig::default();
        let root = bisect(ok(|x| x * x - 4.0), 0.0, 10.0, &cfg).unwrap();
        assert!((root - 2.0).abs() < 1e-5);
    }

    #[test]
    fn scan_finds_interior_bracket() {
        // Same sign at both endpoints, a dip below zero in between; the
        // scan must land on the first crossing.
        let cfg = BisectConfig::default();
        let root = bisect(ok(|x| (x - 2.0) * (x - 4.0)), 0.0, 5.0, &cfg).unwrap();
        assert!((root - 2.0).abs() < 1e-5);
    }

    #[test]
    fn no_sign_change_is_an_error() {
        let cfg = BisectConfig::default();
        let err = bisect(ok(|x| x * x + 1.0), -3.0, 3.0, &cfg).unwrap_err();
        assert!(matches!(err, BisectError::NoSignChange { .. }));
    }

    #[test]
    fn eval_error_aborts() {
        let cfg = BisectConfig::default();
        let err = bisect(
            |x: f64| {
                if x > 2.0 {
                    Err("blew up")
                } else {
                    Ok(x - 3.0)
                }
            },
            0.0,
            4.0,
            &cfg,
        )
        .unwrap_err();
        assert!(matches!(err, BisectError::Eval(_)));
    }

    #[test]
    fn non_finite_value_is_an_error() {
        let cfg = BisectConfig::default();
        let err = bisect(ok(|x| (x - 0.5).ln()), 0.0, 1.0, &cfg).unwrap_err();
        assert!(matches!(err, BisectError::NonFinite { .. }));
    }

    #[test]
    fn exact_endpoint_root_returns_immediately() {
        let cfg = BisectConfig::default();
        let root = bisect(ok(|x| x - 1.0), 1.0, 2.0, &cfg).unwrap();
        assert_eq!(root, 1.0);
    }
}
