//! # Newton–Raphson solver for the elliptic Kepler equation
//!
//! Given a mean anomaly `M` (radians) and an eccentricity `e` in `[0, 1)`,
//! the solver finds the eccentric anomaly `E` satisfying
//!
//! ```text
//! E - e * sin(E) = M
//! ```
//!
//! The left-hand side is strictly increasing in `E` (its derivative
//! `1 - e * cos(E)` is never below `1 - e`), so the root is unique for any
//! finite `M` and the Newton denominator cannot vanish inside the valid
//! domain.
//!
//! Two iteration policies are available through [`SolveOptions`]:
//!
//! - a fixed step budget with no convergence check, for callers that need
//!   predictable per-call cost (one solve per animated body per frame),
//! - an early exit once the Newton step drops under a tolerance, for
//!   callers that want precision over fixed work.
//!
//! Convergence slows down as `e` approaches 1 (near-parabolic orbits). The
//! fixed-budget mode makes no error-bound promise in that regime; use the
//! tolerance mode and check [`KeplerSolution::converged`] there.

use serde::{Deserialize, Serialize};

use crate::constants::{Radian, DEFAULT_NEWTON_STEPS, DPI};
use crate::kepsolve_errors::KepsolveError;

/// Returns the principal value of an angle in radians, in [0, 2π).
///
/// Animation loops accumulate a mean anomaly proportional to elapsed time,
/// which grows without bound; wrapping it restores floating-point precision
/// and keeps the Newton seed next to the root. The solver itself accepts
/// unwrapped angles.
pub fn principal_angle(a: f64) -> f64 {
    a.rem_euclid(DPI)
}

/// Iteration policy for [`solve_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveOptions {
    /// Maximum number of Newton steps, at least 1.
    pub max_iter: usize,
    /// Early-exit threshold on the Newton step size, in radians.
    ///
    /// `None` runs exactly `max_iter` steps. `Some(t)` with `t > 0` stops as
    /// soon as the last step is smaller than `t`; `Some(0.0)` is accepted
    /// and never triggers the exit.
    pub tolerance: Option<f64>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_NEWTON_STEPS,
            tolerance: None,
        }
    }
}

impl SolveOptions {
    /// Fixed work: exactly `max_iter` Newton steps, no convergence check.
    pub fn fixed(max_iter: usize) -> Self {
        Self {
            max_iter,
            tolerance: None,
        }
    }

    /// Early exit once the Newton step drops under `tolerance` radians.
    pub fn with_tolerance(max_iter: usize, tolerance: f64) -> Self {
        Self {
            max_iter,
            tolerance: Some(tolerance),
        }
    }
}

/// Outcome of a single Kepler solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Best available estimate of the eccentric anomaly, in radians.
    pub eccentric_anomaly: Radian,
    /// Newton steps actually performed.
    pub iterations: usize,
    /// Whether the requested tolerance was reached.
    ///
    /// Always `true` in fixed mode. In tolerance mode, `false` means the
    /// budget ran out first; `eccentric_anomaly` still holds the best
    /// estimate rather than failing outright.
    pub converged: bool,
}

fn check_inputs(
    mean_anomaly: f64,
    eccentricity: f64,
    options: &SolveOptions,
) -> Result<(), KepsolveError> {
    if !mean_anomaly.is_finite() {
        return Err(KepsolveError::NonFiniteMeanAnomaly(mean_anomaly));
    }
    if !eccentricity.is_finite() {
        return Err(KepsolveError::NonFiniteEccentricity(eccentricity));
    }
    // Parabolic and hyperbolic regimes are rejected, never clamped.
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(KepsolveError::EccentricityOutOfRange(eccentricity));
    }
    if options.max_iter == 0 {
        return Err(KepsolveError::EmptyIterationBudget);
    }
    if let Some(tol) = options.tolerance {
        if !tol.is_finite() || tol < 0.0 {
            return Err(KepsolveError::InvalidTolerance(tol));
        }
    }
    Ok(())
}

/// Solves Kepler's equation with the default policy and returns the
/// eccentric anomaly.
///
/// Equivalent to [`solve_with`] under [`SolveOptions::default`]: six Newton
/// steps, no convergence check.
pub fn solve(mean_anomaly: Radian, eccentricity: f64) -> Result<Radian, KepsolveError> {
    let solution = solve_with(mean_anomaly, eccentricity, &SolveOptions::default())?;
    Ok(solution.eccentric_anomaly)
}

/// Solves Kepler's equation E − e·sin(E) = M for E.
///
/// Newton–Raphson on f(E) = E − e·sin(E) − M, seeded at E₀ = M. The call is
/// pure and reentrant; cost is bounded by `options.max_iter` trigonometric
/// evaluations.
///
/// Errors are raised before iterating: `eccentricity` outside [0, 1) or
/// non-finite inputs are never run through the loop.
pub fn solve_with(
    mean_anomaly: Radian,
    eccentricity: f64,
    options: &SolveOptions,
) -> Result<KeplerSolution, KepsolveError> {
    check_inputs(mean_anomaly, eccentricity, options)?;

    let mut ecc_anomaly = mean_anomaly;
    let mut iterations = 0;
    let mut converged = options.tolerance.is_none();

    for _ in 0..options.max_iter {
        let delta = (ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly)
            / (1.0 - eccentricity * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        iterations += 1;

        if let Some(tol) = options.tolerance {
            if delta.abs() < tol {
                converged = true;
                break;
            }
        }
    }

    Ok(KeplerSolution {
        eccentric_anomaly: ecc_anomaly,
        iterations,
        converged,
    })
}
