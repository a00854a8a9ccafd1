//! In-plane placement on an elliptical orbit.
//!
//! The animation collaborator owns the scene: it derives the mean anomaly
//! from elapsed time and places meshes. This module ships the one piece of
//! math it would otherwise re-derive, the perifocal position
//!
//! ```text
//! x = a * (cos E - e)
//! y = b * sin E,    b = a * sqrt(1 - e^2)
//! ```
//!
//! with `E` obtained from the Kepler solver. Coordinates are expressed in
//! whatever unit the semi-major axis uses (scene units, AU, ...), with the
//! x axis pointing at periapsis and the focus at the origin.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::kepler::{principal_angle, solve_with, SolveOptions};
use crate::kepsolve_errors::KepsolveError;

/// Shape of a closed orbit.
/// Units:
/// * `semi_major_axis`: any length unit, carried through to positions
/// * `eccentricity`: unitless, 0 ≤ e < 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipticalOrbit {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
}

impl EllipticalOrbit {
    /// b = a·√(1 − e²)
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity.powi(2)).sqrt()
    }

    /// Perifocal position of the body at the given mean anomaly.
    ///
    /// The mean anomaly is reduced to its principal value before solving,
    /// so a caller may pass the raw time-proportional angle accumulated
    /// over many revolutions. The eccentricity is validated by the solver;
    /// positions are 2π-periodic in the mean anomaly.
    pub fn position_at(
        &self,
        mean_anomaly: f64,
        options: &SolveOptions,
    ) -> Result<Vector2<f64>, KepsolveError> {
        let solution = solve_with(principal_angle(mean_anomaly), self.eccentricity, options)?;
        let (sin_ecc, cos_ecc) = solution.eccentric_anomaly.sin_cos();

        Ok(Vector2::new(
            self.semi_major_axis * (cos_ecc - self.eccentricity),
            self.semi_minor_axis() * sin_ecc,
        ))
    }
}

#[cfg(test)]
mod test_orbit {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_semi_minor_axis() {
        let orbit = EllipticalOrbit {
            semi_major_axis: 2.0,
            eccentricity: 0.5,
        };

        assert_abs_diff_eq!(orbit.semi_minor_axis(), 1.7320508075688772, epsilon = 1e-15);
    }

    #[test]
    fn test_periapsis_and_apoapsis() {
        let orbit = EllipticalOrbit {
            semi_major_axis: 2.0,
            eccentricity: 0.5,
        };
        let options = SolveOptions::default();

        // M = 0 puts the body at periapsis, x = a(1 - e).
        let periapsis = orbit.position_at(0.0, &options).unwrap();
        assert_abs_diff_eq!(periapsis.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(periapsis.y, 0.0, epsilon = 1e-12);

        // M = π puts it at apoapsis, x = -a(1 + e).
        let apoapsis = orbit.position_at(std::f64::consts::PI, &options).unwrap();
        assert_abs_diff_eq!(apoapsis.x, -3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(apoapsis.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_position_lies_on_ellipse() {
        let orbit = EllipticalOrbit {
            semi_major_axis: 1.5,
            eccentricity: 0.3,
        };
        let options = SolveOptions::with_tolerance(40, 1e-13);

        let position = orbit.position_at(2.0, &options).unwrap();
        let centered_x = position.x + orbit.semi_major_axis * orbit.eccentricity;
        let on_ellipse = (centered_x / orbit.semi_major_axis).powi(2)
            + (position.y / orbit.semi_minor_axis()).powi(2);

        assert_abs_diff_eq!(on_ellipse, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_position_is_periodic_in_mean_anomaly() {
        let orbit = EllipticalOrbit {
            semi_major_axis: 1.0,
            eccentricity: 0.2,
        };
        let options = SolveOptions::with_tolerance(40, 1e-13);

        let base = orbit.position_at(2.0, &options).unwrap();
        let wrapped = orbit
            .position_at(2.0 + 3.0 * crate::constants::DPI, &options)
            .unwrap();

        assert_abs_diff_eq!(base.x, wrapped.x, epsilon = 1e-9);
        assert_abs_diff_eq!(base.y, wrapped.y, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_eccentricity_is_rejected() {
        let orbit = EllipticalOrbit {
            semi_major_axis: 1.0,
            eccentricity: 1.0,
        };

        assert_eq!(
            orbit.position_at(0.3, &SolveOptions::default()),
            Err(KepsolveError::EccentricityOutOfRange(1.0))
        );
    }
}
