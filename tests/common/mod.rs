use approx::assert_abs_diff_eq;

/// Check that `ecc_anomaly` is a root of Kepler's equation for the given
/// mean anomaly and eccentricity.
pub fn assert_kepler_root(mean_anomaly: f64, eccentricity: f64, ecc_anomaly: f64, epsilon: f64) {
    assert_abs_diff_eq!(
        ecc_anomaly - eccentricity * ecc_anomaly.sin(),
        mean_anomaly,
        epsilon = epsilon
    );
}
