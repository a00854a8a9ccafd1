use thiserror::Error;

#[derive(Error, Debug)]
pub enum KepsolveError {
    #[error("Eccentricity {0} is outside the elliptic domain [0, 1)")]
    EccentricityOutOfRange(f64),

    #[error("Mean anomaly is not finite: {0}")]
    NonFiniteMeanAnomaly(f64),

    #[error("Eccentricity is not finite: {0}")]
    NonFiniteEccentricity(f64),

    #[error("Iteration budget must be at least 1")]
    EmptyIterationBudget,

    #[error("Tolerance must be finite and non-negative: {0}")]
    InvalidTolerance(f64),
}

impl PartialEq for KepsolveError {
    fn eq(&self, other: &Self) -> bool {
        use KepsolveError::*;
        match (self, other) {
            (EccentricityOutOfRange(a), EccentricityOutOfRange(b)) => a == b,

            // NaN payloads are not comparable: equality if same variant
            (NonFiniteMeanAnomaly(_), NonFiniteMeanAnomaly(_)) => true,
            (NonFiniteEccentricity(_), NonFiniteEccentricity(_)) => true,
            (InvalidTolerance(_), InvalidTolerance(_)) => true,

            (EmptyIterationBudget, EmptyIterationBudget) => true,

            _ => false,
        }
    }
}
