use crate::distribution::Distribution;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when a name does not match any distribution.
    #[error("unknown distribution: {0:?}")]
    UnknownDistribution(String),

    /// Returned when the parameter list does not match the distribution's arity.
    #[error("{distribution} expects {expected} parameters, got {got}")]
    ArityMismatch {
        distribution: Distribution,
        expected: usize,
        got: usize,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
