use thiserror::Error;

/// Errors surfaced by setup, commitment, opening and verification.
///
/// A proof that simply does not verify is not an error: verification returns
/// `Ok(false)`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KzgError {
    #[error("degree bound {degree} is outside the supported range 1..={max}")]
    InvalidDegree { degree: usize, max: usize },
    #[error("polynomial degree {degree} exceeds SRS degree bound {max}")]
    DegreeTooLarge { degree: usize, max: usize },
    #[error("malformed input: {0}")]
    MalformedInput(&'static str),
    #[error("batch has {openings} openings but {coefficients} combination coefficients")]
    BatchArityMismatch { openings: usize, coefficients: usize },
}
