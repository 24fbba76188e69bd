use kzg10_algebra::{PairingEngine, ScalarField};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::commit::{commit_coeffs, ensure_poly_supported};
use crate::error::KzgError;
use crate::params::ProverKey;
use crate::poly::Polynomial;

/// Proof that a committed polynomial takes a claimed value at a point: a
/// commitment to the quotient `q(X) = (p(X) - p(z)) / (X - z)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(serialize = "E::G1: Serialize", deserialize = "E::G1: Deserialize<'de>")
)]
pub struct OpeningProof<E: PairingEngine>(E::G1);

impl<E: PairingEngine> OpeningProof<E> {
    pub fn new(point: E::G1) -> Self {
        Self(point)
    }

    pub fn point(&self) -> E::G1 {
        self.0
    }
}

/// Opens `poly` at `point`, returning `(p(point), proof)`.
///
/// The quotient is obtained by subtracting the evaluation and dividing by
/// `(X - point)`; by the remainder theorem the division is exact.
///
/// # Returns
///
/// * `Err(KzgError::DegreeTooLarge)` - if `deg p` exceeds the SRS bound,
///   checked before any group arithmetic
///
/// # Panics
///
/// Panics if the division leaves a remainder, which would indicate broken
/// field arithmetic rather than bad input.
#[instrument(name = "open", skip_all, fields(degree = ?poly.degree()))]
pub fn open<E: PairingEngine>(
    pk: &ProverKey<E>,
    poly: &Polynomial<E::Scalar>,
    point: E::Scalar,
) -> Result<(E::Scalar, OpeningProof<E>), KzgError> {
    ensure_poly_supported(pk, poly)?;

    let value = poly.evaluate(point);
    let shifted = poly - &Polynomial::constant(value);
    let (quotient, remainder) = shifted.divide_by_linear(point);
    assert_eq!(
        remainder,
        E::Scalar::ZERO,
        "p(X) - p(z) must be divisible by (X - z)"
    );

    Ok((value, OpeningProof(commit_coeffs(pk, quotient.coeffs()))))
}
