use kzg10_algebra::{CurveGroup, PairingEngine};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::KzgError;
use crate::params::ProverKey;
use crate::poly::Polynomial;

/// A commitment `C = p(s)·g₁` to a polynomial `p`.
///
/// Binding: under a trustworthy SRS no one can open `C` to two different
/// polynomials. **Not hiding**: there is no blinding factor, so equal
/// polynomials always produce equal commitments and a low-entropy polynomial
/// can be recovered by guessing.
///
/// Decoded commitments are untrusted; verification rejects values that are not
/// group members.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(serialize = "E::G1: Serialize", deserialize = "E::G1: Deserialize<'de>")
)]
pub struct Commitment<E: PairingEngine>(E::G1);

impl<E: PairingEngine> Commitment<E> {
    pub fn new(point: E::G1) -> Self {
        Self(point)
    }

    pub fn point(&self) -> E::G1 {
        self.0
    }
}

/// Commits to a polynomial in coefficient form.
///
/// Given `p(X) = c₀ + c₁X + … + cₙXⁿ`, computes the multi-scalar
/// multiplication
///
/// `C = c₀·g₁ + c₁·(s·g₁) + … + cₙ·(sⁿ·g₁) = p(s)·g₁`
///
/// # Returns
///
/// * `Ok(Commitment)` - the commitment; the zero polynomial commits to the
///   identity
/// * `Err(KzgError::DegreeTooLarge)` - if `deg p` exceeds the SRS bound
#[instrument(name = "commit", skip_all, fields(degree = ?poly.degree()))]
pub fn commit<E: PairingEngine>(
    pk: &ProverKey<E>,
    poly: &Polynomial<E::Scalar>,
) -> Result<Commitment<E>, KzgError> {
    ensure_poly_supported(pk, poly)?;
    Ok(Commitment(commit_coeffs(pk, poly.coeffs())))
}

/// Commits to every polynomial, or to none if any exceeds the degree bound.
#[instrument(name = "batch commit", skip_all, fields(num_polys = polys.len()))]
pub fn batch_commit<E: PairingEngine>(
    pk: &ProverKey<E>,
    polys: &[Polynomial<E::Scalar>],
) -> Result<Vec<Commitment<E>>, KzgError> {
    for poly in polys {
        ensure_poly_supported(pk, poly)?;
    }
    Ok(polys
        .iter()
        .map(|poly| Commitment(commit_coeffs(pk, poly.coeffs())))
        .collect())
}

pub(crate) fn ensure_poly_supported<E: PairingEngine>(
    pk: &ProverKey<E>,
    poly: &Polynomial<E::Scalar>,
) -> Result<(), KzgError> {
    match poly.degree() {
        Some(degree) => pk.ensure_supported(degree),
        None => Ok(()),
    }
}

/// MSM of `coeffs` against the leading powers of `s`. The caller has already
/// checked `coeffs.len() <= pk.max_degree() + 1`.
pub(crate) fn commit_coeffs<E: PairingEngine>(pk: &ProverKey<E>, coeffs: &[E::Scalar]) -> E::G1 {
    E::G1::multi_exp(&pk.powers_of_s()[..coeffs.len()], coeffs)
}
