use kzg10_algebra::{CurveGroup, PairingEngine};
use tracing::{debug, instrument};

use crate::commit::Commitment;
use crate::error::KzgError;
use crate::open::OpeningProof;
use crate::params::VerifierKey;

/// Verifies a KZG opening proof using a pairing check.
///
/// Checks that `commitment` opens to `value` at `point`:
///
/// `e(C - v·g₁, g₂) = e(π, s·g₂ - z·g₂)`
///
/// which holds exactly when `π = q(s)·g₁` for `q(X) = (p(X) - v)/(X - z)`,
/// i.e. when `p(z) = v`. The two sides are compared as one product of
/// pairings sharing a final exponentiation.
///
/// # Returns
///
/// * `Ok(true)` / `Ok(false)` - whether the opening is valid
/// * `Err(KzgError::MalformedInput)` - if the commitment or proof is not a
///   member of G1; checked before any pairing
///
/// # Security
///
/// Under the q-SDH assumption it is computationally infeasible to produce an
/// accepting proof for an incorrect value without knowing `s`.
#[instrument(name = "verify", skip_all, level = "debug")]
pub fn verify<E: PairingEngine>(
    vk: &VerifierKey<E>,
    commitment: &Commitment<E>,
    point: E::Scalar,
    value: E::Scalar,
    proof: &OpeningProof<E>,
) -> Result<bool, KzgError> {
    ensure_member::<E>(commitment.point(), "commitment is not a G1 element")?;
    ensure_member::<E>(proof.point(), "opening proof is not a G1 element")?;

    let accepted = opening_holds(vk, commitment.point(), point, value, proof.point());
    debug!(accepted, "single opening check");
    Ok(accepted)
}

pub(crate) fn opening_holds<E: PairingEngine>(
    vk: &VerifierKey<E>,
    commitment: E::G1,
    point: E::Scalar,
    value: E::Scalar,
    proof: E::G1,
) -> bool {
    let shifted_commitment = commitment - vk.g1().mul_scalar(value);
    let shifted_s = vk.s_g2() - vk.g2().mul_scalar(point);
    E::pairing_product_is_identity(&[(shifted_commitment, vk.g2()), (-proof, shifted_s)])
}

pub(crate) fn ensure_member<E: PairingEngine>(
    element: E::G1,
    what: &'static str,
) -> Result<(), KzgError> {
    if element.is_valid() {
        Ok(())
    } else {
        Err(KzgError::MalformedInput(what))
    }
}
