//! Batch verification of many openings with caller-supplied random
//! combination coefficients.
//!
//! Both entry points reduce the batch to a single pairing-product check. If the
//! coefficients are sampled uniformly *after* the claims are fixed (for
//! example squeezed from a Fiat–Shamir transcript over them), a batch
//! containing a false claim passes with probability at most `1/|F|`. The
//! coefficients are never derived here.
//!
//! Batches fail closed: an empty batch, or one with a zero coefficient (which
//! would drop its claim from the check), is rejected.

use kzg10_algebra::{CurveGroup, PairingEngine, ScalarField, dot_product};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::commit::Commitment;
use crate::error::KzgError;
use crate::open::OpeningProof;
use crate::parallel::{join, par_map_collect};
use crate::params::VerifierKey;
use crate::verify::{ensure_member, verify};

/// A claim that `commitment` opens to `value` at `point`, witnessed by `proof`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "E::G1: Serialize, E::Scalar: Serialize",
    deserialize = "E::G1: Deserialize<'de>, E::Scalar: Deserialize<'de>"
))]
pub struct OpeningClaim<E: PairingEngine> {
    pub commitment: Commitment<E>,
    pub point: E::Scalar,
    pub value: E::Scalar,
    pub proof: OpeningProof<E>,
}

/// A claim at a point shared by the whole batch; see
/// [`verify_batch_same_point`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "E::G1: Serialize, E::Scalar: Serialize",
    deserialize = "E::G1: Deserialize<'de>, E::Scalar: Deserialize<'de>"
))]
pub struct EvaluationClaim<E: PairingEngine> {
    pub commitment: Commitment<E>,
    pub value: E::Scalar,
    pub proof: OpeningProof<E>,
}

/// A folded batch: accepted iff `e(lhs, g₂) = e(rhs, s·g₂)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AggregatedCheck<E: PairingEngine> {
    pub lhs: E::G1,
    pub rhs: E::G1,
}

impl<E: PairingEngine> AggregatedCheck<E> {
    pub fn holds(&self, vk: &VerifierKey<E>) -> bool {
        E::pairing_product_is_identity(&[(self.lhs, vk.g2()), (-self.rhs, vk.s_g2())])
    }
}

/// Folds openings at arbitrary points into one [`AggregatedCheck`].
///
/// Every honest claim satisfies `Cᵢ - vᵢ·g₁ + zᵢ·πᵢ = s·πᵢ`, so with
/// coefficients `rᵢ`:
///
/// - `lhs = Σ rᵢ·Cᵢ + Σ (rᵢzᵢ)·πᵢ - (Σ rᵢvᵢ)·g₁`
/// - `rhs = Σ rᵢ·πᵢ`
///
/// This step only reduces data; it does not validate group membership or
/// reject zero coefficients.
pub fn fold_openings<E: PairingEngine>(
    vk: &VerifierKey<E>,
    claims: &[OpeningClaim<E>],
    coefficients: &[E::Scalar],
) -> Result<AggregatedCheck<E>, KzgError> {
    ensure_arity(claims.len(), coefficients.len())?;

    let weighted: Vec<(E::Scalar, E::Scalar)> = par_map_collect(0..claims.len(), |i| {
        let r = coefficients[i];
        (r * claims[i].point, r * claims[i].value)
    });
    let value_sum: E::Scalar = weighted.iter().map(|&(_, rv)| rv).sum();

    let proofs: Vec<E::G1> = claims.iter().map(|c| c.proof.point()).collect();
    let bases: Vec<E::G1> = claims
        .iter()
        .map(|c| c.commitment.point())
        .chain(proofs.iter().copied())
        .chain([vk.g1()])
        .collect();
    let scalars: Vec<E::Scalar> = coefficients
        .iter()
        .copied()
        .chain(weighted.iter().map(|&(rz, _)| rz))
        .chain([-value_sum])
        .collect();

    let (lhs, rhs) = join(
        || E::G1::multi_exp(&bases, &scalars),
        || E::G1::multi_exp(&proofs, coefficients),
    );
    Ok(AggregatedCheck { lhs, rhs })
}

/// Verifies openings of many commitments, each at its own point, with one
/// product of two pairings:
///
/// `e(Σ rᵢ·(Cᵢ - vᵢ·g₁ + zᵢ·πᵢ), g₂) · e(-Σ rᵢ·πᵢ, s·g₂) = 1`
///
/// # Returns
///
/// * `Ok(false)` - a claim is false (with probability ≥ `1 - 1/|F|`), the
///   batch is empty, or a coefficient is zero
/// * `Err(KzgError::BatchArityMismatch)` - claim and coefficient counts differ
/// * `Err(KzgError::MalformedInput)` - a commitment or proof is not in G1
#[instrument(name = "verify batch", skip_all, fields(batch_size = claims.len()))]
pub fn verify_batch<E: PairingEngine>(
    vk: &VerifierKey<E>,
    claims: &[OpeningClaim<E>],
    coefficients: &[E::Scalar],
) -> Result<bool, KzgError> {
    ensure_arity(claims.len(), coefficients.len())?;
    for claim in claims {
        ensure_member::<E>(claim.commitment.point(), "commitment is not a G1 element")?;
        ensure_member::<E>(claim.proof.point(), "opening proof is not a G1 element")?;
    }
    if !coefficients_usable(coefficients) {
        return Ok(false);
    }

    let accepted = fold_openings(vk, claims, coefficients)?.holds(vk);
    debug!(accepted, "aggregated pairing check");
    Ok(accepted)
}

/// Folds same-point claims into one claim `(C*, v*, π*)` with
/// `C* = Σ rᵢ·Cᵢ`, `v* = Σ rᵢvᵢ` and `π* = Σ rᵢ·πᵢ`.
///
/// If every claim is honest, the folded claim is an honest opening of
/// `Σ rᵢ·pᵢ` at the shared point.
pub fn fold_same_point<E: PairingEngine>(
    claims: &[EvaluationClaim<E>],
    coefficients: &[E::Scalar],
) -> Result<(Commitment<E>, E::Scalar, OpeningProof<E>), KzgError> {
    ensure_arity(claims.len(), coefficients.len())?;

    let commitments: Vec<E::G1> = claims.iter().map(|c| c.commitment.point()).collect();
    let proofs: Vec<E::G1> = claims.iter().map(|c| c.proof.point()).collect();
    let values: Vec<E::Scalar> = claims.iter().map(|c| c.value).collect();

    let (commitment, proof) = join(
        || E::G1::multi_exp(&commitments, coefficients),
        || E::G1::multi_exp(&proofs, coefficients),
    );
    Ok((
        Commitment::new(commitment),
        dot_product(&values, coefficients),
        OpeningProof::new(proof),
    ))
}

/// Verifies openings of many commitments at one shared `point` by folding
/// them and running a single [`verify`].
///
/// Same error contract as [`verify_batch`].
#[instrument(name = "verify batch same point", skip_all, fields(batch_size = claims.len()))]
pub fn verify_batch_same_point<E: PairingEngine>(
    vk: &VerifierKey<E>,
    point: E::Scalar,
    claims: &[EvaluationClaim<E>],
    coefficients: &[E::Scalar],
) -> Result<bool, KzgError> {
    ensure_arity(claims.len(), coefficients.len())?;
    for claim in claims {
        ensure_member::<E>(claim.commitment.point(), "commitment is not a G1 element")?;
        ensure_member::<E>(claim.proof.point(), "opening proof is not a G1 element")?;
    }
    if !coefficients_usable(coefficients) {
        return Ok(false);
    }

    let (commitment, value, proof) = fold_same_point(claims, coefficients)?;
    verify(vk, &commitment, point, value, &proof)
}

fn ensure_arity(openings: usize, coefficients: usize) -> Result<(), KzgError> {
    if openings == coefficients {
        Ok(())
    } else {
        Err(KzgError::BatchArityMismatch {
            openings,
            coefficients,
        })
    }
}

fn coefficients_usable<F: ScalarField>(coefficients: &[F]) -> bool {
    if coefficients.is_empty() {
        warn!("rejecting empty batch");
        return false;
    }
    if let Some(index) = coefficients.iter().position(|r| r.is_zero()) {
        warn!(index, "rejecting batch with a zero combination coefficient");
        return false;
    }
    true
}
