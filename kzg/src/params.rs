//! Structured reference string: the proving and verification keys produced by
//! the trusted setup.

use kzg10_algebra::{CurveGroup, PairingEngine, ScalarField};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::KzgError;

/// Largest degree bound accepted by setup and by imported parameters.
pub const MAX_SUPPORTED_DEGREE: usize = 1 << 28;

pub(crate) fn ensure_degree_bound(degree: usize) -> Result<(), KzgError> {
    if (1..=MAX_SUPPORTED_DEGREE).contains(&degree) {
        Ok(())
    } else {
        Err(KzgError::InvalidDegree {
            degree,
            max: MAX_SUPPORTED_DEGREE,
        })
    }
}

/// Powers of the secret in G1: `[g₁, s·g₁, s²·g₁, …, sᵈ·g₁]`.
///
/// Deserialization checks the shape, membership and first power. The
/// powers cannot be tied to `s` without the verifier key; decode the whole
/// [`StructuredReferenceString`] for that.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "ProverKeyParts<E>",
    into = "ProverKeyParts<E>",
    bound(
        serialize = "E::G1: Serialize",
        deserialize = "E::G1: Deserialize<'de>"
    )
)]
pub struct ProverKey<E: PairingEngine> {
    powers_of_s: Vec<E::G1>,
}

impl<E: PairingEngine> ProverKey<E> {
    /// Maximum supported polynomial degree (inclusive).
    pub fn max_degree(&self) -> usize {
        self.powers_of_s.len() - 1
    }

    pub fn powers_of_s(&self) -> &[E::G1] {
        &self.powers_of_s
    }

    fn validate(powers_of_s: Vec<E::G1>) -> Result<Self, KzgError> {
        ensure_degree_bound(powers_of_s.len().saturating_sub(1))?;
        if !powers_of_s.iter().all(|p| p.is_valid()) {
            return Err(KzgError::MalformedInput(
                "SRS power is not a group member",
            ));
        }
        if powers_of_s[0] != E::G1::generator() {
            return Err(KzgError::MalformedInput(
                "first SRS power is not the G1 generator",
            ));
        }
        Ok(Self { powers_of_s })
    }

    pub(crate) fn ensure_supported(&self, degree: usize) -> Result<(), KzgError> {
        if degree > self.max_degree() {
            Err(KzgError::DegreeTooLarge {
                degree,
                max: self.max_degree(),
            })
        } else {
            Ok(())
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(bound(
    serialize = "E::G1: Serialize",
    deserialize = "E::G1: Deserialize<'de>"
))]
struct ProverKeyParts<E: PairingEngine> {
    powers_of_s: Vec<E::G1>,
}

impl<E: PairingEngine> TryFrom<ProverKeyParts<E>> for ProverKey<E> {
    type Error = KzgError;

    fn try_from(parts: ProverKeyParts<E>) -> Result<Self, Self::Error> {
        Self::validate(parts.powers_of_s)
    }
}

impl<E: PairingEngine> From<ProverKey<E>> for ProverKeyParts<E> {
    fn from(pk: ProverKey<E>) -> Self {
        Self {
            powers_of_s: pk.powers_of_s,
        }
    }
}

/// The verifier's share of the SRS: `g₁`, `g₂` and `s·g₂`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "VerifierKeyParts<E>",
    into = "VerifierKeyParts<E>",
    bound(
        serialize = "E::G1: Serialize, E::G2: Serialize",
        deserialize = "E::G1: Deserialize<'de>, E::G2: Deserialize<'de>"
    )
)]
pub struct VerifierKey<E: PairingEngine> {
    g1: E::G1,
    g2: E::G2,
    s_g2: E::G2,
}

impl<E: PairingEngine> VerifierKey<E> {
    pub fn g1(&self) -> E::G1 {
        self.g1
    }

    pub fn g2(&self) -> E::G2 {
        self.g2
    }

    pub fn s_g2(&self) -> E::G2 {
        self.s_g2
    }

    fn validate(g1: E::G1, g2: E::G2, s_g2: E::G2) -> Result<Self, KzgError> {
        if !(g1.is_valid() && g2.is_valid() && s_g2.is_valid()) {
            return Err(KzgError::MalformedInput(
                "verifier key element is not a group member",
            ));
        }
        if g1 != E::G1::generator() || g2 != E::G2::generator() {
            return Err(KzgError::MalformedInput(
                "verifier key does not use the fixed generators",
            ));
        }
        if s_g2.is_identity() {
            return Err(KzgError::MalformedInput("verifier key has a zero secret"));
        }
        Ok(Self { g1, g2, s_g2 })
    }
}

#[derive(Serialize, Deserialize)]
#[serde(bound(
    serialize = "E::G1: Serialize, E::G2: Serialize",
    deserialize = "E::G1: Deserialize<'de>, E::G2: Deserialize<'de>"
))]
struct VerifierKeyParts<E: PairingEngine> {
    g1: E::G1,
    g2: E::G2,
    s_g2: E::G2,
}

impl<E: PairingEngine> TryFrom<VerifierKeyParts<E>> for VerifierKey<E> {
    type Error = KzgError;

    fn try_from(parts: VerifierKeyParts<E>) -> Result<Self, Self::Error> {
        Self::validate(parts.g1, parts.g2, parts.s_g2)
    }
}

impl<E: PairingEngine> From<VerifierKey<E>> for VerifierKeyParts<E> {
    fn from(vk: VerifierKey<E>) -> Self {
        Self {
            g1: vk.g1,
            g2: vk.g2,
            s_g2: vk.s_g2,
        }
    }
}

/// The trusted setup for KZG.
///
/// Holds only public group elements; the secret `s` used to derive them is
/// neither stored nor recoverable from this value. The degree bound `d` is
/// fixed when the SRS is created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "SrsParts<E>",
    into = "SrsParts<E>",
    bound(
        serialize = "E::G1: Serialize, E::G2: Serialize",
        deserialize = "E::G1: Deserialize<'de>, E::G2: Deserialize<'de>"
    )
)]
pub struct StructuredReferenceString<E: PairingEngine> {
    prover_key: ProverKey<E>,
    verifier_key: VerifierKey<E>,
}

impl<E: PairingEngine> StructuredReferenceString<E> {
    /// Assembles an SRS from freshly computed powers. The caller guarantees the
    /// elements are consistent.
    pub(crate) fn from_powers_unchecked(powers_of_s: Vec<E::G1>, s_g2: E::G2) -> Self {
        Self {
            prover_key: ProverKey { powers_of_s },
            verifier_key: VerifierKey {
                g1: E::G1::generator(),
                g2: E::G2::generator(),
                s_g2,
            },
        }
    }

    /// Imports an SRS produced elsewhere (for example by a multi-party
    /// ceremony).
    ///
    /// # Arguments
    ///
    /// * `powers_of_s` - `[g₁, s·g₁, …, sᵈ·g₁]`
    /// * `g2` - the G2 generator
    /// * `s_g2` - `s·g₂`
    ///
    /// # Returns
    ///
    /// * `Err(KzgError::InvalidDegree)` - fewer than two powers, or more than
    ///   [`MAX_SUPPORTED_DEGREE`] + 1
    /// * `Err(KzgError::MalformedInput)` - an element is not a group member, the
    ///   generators are not the fixed ones, or `e(s·g₁, g₂) ≠ e(g₁, s·g₂)`
    ///
    /// Only the first power is tied to `s·g₂` here; use
    /// [`verify_powers`](Self::verify_powers) to check the whole sequence.
    pub fn from_parts(
        powers_of_s: Vec<E::G1>,
        g2: E::G2,
        s_g2: E::G2,
    ) -> Result<Self, KzgError> {
        let prover_key = ProverKey::<E>::validate(powers_of_s)?;
        let powers = prover_key.powers_of_s();
        let verifier_key = VerifierKey::<E>::validate(powers[0], g2, s_g2)?;

        // e(s·g₁, g₂) == e(g₁, s·g₂)
        let consistent =
            E::pairing_product_is_identity(&[(powers[1], g2), (-powers[0], s_g2)]);
        if !consistent {
            return Err(KzgError::MalformedInput(
                "SRS powers are inconsistent with s·g₂",
            ));
        }

        Ok(Self {
            prover_key,
            verifier_key,
        })
    }

    /// Checks that every power is `s` times the previous one.
    ///
    /// Folds all consecutive pairs with random weights `rᵢ` into the single
    /// check `e(Σ rᵢ·Pᵢ, s·g₂) == e(Σ rᵢ·Pᵢ₊₁, g₂)`, which a malformed
    /// sequence passes with probability at most `1/|F|`.
    pub fn verify_powers<R: RngCore>(&self, rng: &mut R) -> bool {
        let powers = self.prover_key.powers_of_s();
        let weights: Vec<E::Scalar> = (0..powers.len() - 1)
            .map(|_| E::Scalar::random(rng))
            .collect();
        let lower = E::G1::multi_exp(&powers[..powers.len() - 1], &weights);
        let upper = E::G1::multi_exp(&powers[1..], &weights);
        E::pairing_product_is_identity(&[
            (lower, self.verifier_key.s_g2),
            (-upper, self.verifier_key.g2),
        ])
    }

    /// Maximum supported polynomial degree (inclusive).
    pub fn max_degree(&self) -> usize {
        self.prover_key.max_degree()
    }

    pub fn prover_key(&self) -> &ProverKey<E> {
        &self.prover_key
    }

    pub fn verifier_key(&self) -> &VerifierKey<E> {
        &self.verifier_key
    }

    /// Splits the SRS into `(powers_of_s, g2, s_g2)`, the inverse of
    /// [`from_parts`](Self::from_parts).
    pub fn into_parts(self) -> (Vec<E::G1>, E::G2, E::G2) {
        (
            self.prover_key.powers_of_s,
            self.verifier_key.g2,
            self.verifier_key.s_g2,
        )
    }

    /// Restricts the SRS to polynomials of degree at most `max_degree`.
    ///
    /// Commitments made under the trimmed SRS equal those made under the full
    /// one.
    pub fn trim(&self, max_degree: usize) -> Result<Self, KzgError> {
        if max_degree == 0 || max_degree > self.max_degree() {
            return Err(KzgError::InvalidDegree {
                degree: max_degree,
                max: self.max_degree(),
            });
        }
        Ok(Self {
            prover_key: ProverKey {
                powers_of_s: self.prover_key.powers_of_s[..=max_degree].to_vec(),
            },
            verifier_key: self.verifier_key,
        })
    }
}

#[derive(Serialize, Deserialize)]
#[serde(bound(
    serialize = "E::G1: Serialize, E::G2: Serialize",
    deserialize = "E::G1: Deserialize<'de>, E::G2: Deserialize<'de>"
))]
struct SrsParts<E: PairingEngine> {
    powers_of_s: Vec<E::G1>,
    g2: E::G2,
    s_g2: E::G2,
}

impl<E: PairingEngine> TryFrom<SrsParts<E>> for StructuredReferenceString<E> {
    type Error = KzgError;

    fn try_from(parts: SrsParts<E>) -> Result<Self, Self::Error> {
        Self::from_parts(parts.powers_of_s, parts.g2, parts.s_g2)
    }
}

impl<E: PairingEngine> From<StructuredReferenceString<E>> for SrsParts<E> {
    fn from(srs: StructuredReferenceString<E>) -> Self {
        let (powers_of_s, g2, s_g2) = srs.into_parts();
        Self {
            powers_of_s,
            g2,
            s_g2,
        }
    }
}
