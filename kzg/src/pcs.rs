use std::sync::Arc;

use kzg10_algebra::PairingEngine;
use rand::{CryptoRng, RngCore};

use crate::batch::{EvaluationClaim, OpeningClaim, verify_batch, verify_batch_same_point};
use crate::commit::{Commitment, batch_commit, commit};
use crate::error::KzgError;
use crate::open::{OpeningProof, open};
use crate::params::StructuredReferenceString;
use crate::poly::Polynomial;
use crate::setup::SetupAuthority;
use crate::verify::verify;

/// KZG10 polynomial commitment scheme bound to one SRS.
///
/// The SRS is shared behind an [`Arc`], so cloning a `Kzg` is cheap and clones
/// can be handed to other threads.
#[derive(Clone, Debug)]
pub struct Kzg<E: PairingEngine> {
    srs: Arc<StructuredReferenceString<E>>,
}

impl<E: PairingEngine> Kzg<E> {
    #[must_use]
    pub fn new(srs: StructuredReferenceString<E>) -> Self {
        Self { srs: Arc::new(srs) }
    }

    /// Runs a fresh single-party setup; see [`SetupAuthority::generate`].
    pub fn setup<R: RngCore + CryptoRng>(max_degree: usize, rng: &mut R) -> Result<Self, KzgError> {
        SetupAuthority::generate(max_degree, rng).map(Self::new)
    }

    /// **Insecure**, for tests: see [`SetupAuthority::generate_deterministic`].
    pub fn setup_deterministic(max_degree: usize, seed: u64) -> Result<Self, KzgError> {
        SetupAuthority::generate_deterministic(max_degree, seed).map(Self::new)
    }

    pub fn srs(&self) -> &StructuredReferenceString<E> {
        &self.srs
    }

    pub fn max_degree(&self) -> usize {
        self.srs.max_degree()
    }

    pub fn commit(&self, poly: &Polynomial<E::Scalar>) -> Result<Commitment<E>, KzgError> {
        commit(self.srs.prover_key(), poly)
    }

    pub fn batch_commit(
        &self,
        polys: &[Polynomial<E::Scalar>],
    ) -> Result<Vec<Commitment<E>>, KzgError> {
        batch_commit(self.srs.prover_key(), polys)
    }

    pub fn open(
        &self,
        poly: &Polynomial<E::Scalar>,
        point: E::Scalar,
    ) -> Result<(E::Scalar, OpeningProof<E>), KzgError> {
        open(self.srs.prover_key(), poly, point)
    }

    pub fn verify(
        &self,
        commitment: &Commitment<E>,
        point: E::Scalar,
        value: E::Scalar,
        proof: &OpeningProof<E>,
    ) -> Result<bool, KzgError> {
        verify(self.srs.verifier_key(), commitment, point, value, proof)
    }

    pub fn verify_batch(
        &self,
        claims: &[OpeningClaim<E>],
        coefficients: &[E::Scalar],
    ) -> Result<bool, KzgError> {
        verify_batch(self.srs.verifier_key(), claims, coefficients)
    }

    pub fn verify_batch_same_point(
        &self,
        point: E::Scalar,
        claims: &[EvaluationClaim<E>],
        coefficients: &[E::Scalar],
    ) -> Result<bool, KzgError> {
        verify_batch_same_point(self.srs.verifier_key(), point, claims, coefficients)
    }
}
