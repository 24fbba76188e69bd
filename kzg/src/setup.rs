//! Trusted setup: derives an SRS from a secret `s` that never leaves this
//! module.

use std::fmt;
use std::marker::PhantomData;

use kzg10_algebra::{CurveGroup, PairingEngine, ScalarField};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, instrument, warn};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::KzgError;
use crate::parallel::par_map_collect;
use crate::params::{StructuredReferenceString, ensure_degree_bound};

/// The setup secret `s`.
///
/// Not `Clone`, redacted in `Debug`, wiped when dropped. Only the operations
/// the setup needs are exposed, so the raw scalar never escapes.
///
/// Every buffer that holds `s` or its powers is wiped. Arithmetic on a `Copy`
/// scalar still passes it through registers and stack temporaries, which no
/// safe Rust can reliably clear.
pub(crate) struct ToxicWaste<F: ScalarField>(F);

impl<F: ScalarField> ToxicWaste<F> {
    fn sample<R: RngCore>(rng: &mut R) -> Self {
        Self(F::random_nonzero(rng))
    }

    /// `[1, s, s², …]`, wiped when dropped.
    ///
    /// Allocated once up front; a reallocation would leave an unwiped copy.
    fn powers(&self, count: usize) -> Zeroizing<Vec<F>> {
        let mut powers = Zeroizing::new(Vec::with_capacity(count));
        if count == 0 {
            return powers;
        }
        powers.push(F::ONE);
        for i in 1..count {
            let next = powers[i - 1] * self.0;
            powers.push(next);
        }
        powers
    }

    fn scale<G: CurveGroup<F>>(&self, base: G) -> G {
        base.mul_scalar(self.0)
    }
}

impl<F: ScalarField> Zeroize for ToxicWaste<F> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<F: ScalarField> Drop for ToxicWaste<F> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<F: ScalarField> ZeroizeOnDrop for ToxicWaste<F> {}

impl<F: ScalarField> fmt::Debug for ToxicWaste<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ToxicWaste(<redacted>)")
    }
}

/// Generates structured reference strings for an engine `E`.
///
/// This performs a single-party setup: whoever runs it learns `s` for the
/// duration of the call. Production deployments should instead import the
/// output of a multi-party ceremony with
/// [`StructuredReferenceString::from_parts`].
#[derive(Clone, Copy, Debug)]
pub struct SetupAuthority<E>(PhantomData<E>);

impl<E: PairingEngine> SetupAuthority<E> {
    /// Samples a fresh non-zero secret from `rng` and derives an SRS supporting
    /// polynomials of degree at most `max_degree`.
    ///
    /// Fails with [`KzgError::InvalidDegree`] if `max_degree` is zero or above
    /// [`MAX_SUPPORTED_DEGREE`](crate::MAX_SUPPORTED_DEGREE).
    #[instrument(name = "kzg setup", skip_all, fields(max_degree = max_degree))]
    pub fn generate<R: RngCore + CryptoRng>(
        max_degree: usize,
        rng: &mut R,
    ) -> Result<StructuredReferenceString<E>, KzgError> {
        ensure_degree_bound(max_degree)?;
        let secret = ToxicWaste::<E::Scalar>::sample(rng);
        Ok(Self::derive(max_degree, &secret))
    }

    /// [`generate`](Self::generate) with the thread-local OS-seeded RNG.
    pub fn generate_from_entropy(
        max_degree: usize,
    ) -> Result<StructuredReferenceString<E>, KzgError> {
        Self::generate(max_degree, &mut rand::rng())
    }

    /// Derives the secret from a ChaCha20 stream seeded with `seed`.
    ///
    /// **Insecure**: anyone who knows the seed knows `s` and can forge
    /// openings. Only for tests and reproducible benchmarks.
    #[instrument(name = "kzg deterministic setup", skip_all, fields(max_degree = max_degree))]
    pub fn generate_deterministic(
        max_degree: usize,
        seed: u64,
    ) -> Result<StructuredReferenceString<E>, KzgError> {
        ensure_degree_bound(max_degree)?;
        warn!("deriving SRS from a fixed seed; the toxic waste is reproducible");
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let secret = ToxicWaste::<E::Scalar>::sample(&mut rng);
        Ok(Self::derive(max_degree, &secret))
    }

    fn derive(max_degree: usize, secret: &ToxicWaste<E::Scalar>) -> StructuredReferenceString<E> {
        let scalars = secret.powers(max_degree + 1);
        let g1 = E::G1::generator();
        let powers_of_s: Vec<E::G1> = par_map_collect(scalars.as_slice(), |power| {
            g1.mul_scalar(*power)
        });
        let s_g2 = secret.scale(E::G2::generator());
        debug!(num_powers = powers_of_s.len(), "derived SRS powers");

        StructuredReferenceString::from_powers_unchecked(powers_of_s, s_g2)
    }
}
