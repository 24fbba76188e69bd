//! KZG10 polynomial commitments over any pairing-friendly curve
//!
//! This crate implements the Kate-Zaverucha-Goldberg (KZG) polynomial commitment scheme,
//! a cryptographic primitive that allows a prover to commit to a polynomial and later
//! prove evaluations of that polynomial at arbitrary points.
//!
//! # Overview
//!
//! - **Succinct commitments**: A polynomial of any supported degree is committed to a
//!   single G1 element
//! - **Constant-size proofs**: An opening proof is one G1 element, checked with one
//!   product of two pairings
//! - **Batch verification**: Many openings, at one point or at many, are checked with
//!   a single pairing product
//!
//! The scheme is written against the capability traits of `kzg10-algebra`
//! ([`PairingEngine`](kzg10_algebra::PairingEngine) and friends). `kzg10-bn254` provides a
//! production engine; `kzg10_algebra::toy` provides a small, insecure one whose values
//! can be checked by hand.
//!
//! # Main Components
//!
//! - [`Polynomial`]: dense coefficient-form polynomials with Horner evaluation and
//!   division by `(X - z)`
//! - [`SetupAuthority`]: derives a [`StructuredReferenceString`] from a secret `s`
//!   that is wiped before the call returns
//! - [`commit`], [`open`], [`verify`]: the three single-polynomial operations
//! - [`verify_batch`], [`verify_batch_same_point`]: batched verification with
//!   caller-supplied random coefficients
//! - [`Kzg`]: a handle owning a shared SRS that exposes all of the above
//!
//! # Security Considerations
//!
//! **Trusted Setup**: Anyone who learns `s` can forge openings. [`SetupAuthority::generate`]
//! is a single-party setup; production deployments should import the SRS of a multi-party
//! ceremony with [`StructuredReferenceString::from_parts`].
//! [`SetupAuthority::generate_deterministic`] derives `s` from a public seed and is for
//! tests only.
//!
//! **Hiding**: Commitments carry no blinding factor and reveal equality of polynomials.
//!
//! **Batch coefficients**: The coefficients passed to batch verification must be
//! unpredictable to whoever produced the claims.
//!
//! # Examples
//!
//! ```rust
//! use kzg10::{Kzg, Polynomial};
//! use kzg10_algebra::ScalarField;
//! use kzg10_bn254::{Bn254, Fr};
//!
//! let kzg = Kzg::<Bn254>::setup_deterministic(16, 7).unwrap();
//!
//! // p(X) = 1 + 2X + 3X²
//! let poly = Polynomial::new(vec![Fr::new(1), Fr::new(2), Fr::new(3)]);
//! let commitment = kzg.commit(&poly).unwrap();
//!
//! let point = Fr::new(5);
//! let (value, proof) = kzg.open(&poly, point).unwrap();
//! assert_eq!(value, Fr::new(86));
//! assert!(kzg.verify(&commitment, point, value, &proof).unwrap());
//! assert!(!kzg.verify(&commitment, point, value + Fr::ONE, &proof).unwrap());
//! ```
//!
//! # References
//!
//! - Original KZG paper: "Constant-Size Commitments to Polynomials and Their Applications"
//!   by Kate, Zaverucha, and Goldberg (2010)
//! - [EIP-4844](https://eips.ethereum.org/EIPS/eip-4844): Proto-Danksharding using KZG commitments

pub mod batch;
pub mod commit;
pub mod error;
pub mod open;
mod parallel;
pub mod params;
pub mod pcs;
pub mod poly;
pub mod setup;
pub mod verify;

pub use batch::{
    AggregatedCheck, EvaluationClaim, OpeningClaim, fold_openings, fold_same_point,
    verify_batch, verify_batch_same_point,
};
pub use commit::{Commitment, batch_commit, commit};
pub use error::KzgError;
pub use open::{OpeningProof, open};
pub use params::{MAX_SUPPORTED_DEGREE, ProverKey, StructuredReferenceString, VerifierKey};
pub use pcs::Kzg;
pub use poly::Polynomial;
pub use setup::SetupAuthority;
pub use verify::verify;
