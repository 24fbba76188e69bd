//! BN254 adapter for the KZG10 commitment scheme
//!
//! This crate implements the `kzg10-algebra` capabilities for the BN254 (also known as
//! BN128 or alt_bn128) pairing-friendly curve, so the commitment scheme can run on a
//! production curve.
//!
//! ## Core Components
//!
//! - **`Fr`**: The scalar field of the BN254 curve
//!   - Prime order: `r = 21888242871839275222246405745257275088548364400416034343698204186575808495617`
//!   - Canonical 32-byte little-endian encoding
//!
//! - **`G1`** / **`G2`**: Points on the base curve E(Fq) and on the twist E'(Fq2)
//!
//! - **`Gt`**: Elements in the target group (Fq12)
//!
//! - **`Bn254`**: The [`PairingEngine`](kzg10_algebra::PairingEngine) tying them together
//!
//! ## Features
//!
//! - **Halo2 integration**: Wraps `halo2curves` for field, curve and pairing operations
//! - **Serialization**: Serde support for `Fr`, `G1`, and `G2`; decoding rejects
//!   non-canonical scalars, points off the curve and G2 points outside the
//!   prime-order subgroup
//! - **Sampling**: `rand` support through `Distribution<Fr> for StandardUniform`
//!
//! # Examples
//!
//! ```rust
//! use kzg10_algebra::{CurveGroup, PairingEngine};
//! use kzg10_bn254::{Bn254, Fr, G1, G2};
//!
//! let scalar = Fr::new(42);
//! let point = G1::generator().mul_scalar(scalar);
//!
//! // e(42·g₁, g₂) = e(g₁, 42·g₂)
//! let lhs = Bn254::pairing(point, G2::generator());
//! let rhs = Bn254::pairing(G1::generator(), G2::generator().mul_scalar(scalar));
//! assert_eq!(lhs, rhs);
//! ```
#![no_std]

extern crate alloc;

mod curve;
mod field;

pub use curve::{Bn254, G1, G2, Gt, multi_pairing, pairing};
pub use field::{Fr, fr_from_halo2};
