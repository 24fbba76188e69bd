//! Algebraic capabilities required by the KZG10 commitment scheme.
//!
//! The commitment scheme is written against three capabilities rather than a
//! concrete curve:
//!
//! - [`ScalarField`]: the prime field of coefficients, points and values
//! - [`CurveGroup`]: the two source groups with their fixed generators
//! - [`PairingEngine`]: a bilinear map into a [`TargetGroup`]
//!
//! Production adapters (e.g. `kzg10-bn254`) implement these traits for a real
//! pairing-friendly curve. The [`toy`] module implements them over a small
//! prime field so that every commitment, proof and pairing in a test can be
//! checked by hand.

mod field;
mod group;
pub mod toy;

pub use field::{ScalarField, dot_product, powers};
pub use group::{CurveGroup, PairingEngine, TargetGroup};
