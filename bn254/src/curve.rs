//! BN254 curve group operations and pairing functionality
//!
//! This module provides wrapper types for the BN254 elliptic curve groups, wrapping the
//! battle-tested `halo2curves` library behind the [`CurveGroup`] and [`PairingEngine`]
//! capabilities used by the commitment scheme.
//!
//! # Curve Groups
//!
//! - **G1**: Points on the base curve E(Fq) where the curve equation is `y² = x³ + 3`
//!   - Cofactor 1, so every point on the curve is in the prime-order group
//!   - Holds SRS powers, commitments and opening proofs
//!
//! - **G2**: Points on the twisted curve E'(Fq2)
//!   - Non-trivial cofactor, so validity also requires torsion-freeness
//!   - Holds the verification key `{g₂, s·g₂}`
//!
//! - **Gt**: Elements in the target group (multiplicative group of Fq12)
//!   - Written additively here, matching `halo2curves`
//!
//! # Pairing Operations
//!
//! - `pairing(P, Q)`: Computes the pairing e(P, Q) for P ∈ G1, Q ∈ G2
//! - `multi_pairing(pairs)`: One shared Miller loop and final exponentiation for a
//!   product of pairings
//!
//! The pairing satisfies the bilinearity property:
//! - e(aP, bQ) = e(P, Q)^(ab) for scalars a, b
//! - e(P₁ + P₂, Q) = e(P₁, Q) · e(P₂, Q)

use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use halo2curves::CurveAffine;
use halo2curves::bn256::{
    Bn256, G1 as Halo2G1, G1Affine as Halo2G1Affine, G2 as Halo2G2, G2Affine as Halo2G2Affine,
    Gt as Halo2Gt,
};
use halo2curves::group::cofactor::CofactorGroup;
use halo2curves::group::{Curve, Group, GroupEncoding};
use halo2curves::msm::msm_best;
use halo2curves::pairing::{MillerLoopResult, MultiMillerLoop};
use kzg10_algebra::{CurveGroup, PairingEngine, TargetGroup};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Fr;

/// A point on the BN254 G1 curve (base curve over Fq)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct G1(pub(crate) Halo2G1);

/// A point on the BN254 G2 curve (twisted curve over Fq2)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct G2(pub(crate) Halo2G2);

/// An element in the BN254 Gt group (target group of the pairing, elements in Fq12)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Gt(pub(crate) Halo2Gt);

/// Decodes a compressed point, rejecting wrong lengths and points off the curve.
fn decode_point<A: GroupEncoding, E: DeError>(bytes: &[u8], what: &'static str) -> Result<A, E> {
    let mut repr = A::Repr::default();
    if bytes.len() != repr.as_ref().len() {
        return Err(E::invalid_length(bytes.len(), &what));
    }
    repr.as_mut().copy_from_slice(bytes);
    Option::<A>::from(A::from_bytes(&repr)).ok_or_else(|| E::custom(what))
}

impl Serialize for G1 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.0.to_affine().to_bytes().as_ref())
    }
}

impl<'de> Deserialize<'de> for G1 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes: Vec<u8> = Deserialize::deserialize(deserializer)?;
        let affine: Halo2G1Affine = decode_point(&bytes, "a compressed G1 point")?;
        Ok(Self(Halo2G1::from(affine)))
    }
}

impl Serialize for G2 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.0.to_affine().to_bytes().as_ref())
    }
}

impl<'de> Deserialize<'de> for G2 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes: Vec<u8> = Deserialize::deserialize(deserializer)?;
        let affine: Halo2G2Affine = decode_point(&bytes, "a compressed G2 point")?;
        let point = Self(Halo2G2::from(affine));
        if !point.is_valid() {
            return Err(D::Error::custom("a G2 point in the prime-order subgroup"));
        }
        Ok(point)
    }
}

// ================================
// G1 Implementation
// ================================

impl G1 {
    /// Compressed encoding of the point.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_affine().to_bytes().as_ref().to_vec()
    }

    /// Double this point
    pub fn double(&self) -> Self {
        Self(self.0.double())
    }
}

impl CurveGroup<Fr> for G1 {
    fn identity() -> Self {
        Self(Halo2G1::identity())
    }

    fn generator() -> Self {
        Self(Halo2G1::generator())
    }

    fn is_identity(&self) -> bool {
        bool::from(self.0.is_identity())
    }

    fn mul_scalar(&self, scalar: Fr) -> Self {
        Self(self.0 * scalar.0)
    }

    fn is_valid(&self) -> bool {
        bool::from(self.0.to_affine().is_on_curve())
    }

    /// Uses `halo2curves`' bucketed MSM.
    fn multi_exp(points: &[Self], scalars: &[Fr]) -> Self {
        assert_eq!(
            points.len(),
            scalars.len(),
            "points and scalars must have the same length"
        );

        if points.is_empty() {
            return Self::identity();
        }

        let affine_points: Vec<Halo2G1Affine> = points.iter().map(|p| p.0.to_affine()).collect();
        let halo2_scalars: Vec<_> = scalars.iter().map(|s| s.0).collect();
        Self(msm_best(&halo2_scalars, &affine_points))
    }
}

impl Add for G1 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for G1 {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for G1 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for G1 {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for G1 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<Fr> for G1 {
    type Output = Self;

    fn mul(self, rhs: Fr) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

impl MulAssign<Fr> for G1 {
    fn mul_assign(&mut self, rhs: Fr) {
        *self = self.mul_scalar(rhs);
    }
}

// ================================
// G2 Implementation
// ================================

impl G2 {
    /// Compressed encoding of the point.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_affine().to_bytes().as_ref().to_vec()
    }

    /// Double this point
    pub fn double(&self) -> Self {
        Self(self.0.double())
    }
}

impl CurveGroup<Fr> for G2 {
    fn identity() -> Self {
        Self(Halo2G2::identity())
    }

    fn generator() -> Self {
        Self(Halo2G2::generator())
    }

    fn is_identity(&self) -> bool {
        bool::from(self.0.is_identity())
    }

    fn mul_scalar(&self, scalar: Fr) -> Self {
        Self(self.0 * scalar.0)
    }

    /// On the twist and torsion-free.
    fn is_valid(&self) -> bool {
        bool::from(self.0.to_affine().is_on_curve()) && bool::from(self.0.is_torsion_free())
    }
}

impl Add for G2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for G2 {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for G2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for G2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for G2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<Fr> for G2 {
    type Output = Self;

    fn mul(self, rhs: Fr) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

impl MulAssign<Fr> for G2 {
    fn mul_assign(&mut self, rhs: Fr) {
        *self = self.mul_scalar(rhs);
    }
}

// ================================
// Gt Implementation
// ================================

impl Gt {
    /// Returns the generator element of Gt
    pub fn generator() -> Self {
        pairing(G1::generator(), G2::generator())
    }
}

impl TargetGroup for Gt {
    fn identity() -> Self {
        Self(Halo2Gt::identity())
    }

    fn is_identity(&self) -> bool {
        bool::from(self.0.is_identity())
    }
}

impl Add for Gt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Gt {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Neg for Gt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// ================================
// Pairing Operations
// ================================

/// Compute the pairing e(P, Q) where P ∈ G1 and Q ∈ G2
pub fn pairing(p: G1, q: G2) -> Gt {
    let p_affine = p.0.to_affine();
    let q_affine = q.0.to_affine();
    let miller_loop = Bn256::multi_miller_loop(&[(&p_affine, &q_affine)]);
    Gt(miller_loop.final_exponentiation())
}

/// Compute a multi-pairing (product of pairings)
/// Returns e(P1, Q1) * e(P2, Q2) * ... * e(Pn, Qn)
pub fn multi_pairing(pairs: &[(G1, G2)]) -> Gt {
    let halo2_pairs: Vec<_> = pairs
        .iter()
        .map(|(p, q)| (p.0.to_affine(), q.0.to_affine()))
        .collect();
    let refs: Vec<_> = halo2_pairs.iter().map(|(p, q)| (p, q)).collect();
    let miller_loop = Bn256::multi_miller_loop(&refs[..]);
    Gt(miller_loop.final_exponentiation())
}

/// The BN254 pairing engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Bn254;

impl PairingEngine for Bn254 {
    type Scalar = Fr;
    type G1 = G1;
    type G2 = G2;
    type Gt = Gt;

    fn pairing(p: G1, q: G2) -> Gt {
        pairing(p, q)
    }

    fn multi_pairing(pairs: &[(G1, G2)]) -> Gt {
        multi_pairing(pairs)
    }
}

// Helper for Gt scalar multiplication (exponentiation in the multiplicative group)
#[cfg(test)]
impl Gt {
    fn mul_scalar_gt(&self, scalar: Fr) -> Self {
        Self(self.0 * scalar.0)
    }
}

// ================================
// Tests
// ================================
