//! Source groups, target group and the pairing capability.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::field::ScalarField;

/// A prime-order group written additively, with scalars in `F`.
pub trait CurveGroup<F: ScalarField>:
    Copy
    + Debug
    + Eq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    fn identity() -> Self;

    /// The fixed public generator.
    fn generator() -> Self;

    fn is_identity(&self) -> bool;

    fn mul_scalar(&self, scalar: F) -> Self;

    /// Whether this value is a member of the expected prime-order group.
    ///
    /// Values built through the group operations are always valid; this check
    /// exists for elements that crossed a trust boundary (decoded proofs,
    /// imported parameters).
    fn is_valid(&self) -> bool;

    /// Multi-scalar multiplication: `sum(scalars[i] * points[i])`.
    ///
    /// The default is the naive sum; adapters backed by a real curve override
    /// it with a bucketed MSM.
    ///
    /// # Panics
    /// Panics if `points` and `scalars` have different lengths.
    fn multi_exp(points: &[Self], scalars: &[F]) -> Self {
        assert_eq!(
            points.len(),
            scalars.len(),
            "points and scalars must have the same length"
        );
        points
            .iter()
            .zip(scalars)
            .fold(Self::identity(), |acc, (point, &scalar)| {
                acc + point.mul_scalar(scalar)
            })
    }
}

/// The pairing's target group, written additively.
pub trait TargetGroup: Copy + Debug + Eq + Send + Sync + 'static + Add<Output = Self> {
    fn identity() -> Self;

    fn is_identity(&self) -> bool;
}

/// A bilinear map `e: G1 x G2 -> Gt` with `e(aP, bQ) = ab * e(P, Q)`.
pub trait PairingEngine: Copy + Debug + Eq + Send + Sync + 'static {
    type Scalar: ScalarField;
    type G1: CurveGroup<Self::Scalar>;
    type G2: CurveGroup<Self::Scalar>;
    type Gt: TargetGroup;

    fn pairing(p: Self::G1, q: Self::G2) -> Self::Gt;

    /// Sum (product, in multiplicative notation) of pairings.
    fn multi_pairing(pairs: &[(Self::G1, Self::G2)]) -> Self::Gt {
        pairs
            .iter()
            .fold(Self::Gt::identity(), |acc, &(p, q)| acc + Self::pairing(p, q))
    }

    fn pairing_product_is_identity(pairs: &[(Self::G1, Self::G2)]) -> bool {
        Self::multi_pairing(pairs).is_identity()
    }
}
