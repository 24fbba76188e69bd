//! A toy pairing engine over a small prime field.
//!
//! Both source groups and the target group are `(Z_P, +)` with generator `1`,
//! and the pairing is plain multiplication `e(a, b) = a * b`. The map is
//! bilinear, so every identity the commitment scheme relies on holds, while
//! each group element is its own discrete logarithm. This makes commitments
//! and proofs human-checkable in tests.
//!
//! **Insecure by construction.** Never use it outside tests.
//!
//! `P` must be a prime below `2^63`.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::DefaultIsZeroes;

use crate::field::ScalarField;
use crate::group::{CurveGroup, PairingEngine, TargetGroup};

#[inline]
const fn add_mod<const P: u64>(a: u64, b: u64) -> u64 {
    let sum = a + b;
    if sum >= P { sum - P } else { sum }
}

#[inline]
const fn sub_mod<const P: u64>(a: u64, b: u64) -> u64 {
    if a >= b { a - b } else { a + P - b }
}

#[inline]
const fn mul_mod<const P: u64>(a: u64, b: u64) -> u64 {
    ((a as u128 * b as u128) % P as u128) as u64
}

/// The prime field `F_P`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct ToyField<const P: u64>(u64);

impl<const P: u64> ToyField<P> {
    pub const MODULUS: u64 = P;

    /// Reduces `value` modulo `P`.
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Canonical representative in `[0, P)`.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl<const P: u64> fmt::Debug for ToyField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {P})", self.0)
    }
}

impl<const P: u64> From<u64> for ToyField<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<ToyField<P>> for u64 {
    fn from(value: ToyField<P>) -> Self {
        value.0
    }
}

impl<const P: u64> Add for ToyField<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(add_mod::<P>(self.0, rhs.0))
    }
}

impl<const P: u64> AddAssign for ToyField<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const P: u64> Sub for ToyField<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(sub_mod::<P>(self.0, rhs.0))
    }
}

impl<const P: u64> SubAssign for ToyField<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const P: u64> Mul for ToyField<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(mul_mod::<P>(self.0, rhs.0))
    }
}

impl<const P: u64> MulAssign for ToyField<P> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const P: u64> Neg for ToyField<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(sub_mod::<P>(0, self.0))
    }
}

impl<const P: u64> Sum for ToyField<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<const P: u64> DefaultIsZeroes for ToyField<P> {}

impl<const P: u64> ScalarField for ToyField<P> {
    const ZERO: Self = Self(0);
    const ONE: Self = Self(1 % P);

    fn from_u64(value: u64) -> Self {
        Self::new(value)
    }

    fn inverse(&self) -> Option<Self> {
        // Fermat: a^(P-2) = a^-1 for prime P.
        (!self.is_zero()).then(|| self.pow(P - 2))
    }

    fn random<R: RngCore>(rng: &mut R) -> Self {
        Self(rng.random_range(0..P))
    }
}

/// `(Z_P, +)` with generator `1`. Serves as G1, G2 and Gt of [`ToyEngine`].
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToyGroup<const P: u64>(u64);

impl<const P: u64> ToyGroup<P> {
    /// Wraps `value` without reduction. Values `>= P` are malformed and are
    /// reported by [`CurveGroup::is_valid`].
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// The discrete logarithm of this element, i.e. its raw value.
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl<const P: u64> fmt::Debug for ToyGroup<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

impl<const P: u64> Add for ToyGroup<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(add_mod::<P>(self.0, rhs.0))
    }
}

impl<const P: u64> AddAssign for ToyGroup<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const P: u64> Sub for ToyGroup<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(sub_mod::<P>(self.0, rhs.0))
    }
}

impl<const P: u64> SubAssign for ToyGroup<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const P: u64> Neg for ToyGroup<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(sub_mod::<P>(0, self.0))
    }
}

impl<const P: u64> CurveGroup<ToyField<P>> for ToyGroup<P> {
    fn identity() -> Self {
        Self(0)
    }

    fn generator() -> Self {
        Self(1 % P)
    }

    fn is_identity(&self) -> bool {
        self.0 == 0
    }

    fn mul_scalar(&self, scalar: ToyField<P>) -> Self {
        Self(mul_mod::<P>(self.0, scalar.value()))
    }

    fn is_valid(&self) -> bool {
        self.0 < P
    }
}

impl<const P: u64> TargetGroup for ToyGroup<P> {
    fn identity() -> Self {
        Self(0)
    }

    fn is_identity(&self) -> bool {
        self.0 == 0
    }
}

/// Pairing engine over [`ToyField`] / [`ToyGroup`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ToyEngine<const P: u64>;

impl<const P: u64> PairingEngine for ToyEngine<P> {
    type Scalar = ToyField<P>;
    type G1 = ToyGroup<P>;
    type G2 = ToyGroup<P>;
    type Gt = ToyGroup<P>;

    fn pairing(p: Self::G1, q: Self::G2) -> Self::Gt {
        ToyGroup(mul_mod::<P>(p.0, q.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    type F = ToyField<101>;
    type G = ToyGroup<101>;
    type E = ToyEngine<101>;

    #[test]
    fn test_field_wraps_around() {
        assert_eq!(F::new(100) + F::new(2), F::new(1));
        assert_eq!(F::new(3) - F::new(5), F::new(99));
        assert_eq!(F::new(103) * F::ONE, F::new(2));
        assert_eq!(-F::ZERO, F::ZERO);
        assert_eq!(F::new(2).pow(7), F::new(27));
    }

    #[test]
    fn test_field_inverse() {
        assert_eq!(F::ZERO.inverse(), None);
        for v in 1..101 {
            let x = F::new(v);
            assert_eq!(x * x.inverse().unwrap(), F::ONE);
        }
    }

    #[test]
    fn test_random_is_reduced() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(F::random(&mut rng).value() < 101);
            assert!(!F::random_nonzero(&mut rng).is_zero());
        }
    }

    #[test]
    fn test_group_validity() {
        assert!(G::from_raw(100).is_valid());
        assert!(!G::from_raw(101).is_valid());
        assert!(!G::from_raw(u64::MAX).is_valid());
    }

    #[test]
    fn test_pairing_bilinearity() {
        let g1 = G::generator();
        let g2 = G::generator();
        let a = F::new(3);
        let b = F::new(5);

        let left = E::pairing(g1.mul_scalar(a), g2.mul_scalar(b));
        let right = E::pairing(g1.mul_scalar(a * b), g2);
        assert_eq!(left, right);

        // e(aG1, G2) + e(G1, bG2) - e(G1, G2)^(a+b) = 0
        let pairs = [
            (g1.mul_scalar(a), g2),
            (g1, g2.mul_scalar(b)),
            (-g1.mul_scalar(a + b), g2),
        ];
        assert!(E::pairing_product_is_identity(&pairs));
    }

    #[test]
    fn test_multi_exp() {
        let g = G::generator();
        let points = [g.mul_scalar(F::new(7)), g.mul_scalar(F::new(11))];
        let scalars = [F::new(3), F::new(5)];
        // 3*7 + 5*11 = 76
        assert_eq!(G::multi_exp(&points, &scalars), g.mul_scalar(F::new(76)));
        assert_eq!(G::multi_exp(&[], &[]), <G as CurveGroup<F>>::identity());
    }
}
