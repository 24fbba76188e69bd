//! Scalar field capability.

use core::fmt::Debug;
use core::iter::{self, Sum};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::RngCore;
use zeroize::Zeroize;

/// A prime field used for polynomial coefficients, evaluation points and
/// evaluation values.
///
/// Implementations must provide exact equality and modular arithmetic. The
/// bound on [`Zeroize`] lets secret scalars (the setup's toxic waste) be wiped
/// in place.
pub trait ScalarField:
    Copy
    + Default
    + Debug
    + Eq
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + Sum
    + Zeroize
{
    const ZERO: Self;
    const ONE: Self;

    fn from_u64(value: u64) -> Self;

    /// Multiplicative inverse, `None` for zero.
    fn inverse(&self) -> Option<Self>;

    /// Samples a uniformly distributed element.
    fn random<R: RngCore>(rng: &mut R) -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    fn double(&self) -> Self {
        *self + *self
    }

    fn square(&self) -> Self {
        *self * *self
    }

    /// Square-and-multiply exponentiation by a `u64` exponent.
    fn pow(&self, mut exp: u64) -> Self {
        let mut base = *self;
        let mut acc = Self::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                acc *= base;
            }
            base = base.square();
            exp >>= 1;
        }
        acc
    }

    /// Samples a uniformly distributed non-zero element.
    fn random_nonzero<R: RngCore>(rng: &mut R) -> Self {
        loop {
            let candidate = Self::random(rng);
            if !candidate.is_zero() {
                return candidate;
            }
        }
    }
}

/// Iterator over `1, x, x^2, ...`.
pub fn powers<F: ScalarField>(x: F) -> impl Iterator<Item = F> {
    iter::successors(Some(F::ONE), move |power| Some(*power * x))
}

/// Sum of pairwise products of two equally long slices.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn dot_product<F: ScalarField>(lhs: &[F], rhs: &[F]) -> F {
    assert_eq!(lhs.len(), rhs.len(), "dot product of mismatched slices");
    lhs.iter().zip(rhs).map(|(&a, &b)| a * b).sum()
}
