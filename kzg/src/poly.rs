//! Dense univariate polynomials over the scalar field.

use std::ops::{Add, Mul, Neg, Sub};

use kzg10_algebra::ScalarField;
use rand::RngCore;

/// A polynomial `c₀ + c₁X + … + cₙXⁿ` in coefficient form, lowest degree first.
///
/// Trailing zero coefficients are trimmed on construction, so two polynomials
/// are equal exactly when their coefficient vectors are. The zero polynomial
/// has no coefficients and no degree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polynomial<F> {
    coeffs: Vec<F>,
}

impl<F: ScalarField> Polynomial<F> {
    pub fn new(mut coeffs: Vec<F>) -> Self {
        while coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    pub fn constant(value: F) -> Self {
        Self::new(vec![value])
    }

    /// Encodes raw data as a polynomial whose `i`-th coefficient is `bytes[i]`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().map(|&b| F::from_u64(u64::from(b))).collect())
    }

    /// Samples a polynomial of exactly the given degree.
    pub fn random<R: RngCore>(degree: usize, rng: &mut R) -> Self {
        let mut coeffs: Vec<F> = (0..degree).map(|_| F::random(rng)).collect();
        coeffs.push(F::random_nonzero(rng));
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<F> {
        self.coeffs
    }

    /// Degree of the polynomial, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Evaluates the polynomial at `point` using Horner's method.
    pub fn evaluate(&self, point: F) -> F {
        self.coeffs
            .iter()
            .rev()
            .fold(F::ZERO, |acc, &c| acc * point + c)
    }

    /// Divides by `(X - point)` using synthetic division.
    ///
    /// Returns `(q, r)` with `self = q·(X - point) + r`. By the remainder
    /// theorem `r = self(point)`, and `q` has degree one less than `self`
    /// (the zero polynomial when `self` is constant).
    pub fn divide_by_linear(&self, point: F) -> (Self, F) {
        let Some((&leading, rest)) = self.coeffs.split_last() else {
            return (Self::zero(), F::ZERO);
        };
        let mut quotient = vec![F::ZERO; rest.len()];
        let mut carry = leading;
        for (i, &c) in rest.iter().enumerate().rev() {
            quotient[i] = carry;
            carry = c + carry * point;
        }
        (Self::new(quotient), carry)
    }

    pub fn scalar_mul(&self, scalar: F) -> Self {
        if scalar.is_zero() {
            return Self::zero();
        }
        Self {
            coeffs: self.coeffs.iter().map(|&c| c * scalar).collect(),
        }
    }
}

impl<F: ScalarField> From<Vec<F>> for Polynomial<F> {
    fn from(coeffs: Vec<F>) -> Self {
        Self::new(coeffs)
    }
}

impl<F: ScalarField> Add for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, rhs: Self) -> Self::Output {
        let (long, short) = if self.coeffs.len() >= rhs.coeffs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut coeffs = long.coeffs.clone();
        for (acc, &c) in coeffs.iter_mut().zip(&short.coeffs) {
            *acc += c;
        }
        Polynomial::new(coeffs)
    }
}

impl<F: ScalarField> Sub for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, rhs: Self) -> Self::Output {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let mut coeffs = self.coeffs.clone();
        coeffs.resize(len, F::ZERO);
        for (acc, &c) in coeffs.iter_mut().zip(&rhs.coeffs) {
            *acc -= c;
        }
        Polynomial::new(coeffs)
    }
}

impl<F: ScalarField> Neg for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn neg(self) -> Self::Output {
        Polynomial {
            coeffs: self.coeffs.iter().map(|&c| -c).collect(),
        }
    }
}

/// Schoolbook multiplication, `O(n·m)`.
impl<F: ScalarField> Mul for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs = vec![F::ZERO; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial::new(coeffs)
    }
}
