//! The BN254 scalar field `Fr`.

use alloc::vec::Vec;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use halo2curves::bn256::Fr as Halo2Fr;
use halo2curves::ff::{Field, FromUniformBytes, PrimeField};
use kzg10_algebra::ScalarField;
use rand::RngCore;
use rand::distr::{Distribution, StandardUniform};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::DefaultIsZeroes;

/// An element of the BN254 scalar field.
///
/// Order `r = 21888242871839275222246405745257275088548364400416034343698204186575808495617`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Fr(pub(crate) Halo2Fr);

impl Fr {
    /// Width of the canonical little-endian encoding.
    pub const NUM_BYTES: usize = 32;

    pub fn new(value: u64) -> Self {
        Self(Halo2Fr::from(value))
    }

    /// Canonical little-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(self.0.to_repr().as_ref());
        bytes
    }

    /// Decodes a canonical little-endian encoding, `None` if the value is not
    /// reduced modulo `r`.
    pub fn from_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let mut repr = <Halo2Fr as PrimeField>::Repr::default();
        repr.as_mut().copy_from_slice(bytes);
        Option::from(Halo2Fr::from_repr(repr)).map(Self)
    }

    fn from_uniform_rng<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut wide = [0u8; 64];
        rng.fill_bytes(&mut wide);
        Self(Halo2Fr::from_uniform_bytes(&wide))
    }
}

/// Converts a `halo2curves` scalar into [`Fr`].
#[inline]
pub fn fr_from_halo2(fr: Halo2Fr) -> Fr {
    Fr(fr)
}

impl Add for Fr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Fr {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Fr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Fr {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul for Fr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl MulAssign for Fr {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

impl Neg for Fr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Fr {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl DefaultIsZeroes for Fr {}

impl ScalarField for Fr {
    const ZERO: Self = Self(<Halo2Fr as Field>::ZERO);
    const ONE: Self = Self(<Halo2Fr as Field>::ONE);

    fn from_u64(value: u64) -> Self {
        Self::new(value)
    }

    fn inverse(&self) -> Option<Self> {
        Option::from(self.0.invert()).map(Self)
    }

    fn random<R: RngCore>(rng: &mut R) -> Self {
        Self::from_uniform_rng(rng)
    }

    fn square(&self) -> Self {
        Self(self.0.square())
    }
}

impl Distribution<Fr> for StandardUniform {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Fr {
        Fr::from_uniform_rng(rng)
    }
}

impl Serialize for Fr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de> Deserialize<'de> for Fr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes: Vec<u8> = Deserialize::deserialize(deserializer)?;
        let bytes: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| DeError::invalid_length(bytes.len(), &"32 bytes"))?;
        Self::from_bytes(&bytes).ok_or_else(|| DeError::custom("Non-canonical Fr encoding"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_fr_arithmetic() {
        let a = Fr::new(7);
        let b = Fr::new(5);
        assert_eq!(a + b, Fr::new(12));
        assert_eq!(a - b, Fr::new(2));
        assert_eq!(a * b, Fr::new(35));
        assert_eq!(a + (-a), Fr::ZERO);
        assert_eq!(a.pow(3), Fr::new(343));
    }

    #[test]
    fn test_fr_inverse() {
        assert_eq!(Fr::ZERO.inverse(), None);
        let a = Fr::new(12345);
        assert_eq!(a * a.inverse().unwrap(), Fr::ONE);
    }

    #[test]
    fn test_fr_bytes_roundtrip() {
        let mut rng = SmallRng::seed_from_u64(3);
        let a = Fr::random(&mut rng);
        assert_eq!(Fr::from_bytes(&a.to_bytes()), Some(a));
    }

    #[test]
    fn test_fr_rejects_non_canonical() {
        // All ones exceeds the modulus.
        assert_eq!(Fr::from_bytes(&[0xff; 32]), None);
    }

    #[test]
    fn test_fr_conversion() {
        let halo2_fr = Halo2Fr::from(12345u64);
        assert_eq!(fr_from_halo2(halo2_fr), Fr::new(12345));
    }
}
