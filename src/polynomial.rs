//! Secret-encoding polynomial
//!
//! A polynomial of degree `T - 1` whose constant term is the secret and
//! whose other coefficients are uniform field elements. It only exists for
//! the duration of a split.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

use crate::domain::{ShareIndex, Threshold};
use crate::error::SplitError;
use crate::field;

/// Coefficients `c_0..c_{T-1}` over GF(P), lowest degree first
#[derive(Debug)]
pub struct Polynomial {
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    /// Builds a random polynomial hiding `secret` at x = 0
    ///
    /// `secret` is read as a big-endian unsigned integer.
    ///
    /// # Errors
    /// Returns [`SplitError::SecretOutOfRange`] if the secret is not below P,
    /// or [`SplitError::RandomnessUnavailable`] if `rng` fails
    pub fn random<R: RngCore + CryptoRng>(
        secret: &[u8],
        threshold: Threshold,
        rng: &mut R,
    ) -> Result<Self, SplitError> {
        let constant = BigUint::from_bytes_be(secret);
        if !field::contains(&constant) {
            return Err(SplitError::SecretOutOfRange {
                bits: constant.bits(),
            });
        }

        let mut coefficients = Vec::with_capacity(usize::from(*threshold));
        coefficients.push(constant);
        for _ in 1..*threshold {
            let coefficient =
                field::random_element(rng).map_err(SplitError::RandomnessUnavailable)?;
            coefficients.push(coefficient);
        }

        Ok(Self { coefficients })
    }

    #[cfg(test)]
    pub(crate) fn from_coefficients(coefficients: Vec<BigUint>) -> Self {
        Self { coefficients }
    }

    /// Number of coefficients, equal to the threshold
    #[must_use]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Always false for a polynomial built by [`Polynomial::random`]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Evaluates `sum(c_j * x^j) mod P` at `x = index`
    ///
    /// Uses Horner's rule so every intermediate stays below `P * 256`.
    #[must_use]
    pub fn evaluate(&self, index: ShareIndex) -> BigUint {
        let x = BigUint::from(*index);
        self.coefficients
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, coefficient| {
                (acc * &x + coefficient) % field::modulus()
            })
    }
}
