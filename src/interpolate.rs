//! Lagrange interpolation at x = 0 over GF(P)

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::codec::Share;
use crate::field;

/// Evaluates the polynomial through `shares` at x = 0
///
/// ```text
///             ---         ---     x_j
///   f(0)  =   \    y_i *  | |  ---------
///             /           j!=i  x_j - x_i
///             ---
/// ```
///
/// Callers must pass shares with distinct indices and reduced values;
/// returns `None` if a denominator is not invertible.
pub(crate) fn interpolate_at_zero(shares: &[Share]) -> Option<BigUint> {
    let p = field::modulus();
    let mut secret = BigUint::zero();

    for (i, share) in shares.iter().enumerate() {
        let x_i = BigUint::from(*share.index());
        let mut numerator = BigUint::one();
        let mut denominator = BigUint::one();

        for (j, other) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            let x_j = BigUint::from(*other.index());
            denominator = (denominator * field::sub(&x_j, &x_i)) % p;
            numerator = (numerator * x_j) % p;
        }

        let basis = (numerator * field::inverse(&denominator)?) % p;
        secret = (secret + basis * share.value()) % p;
    }

    Some(secret)
}
