//! Prime field arithmetic for the scheme
//!
//! Every coefficient, share value and interpolation step lives in GF(P),
//! where P is the 1024-bit MODP prime from RFC 2409 (Second Oakley Group).
//! Working modulo a prime keeps evaluation and interpolation exact: division
//! is multiplication by a modular inverse, never a rounded quotient.

use std::sync::LazyLock;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Width of a field element in bytes
pub const ELEMENT_BYTES: usize = 128;

/// P = 2^1024 - 2^960 - 1 + 2^64 * (floor(2^894 * pi) + 129093), big-endian
const MODULUS_BYTES: [u8; ELEMENT_BYTES] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc9, 0x0f, 0xda, 0xa2, 0x21, 0x68, 0xc2, 0x34,
    0xc4, 0xc6, 0x62, 0x8b, 0x80, 0xdc, 0x1c, 0xd1, 0x29, 0x02, 0x4e, 0x08, 0x8a, 0x67, 0xcc, 0x74,
    0x02, 0x0b, 0xbe, 0xa6, 0x3b, 0x13, 0x9b, 0x22, 0x51, 0x4a, 0x08, 0x79, 0x8e, 0x34, 0x04, 0xdd,
    0xef, 0x95, 0x19, 0xb3, 0xcd, 0x3a, 0x43, 0x1b, 0x30, 0x2b, 0x0a, 0x6d, 0xf2, 0x5f, 0x14, 0x37,
    0x4f, 0xe1, 0x35, 0x6d, 0x6d, 0x51, 0xc2, 0x45, 0xe4, 0x85, 0xb5, 0x76, 0x62, 0x5e, 0x7e, 0xc6,
    0xf4, 0x4c, 0x42, 0xe9, 0xa6, 0x37, 0xed, 0x6b, 0x0b, 0xff, 0x5c, 0xb6, 0xf4, 0x06, 0xb7, 0xed,
    0xee, 0x38, 0x6b, 0xfb, 0x5a, 0x89, 0x9f, 0xa5, 0xae, 0x9f, 0x24, 0x11, 0x7c, 0x4b, 0x1f, 0xe6,
    0x49, 0x28, 0x66, 0x51, 0xec, 0xe6, 0x53, 0x81, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

static MODULUS: LazyLock<BigUint> = LazyLock::new(|| BigUint::from_bytes_be(&MODULUS_BYTES));

/// The field modulus P
#[must_use]
pub fn modulus() -> &'static BigUint {
    &MODULUS
}

/// Returns true if `value` is a reduced field element
#[must_use]
pub fn contains(value: &BigUint) -> bool {
    value < modulus()
}

/// Computes `(a - b) mod P` for reduced operands
#[must_use]
pub fn sub(a: &BigUint, b: &BigUint) -> BigUint {
    if a >= b {
        a - b
    } else {
        modulus() - b + a
    }
}

/// Multiplicative inverse modulo P via the extended Euclidean algorithm
///
/// Returns `None` for zero (or any value sharing a factor with P).
#[must_use]
pub fn inverse(value: &BigUint) -> Option<BigUint> {
    let m = BigInt::from(modulus().clone());
    let mut old_r = BigInt::from(value % modulus());
    let mut r = m.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let quotient = &old_r / &r;
        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return None;
    }

    // old_s * value == 1 (mod P), but old_s may be negative
    (((old_s % &m) + &m) % &m).to_biguint()
}

/// Draws a uniform field element from `rng`
///
/// Candidates are read as 128-byte big-endian integers and rejected until
/// one falls below P. The candidate buffer is wiped on return.
///
/// # Errors
/// Returns the RNG's error if it cannot produce bytes
pub fn random_element<R: RngCore + CryptoRng>(rng: &mut R) -> Result<BigUint, rand::Error> {
    let mut bytes = Zeroizing::new([0u8; ELEMENT_BYTES]);
    loop {
        rng.try_fill_bytes(&mut *bytes)?;
        let candidate = BigUint::from_bytes_be(&*bytes);
        if contains(&candidate) {
            return Ok(candidate);
        }
    }
}
