//! Split and recover
//!
//! [`split`] hides a secret in a random polynomial and hands out its values
//! at `x = 1..=N`; [`recover`] interpolates any `T` of them back to `x = 0`.
//!
//! ```rust
//! use shamir_bigint::{recover, split};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let shares = split(&[0x2a], 5, 3)?;
//! assert_eq!(shares.len(), 5);
//!
//! let subset = [shares[1].clone(), shares[3].clone(), shares[4].clone()];
//! assert_eq!(recover(&subset)?, vec![0x2a]);
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::codec::Share;
use crate::domain::{ShareIndex, SplitConfig, Threshold};
use crate::error::{RecoverError, SplitError};
use crate::field;
use crate::interpolate::interpolate_at_zero;
use crate::polynomial::Polynomial;

/// Splits `secret` into `n` shares, any `t` of which recover it
///
/// Coefficients come from the operating system's secure random source.
///
/// # Errors
/// Returns [`SplitError::InvalidParameters`] unless `2 < t <= n < 100`,
/// [`SplitError::SecretOutOfRange`] if the secret does not fit the field,
/// and [`SplitError::RandomnessUnavailable`] if the OS source fails
pub fn split(secret: &[u8], n: u8, t: u8) -> Result<Vec<Share>, SplitError> {
    let config = SplitConfig::from_raw(n, t)?;
    split_with_rng(secret, config, &mut OsRng)
}

/// Splits `secret` using a caller-supplied random source
///
/// # Errors
/// Same as [`split`], minus parameter validation which `config` already carries
pub fn split_with_rng<R: RngCore + CryptoRng>(
    secret: &[u8],
    config: SplitConfig,
    rng: &mut R,
) -> Result<Vec<Share>, SplitError> {
    let polynomial = Polynomial::random(secret, config.threshold(), rng)?;

    (1..=*config.share_count())
        .map(|x| -> Result<Share, SplitError> {
            let index = ShareIndex::new(x)?;
            Ok(Share::from_field_element(index, polynomial.evaluate(index)))
        })
        .collect()
}

/// Recovers the secret from at least [`Threshold::MIN`] shares
///
/// Without the original threshold the result is only correct when at least
/// `T` shares are supplied; fewer yield an unrelated value.
///
/// The secret is returned as big-endian bytes with leading zeros trimmed.
///
/// # Errors
/// Returns [`RecoverError::InsufficientShares`],
/// [`RecoverError::DuplicateShareIndex`] or [`RecoverError::ValueOutOfRange`]
/// before any arithmetic is done
pub fn recover(shares: &[Share]) -> Result<Vec<u8>, RecoverError> {
    recover_with_minimum(shares, usize::from(Threshold::MIN))
}

/// Recovers the secret, requiring at least `threshold` shares
///
/// # Errors
/// Same as [`recover`]
pub fn recover_with_threshold(
    shares: &[Share],
    threshold: Threshold,
) -> Result<Vec<u8>, RecoverError> {
    recover_with_minimum(shares, usize::from(*threshold))
}

/// Recovers the secret and left-pads it to `secret_len` bytes
///
/// Leading zero bytes of the original secret are not carried by the shares;
/// callers that know the length out of band get them back here.
///
/// # Errors
/// Same as [`recover`], plus [`RecoverError::SecretTooLong`] if the
/// recovered value needs more than `secret_len` bytes
pub fn recover_exact(shares: &[Share], secret_len: usize) -> Result<Vec<u8>, RecoverError> {
    let trimmed = Zeroizing::new(recover(shares)?);
    if trimmed.len() > secret_len {
        return Err(RecoverError::SecretTooLong {
            expected: secret_len,
            actual: trimmed.len(),
        });
    }

    let mut secret = vec![0u8; secret_len];
    secret[secret_len - trimmed.len()..].copy_from_slice(&trimmed);
    Ok(secret)
}

fn recover_with_minimum(shares: &[Share], required: usize) -> Result<Vec<u8>, RecoverError> {
    validate_shares(shares, required)?;

    let secret = interpolate_at_zero(shares).ok_or_else(|| {
        // Distinct indices below 256 always give invertible denominators
        RecoverError::DuplicateShareIndex(*shares[0].index())
    })?;

    if secret.bits() == 0 {
        return Ok(Vec::new());
    }
    Ok(secret.to_bytes_be())
}

fn validate_shares(shares: &[Share], required: usize) -> Result<(), RecoverError> {
    if shares.len() < required {
        return Err(RecoverError::InsufficientShares {
            required,
            provided: shares.len(),
        });
    }

    let mut seen = HashSet::with_capacity(shares.len());
    for share in shares {
        if !seen.insert(share.index()) {
            return Err(RecoverError::DuplicateShareIndex(*share.index()));
        }
    }

    if let Some(share) = shares.iter().find(|share| !field::contains(share.value())) {
        return Err(RecoverError::ValueOutOfRange {
            index: *share.index(),
        });
    }

    Ok(())
}
