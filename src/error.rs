//! Error types for each stage of the scheme
//!
//! Splitting, encoding and recovery fail with their own enum so callers can
//! tell which stage rejected the input.

use thiserror::Error;

/// Invalid threshold, share count or share index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// Thresholds of 2 or less are rejected
    #[error("Threshold must be greater than 2 (got {0})")]
    ThresholdTooLow(u8),

    /// Threshold cannot reach 100
    #[error("Threshold must be less than 100 (got {0})")]
    ThresholdTooHigh(u8),

    /// Share count must allow for the smallest threshold
    #[error("Share count must be at least 3 (got {0})")]
    ShareCountTooLow(u8),

    /// Share count must stay below 100
    #[error("Share count must be less than 100 (got {0})")]
    ShareCountTooHigh(u8),

    /// More shares required than exist
    #[error("Threshold {threshold} cannot exceed share count {share_count}")]
    ThresholdExceedsShareCount {
        /// Requested threshold
        threshold: u8,
        /// Requested share count
        share_count: u8,
    },

    /// x = 0 is where the secret lives
    #[error("Share index 0 is reserved for the secret")]
    ZeroShareIndex,
}

/// Errors produced while generating shares
#[derive(Debug, Error)]
pub enum SplitError {
    /// N and T do not satisfy `2 < T <= N < 100`
    #[error("Invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),

    /// The secret, read as an integer, is not a field element
    #[error("Secret is too large: {bits} bits does not fit below the field modulus")]
    SecretOutOfRange {
        /// Bit length of the secret integer
        bits: u64,
    },

    /// The random source failed to produce a coefficient
    #[error("Secure randomness unavailable: {0}")]
    RandomnessUnavailable(#[source] rand::Error),
}

/// Errors produced while encoding or decoding a single share
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input is not exactly one wire-format share
    #[error("Malformed share: expected {} bytes, got {len}", crate::codec::SHARE_LEN)]
    MalformedShare {
        /// Length of the rejected input
        len: usize,
    },

    /// Index byte is zero
    #[error("Malformed share: index 0 is not a valid share index")]
    ZeroIndex,

    /// Value does not fit in the fixed-width field
    #[error("Share value of {bits} bits does not fit in {} bits", crate::codec::VALUE_BITS)]
    ValueOutOfRange {
        /// Bit length of the rejected value
        bits: u64,
    },

    /// Hex line could not be decoded
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Errors produced while reconstructing the secret
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoverError {
    /// Fewer shares than the required minimum
    #[error("Insufficient shares: need at least {required}, but only {provided} provided")]
    InsufficientShares {
        /// Minimum number of shares
        required: usize,
        /// Number of shares supplied
        provided: usize,
    },

    /// Two shares carry the same x coordinate
    #[error("Duplicate share index {0}")]
    DuplicateShareIndex(u8),

    /// A share value is not a field element
    #[error("Share {index} has a value outside the field")]
    ValueOutOfRange {
        /// Index of the offending share
        index: u8,
    },

    /// Recovered secret does not fit the expected length
    #[error("Recovered secret is {actual} bytes, longer than the expected {expected}")]
    SecretTooLong {
        /// Length requested by the caller
        expected: usize,
        /// Minimal length of the recovered value
        actual: usize,
    },
}
