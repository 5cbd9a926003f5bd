//! Shamir Secret Sharing over a 1024-bit prime field
//!
//! Secrets are split into `N` shares such that any `T` recover them exactly,
//! with `2 < T <= N < 100`. Shares travel as fixed 129-byte records, see
//! [`codec`].

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod field;
mod interpolate;
pub mod polynomial;
pub mod scheme;
pub mod wasm;

pub use codec::Share;
pub use error::{CodecError, ParameterError, RecoverError, SplitError};
pub use scheme::{recover, recover_exact, recover_with_threshold, split, split_with_rng};
