//! Domain types for Shamir Secret Sharing
//!
//! This module contains validated newtypes and configuration for secret sharing:
//! - [`Threshold`] - Minimum shares required for reconstruction (3..=99)
//! - [`ShareCount`] - Total number of shares to create (3..=99)
//! - [`ShareIndex`] - Share identifier and x coordinate (1..=255)
//! - [`SplitConfig`] - Validated threshold and share count pair

mod config;
mod share_count;
mod share_index;
mod threshold;

pub use config::SplitConfig;
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;
