//! WASM bindings for shamir-bigint
//!
//! This module provides JavaScript-friendly bindings for the core split/recover functionality.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::codec::{HEX_PREFIX, Share};
use crate::commands;
use crate::domain::SplitConfig;

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Result of a split operation (for JSON serialization)
#[derive(Serialize, Deserialize)]
pub struct SplitResult {
    /// The generated shares as `0x`-prefixed hex lines
    pub shares: Vec<String>,
    /// Number of shares generated
    pub share_count: u8,
    /// Threshold required to reconstruct
    pub threshold: u8,
}

/// Index and value of a decoded share (for JSON serialization)
#[derive(Serialize, Deserialize)]
pub struct ShareMetadata {
    /// Share index (x coordinate)
    pub index: u8,
    /// Share value as `0x`-prefixed big-endian hex
    pub value: String,
}

/// Split a hex-encoded secret into Shamir Secret Shares
///
/// # Arguments
/// * `secret` - The secret as hex, `0x` prefix optional
/// * `shares` - Total number of shares to create (3-99)
/// * `threshold` - Minimum number of shares needed to reconstruct (3-shares)
///
/// # Returns
/// JSON string containing the shares and metadata, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const result = wasm_split("0x2a", 5, 3);
/// const data = JSON.parse(result);
/// console.log(`Created ${data.share_count} shares with threshold ${data.threshold}`);
/// ```
#[wasm_bindgen]
pub fn wasm_split(secret: &str, shares: u8, threshold: u8) -> Result<String, JsValue> {
    let config = SplitConfig::from_raw(shares, threshold)
        .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {e}")))?;

    let share_lines = commands::split_secret_hex(secret, config)
        .map_err(|e| JsValue::from_str(&format!("Split failed: {e:#}")))?;

    let result = SplitResult {
        shares: share_lines,
        share_count: shares,
        threshold,
    };

    serde_json::to_string(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

/// Recover the secret from hex-encoded shares
///
/// # Returns
/// The secret as `0x`-prefixed hex, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const secret = wasm_recover([share1, share3, share5]);
/// console.log(`Recovered secret: ${secret}`);
/// ```
#[wasm_bindgen]
pub fn wasm_recover(shares: Vec<String>) -> Result<String, JsValue> {
    commands::recover_secret_hex(&shares, None, None)
        .map_err(|e| JsValue::from_str(&format!("Recover failed: {e:#}")))
}

/// Decode a share line to expose its index and value
///
/// # Returns
/// JSON string containing `index` and `value`, or an error message
#[wasm_bindgen]
pub fn wasm_parse_share(share: &str) -> Result<String, JsValue> {
    let share =
        Share::from_hex(share).map_err(|e| JsValue::from_str(&format!("Parse failed: {e}")))?;

    let metadata = ShareMetadata {
        index: *share.index(),
        value: format!("{HEX_PREFIX}{}", share.value().to_str_radix(16)),
    };

    serde_json::to_string(&metadata)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}
