use anyhow::{Context, Result, bail};
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::codec::{self, HEX_PREFIX, Share};
use crate::domain::{SplitConfig, Threshold};
use crate::scheme;

/// Split a hex-encoded secret into hex-encoded shares
///
/// Returns one `0x`-prefixed line per share, in index order.
///
/// # Errors
/// Returns an error if the secret is not valid hex or splitting fails
pub fn split_secret_hex(secret_hex: &str, config: SplitConfig) -> Result<Vec<String>> {
    let secret = Zeroizing::new(
        hex::decode(codec::strip_hex_prefix(secret_hex)).context("Failed to parse secret hex")?,
    );

    let shares = scheme::split_with_rng(&secret, config, &mut OsRng)
        .context("Failed to split secret")?;

    Ok(shares.iter().map(Share::to_hex).collect())
}

/// Recover a hex-encoded secret from hex-encoded shares
///
/// With `threshold` the share count is checked against it; with
/// `secret_len` the result is left-padded to that many bytes.
///
/// # Errors
/// Returns an error if any share fails to decode or recovery fails
pub fn recover_secret_hex(
    share_lines: &[String],
    threshold: Option<Threshold>,
    secret_len: Option<usize>,
) -> Result<String> {
    if share_lines.is_empty() {
        bail!("No shares provided");
    }

    let shares = share_lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            Share::from_hex(line).with_context(|| format!("Failed to parse share #{}", idx + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    let secret = Zeroizing::new(match (threshold, secret_len) {
        (_, Some(len)) => {
            if let Some(threshold) = threshold {
                check_threshold(&shares, threshold)?;
            }
            scheme::recover_exact(&shares, len)
        }
        (Some(threshold), None) => scheme::recover_with_threshold(&shares, threshold),
        (None, None) => scheme::recover(&shares),
    }
    .context("Failed to recover secret")?);

    Ok(format!("{HEX_PREFIX}{}", hex::encode(&*secret)))
}

fn check_threshold(shares: &[Share], threshold: Threshold) -> Result<()> {
    if shares.len() < usize::from(*threshold) {
        bail!(
            "Insufficient shares: need at least {}, but only {} provided",
            *threshold,
            shares.len()
        );
    }
    Ok(())
}
