use clap::{Parser, Subcommand};

use crate::domain::{ShareCount, Threshold};

/// Validates that threshold satisfies 2 < T < 100
fn validate_threshold(s: &str) -> Result<Threshold, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Threshold::new(value).map_err(|e| e.to_string())
}

/// Validates that share count satisfies 2 < N < 100
fn validate_share_count(s: &str) -> Result<ShareCount, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    ShareCount::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "shamir-bigint")]
#[command(about = "Split hex-encoded secrets into Shamir Secret Shares over a 1024-bit prime field")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a hex secret read from stdin into shares
    Split {
        /// Number of shares to create (3-99)
        #[arg(short, long, value_parser = validate_share_count)]
        shares: ShareCount,

        /// Threshold: minimum number of shares needed to reconstruct (3-shares)
        #[arg(short, long, value_parser = validate_threshold)]
        threshold: Threshold,
    },
    /// Recover the secret from shares read from stdin
    Recover {
        /// Threshold the shares were split with, checked against the share count
        #[arg(short, long, value_parser = validate_threshold)]
        threshold: Option<Threshold>,

        /// Secret length in bytes, restores leading zero bytes
        #[arg(short, long)]
        length: Option<usize>,
    },
}
