use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use zeroize::Zeroizing;

use shamir_bigint::cli::{Cli, Commands};
use shamir_bigint::commands::{recover_secret_hex, split_secret_hex};
use shamir_bigint::domain::SplitConfig;

/// Read a hex secret securely from stdin (hidden input when TTY available)
fn read_secret() -> Result<String> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter secret as hex (0x prefix optional):");
        rpassword::read_password().context("Failed to read secret from stdin")
    } else {
        // Non-interactive mode (piped input) - read directly from stdin
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        let mut secret = String::new();
        handle
            .read_line(&mut secret)
            .context("Failed to read secret from stdin")?;
        Ok(secret.trim().to_string())
    }
}

/// Read share lines from stdin until an empty line or end of input
fn read_shares() -> Result<Vec<String>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter shares (one per line, empty line to finish):");
    }

    let mut shares = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read line from stdin")?;
        let trimmed = line.trim();

        // Empty line signals we're done
        if trimmed.is_empty() {
            break;
        }

        shares.push(trimmed.to_string());
    }

    if shares.is_empty() {
        anyhow::bail!("No shares provided");
    }

    Ok(shares)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split { shares, threshold } => {
            let config = SplitConfig::new(threshold, shares)?;
            let secret = Zeroizing::new(read_secret()?);

            for line in split_secret_hex(&secret, config)? {
                println!("{line}");
            }
        }
        Commands::Recover { threshold, length } => {
            let shares = read_shares()?;
            let secret = Zeroizing::new(recover_secret_hex(&shares, threshold, length)?);
            println!("{}", *secret);
        }
    }

    Ok(())
}
