//! Property tests for split/recover workflows

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use shamir_bigint::domain::{ShareCount, SplitConfig, Threshold};
use shamir_bigint::{Share, recover, recover_exact, split_with_rng};

/// Wrapper for secrets of 1 to 64 bytes
#[derive(Clone, Debug)]
struct Secret(Vec<u8>);

impl Arbitrary for Secret {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 64 + 1;
        Secret((0..len).map(|_| u8::arbitrary(g)).collect())
    }
}

/// Wrapper for valid threshold and share count pairs
#[derive(Clone, Copy, Debug)]
struct ValidShamirParams {
    threshold: u8,
    num_shares: u8,
}

impl Arbitrary for ValidShamirParams {
    fn arbitrary(g: &mut Gen) -> Self {
        // Share count between 3 and 20 (keep it reasonable for testing)
        let num_shares = (u8::arbitrary(g) % 18) + 3; // 3..=20

        // Threshold between 3 and num_shares
        let threshold = (u8::arbitrary(g) % (num_shares - 2)) + 3; // 3..=num_shares

        ValidShamirParams {
            threshold,
            num_shares,
        }
    }
}

impl ValidShamirParams {
    fn config(self) -> SplitConfig {
        SplitConfig::new(
            Threshold::new(self.threshold).unwrap(),
            ShareCount::new(self.num_shares).unwrap(),
        )
        .unwrap()
    }
}

fn split_seeded(secret: &[u8], params: ValidShamirParams, seed: u64) -> Vec<Share> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    split_with_rng(secret, params.config(), &mut rng).unwrap()
}

fn random_subset(shares: &[Share], size: usize, seed: u64) -> Vec<Share> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    shares.choose_multiple(&mut rng, size).cloned().collect()
}

/// Any threshold-sized subset recovers the original secret
#[quickcheck]
fn prop_split_recover_round_trip(secret: Secret, params: ValidShamirParams, seed: u64) -> bool {
    let Secret(secret) = secret;
    let shares = split_seeded(&secret, params, seed);
    let subset = random_subset(&shares, params.threshold.into(), seed ^ 0x5eed);

    recover_exact(&subset, secret.len()).is_ok_and(|recovered| recovered == secret)
}

/// Two different threshold-sized subsets agree
#[quickcheck]
fn prop_subsets_agree(secret: Secret, params: ValidShamirParams, seed: u64) -> bool {
    let Secret(secret) = secret;
    let shares = split_seeded(&secret, params, seed);
    let threshold = usize::from(params.threshold);

    let first = recover(&shares[..threshold]);
    let second = recover(&shares[shares.len() - threshold..]);

    first.is_ok() && first == second
}

/// Supplying every share also recovers the secret
#[quickcheck]
fn prop_all_shares_recover(secret: Secret, params: ValidShamirParams, seed: u64) -> bool {
    let Secret(secret) = secret;
    let shares = split_seeded(&secret, params, seed);

    recover_exact(&shares, secret.len()).is_ok_and(|recovered| recovered == secret)
}

/// Fewer than threshold shares do not reproduce the secret
#[quickcheck]
fn prop_insufficient_shares_fail(secret: Secret, params: ValidShamirParams, seed: u64) -> bool {
    let Secret(secret) = secret;
    if params.threshold <= Threshold::MIN {
        // Below the smallest threshold recovery refuses outright
        let shares = split_seeded(&secret, params, seed);
        return recover(&shares[..usize::from(params.threshold) - 1]).is_err();
    }

    let shares = split_seeded(&secret, params, seed);
    let subset = random_subset(&shares, usize::from(params.threshold) - 1, seed);

    match recover_exact(&subset, secret.len()) {
        Ok(recovered) => recovered != secret,
        Err(_) => true,
    }
}

/// Duplicated shares are always rejected
#[quickcheck]
fn prop_duplicate_index_rejected(secret: Secret, params: ValidShamirParams, seed: u64) -> bool {
    let Secret(secret) = secret;
    let shares = split_seeded(&secret, params, seed);

    let mut input = shares[..usize::from(params.threshold)].to_vec();
    input.push(input[0].clone());

    recover(&input).is_err()
}
