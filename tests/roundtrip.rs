// SPDX-License-Identifier: CC0-1.0

use rand::SeedableRng;
use rand::rngs::StdRng;

use shamir_demo::field::{Polynomial, interpolate, interpolate_mod, mod_inv, modulo};
use shamir_demo::sharing::{make_shares, reconstruct};
use shamir_demo::text::{self, decode, encode, validate};
use shamir_demo::{DEFAULT_PRIME, combine, split_with_rng};

#[test]
fn numeric_secret_1234_over_mersenne_13() {
    let mut rng = StdRng::seed_from_u64(1234);
    let generated = make_shares(1234, 3, (1 << 13) - 1, &mut rng).unwrap();

    let xs: Vec<i64> = generated.shares.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![1, 2, 3]);
    assert_eq!(
        interpolate_mod(&generated.shares, 8191).evaluate(0),
        Ok(1234)
    );
}

#[test]
fn text_secret_hi_over_mersenne_17() {
    let mut rng = StdRng::seed_from_u64(17);
    let shares = encode("hi", 2, (1 << 17) - 1, &mut rng).unwrap();
    assert_eq!(shares.len(), 2);
    assert!(shares.iter().all(|s| s.split(':').nth(1) == Some("2t4v")));
    assert_eq!(decode(&shares).unwrap(), "hi");
}

#[test]
fn two_of_three_shares_reconstruct_the_wrong_secret() {
    let secret = "super secret";
    let mut rng = StdRng::seed_from_u64(3);
    let shares = encode(secret, 3, DEFAULT_PRIME, &mut rng).unwrap();

    assert_eq!(validate(&shares[..2]), Ok(()));
    let decoded = decode(&shares[..2]).unwrap();
    assert_ne!(decoded, secret);

    assert_eq!(combine(&shares).unwrap(), secret);
}

#[test]
fn shares_from_different_sessions_are_rejected() {
    let mut rng = StdRng::seed_from_u64(4);
    let a = split_with_rng("secret", 2, DEFAULT_PRIME, &mut rng).unwrap();
    let b = split_with_rng("secret", 2, 131_071, &mut rng).unwrap();

    assert_eq!(
        validate(&[a[0].as_str(), b[1].as_str()]),
        Err(text::Error::PrimeMismatch {
            share: 2,
            expected: 8191,
            found: 131_071
        })
    );
    assert_eq!(
        validate(&[a[0].as_str(), b[0].as_str()]),
        Err(text::Error::DuplicateX { share: 2, x: 1 })
    );
    assert!(combine(&[a[0].as_str(), b[1].as_str()]).is_err());
}

#[test]
fn plain_interpolation_recovers_secret() {
    let mut rng = StdRng::seed_from_u64(5);
    let polynomial = Polynomial::random(1234, 4, &mut rng).unwrap();
    let recreated = interpolate(&polynomial.shares().unwrap()).unwrap();
    assert_eq!(recreated.evaluate(0.0).round(), 1234.0);
}

#[test]
fn modular_primitives() {
    assert_eq!(modulo(-1, 5), 4);
    assert_eq!(modulo(13, 11), 2);
    assert!(mod_inv(2, 4).is_err());
    assert_eq!(modulo(3 * mod_inv(3, 8191).unwrap(), 8191), 1);
}

#[test]
fn reconstruct_numeric_with_shuffled_shares() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut generated = make_shares(4321, 5, DEFAULT_PRIME, &mut rng).unwrap();
    generated.shares.rotate_left(2);
    assert_eq!(reconstruct(&generated.shares, DEFAULT_PRIME), Ok(4321));
}
