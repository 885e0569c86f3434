// SPDX-License-Identifier: CC0-1.0

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use shamir_demo::field::{Point, interpolate_mod, mod_inv, modulo};
use shamir_demo::sharing::make_shares;
use shamir_demo::text::{decode, encode, validate};

const PRIMES: [i64; 4] = [8191, 131_071, 524_287, 2_147_483_647];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn modulo_is_in_range(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
        let r = modulo(a, b);
        prop_assert!(r >= 0);
        prop_assert!((r as i128) < (b as i128).abs());
        prop_assert_eq!((a as i128 - r as i128) % b as i128, 0);
    }

    #[test]
    fn modulo_is_identity_inside_field(p in prop::sample::select(PRIMES.to_vec()), a in 0i64..8191) {
        prop_assert_eq!(modulo(a, p), a);
    }

    #[test]
    fn mod_inv_inverts(p in prop::sample::select(PRIMES.to_vec()), a in 1i64..8191) {
        let inv = mod_inv(a, p).unwrap();
        prop_assert!((0..p).contains(&inv));
        prop_assert_eq!(modulo(((a as i128 * inv as i128) % p as i128) as i64, p), 1);
    }

    #[test]
    fn numeric_roundtrip(
        seed in any::<u64>(),
        p in prop::sample::select(PRIMES.to_vec()),
        secret in 0i64..8191,
        n in 1usize..10,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let generated = make_shares(secret, n, p, &mut rng).unwrap();
        prop_assert_eq!(interpolate_mod(&generated.shares, p).evaluate(0), Ok(secret));
    }

    #[test]
    fn duplicate_x_has_no_inverse(x in 1i64..8191, y1 in 0i64..8191, y2 in 0i64..8191) {
        let points = [Point::new(x, y1), Point::new(x, y2)];
        prop_assert!(interpolate_mod(&points, 8191).evaluate(0).is_err());
    }

    #[test]
    fn text_roundtrip(seed in any::<u64>(), secret in "\\PC{0,32}", n in 2usize..6) {
        let mut rng = StdRng::seed_from_u64(seed);
        let shares = encode(&secret, n, 131_071, &mut rng).unwrap();
        prop_assert_eq!(shares.len(), n);
        prop_assert!(validate(&shares).is_ok());
        prop_assert_eq!(decode(&shares).unwrap(), secret);
    }
}
