// SPDX-License-Identifier: CC0-1.0

use super::Error;

/// Returns `a mod b` as a value in `[0, |b|)`, also for negative `a`.
///
/// # Panics
/// Panics if `b` is zero.
pub fn modulo(a: i64, b: i64) -> i64 {
    reduce(a as i128, b)
}

// Reduces a wide intermediate into `[0, |m|)`. The result always fits in an i64.
pub(crate) fn reduce(a: i128, m: i64) -> i64 {
    a.rem_euclid(m as i128) as i64
}

/// Returns the multiplicative inverse of `a` modulo `b`, normalized into `[0, b)`.
///
/// Uses the extended Euclidean algorithm. Fails with [`Error::NoModularInverse`] when
/// `gcd(a, b) > 1`, which happens for duplicate share x-coordinates or a non-prime modulus.
pub fn mod_inv(a: i64, b: i64) -> Result<i64, Error> {
    if b < 1 {
        return Err(Error::NoModularInverse {
            value: a,
            modulus: b,
        });
    }

    let (mut t, mut new_t): (i128, i128) = (0, 1);
    let (mut r, mut new_r): (i128, i128) = (b as i128, modulo(a, b) as i128);

    while new_r != 0 {
        let q = r.div_euclid(new_r);
        (t, new_t) = (new_t, t - q * new_t);
        (r, new_r) = (new_r, r - q * new_r);
    }

    if r > 1 {
        return Err(Error::NoModularInverse {
            value: a,
            modulus: b,
        });
    }
    if t < 0 {
        t += b as i128;
    }

    Ok(t as i64)
}
