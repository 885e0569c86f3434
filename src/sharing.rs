// SPDX-License-Identifier: CC0-1.0

//! Shares of a single integer secret modulo a prime.

use std::error;
use std::fmt;

use rand::Rng;
use tracing::{debug, warn};

use crate::field::{self, Point, Polynomial, interpolate_mod};

/// Default field modulus, the Mersenne prime 2^13 - 1
pub const DEFAULT_PRIME: i64 = (1 << 13) - 1;

/// The polynomial behind a set of numeric shares, reduced modulo the field prime.
///
/// Only useful for comparing against a reconstruction; the coefficients are never
/// part of the shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedPolynomial {
    polynomial: Polynomial,
    prime: i64,
}

impl SharedPolynomial {
    /// Returns `f(x) mod prime`
    pub fn evaluate(&self, x: i64) -> i64 {
        self.polynomial.evaluate_mod(x, self.prime)
    }

    /// Returns the underlying polynomial
    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    /// Returns the field modulus
    pub fn prime(&self) -> i64 {
        self.prime
    }
}

impl fmt::Display for SharedPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (mod {})", self.polynomial, self.prime)
    }
}

/// Shares of a single numeric secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericShares {
    /// Shares at `x = 1..=n`, with `y` reduced into `[0, prime)`
    pub shares: Vec<Point>,
    /// Polynomial the shares were sampled from
    pub polynomial: SharedPolynomial,
}

/// Splits `secret` into `number_of_shares` shares over the integers modulo `prime`.
///
/// All shares are required to reconstruct the secret. The secret must lie in
/// `[0, prime)`; anything else is shared as its residue modulo `prime`, and the
/// reconstruction will return that residue.
pub fn make_shares<R: Rng + ?Sized>(
    secret: i64,
    number_of_shares: usize,
    prime: i64,
    rng: &mut R,
) -> Result<NumericShares, Error> {
    check_parameters(number_of_shares, prime)?;
    if !(0..prime).contains(&secret) {
        warn!(secret, prime, "secret is outside the field and will alias");
    }

    let polynomial = Polynomial::random(secret, number_of_shares, rng)?;
    let shares = (1..=number_of_shares as i64)
        .map(|x| Point::new(x, polynomial.evaluate_mod(x, prime)))
        .collect();

    debug!(number_of_shares, prime, "generated numeric shares");

    Ok(NumericShares {
        shares,
        polynomial: SharedPolynomial { polynomial, prime },
    })
}

// Share x-coordinates run from 1 to n and must stay distinct modulo the prime.
pub(crate) fn check_parameters(number_of_shares: usize, prime: i64) -> Result<(), Error> {
    if prime < 2 {
        return Err(Error::InvalidPrime(prime));
    }
    if number_of_shares == 0 {
        return Err(Error::ZeroShares);
    }
    if number_of_shares as u64 >= prime as u64 {
        return Err(Error::TooManyShares {
            shares: number_of_shares,
            prime,
        });
    }
    Ok(())
}

/// Returns the secret at `x = 0` of the polynomial through `shares` modulo `prime`
pub fn reconstruct(shares: &[Point], prime: i64) -> Result<i64, Error> {
    if prime < 2 {
        return Err(Error::InvalidPrime(prime));
    }

    let secret = interpolate_mod(shares, prime).evaluate(0)?;
    Ok(secret)
}

/// Error
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Field modulus must be at least 2
    InvalidPrime(i64),
    /// At least one share is required
    ZeroShares,
    /// Share x-coordinates would collide modulo the prime
    TooManyShares {
        /// Requested number of shares
        shares: usize,
        /// Field modulus
        prime: i64,
    },
    /// Field arithmetic failure
    Field(field::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidPrime(prime) => write!(f, "invalid prime: {prime}"),
            Self::ZeroShares => write!(f, "number of shares must be at least 1"),
            Self::TooManyShares { shares, prime } => {
                write!(f, "{shares} shares do not fit in the field of prime {prime}")
            }
            Self::Field(err) => write!(f, "{err}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<field::Error> for Error {
    fn from(err: field::Error) -> Self {
        Self::Field(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_make_shares_reconstruct() {
        let mut rng = StdRng::seed_from_u64(2024);
        let NumericShares { shares, polynomial } =
            make_shares(1234, 3, DEFAULT_PRIME, &mut rng).unwrap();

        assert_eq!(shares.iter().map(|p| p.x).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(shares.iter().all(|p| (0..DEFAULT_PRIME).contains(&p.y)));
        for share in &shares {
            assert_eq!(polynomial.evaluate(share.x), share.y);
        }
        assert_eq!(polynomial.evaluate(0), 1234);
        assert_eq!(reconstruct(&shares, DEFAULT_PRIME), Ok(1234));
    }

    #[test]
    fn test_make_shares_many_seeds() {
        let prime = 131_071; // 2^17 - 1
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let secret = (seed as i64 * 2_617) % prime;
            let n = 2 + (seed as usize % 6);
            let generated = make_shares(secret, n, prime, &mut rng).unwrap();
            assert_eq!(generated.shares.len(), n);
            assert_eq!(reconstruct(&generated.shares, prime), Ok(secret));
        }
    }

    #[test]
    fn test_make_shares_label() {
        let mut rng = StdRng::seed_from_u64(3);
        let generated = make_shares(42, 2, 8191, &mut rng).unwrap();
        let label = generated.polynomial.to_string();
        assert!(label.starts_with("f(x) = 42"));
        assert!(label.ends_with(" (mod 8191)"));
    }

    #[test]
    fn test_secret_aliases_outside_field() {
        let mut rng = StdRng::seed_from_u64(11);
        let generated = make_shares(8191 + 5, 3, 8191, &mut rng).unwrap();
        assert_eq!(reconstruct(&generated.shares, 8191), Ok(5));
    }

    #[test]
    fn test_invalid_inputs() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            make_shares(1, 3, 1, &mut rng).unwrap_err(),
            Error::InvalidPrime(1)
        );
        assert_eq!(
            make_shares(1, 0, 7, &mut rng).unwrap_err(),
            Error::ZeroShares
        );
        assert_eq!(
            make_shares(1, 7, 7, &mut rng).unwrap_err(),
            Error::TooManyShares {
                shares: 7,
                prime: 7
            }
        );
        assert_eq!(reconstruct(&[], 0).unwrap_err(), Error::InvalidPrime(0));
    }

    #[test]
    fn test_reconstruct_duplicate_x() {
        let shares = [Point::new(1, 10), Point::new(1, 20)];
        assert_eq!(
            reconstruct(&shares, 8191).unwrap_err(),
            Error::Field(field::Error::NoModularInverse {
                value: 0,
                modulus: 8191
            })
        );
    }

    #[test]
    fn test_reconstruct_too_few_shares() {
        let shares = [Point::new(1, 1494), Point::new(2, 329)];
        // Missing the third share of f(x) = 1234 + 166x + 94x^2 mod 1613
        let secret = reconstruct(&shares, 1613).unwrap();
        assert_ne!(secret, 1234);
    }
}
