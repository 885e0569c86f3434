// SPDX-License-Identifier: CC0-1.0

//! # Shamir Demo
//!
//! Shamir's Secret Sharing over a prime field, for integer and text secrets.
//!
//! ## Overview
//!
//! A secret is hidden as the constant term of a random polynomial of degree `n - 1`. The
//! polynomial is sampled at `x = 1..=n` and each sample is handed out as a share. Lagrange
//! interpolation through all `n` samples recovers the polynomial, and its value at `x = 0`
//! is the secret.
//!
//! The crate is organized bottom-up:
//!
//! 1. [`field`]: modular arithmetic, random polynomials and Lagrange interpolation, both
//!    over the reals and over the integers modulo a prime
//! 2. [`sharing`]: shares of a single integer secret modulo a prime
//! 3. [`text`]: shares of a text secret, one polynomial per UTF-16 code unit, packed into
//!    colon-separated base-36 strings of the form `x:prime:y0:y1:...`
//!
//! ## Usage
//!
//! ```rust
//! use shamir_demo::{combine, split};
//!
//! let shares = split("hello world", 3, 8191).unwrap();
//! assert_eq!(shares.len(), 3);
//!
//! let secret = combine(&shares).unwrap();
//! assert_eq!(secret, "hello world");
//! ```
//!
//! ## Limitations
//!
//! - There is no threshold: every share that was generated is required. Reconstructing with
//!   fewer shares does not fail, it silently returns the wrong secret.
//! - Shares carry no checksum, so a corrupted share also yields a wrong secret. Only
//!   mismatched primes and repeated x values are detected, by [`text::validate`].
//! - Secrets (and every character code of a text secret) must be smaller than the prime,
//!   otherwise they alias to their residue.
//! - Nothing here is constant-time. Do not use it to protect real secrets.

// Coding conventions
#![deny(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(missing_docs)]

pub mod field;
pub mod sharing;
pub mod text;

use anyhow::{Context, Result, ensure};
use rand::Rng;

pub use field::{Curve, Point};
pub use sharing::DEFAULT_PRIME;

/// Splits a text secret into `number_of_shares` share strings, all of which are needed to
/// recover it
pub fn split(secret: &str, number_of_shares: usize, prime: i64) -> Result<Vec<String>> {
    split_with_rng(secret, number_of_shares, prime, &mut rand::rng())
}

/// Identical to `split` except the polynomial coefficients are drawn from `rng`
pub fn split_with_rng<R: Rng + ?Sized>(
    secret: &str,
    number_of_shares: usize,
    prime: i64,
    rng: &mut R,
) -> Result<Vec<String>> {
    let shares = text::encode(secret, number_of_shares, prime, rng)
        .context("Failed to split secret")?;
    Ok(shares)
}

/// Recovers a text secret from the complete set of its share strings.
///
/// The share set is validated first, so mismatched primes and repeated x values are
/// reported instead of producing a wrong secret.
pub fn combine<S: AsRef<str>>(shares: &[S]) -> Result<String> {
    text::validate(shares).context("Invalid share set")?;
    let secret = text::decode(shares).context("Failed to reconstruct secret")?;
    Ok(secret)
}

/// Samples `curve` at `steps` evenly spaced points of `[x1, x2)`
pub fn sample_curve<C: Curve + ?Sized>(
    curve: &C,
    x1: f64,
    x2: f64,
    steps: usize,
) -> Result<Vec<(f64, f64)>> {
    ensure!(x1 < x2, "Invalid domain: x1 ({x1}) must be less than x2 ({x2})");
    ensure!(steps > 0, "At least one sample is required");

    let width = (x2 - x1) / steps as f64;
    Ok((0..steps)
        .map(|i| {
            let x = x1 + width * i as f64;
            (x, curve.value_at(x))
        })
        .collect())
}
