// SPDX-License-Identifier: CC0-1.0

use tracing::debug;

use super::{Error, TextShare};
use crate::field::Point;
use crate::sharing;

/// Reconstructs a text secret from its share strings.
///
/// The prime is taken from the first share; run [`super::validate`] first to reject share
/// sets with mismatched primes or repeated x values. Every share that was generated must
/// be supplied: with fewer shares the interpolation still succeeds but fits a polynomial
/// of the wrong degree, so the output is silently wrong.
///
/// Each interpolated value is truncated to a 16-bit code unit and the text is rebuilt with
/// lossy UTF-16 decoding.
pub fn decode<S: AsRef<str>>(shares: &[S]) -> Result<String, Error> {
    let parsed: Vec<TextShare> = shares
        .iter()
        .enumerate()
        .map(|(i, share)| TextShare::parse(share.as_ref(), i + 1))
        .collect::<Result<_, _>>()?;

    let Some(first) = parsed.first() else {
        return Err(Error::EmptyShareSet);
    };
    let prime = first.prime;
    let length = first.ys.len();

    for (i, share) in parsed.iter().enumerate().skip(1) {
        if share.ys.len() != length {
            return Err(Error::LengthMismatch {
                share: i + 1,
                expected: length,
                found: share.ys.len(),
            });
        }
    }

    let mut units: Vec<u16> = Vec::with_capacity(length);
    for position in 0..length {
        let points: Vec<Point> = parsed
            .iter()
            .map(|share| Point::new(share.x, share.ys[position]))
            .collect();
        let code = sharing::reconstruct(&points, prime)?;
        units.push(code as u16);
    }

    debug!(
        shares = parsed.len(),
        prime, length, "reconstructed text secret"
    );

    Ok(String::from_utf16_lossy(&units))
}
