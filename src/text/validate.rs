// SPDX-License-Identifier: CC0-1.0

use std::collections::HashSet;

use super::{Error, radix};

/// The x value and prime at the head of a share string
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShareMetadata {
    /// x-coordinate
    pub x: i64,
    /// Field modulus
    pub prime: i64,
}

/// Parses the first two fields of a share without decoding its samples.
/// `share` is the 1-based position used in error messages.
pub fn share_metadata(input: &str, share: usize) -> Result<ShareMetadata, Error> {
    let mut fields = input.splitn(3, ':');
    let (Some(x), Some(prime)) = (fields.next(), fields.next()) else {
        return Err(Error::MissingFields { share, found: 1 });
    };

    Ok(ShareMetadata {
        x: radix::parse_field(x, share, 1)?,
        prime: radix::parse_field(prime, share, 2)?,
    })
}

/// Checks that a set of share strings belongs together: every share must carry the prime of
/// the first share, and no two shares may have the same x value.
pub fn validate<S: AsRef<str>>(shares: &[S]) -> Result<(), Error> {
    let Some(first) = shares.first() else {
        return Err(Error::EmptyShareSet);
    };
    let ShareMetadata { x, prime } = share_metadata(first.as_ref(), 1)?;

    let mut xs = HashSet::from([x]);
    for (i, share) in shares.iter().enumerate().skip(1) {
        let metadata = share_metadata(share.as_ref(), i + 1)?;

        if !xs.insert(metadata.x) {
            return Err(Error::DuplicateX {
                share: i + 1,
                x: metadata.x,
            });
        }
        if metadata.prime != prime {
            return Err(Error::PrimeMismatch {
                share: i + 1,
                expected: prime,
                found: metadata.prime,
            });
        }
    }

    Ok(())
}
