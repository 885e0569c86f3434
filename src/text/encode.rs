// SPDX-License-Identifier: CC0-1.0

use rand::Rng;
use tracing::{debug, warn};

use super::{Error, TextShare};
use crate::sharing::{self, make_shares};

/// Splits `secret` into `number_of_shares` share strings over the integers modulo `prime`.
///
/// Each UTF-16 code unit is shared with a fresh random polynomial. Every share is required
/// for reconstruction. Code units must be smaller than `prime`; larger ones alias to their
/// residue and do not survive reconstruction.
pub fn encode<R: Rng + ?Sized>(
    secret: &str,
    number_of_shares: usize,
    prime: i64,
    rng: &mut R,
) -> Result<Vec<String>, Error> {
    sharing::check_parameters(number_of_shares, prime)?;

    let mut samples: Vec<Vec<i64>> = vec![Vec::new(); number_of_shares];
    for (i, unit) in secret.encode_utf16().enumerate() {
        let code = unit as i64;
        if code >= prime {
            warn!(position = i, code, prime, "character code does not fit in the field");
        }

        let generated = make_shares(code, number_of_shares, prime, rng)?;
        for (ys, share) in samples.iter_mut().zip(generated.shares) {
            ys.push(share.y);
        }
    }

    debug!(
        number_of_shares,
        prime,
        length = samples.first().map_or(0, Vec::len),
        "encoded text shares"
    );

    Ok(samples
        .into_iter()
        .enumerate()
        .map(|(j, ys)| {
            TextShare {
                x: j as i64 + 1,
                prime,
                ys,
            }
            .to_string()
        })
        .collect())
}
