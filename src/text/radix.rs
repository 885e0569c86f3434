// SPDX-License-Identifier: CC0-1.0

use super::Error;

const RADIX: u32 = 36;

/// Returns `value` as lowercase base-36 text
pub fn to_base36(value: i64) -> String {
    let mut n = value.unsigned_abs();
    let mut digits = Vec::new();
    loop {
        // `n % 36` is always a valid digit
        digits.push(std::char::from_digit((n % RADIX as u64) as u32, RADIX).unwrap_or('0'));
        n /= RADIX as u64;
        if n == 0 {
            break;
        }
    }
    if value < 0 {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

/// Parses one base-36 field of a share. Letters may be of either case.
pub fn parse_field(value: &str, share: usize, field: usize) -> Result<i64, Error> {
    if value.is_empty() {
        return Err(Error::EmptyField { share, field });
    }

    let mut acc: i64 = 0;
    for c in value.chars() {
        let Some(digit) = c.to_digit(RADIX) else {
            return Err(Error::InvalidDigit {
                share,
                field,
                value: value.to_string(),
            });
        };
        acc = acc
            .checked_mul(RADIX as i64)
            .and_then(|acc| acc.checked_add(digit as i64))
            .ok_or(Error::ValueTooLarge { share, field })?;
    }

    Ok(acc)
}
