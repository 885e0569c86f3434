// SPDX-License-Identifier: CC0-1.0

//! Sharing of text secrets.
//!
//! Every UTF-16 code unit of the secret is shared with its own random polynomial, using the
//! same prime and number of shares. Share `j` bundles the j-th sample of every polynomial
//! into one line of colon-separated base-36 integers:
//!
//! ```text
//! <x>:<prime>:<y0>:<y1>:...:<y(L-1)>
//! ```

use std::error;
use std::fmt;

use itertools::Itertools;

use crate::{field, sharing};

mod decode;
mod encode;
mod radix;
mod validate;

pub use decode::decode;
pub use encode::encode;
pub use validate::{ShareMetadata, share_metadata, validate};

/// A parsed text share
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextShare {
    /// x-coordinate shared by every sample in this share
    pub x: i64,
    /// Field modulus
    pub prime: i64,
    /// One sample per code unit of the secret
    pub ys: Vec<i64>,
}

impl TextShare {
    /// Parses a share string. `share` is the 1-based position used in error messages.
    pub fn parse(input: &str, share: usize) -> Result<Self, Error> {
        let fields: Vec<i64> = input
            .split(':')
            .enumerate()
            .map(|(i, value)| radix::parse_field(value, share, i + 1))
            .collect::<Result<_, _>>()?;

        let [x, prime, ys @ ..] = fields.as_slice() else {
            return Err(Error::MissingFields {
                share,
                found: fields.len(),
            });
        };

        Ok(TextShare {
            x: *x,
            prime: *prime,
            ys: ys.to_vec(),
        })
    }
}

impl fmt::Display for TextShare {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fields = [self.x, self.prime]
            .into_iter()
            .chain(self.ys.iter().copied())
            .map(radix::to_base36)
            .join(":");
        write!(f, "{fields}")
    }
}

/// Error
#[derive(Debug, PartialEq)]
pub enum Error {
    /// No shares were supplied
    EmptyShareSet,
    /// A field between two colons is empty
    EmptyField {
        /// 1-based share position
        share: usize,
        /// 1-based field position
        field: usize,
    },
    /// A field contains a character that is not a base-36 digit
    InvalidDigit {
        /// 1-based share position
        share: usize,
        /// 1-based field position
        field: usize,
        /// Offending field text
        value: String,
    },
    /// A field does not fit in a 64-bit signed integer
    ValueTooLarge {
        /// 1-based share position
        share: usize,
        /// 1-based field position
        field: usize,
    },
    /// A share lacks the x-coordinate or prime
    MissingFields {
        /// 1-based share position
        share: usize,
        /// Number of fields found
        found: usize,
    },
    /// A share carries a different number of samples than the first share
    LengthMismatch {
        /// 1-based share position
        share: usize,
        /// Number of samples in the first share
        expected: usize,
        /// Number of samples in this share
        found: usize,
    },
    /// Two shares have the same x-coordinate
    DuplicateX {
        /// 1-based share position
        share: usize,
        /// Repeated x-coordinate
        x: i64,
    },
    /// A share was generated with a different prime than the first share
    PrimeMismatch {
        /// 1-based share position
        share: usize,
        /// Prime of the first share
        expected: i64,
        /// Prime of this share
        found: i64,
    },
    /// Share generation or reconstruction failure
    Sharing(sharing::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyShareSet => write!(f, "no shares provided"),
            Self::EmptyField { share, field } => {
                write!(f, "empty field (share: {share}, field: {field})")
            }
            Self::InvalidDigit {
                share,
                field,
                value,
            } => write!(
                f,
                "invalid base-36 value {value:?} (share: {share}, field: {field})"
            ),
            Self::ValueTooLarge { share, field } => {
                write!(f, "value too large (share: {share}, field: {field})")
            }
            Self::MissingFields { share, found } => write!(
                f,
                "share {share} has {found} field(s), expected at least an x value and a prime"
            ),
            Self::LengthMismatch {
                share,
                expected,
                found,
            } => write!(
                f,
                "share {share} encodes {found} character(s) but share 1 encodes {expected}"
            ),
            Self::DuplicateX { share, x } => write!(
                f,
                "share {share} has the same x value as an earlier share (x={x}), each share must have a unique first segment"
            ),
            Self::PrimeMismatch {
                share,
                expected,
                found,
            } => write!(
                f,
                "share {share} was generated with a different prime than share 1 ({expected} vs {found}), all shares must have the same second segment"
            ),
            Self::Sharing(err) => write!(f, "{err}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Sharing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<sharing::Error> for Error {
    fn from(err: sharing::Error) -> Self {
        Self::Sharing(err)
    }
}

impl From<field::Error> for Error {
    fn from(err: field::Error) -> Self {
        Self::Sharing(sharing::Error::Field(err))
    }
}
