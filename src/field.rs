// SPDX-License-Identifier: CC0-1.0

//! Arithmetic over the integers modulo a prime, random polynomials and Lagrange
//! interpolation.

mod arith;
mod lagrange;
mod polynomial;

pub use arith::{mod_inv, modulo};
pub use lagrange::{Interpolation, ModularInterpolation, interpolate, interpolate_mod};
pub use polynomial::{MAX_COEFFICIENT_SPAN, Polynomial};

use std::error;
use std::fmt;

/// A single sample of a polynomial
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    /// x-coordinate
    pub x: i64,
    /// y-coordinate
    pub y: i64,
}

impl Point {
    /// Returns a point at `(x, y)`
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A numeric function that can be sampled over a real domain
pub trait Curve {
    /// Returns the value of the function at `x`
    fn value_at(&self, x: f64) -> f64;
}

/// Error
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Value has no multiplicative inverse modulo the modulus
    NoModularInverse {
        /// Value that was inverted
        value: i64,
        /// Modulus
        modulus: i64,
    },
    /// A polynomial must produce at least one share
    ZeroShares,
    /// Two interpolation points share an x-coordinate
    DuplicateX(i64),
    /// Plain integer evaluation exceeded the representable range
    Overflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoModularInverse { value, modulus } => {
                write!(f, "{value} does not have a modular inverse modulo {modulus}")
            }
            Self::ZeroShares => write!(f, "number of shares must be at least 1"),
            Self::DuplicateX(x) => write!(f, "two points have the same x value (x={x})"),
            Self::Overflow => write!(f, "polynomial value overflows a 128-bit integer"),
        }
    }
}

impl error::Error for Error {}
