// SPDX-License-Identifier: CC0-1.0

use std::fmt;

use rand::Rng;

use super::arith::reduce;
use super::{Curve, Error, Point};

/// Width of the range random coefficients are drawn from, centered on zero.
pub const MAX_COEFFICIENT_SPAN: i64 = 1000;

/// A polynomial whose constant term is the secret.
///
/// `coefficients[i]` is the coefficient of `x^(i+1)`. The coefficients are fixed once the
/// polynomial is constructed; a new polynomial must be built to draw fresh ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    secret: i64,
    coefficients: Vec<i64>,
}

impl Polynomial {
    /// Returns a random polynomial of degree `number_of_shares - 1` with constant term `secret`.
    ///
    /// Each coefficient is drawn independently as `round(u * 1000) - 500` for `u` uniform
    /// in `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(
        secret: i64,
        number_of_shares: usize,
        rng: &mut R,
    ) -> Result<Self, Error> {
        if number_of_shares == 0 {
            return Err(Error::ZeroShares);
        }

        let coefficients = (1..number_of_shares)
            .map(|_| {
                let u: f64 = rng.random();
                (u * MAX_COEFFICIENT_SPAN as f64).round() as i64 - MAX_COEFFICIENT_SPAN / 2
            })
            .collect();

        Ok(Polynomial {
            secret,
            coefficients,
        })
    }

    /// Returns a polynomial with the given constant term and higher-order coefficients
    pub fn from_coefficients(secret: i64, coefficients: Vec<i64>) -> Self {
        Polynomial {
            secret,
            coefficients,
        }
    }

    /// Returns the constant term
    pub fn secret(&self) -> i64 {
        self.secret
    }

    /// Returns the coefficients of `x^1..x^degree`
    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// Returns the degree, which is one less than the number of shares
    pub fn degree(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluates the polynomial in plain integer arithmetic
    pub fn evaluate(&self, x: i64) -> Result<i128, Error> {
        let x = x as i128;
        let mut acc: i128 = 0;
        for &coef in self.coefficients.iter().rev() {
            acc = acc
                .checked_add(coef as i128)
                .and_then(|acc| acc.checked_mul(x))
                .ok_or(Error::Overflow)?;
        }
        acc.checked_add(self.secret as i128).ok_or(Error::Overflow)
    }

    /// Evaluates the polynomial modulo `prime` using Horner's rule.
    ///
    /// Equal to `modulo(evaluate(x), prime)` without any risk of overflow.
    pub fn evaluate_mod(&self, x: i64, prime: i64) -> i64 {
        let x = reduce(x as i128, prime) as i128;
        let mut acc: i128 = 0;
        for &coef in self.coefficients.iter().rev() {
            acc = reduce((acc + coef as i128) * x, prime) as i128;
        }
        reduce(acc + self.secret as i128, prime)
    }

    /// Returns one share per unit of degree plus one, sampled at `x = 1..=degree+1`
    pub fn shares(&self) -> Result<Vec<Point>, Error> {
        (1..=self.degree() as i64 + 1)
            .map(|x| {
                let y = self.evaluate(x)?;
                let y = i64::try_from(y).map_err(|_| Error::Overflow)?;
                Ok(Point { x, y })
            })
            .collect()
    }
}

impl Curve for Polynomial {
    fn value_at(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .fold(self.secret as f64, |y, (i, &coef)| {
                y + x.powi(i as i32 + 1) * coef as f64
            })
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "f(x) = {}", self.secret)?;
        for (i, &coef) in self.coefficients.iter().enumerate() {
            let power = i + 1;
            if coef > 0 {
                write!(f, " + {coef}x^{power}")?;
            } else if coef < 0 {
                write!(f, " - {}x^{power}", coef.unsigned_abs())?;
            }
        }
        Ok(())
    }
}
