// SPDX-License-Identifier: CC0-1.0

//! Lagrange interpolation, see <https://en.wikipedia.org/wiki/Lagrange_polynomial>

use super::arith::{mod_inv, reduce};
use super::{Curve, Error, Point};

/// The unique lowest-degree polynomial through a set of points, in real arithmetic
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    points: Vec<Point>,
}

/// The unique lowest-degree polynomial through a set of points, over the field of
/// integers modulo a prime
#[derive(Debug, Clone, PartialEq)]
pub struct ModularInterpolation {
    points: Vec<Point>,
    prime: i64,
}

/// Returns the polynomial interpolating `points`.
///
/// Fails if two points share an x-coordinate.
pub fn interpolate(points: &[Point]) -> Result<Interpolation, Error> {
    for (j, p) in points.iter().enumerate() {
        if points[..j].iter().any(|q| q.x == p.x) {
            return Err(Error::DuplicateX(p.x));
        }
    }

    Ok(Interpolation {
        points: points.to_vec(),
    })
}

/// Returns the polynomial interpolating `points` modulo `prime`.
///
/// Points whose x-coordinates collide modulo `prime` are only detected on evaluation,
/// where they surface as [`Error::NoModularInverse`].
pub fn interpolate_mod(points: &[Point], prime: i64) -> ModularInterpolation {
    ModularInterpolation {
        points: points.to_vec(),
        prime,
    }
}

impl Interpolation {
    /// Returns the interpolated points
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Evaluates the interpolated polynomial at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut sum = 0.0;
        for (j, pj) in self.points.iter().enumerate() {
            let mut basis = 1.0;
            for (m, pm) in self.points.iter().enumerate() {
                if j == m {
                    continue;
                }
                basis *= (x - pm.x as f64) / (pj.x as f64 - pm.x as f64);
            }
            sum += pj.y as f64 * basis;
        }
        sum
    }
}

impl Curve for Interpolation {
    fn value_at(&self, x: f64) -> f64 {
        self.evaluate(x)
    }
}

impl ModularInterpolation {
    /// Returns the interpolated points
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the field modulus
    pub fn prime(&self) -> i64 {
        self.prime
    }

    /// Evaluates the interpolated polynomial at `x`, returning a value in `[0, prime)`.
    ///
    /// Partial products and the running sum are reduced at every step.
    ///
    /// # Panics
    /// Panics if the prime is zero.
    pub fn evaluate(&self, x: i64) -> Result<i64, Error> {
        let prime = self.prime;
        let mut sum: i64 = 0;
        for (j, pj) in self.points.iter().enumerate() {
            let mut basis: i64 = 1;
            for (m, pm) in self.points.iter().enumerate() {
                if j == m {
                    continue;
                }
                let numerator = reduce(x as i128 - pm.x as i128, prime);
                let denominator = reduce(pj.x as i128 - pm.x as i128, prime);
                let inv_den = mod_inv(denominator, prime)?;
                let partial = reduce(basis as i128 * numerator as i128, prime);
                basis = reduce(partial as i128 * inv_den as i128, prime);
            }
            sum = reduce(sum as i128 + pj.y as i128 * basis as i128, prime);
        }
        Ok(sum)
    }
}
