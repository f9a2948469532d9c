//! Immutable complex number value type.
//!
//! Magnitude and phase are computed once at construction; every operation
//! returns a fresh value so the cached polar form never goes stale.

use std::f64::consts::{E, PI};
use std::fmt;

use serde::Serialize;

use crate::core::error::{TitanError, TitanResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Complex {
    re: f64,
    im: f64,
    magnitude: f64,
    phase: f64,
}

impl Complex {
    // Constructor
    pub fn new(re: f64, im: f64) -> Self {
        Complex {
            re,
            im,
            magnitude: (re * re + im * im).sqrt(),
            phase: im.atan2(re),
        }
    }

    pub fn re(&self) -> f64 {
        self.re
    }

    pub fn im(&self) -> f64 {
        self.im
    }

    /// Euclidean norm of (re, im).
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Principal argument in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    // Addition of two complex numbers
    pub fn add(&self, other: &Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }

    // Subtraction of two complex numbers
    pub fn subtract(&self, other: &Complex) -> Complex {
        Complex::new(self.re - other.re, self.im - other.im)
    }

    // Multiplication of two complex numbers
    pub fn multiply(&self, other: &Complex) -> Complex {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.im * other.re + self.re * other.im,
        )
    }

    /// Fails with `DivisionByZero` when the divisor has zero magnitude.
    pub fn divide(&self, other: &Complex) -> TitanResult<Complex> {
        if other.re * other.re + other.im * other.im == 0.0 {
            return Err(TitanError::DivisionByZero);
        }
        Ok(self.divide_unchecked(other))
    }

    fn divide_unchecked(&self, other: &Complex) -> Complex {
        let denominator = other.re * other.re + other.im * other.im;
        Complex::new(
            (self.re * other.re + self.im * other.im) / denominator,
            (self.im * other.re - self.re * other.im) / denominator,
        )
    }

    pub fn conjugate(&self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    /// Real power via the polar form; fractional and negative exponents allowed.
    pub fn pow(&self, n: f64) -> Complex {
        let constant = self.magnitude.powf(n);
        Complex::new(
            constant * (n * self.phase).cos(),
            constant * (n * self.phase).sin(),
        )
    }

    /// Complex power using log-magnitude and phase:
    /// z^w = |z|^a · e^(-b·θ) · cis(a·θ + b·ln|z|) for w = a + bi.
    pub fn complex_pow(&self, exponent: &Complex) -> Complex {
        let sq = self.re * self.re + self.im * self.im;
        let multiplier = sq.powf(exponent.re / 2.0) * E.powf(-exponent.im * self.phase);
        let theta = exponent.re * self.phase + 0.5 * exponent.im * sq.ln();
        Complex::new(multiplier * theta.cos(), multiplier * theta.sin())
    }

    /// The `n` principal n-th roots, evenly spaced in phase by 2π/n.
    pub fn roots(&self, n: usize) -> TitanResult<Vec<Complex>> {
        if n == 0 {
            return Err(TitanError::invalid_argument("root order must be at least 1"));
        }
        let nf = n as f64;
        let radius = self.magnitude.powf(1.0 / nf);
        Ok((0..n)
            .map(|i| {
                let theta = (self.phase + 2.0 * PI * i as f64) / nf;
                Complex::new(radius * theta.cos(), radius * theta.sin())
            })
            .collect())
    }

    // e^(iz) and e^(-iz), the two Euler terms shared by sin and cos
    fn euler_terms(&self) -> (Complex, Complex) {
        let e = Complex::new(E, 0.0);
        let i = Complex::new(0.0, 1.0);
        let neg_i = Complex::new(0.0, -1.0);
        (
            e.complex_pow(&i.multiply(self)),
            e.complex_pow(&neg_i.multiply(self)),
        )
    }

    pub fn sin(&self) -> Complex {
        let (pos, neg) = self.euler_terms();
        pos.subtract(&neg).divide_unchecked(&Complex::new(0.0, 2.0))
    }

    pub fn cos(&self) -> Complex {
        let (pos, neg) = self.euler_terms();
        pos.add(&neg).divide_unchecked(&Complex::new(2.0, 0.0))
    }

    /// Fails with `DivisionByZero` where the cosine vanishes exactly.
    pub fn tan(&self) -> TitanResult<Complex> {
        self.sin().divide(&self.cos())
    }

    /// Component-wise approximate equality.
    pub fn equals(&self, other: &Complex, epsilon: f64) -> bool {
        (self.re - other.re).abs() < epsilon && (self.im - other.im).abs() < epsilon
    }

    // Converts to polar form (magnitude, phase)
    pub fn to_polar(&self) -> (f64, f64) {
        (self.magnitude, self.phase)
    }

    // Creates a complex number from polar coordinates
    pub fn from_polar(magnitude: f64, phase: f64) -> Complex {
        Complex::new(magnitude * phase.cos(), magnitude * phase.sin())
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::new(re, 0.0)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(6);
        if self.im < 0.0 {
            write!(f, "{:.*} - {:.*}i", prec, self.re, prec, -self.im)
        } else {
            write!(f, "{:.*} + {:.*}i", prec, self.re, prec, self.im)
        }
    }
}
