//! Handlers behind the `titan` subcommands.

pub mod complex;
pub mod linalg;
pub mod spectral;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::core::titan::{Complex, Matrix};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub precision: usize,
    /// Text output prints magnitudes below this as plain zero.
    pub zero_epsilon: f64,
}

impl Output {
    pub fn new(json: bool, precision: usize, zero_epsilon: f64) -> Self {
        Output {
            json,
            precision,
            zero_epsilon,
        }
    }

    pub fn snap(&self, v: f64) -> f64 {
        if v.abs() < self.zero_epsilon {
            0.0
        } else {
            v
        }
    }

    pub fn snap_complex(&self, z: &Complex) -> Complex {
        Complex::new(self.snap(z.re()), self.snap(z.im()))
    }

    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string(value).context("Serialize result")?);
        Ok(())
    }

    pub fn scalar(&self, value: f64) -> Result<()> {
        if self.json {
            return self.json(&value);
        }
        println!("{:.*}", self.precision, self.snap(value));
        Ok(())
    }

    pub fn matrix(&self, label: Option<&str>, m: &Matrix) -> Result<()> {
        if self.json {
            return self.json(m);
        }
        if let Some(label) = label {
            println!("{}", format!("{label}:").bold());
        }
        println!("{:.*}", self.precision, m.map(|v| self.snap(v)));
        Ok(())
    }
}

pub fn parse_matrix(text: &str) -> Result<Matrix> {
    serde_json::from_str(text).with_context(|| format!("Parse matrix JSON {text:?}"))
}

pub fn parse_vector(text: &str) -> Result<Vec<f64>> {
    serde_json::from_str(text).with_context(|| format!("Parse vector JSON {text:?}"))
}
