//! Titan numerics: complex arithmetic, dense matrix algebra and a radix-2 FFT.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;

pub use crate::core::titan::{Complex, Matrix};
pub use crate::core::{TitanError, TitanResult};
