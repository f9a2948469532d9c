//! Core module tree for the Titan numerics library.

#[macro_use]
pub mod debug; // gated debug logging (TITAN_DEBUG=1) provides debug_log! macro
pub mod error;
pub mod titan;

pub use error::{TitanError, TitanResult};
