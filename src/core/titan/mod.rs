//! Titan numerics: complex algebra, dense linear algebra and the FFT.

pub mod advanced_linear_algebra;
pub mod complex_numbers;
pub mod fourier;
pub mod geometry;
pub mod linear_algebra;
pub mod matrix;
pub mod norms;
pub mod reorder;

// --- nalgebra / num-complex bridges (feature-gated) ---
#[cfg(feature = "interop")]
pub mod interop;

pub use complex_numbers::Complex;
pub use matrix::Matrix;
