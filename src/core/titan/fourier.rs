//! Spectral transforms of real-valued sequences.

use std::f64::consts::PI;

use crate::core::error::{TitanError, TitanResult};
use crate::core::titan::complex_numbers::Complex;

/// Strided subsequence `arr[start], arr[start + step], ...`.
pub fn segment<T: Copy>(arr: &[T], start: usize, step: usize) -> TitanResult<Vec<T>> {
    if step == 0 {
        return Err(TitanError::invalid_argument("segment step must be at least 1"));
    }
    Ok(arr.iter().skip(start).step_by(step).copied().collect())
}

/// Radix-2 decimation-in-time Cooley-Tukey FFT.
///
/// The input length must be a power of two (1 included). Bins come back in
/// natural frequency order.
pub fn fft(x: &[f64]) -> TitanResult<Vec<Complex>> {
    if !x.len().is_power_of_two() {
        return Err(TitanError::InvalidLength(x.len()));
    }
    debug_log!("fft: transforming {} samples", x.len());
    fft_recursive(x)
}

fn fft_recursive(x: &[f64]) -> TitanResult<Vec<Complex>> {
    let n = x.len();
    if n == 1 {
        return Ok(vec![Complex::new(x[0], 0.0)]);
    }

    let even = fft_recursive(&segment(x, 0, 2)?)?;
    let odd = fft_recursive(&segment(x, 1, 2)?)?;

    let half = n / 2;
    let mut result = vec![Complex::new(0.0, 0.0); n];
    for k in 0..half {
        let twiddle = Complex::from_polar(1.0, -2.0 * PI * k as f64 / n as f64);
        let t = twiddle.multiply(&odd[k]);
        result[k] = even[k].add(&t);
        result[k + half] = even[k].subtract(&t);
    }
    Ok(result)
}

/// Direct O(N²) discrete Fourier transform; accepts any length.
pub fn fourier_transform(data: &[f64]) -> Vec<Complex> {
    let n = data.len();
    let mut result = Vec::with_capacity(n);

    for k in 0..n {
        let mut re = 0.0;
        let mut im = 0.0;

        for (i, &x) in data.iter().enumerate() {
            let angle = 2.0 * PI * k as f64 * i as f64 / n as f64;
            re += x * angle.cos();
            im -= x * angle.sin();
        }

        result.push(Complex::new(re, im));
    }

    result
}
