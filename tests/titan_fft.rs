use std::f64::consts::PI;

use titan_numerics::core::titan::fourier::{fft, fourier_transform};
use titan_numerics::TitanError;

#[test]
fn impulse_has_flat_spectrum() {
    let mut x = vec![0.0; 16];
    x[0] = 1.0;
    for bin in fft(&x).unwrap() {
        assert!((bin.re() - 1.0).abs() < 1e-12);
        assert!(bin.im().abs() < 1e-12);
    }
}

#[test]
fn cosine_lands_in_its_bins() {
    let n = 32;
    let x: Vec<f64> = (0..n)
        .map(|i| (2.0 * PI * 3.0 * i as f64 / n as f64).cos())
        .collect();
    let spectrum = fft(&x).unwrap();
    for (k, bin) in spectrum.iter().enumerate() {
        let expected = if k == 3 || k == n - 3 { n as f64 / 2.0 } else { 0.0 };
        assert!((bin.magnitude() - expected).abs() < 1e-9, "bin {k}");
    }
}

#[test]
fn agrees_with_direct_dft_on_ramp() {
    let x: Vec<f64> = (0..64).map(|i| i as f64 * 0.25 - 3.0).collect();
    let fast = fft(&x).unwrap();
    let slow = fourier_transform(&x);
    assert_eq!(fast.len(), slow.len());
    for (k, (a, b)) in fast.iter().zip(&slow).enumerate() {
        assert!(a.equals(b, 1e-8), "bin {k}: {a} vs {b}");
    }
}

#[test]
fn lengths_must_be_powers_of_two() {
    assert_eq!(fft(&[0.0; 6]), Err(TitanError::InvalidLength(6)));
    assert!(fft(&[0.0; 2]).is_ok());
}
