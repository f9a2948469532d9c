use std::f64::consts::PI;

use titan_numerics::{Complex, TitanError};

const EPS: f64 = 1e-9;

#[test]
fn cube_roots_of_unity() {
    let roots = Complex::new(1.0, 0.0).roots(3).expect("roots ok");
    assert_eq!(roots.len(), 3);
    assert!(roots[0].equals(&Complex::new(1.0, 0.0), EPS));
    for r in &roots {
        assert!(r.pow(3.0).equals(&Complex::new(1.0, 0.0), 1e-9), "{r}");
        assert!((r.magnitude() - 1.0).abs() < EPS);
    }
    // Consecutive roots are 2π/3 apart.
    let step = roots[1].divide(&roots[0]).unwrap();
    assert!(step.equals(&Complex::from_polar(1.0, 2.0 * PI / 3.0), EPS));
}

#[test]
fn zero_roots_is_rejected() {
    assert!(matches!(
        Complex::new(1.0, 1.0).roots(0),
        Err(TitanError::InvalidArgument(_))
    ));
}

#[test]
fn polar_round_trip_and_display() {
    let z = Complex::new(-3.0, 4.0);
    let (r, theta) = z.to_polar();
    assert!(Complex::from_polar(r, theta).equals(&z, EPS));
    assert_eq!(format!("{:.2}", z), "-3.00 + 4.00i");
    assert_eq!(format!("{:.1}", z.conjugate()), "-3.0 - 4.0i");
}

#[test]
fn trig_identity_holds_off_the_real_axis() {
    let z = Complex::new(0.5, -1.25);
    let s = z.sin();
    let c = z.cos();
    let one = s.multiply(&s).add(&c.multiply(&c));
    assert!(one.equals(&Complex::new(1.0, 0.0), 1e-9));
    let t = z.tan().unwrap();
    assert!(t.equals(&s.divide(&c).unwrap(), EPS));
}

#[test]
fn division_by_zero_is_an_error() {
    let z = Complex::new(2.0, 1.0);
    assert_eq!(
        z.divide(&Complex::new(0.0, 0.0)),
        Err(TitanError::DivisionByZero)
    );
}
