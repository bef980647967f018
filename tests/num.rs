use core::f64::consts::{FRAC_PI_2, PI};
use epicycles::num::{Complex32, Complex64};

/// Acceptable tolerance for floating-point comparisons in tests.
const EPSILON: f64 = 1e-12;

fn assert_close(a: Complex64, b: Complex64) {
    assert!((a.re - b.re).abs() <= EPSILON, "re: {} vs {}", a.re, b.re);
    assert!((a.im - b.im).abs() <= EPSILON, "im: {} vs {}", a.im, b.im);
}

#[test]
fn cross_multiplies_complex_numbers() {
    let one = Complex64::new(1.0, 0.0);
    let i = Complex64::new(0.0, 1.0);
    assert_eq!(Complex64::cross(one, i), i);
    assert_eq!(Complex64::cross(i, i), Complex64::new(-1.0, 0.0));
    assert_eq!(
        Complex64::new(2.0, 3.0) * Complex64::new(4.0, 5.0),
        Complex64::new(-7.0, 22.0)
    );
}

#[test]
fn prod_is_component_wise_not_cross() {
    let a = Complex64::new(2.0, 3.0);
    let b = Complex64::new(4.0, 5.0);
    assert_eq!(Complex64::prod(a, b), Complex64::new(8.0, 15.0));
    assert_ne!(Complex64::prod(a, b), Complex64::cross(a, b));
}

#[test]
fn sum_and_dif_do_not_mutate() {
    let a = Complex64::new(1.0, 2.0);
    let b = Complex64::new(0.5, -4.0);
    assert_eq!(Complex64::sum(a, b), Complex64::new(1.5, -2.0));
    assert_eq!(Complex64::dif(a, b), Complex64::new(0.5, 6.0));
    assert_eq!(a + b, Complex64::sum(a, b));
    assert_eq!(a - b, Complex64::dif(a, b));
    assert_eq!(a, Complex64::new(1.0, 2.0));
}

#[test]
fn magnitude_and_phase() {
    assert_eq!(Complex64::new(3.0, 4.0).magnitude(), 5.0);
    assert_eq!(Complex64::new(1.0, 0.0).phase(), 0.0);
    assert!((Complex64::new(0.0, 1.0).phase() - FRAC_PI_2).abs() < EPSILON);
    // atan2 range is (-π, π]
    assert!((Complex64::new(-1.0, 0.0).phase() - PI).abs() < EPSILON);
}

#[test]
fn expi_walks_the_unit_circle() {
    assert_close(Complex64::expi(0.0), Complex64::new(1.0, 0.0));
    assert_close(Complex64::expi(PI), Complex64::new(-1.0, 0.0));
    for k in 0..16 {
        let c = Complex64::expi(k as f64 * 0.7);
        assert!((c.magnitude() - 1.0).abs() < EPSILON);
    }
}

#[test]
fn scale_maps_into_viewport() {
    let half = Complex64::new(100.0, 50.0);
    let factor = Complex64::new(2.0, 0.5);
    // the viewport centre is a fixed point
    assert_eq!(Complex64::scale(half, factor, half), half);
    assert_eq!(
        Complex64::scale(Complex64::new(110.0, 70.0), factor, half),
        Complex64::new(120.0, 60.0)
    );
}

#[test]
fn normalize_and_scalar_helpers() {
    let c = Complex64::new(3.0, -4.0);
    assert_close(c.normalize(), Complex64::new(0.6, -0.8));
    assert_eq!(c.mul_scalar(2.0), Complex64::new(6.0, -8.0));
    assert_eq!(c.div_scalar(2.0), Complex64::new(1.5, -2.0));
    assert_eq!(c.add(Complex64::new(1.0, 1.0)), Complex64::new(4.0, -3.0));
    assert_eq!(c.conj(), Complex64::new(3.0, 4.0));
}

#[test]
fn normalize_zero_is_nan() {
    let n = Complex64::zero().normalize();
    assert!(n.re.is_nan() && n.im.is_nan());
}

#[test]
fn default_is_origin() {
    assert_eq!(Complex64::default(), Complex64::new(0.0, 0.0));
    assert_eq!(Complex32::default(), Complex32::zero());
}

#[test]
fn point_conversions() {
    let c: Complex64 = (1.5, -2.5).into();
    assert_eq!(c, Complex64::new(1.5, -2.5));
    let (x, y): (f64, f64) = c.into();
    assert_eq!((x, y), (1.5, -2.5));
}
