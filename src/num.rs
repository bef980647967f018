//! Scalar and complex number primitives shared by every transform.
//!
//! [`Complex`] deliberately keeps two multiplications apart:
//! [`Complex::cross`] is true complex multiplication (rotation and scaling by
//! a phasor) while [`Complex::prod`] multiplies component by component and is
//! only meant for affine viewport mapping via [`Complex::scale`].

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Minimal float trait for generic transforms (no_std, transcendentals via libm)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Default
    + core::fmt::Debug
    + core::fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f64(x: f64) -> Self;
    /// Attempt to convert a `usize` into the floating-point type.
    /// Returns `None` if the value cannot be represented exactly.
    fn from_usize(x: usize) -> Option<Self>;
    fn sin_cos(self) -> (Self, Self);
    fn sqrt(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn abs(self) -> Self;
    fn is_finite(self) -> bool;
    fn pi() -> Self;
    /// `2π`, the period of [`Complex::expi`].
    fn tau() -> Self {
        Self::from_f64(2.0) * Self::pi()
    }
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: usize = 1usize << 24;
        if x < MAX_EXACT {
            Some(x as f32)
        } else {
            None
        }
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2f(self, other)
    }
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
    fn pi() -> Self {
        core::f32::consts::PI
    }
    fn tau() -> Self {
        core::f32::consts::TAU
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: usize = 1usize << 53;
        if x < MAX_EXACT {
            Some(x as f64)
        } else {
            None
        }
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
    fn tau() -> Self {
        core::f64::consts::TAU
    }
}

/// Convert an index or length into `T`.
///
/// Lengths handled here are bounded by memory, far below the exact-integer
/// range of either float type, so the lossy fallback only matters for `f32`
/// beyond 2^24 elements.
#[inline]
pub(crate) fn index_to_float<T: Float>(i: usize) -> T {
    T::from_usize(i).unwrap_or_else(|| T::from_f64(i as f64))
}

/// A point in the plane stored as a complex number: `re` is x, `im` is y.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }

    /// Point on the unit circle at angle `theta` radians: `(cos θ, sin θ)`.
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }

    pub fn sum(a: Self, b: Self) -> Self {
        Self {
            re: a.re + b.re,
            im: a.im + b.im,
        }
    }

    pub fn dif(a: Self, b: Self) -> Self {
        Self {
            re: a.re - b.re,
            im: a.im - b.im,
        }
    }

    /// Component-wise product `(a.re * b.re, a.im * b.im)`.
    ///
    /// This is *not* complex multiplication, see [`Complex::cross`].
    pub fn prod(a: Self, b: Self) -> Self {
        Self {
            re: a.re * b.re,
            im: a.im * b.im,
        }
    }

    /// Component-wise quotient `(a.re / b.re, a.im / b.im)`.
    pub fn div(a: Self, b: Self) -> Self {
        Self {
            re: a.re / b.re,
            im: a.im / b.im,
        }
    }

    /// Complex multiplication.
    #[inline(always)]
    pub fn cross(a: Self, b: Self) -> Self {
        Self {
            re: a.re * b.re - a.im * b.im,
            im: a.re * b.im + a.im * b.re,
        }
    }

    /// Affine remap of `c` around `viewport_half`:
    /// `(c - viewport_half) ⊙ scale_factor + viewport_half` where `⊙` is
    /// [`Complex::prod`].
    pub fn scale(c: Self, scale_factor: Self, viewport_half: Self) -> Self {
        Self::sum(
            Self::prod(Self::dif(c, viewport_half), scale_factor),
            viewport_half,
        )
    }

    pub fn magnitude(self) -> T {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Angle in `(-π, π]`.
    pub fn phase(self) -> T {
        self.im.atan2(self.re)
    }

    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        Self::sum(self, other)
    }

    pub fn mul_scalar(self, factor: T) -> Self {
        Self {
            re: self.re * factor,
            im: self.im * factor,
        }
    }

    pub fn div_scalar(self, factor: T) -> Self {
        Self {
            re: self.re / factor,
            im: self.im / factor,
        }
    }

    /// Unit vector in the direction of `self`. A zero value yields NaN
    /// components.
    pub fn normalize(self) -> Self {
        self.div_scalar(self.magnitude())
    }

    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl<T: Float> From<(T, T)> for Complex<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Float> From<Complex<T>> for (T, T) {
    fn from(c: Complex<T>) -> Self {
        (c.re, c.im)
    }
}

impl<T: Float> Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self::sum(self, other)
    }
}

impl<T: Float> Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self::dif(self, other)
    }
}

impl<T: Float> Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Self::cross(self, other)
    }
}

impl<T: Float> Mul<T> for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, factor: T) -> Self {
        self.mul_scalar(factor)
    }
}

impl<T: Float> Div<T> for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn div(self, factor: T) -> Self {
        self.div_scalar(factor)
    }
}

impl<T: Float> AddAssign for Complex<T> {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        self.re = self.re + other.re;
        self.im = self.im + other.im;
    }
}

impl<T: Float> SubAssign for Complex<T> {
    #[inline(always)]
    fn sub_assign(&mut self, other: Self) {
        self.re = self.re - other.re;
        self.im = self.im - other.im;
    }
}

impl<T: Float> MulAssign<T> for Complex<T> {
    #[inline(always)]
    fn mul_assign(&mut self, factor: T) {
        self.re = self.re * factor;
        self.im = self.im * factor;
    }
}

impl<T: Float> DivAssign<T> for Complex<T> {
    #[inline(always)]
    fn div_assign(&mut self, factor: T) {
        self.re = self.re / factor;
        self.im = self.im / factor;
    }
}

impl<T: Float> core::iter::Sum for Complex<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, c| acc + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx(a: Complex64, b: Complex64) -> bool {
        (a.re - b.re).abs() < EPSILON && (a.im - b.im).abs() < EPSILON
    }

    #[test]
    fn test_cross_is_complex_multiplication() {
        let i = Complex64::new(0.0, 1.0);
        assert_eq!(Complex64::cross(Complex64::new(1.0, 0.0), i), i);
        assert_eq!(Complex64::cross(i, i), Complex64::new(-1.0, 0.0));
        assert_eq!(
            Complex64::cross(Complex64::new(2.0, 3.0), Complex64::new(4.0, 5.0)),
            Complex64::new(-7.0, 22.0)
        );
    }

    #[test]
    fn test_prod_and_div_are_component_wise() {
        let a = Complex64::new(2.0, 3.0);
        let b = Complex64::new(4.0, 5.0);
        assert_eq!(Complex64::prod(a, b), Complex64::new(8.0, 15.0));
        assert_eq!(Complex64::div(Complex64::new(8.0, 15.0), b), a);
    }

    #[test]
    fn test_expi_quarter_turn() {
        let c = Complex64::expi(core::f64::consts::FRAC_PI_2);
        assert!(approx(c, Complex64::new(0.0, 1.0)));
    }

    #[test]
    fn test_expi_nan_propagates() {
        let c = Complex64::expi(f64::NAN);
        assert!(c.re.is_nan() && c.im.is_nan());
    }

    #[test]
    fn test_scalar_helpers_leave_receiver_untouched() {
        let a = Complex64::new(3.0, -6.0);
        assert_eq!(a.div_scalar(3.0), Complex64::new(1.0, -2.0));
        assert_eq!(a.mul_scalar(2.0), Complex64::new(6.0, -12.0));
        assert_eq!(a, Complex64::new(3.0, -6.0));
    }

    #[test]
    fn test_assign_operators() {
        let mut a = Complex64::new(1.0, 1.0);
        a += Complex64::new(1.0, 2.0);
        a -= Complex64::new(0.5, 0.5);
        a *= 2.0;
        a /= 4.0;
        assert!(approx(a, Complex64::new(0.75, 1.25)));
    }
}
