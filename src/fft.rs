//! Fast Fourier Transform (FFT) algorithms.
//!
//! This module implements the recursive radix-2 decimation-in-time
//! [Cooley–Tukey algorithm](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm)
//! and its inverse. Every entry point validates that the input length is a
//! non-zero power of two before recursing.
//!
//! Two implementations share the same recursion:
//! - [`RecursiveFft`] (used by [`fft`] and [`ifft`]) evaluates each twiddle
//!   factor `exp(∓2πi·k/n)` on the fly.
//! - [`FftPlan`], built by an [`FftPlanner`], reads twiddles from a table that
//!   the planner caches per transform length.
//!
//! The forward transform is unnormalised. The inverse divides by the
//! top-level length exactly once, so `ifft(fft(x)) ≈ x`.

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use hashbrown::HashMap;

use crate::num::index_to_float;
pub use crate::num::{Complex, Complex32, Complex64, Float};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The sequence length is zero or not a power of two.
    InvalidInputLength(usize),
    /// A plan was applied to a sequence of a different length.
    MismatchedLengths { expected: usize, actual: usize },
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidInputLength(len) => {
                write!(f, "input length {} is not a non-zero power of two", len)
            }
            FftError::MismatchedLengths { expected, actual } => write!(
                f,
                "plan expects {} elements but the input has {}",
                expected, actual
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

#[inline]
fn validate_len(n: usize) -> Result<(), FftError> {
    if n.is_power_of_two() {
        Ok(())
    } else {
        Err(FftError::InvalidInputLength(n))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Inverse,
}

/// Recursive radix-2 butterfly.
///
/// `twiddle(k, m)` must return `exp(∓2πi·k/m)` for the current sub-transform
/// length `m`. When `scale` is set the outputs of this (outermost) level are
/// divided by `input.len()`; nested levels are always called unscaled.
fn radix2<T, W>(input: &[Complex<T>], twiddle: &W, scale: bool) -> Vec<Complex<T>>
where
    T: Float,
    W: Fn(usize, usize) -> Complex<T>,
{
    let n = input.len();
    if n == 1 {
        return input.to_vec();
    }
    let half = n / 2;
    let even: Vec<Complex<T>> = input.iter().step_by(2).copied().collect();
    let odd: Vec<Complex<T>> = input.iter().skip(1).step_by(2).copied().collect();
    let even = radix2(&even, twiddle, false);
    let odd = radix2(&odd, twiddle, false);

    let norm = index_to_float::<T>(n);
    let mut out = vec![Complex::zero(); n];
    for i in 0..half {
        let l = even[i];
        let r = Complex::cross(twiddle(i, n), odd[i]);
        let mut a = l + r;
        let mut b = l - r;
        if scale {
            a /= norm;
            b /= norm;
        }
        out[i] = a;
        out[i + half] = b;
    }
    out
}

/// Interface shared by the on-the-fly and the table-driven transforms.
pub trait FftImpl<T: Float> {
    /// Forward, unnormalised transform of a power-of-two length sequence.
    fn fft(&self, samples: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError>;

    /// Inverse transform. With `scale` the result is divided by the length,
    /// without it the result is `n` times the normalised inverse.
    fn ifft_with_scale(
        &self,
        frequencies: &[Complex<T>],
        scale: bool,
    ) -> Result<Vec<Complex<T>>, FftError>;

    /// Normalised inverse transform.
    fn ifft(&self, frequencies: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        self.ifft_with_scale(frequencies, true)
    }
}

/// Stateless transform computing every twiddle factor with [`Complex::expi`].
#[derive(Debug, Clone, Copy)]
pub struct RecursiveFft<T: Float> {
    _marker: PhantomData<T>,
}

impl<T: Float> Default for RecursiveFft<T> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: Float> RecursiveFft<T> {
    fn run(
        &self,
        input: &[Complex<T>],
        direction: Direction,
        scale: bool,
    ) -> Result<Vec<Complex<T>>, FftError> {
        validate_len(input.len())?;
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "recursive {:?} transform of {} points (scale = {})",
            direction,
            input.len(),
            scale
        );
        let sign = match direction {
            Direction::Forward => -T::one(),
            Direction::Inverse => T::one(),
        };
        let twiddle = |k: usize, m: usize| {
            Complex::expi(sign * T::tau() * index_to_float::<T>(k) / index_to_float::<T>(m))
        };
        Ok(radix2(input, &twiddle, scale))
    }
}

impl<T: Float> FftImpl<T> for RecursiveFft<T> {
    fn fft(&self, samples: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        self.run(samples, Direction::Forward, false)
    }

    fn ifft_with_scale(
        &self,
        frequencies: &[Complex<T>],
        scale: bool,
    ) -> Result<Vec<Complex<T>>, FftError> {
        self.run(frequencies, Direction::Inverse, scale)
    }
}

/// Forward FFT of `samples`, whose length must be a non-zero power of two.
///
/// ```
/// use epicycles::{fft, Complex64};
///
/// let spectrum = fft(&[Complex64::new(1.0, 0.0); 4]).unwrap();
/// assert_eq!(spectrum[0], Complex64::new(4.0, 0.0));
/// ```
pub fn fft<T: Float>(samples: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    RecursiveFft::<T>::default().fft(samples)
}

/// Normalised inverse FFT, `ifft(fft(x)) ≈ x`.
pub fn ifft<T: Float>(frequencies: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    RecursiveFft::<T>::default().ifft(frequencies)
}

/// Inverse FFT with explicit control over the final `1/n` normalisation.
pub fn ifft_with_scale<T: Float>(
    frequencies: &[Complex<T>],
    scale: bool,
) -> Result<Vec<Complex<T>>, FftError> {
    RecursiveFft::<T>::default().ifft_with_scale(frequencies, scale)
}

pub struct FftPlanner<T: Float> {
    /// Forward twiddle tables keyed by transform length. The table for `n`
    /// holds `exp(-2πi·k/n)` for `k = 0..n/2`; a sub-transform of length `m`
    /// reads it with stride `n/m`.
    cache: HashMap<usize, Arc<[Complex<T>]>>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Retrieve (building on first use) the twiddle table for length `n`.
    pub fn get_twiddles(&mut self, n: usize) -> Arc<[Complex<T>]> {
        if let Some(table) = self.cache.get(&n) {
            #[cfg(feature = "verbose-logging")]
            log::trace!("twiddle cache hit for n = {}", n);
            return Arc::clone(table);
        }
        #[cfg(feature = "verbose-logging")]
        log::debug!("building twiddle table for n = {}", n);
        let len = index_to_float::<T>(n);
        let table: Arc<[Complex<T>]> = (0..n / 2)
            .map(|k| Complex::expi(-T::tau() * index_to_float::<T>(k) / len))
            .collect();
        self.cache.insert(n, Arc::clone(&table));
        table
    }

    /// Build a reusable plan for sequences of length `n`.
    pub fn plan(&mut self, n: usize) -> Result<FftPlan<T>, FftError> {
        validate_len(n)?;
        Ok(FftPlan {
            len: n,
            twiddles: self.get_twiddles(n),
        })
    }

    pub fn fft(&mut self, samples: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        self.plan(samples.len())?.fft(samples)
    }

    pub fn ifft(&mut self, frequencies: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        self.plan(frequencies.len())?.ifft(frequencies)
    }

    pub fn ifft_with_scale(
        &mut self,
        frequencies: &[Complex<T>],
        scale: bool,
    ) -> Result<Vec<Complex<T>>, FftError> {
        self.plan(frequencies.len())?
            .ifft_with_scale(frequencies, scale)
    }

    /// Number of distinct lengths with a cached twiddle table.
    pub fn cached_lengths(&self) -> usize {
        self.cache.len()
    }
}

/// A transform bound to a single length and its twiddle table.
#[derive(Debug, Clone)]
pub struct FftPlan<T: Float> {
    len: usize,
    twiddles: Arc<[Complex<T>]>,
}

impl<T: Float> FftPlan<T> {
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: [`FftPlanner::plan`] rejects length zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn run(
        &self,
        input: &[Complex<T>],
        direction: Direction,
        scale: bool,
    ) -> Result<Vec<Complex<T>>, FftError> {
        if input.len() != self.len {
            return Err(FftError::MismatchedLengths {
                expected: self.len,
                actual: input.len(),
            });
        }
        let table = &self.twiddles;
        let n = self.len;
        let out = match direction {
            Direction::Forward => radix2(input, &|k: usize, m: usize| table[k * (n / m)], scale),
            Direction::Inverse => {
                radix2(input, &|k: usize, m: usize| table[k * (n / m)].conj(), scale)
            }
        };
        Ok(out)
    }
}

impl<T: Float> FftImpl<T> for FftPlan<T> {
    fn fft(&self, samples: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        self.run(samples, Direction::Forward, false)
    }

    fn ifft_with_scale(
        &self,
        frequencies: &[Complex<T>],
        scale: bool,
    ) -> Result<Vec<Complex<T>>, FftError> {
        self.run(frequencies, Direction::Inverse, scale)
    }
}


#[cfg(all(feature = "internal-tests", test))]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_planner_matches_recursive_random() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut planner = FftPlanner::<f64>::new();
        for log_n in 0..8 {
            let n = 1usize << log_n;
            let data: Vec<Complex64> = (0..n)
                .map(|_| Complex64::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)))
                .collect();
            let a = fft(&data).unwrap();
            let b = planner.fft(&data).unwrap();
            for (x, y) in a.iter().zip(b.iter()) {
                assert!((x.re - y.re).abs() < 1e-9 && (x.im - y.im).abs() < 1e-9);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_roundtrip(log_n in 0usize..8, ref values in proptest::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 128)) {
            let n = 1usize << log_n;
            let x: Vec<Complex64> = values.iter().take(n).map(|&(re, im)| Complex64::new(re, im)).collect();
            let y = ifft(&fft(&x).unwrap()).unwrap();
            for (a, b) in x.iter().zip(y.iter()) {
                prop_assert!((a.re - b.re).abs() < 1e-8);
                prop_assert!((a.im - b.im).abs() < 1e-8);
            }
        }

        #[test]
        fn prop_linearity(log_n in 0usize..7, ref a in proptest::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 64), ref b in proptest::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 64)) {
            let n = 1usize << log_n;
            let a: Vec<Complex64> = a.iter().take(n).map(|&p| Complex64::from(p)).collect();
            let b: Vec<Complex64> = b.iter().take(n).map(|&p| Complex64::from(p)).collect();
            let summed: Vec<Complex64> = a.iter().zip(b.iter()).map(|(x, y)| *x + *y).collect();
            let lhs = fft(&summed).unwrap();
            let fa = fft(&a).unwrap();
            let fb = fft(&b).unwrap();
            for i in 0..n {
                let rhs = fa[i] + fb[i];
                prop_assert!((lhs[i].re - rhs.re).abs() < 1e-8);
                prop_assert!((lhs[i].im - rhs.im).abs() < 1e-8);
            }
        }
    }
}
