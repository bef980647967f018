//! Epicycle synthesis: evaluate a Fourier series at arbitrary phase.
//!
//! Given the coefficients produced by [`fft`](crate::fft::fft), the inverse
//! DFT sum can be evaluated directly at any real phase `t`, not only at the
//! integer grid the samples came from. Each term of the sum is a vector
//! rotating at a rate proportional to its bin index; drawn head to tail they
//! form the chain of epicycles whose tip traces the curve.

use alloc::vec;
use alloc::vec::Vec;

use crate::num::{index_to_float, Complex, Float};

/// Term `i` of the inverse DFT at phase `t`, before the `1/n` factor.
#[inline]
fn term<T: Float>(coefficient: Complex<T>, i: usize, t: T, n: T) -> Complex<T> {
    Complex::cross(
        coefficient,
        Complex::expi(T::tau() * index_to_float::<T>(i) * t / n),
    )
}

/// Evaluate the inverse DFT of `frequencies` at phase `t`:
/// `(1/n) Σ frequencies[i] · exp(2πi·i·t/n)`.
///
/// For integer `t` in `[0, n)` this reproduces sample `t` of the inverse
/// transform. An empty slice yields NaN components.
pub fn sample<T: Float>(frequencies: &[Complex<T>], t: T) -> Complex<T> {
    let n = index_to_float::<T>(frequencies.len());
    let mut acc = Complex::zero();
    for (i, &c) in frequencies.iter().enumerate() {
        acc += term(c, i, t, n);
    }
    acc.div_scalar(n)
}

/// The reconstructed point at one phase together with the rotating vectors
/// that sum to it.
#[derive(Clone, Debug, PartialEq)]
pub struct EpicycleFrame<T: Float> {
    /// Sum of `components`.
    pub sample: Complex<T>,
    /// Per-bin contributions in frequency-index order, already divided by `n`.
    pub components: Vec<Complex<T>>,
}

impl<T: Float> EpicycleFrame<T> {
    /// Circle radii of the epicycle chain, in the order of `components`.
    pub fn radii(&self) -> Vec<T> {
        self.components.iter().map(|c| c.magnitude()).collect()
    }

    /// Components sorted by descending magnitude (stable for ties), so the
    /// largest circles are drawn first. Their sum is still `sample`.
    pub fn by_magnitude(&self) -> Vec<Complex<T>> {
        let mut sorted = self.components.clone();
        sorted.sort_by(|a, b| {
            b.magnitude()
                .partial_cmp(&a.magnitude())
                .unwrap_or(core::cmp::Ordering::Equal)
        });
        sorted
    }

    /// Running sums of [`Self::by_magnitude`]: the centre of each successive
    /// circle, ending at the traced point.
    pub fn chain(&self) -> Vec<Complex<T>> {
        let mut tip = Complex::zero();
        self.by_magnitude()
            .into_iter()
            .map(|c| {
                tip += c;
                tip
            })
            .collect()
    }
}

/// Same sum as [`sample`], also returning each term divided by `n`.
pub fn sample2<T: Float>(frequencies: &[Complex<T>], t: T) -> EpicycleFrame<T> {
    let n = index_to_float::<T>(frequencies.len());
    let mut acc = Complex::zero();
    let mut components = Vec::with_capacity(frequencies.len());
    for (i, &c) in frequencies.iter().enumerate() {
        let v = term(c, i, t, n);
        acc += v;
        components.push(v.div_scalar(n));
    }
    EpicycleFrame {
        sample: acc.div_scalar(n),
        components,
    }
}

/// Sample one full period of the curve at `steps` evenly spaced phases
/// `t = k·n/steps`.
pub fn trace<T: Float>(frequencies: &[Complex<T>], steps: usize) -> Vec<Complex<T>> {
    let n = index_to_float::<T>(frequencies.len());
    let steps_f = index_to_float::<T>(steps);
    (0..steps)
        .map(|k| sample(frequencies, index_to_float::<T>(k) * n / steps_f))
        .collect()
}

/// Signed frequency of bin `i` in a length-`n` spectrum.
fn signed_bin(i: usize, n: usize) -> isize {
    if i <= n / 2 {
        i as isize
    } else {
        i as isize - n as isize
    }
}

/// Keep the `keep` bins of lowest absolute signed frequency and zero the rest.
///
/// Bin `i` has signed frequency `i` for `i ≤ n/2` and `i - n` above that;
/// between `+k` and `-k` the positive bin is kept first.
pub fn truncate<T: Float>(frequencies: &[Complex<T>], keep: usize) -> Vec<Complex<T>> {
    let n = frequencies.len();
    if keep >= n {
        return frequencies.to_vec();
    }
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| {
        let f = signed_bin(i, n);
        (f.unsigned_abs(), f < 0)
    });
    let mut out = vec![Complex::zero(); n];
    for &i in order.iter().take(keep) {
        out[i] = frequencies[i];
    }
    out
}
