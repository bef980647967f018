//! # epicycles - Fourier transforms and epicycle synthesis for 2-D curves
//!
//! Points in the plane are treated as complex numbers (`x → re`, `y → im`).
//! A closed curve sampled at `n` evenly spaced points becomes `n` frequency
//! coefficients through a recursive radix-2 FFT, and those coefficients can be
//! evaluated back at *any* phase to redraw the curve as a chain of rotating
//! vectors ("epicycles").
//!
//! ## Features
//!
//! - **Recursive radix-2 FFT / IFFT** with validated power-of-two lengths
//! - **Twiddle planner** caching per-length tables
//! - **Continuous resynthesis** (`sample`, `sample2`, `trace`, `truncate`)
//! - **Arc-length path sampling** through the [`path::Path`] trait
//!
//! ## Cargo Features
//!
//! - `std` (default): implement `std::error::Error` for the error types
//! - `verbose-logging`: emit `log` records from the transforms and planner
//! - `internal-tests`: enable in-crate property tests (`proptest`, `rand`)
//!
//! ## Example
//!
//! ```
//! use epicycles::path::{samples_from_path, Polyline};
//! use epicycles::{fft, sample2, Complex64};
//!
//! let square = Polyline::square(Complex64::zero(), 1.0).unwrap();
//! let points = samples_from_path(&square, 16);
//! let spectrum = fft(&points).unwrap();
//! let frame = sample2(&spectrum, 3.5);
//! assert_eq!(frame.components.len(), 16);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Recursive radix-2 FFT and IFFT
///
/// Free functions, the [`fft::FftImpl`] trait and a caching [`FftPlanner`].
pub mod fft;
/// Float trait and the [`Complex`] point type
pub mod num;
/// Arc-length sampling of planar paths
pub mod path;
/// Evaluation of a spectrum at arbitrary phase
pub mod synth;

pub use fft::{fft, ifft, ifft_with_scale, FftError, FftPlanner};
pub use num::{Complex, Complex32, Complex64, Float};
pub use path::{samples_from_path, Path, PathError};
pub use synth::{sample, sample2, trace, truncate, EpicycleFrame};
