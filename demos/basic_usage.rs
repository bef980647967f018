//! Basic usage example for epicycles
//!
//! Samples a closed shape by arc length, transforms it, and redraws it from
//! the spectrum as a chain of epicycles.

use epicycles::fft::FftImpl;
use epicycles::path::{samples_from_path, Ellipse, Path, Polyline};
use epicycles::{fft, ifft, sample2, trace, truncate, Complex64, FftPlanner};

fn main() {
    println!("=== epicycles Basic Usage Example ===\n");

    // 1. Sample a path
    println!("1. Path sampling");
    let square = Polyline::square(Complex64::zero(), 1.0).unwrap();
    let points = samples_from_path(&square, 16);
    println!("   Square perimeter: {:.2}", square.total_length());
    println!(
        "   First samples: {:?}",
        points
            .iter()
            .take(4)
            .map(|p| format!("({:.2}, {:.2})", p.re, p.im))
            .collect::<Vec<_>>()
    );
    println!();

    // 2. FFT and IFFT
    println!("2. Fast Fourier Transform (FFT)");
    let spectrum = fft(&points).unwrap();
    println!(
        "   Largest bins: {:?}",
        spectrum
            .iter()
            .take(4)
            .map(|c| format!("{:.2}", c.magnitude()))
            .collect::<Vec<_>>()
    );
    let back = ifft(&spectrum).unwrap();
    let err = back
        .iter()
        .zip(points.iter())
        .map(|(a, b)| (*a - *b).magnitude())
        .fold(0.0, f64::max);
    println!("   Round-trip error: {:.2e}", err);
    println!();

    // 3. Epicycles at a fractional phase
    println!("3. Epicycle chain");
    let frame = sample2(&spectrum, 2.5);
    for centre in frame.chain().iter().take(4) {
        println!("   centre ({:.3}, {:.3})", centre.re, centre.im);
    }
    println!("   tip ({:.3}, {:.3})", frame.sample.re, frame.sample.im);
    println!();

    // 4. Truncated series
    println!("4. Truncated Fourier series");
    let ellipse = Ellipse::new(Complex64::zero(), 3.0, 1.0).unwrap();
    let spectrum = fft(&samples_from_path(&ellipse, 64)).unwrap();
    for keep in [1, 3, 9] {
        let curve = trace(&truncate(&spectrum, keep), 8);
        println!(
            "   keep {:>2}: {:?}",
            keep,
            curve
                .iter()
                .map(|p| format!("({:.2}, {:.2})", p.re, p.im))
                .collect::<Vec<_>>()
        );
    }
    println!();

    // 5. Reusing a plan
    println!("5. Planned FFT");
    let mut planner = FftPlanner::<f64>::new();
    let plan = planner.plan(64).unwrap();
    let start = std::time::Instant::now();
    let planned = plan.fft(&samples_from_path(&ellipse, 64)).unwrap();
    println!("   64-point planned FFT completed in {:?}", start.elapsed());
    println!("   DC term: ({:.3}, {:.3})", planned[0].re, planned[0].im);
    println!();

    println!("=== Example completed successfully! ===");
}
