//! Demonstrates enabling verbose logging for epicycles.
use epicycles::path::{samples_from_path, Polyline};
use epicycles::{fft, ifft, Complex64, FftPlanner};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let star = Polyline::star(Complex64::zero(), 1.0, 0.5, 5).unwrap();
    let points = samples_from_path(&star, 32);
    let spectrum = fft(&points).unwrap();
    ifft(&spectrum).unwrap();

    let mut planner = FftPlanner::<f64>::new();
    planner.fft(&points).unwrap();
    // second call is served from the twiddle cache
    planner.fft(&points).unwrap();
}
