use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use epicycles::path::{samples_from_path, Polyline};
use epicycles::{fft, sample, sample2, trace, truncate, Complex64};

fn star_spectrum(n: usize) -> Vec<Complex64> {
    let star = Polyline::star(Complex64::zero(), 1.0, 0.4, 7).unwrap();
    fft(&samples_from_path(&star, n)).unwrap()
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("synth_sample");
    for &n in &[64usize, 256, 1024] {
        let spectrum = star_spectrum(n);
        group.bench_with_input(BenchmarkId::new("sample", n), &spectrum, |b, f| {
            b.iter(|| sample(f, 12.34));
        });
        group.bench_with_input(BenchmarkId::new("sample2", n), &spectrum, |b, f| {
            b.iter(|| sample2(f, 12.34));
        });
    }
    group.finish();
}

fn bench_trace(c: &mut Criterion) {
    let spectrum = star_spectrum(256);
    let kept = truncate(&spectrum, 31);
    c.bench_function("trace_256_bins_512_steps", |b| {
        b.iter(|| trace(&kept, 512));
    });
}

criterion_group!(benches, bench_sample, bench_trace);
criterion_main!(benches);
