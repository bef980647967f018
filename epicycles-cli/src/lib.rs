use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use epicycles::path::{samples_from_path, Ellipse, Path, Polyline};
use epicycles::{fft, sample2, trace, truncate, Complex64, EpicycleFrame};
use std::fmt::Write as _;

/// Decompose a closed curve into Fourier epicycles.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every frequency bin of the sampled shape
    Spectrum {
        #[command(flatten)]
        shape: ShapeArgs,
    },
    /// Print the curve rebuilt from a truncated spectrum
    Trace {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Number of lowest-frequency bins to keep (all when omitted)
        #[arg(long, env = "EPICYCLES_KEEP")]
        keep: Option<usize>,

        /// Points to emit over one period
        #[arg(long, env = "EPICYCLES_STEPS", default_value_t = 256)]
        steps: usize,
    },
    /// Print the epicycle chain at one phase
    Epicycles {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Phase in sample units, 0 <= t < samples covers one period
        #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
        t: f64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Square,
    Star,
    Polyline,
}

#[derive(Args, Debug)]
pub struct ShapeArgs {
    /// Built-in shape to sample
    #[arg(long, value_enum, default_value_t = Shape::Circle)]
    pub shape: Shape,

    /// Vertex `x,y` of a closed polyline (repeat for each vertex)
    #[arg(long = "point", value_parser = parse_point, allow_hyphen_values = true)]
    pub points: Vec<(f64, f64)>,

    /// Samples taken along the path; must be a power of two
    #[arg(long, env = "EPICYCLES_SAMPLES", default_value_t = 64)]
    pub samples: usize,
}

/// Parse an `x,y` pair.
pub fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{}`", s))?;
    let x = x
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad x in `{}`: {}", s, e))?;
    let y = y
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad y in `{}`: {}", s, e))?;
    Ok((x, y))
}

pub fn build_path(args: &ShapeArgs) -> Result<Box<dyn Path<f64>>> {
    let origin = Complex64::zero();
    let path: Box<dyn Path<f64>> = match args.shape {
        Shape::Circle => Box::new(Ellipse::circle(origin, 1.0)?),
        Shape::Square => Box::new(Polyline::square(origin, 1.0)?),
        Shape::Star => Box::new(Polyline::star(origin, 1.0, 0.5, 5)?),
        Shape::Polyline => {
            if args.points.is_empty() {
                bail!("--shape polyline needs at least one --point x,y");
            }
            let vertices = args.points.iter().map(|&p| Complex64::from(p)).collect();
            Box::new(Polyline::new(vertices, true)?)
        }
    };
    Ok(path)
}

fn spectrum_of(args: &ShapeArgs) -> Result<Vec<Complex64>> {
    let path = build_path(args)?;
    let points = samples_from_path(path.as_ref(), args.samples);
    log::info!(
        "sampled {} points from {:?} (length {:.4})",
        points.len(),
        args.shape,
        path.total_length()
    );
    fft(&points).with_context(|| format!("transforming {} samples", args.samples))
}

pub fn spectrum_report(spectrum: &[Complex64]) -> String {
    let mut out = String::new();
    for (i, c) in spectrum.iter().enumerate() {
        let _ = writeln!(
            out,
            "{} {:.6} {:.6} {:.6} {:.6}",
            i,
            c.re,
            c.im,
            c.magnitude(),
            c.phase()
        );
    }
    out
}

pub fn trace_report(points: &[Complex64]) -> String {
    let mut out = String::new();
    for p in points {
        let _ = writeln!(out, "{:.6} {:.6}", p.re, p.im);
    }
    out
}

pub fn epicycle_report(frame: &EpicycleFrame<f64>) -> String {
    let mut out = String::new();
    for c in frame.by_magnitude() {
        let _ = writeln!(out, "{:.6} {:.6} {:.6}", c.re, c.im, c.magnitude());
    }
    let _ = writeln!(out, "tip {:.6} {:.6}", frame.sample.re, frame.sample.im);
    out
}

/// Execute a parsed command and return the text to print.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Spectrum { shape } => Ok(spectrum_report(&spectrum_of(shape)?)),
        Commands::Trace { shape, keep, steps } => {
            let spectrum = spectrum_of(shape)?;
            let keep = keep.unwrap_or(spectrum.len());
            log::debug!("tracing {} steps from {} kept bins", steps, keep);
            Ok(trace_report(&trace(&truncate(&spectrum, keep), *steps)))
        }
        Commands::Epicycles { shape, t } => {
            let spectrum = spectrum_of(shape)?;
            Ok(epicycle_report(&sample2(&spectrum, *t)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point_accepts_negative_values() {
        assert_eq!(parse_point("-1.5, 2").unwrap(), (-1.5, 2.0));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn parse_trace_command() {
        let cli = Cli::parse_from([
            "epicycles", "trace", "--shape", "square", "--samples", "32", "--keep", "5",
        ]);
        match cli.command {
            Commands::Trace { shape, keep, steps } => {
                assert_eq!(shape.shape, Shape::Square);
                assert_eq!(shape.samples, 32);
                assert_eq!(keep, Some(5));
                assert_eq!(steps, 256);
            }
            _ => panic!("parsed wrong command"),
        }
    }

    #[test]
    fn spectrum_of_circle_has_single_bin() {
        let cli = Cli::parse_from(["epicycles", "spectrum", "--samples", "16"]);
        let report = run(&cli).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 16);
        // unit circle sampled counter-clockwise lives entirely in bin 1
        assert!(lines[1].starts_with("1 16.000000 "));
    }

    #[test]
    fn non_power_of_two_samples_fail() {
        let cli = Cli::parse_from(["epicycles", "spectrum", "--samples", "12"]);
        let err = run(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("not a non-zero power of two"));
    }

    #[test]
    fn polyline_requires_points() {
        let cli = Cli::parse_from(["epicycles", "spectrum", "--shape", "polyline"]);
        assert!(run(&cli).is_err());
    }
}
