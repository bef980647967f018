//! Planar paths that can be resampled by arc length.
//!
//! The transforms only need an ordered list of points. Anything implementing
//! [`Path`] can provide one through [`samples_from_path`]; [`Polyline`] and
//! [`Ellipse`] cover the common shapes without a rendering front end.

use alloc::vec::Vec;
use core::fmt;

use crate::num::{index_to_float, Complex, Float};

/// Errors raised while constructing a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// A polyline needs at least one vertex.
    Empty,
    /// A vertex has a NaN or infinite coordinate.
    NonFinite,
    /// Ellipse radii must be finite and positive.
    InvalidRadius,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Empty => write!(f, "path has no vertices"),
            PathError::NonFinite => write!(f, "path vertex is not finite"),
            PathError::InvalidRadius => write!(f, "radius must be finite and positive"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PathError {}

/// A curve in the plane parameterised by distance travelled along it.
pub trait Path<T: Float> {
    /// Total arc length.
    fn total_length(&self) -> T;
    /// Point reached after travelling `distance` from the start.
    fn point_at_length(&self, distance: T) -> Complex<T>;
}

/// Return `num_samples` points at arc lengths `i / num_samples * length`.
///
/// The end point of a closed path is not repeated, so the samples describe
/// exactly one period of the curve.
pub fn samples_from_path<T: Float, P: Path<T> + ?Sized>(
    path: &P,
    num_samples: usize,
) -> Vec<Complex<T>> {
    let length = path.total_length();
    let count = index_to_float::<T>(num_samples);
    (0..num_samples)
        .map(|i| path.point_at_length(index_to_float::<T>(i) / count * length))
        .collect()
}

/// Straight segments through a list of vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline<T: Float> {
    vertices: Vec<Complex<T>>,
    closed: bool,
    /// Cumulative length at the end of each segment.
    ends: Vec<T>,
}

impl<T: Float> Polyline<T> {
    /// Build a polyline; when `closed` a segment from the last vertex back to
    /// the first is included.
    pub fn new(vertices: Vec<Complex<T>>, closed: bool) -> Result<Self, PathError> {
        if vertices.is_empty() {
            return Err(PathError::Empty);
        }
        if vertices.iter().any(|v| !v.is_finite()) {
            return Err(PathError::NonFinite);
        }
        let segments = if closed {
            vertices.len()
        } else {
            vertices.len() - 1
        };
        let mut ends = Vec::with_capacity(segments);
        let mut total = T::zero();
        for s in 0..segments {
            let (a, b) = Self::segment(&vertices, s);
            total = total + (b - a).magnitude();
            ends.push(total);
        }
        Ok(Self {
            vertices,
            closed,
            ends,
        })
    }

    /// Axis-aligned square centred on `centre`.
    pub fn square(centre: Complex<T>, half_side: T) -> Result<Self, PathError> {
        let h = half_side;
        let corners = [(-h, -h), (h, -h), (h, h), (-h, h)];
        Self::new(
            corners
                .iter()
                .map(|&(x, y)| centre + Complex::new(x, y))
                .collect(),
            true,
        )
    }

    /// Closed star with `points` tips alternating between two radii.
    pub fn star(
        centre: Complex<T>,
        outer: T,
        inner: T,
        points: usize,
    ) -> Result<Self, PathError> {
        let corners = 2 * points;
        let step = T::tau() / index_to_float::<T>(corners);
        let vertices = (0..corners)
            .map(|i| {
                let r = if i % 2 == 0 { outer } else { inner };
                centre + Complex::expi(step * index_to_float::<T>(i)).mul_scalar(r)
            })
            .collect();
        Self::new(vertices, true)
    }

    pub fn vertices(&self) -> &[Complex<T>] {
        &self.vertices
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn segment(vertices: &[Complex<T>], s: usize) -> (Complex<T>, Complex<T>) {
        (vertices[s], vertices[(s + 1) % vertices.len()])
    }
}

impl<T: Float> Path<T> for Polyline<T> {
    fn total_length(&self) -> T {
        self.ends.last().copied().unwrap_or_else(T::zero)
    }

    fn point_at_length(&self, distance: T) -> Complex<T> {
        let mut start = T::zero();
        for (s, &end) in self.ends.iter().enumerate() {
            if distance <= end {
                let (a, b) = Self::segment(&self.vertices, s);
                let len = end - start;
                if len <= T::zero() {
                    return a;
                }
                let along = if distance > start {
                    distance - start
                } else {
                    T::zero()
                };
                return a + (b - a).mul_scalar(along / len);
            }
            start = end;
        }
        // Past the end (or a single vertex): clamp to the final point.
        match self.ends.len() {
            0 => self.vertices[0],
            s => Self::segment(&self.vertices, s - 1).1,
        }
    }
}

/// Intervals of the parametric angle used to tabulate ellipse arc length.
const ARC_TABLE_LEN: usize = 1024;

/// Axis-aligned ellipse traversed counter-clockwise from angle zero.
///
/// Arc length is tabulated over the parametric angle when the ellipse is
/// built, so [`Path::point_at_length`] spaces points by distance travelled
/// rather than by angle.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse<T: Float> {
    centre: Complex<T>,
    radii: Complex<T>,
    /// `arc[j]` is the length travelled at angle `j * step`.
    arc: Vec<T>,
    step: T,
}

impl<T: Float> Ellipse<T> {
    pub fn new(centre: Complex<T>, rx: T, ry: T) -> Result<Self, PathError> {
        let valid = |r: T| r.is_finite() && r > T::zero();
        if !valid(rx) || !valid(ry) {
            return Err(PathError::InvalidRadius);
        }
        if !centre.is_finite() {
            return Err(PathError::NonFinite);
        }
        let step = T::tau() / index_to_float::<T>(ARC_TABLE_LEN);
        let speed = |theta: T| {
            let (sin, cos) = theta.sin_cos();
            (rx * rx * sin * sin + ry * ry * cos * cos).sqrt()
        };
        // Simpson's rule on each interval.
        let two = T::from_f64(2.0);
        let four = T::from_f64(4.0);
        let sixth = step / T::from_f64(6.0);
        let mut arc = Vec::with_capacity(ARC_TABLE_LEN + 1);
        let mut total = T::zero();
        arc.push(total);
        for j in 0..ARC_TABLE_LEN {
            let t0 = step * index_to_float::<T>(j);
            let t1 = step * index_to_float::<T>(j + 1);
            total = total + sixth * (speed(t0) + four * speed((t0 + t1) / two) + speed(t1));
            arc.push(total);
        }
        Ok(Self {
            centre,
            radii: Complex::new(rx, ry),
            arc,
            step,
        })
    }

    pub fn circle(centre: Complex<T>, radius: T) -> Result<Self, PathError> {
        Self::new(centre, radius, radius)
    }

    /// Parametric angle reached after travelling `distance`, clamped to one
    /// revolution.
    fn angle_at_length(&self, distance: T) -> T {
        let total = self.total_length();
        let d = if distance < T::zero() {
            T::zero()
        } else if distance > total {
            total
        } else {
            distance
        };
        let j = self.arc.partition_point(|&l| l < d);
        let i = j.clamp(1, ARC_TABLE_LEN) - 1;
        let (lo, hi) = (self.arc[i], self.arc[i + 1]);
        self.step * (index_to_float::<T>(i) + (d - lo) / (hi - lo))
    }
}

impl<T: Float> Path<T> for Ellipse<T> {
    fn total_length(&self) -> T {
        self.arc[ARC_TABLE_LEN]
    }

    fn point_at_length(&self, distance: T) -> Complex<T> {
        let theta = self.angle_at_length(distance);
        self.centre + Complex::prod(Complex::expi(theta), self.radii)
    }
}
