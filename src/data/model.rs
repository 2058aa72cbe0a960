use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// SamplePoint – one row of the data file
// ---------------------------------------------------------------------------

/// A single `x y z` row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SamplePoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for SamplePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Bounds – per-axis value range
// ---------------------------------------------------------------------------

/// Per-axis min/max over the finite coordinates of a cloud.
///
/// An axis without any finite value falls back to `[-1, 1]`. An axis whose
/// width is below one rounding step of its magnitude is widened by
/// ±max(0.5, magnitude·1e-6), so the widening survives at any scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Bounds {
    pub fn from_points(points: &[SamplePoint]) -> Self {
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];

        for p in points {
            for (axis, v) in p.to_array().into_iter().enumerate() {
                if v.is_finite() {
                    min[axis] = min[axis].min(v);
                    max[axis] = max[axis].max(v);
                }
            }
        }

        for axis in 0..3 {
            if !min[axis].is_finite() || !max[axis].is_finite() {
                min[axis] = -1.0;
                max[axis] = 1.0;
            }
            let magnitude = min[axis].abs().max(max[axis].abs());
            if max[axis] - min[axis] <= magnitude * f64::EPSILON {
                let pad = (magnitude * 1e-6).max(0.5);
                min[axis] -= pad;
                max[axis] += pad;
            }
        }

        Bounds { min, max }
    }

    /// Map a data point into the cube `[-1, 1]³`.
    /// An axis without positive width maps to its centre.
    pub fn normalize(&self, p: SamplePoint) -> [f32; 3] {
        let v = p.to_array();
        std::array::from_fn(|axis| {
            let width = self.max[axis] - self.min[axis];
            if width.is_nan() || width <= 0.0 {
                return 0.0;
            }
            ((v[axis] - self.min[axis]) / width * 2.0 - 1.0) as f32
        })
    }

    /// Data value at normalized position `t ∈ [0, 1]` along `axis`.
    pub fn lerp(&self, axis: usize, t: f64) -> f64 {
        self.min[axis] + t * (self.max[axis] - self.min[axis])
    }
}

// ---------------------------------------------------------------------------
// PointCloud – the complete loaded table
// ---------------------------------------------------------------------------

/// All rows of a data file in file order.
#[derive(Debug, Clone)]
pub struct PointCloud {
    pub points: Vec<SamplePoint>,
    pub bounds: Bounds,
    /// File the points were read from, if any.
    pub source: Option<PathBuf>,
}

impl PointCloud {
    pub fn from_points(points: Vec<SamplePoint>) -> Self {
        let bounds = Bounds::from_points(&points);
        PointCloud {
            points,
            bounds,
            source: None,
        }
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Range of the finite z values, unwidened. `None` if there are none.
    pub fn z_range(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .map(|p| p.z)
            .filter(|z| z.is_finite())
            .fold(None, |acc, z| match acc {
                None => Some((z, z)),
                Some((lo, hi)) => Some((lo.min(z), hi.max(z))),
            })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cloud is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
