//! Uniform Grid Construction and Field Sampling

use ndarray::{Array1, Array2};

use crate::error::{check_finite, check_interval, CuspError, CuspResult};

/// Default viewing window used by the reference viewers.
pub const DEFAULT_EXTENT: (f64, f64) = (-5.0, 5.0);
/// Default grid resolution (points per axis).
pub const DEFAULT_RESOLUTION: usize = 100;

/// Square meshgrid over `[lo, hi]²`.
///
/// Coordinates follow the usual meshgrid convention: `x` varies along
/// columns, `y` along rows, so `(x[[i, j]], y[[i, j]])` is the sample
/// point at row `i`, column `j`.
#[derive(Debug, Clone)]
pub struct FieldGrid {
    x: Array2<f64>,
    y: Array2<f64>,
}

impl FieldGrid {
    /// Build a `resolution × resolution` grid spanning `extent` on both
    /// axes. Requires a finite, non-reversed extent and at least two
    /// points per axis.
    pub fn new(extent: (f64, f64), resolution: usize) -> CuspResult<Self> {
        let (lo, hi) = extent;
        check_interval(lo, hi)?;
        if resolution < 2 {
            return Err(CuspError::InvalidParameter {
                name: "resolution",
                value: resolution as f64,
            });
        }

        let axis = Array1::linspace(lo, hi, resolution);
        let mut x = Array2::zeros((resolution, resolution));
        let mut y = Array2::zeros((resolution, resolution));
        for i in 0..resolution {
            for j in 0..resolution {
                x[[i, j]] = axis[j];
                y[[i, j]] = axis[i];
            }
        }

        Ok(Self { x, y })
    }

    /// Grid matching the reference viewers: `[-5, 5]²` at 100 points.
    pub fn standard() -> Self {
        // Constants are known-valid; new() cannot fail here.
        Self::new(DEFAULT_EXTENT, DEFAULT_RESOLUTION)
            .unwrap_or_else(|_| unreachable!("default grid parameters are valid"))
    }

    /// Points per axis.
    pub fn resolution(&self) -> usize {
        self.x.nrows()
    }

    /// Sample `field(x, y) -> (vx, vy)` at every grid point.
    pub fn evaluate<F>(&self, field: F) -> VelocityField
    where
        F: Fn(f64, f64) -> (f64, f64),
    {
        let n = self.resolution();
        let mut vx = Array2::zeros((n, n));
        let mut vy = Array2::zeros((n, n));

        for i in 0..n {
            for j in 0..n {
                let (fx, fy) = field(self.x[[i, j]], self.y[[i, j]]);
                vx[[i, j]] = fx;
                vy[[i, j]] = fy;
            }
        }

        VelocityField {
            x: self.x.clone(),
            y: self.y.clone(),
            vx,
            vy,
        }
    }
}

/// A vector field sampled on a [`FieldGrid`].
#[derive(Debug, Clone)]
pub struct VelocityField {
    /// X coordinates of the sample points.
    pub x: Array2<f64>,
    /// Y coordinates of the sample points.
    pub y: Array2<f64>,
    /// X component of the field.
    pub vx: Array2<f64>,
    /// Y component of the field.
    pub vy: Array2<f64>,
}

impl VelocityField {
    /// Speed magnitude `√(vx² + vy²)` per sample point.
    pub fn speed(&self) -> Array2<f64> {
        let mut speed = Array2::zeros(self.vx.raw_dim());
        for ((i, j), s) in speed.indexed_iter_mut() {
            let fx = self.vx[[i, j]];
            let fy = self.vy[[i, j]];
            *s = (fx * fx + fy * fy).sqrt();
        }
        speed
    }

    /// Streamline widths in `[min_width, max_width]`.
    ///
    /// Speeds are compressed with `ln(1 + s)` before normalization so a
    /// handful of fast cells cannot flatten the rest of the plot to the
    /// minimum width. A uniformly zero field maps everywhere to
    /// `min_width`.
    pub fn line_widths(&self, min_width: f64, max_width: f64) -> Array2<f64> {
        let scaled = self.speed().mapv(f64::ln_1p);
        let peak = scaled.iter().cloned().fold(0.0, f64::max);

        if peak <= 0.0 {
            return Array2::from_elem(scaled.raw_dim(), min_width);
        }
        scaled.mapv(|s| min_width + (s / peak) * (max_width - min_width))
    }
}
