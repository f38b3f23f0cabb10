//! Parameter Sweep Driver
//!
//! One classifier invocation per grid point; results are flattened as
//! they arrive. Samples with no real roots of a given class contribute
//! nothing to that series, so the two output series are generally of
//! different lengths and neither is index-aligned with the sample grid.

use ndarray::Array1;
use std::fmt;

use crate::error::{check_finite, check_interval, CuspResult};
use crate::roots::classify;

/// Which free parameter of `h + a·t − b·t³` the sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepAxis {
    /// Vary `a`; the fixed value is taken as `h`.
    LinearCoeff,
    /// Vary `h`; the fixed value is taken as `a`.
    ConstantTerm,
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepAxis::LinearCoeff => write!(f, "a"),
            SweepAxis::ConstantTerm => write!(f, "h"),
        }
    }
}

/// Sample grid for a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Closed interval swept, inclusive of both endpoints.
    pub range: (f64, f64),
    /// Number of evenly spaced samples. One sample sits at the lower
    /// endpoint; zero samples produce empty series.
    pub samples: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            range: (-10.0, 10.0),
            samples: 200,
        }
    }
}

/// Flattened sweep output: `(parameter, root)` scatter points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepSeries {
    /// Points on stable branches.
    pub stable: Vec<(f64, f64)>,
    /// Points on unstable branches.
    pub unstable: Vec<(f64, f64)>,
}

impl SweepSeries {
    /// Total number of scatter points across both classes.
    pub fn len(&self) -> usize {
        self.stable.len() + self.unstable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stable.is_empty() && self.unstable.is_empty()
    }
}

/// Sweep one parameter of the cusp family and aggregate classified roots.
///
/// `axis` selects the swept parameter; `fixed_value` is assigned to the
/// other free parameter (`h` when sweeping `a`, `a` when sweeping `h`).
/// `fixed_b` is the cubic coefficient throughout.
///
/// Inputs are validated up front, so per-sample classification cannot
/// fail for a valid call. Should a sample fail regardless, it is
/// skipped and reported through `log::warn!` rather than truncating the
/// sweep silently.
///
/// Deterministic: identical inputs reproduce identical series.
pub fn sweep(
    fixed_b: f64,
    axis: SweepAxis,
    fixed_value: f64,
    config: &SweepConfig,
) -> CuspResult<SweepSeries> {
    check_finite("fixed_b", fixed_b)?;
    check_finite("fixed_value", fixed_value)?;
    let (lo, hi) = config.range;
    check_interval(lo, hi)?;

    let grid = Array1::linspace(lo, hi, config.samples);

    let mut series = SweepSeries::default();
    for &sample in grid.iter() {
        let (h, a) = match axis {
            SweepAxis::LinearCoeff => (fixed_value, sample),
            SweepAxis::ConstantTerm => (sample, fixed_value),
        };

        match classify(h, a, fixed_b) {
            Ok(roots) => {
                series.stable.extend(roots.stable.iter().map(|&r| (sample, r)));
                series
                    .unstable
                    .extend(roots.unstable.iter().map(|&r| (sample, r)));
            }
            Err(err) => {
                log::warn!("skipping sweep sample {} = {}: {}", axis, sample, err);
            }
        }
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_reference_ui() {
        let config = SweepConfig::default();
        assert_eq!(config.range, (-10.0, 10.0));
        assert_eq!(config.samples, 200);
    }

    #[test]
    fn test_pitchfork_sweep_over_linear_coefficient() {
        // h = 0: for a ≤ 0 one stable root, for a > 0 two stable + one
        // unstable (supercritical pitchfork).
        let config = SweepConfig {
            range: (-2.0, 2.0),
            samples: 41,
        };
        let series = sweep(1.0, SweepAxis::LinearCoeff, 0.0, &config).unwrap();

        for &(a, root) in &series.unstable {
            assert!(a > 0.0, "unstable branch only exists for a > 0, got a = {}", a);
            assert!(root.abs() < 1e-9, "unstable branch is the origin");
        }

        let stable_left = series.stable.iter().filter(|(a, _)| *a < 0.0).count();
        let negative_samples = 20;
        assert_eq!(
            stable_left, negative_samples,
            "one stable root per sample below the bifurcation"
        );

        // Outer branches follow ±√a
        for &(a, root) in series.stable.iter().filter(|(a, _)| *a > 0.1) {
            assert!(
                (root.abs() - a.sqrt()).abs() < 1e-6 || root.abs() < 1e-9,
                "stable root {} off the ±√a branch at a = {}",
                root,
                a
            );
        }
    }

    #[test]
    fn test_series_lengths_not_tied_to_sample_count() {
        let config = SweepConfig {
            range: (-10.0, 10.0),
            samples: 200,
        };
        let series = sweep(1.0, SweepAxis::LinearCoeff, 0.1, &config).unwrap();

        assert_ne!(series.stable.len(), config.samples);
        assert!(series.len() >= config.samples, "every sample has ≥1 real root");
    }

    #[test]
    fn test_sweep_is_deterministic() {
        let config = SweepConfig::default();
        let first = sweep(1.0, SweepAxis::LinearCoeff, 0.1, &config).unwrap();
        let second = sweep(1.0, SweepAxis::LinearCoeff, 0.1, &config).unwrap();
        assert_eq!(first, second, "repeated sweeps must match bit-for-bit");
    }

    #[test]
    fn test_single_sample_sweep() {
        let config = SweepConfig {
            range: (-10.0, 10.0),
            samples: 1,
        };
        let series = sweep(1.0, SweepAxis::ConstantTerm, 1.0, &config).unwrap();

        // One classification, split across the two series
        let reference = crate::roots::classify(-10.0, 1.0, 1.0).unwrap();
        assert_eq!(series.len(), reference.real_root_count());
        assert!(series.stable.iter().all(|(h, _)| *h == -10.0));
    }

    #[test]
    fn test_zero_sample_sweep_is_empty() {
        let config = SweepConfig {
            range: (-10.0, 10.0),
            samples: 0,
        };
        let series = sweep(1.0, SweepAxis::ConstantTerm, 1.0, &config).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_constant_term_sweep_brackets_fold() {
        // a = 1, b = 1: folds at h = ±√(4/27) ≈ ±0.385. Inside the
        // window every sample carries three roots, outside one.
        let config = SweepConfig {
            range: (-1.0, 1.0),
            samples: 201,
        };
        let series = sweep(1.0, SweepAxis::ConstantTerm, 1.0, &config).unwrap();

        let fold = (4.0f64 / 27.0).sqrt();
        for &(h, _) in &series.unstable {
            assert!(
                h.abs() <= fold + 1e-6,
                "unstable roots only inside the fold window, got h = {}",
                h
            );
        }
        assert!(!series.unstable.is_empty());
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let config = SweepConfig::default();
        assert!(sweep(f64::NAN, SweepAxis::LinearCoeff, 0.0, &config).is_err());
        assert!(sweep(1.0, SweepAxis::LinearCoeff, f64::INFINITY, &config).is_err());

        let reversed = SweepConfig {
            range: (10.0, -10.0),
            samples: 5,
        };
        assert!(sweep(1.0, SweepAxis::LinearCoeff, 0.0, &reversed).is_err());
    }
}
