//! Equilibrium Classification for the Cusp Family
//!
//! Classifies the real roots of `p(t) = h + a·t − b·t³` by the sign of
//! `p'(t) = a − 3b·t²` at each root: non-positive derivative → stable,
//! positive → unstable.
//!
//! ## Realness tolerance
//!
//! Roots are produced in complex form. A root counts as real when
//! `|Im| < IMAG_TOLERANCE` (1e-9). An exact-zero test would be fragile
//! at bifurcation points, where a conjugate pair collides on the real
//! axis and floating-point rounding can leave a residual imaginary
//! part of order machine epsilon.
//!
//! ## Multiplicity
//!
//! Roots are reported with multiplicity, once per entry returned by the
//! solver. A triple root contributes three identical entries.

use num_complex::Complex64;

use crate::error::{check_finite, CuspResult};
use super::cubic::polynomial_roots;

/// A root with `|Im|` below this threshold is treated as real.
pub const IMAG_TOLERANCE: f64 = 1e-9;

/// Real roots of one cusp polynomial, partitioned by stability.
///
/// Invariant: `stable` and `unstable` are disjoint as classifications —
/// every real root lands in exactly one of the two vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedRoots {
    /// Roots where `p'(root) ≤ 0` (attracting equilibria).
    pub stable: Vec<f64>,
    /// Roots where `p'(root) > 0` (repelling equilibria).
    pub unstable: Vec<f64>,
}

impl ClassifiedRoots {
    /// Total number of real roots, with multiplicity.
    pub fn real_root_count(&self) -> usize {
        self.stable.len() + self.unstable.len()
    }

    /// More than one attracting equilibrium (the bistable regime of
    /// the cusp, inside the fold curve).
    pub fn is_bistable(&self) -> bool {
        self.stable.len() >= 2
    }
}

/// Classify the real roots of `h + a·t − b·t³` by stability.
///
/// All three parameters must be finite; NaN or infinite input fails
/// with [`CuspError::InvalidParameter`](crate::CuspError::InvalidParameter)
/// rather than propagating NaN roots.
///
/// The marginal case `p'(root) = 0` (a fold point) classifies stable.
/// This tie-break is part of the contract, not an artifact.
pub fn classify(h: f64, a: f64, b: f64) -> CuspResult<ClassifiedRoots> {
    check_finite("h", h)?;
    check_finite("a", a)?;
    check_finite("b", b)?;

    // Ascending coefficients of h + a·t + 0·t² − b·t³
    let roots = polynomial_roots(&[h, a, 0.0, -b]);

    let mut classified = ClassifiedRoots::default();
    for root in roots {
        if root.im.abs() >= IMAG_TOLERANCE {
            continue;
        }

        // p'(t) = a − 3b·t², evaluated at the full complex root before
        // projecting to the real axis.
        let derivative = Complex64::new(a, 0.0) - 3.0 * b * root * root;
        if derivative.re <= 0.0 {
            classified.stable.push(root.re);
        } else {
            classified.unstable.push(root.re);
        }
    }

    Ok(classified)
}
