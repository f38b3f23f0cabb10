//! Closed-Form Root Finding for Polynomials of Degree ≤ 3
//!
//! Coefficients are given in ascending degree order `[c₀, c₁, c₂, c₃]`
//! for `p(t) = c₀ + c₁t + c₂t² + c₃t³`. The solver inspects the leading
//! coefficients and degrades gracefully: a zero cubic coefficient drops
//! to the quadratic formula, a zero quadratic coefficient to a linear
//! solve. Callers must therefore not assume exactly three roots.
//!
//! The cubic case is solved on the depressed form `s³ + ps + q` obtained
//! by the Tschirnhaus shift `t = s − c₂/(3c₃)`:
//!
//! - discriminant `Δ = −4p³ − 27q²`
//! - `Δ > 0`: three distinct real roots, recovered with the
//!   trigonometric method (numerically stable, no complex detour)
//! - `Δ ≤ 0`: one real root via Cardano's formula (cancellation-safe
//!   branch choice), then quadratic deflation for the remaining pair
//!
//! Real roots are constructed with an exactly-zero imaginary part; only
//! the conjugate pair of the `Δ < 0` branch carries a nonzero one.

use num_complex::Complex64;

/// Evaluate `p(z)` by Horner's rule at a complex point.
pub fn evaluate(coeffs: &[f64; 4], z: Complex64) -> Complex64 {
    let mut acc = Complex64::new(0.0, 0.0);
    for &c in coeffs.iter().rev() {
        acc = acc * z + c;
    }
    acc
}

/// All complex roots of `c₀ + c₁t + c₂t² + c₃t³`, with multiplicity.
///
/// Returns 3, 2, 1, or 0 roots depending on the actual degree. The
/// identically-zero and nonzero-constant polynomials both yield an
/// empty vector.
pub fn polynomial_roots(coeffs: &[f64; 4]) -> Vec<Complex64> {
    let [c0, c1, c2, c3] = *coeffs;

    if c3 != 0.0 {
        cubic_roots(c0, c1, c2, c3)
    } else if c2 != 0.0 {
        quadratic_roots(c0, c1, c2)
    } else if c1 != 0.0 {
        vec![Complex64::new(-c0 / c1, 0.0)]
    } else {
        Vec::new()
    }
}

fn quadratic_roots(c0: f64, c1: f64, c2: f64) -> Vec<Complex64> {
    let disc = c1 * c1 - 4.0 * c2 * c0;
    let denom = 2.0 * c2;

    if disc >= 0.0 {
        let sq = disc.sqrt();
        vec![
            Complex64::new((-c1 + sq) / denom, 0.0),
            Complex64::new((-c1 - sq) / denom, 0.0),
        ]
    } else {
        let sq = (-disc).sqrt();
        vec![
            Complex64::new(-c1 / denom, sq / denom),
            Complex64::new(-c1 / denom, -sq / denom),
        ]
    }
}

fn cubic_roots(c0: f64, c1: f64, c2: f64, c3: f64) -> Vec<Complex64> {
    // Monic form t³ + b₂t² + b₁t + b₀
    let b2 = c2 / c3;
    let b1 = c1 / c3;
    let b0 = c0 / c3;

    // Depressed form s³ + ps + q with t = s − b₂/3
    let shift = b2 / 3.0;
    let p = b1 - b2 * b2 / 3.0;
    let q = 2.0 * b2 * b2 * b2 / 27.0 - b2 * b1 / 3.0 + b0;

    let s_roots = depressed_cubic_roots(p, q);
    s_roots
        .into_iter()
        .map(|s| s - shift)
        .collect()
}

fn depressed_cubic_roots(p: f64, q: f64) -> Vec<Complex64> {
    if p == 0.0 && q == 0.0 {
        // Triple root at the origin
        return vec![Complex64::new(0.0, 0.0); 3];
    }

    let disc = -4.0 * p * p * p - 27.0 * q * q;

    if disc > 0.0 {
        // Three distinct real roots (implies p < 0):
        //   s_k = 2√(−p/3) · cos(θ/3 − 2πk/3),
        //   θ = acos( 3q/(2p) · √(−3/p) )
        let m = 2.0 * (-p / 3.0).sqrt();
        let arg = (3.0 * q / (2.0 * p)) * (-3.0 / p).sqrt();
        let theta = arg.clamp(-1.0, 1.0).acos();

        (0..3)
            .map(|k| {
                let angle = (theta - 2.0 * std::f64::consts::PI * k as f64) / 3.0;
                Complex64::new(m * angle.cos(), 0.0)
            })
            .collect()
    } else {
        // One real root: Cardano with the larger-magnitude cube root to
        // avoid cancellation, then u·v = −p/3 for the partner term.
        let half_q = q / 2.0;
        let r = (q * q / 4.0 + p * p * p / 27.0).max(0.0).sqrt();
        let u3 = if half_q >= 0.0 { -half_q - r } else { -half_q + r };
        let u = u3.cbrt();
        let v = if u != 0.0 { -p / (3.0 * u) } else { 0.0 };
        let s1 = u + v;

        // Deflate: s³ + ps + q = (s − s₁)(s² + s₁s + (p + s₁²))
        let pair_disc = -3.0 * s1 * s1 - 4.0 * p;
        let re = -s1 / 2.0;

        let mut roots = vec![Complex64::new(s1, 0.0)];
        if pair_disc >= 0.0 {
            let sq = pair_disc.sqrt() / 2.0;
            roots.push(Complex64::new(re + sq, 0.0));
            roots.push(Complex64::new(re - sq, 0.0));
        } else {
            let sq = (-pair_disc).sqrt() / 2.0;
            roots.push(Complex64::new(re, sq));
            roots.push(Complex64::new(re, -sq));
        }
        roots
    }
}
