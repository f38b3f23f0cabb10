//! Roots Module: Polynomial Solving and Equilibrium Classification
//!
//! Implements the analytic core of the crate:
//! - Closed-form root finding for real polynomials of degree ≤ 3
//! - Stability classification of the real roots of the cusp family
//!   `p(t) = h + a·t − b·t³`
//!
//! ## Mathematical Background
//!
//! The real roots of `p` are the equilibria of the gradient flow
//! `ẋ = p(x)`. Linearizing about a root r gives `ξ̇ = p'(r)·ξ`, so the
//! sign of the derivative decides stability:
//!
//! - `p'(r) ≤ 0`: perturbations decay → **stable** equilibrium
//! - `p'(r) > 0`: perturbations grow → **unstable** equilibrium
//!
//! The marginal case `p'(r) = 0` occurs exactly at fold (saddle-node)
//! points and is deliberately classified stable.

mod classify;
mod cubic;

pub use classify::{classify, ClassifiedRoots, IMAG_TOLERANCE};
pub use cubic::{polynomial_roots, evaluate};
