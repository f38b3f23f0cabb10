//! Sweep Module: Bifurcation Diagram Aggregation
//!
//! Drives the equilibrium classifier across an evenly spaced grid of one
//! parameter (`a` or `h`) while the other two stay fixed, and flattens
//! the per-sample stable/unstable root lists into two scatter series
//! `(parameter, root)`. Plotting the two series in different colors is
//! the classic cusp bifurcation diagram: solid stable branches folding
//! into a dashed unstable branch.

mod aggregator;

pub use aggregator::{sweep, SweepAxis, SweepConfig, SweepSeries};
