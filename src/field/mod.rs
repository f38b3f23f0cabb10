//! Field Module: Vector-Field Grid Evaluation
//!
//! Numeric support for the streamplot-style viewers: evaluate a 2-D
//! vector field `(vx, vy) = f(x, y)` on a uniform square grid and derive
//! the per-point quantities a streamline renderer consumes — speed
//! magnitude and log-compressed line widths. Rendering itself is the
//! caller's concern; this module stops at arrays.

mod grid;
mod waveform;

pub use grid::{FieldGrid, VelocityField};
pub use waveform::sine_series;
