//! Sampled Waveforms
//!
//! Numeric backing for the sine-slider viewer: the UI binds amplitude,
//! frequency, and phase controls to a resampled sine trace.

use ndarray::Array1;

use crate::error::{check_finite, check_interval, CuspResult};

/// Sample `amplitude · sin(frequency·t + phase)` at `samples` evenly
/// spaced points across `range`, inclusive of both endpoints.
///
/// Returns the time grid and the values as parallel arrays.
pub fn sine_series(
    amplitude: f64,
    frequency: f64,
    phase: f64,
    range: (f64, f64),
    samples: usize,
) -> CuspResult<(Array1<f64>, Array1<f64>)> {
    check_finite("amplitude", amplitude)?;
    check_finite("frequency", frequency)?;
    check_finite("phase", phase)?;
    check_interval(range.0, range.1)?;

    let t = Array1::linspace(range.0, range.1, samples);
    let values = t.mapv(|ti| amplitude * (frequency * ti + phase).sin());
    Ok((t, values))
}
