//! Crate Error Type
//!
//! All fallible entry points return [`CuspResult`]. The core computations
//! are closed-form and cannot fail on valid finite inputs, so the error
//! surface is small: it exists to reject NaN/infinite parameters before
//! they propagate into root finding and produce silently-poisoned output.

use thiserror::Error;

/// Errors produced by equilibrium classification and sweeps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CuspError {
    /// An input scalar was NaN or infinite.
    #[error("non-finite parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// An interval whose endpoints are non-finite or reversed.
    #[error("invalid interval [{lo}, {hi}]")]
    InvalidRange { lo: f64, hi: f64 },
}

pub type CuspResult<T> = Result<T, CuspError>;

/// Reject NaN/±∞ up front rather than letting them reach the solver.
pub(crate) fn check_finite(name: &'static str, value: f64) -> CuspResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CuspError::InvalidParameter { name, value })
    }
}

/// Validate a closed interval: both endpoints finite and `lo <= hi`.
pub(crate) fn check_interval(lo: f64, hi: f64) -> CuspResult<()> {
    if lo.is_finite() && hi.is_finite() && lo <= hi {
        Ok(())
    } else {
        Err(CuspError::InvalidRange { lo, hi })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finite_accepts_normal_values() {
        assert!(check_finite("h", 0.0).is_ok());
        assert!(check_finite("h", -1e300).is_ok());
    }

    #[test]
    fn test_check_finite_rejects_nan_and_infinity() {
        assert!(check_finite("a", f64::NAN).is_err());
        assert!(check_finite("a", f64::INFINITY).is_err());
        assert!(check_finite("a", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_check_interval_rejects_reversed_range() {
        assert!(check_interval(1.0, -1.0).is_err());
        assert!(check_interval(-10.0, 10.0).is_ok());
        assert!(check_interval(5.0, 5.0).is_ok(), "degenerate interval is valid");
    }

    #[test]
    fn test_error_display_names_offending_parameter() {
        let err = CuspError::InvalidParameter { name: "b", value: f64::NAN };
        let msg = format!("{}", err);
        assert!(msg.contains("b"), "message should name the parameter: {}", msg);
    }
}
