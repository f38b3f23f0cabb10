//! Control and Bifurcation Traits
//!
//! Small trait surface for systems driven by a scalar control
//! parameter. Kept separate from the concrete system so alternative
//! normal forms (fold, pitchfork variants) can slot in behind the same
//! interface.

/// A system with one externally adjustable control parameter.
pub trait Controllable {
    /// Parameter type (tilt, current, temperature, ...).
    type Parameter;

    /// Set the control parameter.
    fn set_parameter(&mut self, param: Self::Parameter);

    /// Current parameter value.
    fn get_parameter(&self) -> Self::Parameter;

    /// Ramp the parameter toward `target` in increments of `rate`,
    /// letting the system relax `steps_per_increment` integration steps
    /// between increments.
    fn ramp_parameter(&mut self, target: Self::Parameter, rate: f64, steps_per_increment: usize);
}

/// A controllable system with a known bifurcation structure.
pub trait Bifurcating: Controllable {
    /// Theoretical critical parameter value, if one exists for the
    /// current configuration.
    fn critical_parameter(&self) -> Option<f64> {
        None
    }

    /// Name of the bifurcation type.
    fn bifurcation_type(&self) -> &'static str;
}
