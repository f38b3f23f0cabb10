//! Cusp Normal Form: Scalar Gradient Flow
//!
//! The one-dimensional system
//!
//!   ẋ = h + a·x − b·x³
//!
//! is the normal form of the cusp catastrophe:
//!
//! - h: tilt / asymmetry parameter (control parameter here)
//! - a: linear gain; a > 0 opens the bistable regime
//! - b: cubic saturation, b > 0 for a confining potential
//!
//! ## Saddle-Node (Fold) Bifurcation
//!
//! For a, b > 0 the system is bistable while `27·h²·b < 4·a³`. At
//!
//!   h_c = ±√(4a³ / 27b)
//!
//! a stable and an unstable equilibrium collide and annihilate; sweeping
//! h across ±h_c produces hysteresis: the state jumps between the outer
//! branches at different h depending on sweep direction.
//!
//! Equilibria and their stability come from the closed-form classifier
//! in [`crate::roots`]; the integrator exists to verify them dynamically
//! and to reproduce the hysteresis loop.

use rand_distr::{Distribution, Normal};

use super::traits::{Bifurcating, Controllable};
use crate::error::CuspResult;
use crate::roots::{classify, ClassifiedRoots};

/// Snapshot of the system state.
#[derive(Debug, Clone)]
pub struct CuspState {
    /// Current position
    pub x: f64,
    /// Tilt parameter h
    pub h: f64,
    /// Linear gain a
    pub a: f64,
    /// Cubic saturation b
    pub b: f64,
    /// Simulation time
    pub time: f64,
}

/// The cusp gradient flow with RK4 time stepping.
pub struct CuspSystem {
    /// Tilt parameter (control parameter)
    h: f64,
    /// Linear gain
    a: f64,
    /// Cubic saturation
    b: f64,
    /// Current position
    x: f64,
    /// Integration timestep
    dt: f64,
    /// Current time
    time: f64,
    /// Position history (last N samples)
    trajectory: Vec<f64>,
    /// Maximum trajectory length
    max_trajectory: usize,
}

impl CuspSystem {
    /// Create a system at position `x0`.
    pub fn new(h: f64, a: f64, b: f64, x0: f64) -> Self {
        Self {
            h,
            a,
            b,
            x: x0,
            dt: 0.01,
            time: 0.0,
            trajectory: Vec::new(),
            max_trajectory: 500,
        }
    }

    /// Right-hand side `h + a·x − b·x³`.
    fn drift(&self, x: f64) -> f64 {
        self.h + self.a * x - self.b * x * x * x
    }

    /// One RK4 integration step.
    pub fn step(&mut self) {
        let dt = self.dt;
        let k1 = self.drift(self.x);
        let k2 = self.drift(self.x + 0.5 * dt * k1);
        let k3 = self.drift(self.x + 0.5 * dt * k2);
        let k4 = self.drift(self.x + dt * k3);

        self.x += dt / 6.0 * (k1 + 2.0 * k2 + 2.0 * k3 + k4);
        self.time += dt;

        self.trajectory.push(self.x);
        if self.trajectory.len() > self.max_trajectory {
            self.trajectory.remove(0);
        }
    }

    /// Run multiple steps.
    pub fn run(&mut self, n_steps: usize) {
        for _ in 0..n_steps {
            self.step();
        }
    }

    /// Add Gaussian noise to the current position.
    pub fn perturb(&mut self, noise_std: f64) {
        let mut rng = rand::rng();
        let normal = Normal::new(0.0, noise_std).unwrap();
        self.x += normal.sample(&mut rng);
    }

    /// Current position.
    pub fn position(&self) -> f64 {
        self.x
    }

    /// Snapshot of the full state.
    pub fn state(&self) -> CuspState {
        CuspState {
            x: self.x,
            h: self.h,
            a: self.a,
            b: self.b,
            time: self.time,
        }
    }

    /// Position history since the last clear.
    pub fn trajectory(&self) -> &[f64] {
        &self.trajectory
    }

    /// Clear the position history.
    pub fn clear_trajectory(&mut self) {
        self.trajectory.clear();
    }

    /// Whether the flow has (numerically) stopped moving.
    pub fn settled(&self, tolerance: f64) -> bool {
        self.drift(self.x).abs() < tolerance
    }

    /// Equilibria of the current parameters, classified by stability.
    pub fn equilibria(&self) -> CuspResult<ClassifiedRoots> {
        classify(self.h, self.a, self.b)
    }

    /// The stable equilibrium nearest the current position, if any.
    pub fn nearest_stable_equilibrium(&self) -> CuspResult<Option<f64>> {
        let equilibria = self.equilibria()?;
        Ok(equilibria
            .stable
            .iter()
            .copied()
            .min_by(|p, q| {
                let dp = (p - self.x).abs();
                let dq = (q - self.x).abs();
                dp.partial_cmp(&dq).unwrap_or(std::cmp::Ordering::Equal)
            }))
    }
}

impl Controllable for CuspSystem {
    type Parameter = f64;

    fn set_parameter(&mut self, param: f64) {
        self.h = param;
    }

    fn get_parameter(&self) -> f64 {
        self.h
    }

    fn ramp_parameter(&mut self, target: f64, rate: f64, steps_per_increment: usize) {
        while (self.h - target).abs() > rate {
            self.run(steps_per_increment);
            if self.h < target {
                self.h += rate;
            } else {
                self.h -= rate;
            }
        }
        self.h = target;
        self.run(steps_per_increment);
    }
}

impl Bifurcating for CuspSystem {
    /// Fold location in h: `h_c = +√(4a³/27b)` (the symmetric partner
    /// sits at −h_c). Only defined in the bistable-capable regime
    /// a > 0, b > 0.
    fn critical_parameter(&self) -> Option<f64> {
        if self.a > 0.0 && self.b > 0.0 {
            Some((4.0 * self.a.powi(3) / (27.0 * self.b)).sqrt())
        } else {
            None
        }
    }

    fn bifurcation_type(&self) -> &'static str {
        "saddle-node (fold)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relaxation_onto_stable_equilibrium() {
        // Pitchfork regime, started right of the unstable origin
        let mut system = CuspSystem::new(0.0, 1.0, 1.0, 0.1);
        system.run(2000);

        assert!(system.settled(1e-8), "flow should have stopped");
        assert!(
            (system.position() - 1.0).abs() < 1e-6,
            "expected x → +1, got {}",
            system.position()
        );
    }

    #[test]
    fn test_basin_symmetry() {
        let mut right = CuspSystem::new(0.0, 1.0, 1.0, 0.3);
        let mut left = CuspSystem::new(0.0, 1.0, 1.0, -0.3);
        right.run(2000);
        left.run(2000);

        assert!((right.position() + left.position()).abs() < 1e-9);
    }

    #[test]
    fn test_trajectory_converges_to_classified_root() {
        let mut system = CuspSystem::new(0.3, 2.0, 1.0, 5.0);
        system.run(3000);

        let nearest = system
            .nearest_stable_equilibrium()
            .unwrap()
            .expect("bistable system has stable equilibria");
        assert!(
            (system.position() - nearest).abs() < 1e-6,
            "trajectory at {} but nearest stable root is {}",
            system.position(),
            nearest
        );
    }

    #[test]
    fn test_fold_location_matches_classifier() {
        let system = CuspSystem::new(0.0, 1.0, 1.0, 0.0);
        let h_c = system.critical_parameter().expect("a, b > 0");

        // Just inside the fold window: bistable
        let inside = classify(h_c * 0.99, 1.0, 1.0).unwrap();
        assert!(inside.is_bistable(), "expected bistability at h = {}", h_c * 0.99);

        // Just outside: single equilibrium
        let outside = classify(h_c * 1.01, 1.0, 1.0).unwrap();
        assert_eq!(outside.real_root_count(), 1);
    }

    #[test]
    fn test_no_fold_without_bistable_regime() {
        let system = CuspSystem::new(0.0, -1.0, 1.0, 0.0);
        assert!(system.critical_parameter().is_none());
        assert_eq!(system.bifurcation_type(), "saddle-node (fold)");
    }

    #[test]
    fn test_hysteresis_jump_across_fold() {
        // Start on the lower branch, ramp h upward through +h_c: the
        // branch disappears and the state must jump to the upper one.
        let mut system = CuspSystem::new(-0.6, 1.0, 1.0, -1.2);
        system.run(2000);
        assert!(system.position() < 0.0, "should settle on the lower branch");

        let h_c = system.critical_parameter().unwrap();
        system.ramp_parameter(h_c + 0.2, 0.01, 500);
        assert!(
            system.position() > 0.0,
            "state should have jumped to the upper branch, x = {}",
            system.position()
        );
    }

    #[test]
    fn test_control_parameter_retargets_equilibria() {
        let mut system = CuspSystem::new(0.0, 1.0, 1.0, 1.0);
        system.run(1000);
        assert!((system.position() - 1.0).abs() < 1e-6);

        // Tilting h negative drags the upper equilibrium downward
        system.set_parameter(-0.2);
        assert_eq!(system.get_parameter(), -0.2);
        system.run(2000);
        assert!(
            system.position() < 1.0 && system.position() > 0.5,
            "upper branch should shift down, x = {}",
            system.position()
        );
    }

    #[test]
    fn test_perturb_moves_position() {
        let mut system = CuspSystem::new(0.0, 1.0, 1.0, 1.0);
        let before = system.position();
        system.perturb(0.5);
        // Normal(0, 0.5) draws exactly zero with probability zero
        assert_ne!(system.position(), before);
    }

    #[test]
    fn test_trajectory_history_bounded() {
        let mut system = CuspSystem::new(0.0, 1.0, 1.0, 0.1);
        system.run(1000);
        assert_eq!(system.trajectory().len(), 500);
        system.clear_trajectory();
        assert!(system.trajectory().is_empty());
    }
}
