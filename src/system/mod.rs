//! System Module: The Cusp Gradient Flow
//!
//! Time-domain counterpart of the static root analysis: integrates
//! `ẋ = h + a·x − b·x³` so that the classifier's stable/unstable split
//! can be checked against actual trajectories. A trajectory started
//! near any point relaxes onto one of the stable equilibria reported by
//! [`classify`](crate::roots::classify); ramping `h` through a fold
//! produces the characteristic hysteresis jump.

mod cusp;
mod traits;

pub use cusp::{CuspState, CuspSystem};
pub use traits::{Bifurcating, Controllable};
