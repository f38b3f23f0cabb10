//! # cusp-dynamics
//!
//! Equilibrium classification and bifurcation sweeps for the cusp
//! normal form
//!
//!   ẋ = p(x) = h + a·x − b·x³
//!
//! ## Framework
//!
//! The real roots of `p` are the equilibria of the flow. Linear
//! stability is decided by the derivative `p'(x) = a − 3b·x²` at each
//! root:
//!
//! - `p'(root) ≤ 0`: attracting (**stable**)
//! - `p'(root) > 0`: repelling (**unstable**)
//!
//! Sweeping `a` (with `h` fixed) or `h` (with `a` fixed) over a sample
//! grid and scatter-plotting the classified roots against the swept
//! parameter yields the cusp bifurcation diagram: two stable branches
//! folding into an unstable middle branch, with saddle-node
//! bifurcations on the fold curve `27·h²·b = 4·a³`.
//!
//! ## Crate Layout
//!
//! - [`roots`]: closed-form root finding for degree ≤ 3 and the
//!   stability classifier
//! - [`sweep`]: one-parameter sweeps flattened into scatter series
//! - [`system`]: the gradient flow itself (RK4), for dynamical
//!   cross-checks and hysteresis experiments
//! - [`field`]: uniform-grid evaluation of 2-D vector fields and
//!   sampled waveforms, the numeric layer under streamline viewers
//! - [`error`]: crate error type; non-finite inputs fail fast
//!
//! The core is pure and stateless: every call allocates only local
//! data, so classification and sweeps may run concurrently from any
//! number of threads without synchronization. Presentation concerns
//! (rendering, serving, expression parsing) live with the caller.

pub mod error;
pub mod field;
pub mod roots;
pub mod sweep;
pub mod system;

// Re-exports from error
pub use error::{CuspError, CuspResult};

// Re-exports from roots
pub use roots::{classify, evaluate, polynomial_roots, ClassifiedRoots, IMAG_TOLERANCE};

// Re-exports from sweep
pub use sweep::{sweep, SweepAxis, SweepConfig, SweepSeries};

// Re-exports from field
pub use field::{sine_series, FieldGrid, VelocityField};

// Re-exports from system
pub use system::{Bifurcating, Controllable, CuspState, CuspSystem};
