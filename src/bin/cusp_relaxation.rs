//! Cusp Relaxation: Dynamical Cross-Check of the Classifier
//!
//! Integrates the gradient flow ẋ = h + a·x − b·x³ from perturbed
//! initial conditions and verifies that every trajectory lands on an
//! equilibrium the classifier marks stable. Then ramps h through the
//! fold in both directions to show the hysteresis jump.

use cusp_dynamics::{Bifurcating, Controllable, CuspResult, CuspSystem};

fn main() -> CuspResult<()> {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  Cusp Relaxation: Trajectories vs. Classified Equilibria");
    println!("═══════════════════════════════════════════════════════════════\n");

    let (h, a, b) = (0.1, 1.0, 1.0);

    let reference = CuspSystem::new(h, a, b, 0.0);
    let equilibria = reference.equilibria()?;
    println!("Parameters: h = {}, a = {}, b = {}", h, a, b);
    println!("Classified equilibria:");
    for root in &equilibria.stable {
        println!("  stable   x* = {:+.6}", root);
    }
    for root in &equilibria.unstable {
        println!("  unstable x* = {:+.6}", root);
    }

    println!("\nRelaxation from perturbed initial conditions:");
    for &x0 in &[-2.0, -0.5, 0.5, 2.0] {
        let mut system = CuspSystem::new(h, a, b, x0);
        system.perturb(0.05);
        system.run(5000);

        let landed = system.position();
        let nearest = system.nearest_stable_equilibrium()?;
        match nearest {
            Some(x_star) => println!(
                "  x₀ = {:+.2} → x = {:+.6} (nearest stable root {:+.6}, Δ = {:.2e})",
                x0,
                landed,
                x_star,
                (landed - x_star).abs()
            ),
            None => println!("  x₀ = {:+.2} → x = {:+.6} (no stable root!)", x0, landed),
        }
    }

    // Hysteresis loop
    println!("\n──────────────────────────────────────────────────────────────");
    println!("Hysteresis: ramping h across the folds\n");

    let mut system = CuspSystem::new(-0.6, a, b, -1.2);
    system.run(2000);
    let h_c = system
        .critical_parameter()
        .expect("a, b > 0 has a fold");
    println!("  fold locations: h = ±{:.4}", h_c);
    println!("  start: h = {:+.2}, x = {:+.4} (lower branch)",
        system.get_parameter(), system.position());

    system.ramp_parameter(h_c + 0.2, 0.01, 500);
    println!("  ramp up   → h = {:+.2}, x = {:+.4} (jumped to upper branch)",
        system.get_parameter(), system.position());

    system.ramp_parameter(-h_c - 0.2, 0.01, 500);
    println!("  ramp down → h = {:+.2}, x = {:+.4} (jumped back)",
        system.get_parameter(), system.position());

    println!("\n═══════════════════════════════════════════════════════════════");
    println!("  Relaxation Complete");
    println!("═══════════════════════════════════════════════════════════════");
    Ok(())
}
