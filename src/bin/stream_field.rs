//! Stream Field: Grid Evaluation Report
//!
//! Evaluates the reference streamplot demo field
//!
//!   vx = x·(x − y²),  vy = y·(2x − y)
//!
//! on the standard [-5, 5]² grid and reports the statistics a
//! streamline renderer would consume: speed range and the log-scaled
//! line-width distribution.

use cusp_dynamics::FieldGrid;

fn main() {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  Stream Field: vx = x(x − y²), vy = y(2x − y)");
    println!("═══════════════════════════════════════════════════════════════\n");

    let grid = FieldGrid::standard();
    let field = grid.evaluate(|x, y| (x * (x - y * y), y * (2.0 * x - y)));

    let speed = field.speed();
    let mut s_min = f64::INFINITY;
    let mut s_max = f64::NEG_INFINITY;
    let mut s_sum = 0.0;
    for &s in speed.iter() {
        s_min = s_min.min(s);
        s_max = s_max.max(s);
        s_sum += s;
    }
    let s_mean = s_sum / speed.len() as f64;

    println!("Grid: {0} × {0} over [-5, 5]²", grid.resolution());
    println!("Speed magnitude:");
    println!("  min  = {:.4}", s_min);
    println!("  mean = {:.4}", s_mean);
    println!("  max  = {:.4}", s_max);

    let (min_w, max_w) = (0.5, 3.0);
    let widths = field.line_widths(min_w, max_w);
    let mut histogram = [0usize; 5];
    for &w in widths.iter() {
        let bin = ((w - min_w) / (max_w - min_w) * 5.0).min(4.0) as usize;
        histogram[bin] += 1;
    }

    println!("\nLine widths (log1p-scaled into [{}, {}]):", min_w, max_w);
    for (i, count) in histogram.iter().enumerate() {
        let lo = min_w + (max_w - min_w) * i as f64 / 5.0;
        let hi = min_w + (max_w - min_w) * (i + 1) as f64 / 5.0;
        println!("  [{:.1}, {:.1}): {:6} cells", lo, hi, count);
    }

    println!("\n═══════════════════════════════════════════════════════════════");
    println!("  Field Evaluation Complete");
    println!("═══════════════════════════════════════════════════════════════");
}
