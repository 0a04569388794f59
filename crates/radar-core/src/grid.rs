// File: crates/radar-core/src/grid.rs
// Summary: Ring-level layout helpers and tick label formatting.

/// Evenly spaced values across `[start, end)` with the endpoint excluded,
/// so the outermost ring level never collides with the boundary circle.
pub fn linspace_open(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps == 0 { return Vec::new(); }
    let step = (end - start) / steps as f64;
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Format a ring level rounded to two decimal places, dropping trailing
/// zeros ("2", "2.5", "2.25").
pub fn format_tick(v: f64) -> String {
    let r = (v * 100.0).round() / 100.0;
    // {} on f64 already prints the shortest round-trip form; rounding first
    // keeps long fractions like 0.333333 down to "0.33".
    format!("{}", r)
}
