// File: crates/radar-core/src/axis.rs
// Summary: Polar axis model: one radial scale plus its ring ticks and labels.

use crate::grid::{format_tick, linspace_open};
use crate::scale::RadialScale;

/// One of the chart's stacked polar axes.
///
/// Axis 0 is the shell (its rings, spokes and outer circle are the visible
/// grid); axis 1 is the overlay all series are drawn on and shares the
/// shell's scale; axes 2..N exist only so variables 1..N-1 can show their
/// own independently scaled tick labels at their spoke angle.
#[derive(Clone, Debug)]
pub struct PolarAxis {
    pub scale: RadialScale,
    /// Angle of this axis's spoke, degrees clockwise from the top.
    pub angle_deg: f64,
    /// Ring level values across the scale, outer endpoint excluded.
    pub ticks: Vec<f64>,
    /// Ring labels aligned with `ticks`; the innermost is blanked so no
    /// text piles up at the center.
    pub tick_labels: Vec<String>,
}

impl PolarAxis {
    pub fn new(scale: RadialScale, angle_deg: f64, ring_levels: usize) -> Self {
        let ticks = linspace_open(scale.min, scale.max, ring_levels);
        let mut tick_labels: Vec<String> = ticks.iter().map(|&t| format_tick(t)).collect();
        if let Some(first) = tick_labels.first_mut() {
            first.clear();
        }
        Self { scale, angle_deg, ticks, tick_labels }
    }

    /// Radius fraction (0 at the center, 1 at the boundary) for a value on
    /// this axis's scale.
    #[inline]
    pub fn radius_fraction(&self, value: f64) -> f64 {
        self.scale.fraction(value)
    }
}
