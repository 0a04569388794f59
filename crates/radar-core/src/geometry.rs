// File: crates/radar-core/src/geometry.rs
// Summary: Polar pixel math. Angles are measured clockwise from north (top).

/// Convert a polar coordinate to screen space.
///
/// `angle_rad` is clockwise from the top of the circle, so variable 0 sits
/// at 12 o'clock and later variables proceed clockwise.
#[inline]
pub fn polar_to_screen(center: (f32, f32), radius: f32, angle_rad: f64) -> (f32, f32) {
    let (sin, cos) = angle_rad.sin_cos();
    (
        center.0 + radius * sin as f32,
        center.1 - radius * cos as f32,
    )
}

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}
