//! Shared angle utilities for chart calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Shortest angular separation between two longitudes, in [0, 180].
///
/// Inputs are expected already normalized to [0, 360); separations over
/// 180 fold back the short way around the circle.
pub fn separation_deg(lon_a_deg: f64, lon_b_deg: f64) -> f64 {
    let diff = (lon_a_deg - lon_b_deg).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}
