//! Angle normalization.

use std::f64::consts::{PI, TAU};

/// Normalize an angle into the range `[0, 2π)`.
pub fn anp(a: f64) -> f64 {
    let mut w = a % TAU;
    if w < 0.0 {
        w += TAU;
    }
    // A tiny negative input can round up to exactly 2π.
    if w >= TAU { 0.0 } else { w }
}

/// Normalize an angle into the range `(−π, π]`.
///
/// Exactly ±π both map to +π, so the function is idempotent.
pub fn anpm(a: f64) -> f64 {
    let w = a % TAU;
    if w <= -PI {
        w + TAU
    } else if w > PI {
        w - TAU
    } else {
        w
    }
}
