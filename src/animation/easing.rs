//! Easing curves.

/// Cubic ease-out: fast start, decelerating to rest.
///
/// `t` is clamped to `[0, 1]`; NaN is treated as 0.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    1.0 - (1.0 - t).powi(3)
}
