/// Linear interpolation from `start` to `end` as `elapsed` runs over
/// `duration`. Elapsed time is clamped to the segment; a zero or negative
/// duration lands on `end`.
pub fn lerp(elapsed: f64, duration: f64, start: f64, end: f64) -> f64 {
    if duration <= 0.0 || !duration.is_finite() {
        return end;
    }
    let t = (elapsed / duration).clamp(0.0, 1.0);
    start + (end - start) * t
}

/// Fraction of `duration` covered by `elapsed`, clamped to `[0, 1]`.
pub fn progress(elapsed: f64, duration: f64) -> f64 {
    lerp(elapsed, duration, 0.0, 1.0)
}

/// Stroke dash offset for a progress ring of radius `r` at `percent`.
pub fn ring_dash_offset(radius: f64, percent: u8) -> f64 {
    let circumference = std::f64::consts::TAU * radius;
    circumference * (1.0 - f64::from(percent.min(100)) / 100.0)
}
