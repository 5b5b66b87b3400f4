//! Numeric clamp and rounding helpers
//!
//! Shared by the converters and parsers. Rounding follows two rules:
//! intermediate values are rounded to two decimals (half away from zero),
//! and the final float-to-integer step rounds half to even.

/// Tolerance used for every "is this the same value" float comparison
pub const TOLERANCE: f64 = 1e-15;

/// Check two floats for equality within [`TOLERANCE`]
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// Check a float for zero within [`TOLERANCE`]
#[inline]
pub fn approx_zero(v: f64) -> bool {
    v.abs() < TOLERANCE
}

/// Clamp to the byte channel range [0, 255]
#[inline]
pub fn clamp_channel(v: f64) -> f64 {
    v.clamp(0.0, 255.0)
}

/// Clamp to the unit range [0, 1]
#[inline]
pub fn clamp_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Clamp a hue to [0, 360]
#[inline]
pub fn clamp_hue(h: f64) -> f64 {
    h.clamp(0.0, 360.0)
}

/// Clamp an integer percentage to [0, 100]
#[inline]
pub fn clamp_percentage(p: i32) -> i32 {
    p.clamp(0, 100)
}

/// Round to two decimal places, half away from zero
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Round to the nearest byte, ties to even.
///
/// Returns `None` when the value would round outside [0, 255] or is NaN.
#[inline]
pub fn round_to_byte(v: f64) -> Option<u8> {
    if (-0.5..255.5).contains(&v) {
        Some(v.round_ties_even() as u8)
    } else {
        None
    }
}

/// Round to the nearest integer (ties to even), then clamp into a byte
#[inline]
pub fn round_clamp_byte(v: f64) -> u8 {
    // NaN falls through `clamp` unchanged and casts to 0
    clamp_channel(v.round_ties_even()) as u8
}

/// Convert a unit float to a byte, clamping first and truncating
#[inline]
pub fn float_to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}

/// Map an integer opacity percentage to a [0, 1] fraction.
///
/// Values below 0 or above 100 are clamped first.
#[inline]
pub fn rationalize_opacity(percentage: i32) -> f64 {
    f64::from(clamp_percentage(percentage)) / 100.0
}
