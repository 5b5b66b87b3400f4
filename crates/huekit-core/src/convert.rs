//! HSV/HSL conversions
//!
//! Forward conversions (`hsva_to_color`, `hsla_to_color`) turn cylindrical
//! coordinates into an ARGB [`Color`]. Reverse conversions (`rgb_to_hsb`,
//! `rgb_to_hsl`) ignore alpha.
//!
//! # Precision
//!
//! HSL output channels and every reverse-conversion component are rounded to
//! two decimals before the final step. This loses precision on purpose: a
//! color sent through `rgb_to_hsl` and back through `hsla_to_color` lands
//! within one step per channel of where it started, not exactly on it.

use crate::color::Color;
use crate::math::{
    approx_eq, approx_zero, clamp_hue, clamp_unit, round_clamp_byte, round_to_byte, round2,
};

/// Alpha in one of its two accepted shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alpha {
    /// Fraction in [0, 1], scaled by 255 and truncated
    Fraction(f64),
    /// Byte used as-is
    Byte(u8),
}

impl Alpha {
    /// Resolve to a byte
    #[inline]
    pub fn to_byte(self) -> u8 {
        match self {
            // `as` saturates, so out-of-range fractions pin to 0 or 255
            Alpha::Fraction(f) => (f * 255.0) as u8,
            Alpha::Byte(b) => b,
        }
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Alpha::Byte(u8::MAX)
    }
}

impl From<f64> for Alpha {
    fn from(f: f64) -> Self {
        Alpha::Fraction(f)
    }
}

impl From<u8> for Alpha {
    fn from(b: u8) -> Self {
        Alpha::Byte(b)
    }
}

/// Hue, saturation, brightness (value)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsb {
    /// Hue in degrees (0 to 360)
    pub hue: f64,
    /// Saturation (0 to 1)
    pub saturation: f64,
    /// Brightness (0 to 1)
    pub brightness: f64,
}

impl Hsb {
    /// Create a new HSB value
    #[inline]
    pub const fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Convert to an ARGB color
    pub fn to_color(&self, alpha: impl Into<Alpha>) -> Color {
        hsva_to_color(self.hue, self.saturation, self.brightness, alpha)
    }

    /// Convert to array `[h, s, b]`
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.hue, self.saturation, self.brightness]
    }
}

/// Hue, saturation, lightness
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees (0 to 360)
    pub hue: f64,
    /// Saturation (0 to 1)
    pub saturation: f64,
    /// Lightness (0 to 1)
    pub lightness: f64,
}

impl Hsl {
    /// Create a new HSL value
    #[inline]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to an ARGB color
    pub fn to_color(&self, alpha: impl Into<Alpha>) -> Color {
        hsla_to_color(self.hue, self.saturation, self.lightness, alpha)
    }

    /// Convert to array `[h, s, l]`
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.hue, self.saturation, self.lightness]
    }
}

/// Scaled (0-255) HSV channels in R, G, B order, before rounding
fn hsv_channels(hue: f64, saturation: f64, value: f64) -> [f64; 3] {
    let sector = (hue / 60.0).floor();
    let hi = (sector as i64) % 6;
    let f = hue / 60.0 - sector;

    let v = value * 255.0;
    let p = v * (1.0 - saturation);
    let q = v * (1.0 - f * saturation);
    let t = v * (1.0 - (1.0 - f) * saturation);

    match hi {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        // 5, and negative sectors from negative hues
        _ => [v, p, q],
    }
}

/// HSV to RGB, rejecting inputs whose channels fall outside a byte.
///
/// Saturation or value outside [0, 1] can push a channel past 255 or below
/// 0; those return `None`. Hue is not clamped: 360 behaves like 0 and
/// negative hues land in the last sector. A hue whose 60 degree sector does
/// not fit in an `i32` (including infinite and NaN hues) returns `None`.
pub fn checked_hsva_to_color(
    hue: f64,
    saturation: f64,
    value: f64,
    alpha: impl Into<Alpha>,
) -> Option<Color> {
    let sector = (hue / 60.0).floor();
    if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&sector) {
        return None;
    }

    let [r, g, b] = hsv_channels(hue, saturation, value);
    Some(Color::new(
        alpha.into().to_byte(),
        round_to_byte(r)?,
        round_to_byte(g)?,
        round_to_byte(b)?,
    ))
}

/// HSV to RGB.
///
/// Channels round half to even and are clamped into [0, 255].
pub fn hsva_to_color(hue: f64, saturation: f64, value: f64, alpha: impl Into<Alpha>) -> Color {
    let [r, g, b] = hsv_channels(hue, saturation, value);
    Color::new(
        alpha.into().to_byte(),
        round_clamp_byte(r),
        round_clamp_byte(g),
        round_clamp_byte(b),
    )
}

/// Unit fraction to output byte: two-decimal rounding, then ties-to-even
#[inline]
fn hsl_channel(fraction: f64) -> u8 {
    round_clamp_byte(round2(fraction * 255.0))
}

/// Map a hue-shifted fraction through the piecewise HSL ramp
fn hue_ramp(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t * 6.0 < 1.0 {
        p + (q - p) * 6.0 * t
    } else if t * 2.0 < 1.0 {
        q
    } else if t * 3.0 < 2.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// HSL to RGB.
///
/// Inputs are clamped to their domains first (hue [0, 360], saturation and
/// lightness [0, 1]), so this never fails.
pub fn hsla_to_color(hue: f64, saturation: f64, lightness: f64, alpha: impl Into<Alpha>) -> Color {
    let h = clamp_hue(hue);
    let s = clamp_unit(saturation);
    let l = clamp_unit(lightness);
    let a = alpha.into().to_byte();

    if approx_zero(s) {
        let gray = hsl_channel(l);
        return Color::new(a, gray, gray, gray);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let hk = h / 360.0;
    let r = hue_ramp(p, q, hk + 1.0 / 3.0);
    let g = hue_ramp(p, q, hk);
    let b = hue_ramp(p, q, hk - 1.0 / 3.0);

    Color::new(a, hsl_channel(r), hsl_channel(g), hsl_channel(b))
}

/// Hue shared by HSB and HSL; 0 for achromatic colors
fn hue_of(r: f64, g: f64, b: f64, max: f64, min: f64) -> f64 {
    let delta = max - min;

    if approx_eq(max, min) {
        0.0
    } else if approx_eq(max, r) {
        let h = 60.0 * (g - b) / delta;
        if g < b { h + 360.0 } else { h }
    } else if approx_eq(max, g) {
        60.0 * (b - r) / delta + 120.0
    } else if approx_eq(max, b) {
        60.0 * (r - g) / delta + 240.0
    } else {
        0.0
    }
}

/// Normalized channels plus their max and min
fn unit_channels(color: Color) -> (f64, f64, f64, f64, f64) {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    (r, g, b, max, min)
}

/// RGB to HSB. Alpha is ignored.
///
/// Output ranges: hue [0, 360], saturation [0, 1], brightness [0, 1], each
/// rounded to two decimals.
pub fn rgb_to_hsb(color: Color) -> Hsb {
    let (r, g, b, max, min) = unit_channels(color);

    let hue = hue_of(r, g, b, max, min);
    let saturation = if approx_zero(max) { 0.0 } else { 1.0 - min / max };

    Hsb {
        hue: clamp_hue(round2(hue)),
        saturation: clamp_unit(round2(saturation)),
        brightness: clamp_unit(round2(max)),
    }
}

/// RGB to HSL. Alpha is ignored.
///
/// Output ranges: hue [0, 360], saturation [0, 1], lightness [0, 1], each
/// rounded to two decimals.
pub fn rgb_to_hsl(color: Color) -> Hsl {
    let (r, g, b, max, min) = unit_channels(color);

    let hue = hue_of(r, g, b, max, min);
    let lightness = (max + min) / 2.0;

    let saturation = if approx_zero(lightness) || approx_eq(max, min) {
        0.0
    } else if lightness <= 0.5 {
        (max - min) / (max + min)
    } else {
        (max - min) / (2.0 - max - min)
    };

    Hsl {
        hue: clamp_hue(round2(hue)),
        saturation: clamp_unit(round2(saturation)),
        lightness: clamp_unit(round2(lightness)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsva_primaries() {
        assert_eq!(hsva_to_color(0.0, 1.0, 1.0, 1.0), Color::new(255, 255, 0, 0));
        assert_eq!(hsva_to_color(60.0, 1.0, 1.0, 255u8), Color::rgb(255, 255, 0));
        assert_eq!(hsva_to_color(120.0, 1.0, 1.0, 255u8), Color::rgb(0, 255, 0));
        assert_eq!(hsva_to_color(240.0, 1.0, 1.0, 255u8), Color::rgb(0, 0, 255));
        assert_eq!(hsva_to_color(300.0, 1.0, 1.0, 255u8), Color::rgb(255, 0, 255));
    }

    #[test]
    fn test_hsva_alpha_shapes() {
        assert_eq!(hsva_to_color(0.0, 1.0, 1.0, 0.5).a, 127);
        assert_eq!(hsva_to_color(0.0, 1.0, 1.0, 64u8).a, 64);
        assert_eq!(hsva_to_color(0.0, 1.0, 1.0, 2.0).a, 255);
        assert_eq!(hsva_to_color(0.0, 1.0, 1.0, -1.0).a, 0);
    }

    #[test]
    fn test_hsva_ties_round_to_even() {
        // t = 127.5 in sector 0
        assert_eq!(hsva_to_color(30.0, 1.0, 1.0, 255u8), Color::rgb(255, 128, 0));
        // v = 127.5 for every channel
        assert_eq!(hsva_to_color(0.0, 0.0, 0.5, 255u8), Color::rgb(128, 128, 128));
    }

    #[test]
    fn test_hsva_hue_wraps() {
        assert_eq!(
            hsva_to_color(360.0, 1.0, 1.0, 255u8),
            hsva_to_color(0.0, 1.0, 1.0, 255u8)
        );
        // Negative hue lands in the last sector
        assert_eq!(hsva_to_color(-30.0, 1.0, 1.0, 255u8), Color::rgb(255, 0, 128));
    }

    #[test]
    fn test_checked_hsva_rejects_overflow() {
        assert_eq!(checked_hsva_to_color(0.0, 1.0, 2.0, 255u8), None);
        assert_eq!(checked_hsva_to_color(0.0, 2.0, 1.0, 255u8), None);
        assert_eq!(checked_hsva_to_color(f64::NAN, 1.0, 1.0, 255u8), None);
        assert_eq!(checked_hsva_to_color(f64::INFINITY, 1.0, 1.0, 255u8), None);
        assert_eq!(checked_hsva_to_color(1e12, 1.0, 1.0, 255u8), None);
        assert!(checked_hsva_to_color(60.0 * f64::from(i32::MAX), 1.0, 1.0, 255u8).is_some());
        assert_eq!(
            checked_hsva_to_color(0.0, 1.0, 1.0, 255u8),
            Some(Color::rgb(255, 0, 0))
        );
        // The total variant clamps instead
        assert_eq!(hsva_to_color(0.0, 1.0, 2.0, 255u8), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_hsla_primaries() {
        assert_eq!(hsla_to_color(0.0, 1.0, 0.5, 255u8), Color::new(255, 255, 0, 0));
        assert_eq!(hsla_to_color(120.0, 1.0, 0.5, 255u8), Color::rgb(0, 255, 0));
        assert_eq!(hsla_to_color(240.0, 1.0, 0.5, 255u8), Color::rgb(0, 0, 255));
        assert_eq!(hsla_to_color(120.0, 0.5, 0.5, 1.0), Color::rgb(64, 191, 64));
    }

    #[test]
    fn test_hsla_achromatic() {
        assert_eq!(hsla_to_color(0.0, 0.0, 0.5, 255u8), Color::rgb(128, 128, 128));
        assert_eq!(hsla_to_color(200.0, 0.0, 1.0, 255u8), Color::WHITE);
        assert_eq!(hsla_to_color(200.0, 0.0, 0.0, 10u8), Color::new(10, 0, 0, 0));
    }

    #[test]
    fn test_hsla_clamps_inputs() {
        assert_eq!(
            hsla_to_color(-20.0, 1.5, 0.5, 255u8),
            hsla_to_color(0.0, 1.0, 0.5, 255u8)
        );
        assert_eq!(hsla_to_color(0.0, 0.0, 7.0, 255u8), Color::WHITE);
    }

    #[test]
    fn test_rgb_to_hsb() {
        assert_eq!(rgb_to_hsb(Color::rgb(255, 0, 0)), Hsb::new(0.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsb(Color::rgb(0, 0, 255)), Hsb::new(240.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsb(Color::rgb(128, 128, 128)), Hsb::new(0.0, 0.0, 0.5));
        assert_eq!(rgb_to_hsb(Color::BLACK), Hsb::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_rgb_to_hsl() {
        assert_eq!(rgb_to_hsl(Color::rgb(255, 0, 0)), Hsl::new(0.0, 1.0, 0.5));
        assert_eq!(rgb_to_hsl(Color::rgb(255, 0, 255)), Hsl::new(300.0, 1.0, 0.5));
        assert_eq!(rgb_to_hsl(Color::rgb(0, 128, 255)), Hsl::new(209.88, 1.0, 0.5));
        assert_eq!(rgb_to_hsl(Color::WHITE), Hsl::new(0.0, 0.0, 1.0));
        assert_eq!(rgb_to_hsl(Color::BLACK), Hsl::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hsl_round_trip_is_close() {
        for color in [
            Color::rgb(0, 128, 255),
            Color::rgb(255, 0, 0),
            Color::rgb(128, 128, 128),
            Color::rgb(255, 255, 255),
        ] {
            let back = rgb_to_hsl(color).to_color(255u8);
            assert!((i16::from(back.r) - i16::from(color.r)).abs() <= 1, "{color}");
            assert!((i16::from(back.g) - i16::from(color.g)).abs() <= 1, "{color}");
            assert!((i16::from(back.b) - i16::from(color.b)).abs() <= 1, "{color}");
        }
    }
}
