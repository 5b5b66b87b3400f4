//! Reference implementation wrappers
//!
//! Conversions computed with `palette`, used as ground truth for the
//! huekit converters. palette works in full float precision with no
//! intermediate rounding, so results agree with huekit only within the
//! tolerances documented on each comparison.

use huekit_core::Color;
use palette::encoding::Srgb as SrgbEncoding;
use palette::{FromColor, Hsl, Hsv, Srgb};

/// HSV (hue in degrees, s and v in [0, 1]) to opaque 8-bit RGB
pub fn hsv_to_color(hue: f64, saturation: f64, value: f64) -> Color {
    let hsv: Hsv<SrgbEncoding, f64> = Hsv::new(hue, saturation, value);
    let rgb: Srgb<u8> = Srgb::<f64>::from_color(hsv).into_format();
    Color::rgb(rgb.red, rgb.green, rgb.blue)
}

/// HSL (hue in degrees, s and l in [0, 1]) to opaque 8-bit RGB
pub fn hsl_to_color(hue: f64, saturation: f64, lightness: f64) -> Color {
    let hsl: Hsl<SrgbEncoding, f64> = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb<u8> = Srgb::<f64>::from_color(hsl).into_format();
    Color::rgb(rgb.red, rgb.green, rgb.blue)
}

fn unit_rgb(color: Color) -> Srgb<f64> {
    Srgb::new(color.r, color.g, color.b).into_format()
}

/// 8-bit RGB to `[hue, saturation, value]`, hue in [0, 360)
pub fn color_to_hsv(color: Color) -> [f64; 3] {
    let hsv: Hsv<SrgbEncoding, f64> = Hsv::from_color(unit_rgb(color));
    [hsv.hue.into_positive_degrees(), hsv.saturation, hsv.value]
}

/// 8-bit RGB to `[hue, saturation, lightness]`, hue in [0, 360)
pub fn color_to_hsl(color: Color) -> [f64; 3] {
    let hsl: Hsl<SrgbEncoding, f64> = Hsl::from_color(unit_rgb(color));
    [hsl.hue.into_positive_degrees(), hsl.saturation, hsl.lightness]
}
