//! Name-or-hex resolution
//!
//! Two tiers share the same pipeline (named table, then hex):
//!
//! - strict: [`try_get_color`] and [`try_get_from_name`] return a
//!   [`Result`] and never substitute a value.
//! - lenient: [`get_color`] and [`get_color_with_opacity`] always hand back
//!   something usable (`None` or transparent) and log the miss.

use std::borrow::Cow;

use crate::color::Color;
use crate::error::{ParseError, Result};
use crate::math::clamp_unit;
use crate::named::{self, known};
use crate::parse::hex::parse_hex;

/// Suffix carried by toolkit system color names (`ControlColor`)
const SYSTEM_COLOR_SUFFIX: &str = "Color";

/// A resolved color plus the opacity to paint it with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorWithOpacity {
    /// The color, transparent if the input could not be resolved
    pub color: Color,
    /// Opacity multiplier in [0, 1]
    pub opacity: f64,
}

#[inline]
fn is_hex(text: &str) -> bool {
    text.trim_start().starts_with('#')
}

/// Resolve through the named table unless the text is already hex
fn resolve_named(text: &str) -> Cow<'_, str> {
    if is_hex(text) {
        Cow::Borrowed(text)
    } else {
        named::resolve(text)
    }
}

/// Resolve a named color or hex code.
///
/// Names go through the named table first. Anything still not hex has a
/// trailing `Color` removed and is looked up (case-sensitively) among the
/// platform known colors, so `ControlColor` and `Highlight` both resolve.
pub fn try_get_color(text: &str) -> Result<Color> {
    let mut resolved = resolve_named(text);

    if !is_hex(&resolved) {
        let base = resolved
            .strip_suffix(SYSTEM_COLOR_SUFFIX)
            .unwrap_or(&*resolved);
        if let Some(color) = known::lookup_exact(base) {
            resolved = Cow::Owned(color.to_hex());
        }
    }

    if !is_hex(&resolved) {
        log::trace!("'{}' did not resolve to a hex color", text.trim());
        return Err(ParseError::UnresolvedName(resolved.trim().to_string()));
    }

    parse_hex(&resolved)
}

/// Resolve a platform known color name, ignoring case.
///
/// An unknown name resolves to the platform's empty color, whose RGB is
/// black, so this yields opaque black rather than failing. Alpha is never
/// carried over: `Transparent` comes back as opaque white.
pub fn try_get_from_name(name: &str) -> Result<Color> {
    let known = known::lookup_ignore_case(name).unwrap_or_else(|| {
        log::trace!("'{name}' is not a known color, using the empty color");
        Color::default()
    });
    try_get_color(&known.to_hex())
}

/// Lenient lookup: `None` for blank or unresolvable input
pub fn get_color(text: &str) -> Option<Color> {
    if text.trim().is_empty() {
        return None;
    }

    match parse_hex(&resolve_named(text)) {
        Ok(color) => Some(color),
        Err(err) => {
            log::debug!("unable to translate '{}' into a color: {err}", text.trim());
            None
        }
    }
}

/// Lenient lookup with opacity.
///
/// Blank or unresolvable input yields fully transparent black. The opacity is
/// clamped into [0, 1] and carried alongside the color; NaN becomes 0.
pub fn get_color_with_opacity(text: &str, opacity: f64) -> ColorWithOpacity {
    let opacity = if opacity.is_nan() { 0.0 } else { clamp_unit(opacity) };
    ColorWithOpacity {
        color: get_color(text).unwrap_or(Color::TRANSPARENT),
        opacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_and_hex() {
        assert_eq!(try_get_color("red"), Ok(Color::rgb(255, 0, 0)));
        assert_eq!(try_get_color("Rebecca Purple"), Ok(Color::rgb(0x66, 0x33, 0x99)));
        assert_eq!(try_get_color("  #80FF0000"), Ok(Color::new(0x80, 255, 0, 0)));
        assert_eq!(try_get_color("transparent"), Ok(Color::TRANSPARENT));
        assert_eq!(try_get_color("volt"), Ok(Color::rgb(0xCE, 0xFF, 0x00)));
    }

    #[test]
    fn test_system_colors() {
        assert_eq!(try_get_color("ControlColor"), Ok(Color::rgb(0xF0, 0xF0, 0xF0)));
        assert_eq!(try_get_color("Highlight"), Ok(Color::rgb(0x00, 0x78, 0xD7)));
        assert_eq!(try_get_color("WindowTextColor"), Ok(Color::BLACK));
        // System names are case-sensitive
        assert_eq!(
            try_get_color("controlcolor"),
            Err(ParseError::UnresolvedName("controlcolor".to_string()))
        );
    }

    #[test]
    fn test_unresolved() {
        assert_eq!(
            try_get_color(" NotAColor "),
            Err(ParseError::UnresolvedName("NotAColor".to_string()))
        );
        assert!(try_get_color("").is_err());
        assert!(try_get_color("#12").is_err());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(try_get_from_name("red"), Ok(Color::rgb(255, 0, 0)));
        assert_eq!(try_get_from_name("CornflowerBlue"), Ok(Color::rgb(0x64, 0x95, 0xED)));
        assert_eq!(try_get_from_name("Transparent"), Ok(Color::WHITE));
        assert_eq!(try_get_from_name("Bogus"), Ok(Color::BLACK));
    }

    #[test]
    fn test_get_color_is_lenient() {
        assert_eq!(get_color("Red"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(get_color("#0F0"), Some(Color::rgb(0, 255, 0)));
        assert_eq!(get_color("   "), None);
        assert_eq!(get_color("not a color"), None);
        // No system color stage in the lenient tier
        assert_eq!(get_color("ControlColor"), None);
    }

    #[test]
    fn test_get_color_with_opacity() {
        let resolved = get_color_with_opacity("blue", 0.25);
        assert_eq!(resolved.color, Color::rgb(0, 0, 255));
        assert_eq!(resolved.opacity, 0.25);

        let fallback = get_color_with_opacity("nope", 0.5);
        assert_eq!(fallback.color, Color::TRANSPARENT);
        assert_eq!(fallback.opacity, 0.5);

        assert_eq!(get_color_with_opacity("", 3.0).opacity, 1.0);
        assert_eq!(get_color_with_opacity("", 3.0).color, Color::TRANSPARENT);
    }

    #[test]
    fn test_opacity_always_in_unit_range() {
        assert_eq!(get_color_with_opacity("red", f64::NAN).opacity, 0.0);
        assert_eq!(get_color_with_opacity("red", -2.0).opacity, 0.0);
        assert_eq!(get_color_with_opacity("red", f64::INFINITY).opacity, 1.0);
        assert_eq!(get_color_with_opacity("red", f64::NAN).color, Color::rgb(255, 0, 0));
    }
}
