//! Numeric color grammars
//!
//! Packed integers and comma-separated channel lists. Tokens are trimmed
//! before parsing; a leading `+` is accepted.

use std::num::IntErrorKind;
use std::str::FromStr;

use crate::color::Color;
use crate::convert::{Alpha, checked_hsva_to_color, hsla_to_color};
use crate::error::{ParseError, Result};
use crate::parse::resolve::{try_get_color, try_get_from_name};

/// Prefix marking a named color in the two-token ARGB form
const NAMED_COLOR_PREFIX: &str = "Color.";

/// Characters dropped from HSV/HSL text (float and double literal suffixes)
const FLOAT_SUFFIXES: [char; 4] = ['f', 'F', 'd', 'D'];

fn parse_int<T>(token: &str) -> Result<T>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    token.trim().parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::out_of_range(token.trim()),
        _ => ParseError::malformed(token),
    })
}

/// A signed integer that must fit in a channel; `-0` is accepted as 0
fn parse_byte(token: &str) -> Result<u8> {
    let value = parse_int::<i32>(token)?;
    u8::try_from(value).map_err(|_| ParseError::out_of_range(value))
}

/// A float token; `NaN` is rejected, infinities are left to the converters
fn parse_float(token: &str) -> Result<f64> {
    match token.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(ParseError::malformed(token)),
    }
}

fn parse_floats<const N: usize>(parts: &[&str]) -> Result<[f64; N]> {
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = parse_float(part)?;
    }
    Ok(out)
}

/// Parse a signed base-10 integer and resolve its hex form.
///
/// `16711680` becomes `#FF0000`. Negative values use their two's complement
/// bits, so `-1` is `#FFFFFFFF`. Values with fewer than three hex digits
/// (such as `255`, `#FF`) are not valid hex colors and fail.
pub fn try_get_from_int(text: &str) -> Result<Color> {
    let value = parse_int::<i32>(text)?;
    try_get_color(&format!("#{value:X}"))
}

/// Parse an unsigned base-10 integer and resolve its hex form
pub fn try_get_from_uint(text: &str) -> Result<Color> {
    let value = parse_int::<u32>(text)?;
    try_get_color(&format!("#{value:X}"))
}

/// Parse an ARGB descriptor with 1, 2, 3 or 4 comma-separated tokens.
///
/// - `A`: one packed `0xAARRGGBB` integer (signed)
/// - `A,Color.Name`: byte alpha plus the RGB of a known color
/// - `R,G,B`: three channels, opaque
/// - `A,R,G,B`: four bytes
pub fn try_get_argb_color(text: &str) -> Result<Color> {
    let parts: Vec<&str> = text.split(',').collect();

    if let [alpha, last] = parts.as_slice() {
        if let Some(name) = last.trim().strip_prefix(NAMED_COLOR_PREFIX) {
            let inner = try_get_from_name(name)?;
            return Ok(inner.with_alpha(parse_byte(alpha)?));
        }
    }

    match parts.as_slice() {
        [packed] => Ok(Color::from_argb(parse_int::<i32>(packed)? as u32)),
        [r, g, b] => Ok(Color::rgb(
            parse_byte(r)?,
            parse_byte(g)?,
            parse_byte(b)?,
        )),
        [a, r, g, b] => Ok(Color::new(
            parse_byte(a)?,
            parse_byte(r)?,
            parse_byte(g)?,
            parse_byte(b)?,
        )),
        _ => Err(ParseError::WrongArity {
            expected: "1, 3 or 4",
            found: parts.len(),
        }),
    }
}

/// Parse exactly three bytes as an opaque `R,G,B` color
pub fn try_get_rgb_color(text: &str) -> Result<Color> {
    let parts: Vec<&str> = text.split(',').collect();

    match parts.as_slice() {
        [r, g, b] => Ok(Color::rgb(parse_byte(r)?, parse_byte(g)?, parse_byte(b)?)),
        _ => Err(ParseError::WrongArity {
            expected: "3",
            found: parts.len(),
        }),
    }
}

/// Parse exactly four bytes in `R,G,B,A` order.
///
/// The alpha comes last in the text but first in the resulting [`Color`].
pub fn try_get_rgba_color(text: &str) -> Result<Color> {
    let parts: Vec<&str> = text.split(',').collect();

    match parts.as_slice() {
        [r, g, b, a] => Ok(Color::new(
            parse_byte(a)?,
            parse_byte(r)?,
            parse_byte(g)?,
            parse_byte(b)?,
        )),
        _ => Err(ParseError::WrongArity {
            expected: "4",
            found: parts.len(),
        }),
    }
}

/// Shared HSV/HSL tokenizer: drop literal suffixes, split, parse.
///
/// Returns `None` for token counts other than 3 or 4. The fourth value, when
/// present, is an alpha fraction.
fn parse_cylindrical(text: &str) -> Option<Result<([f64; 3], Alpha)>> {
    let cleaned: String = text.chars().filter(|c| !FLOAT_SUFFIXES.contains(c)).collect();
    let parts: Vec<&str> = cleaned.split(',').collect();

    match parts.len() {
        3 => Some(parse_floats::<3>(&parts).map(|hsx| (hsx, Alpha::Byte(u8::MAX)))),
        4 => Some(
            parse_floats::<4>(&parts)
                .map(|[h, s, x, a]| ([h, s, x], Alpha::Fraction(a))),
        ),
        found => {
            // Reported as success with the default color; callers rely on it
            log::trace!("hsv/hsl text '{text}' has {found} tokens, using the default color");
            None
        }
    }
}

/// Parse `H,S,V` or `H,S,V,A` (alpha as a [0, 1] fraction).
///
/// Float suffixes `f`/`d` are tolerated (`0,1,1,0.5f`). A token count other
/// than 3 or 4 yields `Ok(Color::default())`, not an error.
pub fn try_get_hsva_color(text: &str) -> Result<Color> {
    match parse_cylindrical(text) {
        Some(parsed) => {
            let ([h, s, v], alpha) = parsed?;
            checked_hsva_to_color(h, s, v, alpha).ok_or_else(|| {
                ParseError::out_of_range(format!("hsv({h}, {s}, {v})"))
            })
        }
        None => Ok(Color::default()),
    }
}

/// Parse `H,S,L` or `H,S,L,A` (alpha as a [0, 1] fraction).
///
/// Same tokenization and arity fallthrough as [`try_get_hsva_color`]. Values
/// are clamped by the conversion, so only malformed numbers fail.
pub fn try_get_hsla_color(text: &str) -> Result<Color> {
    match parse_cylindrical(text) {
        Some(parsed) => {
            let ([h, s, l], alpha) = parsed?;
            Ok(hsla_to_color(h, s, l, alpha))
        }
        None => Ok(Color::default()),
    }
}
