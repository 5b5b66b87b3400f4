//! Hex color strings
//!
//! Accepted forms, alpha first when present:
//! * `#RGB`
//! * `#ARGB`
//! * `#RRGGBB`
//! * `#AARRGGBB`
//!
//! Short forms repeat each nibble (`#F80` is `#FF8800`). Digits are
//! case-insensitive and surrounding whitespace is ignored.

use crate::color::Color;
use crate::error::{ParseError, Result};

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse a `#`-prefixed hex color
pub fn parse_hex(text: &str) -> Result<Color> {
    let trimmed = text.trim();
    let invalid = || ParseError::InvalidHex(trimmed.to_string());

    let digits = trimmed.strip_prefix('#').ok_or_else(invalid)?;
    let nibbles = digits
        .bytes()
        .map(nibble)
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(invalid)?;

    let short = |n: u8| n << 4 | n;
    let long = |hi: u8, lo: u8| hi << 4 | lo;

    let color = match nibbles.as_slice() {
        [r, g, b] => Color::rgb(short(*r), short(*g), short(*b)),
        [a, r, g, b] => Color::new(short(*a), short(*r), short(*g), short(*b)),
        [r1, r2, g1, g2, b1, b2] => Color::rgb(long(*r1, *r2), long(*g1, *g2), long(*b1, *b2)),
        [a1, a2, r1, r2, g1, g2, b1, b2] => Color::new(
            long(*a1, *a2),
            long(*r1, *r2),
            long(*g1, *g2),
            long(*b1, *b2),
        ),
        _ => return Err(invalid()),
    };

    Ok(color)
}

/// Parse non-blank text directly as a hex color
pub fn try_get_hex_color(text: &str) -> Result<Color> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    parse_hex(text)
}
