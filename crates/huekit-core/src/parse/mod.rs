//! Color descriptor parsers
//!
//! One stateless routine per grammar. Picking the grammar for a given piece
//! of text is the caller's job; [`ColorFormat`] and [`try_parse_as`] exist so
//! that choice can be stored as data (for example in a settings file).
//!
//! | Format  | Example               |
//! |---------|-----------------------|
//! | `hex`   | `#80FF0000`           |
//! | `named` | `Rebecca Purple`      |
//! | `int`   | `16711680`            |
//! | `uint`  | `4294901760`          |
//! | `argb`  | `128,255,0,0`         |
//! | `rgb`   | `0,128,255`           |
//! | `rgba`  | `0,128,255,64`        |
//! | `hsva`  | `0,1,1,0.5f`          |
//! | `hsla`  | `120,0.5,0.5,1d`      |

pub mod hex;
pub mod numeric;
pub mod resolve;

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::{ParseError, Result};

pub use hex::{parse_hex, try_get_hex_color};
pub use numeric::{
    try_get_argb_color, try_get_from_int, try_get_from_uint, try_get_hsla_color,
    try_get_hsva_color, try_get_rgb_color, try_get_rgba_color,
};
pub use resolve::{
    ColorWithOpacity, get_color, get_color_with_opacity, try_get_color, try_get_from_name,
};

/// Input grammar for a color descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorFormat {
    /// `#RGB`, `#ARGB`, `#RRGGBB`, `#AARRGGBB`
    Hex,
    /// Named color or hex, including platform system colors
    Named,
    /// Signed packed integer
    Int,
    /// Unsigned packed integer
    Uint,
    /// 1, 2, 3 or 4 token ARGB
    Argb,
    /// `R,G,B`
    Rgb,
    /// `R,G,B,A`
    Rgba,
    /// `H,S,V[,A]`
    Hsva,
    /// `H,S,L[,A]`
    Hsla,
}

impl ColorFormat {
    /// Every format, in declaration order
    pub const ALL: [ColorFormat; 9] = [
        ColorFormat::Hex,
        ColorFormat::Named,
        ColorFormat::Int,
        ColorFormat::Uint,
        ColorFormat::Argb,
        ColorFormat::Rgb,
        ColorFormat::Rgba,
        ColorFormat::Hsva,
        ColorFormat::Hsla,
    ];

    /// Lowercase name used by `Display` and `FromStr`
    pub fn name(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Named => "named",
            ColorFormat::Int => "int",
            ColorFormat::Uint => "uint",
            ColorFormat::Argb => "argb",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Rgba => "rgba",
            ColorFormat::Hsva => "hsva",
            ColorFormat::Hsla => "hsla",
        }
    }

    /// Parse text with this grammar
    pub fn parse(&self, text: &str) -> Result<Color> {
        try_parse_as(*self, text)
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ColorFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownFormat(wanted.to_string()))
    }
}

/// Parse text with a caller-chosen grammar
pub fn try_parse_as(format: ColorFormat, text: &str) -> Result<Color> {
    match format {
        ColorFormat::Hex => try_get_hex_color(text),
        ColorFormat::Named => try_get_color(text),
        ColorFormat::Int => try_get_from_int(text),
        ColorFormat::Uint => try_get_from_uint(text),
        ColorFormat::Argb => try_get_argb_color(text),
        ColorFormat::Rgb => try_get_rgb_color(text),
        ColorFormat::Rgba => try_get_rgba_color(text),
        ColorFormat::Hsva => try_get_hsva_color(text),
        ColorFormat::Hsla => try_get_hsla_color(text),
    }
}
