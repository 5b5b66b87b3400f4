//! # huekit - color descriptor parsing
//!
//! Turns author-supplied color text into ARGB values, and converts between
//! RGB and the HSB/HSL models.
//!
//! ## Grammars
//!
//! - Hex: `#FF0000`, `#80FF0000`, `#F00`
//! - Named: `red`, `Rebecca Purple`, `ControlColor`
//! - Packed integers: `16711680`
//! - Comma lists: `255,0,0`, `128,255,0,0`, `255,Color.Red`, `0,128,255,64`
//! - HSV/HSL: `0,1,1`, `0,1,1,0.5f`, `120,0.5,0.5,1d`
//!
//! ## Two tiers
//!
//! The `try_get_*` functions are strict and return [`Result`]. The
//! `get_color*` functions are lenient: they never fail and substitute
//! `None` or a transparent color instead.
//!
//! ## Quick Start
//!
//! ```
//! use huekit_core::{Color, get_color_with_opacity, rgb_to_hsl, try_get_rgba_color};
//!
//! let c = try_get_rgba_color("255,0,0,128").unwrap();
//! assert_eq!(c, Color::new(128, 255, 0, 0));
//!
//! let hsl = rgb_to_hsl(c);
//! assert_eq!(hsl.hue, 0.0);
//!
//! let fallback = get_color_with_opacity("not a color", 0.5);
//! assert_eq!(fallback.color, Color::TRANSPARENT);
//! ```

pub mod color;
pub mod convert;
pub mod error;
pub mod math;
pub mod named;
pub mod parse;

pub use color::Color;
pub use convert::{
    Alpha, Hsb, Hsl, checked_hsva_to_color, hsla_to_color, hsva_to_color, rgb_to_hsb, rgb_to_hsl,
};
pub use error::{ParseError, Result};
pub use math::{TOLERANCE, rationalize_opacity};
pub use parse::{
    ColorFormat, ColorWithOpacity, get_color, get_color_with_opacity, parse_hex, try_get_argb_color,
    try_get_color, try_get_from_int, try_get_from_name, try_get_from_uint, try_get_hex_color,
    try_get_hsla_color, try_get_hsva_color, try_get_rgb_color, try_get_rgba_color, try_parse_as,
};

/// Version of huekit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
