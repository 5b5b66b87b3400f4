//! The four-channel color value
//!
//! Channels are stored in A, R, G, B order so that a slice of colors casts
//! directly to the byte layout expected by ARGB consumers.

use std::fmt;

use bytemuck::{Pod, Zeroable};

/// 8-bit ARGB color
///
/// `Color::default()` is fully transparent black, the value used wherever a
/// failed parse still has to produce a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color {
    /// Alpha (0 = transparent, 255 = opaque)
    pub a: u8,
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Color {
    /// Create a color from alpha, red, green and blue
    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create an opaque color
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(255, r, g, b)
    }

    /// Unpack a `0xAARRGGBB` value
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self { a, r, g, b }
    }

    /// Pack into a `0xAARRGGBB` value
    #[inline]
    pub const fn to_argb(&self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// Same RGB with a different alpha
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Format as `#RRGGBB` with uppercase digits. Alpha is dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Check if the color is fully opaque
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }

    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

/// Formats as `#AARRGGBB`
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.a, self.r, self.g, self.b
        )
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_argb()
    }
}

impl From<[u8; 4]> for Color {
    fn from(argb: [u8; 4]) -> Self {
        Self::new(argb[0], argb[1], argb[2], argb[3])
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        [color.a, color.r, color.g, color.b]
    }
}
