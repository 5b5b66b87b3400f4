//! Test pattern generation
//!
//! Color sets for sweeping the converters.

use huekit_core::Color;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Hue ramp at full saturation and half lightness
    HueRamp,
    /// Grayscale ramp 0-255
    Grayscale,
    /// Random opaque colors with seed
    Random(u64),
    /// Saturated and near-saturated colors
    Saturated,
}

/// Generate `count` opaque colors for a pattern
pub fn generate_pattern(pattern: TestPattern, count: usize) -> Vec<Color> {
    match pattern {
        TestPattern::ColorCube => {
            let corners = [
                Color::rgb(0, 0, 0),
                Color::rgb(255, 0, 0),
                Color::rgb(0, 255, 0),
                Color::rgb(0, 0, 255),
                Color::rgb(255, 255, 0),
                Color::rgb(255, 0, 255),
                Color::rgb(0, 255, 255),
                Color::rgb(255, 255, 255),
            ];
            (0..count).map(|i| corners[i % corners.len()]).collect()
        }
        TestPattern::HueRamp => (0..count)
            .map(|i| {
                let hue = (i as f64 / count as f64) * 360.0;
                huekit_core::hsla_to_color(hue, 1.0, 0.5, u8::MAX)
            })
            .collect(),
        TestPattern::Grayscale => (0..count)
            .map(|i| {
                let v = ((i as f64 / count as f64) * 256.0) as u8;
                Color::rgb(v, v, v)
            })
            .collect(),
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| Color::rgb(rng.r#gen(), rng.r#gen(), rng.r#gen()))
                .collect()
        }
        TestPattern::Saturated => {
            let colors = [
                Color::rgb(255, 0, 0),
                Color::rgb(0, 255, 0),
                Color::rgb(0, 0, 255),
                Color::rgb(255, 128, 0),
                Color::rgb(128, 0, 255),
                Color::rgb(0, 255, 128),
                Color::rgb(255, 0, 128),
                Color::rgb(128, 255, 0),
            ];
            (0..count).map(|i| colors[i % colors.len()]).collect()
        }
    }
}

/// Seeded `[hue, saturation, value]` samples in their canonical domains
pub fn random_cylindrical(seed: u64, count: usize) -> Vec<[f64; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            [
                rng.gen_range(0.0..360.0),
                rng.gen_range(0.0..=1.0),
                rng.gen_range(0.0..=1.0),
            ]
        })
        .collect()
}
