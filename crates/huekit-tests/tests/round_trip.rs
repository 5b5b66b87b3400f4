//! Round-trip drift
//!
//! RGB -> HSL -> RGB and RGB -> HSB -> RGB are approximate: every HSL/HSB
//! component is rounded to two decimals on the way out, so channels can
//! move. Representative colors come back within one step; arbitrary colors
//! within three.

use huekit_core::{Color, rgb_to_hsb, rgb_to_hsl};
use huekit_tests::accuracy::max_channel_diff;
use huekit_tests::{TestPattern, compare_colors, generate_pattern};

const REPRESENTATIVE: [Color; 13] = [
    Color::rgb(255, 0, 0),
    Color::rgb(0, 255, 0),
    Color::rgb(0, 0, 255),
    Color::rgb(255, 255, 0),
    Color::rgb(0, 255, 255),
    Color::rgb(255, 0, 255),
    Color::rgb(255, 255, 255),
    Color::rgb(0, 0, 0),
    Color::rgb(0, 128, 255),
    Color::rgb(255, 128, 0),
    Color::rgb(128, 0, 255),
    Color::rgb(128, 128, 128),
    Color::rgb(64, 64, 64),
];

#[test]
fn test_representative_hsl_round_trip_within_one() {
    for color in REPRESENTATIVE {
        let back = rgb_to_hsl(color).to_color(color.a);
        assert!(
            max_channel_diff(color, back) <= 1,
            "{color} came back as {back}"
        );
        assert_eq!(back.a, color.a);
    }
}

#[test]
fn test_primaries_round_trip_exactly() {
    for color in &REPRESENTATIVE[..8] {
        assert_eq!(rgb_to_hsl(*color).to_color(u8::MAX), *color);
        assert_eq!(rgb_to_hsb(*color).to_color(u8::MAX), *color);
    }
}

#[test]
fn test_random_hsl_round_trip_drift_is_bounded() {
    let colors = generate_pattern(TestPattern::Random(99), 4000);
    let back: Vec<Color> = colors
        .iter()
        .map(|c| rgb_to_hsl(*c).to_color(u8::MAX))
        .collect();

    let stats = compare_colors(&colors, &back);
    eprintln!(
        "HSL round trip: max {} mean {:.4} mismatched {}/{}",
        stats.max, stats.mean, stats.mismatched, stats.count
    );
    assert!(stats.within(3));
    assert!(stats.mean < 1.5);
}

#[test]
fn test_random_hsb_round_trip_drift_is_bounded() {
    let colors = generate_pattern(TestPattern::Random(7), 4000);
    let back: Vec<Color> = colors
        .iter()
        .map(|c| rgb_to_hsb(*c).to_color(u8::MAX))
        .collect();

    let stats = compare_colors(&colors, &back);
    eprintln!(
        "HSB round trip: max {} mean {:.4} mismatched {}/{}",
        stats.max, stats.mean, stats.mismatched, stats.count
    );
    assert!(stats.within(3));
    assert!(stats.mean < 1.5);
}

#[test]
fn test_alpha_survives_round_trip() {
    let color = Color::new(77, 12, 200, 90);
    assert_eq!(rgb_to_hsl(color).to_color(color.a).a, 77);
    assert_eq!(rgb_to_hsb(color).to_color(0.5).a, 127);
}
