//! Accuracy measurement
//!
//! Per-channel absolute differences between two color sets, plus a
//! circular distance for hues.

use huekit_core::Color;

/// Statistics from a channel comparison
#[derive(Debug, Clone, Default)]
pub struct ChannelStats {
    /// Mean absolute channel difference
    pub mean: f64,
    /// Largest absolute channel difference
    pub max: u8,
    /// Number of colors that differ in any channel
    pub mismatched: usize,
    /// Number of colors compared
    pub count: usize,
}

impl ChannelStats {
    /// Check if every color matched exactly
    pub fn is_exact(&self) -> bool {
        self.max == 0
    }

    /// Check if no channel is off by more than `tolerance`
    pub fn within(&self, tolerance: u8) -> bool {
        self.max <= tolerance
    }
}

/// Largest absolute R, G or B difference between two colors
pub fn max_channel_diff(a: Color, b: Color) -> u8 {
    a.r.abs_diff(b.r).max(a.g.abs_diff(b.g)).max(a.b.abs_diff(b.b))
}

/// Compare two equally sized color sets channel by channel.
///
/// Alpha is ignored.
pub fn compare_colors(expected: &[Color], actual: &[Color]) -> ChannelStats {
    assert_eq!(expected.len(), actual.len(), "color set length mismatch");

    if expected.is_empty() {
        return ChannelStats::default();
    }

    let mut sum = 0u64;
    let mut max = 0u8;
    let mut mismatched = 0usize;

    for (e, a) in expected.iter().zip(actual) {
        let diffs = [e.r.abs_diff(a.r), e.g.abs_diff(a.g), e.b.abs_diff(a.b)];
        sum += diffs.iter().map(|d| u64::from(*d)).sum::<u64>();

        let worst = max_channel_diff(*e, *a);
        max = max.max(worst);
        if worst > 0 {
            mismatched += 1;
        }
    }

    ChannelStats {
        mean: sum as f64 / (expected.len() * 3) as f64,
        max,
        mismatched,
        count: expected.len(),
    }
}

/// Distance between two hues in degrees, accounting for wrap-around
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}
