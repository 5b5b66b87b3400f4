//! # huekit-tests
//!
//! Parity and fixture testing for huekit.
//!
//! This crate provides:
//! - Reference HSV/HSL conversions backed by the `palette` crate
//! - Channel and component difference statistics
//! - Seeded test color patterns
//! - JSON grammar fixtures (input text plus expected outcome)
//!
//! ## Test Categories
//!
//! 1. **Palette parity**: forward and reverse conversions against palette
//! 2. **Grammar fixtures**: every parser against a table of known inputs
//! 3. **Round trips**: RGB -> HSL/HSB -> RGB drift
//! 4. **Named colors**: table invariants

pub mod accuracy;
pub mod fixtures;
pub mod patterns;
pub mod reference;

pub use accuracy::{ChannelStats, compare_colors, hue_distance};
pub use fixtures::{FixtureError, GrammarCase, load_cases};
pub use patterns::{TestPattern, generate_pattern};

/// Install a test logger once; later calls are no-ops
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
