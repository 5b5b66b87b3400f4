//! Grammar fixture management
//!
//! Fixtures are JSON arrays of cases. Each case names a grammar, gives the
//! input text and either the expected color or `null` for an expected
//! failure.
//!
//! ```json
//! { "format": "rgba", "input": "255,0,0,128", "expected": { "a": 128, "r": 255, "g": 0, "b": 0 } }
//! ```

use std::path::Path;

use huekit_core::{Color, ColorFormat};
use serde::Deserialize;
use thiserror::Error;

/// Errors loading a fixture file
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Fixture file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture file is not valid JSON for the case schema
    #[error("fixture parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single grammar test case
#[derive(Debug, Clone, Deserialize)]
pub struct GrammarCase {
    /// Grammar to parse with
    pub format: ColorFormat,
    /// Input text
    pub input: String,
    /// Expected color, `None` when parsing must fail
    #[serde(default)]
    pub expected: Option<Color>,
    /// Why the case exists
    #[serde(default)]
    pub note: Option<String>,
}

impl GrammarCase {
    /// Run the case, returning a description of the mismatch if any
    pub fn check(&self) -> Result<(), String> {
        let actual = self.format.parse(&self.input);
        match (&self.expected, actual) {
            (Some(expected), Ok(color)) if *expected == color => Ok(()),
            (None, Err(_)) => Ok(()),
            (expected, actual) => Err(format!(
                "{} '{}': expected {:?}, got {:?}{}",
                self.format,
                self.input,
                expected,
                actual,
                self.note
                    .as_deref()
                    .map(|n| format!(" ({n})"))
                    .unwrap_or_default()
            )),
        }
    }
}

/// Parse fixture cases from a JSON string
pub fn parse_cases(json: &str) -> Result<Vec<GrammarCase>, FixtureError> {
    Ok(serde_json::from_str(json)?)
}

/// Load fixture cases from a file
pub fn load_cases(path: impl AsRef<Path>) -> Result<Vec<GrammarCase>, FixtureError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let cases = parse_cases(&json)?;
    log::debug!("loaded {} grammar cases from {}", cases.len(), path.display());
    Ok(cases)
}
