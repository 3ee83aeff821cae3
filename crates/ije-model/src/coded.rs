//! Coded values used by the death record.
//!
//! A coded observation (manner of death, marital status, ...) is stored as a
//! single [`CodedValue`] triple so that code, system and display always change
//! together. Repeated categorical answers such as race and ethnicity are kept
//! as ordered lists of [`CodedEntry`] pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A domain value expressed as (code, terminology system, display).
///
/// # Example
///
/// ```
/// use ije_model::CodedValue;
///
/// let manner = CodedValue::new("38605008", "http://snomed.info/sct", "Natural death");
/// assert_eq!(manner.code, "38605008");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodedValue {
    /// Canonical code within `system`.
    pub code: String,
    /// Terminology system URI or OID.
    pub system: String,
    /// Human-readable display.
    pub display: String,
}

impl CodedValue {
    /// Create a coded value from its three parts.
    pub fn new(
        code: impl Into<String>,
        system: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            system: system.into(),
            display: display.into(),
        }
    }
}

impl fmt::Display for CodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display, self.code)
    }
}

/// One `(display, code)` entry of a repeated categorical property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodedEntry {
    pub display: String,
    pub code: String,
}

impl CodedEntry {
    pub fn new(display: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            code: code.into(),
        }
    }

    /// True when either the display or the code matches.
    pub fn matches(&self, display: &str, code: &str) -> bool {
        self.display == display || self.code == code
    }
}
