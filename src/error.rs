//! Crate-level error types.
//!
//! The event-driven core is error-free by design: degenerate projections
//! skip one actor's update, spurious releases are no-ops, and the label
//! ownership invariant is enforced structurally. Only the options layer
//! can fail.

use std::fmt;

/// Errors produced by the nameplate crate.
#[derive(Debug)]
pub enum NameplateError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for NameplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for NameplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for NameplateError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
