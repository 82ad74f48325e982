//! Crate-level error types.
//!
//! Input handling itself never fails; these cover the fallible edges
//! around it (option presets, validation, replay traces).

use std::fmt;

/// Errors produced by the orbit-gestures crate.
#[derive(Debug)]
pub enum GestureError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but describe an unusable configuration.
    InvalidOptions(String),
    /// Replay trace could not be parsed.
    TraceParse(String),
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::TraceParse(msg) => {
                write!(f, "trace parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for GestureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GestureError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
