//! Crate-level error types.

use std::fmt;

use crate::script::ScriptError;

/// Errors produced by the oration crate.
#[derive(Debug)]
pub enum OrationError {
    /// Malformed script tables (fail-fast at construction).
    Script(ScriptError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for OrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Script(e) => write!(f, "script error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for OrationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Script(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<ScriptError> for OrationError {
    fn from(e: ScriptError) -> Self {
        Self::Script(e)
    }
}

impl From<std::io::Error> for OrationError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
