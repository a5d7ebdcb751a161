//! Crate-level error types.

use std::fmt;

/// Errors produced by the aquaria crate.
///
/// Only setup paths fail. Per-frame operations (camera moves, zoom, feeding
/// updates) never return errors: rejected moves and ignored zoom requests
/// are policy outcomes, not failures.
#[derive(Debug)]
pub enum AquariaError {
    /// Configuration rejected during validation.
    Config(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl AquariaError {
    /// Shorthand for building a [`AquariaError::Config`] from any message.
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl fmt::Display for AquariaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for AquariaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AquariaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn config_error_mentions_reason() {
        let err = AquariaError::config("pitch limits inverted");
        assert_eq!(
            err.to_string(),
            "invalid configuration: pitch limits inverted"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn io_error_is_exposed_as_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AquariaError::from(io);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }
}
