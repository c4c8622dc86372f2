//! Error types for schemagen
//!
//! Identifier and locator failures are always surfaced to the caller.
//! The ignored-fields rule never produces an error: schema/model drift is
//! tolerated there and only logged.

use std::fmt;
use thiserror::Error;

/// Result type alias using schemagen Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for schemagen operations
#[derive(Error, Debug)]
pub enum Error {
    /// Schema id cannot be turned into a package path
    #[error("invalid schema id '{id}': {reason}")]
    InvalidIdentifier {
        /// The offending schema id
        id: String,
        /// Which rule the id broke
        reason: IdentifierIssue,
    },

    /// Source locator or URL cannot be converted
    #[error("invalid locator '{locator}': {cause}")]
    InvalidLocator {
        /// The locator or URL as given
        locator: String,
        /// Underlying conversion failure
        cause: String,
    },

    /// Resource loading error
    #[error("resource error: {0}")]
    Resource(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an identifier error
    pub fn invalid_identifier(id: impl Into<String>, reason: IdentifierIssue) -> Self {
        Error::InvalidIdentifier {
            id: id.into(),
            reason,
        }
    }

    /// Create a locator error
    pub fn invalid_locator(locator: impl Into<String>, cause: impl fmt::Display) -> Self {
        Error::InvalidLocator {
            locator: locator.into(),
            cause: cause.to_string(),
        }
    }

    /// The identifier issue, if this is an identifier error
    pub fn identifier_issue(&self) -> Option<IdentifierIssue> {
        match self {
            Error::InvalidIdentifier { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Reason a schema id was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierIssue {
    /// Contains a character from the illegal set
    IllegalSymbol,
    /// Uses more than one kind of delimiter
    MixedSymbols,
    /// Has an empty segment (strict policy only)
    EmptySegment,
}

impl IdentifierIssue {
    /// Short human readable reason
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierIssue::IllegalSymbol => "illegal split symbol",
            IdentifierIssue::MixedSymbols => "mixed split symbols",
            IdentifierIssue::EmptySegment => "empty segment between split symbols",
        }
    }
}

impl fmt::Display for IdentifierIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_identifier_display() {
        let err = Error::invalid_identifier("a.b/c", IdentifierIssue::MixedSymbols);
        let msg = format!("{}", err);
        assert!(msg.contains("a.b/c"));
        assert!(msg.contains("mixed split symbols"));
        assert_eq!(err.identifier_issue(), Some(IdentifierIssue::MixedSymbols));
    }

    #[test]
    fn test_invalid_locator_display() {
        let err = Error::invalid_locator("http://[::1", "invalid IPv6 address");
        let msg = format!("{}", err);
        assert!(msg.contains("http://[::1"));
        assert!(msg.contains("invalid IPv6 address"));
        assert_eq!(err.identifier_issue(), None);
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
