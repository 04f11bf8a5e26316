//! Error types for registry construction and parsing.

use thiserror::Error;

/// Placeholder reported as the value when a required value is missing.
pub const NONE_GIVEN: &str = "<none given>";

/// Errors that abort a parse.
///
/// Handlers invoked before the failing token keep their effects; nothing is
/// rolled back.
#[derive(Debug, Error)]
pub enum ParseError {
    /// An option token matched no registered name.
    #[error("unknown option encountered while parsing command line: '{0}'")]
    NoSuchOption(String),

    /// A value was missing, too short for a fixed-length type, or no
    /// character of it was accepted by the type's character class.
    #[error("unintelligible value provided for option '{option}' (expecting type {expected}): {value}")]
    BadOptionValue {
        option: String,
        expected: String,
        value: String,
    },

    /// The option's handler rejected a successfully extracted value.
    #[error("error encountered when processing option '{option}' with value '{value}'")]
    HandlerFailure {
        option: String,
        value: String,
        #[source]
        source: HandlerFailure,
    },

    /// `-h`/`--help` was given and the help policy returns instead of
    /// exiting. Carries the rendered help text.
    #[error("help requested")]
    HelpRequested(String),
}

impl ParseError {
    /// Returns the option name carried by the error, if any.
    pub fn option(&self) -> Option<&str> {
        match self {
            ParseError::NoSuchOption(name) => Some(name),
            ParseError::BadOptionValue { option, .. } | ParseError::HandlerFailure { option, .. } => {
                Some(option)
            }
            ParseError::HelpRequested(_) => None,
        }
    }
}

/// Rejection returned by an option handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct HandlerFailure {
    reason: String,
}

impl HandlerFailure {
    /// Creates a failure with a free-form reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Creates the failure reported when `raw` does not convert to `expected`.
    pub fn conversion(expected: &str, raw: &str) -> Self {
        Self::new(format!("cannot convert '{}' to {}", raw, expected))
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Errors raised while building a [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two descriptors claim the same option string.
    #[error("option '{0}' is registered more than once")]
    DuplicateName(String),

    /// A name was empty once its leading dashes were removed.
    #[error("option names must not be empty")]
    EmptyName,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn no_such_option_message() {
        let err = ParseError::NoSuchOption("z".into());
        assert_eq!(
            err.to_string(),
            "unknown option encountered while parsing command line: 'z'"
        );
        assert_eq!(err.option(), Some("z"));
    }

    #[test]
    fn bad_value_message_names_type_and_value() {
        let err = ParseError::BadOptionValue {
            option: "i".into(),
            expected: "i32".into(),
            value: NONE_GIVEN.into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'i'"));
        assert!(msg.contains("i32"));
        assert!(msg.ends_with("<none given>"));
    }

    #[test]
    fn handler_failure_keeps_source() {
        let err = ParseError::HandlerFailure {
            option: "n".into(),
            value: "abc".into(),
            source: HandlerFailure::conversion("u8", "abc"),
        };
        assert_eq!(
            err.to_string(),
            "error encountered when processing option 'n' with value 'abc'"
        );
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("cannot convert 'abc' to u8"));
    }

    #[test]
    fn help_requested_has_no_option() {
        assert_eq!(ParseError::HelpRequested(String::new()).option(), None);
    }
}
