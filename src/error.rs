//! Error types for SDK version construction and parsing.
//!
//! Each variant names the offending input and the constraint it violated so
//! that build tooling can surface the message to users unchanged.

use thiserror::Error;

/// Errors arising from invalid SDK version inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdkVersionError {
    /// A required constructor input was absent.
    #[error("missing required argument `{argument}`")]
    InvalidArgument {
        /// Name of the absent argument.
        argument: &'static str,
    },

    /// Text could not be parsed as a dotted-decimal SDK version.
    #[error("invalid SDK version \"{input}\": {reason}")]
    Format {
        /// The rejected text, or an empty string when the text was absent.
        input: String,
        /// Description of the parse failure.
        reason: String,
    },
}

impl SdkVersionError {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        Self::Format {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Result type alias using [`SdkVersionError`].
pub type Result<T> = std::result::Result<T, SdkVersionError>;
