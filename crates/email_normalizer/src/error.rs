use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Why a raw string could not be split into a local part and a domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedReason {
    /// No `@` in the input
    MissingSeparator,
    /// More than one `@` in the input
    MultipleSeparators,
    /// Nothing after the `@`
    EmptyDomain,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            MalformedReason::MissingSeparator => "missing '@' separator",
            MalformedReason::MultipleSeparators => "more than one '@' separator",
            MalformedReason::EmptyDomain => "empty domain part",
        };
        f.write_str(reason)
    }
}

/// Raised when an input lacks the `local@domain` structure.
///
/// This is the only failure a normalization pass can produce, and it aborts
/// the whole pass: there are no partial counts.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Malformed email address {input:?}: {reason}")]
pub struct MalformedEmail {
    pub input: String,
    pub reason: MalformedReason,
}

impl MalformedEmail {
    pub(crate) fn new(input: &str, reason: MalformedReason) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Result type alias using MalformedEmail
pub type Result<T> = std::result::Result<T, MalformedEmail>;
