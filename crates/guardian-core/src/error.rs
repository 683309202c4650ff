//! # Error Types
//!
//! Errors raised while parsing the closed vocabularies defined in this crate.
//! Tracker construction errors live in `guardian-tracker`.

use thiserror::Error;

/// Top-level error type for the core vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardianError {
    /// A slug did not name any member of the expected enumeration.
    #[error("unknown {kind}: {value:?}")]
    UnknownValue {
        /// Which enumeration was being parsed (e.g. "category").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// An entry id was empty.
    #[error("entry id must not be empty")]
    EmptyEntryId,
}

impl GuardianError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownValue {
            kind,
            value: value.to_string(),
        }
    }
}
