//! Error types for the Risus domain layer
//!
//! Decoding is the only fallible path: encode is pure formatting over
//! already-valid in-memory data, and missing keys on update/remove are no-ops.

use thiserror::Error;

/// Unified error type for Risus operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RisusError {
    /// The top-level record has fewer than two `;`-delimited fields
    #[error("Error unpacking character: {0}")]
    MalformedCharacterRecord(String),

    /// A cliche sub-record could not be split into its four positional fields
    #[error("Trouble unpacking cliche: {0}")]
    MalformedClicheRecord(String),

    /// A die tag outside the standard set was parsed strictly
    #[error("Unknown funky die: {0}")]
    UnknownFunkyDie(String),
}

impl RisusError {
    /// Creates a malformed character record error carrying the offending text.
    ///
    /// # Example
    /// ```
    /// use risus_domain::RisusError;
    ///
    /// let err = RisusError::malformed_character("OnlyOneField");
    /// assert_eq!(err.to_string(), "Error unpacking character: OnlyOneField");
    /// ```
    pub fn malformed_character(text: impl Into<String>) -> Self {
        Self::MalformedCharacterRecord(text.into())
    }

    /// Creates a malformed cliche record error carrying the offending text.
    pub fn malformed_cliche(text: impl Into<String>) -> Self {
        Self::MalformedClicheRecord(text.into())
    }

    /// Create an unknown funky die error
    pub fn unknown_funky_die(tag: impl Into<String>) -> Self {
        Self::UnknownFunkyDie(tag.into())
    }

    /// Returns true for errors raised while decoding packed text.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedCharacterRecord(_) | Self::MalformedClicheRecord(_)
        )
    }
}
