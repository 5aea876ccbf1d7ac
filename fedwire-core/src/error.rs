/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 9/2/26
******************************************************************************/

//! Error types for the FEDWire record engine.
//!
//! This module provides the error taxonomy shared across all fedwire crates,
//! built on `thiserror`:
//! - [`FieldErrorKind`]: the closed set of subfield violation kinds
//! - [`FieldError`]: a violation attributed to a named subfield
//! - [`RecordError`]: frame-level failures for a single tagged record
//! - [`ReadError`]: stream-level failures annotated with input context
//!
//! Every type is `Clone + PartialEq` so a `Reader` can cache its first error
//! and replay it verbatim on subsequent reads.

use std::fmt;
use thiserror::Error;

/// The closed set of subfield violation kinds emitted by the engine.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    /// A required subfield is empty.
    #[error("is a required field")]
    FieldRequired,

    /// Content falls outside the FEDWire alphanumeric character set.
    #[error("has non alphanumeric characters")]
    NonAlphanumeric,

    /// Content contains characters other than ASCII digits.
    #[error("is not numeric")]
    NonNumeric,

    /// Content contains characters other than digits and amount separators.
    #[error("is not a valid amount")]
    NonAmount,

    /// The input ran out mid-subfield, or the content cannot fill the
    /// declared width.
    #[error("is not a valid length")]
    ValidLength,

    /// A `*` delimiter was expected at the subfield boundary and not found.
    #[error("must end with a delimiter")]
    RequireDelimiter,

    /// Content is not a member of the identification code enumeration.
    #[error("is not a valid identification code")]
    IdentificationCode,

    /// Content is not a member of the local instrument code enumeration.
    #[error("is not a valid local instrument code")]
    LocalInstrumentCode,

    /// A subfield that must be empty was set, or a dependent subfield was
    /// set without its counterpart.
    #[error("is an invalid property")]
    InvalidProperty,

    /// The record's tag does not match the catalog tag for its type.
    #[error("is not a valid tag for this record type")]
    ValidTagForType,
}

/// A violation attributed to a named subfield.
///
/// Carries the subfield name (`"tag"` for tag-identity failures), the
/// taxonomy kind, and the offending value where informative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending subfield, as declared in the record catalog.
    pub field: &'static str,
    /// The violation kind.
    pub kind: FieldErrorKind,
    /// The offending value, when it adds information.
    pub value: Option<String>,
}

impl FieldError {
    /// Creates a field error without an attached value.
    ///
    /// # Arguments
    /// * `field` - The catalog name of the subfield
    /// * `kind` - The violation kind
    #[must_use]
    pub const fn new(field: &'static str, kind: FieldErrorKind) -> Self {
        Self {
            field,
            kind,
            value: None,
        }
    }

    /// Creates a field error carrying the offending value.
    ///
    /// # Arguments
    /// * `field` - The catalog name of the subfield
    /// * `kind` - The violation kind
    /// * `value` - The offending content
    #[must_use]
    pub fn with_value(field: &'static str, kind: FieldErrorKind, value: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            value: Some(value.into()),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {:?} {}", self.field, value, self.kind),
            None => write!(f, "{} {}", self.field, self.kind),
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Frame-level failures for a single tagged record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A subfield failed a structural or semantic check.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// The frame is shorter than the minimum admissible for its tag.
    #[error("must be at least {min} characters and found {got}")]
    TagMinLength {
        /// Minimum frame length in characters.
        min: usize,
        /// Observed frame length in characters.
        got: usize,
    },

    /// The frame has residue after the last declared subfield.
    #[error("exceeds the maximum length for its tag: {cause}")]
    TagMaxLength {
        /// Description of the length mismatch.
        cause: String,
    },
}

impl RecordError {
    /// Creates a minimum-length violation.
    ///
    /// # Arguments
    /// * `min` - Minimum frame length in characters
    /// * `got` - Observed frame length in characters
    #[must_use]
    pub const fn min_length(min: usize, got: usize) -> Self {
        Self::TagMinLength { min, got }
    }

    /// Creates a maximum-length violation with a descriptive cause.
    ///
    /// # Arguments
    /// * `cause` - Description of the length mismatch
    #[must_use]
    pub fn max_length(cause: impl Into<String>) -> Self {
        Self::TagMaxLength {
            cause: cause.into(),
        }
    }
}

/// Stream-level failures produced by a `Reader`.
///
/// Record parse and validation failures are wrapped with the line number and
/// record name so a consumer can locate the offending input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// A record failed to parse or validate.
    #[error("line {line} record {record}: {source}")]
    Parse {
        /// One-based input line number.
        line: usize,
        /// Catalog name of the record under parse.
        record: &'static str,
        /// The underlying record failure.
        #[source]
        source: RecordError,
    },

    /// A tag literal with no entry in the dispatch table.
    #[error("line {line}: unknown record tag {tag:?}")]
    UnknownTag {
        /// One-based input line number.
        line: usize,
        /// The unrecognized tag literal.
        tag: String,
    },

    /// A second record for a slot that is already occupied.
    #[error("line {line}: duplicate {record} record")]
    DuplicateRecord {
        /// One-based input line number.
        line: usize,
        /// Catalog name of the duplicated record.
        record: &'static str,
    },

    /// An I/O failure from the underlying stream.
    ///
    /// Stored as a message so the error stays `Clone` for replay.
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ReadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display_with_value() {
        let err = FieldError::with_value("Name", FieldErrorKind::NonAlphanumeric, "®");
        assert_eq!(err.to_string(), "Name \"®\" has non alphanumeric characters");
    }

    #[test]
    fn test_field_error_display_without_value() {
        let err = FieldError::new("Identifier", FieldErrorKind::FieldRequired);
        assert_eq!(err.to_string(), "Identifier is a required field");
    }

    #[test]
    fn test_record_error_min_length() {
        let err = RecordError::min_length(7, 6);
        assert_eq!(err.to_string(), "must be at least 7 characters and found 6");
    }

    #[test]
    fn test_record_error_from_field_error() {
        let field_err = FieldError::new("Amount", FieldErrorKind::NonAmount);
        let record_err: RecordError = field_err.clone().into();
        assert!(matches!(record_err, RecordError::Field(e) if e == field_err));
    }

    #[test]
    fn test_read_error_wraps_record_error() {
        let err = ReadError::Parse {
            line: 1,
            record: "ExchangeRate",
            source: RecordError::Field(FieldError::new(
                "ExchangeRate",
                FieldErrorKind::RequireDelimiter,
            )),
        };
        assert_eq!(
            err.to_string(),
            "line 1 record ExchangeRate: ExchangeRate must end with a delimiter"
        );
    }

    #[test]
    fn test_read_error_clone_replays_equal() {
        let err = ReadError::UnknownTag {
            line: 3,
            tag: "{9999}".to_string(),
        };
        assert_eq!(err.clone(), err);
    }
}
