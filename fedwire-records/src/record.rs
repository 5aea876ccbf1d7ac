/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 10/2/26
******************************************************************************/

//! The record abstraction shared by every catalog entry.
//!
//! Each FEDWire record type implements [`WireRecord`]: a declared tag
//! literal, a catalog name for error context, a parser over a full frame,
//! a validator, and a formatter for both output modes. The canonical
//! fixed-width form is also exposed through `Display`.

use fedwire_codec::char_index;
use fedwire_core::error::{FieldError, FieldErrorKind, RecordError};
use fedwire_core::types::{FormatOptions, TAG_LENGTH};

/// A typed FEDWire record.
pub trait WireRecord: Sized {
    /// The six-character tag literal declared for this record type.
    const TAG: &'static str;

    /// The catalog name used in Reader error context.
    const NAME: &'static str;

    /// Parses a full record frame, tag included.
    ///
    /// The frame must be exactly one record: residue past the last declared
    /// subfield is rejected.
    ///
    /// # Errors
    /// `TagMinLength` / `TagMaxLength` for inadmissible frame lengths, or a
    /// `FieldError` from the subfield codec.
    fn parse(record: &str) -> Result<Self, RecordError>;

    /// Validates the record against its catalog rules.
    ///
    /// Checks run in order: tag identity, character classes, required
    /// presence, cross-field rules. The first failure is returned.
    ///
    /// # Errors
    /// The first [`FieldError`] encountered.
    fn validate(&self) -> Result<(), FieldError>;

    /// Serializes the record with the given options.
    fn format(&self, options: FormatOptions) -> String;
}

/// Checks the frame against the record's minimum length and splits off the
/// tag literal.
///
/// # Arguments
/// * `record` - The full frame, tag included
/// * `min` - Minimum admissible frame length in characters (at least the
///   tag length)
///
/// # Errors
/// `TagMinLength` when the frame is shorter than `min` characters.
pub(crate) fn open_frame(record: &str, min: usize) -> Result<(&str, &str), RecordError> {
    let got = record.chars().count();
    if got < min {
        return Err(RecordError::min_length(min, got));
    }
    // min >= TAG_LENGTH for every catalog entry, so the boundary exists
    let split = char_index(record, TAG_LENGTH).unwrap_or(record.len());
    Ok((&record[..split], &record[split..]))
}

/// Checks that a record's tag matches its catalog declaration.
///
/// # Errors
/// `ValidTagForType` carrying the offending tag.
pub(crate) fn check_tag<T: WireRecord>(tag: &str) -> Result<(), FieldError> {
    if tag == T::TAG {
        Ok(())
    } else {
        Err(FieldError::with_value(
            "tag",
            FieldErrorKind::ValidTagForType,
            tag,
        ))
    }
}

/// Implements `Display` (the canonical fixed-width form) for record types.
macro_rules! impl_wire_display {
    ($($ty:ident),+ $(,)?) => {$(
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&crate::record::WireRecord::format(
                    self,
                    fedwire_core::types::FormatOptions::fixed(),
                ))
            }
        }
    )+};
}
pub(crate) use impl_wire_display;
