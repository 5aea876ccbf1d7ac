/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 9/2/26
******************************************************************************/

//! Character-class validators for FEDWire subfield content.
//!
//! Each checker is a pure function over a string slice that either succeeds
//! or returns a [`FieldError`] naming the offending subfield. The checkers
//! operate on characters, never bytes, so a multi-byte rune such as `®` is
//! rejected rather than miscounted.
//!
//! Empty content always passes a class check; presence is a separate concern
//! handled by [`required`].

use crate::error::{FieldError, FieldErrorKind};

/// Punctuation accepted in alphanumeric subfields, in addition to ASCII
/// letters, digits, and space.
///
/// `*` is excluded because it delimits subfields, and `{` / `}` are excluded
/// because they frame record tags; keeping them out of content makes record
/// boundary scanning unambiguous.
pub const ALPHANUMERIC_PUNCTUATION: &str = "!\"#$%&'()+,-./:;?@[]_|~";

/// Separators accepted in amount subfields alongside ASCII digits.
pub const AMOUNT_SEPARATORS: &str = ",.";

/// Returns true if `c` belongs to the FEDWire alphanumeric character set.
#[inline]
#[must_use]
pub fn is_alphanumeric_char(c: char) -> bool {
    c == ' ' || c.is_ascii_alphanumeric() || ALPHANUMERIC_PUNCTUATION.contains(c)
}

/// Checks content against the FEDWire alphanumeric character set.
///
/// # Arguments
/// * `field` - The catalog name of the subfield, used in the error
/// * `value` - The content to check
///
/// # Errors
/// Returns `FieldErrorKind::NonAlphanumeric` carrying the offending value.
pub fn alphanumeric(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.chars().all(is_alphanumeric_char) {
        Ok(())
    } else {
        Err(FieldError::with_value(
            field,
            FieldErrorKind::NonAlphanumeric,
            value,
        ))
    }
}

/// Checks that content consists of ASCII digits only.
///
/// # Arguments
/// * `field` - The catalog name of the subfield, used in the error
/// * `value` - The content to check
///
/// # Errors
/// Returns `FieldErrorKind::NonNumeric` carrying the offending value.
pub fn numeric(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(FieldError::with_value(
            field,
            FieldErrorKind::NonNumeric,
            value,
        ))
    }
}

/// Checks that content is a legal amount: ASCII digits plus the group and
/// decimal separators.
///
/// # Arguments
/// * `field` - The catalog name of the subfield, used in the error
/// * `value` - The content to check
///
/// # Errors
/// Returns `FieldErrorKind::NonAmount` carrying the offending value.
pub fn amount(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value
        .chars()
        .all(|c| c.is_ascii_digit() || AMOUNT_SEPARATORS.contains(c))
    {
        Ok(())
    } else {
        Err(FieldError::with_value(
            field,
            FieldErrorKind::NonAmount,
            value,
        ))
    }
}

/// Checks that a required subfield is non-empty.
///
/// # Arguments
/// * `field` - The catalog name of the subfield, used in the error
/// * `value` - The content to check
///
/// # Errors
/// Returns `FieldErrorKind::FieldRequired`.
pub fn required(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::new(field, FieldErrorKind::FieldRequired))
    } else {
        Ok(())
    }
}
