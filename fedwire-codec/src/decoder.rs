/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 9/2/26
******************************************************************************/

//! Subfield decoder for FEDWire record frames.
//!
//! [`FieldReader`] walks the content of a single record (everything after
//! the six-character tag) and yields one subfield per call, detecting for
//! each whether it was written in fixed-width or `*`-delimited variable
//! form.
//!
//! ## Mode Detection
//!
//! A subfield of declared width W was written in variable form exactly when
//! a `*` occurs within the first W+1 characters of the unconsumed input; the
//! content is everything before that `*`. Otherwise the subfield is fixed
//! and occupies exactly W characters. Once one subfield has consumed a
//! delimiter the record is committed to variable form: a later subfield
//! without a delimiter is mixed-mode input and is rejected.
//!
//! All positions count characters, never bytes, so a multi-byte rune inside
//! a subfield cannot shift the scan off a character boundary.

use fedwire_core::error::{FieldError, FieldErrorKind, RecordError};
use memchr::memchr;

/// Byte index of the `n`-th character boundary of `s`.
///
/// Returns `Some(s.len())` when `n` equals the character count, and `None`
/// when `s` holds fewer than `n` characters.
#[must_use]
pub fn char_index(s: &str, n: usize) -> Option<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(n)
}

/// Decoder for the subfields of a single record frame.
///
/// Constructed over the record content past the tag; subfields are read in
/// catalog order via [`read_fixed`](Self::read_fixed) and
/// [`read_variable`](Self::read_variable), and [`finish`](Self::finish)
/// verifies the frame was consumed exactly.
#[derive(Debug)]
pub struct FieldReader<'a> {
    /// Record content after the tag.
    input: &'a str,
    /// Current byte offset into `input`.
    offset: usize,
    /// Characters consumed so far.
    chars_read: usize,
    /// Whether a subfield has consumed a `*` delimiter, committing the
    /// record to variable form.
    delimited: bool,
}

impl<'a> FieldReader<'a> {
    /// Creates a reader over record content.
    ///
    /// # Arguments
    /// * `input` - The record frame with the tag already stripped
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            chars_read: 0,
            delimited: false,
        }
    }

    /// Returns the unconsumed remainder of the frame.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// Returns true if the frame is fully consumed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Returns true if the record has committed to variable form.
    #[inline]
    #[must_use]
    pub const fn is_delimited(&self) -> bool {
        self.delimited
    }

    /// Reads a fixed-kind subfield of declared width `width`.
    ///
    /// Fixed-kind subfields are width-significant: written in variable form
    /// they may only be empty or exactly `width` characters before the
    /// delimiter.
    ///
    /// # Arguments
    /// * `field` - The catalog name of the subfield, used in errors
    /// * `width` - Declared maximum width in characters
    ///
    /// # Errors
    /// `ErrValidLength` when the input cannot fill the width or the
    /// delimiter sits at an illegal position; `ErrRequireDelimiter` on
    /// mixed-mode input after the record committed to variable form.
    pub fn read_fixed(&mut self, field: &'static str, width: usize) -> Result<String, FieldError> {
        let rem = self.remaining();
        if rem.is_empty() {
            return Ok(String::new());
        }

        match self.find_delimiter(width) {
            Some((byte_idx, char_idx)) => {
                if char_idx != 0 && char_idx != width {
                    return Err(FieldError::new(field, FieldErrorKind::ValidLength));
                }
                let value = rem[..byte_idx].trim_end_matches(' ');
                self.consume(byte_idx + 1, char_idx + 1);
                self.delimited = true;
                Ok(value.to_string())
            }
            None => {
                if self.delimited {
                    return Err(FieldError::new(field, FieldErrorKind::RequireDelimiter));
                }
                let Some(end) = char_index(rem, width) else {
                    return Err(FieldError::new(field, FieldErrorKind::ValidLength));
                };
                let value = rem[..end].trim_end_matches(' ');
                self.consume(end, width);
                Ok(value.to_string())
            }
        }
    }

    /// Reads a variable-kind subfield of declared width `width`.
    ///
    /// Variable-kind subfields always terminate at a `*` delimiter, in both
    /// output modes; only a fully elided trailing subfield may omit it.
    ///
    /// # Arguments
    /// * `field` - The catalog name of the subfield, used in errors
    /// * `width` - Declared maximum width in characters
    ///
    /// # Errors
    /// `ErrRequireDelimiter` when no delimiter occurs within the first
    /// `width + 1` characters of the remaining input.
    pub fn read_variable(
        &mut self,
        field: &'static str,
        width: usize,
    ) -> Result<String, FieldError> {
        let rem = self.remaining();
        if rem.is_empty() {
            return Ok(String::new());
        }

        match self.find_delimiter(width) {
            Some((byte_idx, char_idx)) => {
                let value = rem[..byte_idx].trim_end_matches(' ');
                self.consume(byte_idx + 1, char_idx + 1);
                self.delimited = true;
                Ok(value.to_string())
            }
            None => Err(FieldError::new(field, FieldErrorKind::RequireDelimiter)),
        }
    }

    /// Verifies the frame holds no residue past the last declared subfield.
    ///
    /// # Errors
    /// `TagMaxLength` describing the consumed and found character counts.
    pub fn finish(&self) -> Result<(), RecordError> {
        if self.is_empty() {
            return Ok(());
        }
        let found = self.chars_read + self.remaining().chars().count();
        Err(RecordError::max_length(format!(
            "expected {} characters and found {}",
            self.chars_read, found
        )))
    }

    /// Locates the first `*` within the first `width + 1` characters of the
    /// remaining input, returning its byte and character indices.
    fn find_delimiter(&self, width: usize) -> Option<(usize, usize)> {
        let rem = self.remaining();
        let byte_idx = memchr(b'*', rem.as_bytes())?;
        let char_idx = rem[..byte_idx].chars().count();
        (char_idx <= width).then_some((byte_idx, char_idx))
    }

    #[inline]
    fn consume(&mut self, bytes: usize, chars: usize) {
        self.offset += bytes;
        self.chars_read += chars;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_index() {
        assert_eq!(char_index("abcdef", 0), Some(0));
        assert_eq!(char_index("abcdef", 3), Some(3));
        assert_eq!(char_index("abcdef", 6), Some(6));
        assert_eq!(char_index("abcdef", 7), None);
        // Multi-byte runes advance one character per rune.
        assert_eq!(char_index("®®a", 2), Some(4));
    }

    #[test]
    fn test_read_fixed_full_width() {
        let mut fields = FieldReader::new("20190502Source08");
        assert_eq!(fields.read_fixed("OutputCycleDate", 8).unwrap(), "20190502");
        assert_eq!(
            fields.read_fixed("OutputDestinationID", 8).unwrap(),
            "Source08"
        );
        assert!(fields.finish().is_ok());
    }

    #[test]
    fn test_read_fixed_trims_trailing_spaces() {
        let mut fields = FieldReader::new("1        ");
        assert_eq!(fields.read_fixed("Account", 9).unwrap(), "1");
        assert!(fields.finish().is_ok());
    }

    #[test]
    fn test_read_fixed_short_input() {
        let mut fields = FieldReader::new("12345678");
        let err = fields.read_fixed("Account", 9).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::ValidLength);
    }

    #[test]
    fn test_read_fixed_full_width_with_delimiter() {
        let mut fields = FieldReader::new("1        *");
        assert_eq!(fields.read_fixed("Account", 9).unwrap(), "1");
        assert!(fields.is_delimited());
        assert!(fields.finish().is_ok());
    }

    #[test]
    fn test_read_fixed_partial_before_delimiter() {
        // A width-significant value written variable must be empty or full
        // width; two characters before the delimiter is neither.
        let mut fields = FieldReader::new("1*");
        let err = fields.read_fixed("Account", 9).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::ValidLength);

        let mut fields = FieldReader::new(" *");
        let err = fields.read_fixed("Account", 9).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::ValidLength);
    }

    #[test]
    fn test_read_fixed_empty_via_delimiter() {
        let mut fields = FieldReader::new("*42");
        assert_eq!(fields.read_fixed("OutputCycleDate", 8).unwrap(), "");
        assert!(fields.is_delimited());
        assert_eq!(fields.remaining(), "42");
    }

    #[test]
    fn test_read_fixed_mixed_mode_rejected() {
        // First subfield consumed a delimiter; a later fixed slice with no
        // delimiter in its window is mixed-mode input.
        let mut fields = FieldReader::new("*ABCDEFGHIJ");
        assert_eq!(fields.read_fixed("First", 4).unwrap(), "");
        let err = fields.read_fixed("Second", 4).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::RequireDelimiter);
    }

    #[test]
    fn test_read_variable_delimited() {
        let mut fields = FieldReader::new("1234*Name*");
        assert_eq!(fields.read_variable("Identifier", 34).unwrap(), "1234");
        assert_eq!(fields.read_variable("Name", 35).unwrap(), "Name");
        assert!(fields.finish().is_ok());
    }

    #[test]
    fn test_read_variable_trims_trailing_spaces() {
        let mut fields = FieldReader::new("1,2345Z     *");
        assert_eq!(fields.read_variable("ExchangeRate", 12).unwrap(), "1,2345Z");
        assert!(fields.finish().is_ok());
    }

    #[test]
    fn test_read_variable_missing_delimiter() {
        let mut fields = FieldReader::new("1,2345");
        let err = fields.read_variable("ExchangeRate", 12).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::RequireDelimiter);
    }

    #[test]
    fn test_read_variable_delimiter_beyond_window() {
        // 13 characters before the first delimiter, but the window for a
        // width-12 subfield is 13 characters starting at zero.
        let mut fields = FieldReader::new("1234567890123NNN*");
        let err = fields.read_variable("ExchangeRate", 12).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::RequireDelimiter);
    }

    #[test]
    fn test_read_variable_elided_trailing() {
        let mut fields = FieldReader::new("1234*");
        assert_eq!(fields.read_variable("Identifier", 34).unwrap(), "1234");
        assert_eq!(fields.read_variable("Name", 35).unwrap(), "");
        assert_eq!(fields.read_variable("AddressLineOne", 35).unwrap(), "");
        assert!(fields.finish().is_ok());
    }

    #[test]
    fn test_finish_rejects_residue() {
        let mut fields = FieldReader::new("123456789Z123");
        assert_eq!(fields.read_fixed("Account", 9).unwrap(), "123456789");
        let err = fields.finish().unwrap_err();
        assert!(matches!(err, RecordError::TagMaxLength { .. }));
        assert!(err.to_string().contains("expected 9 characters and found 13"));
    }

    #[test]
    fn test_rune_occupies_one_character() {
        // The rune is one character wide regardless of its byte length, so
        // the fixed slice still spans the declared width.
        let mut fields = FieldReader::new("®a      x");
        assert_eq!(fields.read_fixed("Name", 8).unwrap(), "®a");
        assert_eq!(fields.remaining(), "x");
    }

    #[test]
    fn test_delimiter_window_counts_characters() {
        // Seven runes then a delimiter: the star sits at character index 7,
        // inside the window of a width-8 subfield even though its byte
        // offset is 14.
        let mut fields = FieldReader::new("®®®®®®®*");
        // index 7 is neither 0 nor the full width of 8
        let err = fields.read_fixed("Field", 8).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::ValidLength);

        let mut fields = FieldReader::new("®®®®®®®*");
        assert_eq!(fields.read_variable("Field", 8).unwrap(), "®®®®®®®");
    }
}
