/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 9/2/26
******************************************************************************/

//! Subfield encoder for FEDWire record frames.
//!
//! [`FieldWriter`] builds the content of a single record (everything after
//! the six-character tag) in either output mode:
//!
//! - **Fixed**: every subfield space-padded to its declared width;
//!   variable-kind subfields additionally carry their `*` terminator.
//! - **Variable**: variable-kind subfields emit their trimmed content plus
//!   `*`; fixed-kind subfields stay padded because their width is
//!   significant. The trailing run of empty subfields is elided and the
//!   frame ends with a single `*`, so it is self-terminating.
//!
//! The elision and terminal-delimiter rules only apply to records that
//! contain a variable-kind subfield; a record made entirely of
//! width-significant subfields serializes identically in both modes.
//!
//! Overlong content is clamped to the declared width, character-wise.

use crate::decoder::char_index;
use fedwire_core::types::{FormatOptions, DELIMITER};

/// Encoder for the subfields of a single record frame.
///
/// Subfields are written in catalog order via
/// [`write_fixed`](Self::write_fixed) and
/// [`write_variable`](Self::write_variable); [`finish`](Self::finish)
/// applies the variable-mode elision and terminal-delimiter rules and
/// returns the content.
#[derive(Debug)]
pub struct FieldWriter {
    options: FormatOptions,
    out: String,
    /// Length of `out` through the last non-empty subfield; everything past
    /// this point is elidable in variable mode.
    keep: usize,
    /// Whether any variable-kind subfield has been written. Records without
    /// one carry no delimiters, so elision never applies to them.
    saw_variable: bool,
}

impl FieldWriter {
    /// Creates a writer for the given output options.
    #[must_use]
    pub const fn new(options: FormatOptions) -> Self {
        Self {
            options,
            out: String::new(),
            keep: 0,
            saw_variable: false,
        }
    }

    /// Writes a fixed-kind subfield.
    ///
    /// # Arguments
    /// * `value` - The subfield content, clamped to `width` characters
    /// * `width` - Declared width in characters
    pub fn write_fixed(&mut self, value: &str, width: usize) {
        let value = clamp(value, width);
        pad(&mut self.out, value, width);
        if !value.trim_end_matches(' ').is_empty() {
            self.keep = self.out.len();
        }
    }

    /// Writes a variable-kind subfield.
    ///
    /// # Arguments
    /// * `value` - The subfield content, clamped to `width` characters
    /// * `width` - Declared width in characters
    pub fn write_variable(&mut self, value: &str, width: usize) {
        let value = clamp(value, width);
        self.saw_variable = true;
        if self.options.variable_length_fields {
            self.out.push_str(value.trim_end_matches(' '));
        } else {
            pad(&mut self.out, value, width);
        }
        self.out.push(DELIMITER);
        if !value.trim_end_matches(' ').is_empty() {
            self.keep = self.out.len();
        }
    }

    /// Finalizes the frame content.
    ///
    /// In variable mode the trailing empty subfields of a delimited record
    /// are dropped and a terminal `*` is guaranteed; a record with no
    /// variable-kind subfield, and any record in fixed mode, is returned
    /// as written.
    #[must_use]
    pub fn finish(mut self) -> String {
        if self.options.variable_length_fields && self.saw_variable {
            self.out.truncate(self.keep);
            if !self.out.ends_with(DELIMITER) {
                self.out.push(DELIMITER);
            }
        }
        self.out
    }
}

/// Clamps `value` to at most `width` characters.
fn clamp(value: &str, width: usize) -> &str {
    match char_index(value, width) {
        Some(end) => &value[..end],
        None => value,
    }
}

/// Appends `value` right-padded with spaces to exactly `width` characters.
fn pad(out: &mut String, value: &str, width: usize) {
    out.push_str(value);
    for _ in value.chars().count()..width {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_mode_pads_without_delimiter() {
        let mut fields = FieldWriter::new(FormatOptions::fixed());
        fields.write_fixed("1", 9);
        assert_eq!(fields.finish(), "1        ");
    }

    #[test]
    fn test_fixed_mode_variable_kind_keeps_delimiter() {
        let mut fields = FieldWriter::new(FormatOptions::fixed());
        fields.write_fixed("ANSI", 4);
        fields.write_variable("", 35);
        assert_eq!(
            fields.finish(),
            format!("ANSI{}*", " ".repeat(35))
        );
    }

    #[test]
    fn test_variable_mode_trims_content() {
        let mut fields = FieldWriter::new(FormatOptions::variable());
        fields.write_variable("123", 12);
        assert_eq!(fields.finish(), "123*");
    }

    #[test]
    fn test_variable_mode_without_variable_kind_matches_fixed() {
        // A record made entirely of width-significant subfields carries no
        // delimiters, so both modes produce the same frame.
        let mut fields = FieldWriter::new(FormatOptions::variable());
        fields.write_fixed("1", 9);
        assert_eq!(fields.finish(), "1        ");
    }

    #[test]
    fn test_variable_mode_elides_trailing_empties() {
        let mut fields = FieldWriter::new(FormatOptions::variable());
        fields.write_fixed("3", 1);
        fields.write_variable("1234", 34);
        fields.write_variable("", 35);
        fields.write_variable("", 35);
        fields.write_variable("", 35);
        fields.write_variable("", 35);
        assert_eq!(fields.finish(), "31234*");
    }

    #[test]
    fn test_variable_mode_appends_terminal_delimiter_after_fixed_kind() {
        let mut fields = FieldWriter::new(FormatOptions::variable());
        fields.write_fixed("ANSI", 4);
        fields.write_variable("", 35);
        assert_eq!(fields.finish(), "ANSI*");
    }

    #[test]
    fn test_variable_mode_all_empty_is_single_delimiter() {
        let mut fields = FieldWriter::new(FormatOptions::variable());
        fields.write_variable("", 5);
        fields.write_variable("", 35);
        fields.write_variable("", 35);
        assert_eq!(fields.finish(), "*");
    }

    #[test]
    fn test_variable_mode_fixed_kind_run_stays_positional() {
        let mut fields = FieldWriter::new(FormatOptions::variable());
        fields.write_fixed("", 8);
        fields.write_fixed("", 8);
        fields.write_fixed("000001", 6);
        fields.write_fixed("", 4);
        assert_eq!(fields.finish(), format!("{}000001    ", " ".repeat(16)));
    }

    #[test]
    fn test_clamp_counts_characters() {
        let mut fields = FieldWriter::new(FormatOptions::fixed());
        fields.write_fixed("®®®®", 2);
        assert_eq!(fields.finish(), "®®");

        let mut fields = FieldWriter::new(FormatOptions::fixed());
        fields.write_fixed("ABCDE", 3);
        assert_eq!(fields.finish(), "ABC");
    }
}
