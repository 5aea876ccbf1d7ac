/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 9/2/26
******************************************************************************/

//! Shared types for FEDWire record serialization.

use serde::{Deserialize, Serialize};

/// Length in characters of a record tag literal (`{NNNN}`).
pub const TAG_LENGTH: usize = 6;

/// The subfield delimiter used by variable-length encoding.
pub const DELIMITER: char = '*';

/// Output options for record serialization.
///
/// The default emits the canonical fixed-width form; enabling
/// `variable_length_fields` emits the delimited variable-length form in
/// which trailing empty subfields are elided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Emit subfields at their content length, `*`-delimited, instead of
    /// space-padded to their declared width.
    pub variable_length_fields: bool,
}

impl FormatOptions {
    /// The canonical fixed-width form.
    #[must_use]
    pub const fn fixed() -> Self {
        Self {
            variable_length_fields: false,
        }
    }

    /// The delimited variable-length form.
    #[must_use]
    pub const fn variable() -> Self {
        Self {
            variable_length_fields: true,
        }
    }
}

/// Returns true if `tag` is a well-formed record tag literal: an opening
/// brace, four ASCII digits, and a closing brace.
#[must_use]
pub fn is_tag(tag: &str) -> bool {
    tag.is_ascii()
        && tag.len() == TAG_LENGTH
        && tag.starts_with('{')
        && tag.ends_with('}')
        && tag[1..5].chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_options_default_is_fixed() {
        assert_eq!(FormatOptions::default(), FormatOptions::fixed());
        assert!(!FormatOptions::default().variable_length_fields);
        assert!(FormatOptions::variable().variable_length_fields);
    }

    #[test]
    fn test_is_tag() {
        assert!(is_tag("{1500}"));
        assert!(is_tag("{7070}"));
        assert!(!is_tag("{150}"));
        assert!(!is_tag("{15000}"));
        assert!(!is_tag("1500"));
        assert!(!is_tag("{15A0}"));
        assert!(!is_tag("{1500)"));
    }
}
