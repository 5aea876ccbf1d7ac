/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 10/2/26
******************************************************************************/

//! Remittance and free-text records.
//!
//! - [`OriginatorToBeneficiary`] (`{6000}`): four free-text lines from the
//!   originator to the beneficiary.
//! - [`Remittance`] (`{7070}`): SWIFT-style cover payment annotation.
//!
//! [`CoverPayment`] is the SWIFT field tag plus line group carried by
//! `{7070}`. Lines five and six are reserved: they never appear on the wire
//! and any value in them fails validation.

use crate::record::{check_tag, impl_wire_display, open_frame, WireRecord};
use fedwire_codec::{FieldReader, FieldWriter};
use fedwire_core::charset;
use fedwire_core::error::{FieldError, FieldErrorKind, RecordError};
use fedwire_core::types::FormatOptions;
use serde::{Deserialize, Serialize};

/// The SWIFT cover payment group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverPayment {
    /// SwiftFieldTag of the annotation.
    pub swift_field_tag: String,
    /// SwiftLineOne.
    pub swift_line_one: String,
    /// SwiftLineTwo.
    pub swift_line_two: String,
    /// SwiftLineThree.
    pub swift_line_three: String,
    /// SwiftLineFour.
    pub swift_line_four: String,
    /// SwiftLineFive. Reserved, must stay empty.
    pub swift_line_five: String,
    /// SwiftLineSix. Reserved, must stay empty.
    pub swift_line_six: String,
}

impl CoverPayment {
    fn read(fields: &mut FieldReader<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            swift_field_tag: fields.read_variable("SwiftFieldTag", 5)?,
            swift_line_one: fields.read_variable("SwiftLineOne", 35)?,
            swift_line_two: fields.read_variable("SwiftLineTwo", 35)?,
            swift_line_three: fields.read_variable("SwiftLineThree", 35)?,
            swift_line_four: fields.read_variable("SwiftLineFour", 35)?,
            swift_line_five: String::new(),
            swift_line_six: String::new(),
        })
    }

    fn write(&self, fields: &mut FieldWriter) {
        fields.write_variable(&self.swift_field_tag, 5);
        fields.write_variable(&self.swift_line_one, 35);
        fields.write_variable(&self.swift_line_two, 35);
        fields.write_variable(&self.swift_line_three, 35);
        fields.write_variable(&self.swift_line_four, 35);
    }

    fn validate(&self) -> Result<(), FieldError> {
        charset::alphanumeric("SwiftFieldTag", &self.swift_field_tag)?;
        charset::alphanumeric("SwiftLineOne", &self.swift_line_one)?;
        charset::alphanumeric("SwiftLineTwo", &self.swift_line_two)?;
        charset::alphanumeric("SwiftLineThree", &self.swift_line_three)?;
        charset::alphanumeric("SwiftLineFour", &self.swift_line_four)?;

        if !self.swift_line_five.is_empty() {
            return Err(FieldError::with_value(
                "SwiftLineFive",
                FieldErrorKind::InvalidProperty,
                &self.swift_line_five,
            ));
        }
        if !self.swift_line_six.is_empty() {
            return Err(FieldError::with_value(
                "SwiftLineSix",
                FieldErrorKind::InvalidProperty,
                &self.swift_line_six,
            ));
        }
        Ok(())
    }
}

/// OriginatorToBeneficiary is the `{6000}` record carrying free-text
/// information from the originator to the beneficiary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginatorToBeneficiary {
    /// The record tag, `{6000}`.
    pub tag: String,
    /// LineOne.
    pub line_one: String,
    /// LineTwo.
    pub line_two: String,
    /// LineThree.
    pub line_three: String,
    /// LineFour.
    pub line_four: String,
}

impl OriginatorToBeneficiary {
    /// Creates an empty record with the tag pre-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            ..Self::default()
        }
    }
}

impl WireRecord for OriginatorToBeneficiary {
    const TAG: &'static str = "{6000}";
    const NAME: &'static str = "OriginatorToBeneficiary";

    fn parse(record: &str) -> Result<Self, RecordError> {
        let (tag, rest) = open_frame(record, 6)?;
        let mut fields = FieldReader::new(rest);

        let line_one = fields.read_variable("LineOne", 35)?;
        let line_two = fields.read_variable("LineTwo", 35)?;
        let line_three = fields.read_variable("LineThree", 35)?;
        let line_four = fields.read_variable("LineFour", 35)?;
        fields.finish()?;

        Ok(Self {
            tag: tag.to_string(),
            line_one,
            line_two,
            line_three,
            line_four,
        })
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_tag::<Self>(&self.tag)?;
        charset::alphanumeric("LineOne", &self.line_one)?;
        charset::alphanumeric("LineTwo", &self.line_two)?;
        charset::alphanumeric("LineThree", &self.line_three)?;
        charset::alphanumeric("LineFour", &self.line_four)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut fields = FieldWriter::new(options);
        fields.write_variable(&self.line_one, 35);
        fields.write_variable(&self.line_two, 35);
        fields.write_variable(&self.line_three, 35);
        fields.write_variable(&self.line_four, 35);
        format!("{}{}", Self::TAG, fields.finish())
    }
}

/// Remittance is the `{7070}` record carrying a SWIFT-style cover payment
/// annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remittance {
    /// The record tag, `{7070}`.
    pub tag: String,
    /// The cover payment group.
    pub cover_payment: CoverPayment,
}

impl Remittance {
    /// Creates an empty record with the tag pre-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            ..Self::default()
        }
    }
}

impl WireRecord for Remittance {
    const TAG: &'static str = "{7070}";
    const NAME: &'static str = "Remittance";

    fn parse(record: &str) -> Result<Self, RecordError> {
        let (tag, rest) = open_frame(record, 6)?;
        let mut fields = FieldReader::new(rest);

        let cover_payment = CoverPayment::read(&mut fields)?;
        fields.finish()?;

        Ok(Self {
            tag: tag.to_string(),
            cover_payment,
        })
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_tag::<Self>(&self.tag)?;
        self.cover_payment.validate()
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut fields = FieldWriter::new(options);
        self.cover_payment.write(&mut fields);
        format!("{}{}", Self::TAG, fields.finish())
    }
}

impl_wire_display!(OriginatorToBeneficiary, Remittance);
