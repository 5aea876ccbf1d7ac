/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 10/2/26
******************************************************************************/

//! Party records and the shared Personal group.
//!
//! [`Personal`] carries the identification code, identifier, name, and
//! three-line [`Address`] shared by [`Beneficiary`] (`{4200}`) and
//! [`Originator`] (`{5000}`). [`BeneficiaryReference`] (`{4320}`) carries
//! the reference the beneficiary uses to match the payment.
//!
//! IdentificationCode and Identifier are mutually dependent: setting either
//! one requires the other.

use crate::record::{check_tag, impl_wire_display, open_frame, WireRecord};
use fedwire_codec::{FieldReader, FieldWriter};
use fedwire_core::charset;
use fedwire_core::codes;
use fedwire_core::error::{FieldError, FieldErrorKind, RecordError};
use fedwire_core::types::FormatOptions;
use serde::{Deserialize, Serialize};

/// A three-line party address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// AddressLineOne.
    pub address_line_one: String,
    /// AddressLineTwo.
    pub address_line_two: String,
    /// AddressLineThree.
    pub address_line_three: String,
}

impl Address {
    fn read(fields: &mut FieldReader<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            address_line_one: fields.read_variable("AddressLineOne", 35)?,
            address_line_two: fields.read_variable("AddressLineTwo", 35)?,
            address_line_three: fields.read_variable("AddressLineThree", 35)?,
        })
    }

    fn write(&self, fields: &mut FieldWriter) {
        fields.write_variable(&self.address_line_one, 35);
        fields.write_variable(&self.address_line_two, 35);
        fields.write_variable(&self.address_line_three, 35);
    }

    fn validate(&self) -> Result<(), FieldError> {
        charset::alphanumeric("AddressLineOne", &self.address_line_one)?;
        charset::alphanumeric("AddressLineTwo", &self.address_line_two)?;
        charset::alphanumeric("AddressLineThree", &self.address_line_three)?;
        Ok(())
    }
}

/// The identification group shared by party records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personal {
    /// IdentificationCode from the published enumeration.
    pub identification_code: String,
    /// Identifier qualified by the identification code.
    pub identifier: String,
    /// Name of the party.
    pub name: String,
    /// Address of the party.
    pub address: Address,
}

impl Personal {
    fn read(fields: &mut FieldReader<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            identification_code: fields.read_fixed("IdentificationCode", 1)?,
            identifier: fields.read_variable("Identifier", 34)?,
            name: fields.read_variable("Name", 35)?,
            address: Address::read(fields)?,
        })
    }

    fn write(&self, fields: &mut FieldWriter) {
        fields.write_fixed(&self.identification_code, 1);
        fields.write_variable(&self.identifier, 34);
        fields.write_variable(&self.name, 35);
        self.address.write(fields);
    }

    fn validate(&self) -> Result<(), FieldError> {
        codes::identification_code("IdentificationCode", &self.identification_code)?;
        charset::alphanumeric("Identifier", &self.identifier)?;
        charset::alphanumeric("Name", &self.name)?;
        self.address.validate()?;

        if !self.identification_code.is_empty() && self.identifier.is_empty() {
            return Err(FieldError::new("Identifier", FieldErrorKind::FieldRequired));
        }
        if self.identification_code.is_empty() && !self.identifier.is_empty() {
            return Err(FieldError::new(
                "IdentificationCode",
                FieldErrorKind::FieldRequired,
            ));
        }
        Ok(())
    }
}

/// Beneficiary is the `{4200}` record identifying the party to be credited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    /// The record tag, `{4200}`.
    pub tag: String,
    /// The party identification group.
    pub personal: Personal,
}

impl Beneficiary {
    /// Creates an empty record with the tag pre-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            ..Self::default()
        }
    }
}

impl WireRecord for Beneficiary {
    const TAG: &'static str = "{4200}";
    const NAME: &'static str = "Beneficiary";

    fn parse(record: &str) -> Result<Self, RecordError> {
        let (tag, rest) = open_frame(record, 7)?;
        let mut fields = FieldReader::new(rest);

        let personal = Personal::read(&mut fields)?;
        fields.finish()?;

        Ok(Self {
            tag: tag.to_string(),
            personal,
        })
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_tag::<Self>(&self.tag)?;
        self.personal.validate()
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut fields = FieldWriter::new(options);
        self.personal.write(&mut fields);
        format!("{}{}", Self::TAG, fields.finish())
    }
}

/// Originator is the `{5000}` record identifying the originating party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Originator {
    /// The record tag, `{5000}`.
    pub tag: String,
    /// The party identification group.
    pub personal: Personal,
}

impl Originator {
    /// Creates an empty record with the tag pre-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            ..Self::default()
        }
    }
}

impl WireRecord for Originator {
    const TAG: &'static str = "{5000}";
    const NAME: &'static str = "Originator";

    fn parse(record: &str) -> Result<Self, RecordError> {
        let (tag, rest) = open_frame(record, 7)?;
        let mut fields = FieldReader::new(rest);

        let personal = Personal::read(&mut fields)?;
        fields.finish()?;

        Ok(Self {
            tag: tag.to_string(),
            personal,
        })
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_tag::<Self>(&self.tag)?;
        self.personal.validate()
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut fields = FieldWriter::new(options);
        self.personal.write(&mut fields);
        format!("{}{}", Self::TAG, fields.finish())
    }
}

/// BeneficiaryReference is the `{4320}` record carrying the reference the
/// beneficiary uses to match the payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeneficiaryReference {
    /// The record tag, `{4320}`.
    pub tag: String,
    /// BeneficiaryReference.
    pub beneficiary_reference: String,
}

impl BeneficiaryReference {
    /// Creates an empty record with the tag pre-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            ..Self::default()
        }
    }
}

impl WireRecord for BeneficiaryReference {
    const TAG: &'static str = "{4320}";
    const NAME: &'static str = "BeneficiaryReference";

    fn parse(record: &str) -> Result<Self, RecordError> {
        let (tag, rest) = open_frame(record, 6)?;
        let mut fields = FieldReader::new(rest);

        let beneficiary_reference = fields.read_variable("BeneficiaryReference", 16)?;
        fields.finish()?;

        Ok(Self {
            tag: tag.to_string(),
            beneficiary_reference,
        })
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_tag::<Self>(&self.tag)?;
        charset::alphanumeric("BeneficiaryReference", &self.beneficiary_reference)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut fields = FieldWriter::new(options);
        fields.write_variable(&self.beneficiary_reference, 16);
        format!("{}{}", Self::TAG, fields.finish())
    }
}

impl_wire_display!(Beneficiary, Originator, BeneficiaryReference);

#[cfg(test)]
mod tests {
    use super::*;
    use fedwire_core::codes::{DRIVERS_LICENSE_NUMBER, PASSPORT_NUMBER};

    fn mock_beneficiary() -> Beneficiary {
        let mut ben = Beneficiary::new();
        ben.personal.identification_code = DRIVERS_LICENSE_NUMBER.to_string();
        ben.personal.identifier = "1234".to_string();
        ben.personal.name = "Name".to_string();
        ben.personal.address.address_line_one = "Address One".to_string();
        ben.personal.address.address_line_two = "Address Two".to_string();
        ben.personal.address.address_line_three = "Address Three".to_string();
        ben
    }

    fn mock_originator() -> Originator {
        let mut o = Originator::new();
        o.personal.identification_code = PASSPORT_NUMBER.to_string();
        o.personal.identifier = "1234".to_string();
        o.personal.name = "Name".to_string();
        o.personal.address.address_line_one = "Address One".to_string();
        o.personal.address.address_line_two = "Address Two".to_string();
        o.personal.address.address_line_three = "Address Three".to_string();
        o
    }

    fn padded(value: &str, width: usize) -> String {
        format!("{value:<width$}")
    }

    #[test]
    fn test_mock_beneficiary_validates() {
        assert!(mock_beneficiary().validate().is_ok());
    }

    #[test]
    fn test_mock_originator_validates() {
        assert!(mock_originator().validate().is_ok());
    }

    #[test]
    fn test_beneficiary_identification_code_invalid() {
        let mut ben = mock_beneficiary();
        ben.personal.identification_code = "Baseball Card ID".to_string();

        let err = ben.validate().unwrap_err();
        assert_eq!(err.field, "IdentificationCode");
        assert_eq!(err.kind, FieldErrorKind::IdentificationCode);
        assert_eq!(err.value.as_deref(), Some("Baseball Card ID"));
    }

    #[test]
    fn test_beneficiary_fields_alphanumeric() {
        let mut ben = mock_beneficiary();
        ben.personal.identifier = "®".to_string();
        let err = ben.validate().unwrap_err();
        assert_eq!((err.field, err.kind), ("Identifier", FieldErrorKind::NonAlphanumeric));

        let mut ben = mock_beneficiary();
        ben.personal.name = "®".to_string();
        let err = ben.validate().unwrap_err();
        assert_eq!((err.field, err.kind), ("Name", FieldErrorKind::NonAlphanumeric));

        let mut ben = mock_beneficiary();
        ben.personal.address.address_line_one = "®".to_string();
        let err = ben.validate().unwrap_err();
        assert_eq!(
            (err.field, err.kind),
            ("AddressLineOne", FieldErrorKind::NonAlphanumeric)
        );

        let mut ben = mock_beneficiary();
        ben.personal.address.address_line_three = "®".to_string();
        let err = ben.validate().unwrap_err();
        assert_eq!(
            (err.field, err.kind),
            ("AddressLineThree", FieldErrorKind::NonAlphanumeric)
        );
    }

    #[test]
    fn test_beneficiary_identification_code_without_identifier() {
        let mut ben = mock_beneficiary();
        ben.personal.identification_code = "D".to_string();
        ben.personal.identifier = String::new();

        let err = ben.validate().unwrap_err();
        assert_eq!(err.field, "Identifier");
        assert_eq!(err.kind, FieldErrorKind::FieldRequired);
    }

    #[test]
    fn test_beneficiary_identifier_without_identification_code() {
        let mut ben = mock_beneficiary();
        ben.personal.identification_code = String::new();
        ben.personal.identifier = "1234567890ABC".to_string();

        let err = ben.validate().unwrap_err();
        assert_eq!(err.field, "IdentificationCode");
        assert_eq!(err.kind, FieldErrorKind::FieldRequired);
    }

    #[test]
    fn test_parse_beneficiary_missing_final_delimiter() {
        // The record commits to variable form at the identifier; an address
        // line without its delimiter is rejected on the line, not as a
        // length error.
        let line = format!(
            "{{4200}}3{}*{}*{}*{}*{}",
            padded("1234", 34),
            padded("Name", 35),
            padded("Address One", 35),
            padded("Address Two", 35),
            padded("Address Three", 33),
        );
        let err = Beneficiary::parse(&line).unwrap_err();
        assert_eq!(
            err,
            FieldError::new("AddressLineThree", FieldErrorKind::RequireDelimiter).into()
        );
    }

    #[test]
    fn test_parse_originator_fixed_without_delimiters() {
        let line = format!(
            "{{5000}}1{}{}{}{}{}",
            padded("1234", 34),
            padded("Name", 35),
            padded("Address One", 35),
            padded("Address Two", 35),
            padded("Address Three", 33),
        );
        let err = Originator::parse(&line).unwrap_err();
        assert_eq!(
            err,
            FieldError::new("Identifier", FieldErrorKind::RequireDelimiter).into()
        );
    }

    #[test]
    fn test_beneficiary_tag_error() {
        let mut ben = mock_beneficiary();
        ben.tag = "{9999}".to_string();

        let err = ben.validate().unwrap_err();
        assert_eq!(err.field, "tag");
        assert_eq!(err.kind, FieldErrorKind::ValidTagForType);
    }

    #[test]
    fn test_beneficiary_variable_length_parse() {
        let err = Beneficiary::parse("{4200}").unwrap_err();
        assert_eq!(err, RecordError::min_length(7, 6));

        let err = Beneficiary::parse("{4200}31234*******").unwrap_err();
        assert!(matches!(err, RecordError::TagMaxLength { .. }));

        let ben = Beneficiary::parse("{4200}31234*****").unwrap();
        assert_eq!(ben.personal.identification_code, "3");
        assert_eq!(ben.personal.identifier, "1234");
        assert_eq!(ben.personal.name, "");
    }

    #[test]
    fn test_beneficiary_format_options() {
        let ben = Beneficiary::parse("{4200}31234*").unwrap();

        let fixed = format!(
            "{{4200}}3{}*{}*{}*{}*{}*",
            padded("1234", 34),
            padded("", 35),
            padded("", 35),
            padded("", 35),
            padded("", 35),
        );
        assert_eq!(ben.to_string(), fixed);
        assert_eq!(ben.format(FormatOptions::variable()), "{4200}31234*");
        assert_eq!(ben.format(FormatOptions::fixed()), ben.to_string());
    }

    #[test]
    fn test_originator_format_options() {
        let o = Originator::parse("{5000}B1*").unwrap();

        assert_eq!(o.personal.identification_code, "B");
        assert_eq!(o.personal.identifier, "1");
        let fixed = format!(
            "{{5000}}B{}*{}*{}*{}*{}*",
            padded("1", 34),
            padded("", 35),
            padded("", 35),
            padded("", 35),
            padded("", 35),
        );
        assert_eq!(o.to_string(), fixed);
        assert_eq!(o.format(FormatOptions::variable()), "{5000}B1*");
        assert_eq!(o.format(FormatOptions::fixed()), o.to_string());
    }

    #[test]
    fn test_beneficiary_round_trip_both_modes() {
        let ben = mock_beneficiary();

        let fixed = Beneficiary::parse(&ben.to_string()).unwrap();
        assert_eq!(fixed, ben);

        let variable = Beneficiary::parse(&ben.format(FormatOptions::variable())).unwrap();
        assert_eq!(variable, ben);
    }

    #[test]
    fn test_beneficiary_reference_round_trip() {
        let mut bref = BeneficiaryReference::new();
        bref.beneficiary_reference = "Reference One".to_string();
        assert!(bref.validate().is_ok());

        let line = format!("{{4320}}{}*", padded("Reference One", 16));
        assert_eq!(bref.to_string(), line);
        assert_eq!(
            bref.format(FormatOptions::variable()),
            "{4320}Reference One*"
        );

        let reparsed = BeneficiaryReference::parse(&bref.to_string()).unwrap();
        assert_eq!(reparsed, bref);
    }

    #[test]
    fn test_beneficiary_reference_non_alphanumeric() {
        let mut bref = BeneficiaryReference::new();
        bref.beneficiary_reference = "®".to_string();

        let err = bref.validate().unwrap_err();
        assert_eq!(err.field, "BeneficiaryReference");
        assert_eq!(err.kind, FieldErrorKind::NonAlphanumeric);
    }
}
