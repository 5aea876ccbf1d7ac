/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 10/2/26
******************************************************************************/

//! Depository institution records.
//!
//! - [`SenderDepositoryInstitution`] (`{3100}`): the sender's ABA number
//!   and short name.
//! - [`ReceiverDepositoryInstitution`] (`{3400}`): the receiver's ABA
//!   number and short name.
//!
//! The ABA number is width-significant; the short name is delimited.

use crate::record::{check_tag, impl_wire_display, open_frame, WireRecord};
use fedwire_codec::{FieldReader, FieldWriter};
use fedwire_core::charset;
use fedwire_core::error::{FieldError, RecordError};
use fedwire_core::types::FormatOptions;
use serde::{Deserialize, Serialize};

/// SenderDepositoryInstitution is the `{3100}` record identifying the
/// sending institution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderDepositoryInstitution {
    /// The record tag, `{3100}`.
    pub tag: String,
    /// SenderABANumber, nine digits.
    pub sender_aba_number: String,
    /// SenderShortName of the institution.
    pub sender_short_name: String,
}

impl SenderDepositoryInstitution {
    /// Creates an empty record with the tag pre-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            ..Self::default()
        }
    }
}

impl WireRecord for SenderDepositoryInstitution {
    const TAG: &'static str = "{3100}";
    const NAME: &'static str = "SenderDepositoryInstitution";

    fn parse(record: &str) -> Result<Self, RecordError> {
        let (tag, rest) = open_frame(record, 7)?;
        let mut fields = FieldReader::new(rest);

        let sender_aba_number = fields.read_fixed("SenderABANumber", 9)?;
        let sender_short_name = fields.read_variable("SenderShortName", 18)?;
        fields.finish()?;

        Ok(Self {
            tag: tag.to_string(),
            sender_aba_number,
            sender_short_name,
        })
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_tag::<Self>(&self.tag)?;
        charset::numeric("SenderABANumber", &self.sender_aba_number)?;
        charset::alphanumeric("SenderShortName", &self.sender_short_name)?;
        charset::required("SenderABANumber", &self.sender_aba_number)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut fields = FieldWriter::new(options);
        fields.write_fixed(&self.sender_aba_number, 9);
        fields.write_variable(&self.sender_short_name, 18);
        format!("{}{}", Self::TAG, fields.finish())
    }
}

/// ReceiverDepositoryInstitution is the `{3400}` record identifying the
/// receiving institution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverDepositoryInstitution {
    /// The record tag, `{3400}`.
    pub tag: String,
    /// ReceiverABANumber, nine digits.
    pub receiver_aba_number: String,
    /// ReceiverShortName of the institution.
    pub receiver_short_name: String,
}

impl ReceiverDepositoryInstitution {
    /// Creates an empty record with the tag pre-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            ..Self::default()
        }
    }
}

impl WireRecord for ReceiverDepositoryInstitution {
    const TAG: &'static str = "{3400}";
    const NAME: &'static str = "ReceiverDepositoryInstitution";

    fn parse(record: &str) -> Result<Self, RecordError> {
        let (tag, rest) = open_frame(record, 7)?;
        let mut fields = FieldReader::new(rest);

        let receiver_aba_number = fields.read_fixed("ReceiverABANumber", 9)?;
        let receiver_short_name = fields.read_variable("ReceiverShortName", 18)?;
        fields.finish()?;

        Ok(Self {
            tag: tag.to_string(),
            receiver_aba_number,
            receiver_short_name,
        })
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_tag::<Self>(&self.tag)?;
        charset::numeric("ReceiverABANumber", &self.receiver_aba_number)?;
        charset::alphanumeric("ReceiverShortName", &self.receiver_short_name)?;
        charset::required("ReceiverABANumber", &self.receiver_aba_number)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut fields = FieldWriter::new(options);
        fields.write_fixed(&self.receiver_aba_number, 9);
        fields.write_variable(&self.receiver_short_name, 18);
        format!("{}{}", Self::TAG, fields.finish())
    }
}

impl_wire_display!(SenderDepositoryInstitution, ReceiverDepositoryInstitution);

#[cfg(test)]
mod tests {
    use super::*;
    use fedwire_core::error::FieldErrorKind;

    fn mock_sender_depository_institution() -> SenderDepositoryInstitution {
        let mut sdi = SenderDepositoryInstitution::new();
        sdi.sender_aba_number = "121042882".to_string();
        sdi.sender_short_name = "Wells Fargo NA".to_string();
        sdi
    }

    fn mock_receiver_depository_institution() -> ReceiverDepositoryInstitution {
        let mut rdi = ReceiverDepositoryInstitution::new();
        rdi.receiver_aba_number = "231380104".to_string();
        rdi.receiver_short_name = "Citadel".to_string();
        rdi
    }

    #[test]
    fn test_mock_sender_depository_institution_validates() {
        assert!(mock_sender_depository_institution().validate().is_ok());
    }

    #[test]
    fn test_mock_receiver_depository_institution_validates() {
        assert!(mock_receiver_depository_institution().validate().is_ok());
    }

    #[test]
    fn test_sender_aba_number_non_numeric() {
        let mut sdi = mock_sender_depository_institution();
        sdi.sender_aba_number = "12104288Z".to_string();

        let err = sdi.validate().unwrap_err();
        assert_eq!(err.field, "SenderABANumber");
        assert_eq!(err.kind, FieldErrorKind::NonNumeric);
    }

    #[test]
    fn test_sender_aba_number_required() {
        let mut sdi = mock_sender_depository_institution();
        sdi.sender_aba_number = String::new();

        let err = sdi.validate().unwrap_err();
        assert_eq!(err.field, "SenderABANumber");
        assert_eq!(err.kind, FieldErrorKind::FieldRequired);
    }

    #[test]
    fn test_receiver_short_name_non_alphanumeric() {
        let mut rdi = mock_receiver_depository_institution();
        rdi.receiver_short_name = "®".to_string();

        let err = rdi.validate().unwrap_err();
        assert_eq!(err.field, "ReceiverShortName");
        assert_eq!(err.kind, FieldErrorKind::NonAlphanumeric);
    }

    #[test]
    fn test_parse_sender_depository_institution() {
        let line = "{3100}121042882Wells Fargo NA    *";
        let sdi = SenderDepositoryInstitution::parse(line).unwrap();

        assert_eq!(sdi.sender_aba_number, "121042882");
        assert_eq!(sdi.sender_short_name, "Wells Fargo NA");
        assert_eq!(sdi.to_string(), line);
    }

    #[test]
    fn test_sender_depository_institution_format_options() {
        let sdi = mock_sender_depository_institution();

        assert_eq!(sdi.to_string(), "{3100}121042882Wells Fargo NA    *");
        assert_eq!(
            sdi.format(FormatOptions::variable()),
            "{3100}121042882Wells Fargo NA*"
        );
        assert_eq!(sdi.format(FormatOptions::fixed()), sdi.to_string());
    }

    #[test]
    fn test_receiver_depository_institution_round_trip_variable() {
        let rdi = mock_receiver_depository_institution();
        let wire = rdi.format(FormatOptions::variable());
        assert_eq!(wire, "{3400}231380104Citadel*");

        let reparsed = ReceiverDepositoryInstitution::parse(&wire).unwrap();
        assert_eq!(reparsed, rdi);
    }

    #[test]
    fn test_receiver_depository_institution_missing_delimiter() {
        let line = format!("{{3400}}231380104{}", " ".repeat(18));
        let err = ReceiverDepositoryInstitution::parse(&line).unwrap_err();
        assert_eq!(
            err,
            FieldError::new("ReceiverShortName", FieldErrorKind::RequireDelimiter).into()
        );
    }
}
