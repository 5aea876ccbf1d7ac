/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 10/2/26
******************************************************************************/

//! Message envelope records.
//!
//! - [`SenderSupplied`] (`{1500}`): format version, user request
//!   correlation, and the test/production and duplication markers.
//! - [`TypeSubType`] (`{1510}`): the type and subtype codes classifying the
//!   transfer.
//!
//! Both records open a FEDWire message and all their subfields are
//! width-significant.

use crate::record::{check_tag, impl_wire_display, open_frame, WireRecord};
use fedwire_codec::{FieldReader, FieldWriter};
use fedwire_core::charset;
use fedwire_core::error::{FieldError, FieldErrorKind, RecordError};
use fedwire_core::types::FormatOptions;
use serde::{Deserialize, Serialize};

/// The only format version the service accepts.
pub const FORMAT_VERSION: &str = "30";

/// TestProductionCode marking a test message.
pub const ENVIRONMENT_TEST: &str = "T";
/// TestProductionCode marking a production message.
pub const ENVIRONMENT_PRODUCTION: &str = "P";

/// MessageDuplicationCode marking a possible resend.
pub const MESSAGE_DUPLICATION_RESEND: &str = "P";

/// SenderSupplied is the `{1500}` record opening every message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderSupplied {
    /// The record tag, `{1500}`.
    pub tag: String,
    /// FormatVersion, always `30`.
    pub format_version: String,
    /// UserRequestCorrelation echoed back on acknowledgments.
    pub user_request_correlation: String,
    /// TestProductionCode, `T` or `P`.
    pub test_production_code: String,
    /// MessageDuplicationCode, empty for an original or `P` for a possible
    /// resend.
    pub message_duplication_code: String,
}

impl SenderSupplied {
    /// Creates an empty record with the tag, format version, and production
    /// environment pre-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            format_version: FORMAT_VERSION.to_string(),
            test_production_code: ENVIRONMENT_PRODUCTION.to_string(),
            ..Self::default()
        }
    }
}

impl WireRecord for SenderSupplied {
    const TAG: &'static str = "{1500}";
    const NAME: &'static str = "SenderSupplied";

    fn parse(record: &str) -> Result<Self, RecordError> {
        let (tag, rest) = open_frame(record, 8)?;
        let mut fields = FieldReader::new(rest);

        let format_version = fields.read_fixed("FormatVersion", 2)?;
        let user_request_correlation = fields.read_fixed("UserRequestCorrelation", 8)?;
        let test_production_code = fields.read_fixed("TestProductionCode", 1)?;
        let message_duplication_code = fields.read_fixed("MessageDuplicationCode", 1)?;
        fields.finish()?;

        Ok(Self {
            tag: tag.to_string(),
            format_version,
            user_request_correlation,
            test_production_code,
            message_duplication_code,
        })
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_tag::<Self>(&self.tag)?;
        charset::numeric("FormatVersion", &self.format_version)?;
        charset::alphanumeric("UserRequestCorrelation", &self.user_request_correlation)?;
        charset::alphanumeric("TestProductionCode", &self.test_production_code)?;
        charset::alphanumeric("MessageDuplicationCode", &self.message_duplication_code)?;
        charset::required("FormatVersion", &self.format_version)?;
        charset::required("TestProductionCode", &self.test_production_code)?;

        if self.format_version != FORMAT_VERSION {
            return Err(FieldError::with_value(
                "FormatVersion",
                FieldErrorKind::InvalidProperty,
                &self.format_version,
            ));
        }
        if !matches!(
            self.test_production_code.as_str(),
            ENVIRONMENT_TEST | ENVIRONMENT_PRODUCTION
        ) {
            return Err(FieldError::with_value(
                "TestProductionCode",
                FieldErrorKind::InvalidProperty,
                &self.test_production_code,
            ));
        }
        if !matches!(
            self.message_duplication_code.as_str(),
            "" | " " | MESSAGE_DUPLICATION_RESEND
        ) {
            return Err(FieldError::with_value(
                "MessageDuplicationCode",
                FieldErrorKind::InvalidProperty,
                &self.message_duplication_code,
            ));
        }
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut fields = FieldWriter::new(options);
        fields.write_fixed(&self.format_version, 2);
        fields.write_fixed(&self.user_request_correlation, 8);
        fields.write_fixed(&self.test_production_code, 1);
        fields.write_fixed(&self.message_duplication_code, 1);
        format!("{}{}", Self::TAG, fields.finish())
    }
}

/// TypeSubType is the `{1510}` record carrying the type and subtype codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSubType {
    /// The record tag, `{1510}`.
    pub tag: String,
    /// TypeCode of the transfer.
    pub type_code: String,
    /// SubTypeCode of the transfer.
    pub sub_type_code: String,
}

impl TypeSubType {
    /// Creates an empty record with the tag pre-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            ..Self::default()
        }
    }
}

impl WireRecord for TypeSubType {
    const TAG: &'static str = "{1510}";
    const NAME: &'static str = "TypeSubType";

    fn parse(record: &str) -> Result<Self, RecordError> {
        let (tag, rest) = open_frame(record, 8)?;
        let mut fields = FieldReader::new(rest);

        let type_code = fields.read_fixed("TypeCode", 2)?;
        let sub_type_code = fields.read_fixed("SubTypeCode", 2)?;
        fields.finish()?;

        Ok(Self {
            tag: tag.to_string(),
            type_code,
            sub_type_code,
        })
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_tag::<Self>(&self.tag)?;
        charset::numeric("TypeCode", &self.type_code)?;
        charset::numeric("SubTypeCode", &self.sub_type_code)?;
        charset::required("TypeCode", &self.type_code)?;
        charset::required("SubTypeCode", &self.sub_type_code)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut fields = FieldWriter::new(options);
        fields.write_fixed(&self.type_code, 2);
        fields.write_fixed(&self.sub_type_code, 2);
        format!("{}{}", Self::TAG, fields.finish())
    }
}

impl_wire_display!(SenderSupplied, TypeSubType);
