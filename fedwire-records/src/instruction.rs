/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 10/2/26
******************************************************************************/

//! Payment instruction records.
//!
//! - [`BusinessFunctionCode`] (`{3600}`): classifies the business purpose
//!   of the transfer.
//! - [`LocalInstrument`] (`{3610}`): names the format of attached
//!   remittance data, or carries a proprietary code when the instrument
//!   code is `PROP`.

use crate::record::{check_tag, impl_wire_display, open_frame, WireRecord};
use fedwire_codec::{FieldReader, FieldWriter};
use fedwire_core::charset;
use fedwire_core::codes::{self, PROPRIETARY_LOCAL_INSTRUMENT_CODE};
use fedwire_core::error::{FieldError, FieldErrorKind, RecordError};
use fedwire_core::types::FormatOptions;
use serde::{Deserialize, Serialize};

/// Business function code: bank transfer.
pub const BANK_TRANSFER: &str = "BTR";
/// Business function code: customer transfer.
pub const CUSTOMER_TRANSFER: &str = "CTR";
/// Business function code: customer transfer plus.
pub const CUSTOMER_TRANSFER_PLUS: &str = "CTP";
/// Business function code: check same day settlement.
pub const CHECK_SAME_DAY_SETTLEMENT: &str = "CKS";
/// Business function code: deposit to sender's account.
pub const DEPOSIT_SENDERS_ACCOUNT: &str = "DEP";
/// Business function code: fed funds returned.
pub const FED_FUNDS_RETURNED: &str = "FFR";
/// Business function code: fed funds sold.
pub const FED_FUNDS_SOLD: &str = "FFS";
/// Business function code: drawdown payment.
pub const DRAWDOWN_PAYMENT: &str = "DRW";
/// Business function code: bank drawdown request.
pub const BANK_DRAWDOWN_REQUEST: &str = "DRB";
/// Business function code: customer or corporate drawdown request.
pub const CUSTOMER_CORPORATE_DRAWDOWN_REQUEST: &str = "DRC";
/// Business function code: service message.
pub const SERVICE_MESSAGE: &str = "SVC";

/// BusinessFunctionCode is the `{3600}` record classifying the transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessFunctionCode {
    /// The record tag, `{3600}`.
    pub tag: String,
    /// BusinessFunctionCode of the transfer.
    pub business_function_code: String,
    /// TransactionTypeCode refining the business function.
    pub transaction_type_code: String,
}

impl BusinessFunctionCode {
    /// Creates an empty record with the tag pre-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            ..Self::default()
        }
    }
}

impl WireRecord for BusinessFunctionCode {
    const TAG: &'static str = "{3600}";
    const NAME: &'static str = "BusinessFunctionCode";

    fn parse(record: &str) -> Result<Self, RecordError> {
        let (tag, rest) = open_frame(record, 7)?;
        let mut fields = FieldReader::new(rest);

        let business_function_code = fields.read_fixed("BusinessFunctionCode", 3)?;
        let transaction_type_code = fields.read_variable("TransactionTypeCode", 3)?;
        fields.finish()?;

        Ok(Self {
            tag: tag.to_string(),
            business_function_code,
            transaction_type_code,
        })
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_tag::<Self>(&self.tag)?;
        charset::alphanumeric("BusinessFunctionCode", &self.business_function_code)?;
        charset::alphanumeric("TransactionTypeCode", &self.transaction_type_code)?;
        charset::required("BusinessFunctionCode", &self.business_function_code)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut fields = FieldWriter::new(options);
        fields.write_fixed(&self.business_function_code, 3);
        fields.write_variable(&self.transaction_type_code, 3);
        format!("{}{}", Self::TAG, fields.finish())
    }
}

/// LocalInstrument is the `{3610}` record naming the format of attached
/// information.
///
/// ProprietaryCode may only be set when LocalInstrumentCode is `PROP`, and
/// is required when it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalInstrument {
    /// The record tag, `{3610}`.
    pub tag: String,
    /// LocalInstrumentCode from the published enumeration.
    pub local_instrument_code: String,
    /// ProprietaryCode accompanying a `PROP` instrument code.
    pub proprietary_code: String,
}

impl LocalInstrument {
    /// Creates an empty record with the tag pre-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            ..Self::default()
        }
    }
}

impl WireRecord for LocalInstrument {
    const TAG: &'static str = "{3610}";
    const NAME: &'static str = "LocalInstrument";

    fn parse(record: &str) -> Result<Self, RecordError> {
        let (tag, rest) = open_frame(record, 6)?;
        let mut fields = FieldReader::new(rest);

        let local_instrument_code = fields.read_fixed("LocalInstrumentCode", 4)?;
        let proprietary_code = fields.read_variable("ProprietaryCode", 35)?;
        fields.finish()?;

        Ok(Self {
            tag: tag.to_string(),
            local_instrument_code,
            proprietary_code,
        })
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_tag::<Self>(&self.tag)?;
        codes::local_instrument_code("LocalInstrumentCode", &self.local_instrument_code)?;

        if self.local_instrument_code == PROPRIETARY_LOCAL_INSTRUMENT_CODE {
            charset::alphanumeric("ProprietaryCode", &self.proprietary_code)?;
            charset::required("ProprietaryCode", &self.proprietary_code)?;
        } else if !self.proprietary_code.is_empty() {
            return Err(FieldError::with_value(
                "ProprietaryCode",
                FieldErrorKind::InvalidProperty,
                &self.proprietary_code,
            ));
        }
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut fields = FieldWriter::new(options);
        fields.write_fixed(&self.local_instrument_code, 4);
        fields.write_variable(&self.proprietary_code, 35);
        format!("{}{}", Self::TAG, fields.finish())
    }
}

impl_wire_display!(BusinessFunctionCode, LocalInstrument);
