/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 10/2/26
******************************************************************************/

//! Monetary records.
//!
//! - [`Amount`] (`{2000}`): the transfer amount, twelve characters,
//!   right-justified and zero-filled on the wire.
//! - [`ExchangeRate`] (`{3720}`): the exchange rate applied to a
//!   cross-currency transfer.
//! - [`AccountCreditedDrawdown`] (`{5400}`): the nine-digit account
//!   credited on a drawdown.
//!
//! Wire values stay strings; [`Amount::decimal`] offers a typed view for
//! consumers that want one.

use crate::record::{check_tag, impl_wire_display, open_frame, WireRecord};
use fedwire_codec::{FieldReader, FieldWriter};
use fedwire_core::charset;
use fedwire_core::error::{FieldError, RecordError};
use fedwire_core::types::FormatOptions;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Amount is the `{2000}` record carrying the transfer amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// The record tag, `{2000}`.
    pub tag: String,
    /// Amount of the transfer, digits with optional group separators.
    pub amount: String,
}

impl Amount {
    /// Creates an empty record with the tag pre-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            ..Self::default()
        }
    }

    /// Returns the amount as a decimal, ignoring group separators.
    ///
    /// Interpretation of implied decimal places is left to the caller.
    #[must_use]
    pub fn decimal(&self) -> Option<Decimal> {
        Decimal::from_str(&self.amount.replace(',', "")).ok()
    }
}

impl WireRecord for Amount {
    const TAG: &'static str = "{2000}";
    const NAME: &'static str = "Amount";

    fn parse(record: &str) -> Result<Self, RecordError> {
        let (tag, rest) = open_frame(record, 7)?;
        let mut fields = FieldReader::new(rest);

        let amount = fields.read_fixed("Amount", 12)?;
        fields.finish()?;

        Ok(Self {
            tag: tag.to_string(),
            amount,
        })
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_tag::<Self>(&self.tag)?;
        charset::amount("Amount", &self.amount)?;
        charset::required("Amount", &self.amount)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut fields = FieldWriter::new(options);
        fields.write_fixed(&self.amount, 12);
        format!("{}{}", Self::TAG, fields.finish())
    }
}

/// ExchangeRate is the `{3720}` record carrying the rate applied to a
/// cross-currency transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// The record tag, `{3720}`.
    pub tag: String,
    /// ExchangeRate, digits with optional separators.
    pub exchange_rate: String,
}

impl ExchangeRate {
    /// Creates an empty record with the tag pre-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            ..Self::default()
        }
    }
}

impl WireRecord for ExchangeRate {
    const TAG: &'static str = "{3720}";
    const NAME: &'static str = "ExchangeRate";

    fn parse(record: &str) -> Result<Self, RecordError> {
        let (tag, rest) = open_frame(record, 6)?;
        let mut fields = FieldReader::new(rest);

        let exchange_rate = fields.read_variable("ExchangeRate", 12)?;
        fields.finish()?;

        Ok(Self {
            tag: tag.to_string(),
            exchange_rate,
        })
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_tag::<Self>(&self.tag)?;
        charset::amount("ExchangeRate", &self.exchange_rate)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut fields = FieldWriter::new(options);
        fields.write_variable(&self.exchange_rate, 12);
        format!("{}{}", Self::TAG, fields.finish())
    }
}

/// AccountCreditedDrawdown is the `{5400}` record naming the account
/// credited on a drawdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCreditedDrawdown {
    /// The record tag, `{5400}`.
    pub tag: String,
    /// DrawdownCreditAccountNumber, nine digits.
    pub drawdown_credit_account_number: String,
}

impl AccountCreditedDrawdown {
    /// Creates an empty record with the tag pre-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            ..Self::default()
        }
    }
}

impl WireRecord for AccountCreditedDrawdown {
    const TAG: &'static str = "{5400}";
    const NAME: &'static str = "AccountCreditedDrawdown";

    fn parse(record: &str) -> Result<Self, RecordError> {
        let (tag, rest) = open_frame(record, 7)?;
        let mut fields = FieldReader::new(rest);

        let drawdown_credit_account_number = fields.read_fixed("DrawdownCreditAccountNumber", 9)?;
        fields.finish()?;

        Ok(Self {
            tag: tag.to_string(),
            drawdown_credit_account_number,
        })
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_tag::<Self>(&self.tag)?;
        charset::numeric(
            "DrawdownCreditAccountNumber",
            &self.drawdown_credit_account_number,
        )?;
        charset::required(
            "DrawdownCreditAccountNumber",
            &self.drawdown_credit_account_number,
        )?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut fields = FieldWriter::new(options);
        fields.write_fixed(&self.drawdown_credit_account_number, 9);
        format!("{}{}", Self::TAG, fields.finish())
    }
}

impl_wire_display!(Amount, ExchangeRate, AccountCreditedDrawdown);
