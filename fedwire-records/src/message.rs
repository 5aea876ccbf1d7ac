/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 10/2/26
******************************************************************************/

//! The FEDWire message aggregate.
//!
//! A message is an ordered collection of optional record slots, one per
//! record type. Slots are populated by the [`Reader`](crate::reader::Reader)
//! or directly by a caller building a message for output; serialization
//! emits the present records in ascending tag order.

use crate::accountability::{InputMessageAccountabilityData, OutputMessageAccountabilityData};
use crate::envelope::{SenderSupplied, TypeSubType};
use crate::instruction::{BusinessFunctionCode, LocalInstrument};
use crate::institutions::{ReceiverDepositoryInstitution, SenderDepositoryInstitution};
use crate::monetary::{AccountCreditedDrawdown, Amount, ExchangeRate};
use crate::parties::{Beneficiary, BeneficiaryReference, Originator};
use crate::reader::Reader;
use crate::record::WireRecord;
use crate::remittance::{OriginatorToBeneficiary, Remittance};
use fedwire_core::error::{FieldError, ReadError};
use fedwire_core::types::FormatOptions;
use serde::{Deserialize, Serialize};

/// An ordered collection of at most one record per type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FedWireMessage {
    /// `{1120}` OutputMessageAccountabilityData.
    pub output_message_accountability_data: Option<OutputMessageAccountabilityData>,
    /// `{1500}` SenderSupplied.
    pub sender_supplied: Option<SenderSupplied>,
    /// `{1510}` TypeSubType.
    pub type_sub_type: Option<TypeSubType>,
    /// `{1520}` InputMessageAccountabilityData.
    pub input_message_accountability_data: Option<InputMessageAccountabilityData>,
    /// `{2000}` Amount.
    pub amount: Option<Amount>,
    /// `{3100}` SenderDepositoryInstitution.
    pub sender_depository_institution: Option<SenderDepositoryInstitution>,
    /// `{3400}` ReceiverDepositoryInstitution.
    pub receiver_depository_institution: Option<ReceiverDepositoryInstitution>,
    /// `{3600}` BusinessFunctionCode.
    pub business_function_code: Option<BusinessFunctionCode>,
    /// `{3610}` LocalInstrument.
    pub local_instrument: Option<LocalInstrument>,
    /// `{3720}` ExchangeRate.
    pub exchange_rate: Option<ExchangeRate>,
    /// `{4200}` Beneficiary.
    pub beneficiary: Option<Beneficiary>,
    /// `{4320}` BeneficiaryReference.
    pub beneficiary_reference: Option<BeneficiaryReference>,
    /// `{5000}` Originator.
    pub originator: Option<Originator>,
    /// `{5400}` AccountCreditedDrawdown.
    pub account_credited_drawdown: Option<AccountCreditedDrawdown>,
    /// `{6000}` OriginatorToBeneficiary.
    pub originator_to_beneficiary: Option<OriginatorToBeneficiary>,
    /// `{7070}` Remittance.
    pub remittance: Option<Remittance>,
}

impl FedWireMessage {
    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a complete message from text.
    ///
    /// Convenience over constructing a [`Reader`] by hand.
    ///
    /// # Errors
    /// The first [`ReadError`] encountered.
    pub fn parse(input: &str) -> Result<Self, ReadError> {
        Reader::new(input.as_bytes()).read()
    }

    /// Serializes the present records in ascending tag order.
    #[must_use]
    pub fn format(&self, options: FormatOptions) -> String {
        macro_rules! format_slot {
            ($out:ident, $($slot:ident),+ $(,)?) => {$(
                if let Some(record) = &self.$slot {
                    $out.push_str(&record.format(options));
                }
            )+};
        }
        let mut out = String::new();
        format_slot!(
            out,
            output_message_accountability_data,
            sender_supplied,
            type_sub_type,
            input_message_accountability_data,
            amount,
            sender_depository_institution,
            receiver_depository_institution,
            business_function_code,
            local_instrument,
            exchange_rate,
            beneficiary,
            beneficiary_reference,
            originator,
            account_credited_drawdown,
            originator_to_beneficiary,
            remittance,
        );
        out
    }

    /// Validates every present record, first failure wins.
    ///
    /// Cross-record legality is an upper-layer concern; this checks each
    /// record against its own catalog rules.
    ///
    /// # Errors
    /// The first [`FieldError`] from any present record.
    pub fn validate(&self) -> Result<(), FieldError> {
        macro_rules! validate_slot {
            ($($slot:ident),+ $(,)?) => {$(
                if let Some(record) = &self.$slot {
                    record.validate()?;
                }
            )+};
        }
        validate_slot!(
            output_message_accountability_data,
            sender_supplied,
            type_sub_type,
            input_message_accountability_data,
            amount,
            sender_depository_institution,
            receiver_depository_institution,
            business_function_code,
            local_instrument,
            exchange_rate,
            beneficiary,
            beneficiary_reference,
            originator,
            account_credited_drawdown,
            originator_to_beneficiary,
            remittance,
        );
        Ok(())
    }

}
