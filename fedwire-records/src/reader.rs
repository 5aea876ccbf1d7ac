/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 10/2/26
******************************************************************************/

//! Reader and tag dispatcher for FEDWire message streams.
//!
//! The [`Reader`] consumes an input stream line by line. Within a line it
//! locates each `{`, takes six characters as the tag literal, slices the
//! record frame up to the next `{` (the alphanumeric character set excludes
//! braces, so the boundary is unambiguous), dispatches through the static
//! tag table, validates the parsed record, and installs it into the message
//! aggregate.
//!
//! The first error is cached and replayed verbatim on every subsequent
//! `read()`, and the partially populated aggregate stays inspectable.

use crate::accountability::{InputMessageAccountabilityData, OutputMessageAccountabilityData};
use crate::envelope::{SenderSupplied, TypeSubType};
use crate::instruction::{BusinessFunctionCode, LocalInstrument};
use crate::institutions::{ReceiverDepositoryInstitution, SenderDepositoryInstitution};
use crate::message::FedWireMessage;
use crate::monetary::{AccountCreditedDrawdown, Amount, ExchangeRate};
use crate::parties::{Beneficiary, BeneficiaryReference, Originator};
use crate::record::WireRecord;
use crate::remittance::{OriginatorToBeneficiary, Remittance};
use fedwire_codec::char_index;
use fedwire_core::error::{ReadError, RecordError};
use fedwire_core::types::{is_tag, TAG_LENGTH};
use memchr::memchr;
use std::io::BufRead;
use tracing::trace;

/// Streaming reader for FEDWire messages.
///
/// A `Reader` is a single-owner object; independent readers over
/// independent streams need no coordination.
#[derive(Debug)]
pub struct Reader<R> {
    input: R,
    line_num: usize,
    message: FedWireMessage,
    error: Option<ReadError>,
}

impl<R: BufRead> Reader<R> {
    /// Creates a reader over an input stream.
    ///
    /// # Arguments
    /// * `input` - The character stream holding one message
    pub fn new(input: R) -> Self {
        Self {
            input,
            line_num: 0,
            message: FedWireMessage::new(),
            error: None,
        }
    }

    /// Reads records from the stream and returns the populated aggregate.
    ///
    /// After a failure the same error is returned by every subsequent call;
    /// the records parsed before the failure remain available through
    /// [`message`](Self::message).
    ///
    /// # Errors
    /// The first [`ReadError`] encountered.
    pub fn read(&mut self) -> Result<FedWireMessage, ReadError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        let mut line = String::new();
        loop {
            line.clear();
            let n = self.input.read_line(&mut line)?;
            if n == 0 {
                break;
            }
            self.line_num += 1;
            let content = line.trim_end_matches(['\r', '\n']);
            if content.is_empty() {
                continue;
            }
            if let Err(err) = self.parse_line(content) {
                self.error = Some(err.clone());
                return Err(err);
            }
        }
        Ok(self.message.clone())
    }

    /// Returns the aggregate as populated so far, including after an error.
    #[must_use]
    pub const fn message(&self) -> &FedWireMessage {
        &self.message
    }

    /// Splits a line into record frames on `{` boundaries and dispatches
    /// each one.
    fn parse_line(&mut self, line: &str) -> Result<(), ReadError> {
        let bytes = line.as_bytes();
        let mut pos = 0;
        while pos < bytes.len() {
            if bytes[pos] != b'{' {
                return Err(ReadError::UnknownTag {
                    line: self.line_num,
                    tag: snippet(&line[pos..]),
                });
            }
            let end = memchr(b'{', &bytes[pos + 1..]).map_or(line.len(), |i| pos + 1 + i);
            self.dispatch(&line[pos..end])?;
            pos = end;
        }
        Ok(())
    }

    /// Looks the frame's tag up in the static tag table and installs the
    /// parsed record.
    fn dispatch(&mut self, frame: &str) -> Result<(), ReadError> {
        let tag = match char_index(frame, TAG_LENGTH) {
            Some(end) => &frame[..end],
            None => frame,
        };
        if !is_tag(tag) {
            return Err(ReadError::UnknownTag {
                line: self.line_num,
                tag: tag.to_string(),
            });
        }
        trace!(line = self.line_num, tag, "dispatching record");

        match tag {
            OutputMessageAccountabilityData::TAG => {
                self.install(frame, |m| &mut m.output_message_accountability_data)
            }
            SenderSupplied::TAG => self.install(frame, |m| &mut m.sender_supplied),
            TypeSubType::TAG => self.install(frame, |m| &mut m.type_sub_type),
            InputMessageAccountabilityData::TAG => {
                self.install(frame, |m| &mut m.input_message_accountability_data)
            }
            Amount::TAG => self.install(frame, |m| &mut m.amount),
            SenderDepositoryInstitution::TAG => {
                self.install(frame, |m| &mut m.sender_depository_institution)
            }
            ReceiverDepositoryInstitution::TAG => {
                self.install(frame, |m| &mut m.receiver_depository_institution)
            }
            BusinessFunctionCode::TAG => self.install(frame, |m| &mut m.business_function_code),
            LocalInstrument::TAG => self.install(frame, |m| &mut m.local_instrument),
            ExchangeRate::TAG => self.install(frame, |m| &mut m.exchange_rate),
            Beneficiary::TAG => self.install(frame, |m| &mut m.beneficiary),
            BeneficiaryReference::TAG => self.install(frame, |m| &mut m.beneficiary_reference),
            Originator::TAG => self.install(frame, |m| &mut m.originator),
            AccountCreditedDrawdown::TAG => {
                self.install(frame, |m| &mut m.account_credited_drawdown)
            }
            OriginatorToBeneficiary::TAG => {
                self.install(frame, |m| &mut m.originator_to_beneficiary)
            }
            Remittance::TAG => self.install(frame, |m| &mut m.remittance),
            _ => Err(ReadError::UnknownTag {
                line: self.line_num,
                tag: tag.to_string(),
            }),
        }
    }

    /// Parses, validates, and installs one record frame into its slot.
    fn install<T, F>(&mut self, frame: &str, slot: F) -> Result<(), ReadError>
    where
        T: WireRecord,
        F: FnOnce(&mut FedWireMessage) -> &mut Option<T>,
    {
        let line = self.line_num;
        let record = T::parse(frame).map_err(|source| ReadError::Parse {
            line,
            record: T::NAME,
            source,
        })?;
        record.validate().map_err(|err| ReadError::Parse {
            line,
            record: T::NAME,
            source: RecordError::Field(err),
        })?;

        let slot = slot(&mut self.message);
        if slot.is_some() {
            return Err(ReadError::DuplicateRecord {
                line,
                record: T::NAME,
            });
        }
        *slot = Some(record);
        trace!(record = T::NAME, "installed record");
        Ok(())
    }
}

/// First six characters of `s`, for unknown-tag error context.
fn snippet(s: &str) -> String {
    match char_index(s, TAG_LENGTH) {
        Some(end) => s[..end].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fedwire_core::error::{FieldError, FieldErrorKind};

    fn read_line(line: &str) -> Result<FedWireMessage, ReadError> {
        Reader::new(line.as_bytes()).read()
    }

    #[test]
    fn test_read_single_record() {
        let message = read_line("{2000}000000001234").unwrap();
        assert_eq!(message.amount.unwrap().amount, "000000001234");
    }

    #[test]
    fn test_read_multiple_records_one_line() {
        let message = read_line("{1500}30User ReqP {1510}1000{2000}000000001234").unwrap();

        assert!(message.sender_supplied.is_some());
        assert!(message.type_sub_type.is_some());
        assert!(message.amount.is_some());
        assert!(message.beneficiary.is_none());
    }

    #[test]
    fn test_read_records_across_lines() {
        let input = "{1500}30User ReqP \n{2000}000000001234\n";
        let message = Reader::new(input.as_bytes()).read().unwrap();

        assert!(message.sender_supplied.is_some());
        assert!(message.amount.is_some());
    }

    #[test]
    fn test_read_empty_input() {
        let message = read_line("").unwrap();
        assert_eq!(message, FedWireMessage::new());
    }

    #[test]
    fn test_unknown_tag() {
        let err = read_line("{9999}000000001234").unwrap_err();
        assert_eq!(
            err,
            ReadError::UnknownTag {
                line: 1,
                tag: "{9999}".to_string()
            }
        );
    }

    #[test]
    fn test_leading_junk_is_unknown_tag() {
        let err = read_line("junk{2000}000000001234").unwrap_err();
        assert_eq!(
            err,
            ReadError::UnknownTag {
                line: 1,
                tag: "junk{2".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_record_rejected() {
        let err = read_line("{2000}000000001234{2000}000000005678").unwrap_err();
        assert_eq!(
            err,
            ReadError::DuplicateRecord {
                line: 1,
                record: "Amount"
            }
        );
    }

    #[test]
    fn test_parse_error_carries_context() {
        let line = format!("{{3610}}ABCD{}*", " ".repeat(35));
        let err = read_line(&line).unwrap_err();

        let expected = ReadError::Parse {
            line: 1,
            record: "LocalInstrument",
            source: RecordError::Field(FieldError::with_value(
                "LocalInstrumentCode",
                FieldErrorKind::LocalInstrumentCode,
                "ABCD",
            )),
        };
        assert_eq!(err, expected);
    }

    #[test]
    fn test_error_replay_on_subsequent_read() {
        let line = format!("{{3610}}ABCD{}*", " ".repeat(35));
        let mut reader = Reader::new(line.as_bytes());

        let first = reader.read().unwrap_err();
        let second = reader.read().unwrap_err();
        assert_eq!(first, second);
    }

    #[test]
    fn test_partial_aggregate_inspectable_after_error() {
        let line = format!("{{2000}}000000001234{{3610}}ABCD{}*", " ".repeat(35));
        let mut reader = Reader::new(line.as_bytes());

        assert!(reader.read().is_err());
        assert!(reader.message().amount.is_some());
        assert!(reader.message().local_instrument.is_none());
    }

    #[test]
    fn test_validation_error_wrapped_not_installed() {
        // Scenario 6 shape: identification code without identifier.
        let err = read_line("{5000}D*").unwrap_err();
        assert_eq!(
            err,
            ReadError::Parse {
                line: 1,
                record: "Originator",
                source: RecordError::Field(FieldError::new(
                    "Identifier",
                    FieldErrorKind::FieldRequired
                )),
            }
        );
    }

    #[test]
    fn test_read_full_message() {
        let line = concat!(
            "{1500}30User ReqP ",
            "{1510}1000",
            "{1520}20190502Source08000001",
            "{2000}000000001234",
            "{3100}121042882Wells Fargo NA    *",
            "{3400}231380104Citadel           *",
            "{3600}CTR   *",
            "{4200}31234*Name*Address One*Address Two*Address Three*",
            "{5000}B1*",
        );
        let message = read_line(line).unwrap();

        assert_eq!(message.type_sub_type.as_ref().unwrap().type_code, "10");
        assert_eq!(
            message.beneficiary.as_ref().unwrap().personal.name,
            "Name"
        );
        assert_eq!(
            message.originator.as_ref().unwrap().personal.identifier,
            "1"
        );
        assert!(message.validate().is_ok());
    }
}
