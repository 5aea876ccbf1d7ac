/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 10/2/26
******************************************************************************/

//! Message accountability records.
//!
//! - [`InputMessageAccountabilityData`] (`{1520}`): the IMAD assigned by the
//!   sender, identifying the message within its cycle date.
//! - [`OutputMessageAccountabilityData`] (`{1120}`): the OMAD stamped on
//!   delivered messages.
//!
//! Every subfield in both records is width-significant, so the fixed and
//! variable serializations are identical.

use crate::record::{check_tag, impl_wire_display, open_frame, WireRecord};
use fedwire_codec::{FieldReader, FieldWriter};
use fedwire_core::charset;
use fedwire_core::error::{FieldError, RecordError};
use fedwire_core::types::FormatOptions;
use serde::{Deserialize, Serialize};

/// InputMessageAccountabilityData is the `{1520}` record: the input cycle
/// date, input source, and input sequence number that together form the
/// IMAD of a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMessageAccountabilityData {
    /// The record tag, `{1520}`.
    pub tag: String,
    /// InputCycleDate (CCYYMMDD) the message entered the service.
    pub input_cycle_date: String,
    /// InputSource identifying the sending endpoint.
    pub input_source: String,
    /// InputSequenceNumber within the cycle date.
    pub input_sequence_number: String,
}

impl InputMessageAccountabilityData {
    /// Creates an empty record with the tag pre-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            ..Self::default()
        }
    }
}

impl WireRecord for InputMessageAccountabilityData {
    const TAG: &'static str = "{1520}";
    const NAME: &'static str = "InputMessageAccountabilityData";

    fn parse(record: &str) -> Result<Self, RecordError> {
        let (tag, rest) = open_frame(record, 8)?;
        let mut fields = FieldReader::new(rest);

        let input_cycle_date = fields.read_fixed("InputCycleDate", 8)?;
        let input_source = fields.read_fixed("InputSource", 8)?;
        let input_sequence_number = fields.read_fixed("InputSequenceNumber", 6)?;
        fields.finish()?;

        Ok(Self {
            tag: tag.to_string(),
            input_cycle_date,
            input_source,
            input_sequence_number,
        })
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_tag::<Self>(&self.tag)?;
        charset::numeric("InputCycleDate", &self.input_cycle_date)?;
        charset::alphanumeric("InputSource", &self.input_source)?;
        charset::numeric("InputSequenceNumber", &self.input_sequence_number)?;
        charset::required("InputCycleDate", &self.input_cycle_date)?;
        charset::required("InputSource", &self.input_source)?;
        charset::required("InputSequenceNumber", &self.input_sequence_number)?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut fields = FieldWriter::new(options);
        fields.write_fixed(&self.input_cycle_date, 8);
        fields.write_fixed(&self.input_source, 8);
        fields.write_fixed(&self.input_sequence_number, 6);
        format!("{}{}", Self::TAG, fields.finish())
    }
}

/// OutputMessageAccountabilityData is the `{1120}` record: the OMAD stamped
/// on a message as it leaves the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputMessageAccountabilityData {
    /// The record tag, `{1120}`.
    pub tag: String,
    /// OutputCycleDate (CCYYMMDD).
    pub output_cycle_date: String,
    /// OutputDestinationID of the receiving endpoint.
    pub output_destination_id: String,
    /// OutputSequenceNumber within the cycle date.
    pub output_sequence_number: String,
    /// OutputDate (MMDD).
    pub output_date: String,
    /// OutputTime (HHmm).
    pub output_time: String,
    /// OutputFRBApplicationIdentification.
    pub output_frb_application_identification: String,
}

impl OutputMessageAccountabilityData {
    /// Creates an empty record with the tag pre-set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tag: Self::TAG.to_string(),
            ..Self::default()
        }
    }
}

impl WireRecord for OutputMessageAccountabilityData {
    const TAG: &'static str = "{1120}";
    const NAME: &'static str = "OutputMessageAccountabilityData";

    fn parse(record: &str) -> Result<Self, RecordError> {
        let (tag, rest) = open_frame(record, 8)?;
        let mut fields = FieldReader::new(rest);

        let output_cycle_date = fields.read_fixed("OutputCycleDate", 8)?;
        let output_destination_id = fields.read_fixed("OutputDestinationID", 8)?;
        let output_sequence_number = fields.read_fixed("OutputSequenceNumber", 6)?;
        let output_date = fields.read_fixed("OutputDate", 4)?;
        let output_time = fields.read_fixed("OutputTime", 4)?;
        let output_frb_application_identification =
            fields.read_fixed("OutputFRBApplicationIdentification", 4)?;
        fields.finish()?;

        Ok(Self {
            tag: tag.to_string(),
            output_cycle_date,
            output_destination_id,
            output_sequence_number,
            output_date,
            output_time,
            output_frb_application_identification,
        })
    }

    fn validate(&self) -> Result<(), FieldError> {
        check_tag::<Self>(&self.tag)?;
        charset::numeric("OutputCycleDate", &self.output_cycle_date)?;
        charset::alphanumeric("OutputDestinationID", &self.output_destination_id)?;
        charset::numeric("OutputSequenceNumber", &self.output_sequence_number)?;
        charset::numeric("OutputDate", &self.output_date)?;
        charset::numeric("OutputTime", &self.output_time)?;
        charset::alphanumeric(
            "OutputFRBApplicationIdentification",
            &self.output_frb_application_identification,
        )?;
        Ok(())
    }

    fn format(&self, options: FormatOptions) -> String {
        let mut fields = FieldWriter::new(options);
        fields.write_fixed(&self.output_cycle_date, 8);
        fields.write_fixed(&self.output_destination_id, 8);
        fields.write_fixed(&self.output_sequence_number, 6);
        fields.write_fixed(&self.output_date, 4);
        fields.write_fixed(&self.output_time, 4);
        fields.write_fixed(&self.output_frb_application_identification, 4);
        format!("{}{}", Self::TAG, fields.finish())
    }
}

impl_wire_display!(InputMessageAccountabilityData, OutputMessageAccountabilityData);
