/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 9/2/26
******************************************************************************/

//! Enumerated code sets used by party and instrument records.
//!
//! FEDWire keeps enumerated subfields as their wire strings; these constants
//! name the members and the checkers verify membership. The empty string is a
//! member of every set here, because the owning subfields are optional and
//! presence rules are enforced by the records' cross-field validation.

use crate::error::{FieldError, FieldErrorKind};

/// Identification code: passport number.
pub const PASSPORT_NUMBER: &str = "1";
/// Identification code: tax identification number.
pub const TAX_IDENTIFICATION_NUMBER: &str = "2";
/// Identification code: driver's license number.
pub const DRIVERS_LICENSE_NUMBER: &str = "3";
/// Identification code: alien registration number.
pub const ALIEN_REGISTRATION_NUMBER: &str = "4";
/// Identification code: corporate identification.
pub const CORPORATE_IDENTIFICATION: &str = "5";
/// Identification code: other identification.
pub const OTHER_IDENTIFICATION: &str = "9";
/// Identification code: SWIFT BIC or BEI and account number.
pub const SWIFT_BIC_OR_BEI_AND_ACCOUNT_NUMBER: &str = "B";
/// Identification code: CHIPS identifier.
pub const CHIPS_IDENTIFIER: &str = "C";
/// Identification code: demand deposit account number.
pub const DEMAND_DEPOSIT_ACCOUNT_NUMBER: &str = "D";
/// Identification code: Fed routing number.
pub const FED_ROUTING_NUMBER: &str = "F";
/// Identification code: SWIFT BIC or BEI and CHIPS participant.
pub const BIC_AND_CHIPS_PARTICIPANT: &str = "T";
/// Identification code: CHIPS identifier and account number.
pub const CHIPS_IDENTIFIER_AND_ACCOUNT_NUMBER: &str = "U";

/// All identification code values accepted in a Personal group.
pub const IDENTIFICATION_CODES: &[&str] = &[
    PASSPORT_NUMBER,
    TAX_IDENTIFICATION_NUMBER,
    DRIVERS_LICENSE_NUMBER,
    ALIEN_REGISTRATION_NUMBER,
    CORPORATE_IDENTIFICATION,
    OTHER_IDENTIFICATION,
    SWIFT_BIC_OR_BEI_AND_ACCOUNT_NUMBER,
    CHIPS_IDENTIFIER,
    DEMAND_DEPOSIT_ACCOUNT_NUMBER,
    FED_ROUTING_NUMBER,
    BIC_AND_CHIPS_PARTICIPANT,
    CHIPS_IDENTIFIER_AND_ACCOUNT_NUMBER,
];

/// Local instrument code: ANSI X12 format.
pub const ANSI_X12_FORMAT: &str = "ANSI";
/// Local instrument code: sequence B cover payment structured.
pub const SEQUENCE_B_COVER_PAYMENT_STRUCTURED: &str = "COVS";
/// Local instrument code: general XML format.
pub const GENERAL_XML_FORMAT: &str = "GXML";
/// Local instrument code: ISO 20022 XML format.
pub const ISO20022_XML_FORMAT: &str = "IXML";
/// Local instrument code: narrative text.
pub const NARRATIVE_TEXT: &str = "NARR";
/// Local instrument code: proprietary local instrument code.
pub const PROPRIETARY_LOCAL_INSTRUMENT_CODE: &str = "PROP";
/// Local instrument code: remittance information structured.
pub const REMITTANCE_INFORMATION_STRUCTURED: &str = "RMTS";
/// Local instrument code: related remittance information.
pub const RELATED_REMITTANCE_INFORMATION: &str = "RRMT";
/// Local instrument code: STP 820 format.
pub const STP820_FORMAT: &str = "S820";
/// Local instrument code: SWIFT field 70.
pub const SWIFT_FIELD_70: &str = "SWIF";
/// Local instrument code: UN/EDIFACT format.
pub const UNEDIFACT_FORMAT: &str = "UEDI";

/// All local instrument code values accepted in a LocalInstrument record.
pub const LOCAL_INSTRUMENT_CODES: &[&str] = &[
    ANSI_X12_FORMAT,
    SEQUENCE_B_COVER_PAYMENT_STRUCTURED,
    GENERAL_XML_FORMAT,
    ISO20022_XML_FORMAT,
    NARRATIVE_TEXT,
    PROPRIETARY_LOCAL_INSTRUMENT_CODE,
    REMITTANCE_INFORMATION_STRUCTURED,
    RELATED_REMITTANCE_INFORMATION,
    STP820_FORMAT,
    SWIFT_FIELD_70,
    UNEDIFACT_FORMAT,
];

/// Checks membership in the identification code enumeration.
///
/// # Arguments
/// * `field` - The catalog name of the subfield, used in the error
/// * `value` - The code to check; empty is accepted
///
/// # Errors
/// Returns `FieldErrorKind::IdentificationCode` carrying the offending value.
pub fn identification_code(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.is_empty() || IDENTIFICATION_CODES.contains(&value) {
        Ok(())
    } else {
        Err(FieldError::with_value(
            field,
            FieldErrorKind::IdentificationCode,
            value,
        ))
    }
}

/// Checks membership in the local instrument code enumeration.
///
/// # Arguments
/// * `field` - The catalog name of the subfield, used in the error
/// * `value` - The code to check; empty is accepted
///
/// # Errors
/// Returns `FieldErrorKind::LocalInstrumentCode` carrying the offending value.
pub fn local_instrument_code(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.is_empty() || LOCAL_INSTRUMENT_CODES.contains(&value) {
        Ok(())
    } else {
        Err(FieldError::with_value(
            field,
            FieldErrorKind::LocalInstrumentCode,
            value,
        ))
    }
}
