/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 10/2/26
******************************************************************************/

//! # FEDWire
//!
//! A parser, validator, and serializer for FEDWire funds-transfer messages.
//!
//! A FEDWire message is an ordered concatenation of tagged records; each
//! record is a six-character tag (`{NNNN}`) followed by subfields with
//! strict character-class and semantic rules. Records serialize in two
//! modes, fixed-width (space-padded, positional) and variable-length
//! (`*`-delimited), and a valid message round-trips through either.
//!
//! ## Quick Start
//!
//! ```rust
//! use fedwire::prelude::*;
//!
//! let message = FedWireMessage::parse("{3720}1,2345*").unwrap();
//! let rate = message.exchange_rate.as_ref().unwrap();
//! assert_eq!(rate.exchange_rate, "1,2345");
//! assert_eq!(rate.format(FormatOptions::variable()), "{3720}1,2345*");
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: error taxonomy, character-class validators, code sets
//! - [`codec`]: the dual-mode subfield decoder and encoder
//! - [`records`]: the record catalog, message aggregate, reader, and writer

pub mod core {
    //! Error taxonomy, character-class validators, and code sets.
    pub use fedwire_core::*;
}

pub mod codec {
    //! Dual-mode subfield decoding and encoding.
    pub use fedwire_codec::*;
}

pub mod records {
    //! The record catalog, message aggregate, reader, and writer.
    pub use fedwire_records::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fedwire_core::{
        FieldError, FieldErrorKind, FormatOptions, ReadError, RecordError,
    };

    // Subfield codec
    pub use fedwire_codec::{FieldReader, FieldWriter};

    // Records
    pub use fedwire_records::{
        AccountCreditedDrawdown, Address, Amount, Beneficiary, BeneficiaryReference,
        BusinessFunctionCode, CoverPayment, ExchangeRate, FedWireMessage,
        InputMessageAccountabilityData, LocalInstrument, Originator, OriginatorToBeneficiary,
        OutputMessageAccountabilityData, Personal, Reader, ReceiverDepositoryInstitution,
        Remittance, SenderDepositoryInstitution, SenderSupplied, TypeSubType, WireRecord, Writer,
    };
}
