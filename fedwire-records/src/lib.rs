/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 10/2/26
******************************************************************************/

//! # FEDWire Records
//!
//! The FEDWire record catalog, message aggregate, reader, and writer.
//!
//! Each Fedwire tag is a typed record implementing
//! [`WireRecord`](record::WireRecord): a declared tag literal, a parser
//! over a full frame, a validator enforcing the catalog's character-class,
//! presence, and cross-field rules, and a formatter for the fixed-width
//! and variable-length output modes.
//!
//! The [`Reader`](reader::Reader) dispatches frames by tag into a
//! [`FedWireMessage`](message::FedWireMessage) aggregate; the
//! [`Writer`](writer::Writer) emits an aggregate back onto a stream.

pub mod accountability;
pub mod envelope;
pub mod instruction;
pub mod institutions;
pub mod message;
pub mod monetary;
pub mod parties;
pub mod reader;
pub mod record;
pub mod remittance;
pub mod writer;

pub use accountability::{InputMessageAccountabilityData, OutputMessageAccountabilityData};
pub use envelope::{SenderSupplied, TypeSubType};
pub use instruction::{BusinessFunctionCode, LocalInstrument};
pub use institutions::{ReceiverDepositoryInstitution, SenderDepositoryInstitution};
pub use message::FedWireMessage;
pub use monetary::{AccountCreditedDrawdown, Amount, ExchangeRate};
pub use parties::{Address, Beneficiary, BeneficiaryReference, Originator, Personal};
pub use reader::Reader;
pub use record::WireRecord;
pub use remittance::{CoverPayment, OriginatorToBeneficiary, Remittance};
pub use writer::Writer;
