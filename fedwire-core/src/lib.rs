/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 9/2/26
******************************************************************************/

//! # FEDWire Core
//!
//! Core types, validators, and error definitions for the FEDWire record
//! engine.
//!
//! This crate provides the fundamental building blocks used across all
//! fedwire crates:
//! - **Error types**: the closed violation taxonomy with `thiserror`
//! - **Character classes**: pure checkers for alphanumeric, numeric, and
//!   amount content
//! - **Code sets**: identification and local instrument code enumerations
//! - **Shared types**: `FormatOptions` and tag constants
//!
//! ## Character-Level Design
//!
//! Subfield widths count characters, never bytes. Every checker and constant
//! here follows that rule so a multi-byte rune can never satisfy a width-N
//! slot by occupying N bytes.

pub mod charset;
pub mod codes;
pub mod error;
pub mod types;

pub use error::{FieldError, FieldErrorKind, ReadError, RecordError};
pub use types::{FormatOptions, DELIMITER, TAG_LENGTH};
