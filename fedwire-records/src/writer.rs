/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 10/2/26
******************************************************************************/

//! Writer for FEDWire message streams.
//!
//! Emits a message's records in ascending tag order on a single line, in
//! the selected output mode, followed by a newline. What the writer emits,
//! a [`Reader`](crate::reader::Reader) reads back to an equal aggregate.

use crate::message::FedWireMessage;
use fedwire_core::types::FormatOptions;
use std::io::{self, Write};
use tracing::debug;

/// Streaming writer for FEDWire messages.
#[derive(Debug)]
pub struct Writer<W: Write> {
    inner: W,
    options: FormatOptions,
}

impl<W: Write> Writer<W> {
    /// Creates a writer emitting the canonical fixed-width form.
    pub fn new(inner: W) -> Self {
        Self::with_options(inner, FormatOptions::default())
    }

    /// Creates a writer with explicit output options.
    ///
    /// # Arguments
    /// * `inner` - The output stream
    /// * `options` - The serialization mode for every record
    pub const fn with_options(inner: W, options: FormatOptions) -> Self {
        Self { inner, options }
    }

    /// Writes one message and flushes the stream.
    ///
    /// # Errors
    /// Any I/O error from the underlying stream.
    pub fn write_message(&mut self, message: &FedWireMessage) -> io::Result<()> {
        let line = message.format(self.options);
        debug!(
            chars = line.chars().count(),
            variable = self.options.variable_length_fields,
            "writing message"
        );
        writeln!(self.inner, "{line}")?;
        self.inner.flush()
    }

    /// Consumes the writer and returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
