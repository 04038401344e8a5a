//! The streaming Big5 decoder.

use std::sync::Arc;

use charset_core::{CharsetError, Translator};

use crate::table::{Big5Table, LEAD_MIN};

/// SUB control code; Big5 text archives used it as a line terminator.
const SUB: u8 = 0x1A;

/// Streaming Big5-to-UTF-8 decoder.
///
/// Feed it chunks through [`Translator::translate`]; chunk boundaries may
/// fall anywhere, including between the two bytes of a pair. Malformed
/// input never fails the stream: every broken or unmapped pair comes out
/// as U+FFFD.
#[derive(Debug)]
pub struct Big5Decoder {
    table: Arc<Big5Table>,
    pending_lead: Option<u8>,
    scratch: String,
}

impl Big5Decoder {
    /// Create a decoder backed by the process-wide shared table.
    ///
    /// # Errors
    ///
    /// The cached load failure when the table resource is missing or
    /// corrupt; see [`Big5Table::shared`].
    pub fn new() -> Result<Self, CharsetError> {
        Ok(Self::with_table(Big5Table::shared()?))
    }

    /// Create a decoder backed by a caller-provided table.
    pub fn with_table(table: Arc<Big5Table>) -> Self {
        Self {
            table,
            pending_lead: None,
            scratch: String::new(),
        }
    }
}

impl Translator for Big5Decoder {
    fn translate(&mut self, data: &[u8], eof: bool) -> Result<(usize, &[u8]), CharsetError> {
        self.scratch.clear();
        for &byte in data {
            match self.pending_lead.take() {
                Some(lead) => self
                    .scratch
                    .push(self.table.lookup_or_replacement(lead, byte)),
                None if byte >= LEAD_MIN => self.pending_lead = Some(byte),
                None if byte == SUB => self.scratch.push('\n'),
                None => self.scratch.push(char::from(byte)),
            }
        }
        if eof {
            // A lead whose trail never arrives is dropped at end of stream.
            self.pending_lead = None;
        }
        Ok((data.len(), self.scratch.as_bytes()))
    }
}
