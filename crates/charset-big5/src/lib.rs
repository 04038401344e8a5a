//! Big5 to Unicode streaming decoding.
//!
//! Big5 is the traditional-Chinese double-byte charset: a lead byte at
//! 0xA1 or above selects one of 89 fonts of 157 characters, and the trail
//! byte selects the slot within the font. The mapping itself ships as an
//! external resource (see [`BIG5_DATA`]), loaded once per process and
//! shared by every decoder.
//!
//! ```
//! use std::sync::Arc;
//!
//! use charset_big5::{Big5Decoder, Big5Table, TABLE_LEN};
//! use charset_core::Translator;
//!
//! // 0xA4 0x40 addresses font 3, first column: slot 471.
//! let mut raw = vec![0xFF; TABLE_LEN];
//! raw[471] = b'A';
//! let table = Arc::new(Big5Table::from_bytes("big5.dat", &raw)?);
//!
//! let mut decoder = Big5Decoder::with_table(table);
//! let (consumed, out) = decoder.translate(&[0xA4, 0x40, b'!'], true)?;
//! assert_eq!(consumed, 3);
//! assert_eq!(out, "A!".as_bytes());
//! # Ok::<(), charset_core::CharsetError>(())
//! ```

mod decoder;
mod table;

pub use decoder::Big5Decoder;
pub use table::{BIG5_DATA, Big5Table, FONT_COUNT, FONT_SIZE, TABLE_LEN};

use charset_core::{CharsetError, Registry, Translator};

/// Factory for [`Registry`] entries: a decoder over the shared table.
///
/// # Errors
///
/// The cached table load failure; see [`Big5Table::shared`].
pub fn new_translator() -> Result<Box<dyn Translator>, CharsetError> {
    Ok(Box::new(Big5Decoder::new()?))
}

/// Register the Big5 decoder under the name `"big5"`.
pub fn register(registry: &mut Registry) {
    registry.register("big5", new_translator);
}
