//! The Big5 mapping table.
//!
//! Big5 consists of 89 fonts of 157 characters each. The on-disk resource
//! is one byte per slot, 13973 bytes in all: the code point assigned to
//! that slot, or 255 for a slot with no assignment.

use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use charset_core::{CharsetError, data};
use tracing::{debug, warn};

/// Number of fonts (rows) in the table.
pub const FONT_COUNT: usize = 89;

/// Number of character slots per font.
pub const FONT_SIZE: usize = 157;

/// Total number of slots in the table.
pub const TABLE_LEN: usize = FONT_COUNT * FONT_SIZE;

/// Logical name of the on-disk table resource.
pub const BIG5_DATA: &str = "big5.dat";

/// First valid lead byte; also the offset subtracted from a lead to get
/// its font row.
pub(crate) const LEAD_MIN: u8 = 0xA1;

/// Resource byte marking a slot with no assigned character.
const NO_MAPPING: u8 = 0xFF;

/// The decoded Big5 table: one optional character per slot.
#[derive(Debug, Clone)]
pub struct Big5Table {
    points: Vec<Option<char>>,
}

impl Big5Table {
    /// Decode a table from the raw resource bytes.
    ///
    /// `name` identifies the resource in error messages.
    ///
    /// # Errors
    ///
    /// [`CharsetError::CorruptTable`] unless `raw` is exactly
    /// [`TABLE_LEN`] bytes.
    pub fn from_bytes(name: &str, raw: &[u8]) -> Result<Self, CharsetError> {
        if raw.len() != TABLE_LEN {
            return Err(CharsetError::CorruptTable {
                name: name.to_string(),
                expected: TABLE_LEN,
                found: raw.len(),
            });
        }
        let points = raw
            .iter()
            .map(|&b| match b {
                NO_MAPPING => None,
                b => char::from_u32(u32::from(b)),
            })
            .collect();
        Ok(Self { points })
    }

    /// Read and decode the table resource at `path`.
    ///
    /// # Errors
    ///
    /// [`CharsetError::ResourceUnavailable`] when the file cannot be
    /// read, [`CharsetError::CorruptTable`] when its length is wrong.
    pub fn read(path: &Path) -> Result<Self, CharsetError> {
        let name = path.display().to_string();
        let raw = fs::read(path).map_err(|err| CharsetError::ResourceUnavailable {
            name: name.clone(),
            detail: err.to_string(),
        })?;
        Self::from_bytes(&name, &raw)
    }

    /// The process-wide shared table, loading it on first use.
    ///
    /// The resource is resolved through [`charset_core::data::locate`] and
    /// read at most once per process. The outcome is cached either way:
    /// after a failed load every caller gets the same error back, and the
    /// file is not consulted again.
    ///
    /// # Errors
    ///
    /// The cached failure, if the one load attempt failed.
    pub fn shared() -> Result<Arc<Self>, CharsetError> {
        static TABLE: OnceLock<Result<Arc<Big5Table>, CharsetError>> = OnceLock::new();
        TABLE
            .get_or_init(|| {
                let path = data::locate(BIG5_DATA);
                match Self::read(&path) {
                    Ok(table) => {
                        debug!("loaded Big5 table from {} ({} fonts)", path.display(), FONT_COUNT);
                        Ok(Arc::new(table))
                    }
                    Err(err) => {
                        warn!("Big5 table unavailable: {err}");
                        Err(err)
                    }
                }
            })
            .clone()
    }

    /// Look up the character for a lead/trail pair.
    ///
    /// `None` for an invalid trail byte, for a pair addressing a slot
    /// past the end of the table, and for a slot with no assignment.
    pub fn lookup(&self, lead: u8, trail: u8) -> Option<char> {
        let font = usize::from(lead).checked_sub(usize::from(LEAD_MIN))?;
        let offset = trail_offset(trail)?;
        self.points.get(font * FONT_SIZE + offset).copied().flatten()
    }

    /// Like [`lookup`](Self::lookup), with every miss collapsed to U+FFFD.
    pub fn lookup_or_replacement(&self, lead: u8, trail: u8) -> char {
        self.lookup(lead, trail)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Column of a trail byte within its font, or `None` for bytes outside
/// the two valid trail ranges.
fn trail_offset(trail: u8) -> Option<usize> {
    match trail {
        0x40..=0x7E => Some(usize::from(trail) - 0x40),
        0xA1..=0xFE => Some(usize::from(trail) - 0xA1 + 63),
        _ => None,
    }
}
