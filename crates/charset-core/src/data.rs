//! Location of charset data files.
//!
//! Charsets that need an external mapping resource resolve it here by its
//! logical name. The directory is process-wide and fixed at first use:
//! either by the first [`set_data_dir`] call, or by the built-in default
//! the moment anything resolves a relative name.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Directory searched for charset data files unless overridden.
pub const DEFAULT_DATA_DIR: &str = "/usr/local/share/charset-rs";

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Override the charset data directory for this process.
///
/// Takes effect only before the directory is first used; returns whether
/// the override won. There is no way to change the directory afterwards.
pub fn set_data_dir(dir: impl Into<PathBuf>) -> bool {
    DATA_DIR.set(dir.into()).is_ok()
}

/// The charset data directory in effect for this process.
///
/// The first call pins the directory for good, falling back to
/// [`DEFAULT_DATA_DIR`] when no override arrived first.
pub fn data_dir() -> &'static Path {
    DATA_DIR
        .get_or_init(|| PathBuf::from(DEFAULT_DATA_DIR))
        .as_path()
}

/// Resolve a data file by its logical name, such as `"big5.dat"`.
///
/// Relative names are joined onto [`data_dir`]; absolute names pass
/// through untouched.
pub fn locate(name: impl AsRef<Path>) -> PathBuf {
    let name = name.as_ref();
    if name.is_absolute() {
        name.to_path_buf()
    } else {
        data_dir().join(name)
    }
}
