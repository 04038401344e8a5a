//! The charset registry.
//!
//! Maps charset names to translator factories. The registry is plain data:
//! the embedding application constructs one and registers the charsets it
//! wants at startup. Nothing registers itself behind the caller's back.

use std::collections::HashMap;

use crate::error::CharsetError;
use crate::translator::Translator;

/// Builds a fresh translator for one charset.
pub type TranslatorFactory = fn() -> Result<Box<dyn Translator>, CharsetError>;

/// A name-to-factory table of available charsets.
///
/// Lookups fold the name first (ASCII lowercase, with `-`, `_` and spaces
/// dropped), so `"Big5"`, `"big-5"` and `"BIG_5"` all address the same
/// entry.
#[derive(Debug, Default)]
pub struct Registry {
    factories: HashMap<String, TranslatorFactory>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`.
    ///
    /// A second registration whose name folds to the same key replaces the
    /// first.
    pub fn register(&mut self, name: &str, factory: TranslatorFactory) {
        self.factories.insert(fold_name(name), factory);
    }

    /// Whether a charset is registered under `name`, after folding.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&fold_name(name))
    }

    /// Build a translator for the charset registered under `name`.
    ///
    /// # Errors
    ///
    /// [`CharsetError::UnsupportedCharset`] when nothing is registered
    /// under the folded name; otherwise whatever the factory reports,
    /// typically a mapping-table load failure.
    pub fn translator(&self, name: &str) -> Result<Box<dyn Translator>, CharsetError> {
        match self.factories.get(&fold_name(name)) {
            Some(factory) => factory(),
            None => Err(CharsetError::UnsupportedCharset(name.to_string())),
        }
    }

    /// Folded names of all registered charsets, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered charsets.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

/// Canonical form of a charset name: ASCII lowercase with `-`, `_` and
/// spaces removed.
fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
