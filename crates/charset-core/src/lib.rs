//! Shared infrastructure for the charset-rs family of streaming charset
//! translators.
//!
//! This crate carries the pieces every charset crate builds on:
//!
//! - [`Translator`], the chunk-at-a-time conversion interface;
//! - [`Registry`], the explicit name-to-factory table an application
//!   populates with the charsets it wants;
//! - [`CharsetError`], the family-wide error type;
//! - [`data`], resolution of on-disk mapping resources.
//!
//! The per-charset implementations live in sibling crates such as
//! `charset-big5`.

pub mod data;
pub mod error;
pub mod registry;
pub mod translator;

pub use error::CharsetError;
pub use registry::{Registry, TranslatorFactory};
pub use translator::{Translator, translate_all};
