//! Internationalization for the RuTube media plugin
//!
//! This crate provides i18n support with translation loading,
//! language negotiation, and message formatting.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lang;
pub mod translator;

pub use lang::{negotiate, Language};
pub use translator::{I18nError, Translator};
