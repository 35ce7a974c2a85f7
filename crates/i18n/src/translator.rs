//! Fluent-backed translator for plugin strings
//!
//! Loads the bundled `.ftl` resources for every shipped language and formats
//! messages for the active language, falling back to English.

use crate::lang::{self, Language};
use fluent::{FluentBundle, FluentResource};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur while loading translations
#[derive(Debug, Error)]
pub enum I18nError {
    /// Language code could not be parsed or is not shipped
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// Fluent resource failed to parse or load
    #[error("Resource error for {lang}: {message}")]
    Resource {
        /// Language code of the failing resource
        lang: &'static str,
        /// Error details
        message: String,
    },
}

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Translator holding one fluent bundle per shipped language
pub struct Translator {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    current: Language,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("languages", &self.bundles.keys().collect::<Vec<_>>())
            .field("current", &self.current)
            .finish()
    }
}

impl Translator {
    /// Create a translator with all shipped languages loaded
    pub fn new(current: Language) -> Result<Self> {
        let mut bundles = HashMap::new();
        for language in Language::ALL {
            bundles.insert(language, load_bundle(language)?);
        }
        Ok(Self { bundles, current })
    }

    /// Create a translator for the best match among requested locales
    pub fn negotiated<S: AsRef<str>>(requested: &[S]) -> Result<Self> {
        Self::new(lang::negotiate(requested))
    }

    /// Create a translator for an exact language code
    pub fn for_code(code: &str) -> Result<Self> {
        let id = code
            .parse()
            .map_err(|_| I18nError::InvalidLanguage(code.to_string()))?;
        let language =
            Language::from_langid(&id).ok_or_else(|| I18nError::InvalidLanguage(code.to_string()))?;
        Self::new(language)
    }

    /// Active language
    pub fn language(&self) -> Language {
        self.current
    }

    /// Switch the active language
    pub fn set_language(&mut self, language: Language) {
        self.current = language;
    }

    /// Format a message in the active language, falling back to English
    pub fn get(&self, id: &str) -> Option<String> {
        self.format(self.current, id)
            .or_else(|| self.format(Language::default(), id))
    }

    /// Format a message, or the `[[id]]` placeholder when it is missing
    pub fn get_or_placeholder(&self, id: &str) -> String {
        self.get(id).unwrap_or_else(|| {
            tracing::warn!("Missing translation for '{}'", id);
            format!("[[{}]]", id)
        })
    }

    fn format(&self, language: Language, id: &str) -> Option<String> {
        let bundle = self.bundles.get(&language)?;
        let message = bundle.get_message(id)?;
        let pattern = message.value()?;

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::warn!("Formatting '{}' in {} reported {:?}", id, language.code(), errors);
        }
        Some(value.into_owned())
    }
}

fn load_bundle(language: Language) -> Result<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(language.source().to_string()).map_err(
        |(_, errors)| I18nError::Resource {
            lang: language.code(),
            message: format!("{:?}", errors),
        },
    )?;

    let mut bundle = FluentBundle::new(vec![language.langid()]);
    // Plugin strings end up in HTML attributes; no bidi isolation marks.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| I18nError::Resource {
            lang: language.code(),
            message: format!("{:?}", errors),
        })?;

    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_languages_load() {
        let translator = Translator::new(Language::English).unwrap();
        assert_eq!(translator.language(), Language::English);
        for language in Language::ALL {
            assert!(translator.format(language, "pluginname").is_some());
        }
    }

    #[test]
    fn test_pluginname() {
        let translator = Translator::new(Language::Russian).unwrap();
        assert_eq!(translator.get("pluginname"), Some("RuTube".to_string()));
    }

    #[test]
    fn test_language_switch() {
        let mut translator = Translator::new(Language::English).unwrap();
        assert_eq!(translator.get("nocookie").unwrap(), "Use no-cookie domain");

        translator.set_language(Language::Russian);
        assert_eq!(translator.get("nocookie").unwrap(), "Использовать домен без cookie");
    }

    #[test]
    fn test_missing_message_placeholder() {
        let translator = Translator::new(Language::English).unwrap();
        assert_eq!(translator.get("does_not_exist"), None);
        assert_eq!(translator.get_or_placeholder("does_not_exist"), "[[does_not_exist]]");
    }

    #[test]
    fn test_negotiated() {
        let translator = Translator::negotiated(&["ru-RU", "en"]).unwrap();
        assert_eq!(translator.language(), Language::Russian);
    }

    #[test]
    fn test_for_code() {
        assert_eq!(Translator::for_code("ru").unwrap().language(), Language::Russian);
        assert!(matches!(
            Translator::for_code("de"),
            Err(I18nError::InvalidLanguage(code)) if code == "de"
        ));
    }
}
