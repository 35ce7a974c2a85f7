//! Supported languages and language negotiation

use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use unic_langid::LanguageIdentifier;

/// Locale id type the negotiator works with
type NegotiatedId = fluent_langneg::LanguageIdentifier;

/// Languages the plugin ships translations for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English (fallback)
    #[default]
    English,
    /// Russian
    Russian,
}

impl Language {
    /// All shipped languages, fallback first
    pub const ALL: [Language; 2] = [Language::English, Language::Russian];

    /// BCP 47 code for the language
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }

    /// Fluent source for the plugin strings in this language
    pub(crate) fn source(&self) -> &'static str {
        match self {
            Language::English => include_str!("../locales/en/media_rutube.ftl"),
            Language::Russian => include_str!("../locales/ru/media_rutube.ftl"),
        }
    }

    /// Language identifier for the language
    pub fn langid(&self) -> LanguageIdentifier {
        // Codes above are static and valid.
        self.code().parse().unwrap_or_default()
    }

    /// Find the shipped language matching a language identifier
    pub fn from_langid(id: &LanguageIdentifier) -> Option<Language> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == id.language.as_str())
    }
}

/// Pick the best shipped language for the requested locales
///
/// Unparseable locale strings are ignored. Falls back to English.
pub fn negotiate<S: AsRef<str>>(requested: &[S]) -> Language {
    let requested: Vec<NegotiatedId> = requested
        .iter()
        .filter_map(|code| code.as_ref().parse().ok())
        .collect();
    let available: Vec<NegotiatedId> = Language::ALL
        .iter()
        .filter_map(|lang| lang.code().parse().ok())
        .collect();
    let default: NegotiatedId = match Language::default().code().parse() {
        Ok(id) => id,
        Err(_) => return Language::default(),
    };

    let supported = negotiate_languages(
        &requested,
        &available,
        Some(&default),
        NegotiationStrategy::Lookup,
    );

    supported
        .first()
        .and_then(|id| {
            Language::ALL
                .into_iter()
                .find(|lang| lang.code() == id.language.as_str())
        })
        .unwrap_or_default()
}
