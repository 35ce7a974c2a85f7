//! RuTube embeds for content platforms
//!
//! Facade over the workspace crates: [`media_rutube`] recognizes RuTube
//! links and builds embed parameters, [`i18n`] supplies localized plugin
//! strings.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use i18n;
pub use media_rutube;

pub use i18n::{Language, Translator};
pub use media_rutube::{
    match_urls, parse_start_seconds, CandidateUrl, DefaultVideoSize, EmbedBuilder, EmbedError,
    EmbedOptions, EmbedRequest, EmbedResult, HostServices, IframeRenderer, MatchResult,
    MediaPlayer, RutubePlayer, RutubeSettings,
};
