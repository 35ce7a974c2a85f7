//! RuTube media embedding
//!
//! This crate recognizes RuTube video URLs and turns them into iframe embed
//! parameters for a host content platform. Host services (strings, sizing,
//! settings, templates) are reached through traits so every call is a pure
//! request/response transaction.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod candidate;
pub mod error;
pub mod matcher;
pub mod player;
pub mod render;
pub mod settings;
pub mod time;

pub use builder::{
    escape_html, DefaultVideoSize, EmbedBuilder, EmbedOptions, EmbedRequest, EmbedResult,
    SizePicker, StringLookup,
};
pub use candidate::CandidateUrl;
pub use error::{EmbedError, Result};
pub use matcher::{is_rutube_url, match_urls, MatchResult};
pub use player::{is_relevant, select_player, HostServices, MediaPlayer, RutubePlayer};
pub use render::{IframeRenderer, TemplateRenderer, EMBED_TEMPLATE};
pub use settings::{RutubeSettings, SettingsProvider};
pub use time::{parse_start_seconds, start_time_param};
