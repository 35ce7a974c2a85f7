//! Embed URL building
//!
//! Turns a matched video plus its request parameters into the values the
//! embed template needs. Markup is left to the [`TemplateRenderer`].
//!
//! [`TemplateRenderer`]: crate::render::TemplateRenderer

use crate::candidate::CandidateUrl;
use crate::matcher::MatchResult;
use crate::time::{parse_start_seconds, start_time_param};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use url::form_urlencoded;

/// Embed base for the regular player
pub const EMBED_BASE: &str = "https://rutube.ru/play/embed";

/// Embed base for the no-cookie player
pub const NOCOOKIE_EMBED_BASE: &str = "https://www.rutube-nocookie.com/embed";

/// String identifier of the localized plugin name
pub const PLUGIN_NAME_STRING: &str = "pluginname";

/// Localized string lookup provided by the host
#[cfg_attr(test, mockall::automock)]
pub trait StringLookup {
    /// Localized text for a string identifier
    fn get_string(&self, identifier: &str) -> String;
}

impl StringLookup for i18n::Translator {
    fn get_string(&self, identifier: &str) -> String {
        self.get_or_placeholder(identifier)
    }
}

/// Host policy for default video dimensions
#[cfg_attr(test, mockall::automock)]
pub trait SizePicker {
    /// Resolve width and height from optional hints
    fn pick(&self, width: Option<u32>, height: Option<u32>) -> (u32, u32);
}

/// Fixed default video size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultVideoSize {
    /// Default width in pixels
    pub width: u32,
    /// Default height in pixels
    pub height: u32,
}

impl Default for DefaultVideoSize {
    fn default() -> Self {
        Self {
            width: 400,
            height: 300,
        }
    }
}

impl SizePicker for DefaultVideoSize {
    fn pick(&self, width: Option<u32>, height: Option<u32>) -> (u32, u32) {
        match width.filter(|w| *w > 0) {
            // Without a width the height hint means nothing on its own.
            None => (self.width, self.height),
            Some(width) => (width, height.filter(|h| *h > 0).unwrap_or(self.height)),
        }
    }
}

/// Embed options read from plugin settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedOptions {
    /// Use the no-cookie embed domain
    pub no_cookie: bool,
}

/// Everything needed to build an embed for one video
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedRequest {
    /// Video ID
    pub video_id: String,
    /// Start offset in seconds
    pub start_seconds: u32,
    /// Width hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Caller-supplied name for the media
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Playlist the video is played within (`list` parameter)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
    /// Access key of a private video (`p` parameter)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
}

impl EmbedRequest {
    /// Create a request for a video with no extra parameters
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            ..Default::default()
        }
    }

    /// Build a request from a match and the URL it came from
    ///
    /// Returns `None` when nothing matched.
    pub fn from_match(
        result: &MatchResult,
        url: &CandidateUrl,
        name: Option<&str>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Option<Self> {
        let video_id = result.video_id()?;
        let non_empty = |value: String| if value.is_empty() { None } else { Some(value) };

        Some(Self {
            video_id: video_id.to_string(),
            start_seconds: parse_start_seconds(start_time_param(url).as_deref()),
            width,
            height,
            title: name.map(str::to_string),
            playlist_id: url.param("list").and_then(non_empty),
            private_key: url.param("p").and_then(non_empty),
        })
    }
}

/// Parameters handed to the embed template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedResult {
    /// Iframe source URL
    #[serde(rename = "embedurl")]
    pub embed_url: String,
    /// Iframe width
    pub width: u32,
    /// Iframe height
    pub height: u32,
    /// HTML-escaped iframe title
    pub title: String,
}

/// Builds embed results using host string and size services
pub struct EmbedBuilder<'a> {
    strings: &'a dyn StringLookup,
    sizes: &'a dyn SizePicker,
}

impl<'a> EmbedBuilder<'a> {
    /// Create a builder over host services
    pub fn new(strings: &'a dyn StringLookup, sizes: &'a dyn SizePicker) -> Self {
        Self { strings, sizes }
    }

    /// Build the embed result for a request
    pub fn build(&self, req: &EmbedRequest, options: EmbedOptions) -> EmbedResult {
        let (width, height) = self.sizes.pick(req.width, req.height);

        EmbedResult {
            embed_url: embed_url(req, options),
            width,
            height,
            title: self.resolve_title(req.title.as_deref()),
        }
    }

    /// Pick the iframe title
    ///
    /// Empty names and names that are just a link fall back to the plugin
    /// name. The result is always HTML-escaped.
    pub fn resolve_title(&self, name: Option<&str>) -> String {
        let name = name.map(str::trim).unwrap_or_default();
        if name.is_empty() || name.starts_with("http") {
            escape_html(&self.strings.get_string(PLUGIN_NAME_STRING))
        } else {
            escape_html(name)
        }
    }
}

/// Compose the embed URL for a request
pub fn embed_url(req: &EmbedRequest, options: EmbedOptions) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();
    if req.start_seconds > 0 {
        params.push(("t", req.start_seconds.to_string()));
    }
    if let Some(list) = token_param("list", req.playlist_id.as_deref()) {
        params.push(("list", list));
    }
    if let Some(key) = token_param("p", req.private_key.as_deref()) {
        params.push(("p", key));
    }

    let base = if options.no_cookie {
        NOCOOKIE_EMBED_BASE
    } else {
        EMBED_BASE
    };

    let mut url = format!("{}/{}", base, req.video_id);
    if !params.is_empty() {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &params {
            query.append_pair(name, value);
        }
        url.push('?');
        url.push_str(&query.finish());
    }
    url
}

/// Accept only `[A-Za-z0-9_-]+` identifiers
fn token_param(name: &str, value: Option<&str>) -> Option<String> {
    let value = value?;
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        tracing::debug!("Dropping invalid '{}' parameter: {}", name, value);
        return None;
    }
    Some(value.to_string())
}

/// Escape text for HTML content and attributes
///
/// Numeric character references already present in the input survive.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }

    static ENTITY_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = ENTITY_REGEX.get_or_init(|| {
        Regex::new(r"(?i)&amp;#(\d+|x[0-9a-f]+);").expect("entity pattern compiles")
    });
    re.replace_all(&escaped, "&#${1};").into_owned()
}
