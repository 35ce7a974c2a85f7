//! RuTube URL recognition
//!
//! Recognized shape:
//! - `https://rutube.ru/video/<id>/`
//! - `https://www.rutube.ru/video/<id>`
//! - `https://m.rutube.ru/video/private/<id>/?p=<key>`

use crate::candidate::CandidateUrl;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Outcome of matching candidate URLs against the RuTube pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MatchResult {
    /// Not a RuTube video link, or not exactly one URL
    NoMatch,
    /// A single RuTube video
    #[serde(rename_all = "camelCase")]
    SingleVideo {
        /// Video ID from the URL path
        video_id: String,
    },
}

impl MatchResult {
    /// Check if anything matched
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::SingleVideo { .. })
    }

    /// Get the matched video ID
    pub fn video_id(&self) -> Option<&str> {
        match self {
            MatchResult::SingleVideo { video_id } => Some(video_id),
            MatchResult::NoMatch => None,
        }
    }
}

fn video_regex() -> &'static Regex {
    static VIDEO_REGEX: OnceLock<Regex> = OnceLock::new();
    VIDEO_REGEX.get_or_init(|| {
        Regex::new(r"^(?i:https?)://(?i:(?:(?:www|m)\.)?rutube\.ru)/video/(?:private/)?([^/?#]+)/?(?:[?#]|$)")
            .expect("video pattern compiles")
    })
}

fn extract_video_id(text: &str) -> Option<&str> {
    let id = video_regex().captures(text)?.get(1)?.as_str();
    // `/video/private/` with nothing after it is not a video
    if id.eq_ignore_ascii_case("private") {
        return None;
    }
    Some(id)
}

/// Check if raw text is a RuTube video link
pub fn is_rutube_url(text: &str) -> bool {
    extract_video_id(text.trim()).is_some()
}

/// Match candidate URLs against the RuTube video pattern
///
/// Only a set of exactly one URL is accepted; there is no fallback between
/// alternatives.
pub fn match_urls(urls: &[CandidateUrl]) -> MatchResult {
    let url = match urls {
        [url] => url,
        _ => {
            tracing::debug!("RuTube matcher skipped {} candidate URLs", urls.len());
            return MatchResult::NoMatch;
        }
    };

    match extract_video_id(url.as_str()) {
        Some(video_id) => {
            tracing::debug!("Matched RuTube video {}", video_id);
            MatchResult::SingleVideo {
                video_id: video_id.to_string(),
            }
        }
        None => MatchResult::NoMatch,
    }
}
