//! Media player contract and the RuTube player
//!
//! A host asks every registered player which URLs it supports, prefers the
//! highest-ranked one, then asks it to embed. The RuTube player carries no
//! state between those calls: the match is recomputed from the URLs and
//! passed explicitly into the builder.

use crate::builder::{EmbedBuilder, EmbedOptions, EmbedRequest, EmbedResult, SizePicker, StringLookup};
use crate::candidate::CandidateUrl;
use crate::error::Result;
use crate::matcher::{self, MatchResult};
use crate::render::{TemplateRenderer, EMBED_TEMPLATE};
use crate::settings::SettingsProvider;
use std::cmp::Reverse;

/// Host services a player needs to produce an embed
#[derive(Clone, Copy)]
pub struct HostServices<'a> {
    /// Localized strings
    pub strings: &'a dyn StringLookup,
    /// Default size policy
    pub sizes: &'a dyn SizePicker,
    /// Plugin configuration
    pub settings: &'a dyn SettingsProvider,
    /// Template engine
    pub renderer: &'a dyn TemplateRenderer,
}

/// An external media player that can embed some URLs
pub trait MediaPlayer {
    /// URLs from the set this player can embed
    fn list_supported_urls(&self, urls: &[CandidateUrl]) -> Vec<CandidateUrl>;

    /// Domain markers a link scanner can look for
    fn embeddable_markers(&self) -> &[&str];

    /// Preference among players that support the same URL; higher wins
    fn rank(&self) -> i32;

    /// Render embed markup, or `None` when the URLs are not supported
    fn embed(
        &self,
        urls: &[CandidateUrl],
        name: Option<&str>,
        width: Option<u32>,
        height: Option<u32>,
        host: &HostServices<'_>,
    ) -> Result<Option<String>>;
}

/// Player for rutube.ru videos
#[derive(Debug, Clone, Copy, Default)]
pub struct RutubePlayer;

impl RutubePlayer {
    /// Rank among players handling the same URL
    pub const RANK: i32 = 1201;

    /// Domains this player embeds from
    pub const MARKERS: [&'static str; 1] = ["rutube.ru"];

    /// Create the player
    pub fn new() -> Self {
        Self
    }

    /// Match candidate URLs
    pub fn match_urls(&self, urls: &[CandidateUrl]) -> MatchResult {
        matcher::match_urls(urls)
    }

    /// Build the embed parameters without rendering
    pub fn embed_result(
        &self,
        urls: &[CandidateUrl],
        name: Option<&str>,
        width: Option<u32>,
        height: Option<u32>,
        host: &HostServices<'_>,
    ) -> Option<EmbedResult> {
        let result = self.match_urls(urls);
        let url = urls.first()?;
        let request = EmbedRequest::from_match(&result, url, name, width, height)?;
        let options = EmbedOptions {
            no_cookie: host.settings.no_cookie(),
        };

        Some(EmbedBuilder::new(host.strings, host.sizes).build(&request, options))
    }
}

impl MediaPlayer for RutubePlayer {
    fn list_supported_urls(&self, urls: &[CandidateUrl]) -> Vec<CandidateUrl> {
        if self.match_urls(urls).is_match() {
            urls.to_vec()
        } else {
            Vec::new()
        }
    }

    fn embeddable_markers(&self) -> &[&str] {
        &Self::MARKERS
    }

    fn rank(&self) -> i32 {
        Self::RANK
    }

    fn embed(
        &self,
        urls: &[CandidateUrl],
        name: Option<&str>,
        width: Option<u32>,
        height: Option<u32>,
        host: &HostServices<'_>,
    ) -> Result<Option<String>> {
        let embed = match self.embed_result(urls, name, width, height, host) {
            Some(embed) => embed,
            None => return Ok(None),
        };

        tracing::debug!("Rendering RuTube embed {}", embed.embed_url);
        let html = host.renderer.render(EMBED_TEMPLATE, &embed)?;
        Ok(Some(html))
    }
}

/// Check if text mentions any of the player's markers
pub fn is_relevant(player: &dyn MediaPlayer, text: &str) -> bool {
    let text = text.to_lowercase();
    player
        .embeddable_markers()
        .iter()
        .any(|marker| text.contains(&marker.to_lowercase()))
}

/// Pick the highest-ranked player supporting the URLs
///
/// On equal rank the earlier player wins.
pub fn select_player<'p>(
    players: &[&'p dyn MediaPlayer],
    urls: &[CandidateUrl],
) -> Option<&'p dyn MediaPlayer> {
    players
        .iter()
        .copied()
        .filter(|player| !player.list_supported_urls(urls).is_empty())
        .min_by_key(|player| Reverse(player.rank()))
}
