//! Candidate URLs handed in by the host

use crate::error::{EmbedError, Result};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// An absolute URL offered to the player for embedding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateUrl {
    url: Url,
}

impl CandidateUrl {
    /// Parse an absolute URL
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input.trim()).map_err(|e| {
            tracing::debug!("Rejected candidate URL '{}': {}", input, e);
            EmbedError::InvalidUrl(input.to_string())
        })?;
        Ok(Self { url })
    }

    /// Serialized URL text
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Value of a named query parameter
    ///
    /// When a parameter repeats, the last occurrence wins.
    pub fn param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .filter(|(key, _)| key == name)
            .last()
            .map(|(_, value)| value.into_owned())
    }

    /// Underlying parsed URL
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl From<Url> for CandidateUrl {
    fn from(url: Url) -> Self {
        Self { url }
    }
}

impl FromStr for CandidateUrl {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CandidateUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
