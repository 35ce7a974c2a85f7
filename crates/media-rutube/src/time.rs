//! Start time parsing
//!
//! Links carry the start offset either as plain seconds (`t=90`) or as a
//! compound duration (`t=1h2m3s`). The embedded player only takes seconds.

use crate::candidate::CandidateUrl;
use regex::Regex;
use std::sync::OnceLock;

/// Raw start time from a URL: `t`, or `start` when `t` is absent, empty or `0`
pub fn start_time_param(url: &CandidateUrl) -> Option<String> {
    url.param("t")
        .filter(|raw| !is_blank(raw))
        .or_else(|| url.param("start"))
}

fn is_blank(raw: &str) -> bool {
    raw.is_empty() || raw == "0"
}

/// Convert a raw start time into whole seconds
///
/// Numeric input is truncated to an integer. Anything else is read as
/// `(<N>h)?(<N>m)?(<N>s)?` from the start of the string. Unparseable input
/// yields 0; the result never goes below 0.
pub fn parse_start_seconds(raw: Option<&str>) -> u32 {
    let raw = match raw {
        Some(raw) => raw.trim(),
        None => return 0,
    };

    if let Some(seconds) = parse_numeric(raw) {
        return seconds;
    }

    parse_duration(raw)
}

fn parse_numeric(raw: &str) -> Option<u32> {
    let looks_numeric = raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        && raw.chars().any(|c| c.is_ascii_digit());
    if !looks_numeric {
        return None;
    }

    let value: f64 = raw.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    // Float to int casts saturate; negatives land on 0.
    Some(value.trunc() as u32)
}

fn parse_duration(raw: &str) -> u32 {
    static DURATION_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = DURATION_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^(?:([0-9]+)h)?(?:([0-9]+)m)?(?:([0-9]+)s)?").expect("duration pattern compiles")
    });

    let caps = match re.captures(raw) {
        Some(caps) => caps,
        None => return 0,
    };

    [3600u64, 60, 1]
        .iter()
        .enumerate()
        .filter_map(|(i, unit)| {
            // Only ASCII digits are captured, so a parse failure is overflow.
            let value: u64 = caps.get(i + 1)?.as_str().parse().unwrap_or(u64::MAX);
            Some(value.saturating_mul(*unit))
        })
        .fold(0u64, u64::saturating_add)
        .min(u64::from(u32::MAX)) as u32
}
