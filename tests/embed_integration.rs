//! Embed Pipeline Integration Tests
//!
//! End-to-end tests from candidate URL to rendered iframe, using the bundled
//! translator, file-backed settings and the stock iframe renderer.

use rutube_embed::media_rutube::{select_player, MediaPlayer};
use rutube_embed::{
    match_urls, parse_start_seconds, CandidateUrl, DefaultVideoSize, EmbedBuilder, EmbedOptions,
    EmbedRequest, HostServices, IframeRenderer, Language, MatchResult, RutubePlayer,
    RutubeSettings, Translator,
};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn urls(list: &[&str]) -> Vec<CandidateUrl> {
    list.iter().map(|u| CandidateUrl::parse(u).unwrap()).collect()
}

/// Test every recognized URL shape yields the video ID
#[test]
fn test_recognized_shapes() {
    init_tracing();

    for prefix in ["https://", "http://"] {
        for host in ["rutube.ru", "www.rutube.ru", "m.rutube.ru"] {
            for private in ["", "private/"] {
                let text = format!("{}{}/video/{}d2f3a9c1/", prefix, host, private);
                assert_eq!(
                    match_urls(&urls(&[text.as_str()])),
                    MatchResult::SingleVideo {
                        video_id: "d2f3a9c1".to_string()
                    },
                    "{}",
                    text
                );
            }
        }
    }
}

/// Test sets with zero or several URLs never match
#[test]
fn test_multi_url_sets_rejected() {
    init_tracing();

    assert_eq!(match_urls(&[]), MatchResult::NoMatch);
    let pair = urls(&["https://rutube.ru/video/a/", "https://rutube.ru/video/a/"]);
    assert_eq!(match_urls(&pair), MatchResult::NoMatch);
}

/// Test the documented start time conversions
#[test]
fn test_start_time_examples() {
    assert_eq!(parse_start_seconds(Some("90")), 90);
    assert_eq!(parse_start_seconds(Some("1h2m3s")), 3723);
    assert_eq!(parse_start_seconds(Some("")), 0);
    assert_eq!(parse_start_seconds(Some("2m")), 120);
}

/// Test full pipeline with Russian strings and file-backed no-cookie settings
#[test]
fn test_full_pipeline_no_cookie() {
    init_tracing();

    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("media_rutube.json");
    std::fs::write(&settings_path, r#"{"nocookie": true}"#).unwrap();

    let settings = RutubeSettings::load(&settings_path).unwrap();
    let translator = Translator::for_code("ru").unwrap();
    let sizes = DefaultVideoSize::default();
    let host = HostServices {
        strings: &translator,
        sizes: &sizes,
        settings: &settings,
        renderer: &IframeRenderer,
    };

    let html = RutubePlayer::new()
        .embed(
            &urls(&["https://rutube.ru/video/private/abc123/?p=Ke_y&start=45"]),
            Some("https://rutube.ru/video/private/abc123/"),
            None,
            None,
            &host,
        )
        .unwrap()
        .unwrap();

    assert!(html.contains("src=\"https://www.rutube-nocookie.com/embed/abc123?t=45&amp;p=Ke_y\""));
    assert!(html.contains("title=\"RuTube\""));
    assert!(html.contains("width=\"400\" height=\"300\""));
}

/// Test default settings use the regular player and escape titles
#[test]
fn test_full_pipeline_default_settings() {
    init_tracing();

    let temp_dir = TempDir::new().unwrap();
    let settings = RutubeSettings::load(temp_dir.path().join("missing.json")).unwrap();
    let translator = Translator::new(Language::English).unwrap();
    let sizes = DefaultVideoSize::default();
    let host = HostServices {
        strings: &translator,
        sizes: &sizes,
        settings: &settings,
        renderer: &IframeRenderer,
    };

    let html = RutubePlayer::new()
        .embed(
            &urls(&["https://www.rutube.ru/video/abc123/"]),
            Some("Q&A <live>"),
            Some(640),
            Some(360),
            &host,
        )
        .unwrap()
        .unwrap();

    assert!(html.contains("src=\"https://rutube.ru/play/embed/abc123\""));
    assert!(html.contains("title=\"Q&amp;A &lt;live&gt;\""));
    assert!(html.contains("width=\"640\" height=\"360\""));
}

/// Test builder output for the documented embed URL cases
#[test]
fn test_builder_examples() {
    let translator = Translator::new(Language::English).unwrap();
    let sizes = DefaultVideoSize::default();
    let builder = EmbedBuilder::new(&translator, &sizes);

    let mut req = EmbedRequest::new("abc123");
    let result = builder.build(&req, EmbedOptions { no_cookie: false });
    assert_eq!(result.embed_url, "https://rutube.ru/play/embed/abc123");
    assert_eq!(result.title, "RuTube");

    req.start_seconds = 45;
    let result = builder.build(&req, EmbedOptions { no_cookie: false });
    assert_eq!(result.embed_url, "https://rutube.ru/play/embed/abc123?t=45");

    let result = builder.build(&req, EmbedOptions { no_cookie: true });
    assert_eq!(result.embed_url, "https://www.rutube-nocookie.com/embed/abc123?t=45");

    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("embedurl").is_some());
}

/// Test host-side player selection for a RuTube link
#[test]
fn test_player_selection() {
    let rutube = RutubePlayer::new();
    let players: Vec<&dyn MediaPlayer> = vec![&rutube];

    let chosen = select_player(&players, &urls(&["https://rutube.ru/video/abc/"])).unwrap();
    assert_eq!(chosen.rank(), 1201);
    assert_eq!(chosen.embeddable_markers(), &["rutube.ru"]);

    assert!(select_player(&players, &urls(&["https://vk.com/video1_2"])).is_none());
}
