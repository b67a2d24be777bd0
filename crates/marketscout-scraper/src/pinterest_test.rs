use super::*;

fn pin_img(alt: &str, src: &str) -> String {
    format!(r#"<img alt="{alt}" src="{src}">"#)
}

#[test]
fn parse_keeps_pins_with_meaningful_alt_text() {
    let html = format!(
        "<html><body>{}{}</body></html>",
        pin_img("kawaii cat coloring page", "https://i.pinimg.com/1.jpg"),
        pin_img("whimsical fox art print", "https://i.pinimg.com/2.jpg"),
    );
    let records = parse_trend_page(&html, 10);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "kawaii cat coloring page");
    assert_eq!(records[0].image.as_deref(), Some("https://i.pinimg.com/1.jpg"));
    assert_eq!(records[0].source, "pinterest");
}

#[test]
fn parse_skips_short_and_missing_alt_text() {
    let html = format!(
        "<html><body>{}{}<img src=\"https://i.pinimg.com/3.jpg\"></body></html>",
        pin_img("icon", "https://i.pinimg.com/1.jpg"),
        pin_img("loooong enough title", "https://i.pinimg.com/2.jpg"),
    );
    let records = parse_trend_page(&html, 10);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "loooong enough title");
}

#[test]
fn parse_skips_avatar_images() {
    let html = format!(
        "<html><body>{}{}</body></html>",
        pin_img("some user profile", "https://i.pinimg.com/avatars/user.jpg"),
        pin_img("fantasy dragon coloring", "https://i.pinimg.com/pin.jpg"),
    );
    let records = parse_trend_page(&html, 10);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "fantasy dragon coloring");
}

#[test]
fn parse_keeps_pins_without_src() {
    // No src at all cannot be identified as an avatar, so the pin stays.
    let html = r#"<html><body><img alt="lazy-loaded pin title"></body></html>"#;
    let records = parse_trend_page(html, 10);
    assert_eq!(records.len(), 1);
    assert!(records[0].image.is_none());
}

#[test]
fn parse_caps_at_max_records() {
    let pins: String = (0..25)
        .map(|i| pin_img(&format!("trending pin number {i}"), "https://i.pinimg.com/p.jpg"))
        .collect();
    let html = format!("<html><body>{pins}</body></html>");
    let records = parse_trend_page(&html, 10);
    assert_eq!(records.len(), 10);
    assert_eq!(records[0].title, "trending pin number 0");
}

#[test]
fn parse_truncates_titles_to_100_chars() {
    let long_alt = "a".repeat(250);
    let html = format!("<html><body>{}</body></html>", pin_img(&long_alt, "x.jpg"));
    let records = parse_trend_page(&html, 10);
    assert_eq!(records[0].title.chars().count(), 100);
}

#[test]
fn parse_empty_page_yields_empty_vec() {
    assert!(parse_trend_page("<html><body></body></html>", 10).is_empty());
    assert!(parse_trend_page("", 10).is_empty());
}

#[test]
fn search_url_percent_encodes_query() {
    let config = test_config();
    let scraper = PinterestScraper::with_base_url(&config, "https://example.test").unwrap();
    assert_eq!(
        scraper.search_url("kawaii coloring pages"),
        "https://example.test/search/pins/?q=kawaii%20coloring%20pages"
    );
}

fn test_config() -> AppConfig {
    AppConfig {
        mode: marketscout_core::Mode::Test,
        log_level: "info".to_string(),
        sources_path: "./config/sources.yaml".into(),
        reports_dir: "./reports".into(),
        publish_enabled: false,
        github_owner: None,
        github_repo: "market-intel".to_string(),
        github_branch: "main".to_string(),
        request_timeout_secs: 5,
        request_delay_ms: 0,
        user_agent: "marketscout-test/0.1".to_string(),
        max_trends: 10,
        max_competitors: 5,
    }
}
