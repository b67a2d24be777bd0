use std::path::{Path, PathBuf};

use marketscout_core::{AppConfig, Mode, ProductRecord, SourcesConfig};
use marketscout_publish::Publisher;
use marketscout_scraper::{EtsyScraper, PinterestScraper};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{dedupe_by_title, IntelEngine};

fn test_config(reports_dir: &Path) -> AppConfig {
    AppConfig {
        mode: Mode::Test,
        log_level: "info".to_string(),
        sources_path: PathBuf::from("config/sources.yaml"),
        reports_dir: reports_dir.to_path_buf(),
        publish_enabled: false,
        github_owner: None,
        github_repo: "intel-reports".to_string(),
        github_branch: "main".to_string(),
        request_timeout_secs: 5,
        request_delay_ms: 0,
        user_agent: "marketscout-test".to_string(),
        max_trends: 10,
        max_competitors: 5,
    }
}

fn sources_from_yaml(yaml: &str) -> SourcesConfig {
    serde_yaml::from_str(yaml).unwrap()
}

fn engine_against(server_uri: &str, config: &AppConfig, sources: SourcesConfig) -> IntelEngine {
    let worktree = config.reports_dir.parent().unwrap();
    IntelEngine::with_parts(
        config,
        sources,
        PinterestScraper::with_base_url(config, server_uri).unwrap(),
        EtsyScraper::with_base_url(config, server_uri).unwrap(),
        Publisher::with_worktree(config, worktree),
    )
}

fn product(title: &str, price: f64) -> ProductRecord {
    ProductRecord {
        title: title.to_string(),
        price,
        currency: "$".to_string(),
        shop: "SomeShop".to_string(),
        reviews: 0,
        link: "https://example.test/listing/1".to_string(),
        source: "etsy".to_string(),
    }
}

#[test]
fn dedupe_keeps_first_occurrence() {
    let deduped = dedupe_by_title(vec![
        product("Kawaii Cats", 4.99),
        product("Forest Animals", 6.50),
        product("Kawaii Cats", 9.99),
    ]);

    assert_eq!(deduped.len(), 2);
    assert_eq!(deduped[0].title, "Kawaii Cats");
    assert!((deduped[0].price - 4.99).abs() < f64::EPSILON);
    assert_eq!(deduped[1].title, "Forest Animals");
}

#[tokio::test]
async fn failing_sources_still_produce_a_local_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir.path().join("reports"));
    let sources = sources_from_yaml(
        "business:\n  name: Asobo Creations\n  competitors: [Mythographic]\n\
         pinterest:\n  enabled: true\n  boards: [coloring pages]\n\
         etsy:\n  enabled: true\n  track_competitors: true\n  categories: [coloring book]\n",
    );

    let outcome = engine_against(&server.uri(), &config, sources).run().await.unwrap();

    assert!(outcome.success);
    assert!(!outcome.published);
    let saved = outcome.local_path.expect("report saved locally");
    let content = std::fs::read_to_string(&saved).unwrap();
    assert!(content.starts_with("# Daily Market Intel: Asobo Creations"));
    assert!(content.contains("### coloring pages (0 pins)"));
    assert!(content.contains("_No pins found for this category._"));
    assert!(content.contains("Products tracked: 0"));
    // Shop analysis failures still surface as unavailable rows.
    assert!(content.contains("| Mythographic | unavailable:"));
}

#[tokio::test]
async fn products_are_deduped_across_categories() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
            <div data-listing-id="1">
              <h3>Kawaii Coloring Book</h3>
              <span class="currency-value">7.99</span>
              <span class="reviews">(87 reviews)</span>
              <a href="/listing/1">go</a>
            </div>
            <div data-listing-id="2">
              <h3>Mandala Pages</h3>
              <span class="currency-value">4.50</span>
              <span class="reviews">(12 reviews)</span>
              <a href="/listing/2">go</a>
            </div>
            </body></html>"#,
        ))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir.path().join("reports"));
    // Two categories hitting the same page: four raw hits, two unique titles.
    let sources = sources_from_yaml(
        "business:\n  name: Asobo Creations\n  competitors: []\n\
         pinterest:\n  enabled: false\n  boards: []\n\
         etsy:\n  enabled: true\n  track_competitors: false\n  categories: [coloring book, printable coloring pages]\n",
    );

    let outcome = engine_against(&server.uri(), &config, sources).run().await.unwrap();

    let content = std::fs::read_to_string(outcome.local_path.unwrap()).unwrap();
    assert!(content.contains("Products tracked: 2"));
    assert!(content.contains("Kawaii Coloring Book"));
}
