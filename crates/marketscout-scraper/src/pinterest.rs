//! Pinterest trend extractor.
//!
//! Pulls pin titles out of a search results page. Pinterest renders most of
//! its UI client-side, so the only reliable server-side signal is the `<img>`
//! alt text — that is exactly what we harvest. Extraction failures are never
//! fatal: a failed board yields an empty batch and the run continues.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use scraper::{Html, Selector};

use marketscout_core::{AppConfig, CategoryTrends, TrendRecord};

use crate::client::{build_client, fetch_html};
use crate::error::ScrapeError;
use crate::select::truncate_chars;

const DEFAULT_BASE_URL: &str = "https://www.pinterest.com";

/// Alt texts this short are icons and UI chrome, not pin titles.
const MIN_TITLE_CHARS: usize = 5;

const MAX_TITLE_CHARS: usize = 100;

pub struct PinterestScraper {
    client: reqwest::Client,
    base_url: String,
    /// Politeness throttle applied after every request, success or failure.
    delay: Duration,
    /// Cap on records kept per search category.
    max_trends: usize,
}

impl PinterestScraper {
    /// Creates a scraper pointed at pinterest.com with the configured
    /// timeout, user-agent, throttle, and per-category cap.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, ScrapeError> {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Creates a scraper pointed at an arbitrary origin. Tests use this to
    /// aim at a local mock server.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the HTTP client cannot be built.
    pub fn with_base_url(config: &AppConfig, base_url: &str) -> Result<Self, ScrapeError> {
        let client = build_client(config.request_timeout_secs, &config.user_agent)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            delay: Duration::from_millis(config.request_delay_ms),
            max_trends: config.max_trends,
        })
    }

    fn search_url(&self, query: &str) -> String {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
        format!("{}/search/pins/?q={encoded}", self.base_url)
    }

    /// Search for trending pins matching `query`.
    ///
    /// Never errors: network and parse failures are logged and downgraded to
    /// an empty list. The politeness delay is applied after the request
    /// regardless of outcome.
    pub async fn search_trends(&self, query: &str) -> Vec<TrendRecord> {
        tracing::info!(query, "searching pinterest");

        let result = self.try_search(query).await;
        tokio::time::sleep(self.delay).await;

        match result {
            Ok(trends) => trends,
            Err(e) => {
                tracing::warn!(query, error = %e, "pinterest search failed");
                Vec::new()
            }
        }
    }

    async fn try_search(&self, query: &str) -> Result<Vec<TrendRecord>, ScrapeError> {
        let url = self.search_url(query);
        let body = fetch_html(&self.client, &url).await?;
        Ok(parse_trend_page(&body, self.max_trends))
    }

    /// Fetch trend batches for each configured board, strictly sequentially.
    pub async fn fetch_trending(&self, boards: &[String]) -> Vec<CategoryTrends> {
        let mut batches = Vec::with_capacity(boards.len());
        for board in boards {
            let trends = self.search_trends(board).await;
            batches.push(CategoryTrends {
                category: board.clone(),
                count: trends.len(),
                trends,
            });
        }
        batches
    }
}

/// Extracts trend records from a search page body.
///
/// Keeps `<img>` elements whose alt text is longer than [`MIN_TITLE_CHARS`]
/// characters and whose `src` does not reference an avatar; a missing `src`
/// is not disqualifying. At most `max` records, document order.
pub(crate) fn parse_trend_page(html: &str, max: usize) -> Vec<TrendRecord> {
    let document = Html::parse_document(html);
    let img = Selector::parse("img").expect("valid img selector");

    let mut records = Vec::new();
    for element in document.select(&img) {
        if records.len() >= max {
            break;
        }

        let Some(alt) = element.value().attr("alt") else {
            continue;
        };
        let alt = alt.trim();
        if alt.chars().count() <= MIN_TITLE_CHARS {
            continue;
        }

        let src = element.value().attr("src");
        if src.is_some_and(|s| s.contains("avatar")) {
            continue;
        }

        records.push(TrendRecord {
            title: truncate_chars(alt, MAX_TITLE_CHARS),
            image: src.map(str::to_string),
            source: "pinterest".to_string(),
        });
    }
    records
}

#[cfg(test)]
#[path = "pinterest_test.rs"]
mod tests;
