//! Etsy market extractor: product search results and competitor shop pages.
//!
//! Every field is resolved through the fallback tables in [`crate::rules`],
//! so a markup change on one selector degrades that field instead of the
//! whole record. Request-level failures are logged and downgraded to empty
//! data (search) or an error-carrying stats record (shop analysis).

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use regex::Regex;
use scraper::{Html, Selector};

use marketscout_core::{AppConfig, ProductRecord, ShopStats};

use crate::client::{build_client, extract_origin, fetch_html};
use crate::error::ScrapeError;
use crate::rules;
use crate::select::{first_match, truncate_chars};

const DEFAULT_BASE_URL: &str = "https://www.etsy.com";

const MAX_TITLE_CHARS: usize = 100;
const MAX_SHOP_CHARS: usize = 50;

pub struct EtsyScraper {
    client: reqwest::Client,
    base_url: String,
    /// Politeness throttle applied after every request, success or failure.
    delay: Duration,
}

impl EtsyScraper {
    /// Creates a scraper pointed at etsy.com.
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
        })
    }

    fn search_url(&self, query: &str) -> String {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
        format!("{}/search?q={encoded}", self.base_url)
    }

    fn shop_url(&self, shop_name: &str) -> String {
        let encoded = utf8_percent_encode(shop_name, NON_ALPHANUMERIC);
        format!("{}/shop/{encoded}", self.base_url)
    }

    /// Search listings for `query`, returning at most `limit` records.
    ///
    /// Never errors: request failures are logged and downgraded to an empty
    /// list. The politeness delay is applied after the request regardless of
    /// outcome.
    pub async fn search_products(&self, query: &str, limit: usize) -> Vec<ProductRecord> {
        tracing::info!(query, limit, "searching etsy");

        let result = self.try_search(query, limit).await;
        tokio::time::sleep(self.delay).await;

        match result {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(query, error = %e, "etsy search failed");
                Vec::new()
            }
        }
    }

    async fn try_search(&self, query: &str, limit: usize) -> Result<Vec<ProductRecord>, ScrapeError> {
        let url = self.search_url(query);
        let origin = extract_origin(&url);
        let body = fetch_html(&self.client, &url).await?;
        Ok(parse_search_page(&body, limit, &origin))
    }

    /// Extract headline stats for one shop.
    ///
    /// Individual fields fall back to `"N/A"`; a total fetch failure yields a
    /// record carrying only the name and the error message. Never fatal to
    /// the run.
    pub async fn analyze_shop(&self, shop_name: &str) -> ShopStats {
        tracing::info!(shop = shop_name, "analyzing etsy shop");

        let url = self.shop_url(shop_name);
        let result = fetch_html(&self.client, &url).await;
        tokio::time::sleep(self.delay).await;

        match result {
            Ok(body) => parse_shop_page(&body, shop_name),
            Err(e) => {
                tracing::warn!(shop = shop_name, error = %e, "shop analysis failed");
                ShopStats::unavailable(shop_name, e.to_string())
            }
        }
    }

    /// Analyze competitor shops sequentially, capped at `max`.
    pub async fn track_competitors(&self, names: &[String], max: usize) -> Vec<ShopStats> {
        let mut stats = Vec::new();
        for name in names.iter().take(max) {
            stats.push(self.analyze_shop(name).await);
        }
        stats
    }
}

/// Extracts product records from a search results body.
///
/// Listings with no resolvable title are skipped; all other fields degrade to
/// defaults. Relative links are absolutized against `origin`.
pub(crate) fn parse_search_page(html: &str, limit: usize, origin: &str) -> Vec<ProductRecord> {
    let document = Html::parse_document(html);
    let listing = Selector::parse("[data-listing-id]").expect("valid listing selector");
    let anchor = Selector::parse("a[href]").expect("valid anchor selector");
    let digits = Regex::new(r"\d+").expect("valid digits regex");

    let mut products = Vec::new();
    for element in document.select(&listing) {
        if products.len() >= limit {
            break;
        }

        let Some(title) = first_match(&element, rules::LISTING_TITLE) else {
            continue;
        };

        let price = first_match(&element, rules::LISTING_PRICE)
            .map(|raw| parse_price(&raw))
            .unwrap_or(0.0);

        let shop = first_match(&element, rules::LISTING_SHOP).unwrap_or_default();

        let reviews = first_match(&element, rules::LISTING_REVIEWS)
            .and_then(|text| {
                digits
                    .find(&text)
                    .and_then(|m| m.as_str().parse::<u32>().ok())
            })
            .unwrap_or(0);

        let link = element
            .select(&anchor)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(|href| absolutize(href, origin))
            .unwrap_or_default();

        products.push(ProductRecord {
            title: truncate_chars(&title, MAX_TITLE_CHARS),
            price,
            currency: "USD".to_string(),
            shop: truncate_chars(&shop, MAX_SHOP_CHARS),
            reviews,
            link,
            source: "etsy".to_string(),
        });
    }
    products
}

/// Extracts shop stats from a shop page body, defaulting each field
/// independently to `"N/A"`.
pub(crate) fn parse_shop_page(html: &str, shop_name: &str) -> ShopStats {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let field = |rules| first_match(&root, rules).unwrap_or_else(|| "N/A".to_string());

    ShopStats {
        name: shop_name.to_string(),
        sales: field(rules::SHOP_SALES),
        rating: field(rules::SHOP_RATING),
        listing_count: field(rules::SHOP_LISTING_COUNT),
        joined: field(rules::SHOP_JOINED),
        error: None,
    }
}

/// Strips everything but digits and dots, then parses; unparseable price
/// text (including multiple dots left over from thousands separators)
/// degrades to `0.0`.
fn parse_price(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    cleaned.parse::<f64>().unwrap_or(0.0)
}

fn absolutize(href: &str, origin: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{origin}{href}")
    } else {
        format!("{origin}/{href}")
    }
}

#[cfg(test)]
#[path = "etsy_test.rs"]
mod tests;
