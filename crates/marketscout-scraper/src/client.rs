//! Shared HTTP plumbing for the page extractors.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScrapeError;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Builds the reqwest client used by both extractors, with the configured
/// per-request timeout and user-agent.
///
/// # Errors
///
/// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client` cannot
/// be constructed (e.g., invalid TLS config).
pub(crate) fn build_client(timeout_secs: u64, user_agent: &str) -> Result<Client, ScrapeError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Fetch the HTML body of a URL with browser-like `Accept` headers.
///
/// # Errors
///
/// - [`ScrapeError::UnexpectedStatus`] — any non-2xx status.
/// - [`ScrapeError::Http`] — network, TLS, or timeout failure.
pub(crate) async fn fetch_html(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, ACCEPT_HTML)
        .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_owned(),
        });
    }

    Ok(response.text().await?)
}

/// Extracts the scheme+host origin from a URL, for absolutizing relative
/// listing links.
///
/// Given `"https://www.etsy.com/search?q=x"`, returns `"https://www.etsy.com"`.
pub(crate) fn extract_origin(url: &str) -> String {
    reqwest::Url::parse(url).map_or_else(
        |_| {
            // fallback: take "https://host" by splitting on '/' and taking first 3 parts
            url.trim_end_matches('/')
                .splitn(4, '/')
                .take(3)
                .collect::<Vec<_>>()
                .join("/")
        },
        |u| u.origin().ascii_serialization(),
    )
}
