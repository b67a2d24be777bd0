use serde::{Deserialize, Serialize};

/// A single trending image/topic scraped from a Pinterest search page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendRecord {
    /// Pin alt-text, truncated to 100 characters.
    pub title: String,
    /// Pin image URL, when the `src` attribute was present.
    pub image: Option<String>,
    /// Source tag, always `"pinterest"`.
    pub source: String,
}

/// Trend records for one search category, order-preserving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTrends {
    pub category: String,
    pub trends: Vec<TrendRecord>,
    pub count: usize,
}

/// A single marketplace listing scraped from an Etsy search page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Listing title, truncated to 100 characters.
    pub title: String,
    /// Listing price; `0.0` when no price could be resolved.
    pub price: f64,
    /// ISO 4217 currency code, always `"USD"`.
    pub currency: String,
    /// Shop name, truncated to 50 characters; empty when unresolvable.
    pub shop: String,
    /// Review count extracted from free text; `0` when absent.
    pub reviews: u32,
    /// Absolute listing URL.
    pub link: String,
    /// Source tag, always `"etsy"`.
    pub source: String,
}

/// Free-text stats for one competitor shop.
///
/// Each field independently falls back to `"N/A"` when no selector resolves
/// it. `error` is set only on total fetch failure, in which case the other
/// fields carry their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopStats {
    pub name: String,
    pub sales: String,
    pub rating: String,
    pub listing_count: String,
    pub joined: String,
    pub error: Option<String>,
}

impl ShopStats {
    /// A stats record for a shop that could not be fetched at all.
    #[must_use]
    pub fn unavailable(name: &str, error: String) -> Self {
        Self {
            name: name.to_string(),
            sales: "N/A".to_string(),
            rating: "N/A".to_string(),
            listing_count: "N/A".to_string(),
            joined: "N/A".to_string(),
            error: Some(error),
        }
    }
}

/// Descriptive price statistics over the positive-priced products of a run.
///
/// `average`/`min`/`max` are 2-decimal display strings; `sample_size` counts
/// only the strictly positive prices that entered the computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingSummary {
    pub average: String,
    pub min: String,
    pub max: String,
    pub sample_size: usize,
    pub recommendation: String,
}

/// Keyword tags matched against the union of all trend titles.
///
/// Each list preserves the canonical vocabulary order and contains no
/// duplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendInsights {
    pub styles: Vec<String>,
    pub colors: Vec<String>,
    pub themes: Vec<String>,
}

impl TrendInsights {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty() && self.colors.is_empty() && self.themes.is_empty()
    }
}

/// Everything collected during one run. Built fresh each run; only the
/// rendered report is persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunData {
    pub trends: Vec<CategoryTrends>,
    pub trend_insights: Option<TrendInsights>,
    pub products: Vec<ProductRecord>,
    pub pricing: Option<PricingSummary>,
    pub competitors: Vec<ShopStats>,
}

impl RunData {
    /// Total trend records across all categories.
    #[must_use]
    pub fn trend_count(&self) -> usize {
        self.trends.iter().map(|t| t.trends.len()).sum()
    }
}

/// Outcome of publishing one report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishOutcome {
    pub success: bool,
    pub published: bool,
    /// Remote blob URL when published.
    pub url: Option<String>,
    /// Local file path when saved without publishing.
    pub local_path: Option<String>,
    /// Explanation for a non-published outcome (e.g. `"no-changes"`).
    pub reason: Option<String>,
}
