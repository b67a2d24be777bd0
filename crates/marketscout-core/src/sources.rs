use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The business being monitored, plus the competitor shops to track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessConfig {
    pub name: String,
    /// This business's own Etsy shop handle, if it has one.
    #[serde(default)]
    pub etsy_shop: Option<String>,
    /// Search niches the business competes in. Informational for the report.
    #[serde(default)]
    pub niches: Vec<String>,
    /// Competitor shop handles analyzed during a run.
    #[serde(default)]
    pub competitors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinterestSources {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Search phrases fetched once per run, one politeness delay apart.
    #[serde(default)]
    pub boards: Vec<String>,
}

impl Default for PinterestSources {
    fn default() -> Self {
        Self {
            enabled: true,
            boards: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtsySources {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub track_competitors: bool,
    /// Product search categories; results are concatenated then de-duplicated.
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Default for EtsySources {
    fn default() -> Self {
        Self {
            enabled: true,
            track_competitors: true,
            categories: Vec::new(),
        }
    }
}

/// Fixed keyword vocabularies matched against trend titles, case-insensitive.
/// Canonical list order is preserved in the insights output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordVocab {
    #[serde(default = "default_styles")]
    pub styles: Vec<String>,
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
    #[serde(default = "default_themes")]
    pub themes: Vec<String>,
}

impl Default for KeywordVocab {
    fn default() -> Self {
        Self {
            styles: default_styles(),
            colors: default_colors(),
            themes: default_themes(),
        }
    }
}

/// Mean-price boundaries for the pricing recommendation.
///
/// Strict comparisons: a mean exactly at `low_max` or `high_min` is mid-range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PricingThresholds {
    #[serde(default = "default_low_max")]
    pub low_max: f64,
    #[serde(default = "default_high_min")]
    pub high_min: f64,
}

impl Default for PricingThresholds {
    fn default() -> Self {
        Self {
            low_max: default_low_max(),
            high_min: default_high_min(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Ordered section identifiers; the renderer emits them in this order.
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sections: default_sections(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    pub business: BusinessConfig,
    #[serde(default)]
    pub pinterest: PinterestSources,
    #[serde(default)]
    pub etsy: EtsySources,
    #[serde(default)]
    pub keywords: KeywordVocab,
    #[serde(default)]
    pub pricing: PricingThresholds,
    #[serde(default)]
    pub report: ReportConfig,
}

fn default_true() -> bool {
    true
}

fn default_styles() -> Vec<String> {
    ["kawaii", "anime", "whimsical", "vintage", "minimalist", "boho"]
        .map(String::from)
        .to_vec()
}

fn default_colors() -> Vec<String> {
    ["pastel", "vibrant", "monochrome", "earthy", "neon"]
        .map(String::from)
        .to_vec()
}

fn default_themes() -> Vec<String> {
    ["animals", "fantasy", "nature", "mandalas", "flowers"]
        .map(String::from)
        .to_vec()
}

fn default_low_max() -> f64 {
    5.0
}

fn default_high_min() -> f64 {
    15.0
}

fn default_sections() -> Vec<String> {
    [
        "executive-summary",
        "trending-topics",
        "competitor-activity",
        "opportunity-alerts",
        "action-items",
    ]
    .map(String::from)
    .to_vec()
}

/// Load and validate the sources configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_sources(path: &Path) -> Result<SourcesConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SourcesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let sources: SourcesConfig = serde_yaml::from_str(&content)?;

    validate_sources(&sources)?;

    Ok(sources)
}

fn validate_sources(sources: &SourcesConfig) -> Result<(), ConfigError> {
    if sources.business.name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "business name must be non-empty".to_string(),
        ));
    }

    if sources.pricing.low_max >= sources.pricing.high_min {
        return Err(ConfigError::Validation(format!(
            "pricing thresholds out of order: low_max {} must be below high_min {}",
            sources.pricing.low_max, sources.pricing.high_min
        )));
    }

    let mut seen = HashSet::new();
    for section in &sources.report.sections {
        if !seen.insert(section.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate report section: '{section}'"
            )));
        }
    }

    Ok(())
}
