//! Aggregation over collected records: keyword tagging of trend titles and
//! descriptive price statistics.
//!
//! Pure functions; vocabulary lists and price thresholds come from the
//! sources configuration so they can be tuned without touching code.

use marketscout_core::sources::{KeywordVocab, PricingThresholds};
use marketscout_core::{CategoryTrends, PricingSummary, ProductRecord, TrendInsights};

/// Match the configured keyword vocabularies against the union of all trend
/// titles, case-insensitive substring containment. Each output list preserves
/// the canonical vocabulary order.
#[must_use]
pub fn analyze_trends(batches: &[CategoryTrends], vocab: &KeywordVocab) -> TrendInsights {
    let text = batches
        .iter()
        .flat_map(|b| b.trends.iter().map(|t| t.title.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ");

    let matched = |keywords: &[String]| -> Vec<String> {
        keywords
            .iter()
            .filter(|k| text.contains(&k.to_lowercase()))
            .cloned()
            .collect()
    };

    TrendInsights {
        styles: matched(&vocab.styles),
        colors: matched(&vocab.colors),
        themes: matched(&vocab.themes),
    }
}

/// Compute mean/min/max over the strictly positive prices in `products`.
///
/// Returns `None` when no positive-priced products exist. The recommendation
/// tag uses strict threshold comparisons: a mean exactly at `low_max` or
/// `high_min` lands in the mid-range bucket.
#[must_use]
pub fn analyze_pricing(
    products: &[ProductRecord],
    thresholds: PricingThresholds,
) -> Option<PricingSummary> {
    let prices: Vec<f64> = products.iter().map(|p| p.price).filter(|p| *p > 0.0).collect();

    if prices.is_empty() {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let average = prices.iter().sum::<f64>() / prices.len() as f64;
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let recommendation = if average < thresholds.low_max {
        "Low price point - consider premium positioning"
    } else if average > thresholds.high_min {
        "High price point - good for quality positioning"
    } else {
        "Mid-range pricing - competitive zone"
    };

    Some(PricingSummary {
        average: format!("{average:.2}"),
        min: format!("{min:.2}"),
        max: format!("{max:.2}"),
        sample_size: prices.len(),
        recommendation: recommendation.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketscout_core::TrendRecord;

    fn batch(titles: &[&str]) -> CategoryTrends {
        let trends: Vec<TrendRecord> = titles
            .iter()
            .map(|t| TrendRecord {
                title: (*t).to_string(),
                image: None,
                source: "pinterest".to_string(),
            })
            .collect();
        CategoryTrends {
            category: "test".to_string(),
            count: trends.len(),
            trends,
        }
    }

    fn product(title: &str, price: f64) -> ProductRecord {
        ProductRecord {
            title: title.to_string(),
            price,
            currency: "USD".to_string(),
            shop: String::new(),
            reviews: 0,
            link: String::new(),
            source: "etsy".to_string(),
        }
    }

    #[test]
    fn keyword_matching_is_case_insensitive() {
        let batches = [batch(&["KAWAII Art prints", "Vintage FLOWERS poster"])];
        let insights = analyze_trends(&batches, &KeywordVocab::default());
        assert_eq!(insights.styles, vec!["kawaii", "vintage"]);
        assert_eq!(insights.themes, vec!["flowers"]);
        assert!(insights.colors.is_empty());
    }

    #[test]
    fn keyword_matching_preserves_vocab_order_and_dedupes() {
        // "anime" appears in two titles but is reported once; order follows
        // the vocabulary, not the titles.
        let batches = [batch(&["whimsical anime set", "anime kawaii bundle"])];
        let insights = analyze_trends(&batches, &KeywordVocab::default());
        assert_eq!(insights.styles, vec!["kawaii", "anime", "whimsical"]);
    }

    #[test]
    fn keyword_matching_spans_categories() {
        let batches = [batch(&["pastel skies"]), batch(&["neon mandalas"])];
        let insights = analyze_trends(&batches, &KeywordVocab::default());
        assert_eq!(insights.colors, vec!["pastel", "neon"]);
        assert_eq!(insights.themes, vec!["mandalas"]);
    }

    #[test]
    fn empty_batches_yield_empty_insights() {
        let insights = analyze_trends(&[], &KeywordVocab::default());
        assert!(insights.is_empty());
    }

    #[test]
    fn pricing_none_without_positive_prices() {
        assert!(analyze_pricing(&[], PricingThresholds::default()).is_none());
        let products = [product("free pattern", 0.0)];
        assert!(analyze_pricing(&products, PricingThresholds::default()).is_none());
    }

    #[test]
    fn pricing_ignores_zero_prices_in_sample() {
        let products = [
            product("a", 10.0),
            product("b", 0.0),
            product("c", 20.0),
        ];
        let summary = analyze_pricing(&products, PricingThresholds::default()).unwrap();
        assert_eq!(summary.sample_size, 2);
        assert_eq!(summary.average, "15.00");
        assert_eq!(summary.min, "10.00");
        assert_eq!(summary.max, "20.00");
    }

    #[test]
    fn pricing_min_average_max_ordering() {
        let products = [product("a", 3.5), product("b", 8.0), product("c", 12.25)];
        let summary = analyze_pricing(&products, PricingThresholds::default()).unwrap();
        let min: f64 = summary.min.parse().unwrap();
        let avg: f64 = summary.average.parse().unwrap();
        let max: f64 = summary.max.parse().unwrap();
        assert!(min <= avg && avg <= max);
    }

    #[test]
    fn recommendation_boundary_below_low() {
        let products = [product("a", 4.99)];
        let summary = analyze_pricing(&products, PricingThresholds::default()).unwrap();
        assert!(summary.recommendation.starts_with("Low price point"));
    }

    #[test]
    fn recommendation_boundary_at_low_is_mid() {
        let products = [product("a", 5.00)];
        let summary = analyze_pricing(&products, PricingThresholds::default()).unwrap();
        assert!(summary.recommendation.starts_with("Mid-range"));
    }

    #[test]
    fn recommendation_boundary_at_high_is_mid() {
        let products = [product("a", 15.00)];
        let summary = analyze_pricing(&products, PricingThresholds::default()).unwrap();
        assert!(summary.recommendation.starts_with("Mid-range"));
    }

    #[test]
    fn recommendation_boundary_above_high() {
        let products = [product("a", 15.01)];
        let summary = analyze_pricing(&products, PricingThresholds::default()).unwrap();
        assert!(summary.recommendation.starts_with("High price point"));
    }

    #[test]
    fn custom_thresholds_shift_buckets() {
        let thresholds = PricingThresholds {
            low_max: 10.0,
            high_min: 12.0,
        };
        let summary = analyze_pricing(&[product("a", 9.0)], thresholds).unwrap();
        assert!(summary.recommendation.starts_with("Low price point"));
    }
}
