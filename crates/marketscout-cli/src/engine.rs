//! One sequential collection run: gather, aggregate, render, publish.

use std::collections::HashSet;

use chrono::Utc;
use marketscout_core::{AppConfig, ProductRecord, PublishOutcome, RunData, SourcesConfig};
use marketscout_publish::Publisher;
use marketscout_report::{render, report_filename};
use marketscout_scraper::{analyze_pricing, analyze_trends, EtsyScraper, PinterestScraper};

/// Products requested per search category before deduplication.
const PRODUCTS_PER_CATEGORY: usize = 10;

pub(crate) struct IntelEngine {
    config: AppConfig,
    sources: SourcesConfig,
    pinterest: PinterestScraper,
    etsy: EtsyScraper,
    publisher: Publisher,
}

impl IntelEngine {
    pub(crate) fn new(config: &AppConfig, sources: SourcesConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config: config.clone(),
            sources,
            pinterest: PinterestScraper::new(config)?,
            etsy: EtsyScraper::new(config)?,
            publisher: Publisher::new(config),
        })
    }

    /// Assembles an engine from pre-built parts so tests can point the
    /// scrapers at a local server and the publisher at a scratch worktree.
    #[cfg(test)]
    pub(crate) fn with_parts(
        config: &AppConfig,
        sources: SourcesConfig,
        pinterest: PinterestScraper,
        etsy: EtsyScraper,
        publisher: Publisher,
    ) -> Self {
        Self { config: config.clone(), sources, pinterest, etsy, publisher }
    }

    /// Runs the whole pipeline once. Extractor failures degrade to empty
    /// sections; only rendering and local persistence errors are fatal.
    pub(crate) async fn run(&self) -> anyhow::Result<PublishOutcome> {
        let started = Utc::now();
        println!("MarketScout run starting ({} mode)", self.config.mode);
        println!("Business: {}", self.sources.business.name);

        let mut data = RunData::default();

        if self.sources.pinterest.enabled {
            tracing::info!(boards = self.sources.pinterest.boards.len(), "collecting trends");
            data.trends = self.pinterest.fetch_trending(&self.sources.pinterest.boards).await;
            if data.trend_count() > 0 {
                data.trend_insights = Some(analyze_trends(&data.trends, &self.sources.keywords));
            }
        }

        if self.sources.etsy.enabled {
            let mut gathered = Vec::new();
            for category in &self.sources.etsy.categories {
                let products = self.etsy.search_products(category, PRODUCTS_PER_CATEGORY).await;
                gathered.extend(products);
            }
            data.products = dedupe_by_title(gathered);
            data.pricing = analyze_pricing(&data.products, self.sources.pricing);

            if self.sources.etsy.track_competitors {
                data.competitors = self
                    .etsy
                    .track_competitors(
                        &self.sources.business.competitors,
                        self.config.max_competitors,
                    )
                    .await;
            }
        }

        let date = started.date_naive();
        let report = render(
            &data,
            &self.sources.report.sections,
            &self.sources.business.name,
            date,
        );
        let filename = report_filename(date);

        let outcome = self.publisher.publish(&report, &filename, date).await?;
        print_summary(&data, &outcome, &filename);

        Ok(outcome)
    }
}

/// Drops repeat listings that surface under more than one search category.
/// The first occurrence of a title wins.
pub(crate) fn dedupe_by_title(products: Vec<ProductRecord>) -> Vec<ProductRecord> {
    let mut seen = HashSet::new();
    products.into_iter().filter(|p| seen.insert(p.title.clone())).collect()
}

fn print_summary(data: &RunData, outcome: &PublishOutcome, filename: &str) {
    println!("\nRun complete: {filename}");
    println!("  trends:      {}", data.trend_count());
    println!("  products:    {}", data.products.len());
    println!("  competitors: {}", data.competitors.len());
    if outcome.published {
        if let Some(url) = &outcome.url {
            println!("  published:   {url}");
        }
    } else if let Some(path) = &outcome.local_path {
        println!("  saved to:    {path}");
    } else if let Some(reason) = &outcome.reason {
        println!("  skipped:     {reason}");
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
