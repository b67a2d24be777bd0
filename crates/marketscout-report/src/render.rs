//! Report rendering: [`RunData`] in, Markdown out.
//!
//! Pure functions of their inputs — the filename depends only on the run
//! date, and the body never fails on missing data: any section whose inputs
//! are empty renders placeholder text instead of being omitted.

use std::fmt::Write as _;

use chrono::NaiveDate;

use marketscout_core::RunData;

/// How many trend titles are printed per category before eliding.
const TITLES_PER_CATEGORY: usize = 5;

/// Deterministic report filename for a run date: `intel-report-YYYY-MM-DD.md`.
#[must_use]
pub fn report_filename(date: NaiveDate) -> String {
    format!("intel-report-{}.md", date.format("%Y-%m-%d"))
}

/// Render the full Markdown report, emitting sections in the configured
/// order. Unknown section identifiers are warned about and skipped.
#[must_use]
pub fn render(data: &RunData, sections: &[String], business_name: &str, date: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Daily Market Intel: {business_name}");
    let _ = writeln!(out, "\n_Run date: {}_\n", date.format("%Y-%m-%d"));

    for section in sections {
        match section.as_str() {
            "executive-summary" => executive_summary(&mut out, data),
            "trending-topics" => trending_topics(&mut out, data),
            "competitor-activity" => competitor_activity(&mut out, data),
            "opportunity-alerts" => opportunity_alerts(&mut out, data),
            "action-items" => action_items(&mut out, data),
            other => {
                tracing::warn!(section = other, "unknown report section; skipping");
            }
        }
    }

    out
}

fn executive_summary(out: &mut String, data: &RunData) {
    let _ = writeln!(out, "## Executive Summary\n");
    let _ = writeln!(
        out,
        "- Trend records collected: {} (across {} categories)",
        data.trend_count(),
        data.trends.len()
    );
    let _ = writeln!(out, "- Products tracked: {}", data.products.len());
    let _ = writeln!(out, "- Competitor shops analyzed: {}", data.competitors.len());
    match &data.pricing {
        Some(pricing) => {
            let _ = writeln!(out, "- Market read: {}", pricing.recommendation);
        }
        None => {
            let _ = writeln!(out, "- Market read: no pricing data collected this run");
        }
    }
    out.push('\n');
}

fn trending_topics(out: &mut String, data: &RunData) {
    let _ = writeln!(out, "## Trending Topics\n");

    if data.trends.is_empty() {
        let _ = writeln!(out, "_No trend data collected this run._\n");
    } else {
        for batch in &data.trends {
            let _ = writeln!(out, "### {} ({} pins)\n", batch.category, batch.count);
            if batch.trends.is_empty() {
                let _ = writeln!(out, "_No pins found for this category._\n");
                continue;
            }
            for trend in batch.trends.iter().take(TITLES_PER_CATEGORY) {
                let _ = writeln!(out, "- {}", trend.title);
            }
            if batch.trends.len() > TITLES_PER_CATEGORY {
                let _ = writeln!(out, "- … and {} more", batch.trends.len() - TITLES_PER_CATEGORY);
            }
            out.push('\n');
        }
    }

    if let Some(insights) = &data.trend_insights {
        let _ = writeln!(out, "**Matched signals**\n");
        let _ = writeln!(out, "- Styles: {}", tag_list(&insights.styles));
        let _ = writeln!(out, "- Colors: {}", tag_list(&insights.colors));
        let _ = writeln!(out, "- Themes: {}", tag_list(&insights.themes));
        out.push('\n');
    }
}

fn competitor_activity(out: &mut String, data: &RunData) {
    let _ = writeln!(out, "## Competitor Activity\n");

    if data.competitors.is_empty() {
        let _ = writeln!(out, "_No competitor data collected this run._\n");
        return;
    }

    let _ = writeln!(out, "| Shop | Sales | Rating | Listings | Joined |");
    let _ = writeln!(out, "| --- | --- | --- | --- | --- |");
    for shop in &data.competitors {
        if let Some(error) = &shop.error {
            let _ = writeln!(out, "| {} | unavailable: {error} | | | |", shop.name);
        } else {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} | {} |",
                shop.name, shop.sales, shop.rating, shop.listing_count, shop.joined
            );
        }
    }
    out.push('\n');
}

fn opportunity_alerts(out: &mut String, data: &RunData) {
    let _ = writeln!(out, "## Opportunity Alerts\n");

    match &data.pricing {
        None => {
            let _ = writeln!(out, "_No positive-priced products found this run._\n");
        }
        Some(pricing) => {
            let _ = writeln!(
                out,
                "- Price range: ${} – ${} (average ${}, {} listings sampled)",
                pricing.min, pricing.max, pricing.average, pricing.sample_size
            );
            let _ = writeln!(out, "- {}", pricing.recommendation);
            out.push('\n');
        }
    }

    // Surface the most-reviewed listings as proven demand.
    let mut ranked: Vec<_> = data.products.iter().filter(|p| p.reviews > 0).collect();
    ranked.sort_by(|a, b| b.reviews.cmp(&a.reviews));
    if !ranked.is_empty() {
        let _ = writeln!(out, "**Proven sellers**\n");
        for product in ranked.iter().take(3) {
            let _ = writeln!(
                out,
                "- {} (${:.2}, {} reviews)",
                product.title, product.price, product.reviews
            );
        }
        out.push('\n');
    }
}

fn action_items(out: &mut String, data: &RunData) {
    let _ = writeln!(out, "## Action Items\n");

    let mut wrote_any = false;

    if let Some(insights) = &data.trend_insights {
        if !insights.styles.is_empty() {
            let _ = writeln!(
                out,
                "- [ ] Draft listings around trending styles: {}",
                tag_list(&insights.styles)
            );
            wrote_any = true;
        }
        if !insights.themes.is_empty() {
            let _ = writeln!(
                out,
                "- [ ] Refresh tags/keywords for themes: {}",
                tag_list(&insights.themes)
            );
            wrote_any = true;
        }
    }
    if let Some(pricing) = &data.pricing {
        let _ = writeln!(
            out,
            "- [ ] Revisit price points against market average ${}",
            pricing.average
        );
        wrote_any = true;
    }
    if !data.competitors.is_empty() {
        let _ = writeln!(
            out,
            "- [ ] Review {} competitor shop(s) for new listings",
            data.competitors.len()
        );
        wrote_any = true;
    }

    if !wrote_any {
        let _ = writeln!(out, "_Nothing actionable collected this run._");
    }
    out.push('\n');
}

fn tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        "none matched".to_string()
    } else {
        tags.join(", ")
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
