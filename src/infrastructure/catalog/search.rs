// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::Candidate;
use crate::infrastructure::catalog::{CatalogClient, CatalogError};
use crate::utils::url_utils::resolve_url;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info};
use url::Url;

// Search listing markup on the catalog site.
static LISTING_ITEM: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("ul.modern-articles.clean > li").expect("Failed to parse listing selector")
});
static ITEM_TITLE: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.content-list > a > h2").expect("Failed to parse title selector")
});
static ITEM_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.content-list > a").expect("Failed to parse link selector"));

/// Parse a search-results page into candidates (fixture-testable).
///
/// Listing entries with a missing title or href, or an href that cannot be
/// resolved against `base_url`, are skipped silently.
pub fn parse_search_results(html: &str, base_url: &Url) -> Vec<Candidate> {
    let document = Html::parse_document(html);
    let mut candidates = Vec::new();

    for item in document.select(&LISTING_ITEM) {
        let title = item
            .select(&ITEM_TITLE)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let href = item
            .select(&ITEM_LINK)
            .next()
            .and_then(|e| e.value().attr("href"))
            .unwrap_or_default();

        if title.is_empty() || href.is_empty() {
            debug!("skipped malformed listing entry");
            continue;
        }

        match resolve_url(base_url, href) {
            Ok(link) => candidates.push(Candidate::new(title, link)),
            Err(e) => debug!(href = %href, error = %e, "skipped entry with unparsable link"),
        }
    }

    candidates
}

impl CatalogClient {
    /// Build the catalog search URL for a query title.
    pub fn search_url(&self, query: &str) -> Result<Url, CatalogError> {
        let url = format!(
            "{}/?s={}",
            self.base_url().as_str().trim_end_matches('/'),
            urlencoding::encode(query)
        );
        Ok(Url::parse(&url)?)
    }

    /// Fetch the search listing for a query and parse it into candidates.
    pub async fn search(&self, query: &str) -> Result<Vec<Candidate>, CatalogError> {
        let url = self.search_url(query)?;
        info!(query = %query, url = %url, "searching catalog");

        let html = self.fetcher().fetch_page(&url).await?;
        let candidates = parse_search_results(&html, self.base_url());
        info!(count = candidates.len(), "found search results");

        Ok(candidates)
    }
}
