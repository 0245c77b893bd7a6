// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::DownloadLink;
use crate::infrastructure::catalog::{CatalogClient, CatalogError};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info};
use url::Url;

// Mirror anchors carry a fixed marker class on the detail page.
static DOWNLOAD_ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.enjoy-css").expect("Failed to parse download selector"));

/// Extract mirror links from a detail page (fixture-testable).
///
/// One entry per marker anchor, document order, duplicates preserved; `host`
/// is the hostname component of each absolute href. Anchors without a
/// parsable absolute href are skipped.
pub fn parse_download_links(html: &str) -> Vec<DownloadLink> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    for anchor in document.select(&DOWNLOAD_ANCHOR) {
        let href = anchor.value().attr("href").unwrap_or_default();
        match Url::parse(href) {
            Ok(url) => {
                let host = url.host_str().unwrap_or_default().to_string();
                links.push(DownloadLink::new(host, url));
            }
            Err(e) => debug!(href = %href, error = %e, "skipped anchor with unparsable href"),
        }
    }

    links
}

impl CatalogClient {
    /// Fetch a chosen match's detail page and extract its mirror links.
    ///
    /// Unlike enrichment there is no sentinel fallback here: a failed fetch
    /// propagates, since the caller explicitly asked for this page and must
    /// react (an empty link list on a fetched page is still `Ok`).
    pub async fn download_links(&self, page_url: &Url) -> Result<Vec<DownloadLink>, CatalogError> {
        info!(url = %page_url, "scraping download links");

        let html = self.fetcher().fetch_page(page_url).await?;
        let links = parse_download_links(&html);
        info!(count = links.len(), "found download links");

        Ok(links)
    }
}
