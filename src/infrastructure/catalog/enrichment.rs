// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::ScoredMatch;
use crate::domain::services::time_resolver::{resolve_time_info, TIME_UNAVAILABLE};
use crate::infrastructure::catalog::CatalogClient;
use tracing::{debug, warn};

impl CatalogClient {
    /// Fill in `time_info` for every ranked match from its detail page.
    ///
    /// Fetches run strictly one at a time, in ranked order, to bound load on
    /// the catalog site; the next request is only issued after the previous
    /// one resolves. A failed fetch degrades that match to the
    /// "Time unavailable" sentinel and the loop moves on — enrichment never
    /// fails the pipeline.
    pub async fn enrich(&self, matches: &mut [ScoredMatch]) {
        for m in matches.iter_mut() {
            let time_info = match self.fetcher().fetch_page(&m.link).await {
                Ok(html) => resolve_time_info(&html),
                Err(e) => {
                    warn!(url = %m.link, error = %e, "failed to get time info");
                    TIME_UNAVAILABLE.to_string()
                }
            };

            debug!(title = %m.title, time = %time_info, "enriched match");
            m.time_info = Some(time_info);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ScoredMatch;
    use crate::domain::services::time_resolver::UNKNOWN_TIME;
    use crate::engines::traits::{FetchError, PageFetcher};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use url::Url;

    /// Canned-response fetcher; records request order.
    struct FixtureFetcher {
        pages: HashMap<String, String>,
        failures: Vec<String>,
        requests: Mutex<Vec<String>>,
    }

    impl FixtureFetcher {
        fn new() -> Self {
            Self {
                pages: HashMap::new(),
                failures: Vec::new(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn with_page(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }

        fn with_failure(mut self, url: &str) -> Self {
            self.failures.push(url.to_string());
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageFetcher for FixtureFetcher {
        async fn fetch_page(&self, url: &Url) -> Result<String, FetchError> {
            self.requests.lock().unwrap().push(url.to_string());

            if self.failures.iter().any(|f| f == url.as_str()) {
                return Err(FetchError::HttpStatus(500));
            }
            self.pages
                .get(url.as_str())
                .cloned()
                .ok_or(FetchError::HttpStatus(404))
        }

        fn name(&self) -> &'static str {
            "fixture"
        }
    }

    fn scored(title: &str, url: &str, similarity: f64) -> ScoredMatch {
        ScoredMatch::new(title.to_string(), Url::parse(url).unwrap(), similarity)
    }

    fn client(fetcher: Arc<FixtureFetcher>) -> CatalogClient {
        CatalogClient::new(fetcher, Url::parse("https://catalog.example").unwrap())
    }

    #[tokio::test]
    async fn test_enrich_fills_time_info_from_detail_page() {
        let fetcher = Arc::new(FixtureFetcher::new().with_page(
            "https://catalog.example/portal-2",
            r#"<html><body><div class="time-article updated">May 12, 2024</div></body></html>"#,
        ));
        let mut matches = vec![scored("Portal 2", "https://catalog.example/portal-2", 1.0)];

        client(fetcher).enrich(&mut matches).await;

        assert_eq!(matches[0].time_info.as_deref(), Some("May 12, 2024"));
    }

    #[tokio::test]
    async fn test_enrich_failure_is_isolated_per_match() {
        let fetcher = Arc::new(
            FixtureFetcher::new()
                .with_failure("https://catalog.example/broken")
                .with_page(
                    "https://catalog.example/portal-2",
                    r#"<html><body><div class="time-article">June 1, 2023</div></body></html>"#,
                ),
        );
        let mut matches = vec![
            scored("Broken", "https://catalog.example/broken", 0.9),
            scored("Portal 2", "https://catalog.example/portal-2", 0.5),
        ];

        client(fetcher).enrich(&mut matches).await;

        assert_eq!(matches[0].time_info.as_deref(), Some(TIME_UNAVAILABLE));
        assert_eq!(matches[1].time_info.as_deref(), Some("June 1, 2023"));
    }

    #[tokio::test]
    async fn test_enrich_without_time_markup_yields_unknown_sentinel() {
        let fetcher = Arc::new(FixtureFetcher::new().with_page(
            "https://catalog.example/portal-2",
            "<html><body><p>nothing dated</p></body></html>",
        ));
        let mut matches = vec![scored("Portal 2", "https://catalog.example/portal-2", 1.0)];

        client(fetcher).enrich(&mut matches).await;

        assert_eq!(matches[0].time_info.as_deref(), Some(UNKNOWN_TIME));
    }

    #[tokio::test]
    async fn test_enrich_fetches_sequentially_in_ranked_order() {
        let fetcher = Arc::new(
            FixtureFetcher::new()
                .with_page("https://catalog.example/a", "<html></html>")
                .with_page("https://catalog.example/b", "<html></html>")
                .with_page("https://catalog.example/c", "<html></html>"),
        );
        let mut matches = vec![
            scored("A", "https://catalog.example/a", 0.9),
            scored("B", "https://catalog.example/b", 0.5),
            scored("C", "https://catalog.example/c", 0.3),
        ];

        client(fetcher.clone()).enrich(&mut matches).await;

        assert_eq!(
            fetcher.requests(),
            vec![
                "https://catalog.example/a",
                "https://catalog.example/b",
                "https://catalog.example/c",
            ]
        );
    }
}
