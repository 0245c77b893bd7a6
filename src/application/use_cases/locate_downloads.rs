// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{DownloadLink, ScoredMatch};
use crate::domain::services::match_ranker::rank;
use crate::infrastructure::catalog::{CatalogClient, CatalogError};
use tracing::info;

/// 下载定位用例
///
/// 串联搜索、排序与补全，并为选中的匹配项提取下载链接
pub struct LocateDownloadsUseCase {
    catalog: CatalogClient,
    similarity_threshold: f64,
}

impl LocateDownloadsUseCase {
    pub fn new(catalog: CatalogClient, similarity_threshold: f64) -> Self {
        Self {
            catalog,
            similarity_threshold,
        }
    }

    /// Search the catalog for a game title and return enriched, ranked
    /// matches.
    ///
    /// Ranking completes over the whole candidate set before any enrichment
    /// fetch is issued; enrichment then runs in ranked order, so result order
    /// is deterministic. An empty result means "no viable matches", not an
    /// error. A failed *search* fetch propagates: without a listing the whole
    /// operation is meaningless.
    pub async fn find_matches(&self, game_title: &str) -> Result<Vec<ScoredMatch>, CatalogError> {
        let candidates = self.catalog.search(game_title).await?;

        let mut matches = rank(game_title, &candidates, self.similarity_threshold);
        info!(count = matches.len(), "viable matches after ranking");

        self.catalog.enrich(&mut matches).await;
        Ok(matches)
    }

    /// Extract mirror links for a match the caller has chosen.
    pub async fn download_links(
        &self,
        chosen: &ScoredMatch,
    ) -> Result<Vec<DownloadLink>, CatalogError> {
        self.catalog.download_links(&chosen.link).await
    }
}
