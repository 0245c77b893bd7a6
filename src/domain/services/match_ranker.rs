// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{Candidate, ScoredMatch};
use crate::domain::services::similarity::similarity;
use crate::domain::services::title_normalizer::normalize;
use tracing::debug;

/// Minimum similarity a candidate needs to stay in the result set.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.2;

/// Filter and rank search candidates against a query title.
///
/// Candidates whose normalized title does not contain the normalized query
/// are rejected before the scorer runs; survivors are scored and kept when
/// they clear `threshold`. The result is sorted by descending similarity
/// with ties keeping listing order. An empty result is a normal outcome.
pub fn rank(query: &str, candidates: &[Candidate], threshold: f64) -> Vec<ScoredMatch> {
    let needle = normalize(query);
    let mut matches = Vec::new();

    for candidate in candidates {
        if candidate.title.trim().is_empty() {
            // Malformed scrape entry, nothing to compare against.
            continue;
        }

        if !normalize(&candidate.title).contains(&needle) {
            debug!(title = %candidate.title, "skipped: does not contain search term");
            continue;
        }

        let score = similarity(query, &candidate.title);
        debug!(title = %candidate.title, similarity = %format!("{:.2}", score), "checking match");

        if score >= threshold {
            matches.push(ScoredMatch::new(
                candidate.title.clone(),
                candidate.link.clone(),
                score,
            ));
        }
    }

    // Stable sort: equal scores keep their listing order.
    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    matches
}

#[cfg(test)]
#[path = "match_ranker_test.rs"]
mod tests;
