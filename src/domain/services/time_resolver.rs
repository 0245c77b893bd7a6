// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Sentinel when the detail page has no recognizable time element.
pub const UNKNOWN_TIME: &str = "Unknown time";

/// Sentinel when the detail page could not be fetched at all.
pub const TIME_UNAVAILABLE: &str = "Time unavailable";

// Positional lookup for the publish heading on the catalog's older post
// layout. Layout-specific and fragile, so it is only trusted when it yields
// non-empty text.
static PUBLISH_HEADING: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("#post-141517 > div:nth-of-type(4) > h3:nth-of-type(2)")
        .expect("Failed to parse publish heading selector")
});

// Update-time selectors, most specific first.
static TIME_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        "body > div.wrap-fullwidth > div.single-content > div.entry-top > div.time-article.updated",
        ".time-article.updated",
        ".time-article",
    ]
    .iter()
    .map(|s| Selector::parse(s).expect("Failed to parse time selector"))
    .collect()
});

static ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("Failed to parse anchor selector"));

/// A single extraction strategy in the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq)]
enum TimeStrategy {
    /// Fixed structural position in the document.
    PublishHeading,
    /// Entry in `TIME_SELECTORS`; anchor text wins over the element's own text.
    TimeSelector(usize),
}

const STRATEGIES: [TimeStrategy; 4] = [
    TimeStrategy::PublishHeading,
    TimeStrategy::TimeSelector(0),
    TimeStrategy::TimeSelector(1),
    TimeStrategy::TimeSelector(2),
];

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

impl TimeStrategy {
    /// Apply one strategy to a parsed document.
    fn apply(&self, document: &Html) -> Option<String> {
        match self {
            TimeStrategy::PublishHeading => {
                let heading = document.select(&PUBLISH_HEADING).next()?;
                let text = element_text(heading);
                if text.is_empty() {
                    return None;
                }
                Some(text)
            }
            TimeStrategy::TimeSelector(index) => {
                let element = document.select(&TIME_SELECTORS[*index]).next()?;
                // A matched element settles the chain even when its text is
                // empty; only a missing element falls through.
                let text = match element.select(&ANCHOR).next() {
                    Some(anchor) => element_text(anchor),
                    None => element_text(element),
                };
                Some(text)
            }
        }
    }
}

/// Resolve a human-readable publication/update time from a detail page.
///
/// Strategies run in priority order and the first success wins; a page with
/// no matching element resolves to [`UNKNOWN_TIME`]. Never fails.
pub fn resolve_time_info(html: &str) -> String {
    let document = Html::parse_document(html);

    for strategy in STRATEGIES {
        if let Some(text) = strategy.apply(&document) {
            debug!(?strategy, time = %text, "resolved time info");
            return text;
        }
    }

    UNKNOWN_TIME.to_string()
}

#[cfg(test)]
#[path = "time_resolver_test.rs"]
mod tests;
