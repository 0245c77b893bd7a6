// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use url::Url;

/// 已评分的匹配结果
///
/// 由排序器创建，`time_info` 在补全阶段写入一次，之后不再变化
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredMatch {
    pub title: String,
    pub link: Url,
    pub similarity: f64,
    pub time_info: Option<String>,
}

impl ScoredMatch {
    pub fn new(title: String, link: Url, similarity: f64) -> Self {
        Self {
            title,
            link,
            similarity,
            time_info: None,
        }
    }

    /// Render the selector label used by the presentation layer:
    /// `[87%] Elden Ring (May 12, 2024)`.
    pub fn display_title(&self) -> String {
        let score = (self.similarity * 100.0).round() as i64;
        let time = self.time_info.as_deref().unwrap_or("pending");
        format!("[{}%] {} ({})", score, self.title, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_with_time_info() {
        let mut m = ScoredMatch::new(
            "Elden Ring".to_string(),
            Url::parse("https://example.com/elden-ring").unwrap(),
            0.874,
        );
        m.time_info = Some("May 12, 2024".to_string());
        assert_eq!(m.display_title(), "[87%] Elden Ring (May 12, 2024)");
    }

    #[test]
    fn test_display_title_before_enrichment() {
        let m = ScoredMatch::new(
            "Elden Ring".to_string(),
            Url::parse("https://example.com/elden-ring").unwrap(),
            1.0,
        );
        assert_eq!(m.display_title(), "[100%] Elden Ring (pending)");
    }
}
