// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use url::Url;

/// 搜索列表中的未评分候选项
///
/// 由目录站点搜索结果页解析产生，标题保留原始Unicode标点
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub title: String,
    pub link: Url,
}

impl Candidate {
    pub fn new(title: String, link: Url) -> Self {
        Self { title, link }
    }
}
