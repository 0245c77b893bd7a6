// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use url::Url;

/// 下载镜像链接
///
/// 每个详情页锚点对应一条记录，按文档顺序保留，不去重
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadLink {
    pub host: String,
    pub url: Url,
}

impl DownloadLink {
    pub fn new(host: String, url: Url) -> Self {
        Self { host, url }
    }
}
