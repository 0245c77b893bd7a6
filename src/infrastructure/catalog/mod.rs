// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 目录站点集成模块
///
/// 提供搜索列表解析、匹配项元数据补全与下载链接提取
pub mod enrichment;
pub mod links;
pub mod search;

use crate::engines::traits::{FetchError, PageFetcher};
use std::sync::Arc;
use thiserror::Error;
use url::Url;

/// 目录站点错误类型
#[derive(Error, Debug)]
pub enum CatalogError {
    /// 抓取失败
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
    /// 无效URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// 目录站点客户端
///
/// 持有注入的抓取引擎与站点基地址；列表搜索、补全与链接提取
/// 共用同一抓取通道，便于测试时统一替换
pub struct CatalogClient {
    fetcher: Arc<dyn PageFetcher>,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(fetcher: Arc<dyn PageFetcher>, base_url: Url) -> Self {
        Self { fetcher, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn fetcher(&self) -> &dyn PageFetcher {
        self.fetcher.as_ref()
    }
}
