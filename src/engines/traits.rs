// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非成功HTTP状态码
    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),
    /// 超时
    #[error("Timeout")]
    Timeout,
}

impl FetchError {
    /// 判断错误是否可重试
    ///
    /// # 返回值
    ///
    /// 如果错误是可重试的则返回true，否则返回false
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::RequestFailed(e) => {
                e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
            }
            FetchError::HttpStatus(status) => (500..600).contains(status),
            FetchError::Timeout => true,
        }
    }
}

/// 页面抓取引擎
///
/// 抓取任意绝对URL并返回HTML文本；HTML解析由调用方在同步作用域内完成，
/// 失败与成功必须明确区分，不允许以空内容表示成功
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 抓取页面内容
    ///
    /// # 参数
    ///
    /// * `url` - 目标绝对URL
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 页面HTML文本
    /// * `Err(FetchError)` - 抓取过程中出现的错误
    async fn fetch_page(&self, url: &Url) -> Result<String, FetchError>;

    /// 获取引擎名称
    fn name(&self) -> &'static str;
}
