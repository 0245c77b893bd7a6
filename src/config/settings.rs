// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含目录站点与匹配流程的所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 目录站点配置
    pub catalog: CatalogSettings,
    /// 匹配配置
    pub matching: MatchingSettings,
}

/// 目录站点配置设置
#[derive(Debug, Deserialize)]
pub struct CatalogSettings {
    /// 目录站点基地址
    pub base_url: String,
    /// 抓取请求User-Agent
    pub user_agent: String,
    /// 抓取超时时间（秒）
    pub timeout_secs: u64,
}

/// 匹配配置设置
#[derive(Debug, Deserialize)]
pub struct MatchingSettings {
    /// 相似度阈值（0.0-1.0），低于该值的候选项被丢弃
    pub similarity_threshold: f64,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default catalog settings
            .set_default("catalog.base_url", "https://repack-games.com")?
            .set_default(
                "catalog.user_agent",
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
            )?
            .set_default("catalog.timeout_secs", 30)?
            // Default matching settings
            .set_default("matching.similarity_threshold", 0.2)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("REPACKRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
