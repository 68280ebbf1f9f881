// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含服务器、存储、抓取和遥测等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 存储配置
    pub storage: StorageSettings,
    /// 抓取配置
    pub crawler: CrawlerSettings,
    /// 遥测配置
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 任务目录的父目录
    pub output_dir: String,
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerSettings {
    /// 单次请求超时时间（秒）
    pub request_timeout_secs: u64,
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 单个页面内图片的并发下载数，1 表示顺序下载
    pub per_page_concurrency: usize,
}

impl CrawlerSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for CrawlerSettings {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            user_agent: default_user_agent(),
            per_page_concurrency: 1,
        }
    }
}

/// 遥测配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelemetrySettings {
    /// Prometheus 导出器监听地址，未设置时不启动
    pub prometheus_addr: Option<String>,
}

fn default_user_agent() -> String {
    format!("imgcrawl/{}", env!("CARGO_PKG_VERSION"))
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `IMGCRAWL__*` 环境变量，后者覆盖前者
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 1337)?
            .set_default("storage.output_dir", ".")?
            .set_default("crawler.request_timeout_secs", 30)?
            .set_default("crawler.user_agent", default_user_agent())?
            .set_default("crawler.per_page_concurrency", 1)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("IMGCRAWL").separator("__"));

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        if settings.crawler.per_page_concurrency == 0 {
            settings.crawler.per_page_concurrency = 1;
        }
        Ok(settings)
    }

    /// 服务器监听地址
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
